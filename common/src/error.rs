use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("empty input, nothing to encode")]
    EmptyInput,
    #[error("alphabet overflow: {0}")]
    AlphabetOverflow(&'static str),
    #[error("malformed container: {0}")]
    MalformedContainer(&'static str),
    #[error("payload bits do not resolve to a symbol")]
    UnknownCode,
}
