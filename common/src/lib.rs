mod error;

pub use error::CodecError;
