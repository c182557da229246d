/*!

huffpack is a lossless compressor in the family of entropy encoders
(statistical compression). It assigns each byte of the input a prefix free
bit code whose length follows the symbol frequency, the classic Huffman
construction: rare symbols get long codes, frequent symbols short ones.

The container written by [`compress`] is self describing. The symbol
histogram travels in the header in front of the packed payload and the
decoder derives the identical tree and code table from it, the tree itself
is never serialized. See the [`container`] module for the exact layout.

In comparison to ANS/FSE coders huffman is limited to whole bits per
symbol, which costs a fraction of a bit per symbol in ratio but keeps
encode and decode trivially simple.

*/

use log::debug;

pub mod compress;
pub mod container;
pub mod decompress;
pub mod metrics;

pub use common::CodecError;
pub use hist::count_simple;
pub use hufftree::build_tree;
pub use hufftree::tree_to_table;

/// compresses `input` into a self describing container
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let counts = count_simple(input);
    container::validate_counts(&counts)?;

    let tree = build_tree(&counts)?;
    let table = tree_to_table(&tree);
    let (payload, trailing_bit_count) = compress::encode_symbols(input, &table);
    debug!(
        "encoded {} bytes into {} payload bytes",
        input.len(),
        payload.len()
    );
    Ok(container::write_container(
        &counts,
        &payload,
        trailing_bit_count,
    ))
}

/// decompresses a container produced by [`compress`] back into the exact
/// original bytes
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let parsed = container::parse_container(input)?;
    let tree = build_tree(&parsed.counts)?;
    let num_symbols = hist::get_total_count(&parsed.counts);
    let out = decompress::decode_payload(&tree, parsed.payload, parsed.trailing_bit_count, num_symbols)?;
    debug!(
        "decoded {} payload bytes into {} bytes",
        parsed.payload.len(),
        out.len()
    );
    Ok(out)
}
