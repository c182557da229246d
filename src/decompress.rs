//! decode side, walks the rebuilt tree bit by bit to emit symbols

use bitstream::BitDstream;
use common::CodecError;
use hufftree::Tree;

/// walks the tree from the root once per output symbol, a zero bit descends
/// left, a one bit right.
///
/// Stops after `num_symbols` symbols, so the pad bits of the last byte are
/// never interpreted as codes. Meaningful bits left over after the last
/// symbol mean the header and the payload disagree.
pub fn decode_payload(
    tree: &Tree,
    payload: &[u8],
    trailing_bit_count: u8,
    num_symbols: u64,
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(num_symbols as usize);
    let mut bit_d = BitDstream::new(payload, trailing_bit_count);

    while (out.len() as u64) < num_symbols {
        let mut node = tree.get_root_node();
        loop {
            if let Some(symbol) = node.symbol() {
                out.push(symbol);
                break;
            }
            let bit = bit_d.read_bit().ok_or(CodecError::UnknownCode)?;
            let next = if bit { node.right() } else { node.left() };
            node = tree.get_node(next.ok_or(CodecError::UnknownCode)?);
        }
    }

    if bit_d.remaining_bits() != 0 {
        return Err(CodecError::MalformedContainer(
            "payload bits left over after the last symbol",
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hist::count_simple;
    use hufftree::build_tree;

    #[test]
    fn test_decode_simple() {
        let counts = count_simple(b"abracadabra");
        let tree = build_tree(&counts).unwrap();
        let out = decode_payload(&tree, &[0b0110_1110, 0b1000_1010, 0b1101_1100], 7, 11).unwrap();
        assert_eq!(out, b"abracadabra");
    }

    #[test]
    fn test_unresolvable_bits() {
        let counts = count_simple(b"aa");
        let tree = build_tree(&counts).unwrap();
        // the one symbol tree has no right child, a one bit leads nowhere
        let out = decode_payload(&tree, &[0b1000_0000], 2, 2);
        assert_eq!(out, Err(CodecError::UnknownCode));
    }

    #[test]
    fn test_bits_exhausted_mid_code() {
        let counts = count_simple(b"abracadabra");
        let tree = build_tree(&counts).unwrap();
        // claims twelve symbols but carries a single bit
        let out = decode_payload(&tree, &[0b0000_0000], 1, 12);
        assert_eq!(out, Err(CodecError::UnknownCode));
    }

    #[test]
    fn test_leftover_bits_rejected() {
        let counts = count_simple(b"aa");
        let tree = build_tree(&counts).unwrap();
        // two symbols decoded, six declared bits never consumed
        let out = decode_payload(&tree, &[0b0000_0000], 8, 2);
        assert!(matches!(out, Err(CodecError::MalformedContainer(_))));
    }
}
