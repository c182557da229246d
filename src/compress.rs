//! encode side, per symbol code lookup packed into the payload bit stream

use bitstream::BitCstream;
use hufftree::CodeTable;

/// looks up the code of every input symbol and packs the bits MSB-first.
/// Returns the packed payload and the trailing bit count of its last byte
pub fn encode_symbols(input: &[u8], table: &CodeTable) -> (Vec<u8>, u8) {
    let mut bit_c = BitCstream::with_capacity(input.len());

    for symbol in input {
        let code = table[*symbol as usize];
        bit_c.add_bits(code.val, code.number_bits as u32);
    }
    bit_c.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hufftree::Code;

    #[test]
    fn test_encode_symbols() {
        let mut table: CodeTable = [Code::default(); 256];
        table[b'a' as usize] = Code {
            val: 0,
            number_bits: 1,
        };
        table[b'b' as usize] = Code {
            val: 0b10,
            number_bits: 2,
        };
        table[b'c' as usize] = Code {
            val: 0b11,
            number_bits: 2,
        };

        let (payload, trailing) = encode_symbols(b"abcab", &table);
        // 0 10 11 0 10
        assert_eq!(payload, vec![0b0101_1010]);
        assert_eq!(trailing, 8);
    }

    #[test]
    fn test_encode_partial_last_byte() {
        let mut table: CodeTable = [Code::default(); 256];
        table[b'a' as usize] = Code {
            val: 0,
            number_bits: 1,
        };

        let (payload, trailing) = encode_symbols(b"aaa", &table);
        assert_eq!(payload, vec![0b0000_0000]);
        assert_eq!(trailing, 3);
    }
}
