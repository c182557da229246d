/*!

Symbol statistics for the huffpack coder.

The histogram over the 256 possible byte values is the only state the coder
ever persists. Tree and code table are derived from it again on both the
encode and the decode side.

*/

use log::trace;

pub const MAX_SYMBOL_VALUE: u32 = u8::MAX as u32;

/// counts of each symbol, indexed by the symbol value
pub type CountsTable = [u32; MAX_SYMBOL_VALUE as usize + 1];

/// creates a table with the counts of each symbol
#[inline]
pub fn count_simple(input: &[u8]) -> CountsTable {
    let mut counts = [0_u32; 256];

    for byte in input {
        counts[*byte as usize] += 1;
    }
    trace!(
        "counted {} bytes, {} distinct symbols",
        input.len(),
        get_num_unique_symbols(&counts)
    );
    counts
}

#[inline]
pub fn get_num_unique_symbols(counts: &CountsTable) -> usize {
    counts.iter().filter(|count| **count != 0).count()
}

/// total number of symbols in the input the counts were taken from
#[inline]
pub fn get_total_count(counts: &CountsTable) -> u64 {
    counts.iter().map(|count| *count as u64).sum()
}
