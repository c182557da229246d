/*!

Informational numbers about a code, computed from the histogram and the code
table the codec already exposes. Nothing here is needed to round trip data,
a driver formats and prints these as it sees fit.

*/

use hist::{get_total_count, CountsTable};
use hufftree::CodeTable;

/// compressed size relative to the original size
pub fn compression_ratio(original_bytes: usize, compressed_bytes: usize) -> f64 {
    compressed_bytes as f64 / original_bytes as f64
}

/// Shannon entropy of the symbol distribution in bits per symbol
pub fn entropy(counts: &CountsTable) -> f64 {
    let total = get_total_count(counts) as f64;
    counts
        .iter()
        .filter(|count| **count != 0)
        .map(|count| {
            let prob = *count as f64 / total;
            -prob * prob.log2()
        })
        .sum()
}

/// mean code length in bits per symbol under the given code table
pub fn average_code_length(counts: &CountsTable, table: &CodeTable) -> f64 {
    let total = get_total_count(counts) as f64;
    counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count != 0)
        .map(|(symbol, count)| (*count as f64 / total) * table[symbol].number_bits as f64)
        .sum()
}

/// coding efficiency, entropy over mean code length. 1.0 means the code
/// meets the Shannon bound
pub fn efficiency(counts: &CountsTable, table: &CodeTable) -> f64 {
    entropy(counts) / average_code_length(counts, table)
}

/// share of the mean code length not explained by the entropy
pub fn redundancy(counts: &CountsTable, table: &CodeTable) -> f64 {
    1.0 - efficiency(counts, table)
}
