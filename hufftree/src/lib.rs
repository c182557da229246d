/*!

hufftree builds the Huffman tree for a histogram of symbol counts and
derives the per symbol prefix codes from it.

The tree is never persisted. Encoder and decoder both rebuild it from the
same counts, so the build is fully deterministic, see
[`build_tree`](tree::build_tree::build_tree).

*/

pub mod tree;

pub use crate::tree::build_tree::build_tree;
pub use crate::tree::build_tree::check_prefix_property;
pub use crate::tree::build_tree::tree_to_table;
pub use crate::tree::tree_node::Code;
pub use crate::tree::tree_node::Node;
pub use crate::tree::Tree;

/// code for each symbol, indexed by the symbol value. Symbols that are not
/// part of the alphabet keep `number_bits == 0`
pub type CodeTable = [Code; 256];
