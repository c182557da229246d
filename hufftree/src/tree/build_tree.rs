use core::cmp::Ordering;
use std::collections::BinaryHeap;

use common::CodecError;
use hist::CountsTable;
use log::debug;

use crate::tree::tree_node::{Code, Node};
use crate::tree::Tree;
use crate::CodeTable;

/// heap key for the greedy merge.
///
/// `BinaryHeap` is a max-heap, the flipped ordering turns it into a
/// min-heap. Ties on count break on the insertion sequence number, so the
/// pop order is a total order and the decoder rerunning the build on the
/// counts read back from a container comes out with the identical tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    count: u32,
    seq: u16,
    node_pos: u16,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// creates a huffman tree over all symbols with a non zero count.
///
/// Symbols enter the queue in ascending symbol order, parents in creation
/// order. Two runs over the same counts produce the same tree.
pub fn build_tree(counts: &CountsTable) -> Result<Tree, CodecError> {
    let mut nodes: Vec<Node> = Vec::with_capacity(512);
    let mut heap = BinaryHeap::with_capacity(256);
    let mut seq: u16 = 0;

    for (byte, count) in counts.iter().enumerate().filter(|(_, count)| **count != 0) {
        nodes.push(Node {
            symbol: Some(byte as u8),
            count: *count,
            ..Default::default()
        });
        heap.push(HeapEntry {
            count: *count,
            seq,
            node_pos: (nodes.len() - 1) as u16,
        });
        seq += 1;
    }

    if nodes.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    debug!("building tree over {} symbols", nodes.len());

    if nodes.len() == 1 {
        // a lone symbol still needs a one bit code, wrap it under a parent
        let count = nodes[0].count;
        nodes.push(Node {
            count,
            left: Some(0),
            ..Default::default()
        });
        return Ok(Tree {
            nodes,
            root_node: 1,
        });
    }

    let mut root_node = 0;
    while let (Some(el1), el2) = (heap.pop(), heap.pop()) {
        if let Some(el2) = el2 {
            // merge the two lowest nodes under a new parent
            nodes.push(Node {
                count: el1.count + el2.count,
                left: Some(el1.node_pos),
                right: Some(el2.node_pos),
                ..Default::default()
            });
            heap.push(HeapEntry {
                count: el1.count + el2.count,
                seq,
                node_pos: (nodes.len() - 1) as u16,
            });
            seq += 1;
        } else {
            // last node, which will be the root node
            root_node = el1.node_pos as usize;
        }
    }

    Ok(Tree { nodes, root_node })
}

/// converts the tree into a table with the prefix code for each symbol
pub fn tree_to_table(tree: &Tree) -> CodeTable {
    let mut table = [Code::default(); 256];

    tree.walk_tree(tree.root_node, &mut |node, transitions, depth| {
        if let Some(symbol) = node.symbol {
            table[symbol as usize] = Code {
                val: transitions,
                number_bits: depth as u8,
            };
        }
    });
    table
}

/// will validate the table to have correct prefix properties for all
/// symbols. This validation is rather slow and not meant for a regular
/// compression execution.
pub fn check_prefix_property(table: &CodeTable) {
    let mut codes_by_num_bits: Vec<Vec<(u8, Code)>> = vec![vec![]; 64];
    let mut max_bits = 0;
    for (symbol, code) in table.iter().enumerate() {
        if code.number_bits == 0 {
            continue;
        }
        codes_by_num_bits[code.number_bits as usize].push((symbol as u8, *code));
        max_bits = max_bits.max(code.number_bits);
    }
    for num_bits in (2..=max_bits).rev() {
        let shorter: Vec<(u8, Code)> = (1..num_bits)
            .flat_map(|nb| codes_by_num_bits[nb as usize].iter().cloned())
            .collect();
        for (symbol, code) in &codes_by_num_bits[num_bits as usize] {
            // find any shorter code which covers the same prefix
            for (comp_symbol, comp_code) in &shorter {
                let bit_diff = num_bits - comp_code.number_bits;
                if (code.val >> bit_diff) == comp_code.val {
                    panic!(
                        "invalid prefix detected between symbol {:?} and symbol {:?}",
                        symbol, comp_symbol
                    );
                }
            }
        }
    }
}
