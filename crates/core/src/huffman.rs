//! Huffman code construction and payload packing.
//!
//! The framing and decode layers have zero dependency on how codes are
//! chosen: they consume an [`Encoder`], an abstract capability that turns
//! raw bytes into a code table plus a packed bitstream. Tests exercise the
//! container with synthetic hand-built tables through the same seam.
//!
//! [`HuffmanEncoder`] is the shipped implementation: classic bottom-up
//! tree construction over byte frequencies with a min-heap, deterministic
//! tie-breaking by insertion order, and 0/1 code assignment by tree
//! descent (left = 0, right = 1).
//!
//! # Edge Cases
//!
//! - Input with a single distinct byte yields a one-entry table with the
//!   1-bit code `0` (codes are never empty).
//! - Empty input yields `bit_length = 0`, an empty payload, and a
//!   placeholder one-entry table, because the sentinel-terminated table
//!   codec needs at least one entry to delimit.
//!
//! # Code Length Bound
//!
//! A Huffman tree over a byte alphabet has at most 256 leaves, so no code
//! can exceed 255 bits and the wire format's one-byte length field always
//! suffices. The encoder still verifies the bound and fails fast if it is
//! ever broken.

use std::collections::BinaryHeap;

use crate::bitio::BitSeq;
use crate::error::{HuffmanError, Result};
use crate::table::PrefixCodeTable;

/// Everything the container needs from an encoder: the exact payload bit
/// count, the symbol-to-code table, and the packed payload bytes.
#[derive(Debug, Clone)]
pub struct Encoding {
    /// Exact number of meaningful bits in `payload`
    pub bit_length: u32,

    /// Prefix-free symbol-to-code mapping
    pub table: PrefixCodeTable,

    /// Packed code bitstream, final byte zero-padded
    pub payload: Vec<u8>,
}

/// Capability consumed by `compress`: turn raw bytes into an [`Encoding`].
///
/// Implementations must produce a prefix-free table covering every symbol
/// that occurs in `data`; the container layers rely on that invariant
/// without re-verifying it.
pub trait Encoder {
    /// Encode `data` into a table and packed payload.
    fn encode(&self, data: &[u8]) -> Result<Encoding>;
}

/// Plain Huffman coding over single-byte symbols.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanEncoder;

impl HuffmanEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for HuffmanEncoder {
    fn encode(&self, data: &[u8]) -> Result<Encoding> {
        let mut freqs = [0u64; 256];
        for &byte in data {
            freqs[byte as usize] += 1;
        }

        let entries = build_codes(&freqs)?;

        // Index codes by symbol for the packing loop.
        let mut by_symbol: Vec<Option<&BitSeq>> = vec![None; 256];
        for (symbol, code) in &entries {
            by_symbol[*symbol as usize] = Some(code);
        }

        let mut bits = BitSeq::new();
        for &byte in data {
            if let Some(code) = by_symbol[byte as usize] {
                bits.extend(code);
            }
        }

        if bits.len() as u64 > u32::MAX as u64 {
            return Err(HuffmanError::InputTooLarge {
                bits: bits.len() as u64,
            }
            .into());
        }

        Ok(Encoding {
            bit_length: bits.len() as u32,
            table: PrefixCodeTable::new(entries),
            payload: bits.into_bytes(),
        })
    }
}

/// A tree node: either a leaf symbol or an internal fork.
#[derive(Debug)]
enum Node {
    Leaf { symbol: u8 },
    Internal { left: Box<Node>, right: Box<Node> },
}

/// Heap entry ordering by (frequency, insertion order), reversed so the
/// std max-heap pops the smallest first. Insertion order makes
/// tie-breaking deterministic: identical input always yields an identical
/// table and container.
struct HeapEntry {
    freq: u64,
    order: u64,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.order == other.order
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Build `(symbol, code)` entries from a frequency table.
///
/// Symbols with zero frequency get no entry. An all-zero table (empty
/// input) yields the placeholder entry `(0, "0")`.
fn build_codes(freqs: &[u64; 256]) -> Result<Vec<(u8, BitSeq)>> {
    let mut heap = BinaryHeap::new();
    let mut order = 0u64;

    for (symbol, &freq) in freqs.iter().enumerate() {
        if freq > 0 {
            heap.push(HeapEntry {
                freq,
                order,
                node: Node::Leaf {
                    symbol: symbol as u8,
                },
            });
            order += 1;
        }
    }

    if heap.is_empty() {
        let mut code = BitSeq::new();
        code.push(false);
        return Ok(vec![(0u8, code)]);
    }

    while heap.len() > 1 {
        let (Some(lo), Some(hi)) = (heap.pop(), heap.pop()) else {
            break;
        };
        heap.push(HeapEntry {
            freq: lo.freq + hi.freq,
            order,
            node: Node::Internal {
                left: Box::new(lo.node),
                right: Box::new(hi.node),
            },
        });
        order += 1;
    }

    let mut entries = Vec::new();
    if let Some(root) = heap.pop() {
        assign_codes(&root.node, BitSeq::new(), &mut entries)?;
    }
    Ok(entries)
}

/// Walk the tree depth-first, extending the code prefix with 0 for left
/// and 1 for right, and recording a code at each leaf.
fn assign_codes(node: &Node, prefix: BitSeq, entries: &mut Vec<(u8, BitSeq)>) -> Result<()> {
    match node {
        Node::Leaf { symbol } => {
            let code = if prefix.is_empty() {
                // Single-symbol tree: the root is a leaf and the descent
                // produced no bits, but a code must be at least one bit.
                let mut code = BitSeq::new();
                code.push(false);
                code
            } else {
                prefix
            };
            if code.len() > 255 {
                return Err(HuffmanError::CodeTooLong { length: code.len() }.into());
            }
            entries.push((*symbol, code));
            Ok(())
        }
        Node::Internal { left, right } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push(false);
            assign_codes(left, left_prefix, entries)?;

            let mut right_prefix = prefix;
            right_prefix.push(true);
            assign_codes(right, right_prefix, entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// No entry's code may be a prefix of another's.
    fn assert_prefix_free(table: &PrefixCodeTable) {
        let codes: Vec<&BitSeq> = table.entries().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i == j {
                    continue;
                }
                if a.len() <= b.len() {
                    let is_prefix = a.iter().zip(b.iter()).all(|(x, y)| x == y);
                    assert!(!is_prefix, "code {:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let encoding = HuffmanEncoder::new().encode(&[]).unwrap();

        assert_eq!(encoding.bit_length, 0);
        assert!(encoding.payload.is_empty());
        assert_eq!(encoding.table.len(), 1);
    }

    #[test]
    fn test_single_distinct_symbol() {
        let encoding = HuffmanEncoder::new().encode(&[b'x'; 10]).unwrap();

        assert_eq!(encoding.table.len(), 1);
        let code = encoding.table.code_for(b'x').unwrap();
        assert_eq!(code.len(), 1);
        // Ten 1-bit codes pack into 10 bits.
        assert_eq!(encoding.bit_length, 10);
        assert_eq!(encoding.payload.len(), 2);
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let encoding = HuffmanEncoder::new().encode(data).unwrap();
        assert_prefix_free(&encoding.table);
    }

    #[test]
    fn test_full_alphabet_prefix_free() {
        let data: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
        let encoding = HuffmanEncoder::new().encode(&data).unwrap();

        assert_eq!(encoding.table.len(), 256);
        assert_prefix_free(&encoding.table);
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes() {
        // 'a' dominates, so its code must be no longer than 'z''s.
        let mut data = vec![b'a'; 100];
        data.extend_from_slice(&[b'y', b'z']);

        let encoding = HuffmanEncoder::new().encode(&data).unwrap();
        let a_len = encoding.table.code_for(b'a').unwrap().len();
        let z_len = encoding.table.code_for(b'z').unwrap().len();

        assert!(a_len <= z_len);
    }

    #[test]
    fn test_table_covers_exactly_occurring_symbols() {
        let encoding = HuffmanEncoder::new().encode(b"abc").unwrap();

        assert_eq!(encoding.table.len(), 3);
        assert!(encoding.table.code_for(b'a').is_some());
        assert!(encoding.table.code_for(b'd').is_none());
    }

    #[test]
    fn test_deterministic() {
        let data = b"determinism across runs";
        let first = HuffmanEncoder::new().encode(data).unwrap();
        let second = HuffmanEncoder::new().encode(data).unwrap();

        assert_eq!(first.bit_length, second.bit_length);
        assert_eq!(first.payload, second.payload);
        for (a, b) in first.table.entries().zip(second.table.entries()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_bit_length_matches_code_lengths() {
        let data = b"aabbbc";
        let encoding = HuffmanEncoder::new().encode(data).unwrap();

        let expected: usize = data
            .iter()
            .map(|&b| encoding.table.code_for(b).unwrap().len())
            .sum();
        assert_eq!(encoding.bit_length as usize, expected);
    }
}
