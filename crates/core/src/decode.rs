//! Greedy bit-accumulation decoding of a packed payload.
//!
//! The engine is a two-state automaton. Each payload bit is appended to an
//! accumulator; when the accumulator exactly equals some code in the table
//! the symbol is emitted and the accumulator resets, otherwise it keeps
//! accumulating. Because the table is prefix-free, at most one code can
//! ever match a growing accumulator, so greedy matching needs no
//! backtracking or lookahead.
//!
//! Termination is exact: the driver stops at the declared bit count, and a
//! non-empty accumulator at that point is a decode error, never silently
//! dropped.

use crate::bitio::{BitReader, BitSeq};
use crate::error::{DecodeError, Result};
use crate::table::PrefixCodeTable;

/// Outcome of feeding one bit to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// No code matches yet; the bit was added to the accumulator
    Accumulating,

    /// The accumulator matched a code; the symbol was emitted and the
    /// accumulator reset
    Emitted(u8),
}

/// The decode automaton: an accumulator matched against a code table one
/// bit at a time.
#[derive(Debug)]
pub struct DecodeEngine<'a> {
    table: &'a PrefixCodeTable,
    accumulator: BitSeq,
}

impl<'a> DecodeEngine<'a> {
    /// Create an engine with an empty accumulator.
    pub fn new(table: &'a PrefixCodeTable) -> Self {
        Self {
            table,
            accumulator: BitSeq::new(),
        }
    }

    /// Feed one bit and report the resulting transition.
    pub fn push_bit(&mut self, bit: bool) -> Step {
        self.accumulator.push(bit);
        match self.table.symbol_for(&self.accumulator) {
            Some(symbol) => {
                self.accumulator.clear();
                Step::Emitted(symbol)
            }
            None => Step::Accumulating,
        }
    }

    /// Number of bits currently accumulated without a match.
    pub fn pending_bits(&self) -> usize {
        self.accumulator.len()
    }

    /// Check the terminal condition: a well-formed stream ends with an
    /// empty accumulator.
    ///
    /// # Errors
    /// Returns `DecodeError::UnmatchedTrailingBits` if bits remain.
    pub fn finish(self) -> Result<()> {
        if self.accumulator.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::UnmatchedTrailingBits {
                bits: self.accumulator.len(),
            }
            .into())
        }
    }
}

/// Decode `bit_length` bits of `payload` against `table`, producing the
/// original byte sequence.
///
/// # Errors
/// - `BitIoError::UnexpectedEof` if the payload holds fewer than
///   `bit_length` bits
/// - `DecodeError::UnmatchedTrailingBits` if the stream ends mid-code
pub fn decode(payload: &[u8], bit_length: u32, table: &PrefixCodeTable) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(payload);
    let mut engine = DecodeEngine::new(table);
    let mut out = Vec::new();

    while reader.position() < bit_length as usize {
        let bit = reader.read_bit()?;
        if let Step::Emitted(symbol) = engine.push_bit(bit) {
            out.push(symbol);
        }
    }

    engine.finish()?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(bits: &[u8]) -> BitSeq {
        let mut seq = BitSeq::new();
        for &b in bits {
            seq.push(b == 1);
        }
        seq
    }

    /// a -> 0, b -> 10, c -> 110, d -> 111 (prefix-free, varied lengths)
    fn synthetic_table() -> PrefixCodeTable {
        PrefixCodeTable::new(vec![
            (b'a', code(&[0])),
            (b'b', code(&[1, 0])),
            (b'c', code(&[1, 1, 0])),
            (b'd', code(&[1, 1, 1])),
        ])
    }

    #[test]
    fn test_decode_mixed_codes() {
        let table = synthetic_table();
        // "badc" = 10 0 111 110 -> 1001 1111 0
        let payload = [0b1001_1111, 0b0000_0000];

        let out = decode(&payload, 9, &table).unwrap();
        assert_eq!(out, b"badc");
    }

    #[test]
    fn test_automaton_transitions() {
        let table = synthetic_table();
        let mut engine = DecodeEngine::new(&table);

        // 'c' = 110: two accumulating steps, then an emit that resets.
        assert_eq!(engine.push_bit(true), Step::Accumulating);
        assert_eq!(engine.pending_bits(), 1);
        assert_eq!(engine.push_bit(true), Step::Accumulating);
        assert_eq!(engine.pending_bits(), 2);
        assert_eq!(engine.push_bit(false), Step::Emitted(b'c'));
        assert_eq!(engine.pending_bits(), 0);

        engine.finish().unwrap();
    }

    #[test]
    fn test_greedy_match_is_unique() {
        // While a code is still growing, no other code may match: every
        // accumulating step must find zero exact matches in the table.
        let table = synthetic_table();

        for (_, full_code) in table.entries() {
            let mut prefix = BitSeq::new();
            for bit in full_code.iter().take(full_code.len() - 1) {
                prefix.push(bit);
                assert_eq!(table.symbol_for(&prefix), None);
            }
        }
    }

    #[test]
    fn test_unmatched_trailing_bits() {
        let table = synthetic_table();
        // A lone '1' matches nothing.
        let payload = [0b1000_0000];

        let result = decode(&payload, 1, &table);
        assert!(matches!(
            result,
            Err(crate::error::Error::Decode(
                DecodeError::UnmatchedTrailingBits { bits: 1 }
            ))
        ));
    }

    #[test]
    fn test_zero_bit_length() {
        let table = synthetic_table();
        let out = decode(&[], 0, &table).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_padding_bits_beyond_length_ignored() {
        let table = synthetic_table();
        // 'a' = 0, then seven garbage padding bits that must not be read.
        let payload = [0b0111_1111];

        let out = decode(&payload, 1, &table).unwrap();
        assert_eq!(out, b"a");
    }

    #[test]
    fn test_payload_shorter_than_declared() {
        let table = synthetic_table();
        let result = decode(&[0b0000_0000], 9, &table);
        assert!(matches!(
            result,
            Err(crate::error::Error::BitIo(_))
        ));
    }

    #[test]
    fn test_single_code_run() {
        let table = synthetic_table();
        // Eight 'a's: 0000 0000
        let out = decode(&[0x00], 8, &table).unwrap();
        assert_eq!(out, b"aaaaaaaa");
    }
}
