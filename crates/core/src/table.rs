//! Prefix code table and its self-delimiting wire codec.
//!
//! The table maps byte symbols to prefix-free bit codes. On the wire it is
//! a plain run of entries with no count field; a continuation marker after
//! each entry tells the reader whether more follow. This trades one byte
//! per entry for a streaming reader that needs no lookahead.
//!
//! # Entry Format
//!
//! ```text
//! +-------------------+
//! | symbol (1)        |  u8 byte value 0-255
//! +-------------------+
//! | code_length (1)   |  u8 code length in bits, 1-255
//! +-------------------+
//! | code_bits         |  ceil(code_length/8) bytes, MSB-first,
//! | (variable)        |  trailing bits zero-padded
//! +-------------------+
//! | marker (1)        |  0x00 = more entries follow, 0xFF = last entry
//! +-------------------+
//! ```
//!
//! # Prefix-Free Precondition
//!
//! The codec assumes codes are prefix-free (no code is a prefix of
//! another). That invariant comes from the encoder and is NOT re-verified
//! here; decoding against a table that violates it is undefined.

use std::collections::HashMap;

use crate::bitio::{byte_len, BitSeq};
use crate::error::{Result, TableError};

/// Continuation marker: more entries follow.
const MARKER_MORE: u8 = 0x00;

/// Continuation marker: this entry is the last.
const MARKER_LAST: u8 = 0xFF;

/// An ordered symbol-to-code mapping with exact lookup in both directions.
///
/// Constructed once per compress/decompress operation and immutable
/// thereafter. Symbols are unique within the table; codes are prefix-free
/// by precondition.
#[derive(Debug, Clone)]
pub struct PrefixCodeTable {
    /// Entries in table order, as they appear on the wire
    entries: Vec<(u8, BitSeq)>,

    /// Code -> entry index, for the decode hot path
    by_code: HashMap<BitSeq, usize>,

    /// Symbol -> entry index, for the encode hot path
    by_symbol: HashMap<u8, usize>,
}

impl PrefixCodeTable {
    /// Build a table from `(symbol, code)` entries, preserving order.
    pub fn new(entries: Vec<(u8, BitSeq)>) -> Self {
        let mut by_code = HashMap::with_capacity(entries.len());
        let mut by_symbol = HashMap::with_capacity(entries.len());
        for (index, (symbol, code)) in entries.iter().enumerate() {
            by_code.insert(code.clone(), index);
            by_symbol.insert(*symbol, index);
        }
        Self {
            entries,
            by_code,
            by_symbol,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = &(u8, BitSeq)> {
        self.entries.iter()
    }

    /// The code assigned to `symbol`, if any.
    pub fn code_for(&self, symbol: u8) -> Option<&BitSeq> {
        self.by_symbol.get(&symbol).map(|&i| &self.entries[i].1)
    }

    /// The symbol whose code exactly equals `code`, if any.
    pub fn symbol_for(&self, code: &BitSeq) -> Option<u8> {
        self.by_code.get(code).map(|&i| self.entries[i].0)
    }
}

/// Serialize a table to its self-delimiting wire form.
///
/// Entries are written in table order; every entry carries a continuation
/// marker and exactly the last one's marker is 0xFF.
///
/// # Errors
/// - `TableError::Empty` if the table has no entries
/// - `TableError::CodeLengthOutOfRange` if any code is empty or longer
///   than 255 bits (the length field is a single byte)
pub fn serialize(table: &PrefixCodeTable) -> Result<Vec<u8>> {
    if table.is_empty() {
        return Err(TableError::Empty.into());
    }

    let last = table.len() - 1;
    let mut out = Vec::new();

    for (index, (symbol, code)) in table.entries().enumerate() {
        let length = code.len();
        if length == 0 || length > 255 {
            return Err(TableError::CodeLengthOutOfRange { length }.into());
        }

        out.push(*symbol);
        out.push(length as u8);
        out.extend_from_slice(code.as_bytes());
        out.push(if index == last { MARKER_LAST } else { MARKER_MORE });
    }

    Ok(out)
}

/// Deserialize a table from the front of `bytes`.
///
/// Reads entries until a 0xFF marker; the number of entries is determined
/// solely by the markers. Returns the table and the number of bytes
/// consumed, so the caller can position itself immediately after it.
///
/// # Errors
/// - `TableError::Truncated` if the stream ends before a 0xFF marker
/// - `TableError::CodeLengthOutOfRange` if an entry declares a zero-bit code
pub fn deserialize(bytes: &[u8]) -> Result<(PrefixCodeTable, usize)> {
    let mut pos = 0;
    let mut entries = Vec::new();

    loop {
        let symbol = *bytes.get(pos).ok_or(TableError::Truncated { offset: pos })?;
        let length = *bytes
            .get(pos + 1)
            .ok_or(TableError::Truncated { offset: pos + 1 })?
            as usize;
        if length == 0 {
            return Err(TableError::CodeLengthOutOfRange { length }.into());
        }
        pos += 2;

        let code_bytes = bytes
            .get(pos..pos + byte_len(length))
            .ok_or(TableError::Truncated { offset: pos })?;
        let code = BitSeq::from_bytes(code_bytes, length)?;
        pos += byte_len(length);

        let marker = *bytes.get(pos).ok_or(TableError::Truncated { offset: pos })?;
        pos += 1;

        entries.push((symbol, code));
        if marker == MARKER_LAST {
            break;
        }
    }

    Ok((PrefixCodeTable::new(entries), pos))
}
