//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! Each container failure mode is a distinct, identifiable kind so callers
//! can tell a malformed container apart from exhausted input.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a specific failure domain:
/// - Bit I/O: reading bits from byte buffers
/// - Table: code table serialization/deserialization
/// - Framing: container header/payload framing
/// - Decode: walking the packed bitstream against the table
/// - Huffman: code construction and payload packing
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Code table serialization or deserialization failed
    #[error("code table error: {0}")]
    Table(#[from] TableError),

    /// Container framing error (e.g., truncated header or payload)
    #[error("framing error: {0}")]
    Framing(#[from] FramingError),

    /// Decode error (e.g., leftover bits with no matching code)
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Huffman encoder error
    #[error("huffman encoder error: {0}")]
    Huffman(#[from] HuffmanError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the bit stream
    #[error("unexpected end of bit stream at bit {position}")]
    UnexpectedEof { position: usize },

    /// Byte buffer holds fewer bits than the declared bit length
    #[error("insufficient bits: declared {declared}, buffer holds {available}")]
    InsufficientBits { declared: usize, available: usize },
}

/// Code table errors.
#[derive(Debug, Error)]
pub enum TableError {
    /// Stream ended while expecting a symbol, length, code bytes, or marker
    /// before the terminal 0xFF marker was seen
    #[error("table truncated: stream ended at byte {offset} before terminal marker")]
    Truncated { offset: usize },

    /// Code length byte outside the representable range
    #[error("code length {length} out of range (1-255)")]
    CodeLengthOutOfRange { length: usize },

    /// Serializing a table with no entries (the sentinel needs at least one)
    #[error("cannot serialize an empty code table")]
    Empty,
}

/// Container framing errors.
#[derive(Debug, Error)]
pub enum FramingError {
    /// Fewer than 4 bytes available for the bit-length header
    #[error("truncated header: need {required} bytes, got {actual}")]
    TruncatedHeader { required: usize, actual: usize },

    /// Fewer payload bytes remain than the header's bit length implies
    #[error("truncated payload: need {required} bytes, got {actual}")]
    TruncatedPayload { required: usize, actual: usize },
}

/// Decode errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Reached the declared bit length with bits left in the accumulator
    /// that match no code. Indicates corruption or a bit-length/table
    /// mismatch.
    #[error("unmatched trailing bits: {bits} accumulated bits at end of stream")]
    UnmatchedTrailingBits { bits: usize },
}

/// Huffman encoder errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Generated code length exceeds what the one-byte length field holds.
    /// Unreachable for a byte alphabet (tree depth is bounded at 255) but
    /// checked so a broken invariant fails fast instead of corrupting the
    /// wire format.
    #[error("code length {length} exceeds maximum 255")]
    CodeTooLong { length: usize },

    /// Packed payload exceeds the 32-bit bit-length header
    #[error("input too large: payload is {bits} bits, header holds at most 4294967295")]
    InputTooLarge { bits: u64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
