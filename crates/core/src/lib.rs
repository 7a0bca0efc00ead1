//! huffpack-core: a self-contained prefix-code container format
//!
//! This library packages the output of a Huffman-style byte compressor
//! into a single byte stream and unpacks that stream back into the
//! original bytes:
//!
//! - `bitio`: bit sequences and single-bit reading, MSB-first
//! - `table`: prefix code table and its self-delimiting wire codec
//! - `framing`: the `header || table || payload` container
//! - `decode`: greedy bit-accumulation decoding
//! - `huffman`: the encoder capability and the shipped Huffman encoder
//! - `stats`: observable compression counters
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and identifiable
//! - **Whole buffers**: synchronous, single-threaded, no streaming mode;
//!   concurrent callers just use independent buffers
//! - **Deterministic**: identical input always produces an identical
//!   container
//! - **Prefix-free by precondition**: the decode layers trust the
//!   encoder's table and never re-verify it
//!
//! # Example
//!
//! ```
//! let data = b"so much depends upon a red wheel barrow";
//! let container = huffpack_core::compress(data).unwrap();
//! let restored = huffpack_core::decompress(&container).unwrap();
//! assert_eq!(restored, data);
//! ```

pub mod bitio;
pub mod decode;
pub mod error;
pub mod framing;
pub mod huffman;
pub mod stats;
pub mod table;

// Re-export commonly used types
pub use error::{Error, Result};
pub use huffman::{Encoder, Encoding, HuffmanEncoder};
pub use table::PrefixCodeTable;

/// Compress `data` into a container using the shipped Huffman encoder.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with(&HuffmanEncoder::new(), data)
}

/// Compress `data` into a container using any [`Encoder`].
///
/// The encoder supplies the table, payload, and exact bit length; this
/// function only frames them.
pub fn compress_with<E: Encoder>(encoder: &E, data: &[u8]) -> Result<Vec<u8>> {
    let encoding = encoder.encode(data)?;
    framing::pack(encoding.bit_length, &encoding.table, &encoding.payload)
}

/// Decompress a container back into the original bytes.
///
/// # Errors
/// Surfaces the container failure taxonomy: truncated header, truncated
/// table, truncated payload, and unmatched trailing bits are each a
/// distinct error kind.
pub fn decompress(container: &[u8]) -> Result<Vec<u8>> {
    let parsed = framing::unpack(container)?;
    decode::decode(&parsed.payload, parsed.bit_length, &parsed.table)
}
