//! Container framing: assembling and parsing the compressed byte stream.
//!
//! A container is the complete output of `compress` and the sole input of
//! `decompress`. It has three parts and no magic or checksum:
//!
//! # Container Format
//!
//! ```text
//! +-------------------+
//! | bit_length (4)    |  u32 big-endian, exact number of meaningful
//! +-------------------+  bits in the payload
//! | code table        |  self-delimiting entry stream, see `table`
//! | (variable)        |
//! +-------------------+
//! | payload           |  ceil(bit_length/8) bytes of packed codes,
//! | (variable)        |  MSB-first, final byte zero-padded
//! +-------------------+
//! ```
//!
//! No length field precedes the payload: its size is implied by
//! `bit_length`. Exactly that many bytes are consumed; anything after
//! them is ignored.

use crate::bitio::byte_len;
use crate::error::{FramingError, Result};
use crate::table::{self, PrefixCodeTable};

/// Size of the bit-length header in bytes.
pub const HEADER_SIZE: usize = 4;

/// A parsed container: everything needed to reconstruct the original bytes.
#[derive(Debug, Clone)]
pub struct Container {
    /// Exact number of meaningful bits in `payload`
    pub bit_length: u32,

    /// Symbol-to-code mapping for decoding
    pub table: PrefixCodeTable,

    /// Packed code bitstream, trailing padding bits beyond `bit_length`
    pub payload: Vec<u8>,
}

/// Assemble a container from its parts.
///
/// Writes the big-endian bit-length header, the serialized table, then the
/// payload bytes verbatim. The payload is not validated against
/// `bit_length`; the decode step consumes exactly the declared bits.
///
/// # Errors
/// Propagates table serialization errors (empty table, unrepresentable
/// code length).
pub fn pack(bit_length: u32, table: &PrefixCodeTable, payload: &[u8]) -> Result<Vec<u8>> {
    let table_bytes = table::serialize(table)?;

    let mut out = Vec::with_capacity(HEADER_SIZE + table_bytes.len() + payload.len());
    out.extend_from_slice(&bit_length.to_be_bytes());
    out.extend_from_slice(&table_bytes);
    out.extend_from_slice(payload);

    Ok(out)
}

/// Parse a container into its parts.
///
/// Reads the 4-byte header, defers to the table codec positioned
/// immediately after it, then takes `ceil(bit_length/8)` payload bytes.
/// Bytes past the payload are ignored.
///
/// # Errors
/// - `FramingError::TruncatedHeader` if fewer than 4 bytes are available
/// - `FramingError::TruncatedPayload` if the payload region is short
/// - Propagates table deserialization errors
pub fn unpack(bytes: &[u8]) -> Result<Container> {
    if bytes.len() < HEADER_SIZE {
        return Err(FramingError::TruncatedHeader {
            required: HEADER_SIZE,
            actual: bytes.len(),
        }
        .into());
    }

    let bit_length = u32::from_be_bytes(bytes[0..HEADER_SIZE].try_into().unwrap());

    let (table, table_bytes) = table::deserialize(&bytes[HEADER_SIZE..])?;
    let payload_start = HEADER_SIZE + table_bytes;
    let payload_len = byte_len(bit_length as usize);

    let payload = bytes
        .get(payload_start..payload_start + payload_len)
        .ok_or(FramingError::TruncatedPayload {
            required: payload_len,
            actual: bytes.len().saturating_sub(payload_start),
        })?;

    Ok(Container {
        bit_length,
        table,
        payload: payload.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitio::BitSeq;

    fn two_entry_table() -> PrefixCodeTable {
        let mut zero = BitSeq::new();
        zero.push(false);
        let mut one = BitSeq::new();
        one.push(true);
        PrefixCodeTable::new(vec![(b'0', zero), (b'1', one)])
    }

    #[test]
    fn test_pack_unpack_round_trip() {
        let table = two_entry_table();
        let payload = [0b0110_0000];

        let bytes = pack(4, &table, &payload).unwrap();
        let container = unpack(&bytes).unwrap();

        assert_eq!(container.bit_length, 4);
        assert_eq!(container.payload, payload);
        assert_eq!(container.table.len(), 2);
    }

    #[test]
    fn test_header_is_big_endian() {
        let table = two_entry_table();
        let bytes = pack(260, &table, &[0u8; 33]).unwrap();
        assert_eq!(&bytes[0..4], &[0, 0, 1, 4]);
    }

    #[test]
    fn test_truncated_header() {
        let result = unpack(&[0x00, 0x01]);
        assert!(matches!(
            result,
            Err(crate::error::Error::Framing(FramingError::TruncatedHeader {
                required: 4,
                actual: 2,
            }))
        ));
    }

    #[test]
    fn test_truncated_payload() {
        let table = two_entry_table();
        let bytes = pack(16, &table, &[0xAB, 0xCD]).unwrap();

        // Drop the final payload byte.
        let result = unpack(&bytes[..bytes.len() - 1]);
        assert!(matches!(
            result,
            Err(crate::error::Error::Framing(FramingError::TruncatedPayload {
                required: 2,
                actual: 1,
            }))
        ));
    }

    #[test]
    fn test_zero_bit_length_needs_no_payload() {
        let table = two_entry_table();
        let bytes = pack(0, &table, &[]).unwrap();
        let container = unpack(&bytes).unwrap();

        assert_eq!(container.bit_length, 0);
        assert!(container.payload.is_empty());
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let table = two_entry_table();
        let mut bytes = pack(8, &table, &[0x55]).unwrap();
        bytes.extend_from_slice(&[0xEE, 0xEE]);

        let container = unpack(&bytes).unwrap();
        assert_eq!(container.payload, vec![0x55]);
    }

    #[test]
    fn test_table_error_propagates() {
        let empty = PrefixCodeTable::new(Vec::new());
        assert!(pack(0, &empty, &[]).is_err());
    }
}
