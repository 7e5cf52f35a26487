// In: src/bridge/format.rs

//! Defines the on-disk structure and constants for the huffpuff archive
//! format. This is the single source of truth for serialization,
//! deserialization, and efficient metadata peeking of the artifact.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! [u32] tree bit length
//! [ceil(treeBits/32) u32 words]     flattened tree, zero-padded final word
//! [u32] payload bit length
//! [ceil(payloadBits/32) u32 words]  encoded payload, zero-padded final word
//! ```

use std::io::{Cursor, Read};

use bitvec::prelude::*;

use crate::error::HuffpuffError;
use crate::kernels::bitstream;

//==================================================================================
// Format Constants
//==================================================================================

/// Bytes per length field and per storage word.
const FIELD_BYTES: usize = 4;
/// The minimum possible size of a valid archive in bytes:
/// two length fields plus at least one word per stream.
const MIN_ARCHIVE_SIZE: usize = 4 * FIELD_BYTES;
/// The smallest legal flattened tree: a single leaf, `1` plus 8 symbol bits.
const MIN_TREE_BITS: usize = 9;
/// The largest legal flattened tree: a full tree over all 256 byte symbols
/// has 255 internal markers and 256 nine-bit leaves. Declared lengths beyond
/// this are rejected before any allocation.
const MAX_TREE_BITS: usize = 255 + 256 * 9;

//==================================================================================
// Public Structs
//==================================================================================

/// Metadata extracted from an archive's framing, without unpacking either bit
/// stream. This is the return type of the efficient `peek_info` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveInfo {
    /// Meaningful bits in the flattened-tree stream.
    pub tree_bit_len: usize,
    /// Storage words holding the tree stream.
    pub tree_words: usize,
    /// Meaningful bits in the encoded payload stream.
    pub payload_bit_len: usize,
    /// Storage words holding the payload stream.
    pub payload_words: usize,
    /// Total archive size in bytes.
    pub total_size: usize,
}

/// The public-facing struct for compression analysis results, returned by
/// `bridge::analyze`.
#[derive(Debug)]
pub struct CompressionStats {
    pub total_size: usize,
    pub tree_bits: usize,
    pub payload_bits: usize,
}

/// A compressed artifact in memory: both bit streams, exact lengths included.
/// This struct is the target for full deserialization and the source for
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedArchive {
    pub tree_bits: BitVec<u32, Msb0>,
    pub payload_bits: BitVec<u32, Msb0>,
}

//==================================================================================
// Core Implementation
//==================================================================================

impl CompressedArchive {
    /// Serializes the archive into its canonical, final byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>, HuffpuffError> {
        let tree_bit_len = u32::try_from(self.tree_bits.len()).map_err(|_| {
            HuffpuffError::Internal("tree stream exceeds the 32-bit length field".to_string())
        })?;
        let payload_bit_len = u32::try_from(self.payload_bits.len()).map_err(|_| {
            HuffpuffError::Internal("payload stream exceeds the 32-bit length field".to_string())
        })?;

        let tree_words = bitstream::pack_words(&self.tree_bits);
        let payload_words = bitstream::pack_words(&self.payload_bits);

        let total = 2 * FIELD_BYTES + FIELD_BYTES * (tree_words.len() + payload_words.len());
        let mut buf = Vec::with_capacity(total);

        buf.extend_from_slice(&tree_bit_len.to_le_bytes());
        for word in &tree_words {
            buf.extend_from_slice(&word.to_le_bytes());
        }
        buf.extend_from_slice(&payload_bit_len.to_le_bytes());
        for word in &payload_words {
            buf.extend_from_slice(&word.to_le_bytes());
        }

        Ok(buf)
    }

    /// Deserializes a full byte slice into a `CompressedArchive`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HuffpuffError> {
        // peek_info performs every framing validation; from_bytes only has to
        // lift the two word regions out of the buffer.
        let info = Self::peek_info(bytes)?;

        let tree_region_start = FIELD_BYTES;
        let payload_region_start = 2 * FIELD_BYTES + FIELD_BYTES * info.tree_words;

        let tree_words = read_words(bytes, tree_region_start, info.tree_words)?;
        let payload_words = read_words(bytes, payload_region_start, info.payload_words)?;

        Ok(CompressedArchive {
            tree_bits: bitstream::unpack_bits(&tree_words, info.tree_bit_len)?,
            payload_bits: bitstream::unpack_bits(&payload_words, info.payload_bit_len)?,
        })
    }

    /// Peeks into a serialized archive's framing to extract metadata without
    /// unpacking the (potentially large) bit streams.
    pub fn peek_info(bytes: &[u8]) -> Result<ArchiveInfo, HuffpuffError> {
        if bytes.len() < MIN_ARCHIVE_SIZE {
            return Err(HuffpuffError::MalformedHeader(format!(
                "archive is too small to be valid: minimum size {}, got {}",
                MIN_ARCHIVE_SIZE,
                bytes.len()
            )));
        }

        let mut cursor = Cursor::new(bytes);

        let tree_bit_len = read_u32(&mut cursor)? as usize;
        if !(MIN_TREE_BITS..=MAX_TREE_BITS).contains(&tree_bit_len) {
            return Err(HuffpuffError::MalformedHeader(format!(
                "declared tree bit length {} is outside the legal range [{}, {}]",
                tree_bit_len, MIN_TREE_BITS, MAX_TREE_BITS
            )));
        }
        let tree_words = bitstream::words_for(tree_bit_len);

        // Skip over the tree words to reach the payload length field.
        let payload_len_offset = FIELD_BYTES + FIELD_BYTES * tree_words;
        if bytes.len() < payload_len_offset + FIELD_BYTES {
            return Err(HuffpuffError::MalformedHeader(format!(
                "archive ends inside the tree stream: {} words declared, {} bytes present",
                tree_words,
                bytes.len()
            )));
        }
        cursor.set_position(payload_len_offset as u64);

        let payload_bit_len = read_u32(&mut cursor)? as usize;
        if payload_bit_len == 0 {
            return Err(HuffpuffError::MalformedHeader(
                "declared payload bit length is zero".to_string(),
            ));
        }
        let payload_words = bitstream::words_for(payload_bit_len);

        // The declared word counts must account for the buffer exactly: a
        // short buffer is truncation, a long one is trailing garbage.
        let expected_size = 2 * FIELD_BYTES + FIELD_BYTES * (tree_words + payload_words);
        if bytes.len() != expected_size {
            return Err(HuffpuffError::MalformedHeader(format!(
                "declared bit lengths require a {}-byte archive, got {}",
                expected_size,
                bytes.len()
            )));
        }

        Ok(ArchiveInfo {
            tree_bit_len,
            tree_words,
            payload_bit_len,
            payload_words,
            total_size: bytes.len(),
        })
    }
}

//==================================================================================
// Private Helpers
//==================================================================================

fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32, HuffpuffError> {
    let mut buf = [0u8; FIELD_BYTES];
    cursor
        .read_exact(&mut buf)
        .map_err(|e| HuffpuffError::MalformedHeader(e.to_string()))?;
    Ok(u32::from_le_bytes(buf))
}

fn read_words(bytes: &[u8], start: usize, count: usize) -> Result<Vec<u32>, HuffpuffError> {
    let end = start + count * FIELD_BYTES;
    let region = bytes.get(start..end).ok_or_else(|| {
        HuffpuffError::MalformedHeader(format!(
            "word region [{}, {}) exceeds archive size {}",
            start,
            end,
            bytes.len()
        ))
    })?;

    Ok(region
        .chunks_exact(FIELD_BYTES)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_archive() -> CompressedArchive {
        // The "aaab" scenario: 29 tree bits, payload 1 1 1 00 01.
        CompressedArchive {
            tree_bits: bitvec![u32, Msb0;
                0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 0, // root, pair, leaf 'b'
                1, 0, 0, 0, 0, 0, 0, 0, 0,       // leaf 0x00
                1, 0, 1, 1, 0, 0, 0, 0, 1,       // leaf 'a'
            ],
            payload_bits: bitvec![u32, Msb0; 1, 1, 1, 0, 0, 0, 1],
        }
    }

    #[test]
    fn test_archive_roundtrip_is_successful() {
        let original = sample_archive();
        let bytes = original.to_bytes().unwrap();
        let reconstructed = CompressedArchive::from_bytes(&bytes).unwrap();
        assert_eq!(original, reconstructed);
    }

    #[test]
    fn test_to_bytes_produces_the_documented_layout() {
        let bytes = sample_archive().to_bytes().unwrap();
        assert_eq!(
            bytes,
            vec![
                29, 0, 0, 0, // tree bit length
                0x08, 0x0B, 0x50, 0x2C, // tree word, little-endian
                7, 0, 0, 0, // payload bit length
                0x00, 0x00, 0x00, 0xE2, // payload word, little-endian
            ]
        );
    }

    #[test]
    fn test_peek_info_is_correct() {
        let bytes = sample_archive().to_bytes().unwrap();
        let info = CompressedArchive::peek_info(&bytes).unwrap();

        assert_eq!(info.tree_bit_len, 29);
        assert_eq!(info.tree_words, 1);
        assert_eq!(info.payload_bit_len, 7);
        assert_eq!(info.payload_words, 1);
        assert_eq!(info.total_size, bytes.len());
    }

    #[test]
    fn test_truncating_the_final_word_is_rejected() {
        let mut bytes = sample_archive().to_bytes().unwrap();
        bytes.truncate(bytes.len() - FIELD_BYTES);

        let result = CompressedArchive::from_bytes(&bytes);
        assert!(matches!(result, Err(HuffpuffError::MalformedHeader(_))));
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        let mut bytes = sample_archive().to_bytes().unwrap();
        bytes.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

        let result = CompressedArchive::from_bytes(&bytes);
        assert!(matches!(result, Err(HuffpuffError::MalformedHeader(_))));
    }

    #[test]
    fn test_undersized_buffer_is_rejected() {
        let result = CompressedArchive::from_bytes(b"short");
        assert!(matches!(result, Err(HuffpuffError::MalformedHeader(_))));
    }

    #[test]
    fn test_absurd_tree_bit_length_is_rejected() {
        let mut bytes = sample_archive().to_bytes().unwrap();
        bytes[0..4].copy_from_slice(&u32::MAX.to_le_bytes());

        let result = CompressedArchive::peek_info(&bytes);
        assert!(matches!(result, Err(HuffpuffError::MalformedHeader(_))));
    }

    #[test]
    fn test_zero_payload_bit_length_is_rejected() {
        let mut bytes = sample_archive().to_bytes().unwrap();
        bytes[8..12].copy_from_slice(&0u32.to_le_bytes());

        let result = CompressedArchive::peek_info(&bytes);
        assert!(matches!(result, Err(HuffpuffError::MalformedHeader(_))));
    }

    #[test]
    fn test_zero_tree_bit_length_is_rejected() {
        let mut bytes = sample_archive().to_bytes().unwrap();
        bytes[0..4].copy_from_slice(&0u32.to_le_bytes());

        let result = CompressedArchive::peek_info(&bytes);
        assert!(matches!(result, Err(HuffpuffError::MalformedHeader(_))));
    }
}
