// In: src/bridge/stateless_api.rs

use crate::bridge::format::{CompressedArchive, CompressionStats};
use crate::codec;
use crate::error::HuffpuffError;

/// Compresses a byte buffer into a serialized archive.
///
/// The non-empty-input precondition lives here, at the boundary: an empty
/// alphabet has no coding tree, so the engine is never invoked for one.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, HuffpuffError> {
    if input.is_empty() {
        return Err(HuffpuffError::EmptyInput);
    }

    let archive = codec::compress_bytes(input)?;
    archive.to_bytes()
}

/// Decompresses a serialized archive back into the original byte buffer.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, HuffpuffError> {
    let archive = CompressedArchive::from_bytes(bytes)?;
    codec::decompress_bytes(&archive)
}

/// Analyzes a serialized archive without decoding the payload.
/// This function acts as a simple facade over the `peek_info` method.
pub fn analyze(bytes: &[u8]) -> Result<CompressionStats, HuffpuffError> {
    let info = CompressedArchive::peek_info(bytes)?;

    Ok(CompressionStats {
        total_size: info.total_size,
        tree_bits: info.tree_bit_len,
        payload_bits: info.payload_bit_len,
    })
}
