//! The codec engine: sequences the pure kernels into the two end-to-end
//! transformations.
//!
//! Compression: append the end-of-stream sentinel, tally frequencies, grow
//! the tree, derive the code table, encode the payload, flatten the tree,
//! and hand both bit streams to the bridge's archive format.
//!
//! Decompression: parse the tree back out of its flattened bits, walk the
//! payload bits against it, and strip the single trailing sentinel symbol.
//!
//! The sentinel is the byte 0x00, appended exactly once. Decoding never
//! searches for it — the payload bit length delimits the stream — so literal
//! 0x00 bytes in the input are indistinguishable from data and round-trip
//! exactly.

pub mod codebook;
pub mod decoder;
pub mod tree;

use crate::bridge::format::CompressedArchive;
use crate::error::HuffpuffError;
use crate::kernels::frequency::FrequencyTable;

/// The end-of-stream marker appended to the input before frequency analysis.
pub const SENTINEL: u8 = 0x00;

/// Compresses a non-empty input buffer into an in-memory archive.
pub fn compress_bytes(input: &[u8]) -> Result<CompressedArchive, HuffpuffError> {
    let mut terminated = Vec::with_capacity(input.len() + 1);
    terminated.extend_from_slice(input);
    terminated.push(SENTINEL);

    let table = FrequencyTable::tally(&terminated);
    let root = tree::build_tree(&table)?;
    let book = codebook::CodeBook::from_tree(&root);

    let payload_bits = book.encode(&terminated)?;
    let tree_bits = tree::flatten_tree(&root);

    log::debug!(
        "compressed {} bytes: {} distinct symbols, {} tree bits, {} payload bits",
        input.len(),
        table.distinct_symbols(),
        tree_bits.len(),
        payload_bits.len()
    );
    log_metric!(
        "event" = "compress",
        "input_bytes" = &input.len(),
        "distinct_symbols" = &table.distinct_symbols(),
        "payload_bits" = &payload_bits.len(),
    );

    Ok(CompressedArchive {
        tree_bits,
        payload_bits,
    })
}

/// Decompresses an in-memory archive back to the original bytes.
pub fn decompress_bytes(archive: &CompressedArchive) -> Result<Vec<u8>, HuffpuffError> {
    let root = tree::parse_tree(&archive.tree_bits)?;

    if !root.is_leaf() && archive.payload_bits.len() < 2 {
        // The shortest possible payload is one data symbol plus the sentinel.
        return Err(HuffpuffError::UnexpectedEndOfPayload(format!(
            "{}-bit payload cannot hold a symbol and the end-of-stream marker",
            archive.payload_bits.len()
        )));
    }

    let mut decoded = decoder::decode_payload(&root, &archive.payload_bits)?;

    // The last emitted symbol is the sentinel appended at compress time.
    decoded.pop();

    log::debug!("decompressed {} bytes", decoded.len());

    Ok(decoded)
}

//==================================================================================
// Unit Tests
//==================================================================================
