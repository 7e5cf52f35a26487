//! Payload decoding: the root-to-leaf bit walk.
//!
//! Each payload bit steps the walk one edge (0 left, 1 right). Reaching a
//! leaf emits its symbol and restarts the walk at the root. Decoding is
//! governed entirely by the declared payload bit count: every declared bit is
//! consumed, and the walk must end exactly on a leaf boundary.

use bitvec::prelude::*;

use crate::codec::tree::HuffNode;
use crate::error::HuffpuffError;

/// Decodes `bits` against `root`, returning the emitted symbols in order.
///
/// The sentinel symbol is still present at the end of the returned buffer;
/// stripping it is the caller's job. A bare-leaf root emits its symbol once
/// per payload bit (the degenerate one-symbol alphabet has exactly one code,
/// so the bit values carry no information).
pub fn decode_payload(
    root: &HuffNode,
    bits: &BitSlice<u32, Msb0>,
) -> Result<Vec<u8>, HuffpuffError> {
    let mut decoded = Vec::new();

    if let HuffNode::Leaf { symbol, .. } = root {
        decoded.resize(bits.len(), *symbol);
    } else {
        let mut cursor = root;
        for (offset, bit) in bits.iter().by_vals().enumerate() {
            let HuffNode::Internal { left, right, .. } = cursor else {
                return Err(HuffpuffError::Internal(format!(
                    "payload walk stranded on a leaf at bit {}",
                    offset
                )));
            };

            cursor = if bit { right } else { left };

            if let HuffNode::Leaf { symbol, .. } = cursor {
                decoded.push(*symbol);
                cursor = root;
            }
        }

        if !std::ptr::eq(cursor, root) {
            return Err(HuffpuffError::UnexpectedEndOfPayload(format!(
                "payload bits ended mid-code after {} decoded symbols",
                decoded.len()
            )));
        }
    }

    if decoded.is_empty() {
        return Err(HuffpuffError::UnexpectedEndOfPayload(
            "payload decoded to zero symbols; the end-of-stream marker is missing".to_string(),
        ));
    }

    Ok(decoded)
}

//==================================================================================
// Unit Tests
//==================================================================================
