//! Prefix-code generation and payload encoding.
//!
//! The code table is read off the tree by depth-first traversal: `0` on a
//! left descent, `1` on a right descent, the accumulated path recorded at
//! each leaf. Codes are prefix-free by construction (leaf paths of a full
//! binary tree). Lookup during encoding is O(1) via a 256-slot array.

use bitvec::prelude::*;

use crate::codec::tree::HuffNode;
use crate::error::HuffpuffError;

//==================================================================================
// 1. Public Struct
//==================================================================================

/// The symbol -> bit-code mapping for one tree.
#[derive(Debug, Clone)]
pub struct CodeBook {
    codes: [Option<BitVec<u32, Msb0>>; 256],
}

//==================================================================================
// 2. Core Implementation
//==================================================================================

impl CodeBook {
    /// Derives the code table from a tree.
    ///
    /// A bare-leaf root gets the fixed one-bit code `0`: an empty code would
    /// make the payload zero bits long and undecodable.
    pub fn from_tree(root: &HuffNode) -> Self {
        let mut codes: [Option<BitVec<u32, Msb0>>; 256] = std::array::from_fn(|_| None);

        if let HuffNode::Leaf { symbol, .. } = root {
            codes[*symbol as usize] = Some(bitvec![u32, Msb0; 0]);
        } else {
            let mut path = BitVec::new();
            collect_codes(root, &mut path, &mut codes);
        }

        CodeBook { codes }
    }

    /// The code for one symbol, if the symbol occurs in the tree.
    pub fn code(&self, symbol: u8) -> Option<&BitSlice<u32, Msb0>> {
        self.codes[symbol as usize].as_deref()
    }

    /// The number of symbols that have a code.
    pub fn coded_symbols(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Concatenates the codes of every byte of `bytes`, in input order.
    ///
    /// Every byte must have a code; the caller derives the table from the
    /// same (sentinel-terminated) buffer it encodes, so a miss is a bug.
    pub fn encode(&self, bytes: &[u8]) -> Result<BitVec<u32, Msb0>, HuffpuffError> {
        let mut payload = BitVec::new();

        for &byte in bytes {
            let code = self.code(byte).ok_or_else(|| {
                HuffpuffError::Internal(format!("no code generated for byte 0x{:02x}", byte))
            })?;
            payload.extend_from_bitslice(code);
        }

        Ok(payload)
    }
}

fn collect_codes(
    node: &HuffNode,
    path: &mut BitVec<u32, Msb0>,
    codes: &mut [Option<BitVec<u32, Msb0>>; 256],
) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            codes[*symbol as usize] = Some(path.clone());
        }
        HuffNode::Internal { left, right, .. } => {
            path.push(false);
            collect_codes(left, path, codes);
            path.pop();

            path.push(true);
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
