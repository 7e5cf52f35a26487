//! This module contains the pure, stateless kernels for converting between a
//! logical bit sequence and fixed-width 32-bit storage words.
//!
//! Both serialized streams of an archive (the flattened tree and the encoded
//! payload) pass through here. The packing rule: bits are consumed in order
//! and fill each word from the most significant bit downward; an incomplete
//! final word is zero-padded on the right (low-order bits). The original bit
//! count is always carried separately by the caller — it is never inferred
//! from the word count, which makes the padding unambiguous on unpack.

use bitvec::prelude::*;

use crate::error::HuffpuffError;

/// Bits per storage word.
pub const WORD_BITS: usize = 32;

/// Number of 32-bit words required to hold `bit_len` bits.
pub fn words_for(bit_len: usize) -> usize {
    bit_len.div_ceil(WORD_BITS)
}

//==================================================================================
// 1. Public API
//==================================================================================

/// Packs a bit sequence into 32-bit words, most significant bit first.
pub fn pack_words(bits: &BitSlice<u32, Msb0>) -> Vec<u32> {
    let mut words = Vec::with_capacity(words_for(bits.len()));

    for chunk in bits.chunks(WORD_BITS) {
        let mut word = 0u32;
        for (i, bit) in chunk.iter().by_vals().enumerate() {
            if bit {
                word |= 1 << (WORD_BITS - 1 - i);
            }
        }
        words.push(word);
    }

    words
}

/// Unpacks exactly `bit_len` bits from a word sequence, discarding padding.
///
/// The word count must be exactly `ceil(bit_len / 32)`; anything else means
/// the stream was truncated or carries trailing garbage.
pub fn unpack_bits(words: &[u32], bit_len: usize) -> Result<BitVec<u32, Msb0>, HuffpuffError> {
    if words.len() != words_for(bit_len) {
        return Err(HuffpuffError::MalformedHeader(format!(
            "bit length {} requires {} words, got {}",
            bit_len,
            words_for(bit_len),
            words.len()
        )));
    }

    let mut bits = BitVec::with_capacity(bit_len);
    for i in 0..bit_len {
        let word = words[i / WORD_BITS];
        let bit = (word >> (WORD_BITS - 1 - i % WORD_BITS)) & 1 == 1;
        bits.push(bit);
    }

    Ok(bits)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_fills_words_msb_first() {
        // 1110001 followed by 25 padding zeros -> 0xE2000000.
        let bits = bitvec![u32, Msb0; 1, 1, 1, 0, 0, 0, 1];
        assert_eq!(pack_words(&bits), vec![0xE200_0000]);
    }

    #[test]
    fn test_pack_unpack_roundtrip_is_exact_for_any_length() {
        for len in [1, 7, 31, 32, 33, 63, 64, 65, 257] {
            let mut bits = BitVec::<u32, Msb0>::new();
            for i in 0..len {
                bits.push(i % 3 == 0);
            }

            let words = pack_words(&bits);
            assert_eq!(words.len(), words_for(len));

            let unpacked = unpack_bits(&words, len).unwrap();
            assert_eq!(unpacked, bits, "length {}", len);
        }
    }

    #[test]
    fn test_unpack_zero_bits_from_no_words() {
        let bits = unpack_bits(&[], 0).unwrap();
        assert!(bits.is_empty());
    }

    #[test]
    fn test_unpack_rejects_missing_words() {
        let result = unpack_bits(&[0xFFFF_FFFF], 33);
        assert!(matches!(result, Err(HuffpuffError::MalformedHeader(_))));
    }

    #[test]
    fn test_unpack_rejects_surplus_words() {
        let result = unpack_bits(&[0, 0], 7);
        assert!(matches!(result, Err(HuffpuffError::MalformedHeader(_))));
    }

    #[test]
    fn test_padding_bits_are_discarded_on_unpack() {
        // Same 3 meaningful bits, different garbage in the padding region.
        let clean = unpack_bits(&[0b101u32 << 29], 3).unwrap();
        let dirty = unpack_bits(&[(0b101u32 << 29) | 0x1FFF_FFFF], 3).unwrap();
        assert_eq!(clean, dirty);
        assert_eq!(clean.len(), 3);
    }
}
