//! Splitting integers into field-safe words
//!
//! The hash works over a 64-bit prime field, so arbitrary integers are cut into 32-bit chunks,
//! each of which is always a canonical field element.

use crate::error::EncodingError;

/// The number of words in a single hash input
pub const RATE: usize = 8;

/// The bit width an integer is declared to have
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    /// An Ethereum address (160 bits)
    Address,
    /// A full EVM word, such as a storage position (256 bits)
    Word,
}

impl Width {
    /// The number of bits allowed by this width
    #[inline]
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            Self::Address => 160,
            Self::Word => 256,
        }
    }
}

/// An integer split into eight 32-bit chunks, least significant chunk first
///
/// Every word is below `2^32`. Chunks beyond the integer's width are zero, so an address only
/// occupies words 0 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldElements([u64; RATE]);

impl FieldElements {
    /// The encoding of zero
    pub const ZERO: Self = Self([0; RATE]);

    /// Encode a big-endian unsigned integer
    ///
    /// Leading zero bytes are ignored, so `[0, 0, 1]` and `[1]` encode identically. Fails if the
    /// integer has more significant bits than `width` allows.
    ///
    /// ```rust
    /// # use smt_keys::field::{FieldElements, Width};
    /// let bytes = [0x01, 0x02, 0x03, 0x04, 0x05];
    /// let encoded = FieldElements::encode(&bytes, Width::Address).unwrap();
    /// assert_eq!(encoded.words(), &[0x0203_0405, 0x01, 0, 0, 0, 0, 0, 0]);
    ///
    /// assert!(FieldElements::encode(&[0xff; 21], Width::Address).is_err());
    /// ```
    pub fn encode(bytes: &[u8], width: Width) -> Result<Self, EncodingError> {
        let first_significant = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        let significant = &bytes[first_significant..];

        let bits = significant_bits(significant);
        if bits > width.bits() {
            return Err(EncodingError::TooWide {
                bits,
                width: width.bits(),
            });
        }

        let mut padded = [0u8; 4 * RATE];
        padded[4 * RATE - significant.len()..].copy_from_slice(significant);

        let mut words = [0; RATE];
        for (word, chunk) in words.iter_mut().zip(padded.rchunks_exact(4)) {
            *word = u64::from(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        Ok(Self(words))
    }

    /// The encoded words, least significant first
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[u64; RATE] {
        &self.0
    }
}

fn significant_bits(bytes: &[u8]) -> usize {
    match bytes.first() {
        None => 0,
        Some(first) => bytes.len() * 8 - first.leading_zeros() as usize,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prop_assert;
    use test_strategy::proptest;

    use super::*;

    #[test]
    fn address_layout_matches_chunked_bytes() {
        let address = hex::decode("617b3a3528f9cdd6630fd3301b9c8911f7bf063d").unwrap();
        let encoded = FieldElements::encode(&address, Width::Address).unwrap();

        assert_eq!(
            encoded.words(),
            &[0xf7bf_063d, 0x1b9c_8911, 0x630f_d330, 0x28f9_cdd6, 0x617b_3a35, 0, 0, 0]
        );
    }

    #[test]
    fn empty_and_zero_encode_to_zero() {
        assert_eq!(
            FieldElements::encode(&[], Width::Address).unwrap(),
            FieldElements::ZERO
        );
        assert_eq!(
            FieldElements::encode(&[0; 32], Width::Word).unwrap(),
            FieldElements::ZERO
        );
    }

    #[test]
    fn leading_zeros_dont_count() {
        let mut long = vec![0; 12];
        long.extend([0xab; 20]);

        assert_eq!(
            FieldElements::encode(&long, Width::Address).unwrap(),
            FieldElements::encode(&[0xab; 20], Width::Address).unwrap()
        );
    }

    #[test]
    fn max_word_fills_every_slot() {
        let encoded = FieldElements::encode(&[0xff; 32], Width::Word).unwrap();
        assert_eq!(encoded.words(), &[0xffff_ffff; RATE]);
    }

    #[test]
    fn widths_are_enforced() {
        let mut just_too_wide = vec![0x01];
        just_too_wide.extend([0; 20]);

        assert_eq!(
            FieldElements::encode(&just_too_wide, Width::Address),
            Err(EncodingError::TooWide {
                bits: 161,
                width: 160
            })
        );
        assert!(FieldElements::encode(&just_too_wide, Width::Word).is_ok());

        let mut word_too_wide = vec![0x80];
        word_too_wide.extend([0; 32]);

        assert_eq!(
            FieldElements::encode(&word_too_wide, Width::Word),
            Err(EncodingError::TooWide {
                bits: 264,
                width: 256
            })
        );
    }

    #[proptest]
    fn words_are_always_field_safe(bytes: [u8; 32]) {
        let encoded = FieldElements::encode(&bytes, Width::Word).unwrap();
        prop_assert!(encoded.words().iter().all(|w| *w < 1 << 32));
    }

    #[proptest]
    fn addresses_leave_high_slots_empty(address: [u8; 20]) {
        let encoded = FieldElements::encode(&address, Width::Address).unwrap();
        prop_assert!(encoded.words()[5..].iter().all(|w| *w == 0));
    }
}
