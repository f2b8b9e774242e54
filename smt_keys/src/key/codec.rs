//! Conversions between hash digests and keys

use super::{parse_hex, Key, KEY_LEN};
use crate::{
    error::FormatError,
    hash::{Digest, DIGEST_LEN},
};

impl Key {
    /// Serialize a digest into its canonical key
    ///
    /// The digest is read as the 256-bit integer `d[0] + d[1]·2^64 + d[2]·2^128 + d[3]·2^192`
    /// and written big-endian, so the most significant word `d[3]` comes first
    ///
    /// ```rust
    /// # use smt_keys::{hash::Digest, Key};
    /// let key = Key::from_digest(&Digest([1, 0, 0, 0]));
    /// assert_eq!(key.to_bytes()[31], 1);
    /// ```
    #[must_use]
    pub fn from_digest(digest: &Digest) -> Self {
        let mut bytes = [0; KEY_LEN];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(digest.0.iter().rev()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        Self(bytes)
    }

    /// The inverse of [`Key::from_digest`]
    #[must_use]
    pub fn to_digest(&self) -> Digest {
        let mut words = [0; DIGEST_LEN];
        for (word, chunk) in words.iter_mut().rev().zip(self.0.chunks_exact(8)) {
            let mut be = [0; 8];
            be.copy_from_slice(chunk);
            *word = u64::from_be_bytes(be);
        }

        Digest(words)
    }
}

impl Digest {
    /// Parse a 64-digit hex constant into a digest
    ///
    /// The first 16 digits are the most significant word, so this agrees with
    /// [`Key::from_digest`]: `Key::from_digest(&Digest::from_hex(s)?)` has the bytes `s` spells
    /// out.
    pub fn from_hex(s: &str) -> Result<Self, FormatError> {
        parse_hex(s).map(|bytes| Key(bytes).to_digest())
    }
}
