//! The [`Key`] type: the 32-byte address of a leaf in the state tree

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use crate::error::FormatError;

mod codec;
#[cfg(any(test, feature = "proptest"))]
mod proptest_impls;
mod serde_impls;

/// The length of a key in bytes
pub const KEY_LEN: usize = 32;

/// The address of a single leaf in the state tree
///
/// Keys compare as big-endian 256-bit integers
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Create a [`Key`] from its byte representation
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the byte representation of this key
    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> [u8; KEY_LEN] {
        self.0
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key(0x{})", hex::encode(self.0))
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Key {
    type Err = FormatError;

    /// Parse 64 hex digits, with or without a `0x` prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for Key {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Key> for [u8; KEY_LEN] {
    fn from(key: Key) -> Self {
        key.0
    }
}

pub(crate) fn parse_hex(s: &str) -> Result<[u8; KEY_LEN], FormatError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.len() != 2 * KEY_LEN {
        return Err(FormatError::Length {
            expected: 2 * KEY_LEN,
            actual: digits.len(),
        });
    }

    let mut bytes = [0; KEY_LEN];
    hex::decode_to_slice(digits, &mut bytes)?;
    Ok(bytes)
}
