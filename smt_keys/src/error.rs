//! Errors returned while deriving keys

/// An integer didn't fit in the bit width it was declared with
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The integer has more significant bits than the width allows
    #[error("integer needs {bits} bits, but at most {width} are allowed")]
    TooWide {
        /// Number of significant bits in the input
        bits: usize,
        /// The declared width in bits
        width: usize,
    },
}

/// A hex constant or key string was malformed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Wrong number of hex digits
    #[error("expected {expected} hex digits, found {actual}")]
    Length {
        /// Number of digits required
        expected: usize,
        /// Number of digits found (after any `0x` prefix)
        actual: usize,
    },

    /// The string contained something other than hex digits
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// An error raised by a [`HashOracle`]
///
/// [`HashOracle`]: crate::hash::HashOracle
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// A state word was not a canonical field element
    #[error("word {value:#x} at state index {index} is not below the field modulus")]
    NonCanonical {
        /// Position in the sponge state: 0..8 is the input, 8..12 is the capacity
        index: usize,
        /// The offending value
        value: u64,
    },

    /// Any other fault inside the hash implementation
    #[error("hash computation failed: {0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// An error encountered while deriving a [`Key`]
///
/// A derivation either produces a complete key or one of these, there is never a partial result
///
/// [`Key`]: crate::Key
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An address or storage position was too wide
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// The hash oracle failed
    #[error("hash oracle error: {0}")]
    Hash(#[from] HashError),

    /// The default capacity seed couldn't be parsed
    #[error("malformed constant: {0}")]
    Format(#[from] FormatError),

    /// A storage key was requested without a storage position
    #[error("storage keys need a storage position, use `KeyDeriver::storage`")]
    PositionRequired,
}

/// A leaf tag that doesn't correspond to any [`LeafType`]
///
/// [`LeafType`]: crate::LeafType
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown leaf type tag: {0}")]
pub struct UnknownLeafType(pub u64);
