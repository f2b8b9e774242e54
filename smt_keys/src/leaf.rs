//! The kinds of leaf stored per account

use std::fmt::Display;

use crate::error::UnknownLeafType;

/// The attribute of an account that a leaf holds
///
/// Each variant has a fixed tag that is hashed into the key. Tags are part of the tree's
/// commitment format and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LeafType {
    /// The account balance
    Balance,
    /// The account nonce
    Nonce,
    /// The hash of the contract bytecode
    Code,
    /// A single contract storage slot
    Storage,
    /// The length of the contract bytecode in bytes
    CodeLength,
}

impl LeafType {
    /// Every leaf type, in tag order
    pub const ALL: [LeafType; 5] = [
        Self::Balance,
        Self::Nonce,
        Self::Code,
        Self::Storage,
        Self::CodeLength,
    ];

    /// The tag hashed into keys of this type
    #[inline]
    #[must_use]
    pub const fn tag(self) -> u64 {
        match self {
            Self::Balance => 0,
            Self::Nonce => 1,
            Self::Code => 2,
            Self::Storage => 3,
            Self::CodeLength => 4,
        }
    }
}

impl TryFrom<u64> for LeafType {
    type Error = UnknownLeafType;

    fn try_from(tag: u64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|leaf| leaf.tag() == tag)
            .ok_or(UnknownLeafType(tag))
    }
}

impl Display for LeafType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Balance => "balance",
            Self::Nonce => "nonce",
            Self::Code => "code",
            Self::Storage => "storage",
            Self::CodeLength => "code length",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_fixed() {
        let tags: Vec<_> = LeafType::ALL.iter().map(|leaf| leaf.tag()).collect();
        assert_eq!(tags, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn tag_round_trip() {
        for leaf in LeafType::ALL {
            assert_eq!(LeafType::try_from(leaf.tag()), Ok(leaf));
        }
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(LeafType::try_from(5), Err(UnknownLeafType(5)));
    }
}
