//! Items relating to the hash oracle
//!
//! In particular, the [`Digest`] and [`Capacity`] types and the [`HashOracle`] trait

use std::{
    fmt::{Debug, Display},
    rc::Rc,
    sync::Arc,
};

use crate::{error::HashError, field::RATE};

pub mod poseidon;
#[cfg(any(test, feature = "proptest"))]
mod proptest_impls;

/// The number of words in a digest or a capacity vector
pub const DIGEST_LEN: usize = 4;

/// The raw output of a [`HashOracle`]
///
/// Words are ordered least significant first, see [`Key::from_digest`] for the byte layout
///
/// [`Key::from_digest`]: crate::Key::from_digest
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Digest(pub [u64; DIGEST_LEN]);

impl Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({:?})", self.0)
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::Key::from_digest(self))
    }
}

/// The domain separation input of a hash call
///
/// This is hashed alongside the 8-word message, but is never part of the message itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capacity(pub [u64; DIGEST_LEN]);

impl Capacity {
    /// The all-zero capacity
    pub const ZERO: Capacity = Capacity([0; DIGEST_LEN]);
}

impl From<Digest> for Capacity {
    fn from(digest: Digest) -> Self {
        Self(digest.0)
    }
}

/// A fixed-arity hash over 8 input words and 4 capacity words
///
/// Implementations must be pure: the same input and capacity always give the same digest
pub trait HashOracle {
    /// Hash `input` under `capacity`
    ///
    /// ```rust
    /// # use smt_keys::hash::{poseidon::Poseidon, Capacity, HashOracle};
    /// let digest = Poseidon.hash(&[0; 8], &Capacity::ZERO).unwrap();
    /// println!("the hash of zero is {digest}");
    /// ```
    fn hash(&self, input: &[u64; RATE], capacity: &Capacity) -> Result<Digest, HashError>;
}

impl<T: ?Sized> HashOracle for &T
where
    T: HashOracle,
{
    fn hash(&self, input: &[u64; RATE], capacity: &Capacity) -> Result<Digest, HashError> {
        <T as HashOracle>::hash(self, input, capacity)
    }
}

impl<T: ?Sized> HashOracle for Box<T>
where
    T: HashOracle,
{
    fn hash(&self, input: &[u64; RATE], capacity: &Capacity) -> Result<Digest, HashError> {
        <T as HashOracle>::hash(self, input, capacity)
    }
}

impl<T: ?Sized> HashOracle for Rc<T>
where
    T: HashOracle,
{
    fn hash(&self, input: &[u64; RATE], capacity: &Capacity) -> Result<Digest, HashError> {
        <T as HashOracle>::hash(self, input, capacity)
    }
}

impl<T: ?Sized> HashOracle for Arc<T>
where
    T: HashOracle,
{
    fn hash(&self, input: &[u64; RATE], capacity: &Capacity) -> Result<Digest, HashError> {
        <T as HashOracle>::hash(self, input, capacity)
    }
}
