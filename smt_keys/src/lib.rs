#![warn(clippy::pedantic)]
#![warn(clippy::unwrap_used, clippy::expect_used)]
#![deny(missing_docs)]

//! Sparse Merkle tree leaf keys
//!
//! This library derives the 32-byte leaf addresses of a zkEVM state tree. Every account attribute
//! (balance, nonce, contract code, code length, and each contract storage slot) lives at a key
//! computed with the [Goldilocks Poseidon][poseidon] hash, so the same key can be recomputed
//! inside an arithmetic circuit.
//!
//! ```rust
//! # use smt_keys::{hash::poseidon::Poseidon, KeyDeriver};
//! let deriver = KeyDeriver::new(Poseidon);
//! let address = [0x11; 20];
//!
//! let balance = deriver.balance(address).unwrap();
//! let nonce = deriver.nonce(address).unwrap();
//! let slot = deriver.storage(address, [0x01]).unwrap();
//!
//! assert_ne!(balance, nonce);
//! assert_ne!(balance, slot);
//! println!("balance leaf of 0x1111..: {balance}");
//! ```
//!
//! The hash is an injectable [`HashOracle`], so derivation can be tested against a stub without
//! the field arithmetic engine.
//!
//! Types provided by this library implement [`Arbitrary`], for use with [`proptest`], gated behind
//! the `proptest` feature flag.
//!
//! [poseidon]: https://eprint.iacr.org/2019/458.pdf
//!
//! [`HashOracle`]: hash::HashOracle
//! [`Arbitrary`]: proptest::prelude::Arbitrary

pub mod error;
pub mod field;
pub mod hash;
pub mod key;
pub mod leaf;

mod deriver;
pub use deriver::{default_capacity, KeyDeriver, DEFAULT_CAPACITY_SEED};
pub use error::Error;
pub use key::Key;
pub use leaf::LeafType;

#[cfg(test)]
mod testing;
