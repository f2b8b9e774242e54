//! The Goldilocks Poseidon hash
//!
//! This is the width-12 Poseidon permutation over `p = 2^64 - 2^32 + 1` used by the Polygon Hermez
//! zkEVM state tree. The sponge state is the 8 input words followed by the 4 capacity words, and
//! the digest is the first 4 words of the permuted state.

use plonky2::{
    field::{
        goldilocks_field::GoldilocksField,
        types::{Field, PrimeField64},
    },
    hash::poseidon::Poseidon as PoseidonPermutation,
};

use super::{Capacity, Digest, HashOracle, DIGEST_LEN};
use crate::{error::HashError, field::RATE};

/// The Goldilocks prime
pub const GOLDILOCKS_MODULUS: u64 = 0xFFFF_FFFF_0000_0001;

const SPONGE_WIDTH: usize = RATE + DIGEST_LEN;

/// A [`HashOracle`] backed by the Goldilocks Poseidon permutation
///
/// Words are never reduced: anything at or above [`GOLDILOCKS_MODULUS`] is rejected with
/// [`HashError::NonCanonical`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Poseidon;

impl HashOracle for Poseidon {
    fn hash(&self, input: &[u64; RATE], capacity: &Capacity) -> Result<Digest, HashError> {
        let mut state = [GoldilocksField::ZERO; SPONGE_WIDTH];

        let words = input.iter().chain(capacity.0.iter());
        for (index, (slot, &value)) in state.iter_mut().zip(words).enumerate() {
            if value >= GOLDILOCKS_MODULUS {
                return Err(HashError::NonCanonical { index, value });
            }
            *slot = GoldilocksField::from_canonical_u64(value);
        }

        let output = <GoldilocksField as PoseidonPermutation>::poseidon(state);

        Ok(Digest(std::array::from_fn(|i| output[i].to_canonical_u64())))
    }
}
