use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    error::HashError,
    field::RATE,
    hash::{Capacity, Digest, HashOracle, DIGEST_LEN},
};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A deterministic stand-in for the real hash that counts how often it is called
///
/// The digest is an FNV-1a style fold over the input words followed by the capacity words. It is
/// injective enough for separation tests and cheap to recompute by hand for golden vectors.
#[derive(Debug, Default)]
pub struct CountingOracle {
    calls: AtomicUsize,
}

impl CountingOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HashOracle for CountingOracle {
    fn hash(&self, input: &[u64; RATE], capacity: &Capacity) -> Result<Digest, HashError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut state = FNV_OFFSET;
        for word in input.iter().chain(capacity.0.iter()) {
            state = (state ^ word).wrapping_mul(FNV_PRIME);
        }

        let mut digest = [0; DIGEST_LEN];
        for (i, word) in digest.iter_mut().enumerate() {
            state = (state ^ i as u64).wrapping_mul(FNV_PRIME);
            *word = state;
        }

        Ok(Digest(digest))
    }
}

/// An oracle that always fails
#[derive(Debug, Default)]
pub struct FailingOracle;

impl HashOracle for FailingOracle {
    fn hash(&self, _: &[u64; RATE], _: &Capacity) -> Result<Digest, HashError> {
        Err(HashError::Other("oracle unavailable".into()))
    }
}

/// An oracle that fails on its first call and counts every call it receives
#[derive(Debug, Default)]
pub struct FailFirstOracle {
    inner: CountingOracle,
}

impl FailFirstOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.inner.calls()
    }
}

impl HashOracle for FailFirstOracle {
    fn hash(&self, input: &[u64; RATE], capacity: &Capacity) -> Result<Digest, HashError> {
        let digest = self.inner.hash(input, capacity)?;
        if self.inner.calls() == 1 {
            return Err(HashError::Other("first call fails".into()));
        }
        Ok(digest)
    }
}
