use alloy_primitives::U256;
use once_cell::sync::OnceCell;
use tracing::{debug, trace, warn};

use crate::{
    error::{Error, FormatError},
    field::{FieldElements, Width, RATE},
    hash::{poseidon::Poseidon, Capacity, Digest, HashOracle},
    key::Key,
    leaf::LeafType,
};


/// The hex seed of the capacity shared by balance, nonce, code and code length keys
///
/// This is the Poseidon hash of eight zero words under a zero capacity. Every implementation that
/// computes the same tree must use exactly this value.
pub const DEFAULT_CAPACITY_SEED: &str =
    "0xc71603f33a1144ca7953db0ab48808f4c4055e3364a246c33c18a9786cb0b359";

static DEFAULT_CAPACITY: OnceCell<Capacity> = OnceCell::new();

/// The capacity used for every account-level key
///
/// Parsed from [`DEFAULT_CAPACITY_SEED`] on first use and cached for the life of the process
pub fn default_capacity() -> Result<Capacity, FormatError> {
    DEFAULT_CAPACITY
        .get_or_try_init(|| {
            let capacity = Capacity::from(Digest::from_hex(DEFAULT_CAPACITY_SEED)?);
            debug!(?capacity, "materialised default capacity");
            Ok(capacity)
        })
        .copied()
}

/// Derives tree keys with a given [`HashOracle`]
///
/// All methods are pure, so a single deriver can be shared between threads as long as the oracle
/// is `Sync`
///
/// ```rust
/// # use alloy_primitives::Address;
/// # use smt_keys::{hash::poseidon::Poseidon, KeyDeriver};
/// let deriver = KeyDeriver::new(Poseidon);
/// let address: Address = "0x617b3a3528f9cdd6630fd3301b9c8911f7bf063d".parse().unwrap();
///
/// let key = deriver.code(address.as_slice()).unwrap();
/// assert_eq!(key, deriver.code(address.as_slice()).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyDeriver<H = Poseidon> {
    oracle: H,
}

impl<H: HashOracle> KeyDeriver<H> {
    /// Create a new [`KeyDeriver`] that hashes with `oracle`
    #[inline]
    #[must_use]
    pub fn new(oracle: H) -> Self {
        Self { oracle }
    }

    /// The oracle this deriver hashes with
    #[inline]
    #[must_use]
    pub fn oracle(&self) -> &H {
        &self.oracle
    }

    /// The key of the balance leaf of `address`
    ///
    /// `address` is a big-endian integer of at most 160 bits, such as the bytes of an [`Address`]
    ///
    /// [`Address`]: alloy_primitives::Address
    pub fn balance(&self, address: impl AsRef<[u8]>) -> Result<Key, Error> {
        self.account_key(address, LeafType::Balance)
    }

    /// The key of the nonce leaf of `address`
    pub fn nonce(&self, address: impl AsRef<[u8]>) -> Result<Key, Error> {
        self.account_key(address, LeafType::Nonce)
    }

    /// The key of the contract code leaf of `address`
    pub fn code(&self, address: impl AsRef<[u8]>) -> Result<Key, Error> {
        self.account_key(address, LeafType::Code)
    }

    /// The key of the contract code length leaf of `address`
    pub fn code_length(&self, address: impl AsRef<[u8]>) -> Result<Key, Error> {
        self.account_key(address, LeafType::CodeLength)
    }

    /// The key of any leaf that is addressed by the account alone
    ///
    /// The address is hashed together with the leaf tag under the [default capacity]. Returns
    /// [`Error::PositionRequired`] for [`LeafType::Storage`].
    ///
    /// [default capacity]: default_capacity
    pub fn account_key(&self, address: impl AsRef<[u8]>, leaf: LeafType) -> Result<Key, Error> {
        let result = self.derive_account_key(address.as_ref(), leaf);
        if let Err(err) = &result {
            warn!(%leaf, %err, "failed to derive key");
        }
        result
    }

    /// The key of a contract storage slot
    ///
    /// The position (at most 256 bits, big-endian) is first hashed under a zero capacity. That
    /// digest becomes the capacity of a second hash over the address and the storage tag, which
    /// binds the key to both the account and the slot.
    pub fn storage(
        &self,
        address: impl AsRef<[u8]>,
        position: impl AsRef<[u8]>,
    ) -> Result<Key, Error> {
        let result = self.derive_storage_key(address.as_ref(), position.as_ref());
        if let Err(err) = &result {
            warn!(leaf = %LeafType::Storage, %err, "failed to derive key");
        }
        result
    }

    /// [`KeyDeriver::storage`] with a typed storage position
    pub fn storage_u256(&self, address: impl AsRef<[u8]>, position: U256) -> Result<Key, Error> {
        self.storage(address, position.to_be_bytes::<32>())
    }

    fn derive_account_key(&self, address: &[u8], leaf: LeafType) -> Result<Key, Error> {
        if leaf == LeafType::Storage {
            return Err(Error::PositionRequired);
        }

        let capacity = default_capacity()?;
        let address = FieldElements::encode(address, Width::Address)?;

        let digest = self.invoke(&leaf_input(&address, leaf), &capacity, leaf)?;
        Ok(Key::from_digest(&digest))
    }

    fn derive_storage_key(&self, address: &[u8], position: &[u8]) -> Result<Key, Error> {
        // both inputs are checked before the first hash call
        let position = FieldElements::encode(position, Width::Word)?;
        let address = FieldElements::encode(address, Width::Address)?;

        let position_digest = self.invoke(position.words(), &Capacity::ZERO, LeafType::Storage)?;

        let input = leaf_input(&address, LeafType::Storage);
        let digest = self.invoke(&input, &Capacity::from(position_digest), LeafType::Storage)?;

        Ok(Key::from_digest(&digest))
    }

    fn invoke(
        &self,
        input: &[u64; RATE],
        capacity: &Capacity,
        leaf: LeafType,
    ) -> Result<Digest, Error> {
        trace!(%leaf, ?input, ?capacity, "invoking hash oracle");
        Ok(self.oracle.hash(input, capacity)?)
    }
}

/// `[address[0..5], 0, tag, 0]`
fn leaf_input(address: &FieldElements, leaf: LeafType) -> [u64; RATE] {
    let words = address.words();
    [
        words[0],
        words[1],
        words[2],
        words[3],
        words[4],
        0,
        leaf.tag(),
        0,
    ]
}
