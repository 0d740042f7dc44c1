use bincode::{Decode, Encode};
use rand_core::{CryptoRng, RngCore};
use uuid::Uuid;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::SEED_LEN;

/// Represents the 128-bit identifier a mixer can be seeded from.
///
/// The bytes are wiped when the seed is dropped.
#[derive(Debug, Default, Encode, Decode, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn new(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Generate a random Seed.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; SEED_LEN];
        rng.fill_bytes(&mut bytes[..]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Check whether every byte of this seed is zero.
    ///
    /// Such a seed carries no entropy, and mixers refuse it.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl From<Uuid> for Seed {
    /// Uses the GUID byte layout, with the first three fields little endian.
    ///
    /// This is the layout existing seeds were derived from, so changing it
    /// would change every stream seeded from a `Uuid`.
    fn from(id: Uuid) -> Self {
        Self(id.to_bytes_le())
    }
}
