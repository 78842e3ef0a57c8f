//! Keccak-256 hash chain that drives every trait draw

use crate::io::error::{GenerationError, invalid_parameter};
use num_bigint::BigUint;
use sha3::{Digest, Keccak256};
use std::fmt;

/// Width in bytes of a seed's packed encoding
pub const SEED_WIDTH: usize = 32;

/// 256-bit unsigned integer threaded through the draws of an item
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seed(BigUint);

impl Seed {
    /// Interpret a big-endian 32-byte word as a seed
    pub fn from_word(word: [u8; SEED_WIDTH]) -> Self {
        Self(BigUint::from_bytes_be(&word))
    }

    /// Packed `uint256` encoding: 32 bytes, big-endian, zero-padded
    pub fn to_word(&self) -> [u8; SEED_WIDTH] {
        let bytes = self.0.to_bytes_be();
        let mut word = [0_u8; SEED_WIDTH];
        let offset = SEED_WIDTH.saturating_sub(bytes.len());
        for (slot, byte) in word.iter_mut().skip(offset).zip(&bytes) {
            *slot = *byte;
        }
        word
    }

    /// Numeric value of the seed
    pub const fn value(&self) -> &BigUint {
        &self.0
    }

    /// Lowercase hex of the packed encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_word())
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl TryFrom<BigUint> for Seed {
    type Error = GenerationError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        if value.bits() > (SEED_WIDTH * 8) as u64 {
            return Err(invalid_parameter("seed", &value, &"exceeds 256 bits"));
        }
        Ok(Self(value))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One-way step from the current seed to the next
pub trait SeedChain {
    /// Derive the seed consumed by the next draw
    fn next_seed(&self, seed: &Seed) -> Seed;
}

/// Keccak-256 over the packed `uint256` encoding of the seed
///
/// Matches Solidity's `keccak256(abi.encodePacked(uint256(seed)))`, which is
/// what existing collections were generated with.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keccak256Chain;

impl SeedChain for Keccak256Chain {
    fn next_seed(&self, seed: &Seed) -> Seed {
        derive_next_seed(seed)
    }
}

/// Hash the packed encoding of `seed` and read the digest as the next seed
pub fn derive_next_seed(seed: &Seed) -> Seed {
    let digest = Keccak256::digest(seed.to_word());
    Seed(BigUint::from_bytes_be(&digest))
}
