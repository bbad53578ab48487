//! Key types for AES-128.

use core::fmt;
use core::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::Error;

/// Number of round keys in an AES-128 schedule.
pub const ROUND_KEY_COUNT: usize = 11;

/// Size of the flattened schedule in bytes.
pub const EXPANDED_KEY_SIZE: usize = ROUND_KEY_COUNT * BLOCK_SIZE;

/// AES-128 key wrapper. Cleared on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: BLOCK_SIZE,
            actual: value.len(),
        })?;
        Ok(Self(bytes))
    }
}

/// Parses 32 hex characters; surrounding whitespace is ignored.
impl FromStr for Aes128Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = Zeroizing::new(hex::decode(s.trim()).map_err(|_| Error::InvalidHex)?);
        Self::try_from(bytes.as_slice())
    }
}

// Keys never show up in logs or panic messages.
impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(..)")
    }
}

/// Expanded round keys for AES-128. Cleared on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round` is greater than 10.
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Flattens the schedule into 176 bytes, round key 0 first.
    pub fn as_bytes(&self) -> [u8; EXPANDED_KEY_SIZE] {
        let mut out = [0u8; EXPANDED_KEY_SIZE];
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoundKeys(..)")
    }
}
