//! AES-128 (Rijndael) as specified by FIPS-197.
//!
//! The crate provides:
//! - GF(2^8) arithmetic and compile-time S-box / round-constant tables.
//! - The individual round transforms and their inverses.
//! - The AES-128 key schedule and single-block encryption and decryption.
//! - [`Aes128`], a cipher context that expands its key once.
//! - [`checked`], the same operations over plain byte slices with length
//!   validation.
//!
//! Chaining modes, padding and authenticated encryption are left to callers.
//! Table lookups are not constant-time by default; enable the `constant-time`
//! feature to compute substitutions arithmetically instead.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
pub mod checked;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;

pub use crate::block::{state_index, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, Aes128};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, EXPANDED_KEY_SIZE, ROUND_KEY_COUNT};
pub use crate::sbox::{inv_sbox, sbox};
