//! Length-checked operations over untyped byte slices.
//!
//! These mirror the block-level API for callers holding plain buffers (FFI
//! shims, differential test drivers). Lengths are validated before anything is
//! read or written, so a rejected call leaves its buffers untouched.

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher;
use crate::error::{Error, Result};
use crate::key::{Aes128Key, EXPANDED_KEY_SIZE};
use crate::round;

fn state_mut(state: &mut [u8]) -> Result<&mut Block> {
    let actual = state.len();
    state.try_into().map_err(|_| Error::InvalidBlockLength {
        expected: BLOCK_SIZE,
        actual,
    })
}

fn block(bytes: &[u8]) -> Result<&Block> {
    bytes.try_into().map_err(|_| Error::InvalidBlockLength {
        expected: BLOCK_SIZE,
        actual: bytes.len(),
    })
}

/// SubBytes over a 16-byte buffer.
pub fn sub_bytes(state: &mut [u8]) -> Result<()> {
    round::sub_bytes(state_mut(state)?);
    Ok(())
}

/// InvSubBytes over a 16-byte buffer.
pub fn invert_sub_bytes(state: &mut [u8]) -> Result<()> {
    round::inv_sub_bytes(state_mut(state)?);
    Ok(())
}

/// ShiftRows over a 16-byte buffer.
pub fn shift_rows(state: &mut [u8]) -> Result<()> {
    round::shift_rows(state_mut(state)?);
    Ok(())
}

/// InvShiftRows over a 16-byte buffer.
pub fn invert_shift_rows(state: &mut [u8]) -> Result<()> {
    round::inv_shift_rows(state_mut(state)?);
    Ok(())
}

/// MixColumns over a 16-byte buffer.
pub fn mix_columns(state: &mut [u8]) -> Result<()> {
    round::mix_columns(state_mut(state)?);
    Ok(())
}

/// InvMixColumns over a 16-byte buffer.
pub fn invert_mix_columns(state: &mut [u8]) -> Result<()> {
    round::inv_mix_columns(state_mut(state)?);
    Ok(())
}

/// AddRoundKey; both buffers must be 16 bytes.
pub fn add_round_key(state: &mut [u8], round_key: &[u8]) -> Result<()> {
    let round_key = block(round_key)?;
    round::add_round_key(state_mut(state)?, round_key);
    Ok(())
}

/// Expands a 16-byte key into the flattened 176-byte schedule.
pub fn expand_key(key: &[u8]) -> Result<[u8; EXPANDED_KEY_SIZE]> {
    let key = Aes128Key::try_from(key)?;
    Ok(cipher::expand_key(&key).as_bytes())
}

/// Encrypts one 16-byte block under a 16-byte key.
pub fn aes_encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let key = Aes128Key::try_from(key)?;
    let plaintext = block(plaintext)?;
    Ok(cipher::encrypt_block(plaintext, &cipher::expand_key(&key)))
}

/// Decrypts one 16-byte block under a 16-byte key.
pub fn aes_decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let key = Aes128Key::try_from(key)?;
    let ciphertext = block(ciphertext)?;
    Ok(cipher::decrypt_block(ciphertext, &cipher::expand_key(&key)))
}
