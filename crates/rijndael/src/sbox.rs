//! Byte substitution tables and round constants.

use crate::gf;

/// Rijndael affine map: `b ^ rotl(b,1) ^ rotl(b,2) ^ rotl(b,3) ^ rotl(b,4) ^ 0x63`.
#[inline]
const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

/// Inverse of [`affine`].
#[inline]
const fn inv_affine(b: u8) -> u8 {
    let y = b ^ 0x63;
    y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6)
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(gf::inverse(i as u8));
        i += 1;
    }
    table
}

const fn build_inv_sbox(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[forward[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const fn build_rcon() -> [u8; 11] {
    // RCON[0] is never consumed; the schedule indexes by i / 4 starting at 1.
    let mut table = [0u8; 11];
    let mut value = 1u8;
    let mut i = 1;
    while i < 11 {
        table[i] = value;
        value = gf::xtime(value);
        i += 1;
    }
    table
}

/// Forward S-box.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse S-box; `INV_SBOX[SBOX[b]] == b`.
pub const INV_SBOX: [u8; 256] = build_inv_sbox(&SBOX);

/// Key schedule round constants, `RCON[i] = x^(i-1)` for `i >= 1`.
pub const RCON: [u8; 11] = build_rcon();

/// Substitutes a byte through the S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    if cfg!(feature = "constant-time") {
        ct::sbox(byte)
    } else {
        SBOX[byte as usize]
    }
}

/// Substitutes a byte through the inverse S-box.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    if cfg!(feature = "constant-time") {
        ct::inv_sbox(byte)
    } else {
        INV_SBOX[byte as usize]
    }
}

/// Table-free substitution: no memory access is indexed by the input.
pub mod ct {
    use super::{affine, inv_affine};
    use crate::gf;

    /// Forward S-box computed arithmetically.
    #[inline]
    pub fn sbox(byte: u8) -> u8 {
        affine(gf::inverse_ct(byte))
    }

    /// Inverse S-box computed arithmetically.
    #[inline]
    pub fn inv_sbox(byte: u8) -> u8 {
        gf::inverse_ct(inv_affine(byte))
    }
}
