//! AES round transformations.
//!
//! Every transform mutates a single state in place and never changes its
//! length; each forward transform has an exact inverse here.

use crate::block::{state_index, xor_in_place, Block};
use crate::gf::{mul_ct, xtime};
use crate::sbox::{inv_sbox, sbox};

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[state_index(row, col)] = src[state_index(row, (col + row) % 4)];
        }
    }
}

/// Rotates row `r` right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[state_index(row, (col + row) % 4)] = src[state_index(row, col)];
        }
    }
}

// Matrix rows {02 03 01 01} rotated.
fn mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

// Matrix rows {0e 0b 0d 09} rotated; branch-free in the state bytes.
fn inv_mix_single_column(col: &mut [u8; 4]) {
    let [a0, a1, a2, a3] = *col;
    col[0] = mul_ct(a0, 0x0e) ^ mul_ct(a1, 0x0b) ^ mul_ct(a2, 0x0d) ^ mul_ct(a3, 0x09);
    col[1] = mul_ct(a0, 0x09) ^ mul_ct(a1, 0x0e) ^ mul_ct(a2, 0x0b) ^ mul_ct(a3, 0x0d);
    col[2] = mul_ct(a0, 0x0d) ^ mul_ct(a1, 0x09) ^ mul_ct(a2, 0x0e) ^ mul_ct(a3, 0x0b);
    col[3] = mul_ct(a0, 0x0b) ^ mul_ct(a1, 0x0d) ^ mul_ct(a2, 0x09) ^ mul_ct(a3, 0x0e);
}

fn for_each_column(state: &mut Block, transform: fn(&mut [u8; 4])) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        transform(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for_each_column(state, mix_single_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for_each_column(state, inv_mix_single_column);
}

/// Adds (XORs) a round key into the state. Self-inverse.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
