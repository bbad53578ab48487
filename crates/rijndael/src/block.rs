//! Block and state layout.
//!
//! A block doubles as the 4x4 cipher state, filled column-major: byte `i`
//! sits at row `i % 4`, column `i / 4`.

/// Size of an AES block (and of an AES-128 key) in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Offset of `(row, col)` within a column-major state.
#[inline]
pub const fn state_index(row: usize, col: usize) -> usize {
    col * 4 + row
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
