//! Arithmetic in GF(2^8) with the Rijndael reduction polynomial
//! `x^8 + x^4 + x^3 + x + 1` (0x11B).
//!
//! Everything here is `const fn` so the substitution and round-constant tables
//! can be derived at compile time.

/// Low byte of the reduction polynomial, applied when a doubling overflows.
const REDUCTION: u8 = 0x1b;

// a^254 == a^-1 since the multiplicative group has order 255.
macro_rules! pow254 {
    ($a:expr, $mul:ident) => {{
        let a = $a;
        let a2 = $mul(a, a);
        let a4 = $mul(a2, a2);
        let a8 = $mul(a4, a4);
        let a16 = $mul(a8, a8);
        let a32 = $mul(a16, a16);
        let a64 = $mul(a32, a32);
        let a128 = $mul(a64, a64);
        let t = $mul(a128, a64);
        let t = $mul(t, a32);
        let t = $mul(t, a16);
        let t = $mul(t, a8);
        let t = $mul(t, a4);
        $mul(t, a2)
    }};
}

/// Field addition (and subtraction): bitwise XOR.
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplies by `x` (i.e. `{02}`), reducing when the high bit was set.
///
/// The reduction is selected with a mask rather than a branch, so the state
/// bytes fed through MixColumns never steer control flow.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ (REDUCTION & (byte >> 7).wrapping_neg())
}

/// Carry-less multiplication modulo 0x11B.
pub const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Multiplicative inverse, with `inverse(0) == 0`.
pub const fn inverse(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    pow254!(a, mul)
}

/// Branch-free multiplication: always eight iterations, no data-dependent jumps.
#[inline]
pub const fn mul_ct(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        let take = (b & 1).wrapping_neg();
        product ^= a & take;
        let carry = (a >> 7).wrapping_neg();
        a = (a << 1) ^ (REDUCTION & carry);
        b >>= 1;
        i += 1;
    }
    product
}

/// Branch-free inverse. `0^254` is already zero so no special case is needed.
#[inline]
pub const fn inverse_ct(a: u8) -> u8 {
    pow254!(a, mul_ct)
}
