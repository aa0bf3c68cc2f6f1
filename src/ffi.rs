//! C entry points for the limb operations.
//!
//! Everything here is total and panic-free: plain scalars in, a
//! [`Uint128`] by value out. The header is generated into
//! `include/softu128.h` by the build script.

use crate::core::uint128;
use crate::core::Uint128;

/// `(lo1 + hi1 * 2^64) + (lo2 + hi2 * 2^64) mod 2^128`.
#[unsafe(no_mangle)]
pub extern "C" fn softu128_add(lo1: u64, hi1: u64, lo2: u64, hi2: u64) -> Uint128 {
    let (lo, hi) = uint128::add(lo1, hi1, lo2, hi2);
    Uint128 { lo, hi }
}

/// Two's-complement negation of `(lo, hi)` in the 128-bit ring.
#[unsafe(no_mangle)]
pub extern "C" fn softu128_negate(lo: u64, hi: u64) -> Uint128 {
    let (lo, hi) = uint128::negate(lo, hi);
    Uint128 { lo, hi }
}

/// True iff the first value is strictly below the second, unsigned.
#[unsafe(no_mangle)]
pub extern "C" fn softu128_lt(lo1: u64, hi1: u64, lo2: u64, hi2: u64) -> bool {
    uint128::lt(lo1, hi1, lo2, hi2)
}

/// `(lo + hi * 2^64) * v mod 2^128`.
#[unsafe(no_mangle)]
pub extern "C" fn softu128_mul64(lo: u64, hi: u64, v: u64) -> Uint128 {
    let (lo, hi) = uint128::mul64(lo, hi, v);
    Uint128 { lo, hi }
}

/// `(lo1 + hi1 * 2^64) * (lo2 + hi2 * 2^64) mod 2^128`.
#[unsafe(no_mangle)]
pub extern "C" fn softu128_mul(lo1: u64, hi1: u64, lo2: u64, hi2: u64) -> Uint128 {
    let (lo, hi) = uint128::mul(lo1, hi1, lo2, hi2);
    Uint128 { lo, hi }
}
