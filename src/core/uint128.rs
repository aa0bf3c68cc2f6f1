//! 128-bit unsigned arithmetic emulated on two 64-bit limbs.
//!
//! A value is the pair `(lo, hi)` meaning `lo + hi * 2^64`. The encoding is
//! canonical, so every function below returns the unique representation of
//! its result modulo 2^128. All operations wrap; none can fail.

use std::ops::{Add, Mul, Not, Sub};

use crate::core::wide_arith::WideningMul;

/// Adds two 128-bit values modulo 2^128.
///
/// The carry out of the low limb is folded into the high limb; overflow out
/// of the high limb is dropped, which is the wraparound the modulus demands.
#[inline(always)]
pub fn add(lo1: u64, hi1: u64, lo2: u64, hi2: u64) -> (u64, u64) {
    let (lo, carry) = lo1.overflowing_add(lo2);
    let hi = hi1.wrapping_add(hi2).wrapping_add(carry as u64);
    (lo, hi)
}

/// Two's-complement negation in the 128-bit ring: complement both limbs,
/// then add one. `negate(0, 0)` is `(0, 0)`.
#[inline(always)]
pub fn negate(lo: u64, hi: u64) -> (u64, u64) {
    add(!lo, !hi, 1, 0)
}

/// Returns true iff `(lo1, hi1)` is strictly below `(lo2, hi2)` as unsigned
/// 128-bit integers.
///
/// Lexicographic on (hi, lo): the high limbs decide unless they are equal,
/// in which case the low limbs compare.
#[inline(always)]
pub fn lt(lo1: u64, hi1: u64, lo2: u64, hi2: u64) -> bool {
    if hi1 != hi2 { hi1 < hi2 } else { lo1 < lo2 }
}

/// Multiplies a 128-bit value by a 64-bit value modulo 2^128.
///
/// The high word of `lo * v` is the carry into the high limb. Only the low
/// word of `hi * v` is kept; its high word sits at bit 128 and above and is
/// outside the modulus.
#[inline(always)]
pub fn mul64(lo: u64, hi: u64, v: u64) -> (u64, u64) {
    let (res_lo, add_hi) = lo.wide_mul(v);
    let (res_hi, _) = hi.wide_mul(v);
    (res_lo, res_hi.wrapping_add(add_hi))
}

/// Multiplies two 128-bit values modulo 2^128.
///
/// Splits the first operand into limbs and delegates to [`mul64`]. The
/// `hi1 * hi2` cross term vanishes modulo 2^128, and `hi1 * lo2` only
/// contributes its low word to the result's high limb.
#[inline(always)]
pub fn mul(lo1: u64, hi1: u64, lo2: u64, hi2: u64) -> (u64, u64) {
    let (lo_lo, hi_lo) = mul64(lo2, hi2, lo1);
    let (lo_hi, _) = mul64(lo2, hi2, hi1);
    (lo_lo, lo_hi.wrapping_add(hi_lo))
}

/// A 128-bit unsigned integer stored as two 64-bit limbs, little-endian.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Uint128 {
    pub lo: u64,
    pub hi: u64,
}

impl Uint128 {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 0);
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    #[inline(always)]
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    #[inline(always)]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        let (lo, hi) = add(self.lo, self.hi, rhs.lo, rhs.hi);
        Self { lo, hi }
    }

    #[inline(always)]
    pub fn wrapping_neg(self) -> Self {
        let (lo, hi) = negate(self.lo, self.hi);
        Self { lo, hi }
    }

    #[inline(always)]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.wrapping_add(rhs.wrapping_neg())
    }

    #[inline(always)]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let (lo, hi) = mul(self.lo, self.hi, rhs.lo, rhs.hi);
        Self { lo, hi }
    }

    #[inline(always)]
    pub fn wrapping_mul_u64(self, v: u64) -> Self {
        let (lo, hi) = mul64(self.lo, self.hi, v);
        Self { lo, hi }
    }
}

impl Ord for Uint128 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Most significant limb first.
        match self.hi.cmp(&other.hi) {
            std::cmp::Ordering::Equal => self.lo.cmp(&other.lo),
            ord => ord,
        }
    }
}

impl PartialOrd for Uint128 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Uint128 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl Sub for Uint128 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl Mul for Uint128 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl Mul<u64> for Uint128 {
    type Output = Self;
    fn mul(self, rhs: u64) -> Self::Output {
        self.wrapping_mul_u64(rhs)
    }
}

impl Not for Uint128 {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self::new(!self.lo, !self.hi)
    }
}

impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Self::new(value as u64, (value >> 64) as u64)
    }
}

impl From<(u64, u64)> for Uint128 {
    fn from((lo, hi): (u64, u64)) -> Self {
        Self::new(lo, hi)
    }
}

impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        (value.lo as u128) | ((value.hi as u128) << 64)
    }
}
