//! Widening arithmetic primitives for 128-bit emulation.

/// A trait for multiplication that returns the full result in a wider type.
pub trait WideningMul: Sized {
    /// Performs a full multiply, returning the double-width product as
    /// `(low, high)`.
    fn wide_mul(self, rhs: Self) -> (Self, Self);
}

impl WideningMul for u64 {
    #[cfg(not(feature = "portable-mul"))]
    #[inline(always)]
    fn wide_mul(self, rhs: u64) -> (u64, u64) {
        let wide = (self as u128) * (rhs as u128);
        (wide as u64, (wide >> 64) as u64)
    }

    #[cfg(feature = "portable-mul")]
    #[inline(always)]
    fn wide_mul(self, rhs: u64) -> (u64, u64) {
        schoolbook_mul64(self, rhs)
    }
}

/// Portable 64x64 -> 128 multiply built only from 64-bit operations.
///
/// Decomposes both operands into 32-bit halves and accumulates the four
/// partial products:
///
/// ```text
/// a * b = (a_hi * b_hi) * 2^64 + (a_hi * b_lo + a_lo * b_hi) * 2^32 + a_lo * b_lo
/// ```
///
/// Each partial product fits in a u64, so the only overflow to track is the
/// carry out of the low word when the shifted middle terms are folded in.
/// Must return bit-identical results to [`WideningMul::wide_mul`] for every
/// input pair.
#[inline(always)]
pub fn schoolbook_mul64(a: u64, b: u64) -> (u64, u64) {
    const MASK32: u64 = 0xFFFF_FFFF;

    let a_lo = a & MASK32;
    let a_hi = a >> 32;
    let b_lo = b & MASK32;
    let b_hi = b >> 32;

    let p0 = a_lo * b_lo;
    let p1 = a_lo * b_hi;
    let p2 = a_hi * b_lo;
    let p3 = a_hi * b_hi;

    let (lo, c1) = p0.overflowing_add(p1 << 32);
    let (lo, c2) = lo.overflowing_add(p2 << 32);

    // The true high word fits in a u64, so these adds cannot wrap.
    let hi = p3 + (p1 >> 32) + (p2 >> 32) + c1 as u64 + c2 as u64;

    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn u64_with_odd_bits_set() -> u64 {
        let mut v = 0u64;
        for i in (1..=63).step_by(2) {
            v |= 1u64 << i;
        }
        v
    }

    fn reference_mul(a: u64, b: u64) -> (u64, u64) {
        let wide = (a as u128) * (b as u128);
        (wide as u64, (wide >> 64) as u64)
    }

    #[test]
    fn schoolbook_matches_native_widening_on_edge_patterns() {
        let patterns = [
            0u64,
            1,
            2,
            0xFFFF_FFFF,
            0x1_0000_0000,
            1 << 63,
            u64::MAX,
            u64::MAX - 1,
            u64_with_odd_bits_set(),
            !u64_with_odd_bits_set(),
        ];

        for &a in &patterns {
            for &b in &patterns {
                assert_eq!(
                    schoolbook_mul64(a, b),
                    reference_mul(a, b),
                    "mismatch for a = {a:#x}, b = {b:#x}"
                );
            }
        }
    }

    #[test]
    fn schoolbook_matches_native_widening_on_sweep() {
        // Low word alternates between n and its complement so both dense and
        // sparse bit patterns hit every carry path.
        for n in 0u64..1_000_000 {
            let a = if n & 1 == 0 { !n } else { n };
            let b = n.rotate_left(17) ^ 0x9E37_79B9_7F4A_7C15;
            assert_eq!(schoolbook_mul64(a, b), reference_mul(a, b));
        }
    }

    #[test]
    fn schoolbook_matches_native_widening_on_random_inputs() {
        let mut rng = rand::rng();
        for _ in 0..100_000 {
            let a: u64 = rng.random();
            let b: u64 = rng.random();
            assert_eq!(schoolbook_mul64(a, b), reference_mul(a, b));
        }
    }

    #[test]
    fn wide_mul_trait_agrees_with_schoolbook() {
        let mut rng = rand::rng();
        for _ in 0..100_000 {
            let a: u64 = rng.random();
            let b: u64 = rng.random();
            assert_eq!(a.wide_mul(b), schoolbook_mul64(a, b));
        }
    }
}
