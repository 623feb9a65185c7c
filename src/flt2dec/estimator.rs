//! The exponent estimator.

use core::ops::RangeInclusive;

/// The binary exponents for which `log10_pow2` and `residual` are exact.
pub const LOG10_POW2_BOUNDS: RangeInclusive<i32> = -112815..=112815;

// 1292913987 / 2^32 is just above log_10 2.
const LOG10_2_SCALED: i64 = 1292913987;

/// Returns `f = floor(log_10 2^e)`, the largest `f` such that `10^f <= 2^e`.
#[inline]
pub fn log10_pow2(e: i32) -> i32 {
    debug_assert!(LOG10_POW2_BOUNDS.contains(&e));
    ((LOG10_2_SCALED * e as i64) >> 32) as i32
}

/// Returns how far `e` lies above the smallest binary exponent sharing its
/// `log10_pow2`. This is always at most 3.
#[inline]
pub fn residual(e: i32) -> u32 {
    debug_assert!(LOG10_POW2_BOUNDS.contains(&e));
    (LOG10_2_SCALED * e as i64) as u32 / LOG10_2_SCALED as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn pow(base: u32, exp: u32) -> BigUint {
        BigUint::from(base).pow(exp)
    }

    #[test]
    fn test_log10_pow2() {
        assert_eq!(log10_pow2(0), 0);
        assert_eq!(log10_pow2(3), 0);
        assert_eq!(log10_pow2(4), 1);
        assert_eq!(log10_pow2(10), 3);
        assert_eq!(log10_pow2(-1), -1);
        assert_eq!(log10_pow2(-4), -2);
        // extreme values of f64: 2^-1074 = 4.94065... * 10^-324, 2^1023 = 8.98846... * 10^307
        assert_eq!(log10_pow2(-1074), -324);
        assert_eq!(log10_pow2(1023), 307);
    }

    #[test]
    fn test_log10_pow2_exact() {
        // 10^f <= 2^e < 10^(f+1), checked without floating point
        for e in -1200..1200 {
            let f = log10_pow2(e);
            if e >= 0 {
                let p2 = pow(2, e as u32);
                assert!(pow(10, f as u32) <= p2, "e = {}", e);
                assert!(p2 < pow(10, f as u32 + 1), "e = {}", e);
            } else {
                let p2 = pow(2, -e as u32);
                assert!(p2 <= pow(10, -f as u32), "e = {}", e);
                assert!(pow(10, (-f - 1) as u32) < p2, "e = {}", e);
            }
        }
    }

    #[test]
    fn test_residual() {
        for e in -5000..5000 {
            let r = residual(e);
            assert!(r <= 3, "e = {}", e);
            let base = e - r as i32;
            assert_eq!(log10_pow2(base), log10_pow2(e), "e = {}", e);
            assert_eq!(log10_pow2(base - 1), log10_pow2(e) - 1, "e = {}", e);
        }
    }
}
