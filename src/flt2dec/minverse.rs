//! Divisibility by powers of 5 through modular inverses.

use crate::flt2dec::Table;
use crate::num::Limb;

/// Returns whether `n` is a multiple of `5^f`.
///
/// `f` outside of the table is never a multiple: `5^f` then exceeds any
/// value the conversion can ask about.
#[inline]
pub fn is_multiple_of_pow5<L: Limb>(table: &Table<L>, n: L, f: i32) -> bool {
    match table.minverse(f) {
        Some(inverse) => n.wrapping_mul(inverse.multiplier) <= inverse.bound,
        None => false,
    }
}

/// Returns `(exponent', mantissa')` with `mantissa' * 10^exponent'` equal to
/// `mantissa * 10^exponent` and `mantissa'` not divisible by 10.
/// A zero mantissa is returned as is.
pub fn remove_trailing_zeros<L: Limb>(table: &Table<L>, exponent: i32, mantissa: L) -> (i32, L) {
    if mantissa == L::ZERO {
        return (exponent, mantissa);
    }

    // `m * inv5` is `m / 5` when 5 divides `m`; rotating right by one then
    // brings any odd bit on top, so this is at most `(2^N - 1) / 10` exactly
    // when 10 divides `m`.
    let inverse = &table.minverse[1];
    let bound = inverse.bound >> 1;
    let (mut exponent, mut mantissa) = (exponent, mantissa);
    loop {
        let q = mantissa.wrapping_mul(inverse.multiplier).rotate_right(1);
        if q > bound {
            return (exponent, mantissa);
        }
        mantissa = q;
        exponent += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flt2dec::generated::{bfloat16, ieee32, ieee64};
    use rand::Rng;

    #[test]
    fn test_is_multiple_of_pow5() {
        let table = &ieee32::TABLE;
        assert!(is_multiple_of_pow5(table, 0u32, 0));
        assert!(is_multiple_of_pow5(table, 7u32, 0));
        assert!(is_multiple_of_pow5(table, 125u32, 3));
        assert!(!is_multiple_of_pow5(table, 125u32, 4));
        assert!(is_multiple_of_pow5(table, 1220703125u32, 13)); // 5^13
        assert!(!is_multiple_of_pow5(table, 1220703125u32, 14)); // beyond the table
        assert!(!is_multiple_of_pow5(table, 25u32, -1));

        let mut rng = rand::thread_rng();
        for _ in 0..100_000 {
            let n = rng.gen::<u64>();
            let f = rng.gen_range(0..ieee64::TABLE.minverse.len() as u32);
            let expected = n % 5u64.pow(f) == 0;
            assert_eq!(is_multiple_of_pow5(&ieee64::TABLE, n, f as i32), expected, "{} {}", n, f);
            let n = n % 10_000 * 5u64.pow(f.min(20));
            let expected = n % 5u64.pow(f) == 0;
            assert_eq!(is_multiple_of_pow5(&ieee64::TABLE, n, f as i32), expected, "{} {}", n, f);
        }
    }

    #[test]
    fn test_is_multiple_of_pow5_u16_exhaustive() {
        let table = &bfloat16::TABLE;
        for f in 0..table.minverse.len() as u32 {
            for n in 0..=u16::MAX {
                assert_eq!(is_multiple_of_pow5(table, n, f as i32), n as u32 % 5u32.pow(f) == 0);
            }
        }
    }

    #[test]
    fn test_remove_trailing_zeros() {
        let table = &ieee64::TABLE;
        assert_eq!(remove_trailing_zeros(table, 0, 1u64), (0, 1));
        assert_eq!(remove_trailing_zeros(table, 0, 10u64), (1, 1));
        assert_eq!(remove_trailing_zeros(table, -3, 123000u64), (0, 123));
        assert_eq!(remove_trailing_zeros(table, 5, 1005u64), (5, 1005));
        assert_eq!(remove_trailing_zeros(table, 2, 50u64), (3, 5));
        assert_eq!(remove_trailing_zeros(table, 0, 10_000_000_000_000_000_000u64), (19, 1));
        assert_eq!(remove_trailing_zeros(table, 7, 0u64), (7, 0));
        assert_eq!(remove_trailing_zeros(&ieee32::TABLE, 0, 4_000_000_000u32), (9, 4));
        assert_eq!(remove_trailing_zeros(&bfloat16::TABLE, 0, 60_000u16), (4, 6));
    }

    #[test]
    fn test_remove_trailing_zeros_idempotent() {
        let mut rng = rand::thread_rng();
        for _ in 0..100_000 {
            let mantissa = (rng.gen::<u64>() >> rng.gen_range(10..64)) * 10u64.pow(rng.gen_range(0..4));
            let stripped = remove_trailing_zeros(&ieee64::TABLE, 0, mantissa);
            assert_eq!(remove_trailing_zeros(&ieee64::TABLE, stripped.0, stripped.1), stripped);
            if mantissa != 0 {
                assert!(stripped.1 % 10 != 0);
                assert_eq!(stripped.1 * 10u64.pow(stripped.0 as u32), mantissa);
            }
        }
    }
}
