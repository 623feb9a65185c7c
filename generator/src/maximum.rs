/*!
Maximisation of the objective functions behind fast EAFs.

A Euclidean affine function `n -> alpha * n / delta` agrees with
`n -> U * n >> k`, where `U = floor(alpha * 2^k / delta) + 1`, for every `n`
in a set `N` iff

```text
max { phi_1(n) : n in N } < 2^k / (delta - alpha * 2^k % delta)
```

where `phi_1(n) = n / (delta - alpha * n % delta)`. Maximising `phi_1` over an
interval reduces to maximising `phi_2(n) = n / (1 + (alpha' * n - 1) % alpha)`
with `alpha' = delta % alpha` over a shorter interval and vice versa, much like
the Euclidean algorithm on `(alpha, delta)`. The recursion depth is the length
of the continued fraction of `alpha / delta`.

[1] Cassio Neri and Lorenz Schneider. 2023. Euclidean affine functions and
    their application to calendar algorithms.
*/

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// `phi_1(n) = n / (delta - alpha * n % delta)`.
pub fn phi1(alpha: &BigInt, delta: &BigInt, n: &BigInt) -> BigRational {
    BigRational::new(n.clone(), delta - alpha * n % delta)
}

/// `phi_2(n) = n / (1 + (alpha * n - 1) % delta)`.
pub fn phi2(alpha: &BigInt, delta: &BigInt, n: &BigInt) -> BigRational {
    BigRational::new(n.clone(), BigInt::one() + (alpha * n - 1u32) % delta)
}

/// Returns the maximum of `phi_1` over `[a, b)`.
///
/// Requires `0 <= alpha < delta`, `gcd(alpha, delta) == 1` and `1 <= a < b`.
pub fn max1(alpha: &BigInt, delta: &BigInt, a: &BigInt, b: &BigInt) -> BigRational {
    let b_minus_1 = b - 1u32;
    let maximum1 = phi1(alpha, delta, &b_minus_1);

    if alpha.is_zero() || *a == b_minus_1 {
        return maximum1;
    }

    let a2 = alpha * a / delta + 1u32;
    let b2 = alpha * &b_minus_1 / delta + 1u32;
    if a2 == b2 {
        return maximum1;
    }

    let other = max2(&(delta % alpha), alpha, &a2, &b2);
    let maximum2 = BigRational::new(delta * other.numer() - other.denom(),
                                    alpha * other.denom());
    maximum1.max(maximum2)
}

/// Returns the maximum of `phi_2` over `[a, b)`.
///
/// Requires `0 <= alpha < delta`, `gcd(alpha, delta) == 1` and `1 <= a < b`.
pub fn max2(alpha: &BigInt, delta: &BigInt, a: &BigInt, b: &BigInt) -> BigRational {
    if alpha.is_zero() {
        // only reached with delta == 1, where phi_2(n) == n
        return BigRational::from_integer(b - 1u32);
    }

    let maximum1 = phi2(alpha, delta, a);
    if *a == b - 1u32 {
        return maximum1;
    }

    let a1 = (alpha * a - 1u32) / delta + 1u32;
    let b1 = (alpha * (b - 1u32) - 1u32) / delta + 1u32;
    if a1 == b1 {
        return maximum1;
    }

    let other = max1(&(delta % alpha), alpha, &a1, &b1);
    let maximum2 = BigRational::new(delta * other.numer() + other.denom(),
                                    alpha * other.denom());
    maximum1.max(maximum2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;
    use proptest::prelude::*;

    fn brute_max1(alpha: u64, delta: u64, a: u64, b: u64) -> BigRational {
        let (alpha, delta) = (BigInt::from(alpha), BigInt::from(delta));
        (a..b).map(|n| phi1(&alpha, &delta, &BigInt::from(n))).max().unwrap()
    }

    fn brute_max2(alpha: u64, delta: u64, a: u64, b: u64) -> BigRational {
        let (alpha, delta) = (BigInt::from(alpha), BigInt::from(delta));
        (a..b).map(|n| phi2(&alpha, &delta, &BigInt::from(n))).max().unwrap()
    }

    fn max(f: fn(&BigInt, &BigInt, &BigInt, &BigInt) -> BigRational,
           alpha: u64, delta: u64, a: u64, b: u64) -> BigRational {
        f(&BigInt::from(alpha), &BigInt::from(delta), &BigInt::from(a), &BigInt::from(b))
    }

    #[test]
    fn test_phi() {
        let v = |x: u64| BigInt::from(x);
        // 3 * 7 % 10 == 1
        assert_eq!(phi1(&v(3), &v(10), &v(7)), BigRational::new(v(7), v(9)));
        assert_eq!(phi1(&v(0), &v(10), &v(7)), BigRational::new(v(7), v(10)));
        // (3 * 7 - 1) % 10 == 0
        assert_eq!(phi2(&v(3), &v(10), &v(7)), BigRational::from_integer(v(7)));
    }

    #[test]
    fn test_max_small() {
        for delta in 1..25u64 {
            for alpha in 0..delta {
                if alpha.gcd(&delta) != 1 {
                    continue;
                }
                for a in 1..10 {
                    for b in a + 1..a + 20 {
                        assert_eq!(max(max1, alpha, delta, a, b), brute_max1(alpha, delta, a, b),
                                   "max1({}, {}, {}, {})", alpha, delta, a, b);
                        if alpha > 0 {
                            assert_eq!(max(max2, alpha, delta, a, b),
                                       brute_max2(alpha, delta, a, b),
                                       "max2({}, {}, {}, {})", alpha, delta, a, b);
                        }
                    }
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn max1_matches_brute_force(delta in 2..100_000u64, alpha_seed: u64,
                                    a in 1..10_000u64, len in 1..2_000u64) {
            let alpha = alpha_seed % delta;
            prop_assume!(alpha.gcd(&delta) == 1);
            prop_assert_eq!(max(max1, alpha, delta, a, a + len),
                            brute_max1(alpha, delta, a, a + len));
        }
    }

    #[test]
    fn test_powers() {
        // the shape of the problems the generator solves: 2^e against 5^f
        for f in 1..6u32 {
            let delta = 5u64.pow(f);
            for e in 0..12u32 {
                let alpha = (1u64 << e) % delta;
                assert_eq!(max(max1, alpha, delta, 1, 3000), brute_max1(alpha, delta, 1, 3000));
            }
        }
    }
}
