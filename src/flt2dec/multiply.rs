/*!
Multiply-and-shift and division by 10.

`MShift::mshift` returns `floor((upper * 2^N + lower) * m / 2^shift)` for the
limb width `N`, and `Div10::div10` returns `floor(m / 10)`. Each marker type
below computes them with a different set of native operations; they all give
identical results and a format picks one at compile time.

- `BuiltIn4`: a native multiply of four times the limb width.
- `Synthetic2`: a quad-width product built from double-width multiplies.
- `BuiltIn2`: a native double-width multiply.
- `Synthetic1`: a double-width product built from limb multiplies.
- `BuiltIn1`: limb multiplies of half-limb values only.
*/

use crate::flt2dec::Multiplier;
use crate::num::{Limb, Widen};

pub trait MShift<L: Limb> {
    /// Returns `floor((upper * 2^N + lower) * m / 2^shift)`.
    ///
    /// `shift` must be in `(N, 3N)` (`[3N/2, 3N)` for `BuiltIn1`) and the
    /// quotient must fit in a limb.
    fn mshift(m: L, multiplier: &Multiplier<L>, shift: u32) -> L;
}

pub trait Div10<L: Limb> {
    /// Returns `floor(m / 10)`. Exact for all `m < 2^(N - 2)`.
    fn div10(m: L) -> L;
}

pub enum BuiltIn4 {}
pub enum Synthetic2 {}
pub enum BuiltIn2 {}
pub enum Synthetic1 {}
pub enum BuiltIn1 {}

// floor((r2 * 2^(2N) + r1 * 2^N) / 2^shift)
fn rshift<L: Limb>(r2: L, r1: L, shift: u32) -> L {
    let n = L::BITS;
    if shift >= 2 * n {
        r2 >> (shift - 2 * n)
    } else {
        (r2 << (2 * n - shift)) | (r1 >> (shift - n))
    }
}

// ceil(2^N / 10)
fn inv10<L: Limb>() -> L {
    L::MAX / L::from_small(10) + L::ONE
}

impl<L> MShift<L> for BuiltIn4
where
    L: Widen,
    L::Wide: Widen,
{
    fn mshift(m: L, multiplier: &Multiplier<L>, shift: u32) -> L {
        let n = (multiplier.upper.widen() << L::BITS) | multiplier.lower.widen();
        let q = (n.widen() * m.widen().widen()) >> shift;
        L::split(<L::Wide as Widen>::split(q).1).1
    }
}

impl<L: Widen> MShift<L> for Synthetic2 {
    fn mshift(m: L, multiplier: &Multiplier<L>, shift: u32) -> L {
        let n = (multiplier.upper.widen() << L::BITS) | multiplier.lower.widen();
        // r2 * 2^(2N) + r1
        let (r2, r1) = n.full_mul(m.widen());
        let q = if shift >= 2 * L::BITS {
            r2 >> (shift - 2 * L::BITS)
        } else {
            (r2 << (2 * L::BITS - shift)) | (r1 >> shift)
        };
        L::split(q).1
    }
}

impl<L: Widen> MShift<L> for BuiltIn2 {
    fn mshift(m: L, multiplier: &Multiplier<L>, shift: u32) -> L {
        let s0 = multiplier.lower.widen() * m.widen();
        let s1 = multiplier.upper.widen() * m.widen();
        // s1 < (2^N - 1)^2, so adding the upper limb of s0 cannot wrap around
        L::split((s1 + (s0 >> L::BITS)) >> (shift - L::BITS)).1
    }
}

impl<L: Limb> MShift<L> for Synthetic1 {
    fn mshift(m: L, multiplier: &Multiplier<L>, shift: u32) -> L {
        let (s01, _) = multiplier.lower.full_mul(m);
        let (s11, s10) = multiplier.upper.full_mul(m);
        let (carry, r1) = s01.full_add(s10, false);
        let r2 = s11 + if carry { L::ONE } else { L::ZERO };
        rshift(r2, r1, shift)
    }
}

impl<L: Limb> MShift<L> for BuiltIn1 {
    fn mshift(m: L, multiplier: &Multiplier<L>, shift: u32) -> L {
        let half = L::BITS / 2;
        let y = L::ONE << half;
        let (n3, n2) = (multiplier.upper >> half, multiplier.upper % y);
        let (n1, n0) = (multiplier.lower >> half, multiplier.lower % y);
        let (m1, m0) = (m >> half, m % y);
        let c = |carry: bool| if carry { y } else { L::ZERO };

        // the product in base y, keeping only what is above y^2
        let mut r1 = (n0 * m0) >> half;
        r1 = r1 + n0 * m1; // this cannot wrap around
        let (carry, t) = r1.full_add(n1 * m0, false);
        r1 = (t >> half) + n1 * m1 + c(carry);
        let (carry, t) = r1.full_add(n2 * m0, false);
        r1 = (t >> half) + n2 * m1 + c(carry);
        let (carry, t) = r1.full_add(n3 * m0, false);
        let r0 = t % y;
        r1 = (t >> half) + n3 * m1 + c(carry);

        // r1 * y^4 + r0 * y^3 is the product rounded down to a multiple of y^3
        if shift >= 2 * L::BITS {
            r1 >> (shift - 2 * L::BITS)
        } else {
            debug_assert!(2 * shift >= 3 * L::BITS);
            (r1 << (2 * L::BITS - shift)) | (r0 >> (shift - 3 * half))
        }
    }
}

/// Returns `floor((upper * 2^N + lower) * 2^k / 2^shift)`.
///
/// The product of the multiplier and a power of two is a plain shift, so no
/// multiply strategy is involved. Requires `shift - k < 2N`.
pub fn mshift_pow2<L: Limb>(k: u32, multiplier: &Multiplier<L>, shift: u32) -> L {
    let s = k as i32 - (shift as i32 - L::BITS as i32);
    if s <= 0 {
        let s = s.unsigned_abs();
        if s >= L::BITS {
            L::ZERO
        } else {
            multiplier.upper >> s
        }
    } else {
        let s = s as u32;
        (multiplier.upper << s) | (multiplier.lower >> (L::BITS - s))
    }
}

impl<L: Widen> Div10<L> for BuiltIn2 {
    fn div10(m: L) -> L {
        L::split(inv10::<L>().widen() * m.widen()).0
    }
}

impl<L: Limb> Div10<L> for Synthetic1 {
    fn div10(m: L) -> L {
        inv10::<L>().full_mul(m).0
    }
}

impl<L: Limb> Div10<L> for BuiltIn1 {
    fn div10(m: L) -> L {
        let half = L::BITS / 2;
        let p2 = L::ONE << half;
        let inv5 = (p2 - L::ONE) / L::from_small(5);
        let (u, l) = (m >> half, m % p2);
        let t = ((l * (inv5 + L::ONE)) >> half) + l * inv5 + u * (inv5 + L::ONE);
        ((t >> half) + u * inv5) >> 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use rand::Rng;
    use std::vec::Vec;

    fn expected<L: Limb>(m: L, multiplier: &Multiplier<L>, shift: u32) -> Option<L> {
        let n = (BigUint::from(multiplier.upper.to_u128()) << L::BITS)
            | BigUint::from(multiplier.lower.to_u128());
        let q = (n * BigUint::from(m.to_u128())) >> shift;
        let q: u128 = q.try_into().ok()?;
        if q > L::MAX.to_u128() {
            None
        } else {
            Some(L::truncate(q))
        }
    }

    fn random_limb<L: Limb, R: Rng>(rng: &mut R) -> L {
        let v = match rng.gen_range(0..8) {
            0 => 0,
            1 => u128::MAX,
            2 => 1u128 << rng.gen_range(0..L::BITS),
            _ => rng.gen::<u128>(),
        };
        L::truncate(v)
    }

    // checks every strategy against arbitrary precision, skipping quotients
    // that do not fit in a limb
    macro_rules! check_mshift {
        ($ty:ty: $($strategy:ident)*) => ({
            let mut rng = rand::thread_rng();
            let n = <$ty as Limb>::BITS;
            let mut ntested = 0;
            while ntested < 20_000 {
                let multiplier = Multiplier {
                    upper: random_limb::<$ty, _>(&mut rng),
                    lower: random_limb::<$ty, _>(&mut rng),
                };
                let m = random_limb::<$ty, _>(&mut rng);
                let shift = rng.gen_range(3 * n / 2..3 * n);
                if let Some(q) = expected(m, &multiplier, shift) {
                    $(
                        assert_eq!(<$strategy as MShift<$ty>>::mshift(m, &multiplier, shift), q,
                                   "{}: {:?} * {:x} >> {}", stringify!($strategy), multiplier,
                                   m, shift);
                    )*
                    ntested += 1;
                }
            }
        })
    }

    #[test]
    fn test_mshift_u16() {
        check_mshift!(u16: BuiltIn4 Synthetic2 BuiltIn2 Synthetic1 BuiltIn1);
    }

    #[test]
    fn test_mshift_u32() {
        check_mshift!(u32: BuiltIn4 Synthetic2 BuiltIn2 Synthetic1 BuiltIn1);
    }

    #[test]
    fn test_mshift_u64() {
        check_mshift!(u64: Synthetic2 BuiltIn2 Synthetic1 BuiltIn1);
    }

    #[test]
    fn test_mshift_u128() {
        check_mshift!(u128: Synthetic1 BuiltIn1);
    }

    #[test]
    fn test_mshift_low_limb_contributes() {
        // 0x18000 * 0xffff = 0x17ffe8000, while 0x10000 * 0xffff >> 24 would be 0xff
        let multiplier = Multiplier { upper: 0x0001u16, lower: 0x8000 };
        assert_eq!(<BuiltIn4 as MShift<u16>>::mshift(0xffff, &multiplier, 24), 0x17f);
        assert_eq!(<Synthetic2 as MShift<u16>>::mshift(0xffff, &multiplier, 24), 0x17f);
        assert_eq!(<BuiltIn2 as MShift<u16>>::mshift(0xffff, &multiplier, 24), 0x17f);
        assert_eq!(<Synthetic1 as MShift<u16>>::mshift(0xffff, &multiplier, 24), 0x17f);
        assert_eq!(<BuiltIn1 as MShift<u16>>::mshift(0xffff, &multiplier, 24), 0x17f);
    }

    #[test]
    fn test_mshift_pow2() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let multiplier = Multiplier { upper: rng.gen::<u32>(), lower: rng.gen::<u32>() };
            let shift: u32 = rng.gen_range(64..96);
            let k = rng.gen_range(shift.saturating_sub(80)..shift);
            let n = (BigUint::from(multiplier.upper) << 32u32) | BigUint::from(multiplier.lower);
            if let Ok(q) = u32::try_from((n << k) >> shift) {
                assert_eq!(mshift_pow2(k, &multiplier, shift), q,
                           "{:?} << {} >> {}", multiplier, k, shift);
            }
        }
    }

    #[test]
    fn test_div10_u16_exhaustive() {
        for m in 0u16..1 << 14 {
            assert_eq!(<BuiltIn2 as Div10<u16>>::div10(m), m / 10);
            assert_eq!(<Synthetic1 as Div10<u16>>::div10(m), m / 10);
            assert_eq!(<BuiltIn1 as Div10<u16>>::div10(m), m / 10);
        }
    }

    #[test]
    fn test_div10() {
        let mut rng = rand::thread_rng();
        let mut values: Vec<u64> = (0..100_000).map(|_| rng.gen_range(0..1 << 62)).collect();
        values.extend((1..1000).map(|i| (1 << 62) - i));
        for &m in &values {
            assert_eq!(<BuiltIn2 as Div10<u64>>::div10(m), m / 10, "{}", m);
            assert_eq!(<Synthetic1 as Div10<u64>>::div10(m), m / 10, "{}", m);
            assert_eq!(<BuiltIn1 as Div10<u64>>::div10(m), m / 10, "{}", m);
            let m = (m >> 32) as u32;
            assert_eq!(<BuiltIn2 as Div10<u32>>::div10(m), m / 10, "{}", m);
            assert_eq!(<Synthetic1 as Div10<u32>>::div10(m), m / 10, "{}", m);
            assert_eq!(<BuiltIn1 as Div10<u32>>::div10(m), m / 10, "{}", m);
        }
    }
}
