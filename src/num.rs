//! Fixed-width limb arithmetic.
//!
//! The conversion engine is generic over the unsigned integer type holding a
//! mantissa, called a limb. Multipliers span two limbs, and the multiply
//! strategies in `flt2dec::multiply` build wider products out of the
//! primitives below.

use core::fmt;
use core::ops::{Add, BitAnd, BitOr, Div, Mul, Rem, Shl, Shr, Sub};

pub trait Limb:
    Copy
    + Eq
    + Ord
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn from_small(v: u8) -> Self;

    /// Keeps the lowest `Self::BITS` bits of `v`.
    fn truncate(v: u128) -> Self;

    fn to_u128(self) -> u128;

    fn wrapping_mul(self, other: Self) -> Self;

    fn rotate_right(self, n: u32) -> Self;

    // carry' || v' <- self + other + carry
    fn full_add(self, other: Self, carry: bool) -> (bool, Self);

    // hi || lo <- self * other, using half-limb products only
    fn full_mul(self, other: Self) -> (Self, Self) {
        let half = Self::BITS / 2;
        let mask = Self::MAX >> half;
        let (a1, a0) = (self >> half, self & mask);
        let (b1, b0) = (other >> half, other & mask);

        let p00 = a0 * b0;
        let p01 = a0 * b1;
        let p10 = a1 * b0;
        let p11 = a1 * b1;

        // three half-limb values at most, this cannot overflow
        let mid = (p00 >> half) + (p01 & mask) + (p10 & mask);
        let lo = (mid << half) | (p00 & mask);
        let hi = p11 + (p01 >> half) + (p10 >> half) + (mid >> half);
        (hi, lo)
    }

    fn is_even(self) -> bool {
        self & Self::ONE == Self::ZERO
    }
}

/// A limb with a native integer type of twice its width.
pub trait Widen: Limb {
    type Wide: Limb;

    fn widen(self) -> Self::Wide;

    /// Splits `w` into its upper and lower limbs.
    fn split(w: Self::Wide) -> (Self, Self);
}

macro_rules! impl_limb {
    ($($ty:ty)*) => (
        $(
            impl Limb for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: $ty = 0;
                const ONE: $ty = 1;
                const MAX: $ty = <$ty>::MAX;

                fn from_small(v: u8) -> $ty {
                    v as $ty
                }

                fn truncate(v: u128) -> $ty {
                    v as $ty
                }

                fn to_u128(self) -> u128 {
                    self as u128
                }

                fn wrapping_mul(self, other: $ty) -> $ty {
                    <$ty>::wrapping_mul(self, other)
                }

                fn rotate_right(self, n: u32) -> $ty {
                    <$ty>::rotate_right(self, n)
                }

                fn full_add(self, other: $ty, carry: bool) -> (bool, $ty) {
                    // this cannot overflow, the output is between 0 and 2*2^nbits - 1
                    let (v, carry1) = self.overflowing_add(other);
                    let (v, carry2) = v.overflowing_add(carry as $ty);
                    (carry1 || carry2, v)
                }
            }
        )*
    )
}

macro_rules! impl_widen {
    ($($ty:ty => $wide:ty;)*) => (
        $(
            impl Widen for $ty {
                type Wide = $wide;

                fn widen(self) -> $wide {
                    self as $wide
                }

                fn split(w: $wide) -> ($ty, $ty) {
                    ((w >> <$ty>::BITS) as $ty, w as $ty)
                }
            }
        )*
    )
}

impl_limb! { u16 u32 u64 u128 }

impl_widen! {
    u16 => u32;
    u32 => u64;
    u64 => u128;
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use rand::Rng;

    fn check_full_mul<L: Widen>(a: L, b: L) {
        let expected = L::split(a.widen() * b.widen());
        assert_eq!(a.full_mul(b), expected, "{:x} * {:x}", a, b);
    }

    #[test]
    fn test_full_mul_matches_native() {
        let mut rng = rand::thread_rng();
        for &(a, b) in &[(0u16, 0u16), (1, u16::MAX), (u16::MAX, u16::MAX), (0x8000, 2)] {
            check_full_mul(a, b);
        }
        for _ in 0..10_000 {
            check_full_mul(rng.gen::<u16>(), rng.gen::<u16>());
            check_full_mul(rng.gen::<u32>(), rng.gen::<u32>());
            check_full_mul(rng.gen::<u64>(), rng.gen::<u64>());
        }
        check_full_mul(u64::MAX, u64::MAX);
    }

    #[test]
    fn test_full_mul_u128() {
        let mut rng = rand::thread_rng();
        let mut values = vec![0u128, 1, u128::MAX, u128::MAX - 1, 1 << 127];
        values.extend((0..200).map(|_| rng.gen::<u128>()));
        for &a in &values {
            for &b in &values[..20] {
                let (hi, lo) = a.full_mul(b);
                let expected = BigUint::from(a) * BigUint::from(b);
                let actual = (BigUint::from(hi) << 128u32) | BigUint::from(lo);
                assert_eq!(actual, expected, "{:x} * {:x}", a, b);
            }
        }
    }

    #[test]
    fn test_full_add() {
        assert_eq!(0xffffu16.full_add(1, false), (true, 0));
        assert_eq!(0xffffu16.full_add(0, true), (true, 0));
        assert_eq!(0xffffu16.full_add(0xffff, true), (true, 0xffff));
        assert_eq!(1u32.full_add(2, true), (false, 4));
        assert_eq!(u64::MAX.full_add(u64::MAX, false), (true, u64::MAX - 1));
    }

    #[test]
    fn test_split() {
        assert_eq!(u16::split(0x1234_5678), (0x1234, 0x5678));
        assert_eq!(u64::split(u128::MAX), (u64::MAX, u64::MAX));
        assert_eq!(<u32 as Limb>::truncate(0x1_0000_0002), 2);
    }
}
