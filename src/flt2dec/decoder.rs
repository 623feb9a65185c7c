//! Decodes a floating-point value into individual parts.

use crate::flt2dec::{BinaryFloat, Format};
use crate::flt2dec::format::{Ieee32, Ieee64};
use crate::num::Limb;

/// Decoded unsigned value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FullDecoded<L> {
    /// Not-a-number.
    Nan,
    /// Infinities, either positive or negative.
    Infinite,
    /// Zero, either positive or negative.
    Zero,
    /// Finite numbers, including subnormals. The mantissa is never zero.
    Finite(BinaryFloat<L>),
}

/// A floating point type which can be `decode`d.
pub trait DecodableFloat: Copy {
    type Format: Format;

    /// Returns the raw IEEE 754 bits, zero-extended.
    fn to_raw_bits(self) -> u64;
}

impl DecodableFloat for f32 {
    type Format = Ieee32;

    fn to_raw_bits(self) -> u64 {
        self.to_bits() as u64
    }
}

impl DecodableFloat for f64 {
    type Format = Ieee64;

    fn to_raw_bits(self) -> u64 {
        self.to_bits()
    }
}

/// Returns a sign (true when negative) and `FullDecoded` value
/// from given floating point number.
pub fn decode<T: DecodableFloat>(v: T) -> (bool, FullDecoded<<T::Format as Format>::Limb>) {
    decode_bits::<T::Format>(v.to_raw_bits() as u128)
}

/// Same as `decode`, but from the raw bits of a value in the format `F`.
/// This is the only way in for formats without a native Rust type.
pub fn decode_bits<F: Format>(bits: u128) -> (bool, FullDecoded<F::Limb>) {
    let table = F::table();
    let stored_bits = table.mantissa_width - 1;
    let exponent_mask = (1u128 << F::EXPONENT_BITS) - 1;

    let sign = (bits >> (stored_bits + F::EXPONENT_BITS)) & 1 != 0;
    let stored = bits & ((1u128 << stored_bits) - 1);
    let biased = (bits >> stored_bits) & exponent_mask;

    let decoded = if biased == exponent_mask {
        if stored == 0 {
            FullDecoded::Infinite
        } else {
            FullDecoded::Nan
        }
    } else if biased == 0 {
        if stored == 0 {
            FullDecoded::Zero
        } else {
            // subnormals share the exponent of the smallest normal binade
            FullDecoded::Finite(BinaryFloat {
                sign,
                exponent: table.exponent_min,
                mantissa: <F::Limb as Limb>::truncate(stored),
            })
        }
    } else {
        FullDecoded::Finite(BinaryFloat {
            sign,
            exponent: table.exponent_min + biased as i32 - 1,
            mantissa: <F::Limb as Limb>::truncate(stored | 1 << stored_bits),
        })
    };
    (sign, decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flt2dec::format::{Bfloat16, Ieee128, Ieee16};

    fn finite<L>(sign: bool, exponent: i32, mantissa: L) -> FullDecoded<L> {
        FullDecoded::Finite(BinaryFloat { sign, exponent, mantissa })
    }

    #[test]
    fn test_decode_f32() {
        assert_eq!(decode(1.0f32), (false, finite(false, -23, 1 << 23)));
        assert_eq!(decode(-1.0f32), (true, finite(true, -23, 1 << 23)));
        assert_eq!(decode(f32::MAX), (false, finite(false, 104, (1 << 24) - 1)));
        assert_eq!(decode(f32::MIN_POSITIVE), (false, finite(false, -149, 1 << 23)));
        assert_eq!(decode(f32::from_bits(1)), (false, finite(false, -149, 1)));
        assert_eq!(decode(0.0f32), (false, FullDecoded::Zero));
        assert_eq!(decode(-0.0f32), (true, FullDecoded::Zero));
        assert_eq!(decode(f32::INFINITY), (false, FullDecoded::Infinite));
        assert_eq!(decode(f32::NEG_INFINITY), (true, FullDecoded::Infinite));
        assert_eq!(decode(f32::NAN).1, FullDecoded::Nan);
    }

    #[test]
    fn test_decode_f64() {
        assert_eq!(decode(1.0f64), (false, finite(false, -52, 1 << 52)));
        assert_eq!(decode(0.5f64), (false, finite(false, -53, 1 << 52)));
        assert_eq!(decode(f64::MAX), (false, finite(false, 971, (1 << 53) - 1)));
        assert_eq!(decode(f64::from_bits(1)), (false, finite(false, -1074, 1)));
        assert_eq!(decode(-f64::from_bits(0x000f_ffff_ffff_ffff)),
                   (true, finite(true, -1074, 0x000f_ffff_ffff_ffff)));
        assert_eq!(decode(f64::NAN).1, FullDecoded::Nan);
    }

    #[test]
    fn test_decode_bits_16() {
        // 1.0 in binary16 is 0x3c00, in bfloat16 it is 0x3f80
        assert_eq!(decode_bits::<Ieee16>(0x3c00), (false, finite(false, -10, 1 << 10)));
        assert_eq!(decode_bits::<Ieee16>(0x7bff), (false, finite(false, 5, (1 << 11) - 1)));
        assert_eq!(decode_bits::<Ieee16>(0x0001), (false, finite(false, -24, 1)));
        assert_eq!(decode_bits::<Ieee16>(0xfc00), (true, FullDecoded::Infinite));
        assert_eq!(decode_bits::<Bfloat16>(0x3f80), (false, finite(false, -7, 1 << 7)));
        assert_eq!(decode_bits::<Bfloat16>(0x8000), (true, FullDecoded::Zero));
        assert_eq!(decode_bits::<Bfloat16>(0x7fc0).1, FullDecoded::Nan);
    }

    #[test]
    fn test_decode_bits_128() {
        assert_eq!(decode_bits::<Ieee128>(0x3fff << 112), (false, finite(false, -112, 1 << 112)));
        assert_eq!(decode_bits::<Ieee128>(0x7ffe_ffff_ffff_ffff_ffff_ffff_ffff_ffff),
                   (false, finite(false, 16271, (1 << 113) - 1)));
        assert_eq!(decode_bits::<Ieee128>(0x0001 << 112), (false, finite(false, -16494, 1 << 112)));
        assert_eq!(decode_bits::<Ieee128>(1), (false, finite(false, -16494, 1)));
        assert_eq!(decode_bits::<Ieee128>(1 << 127), (true, FullDecoded::Zero));
        assert_eq!(decode_bits::<Ieee128>(0xffff << 112), (true, FullDecoded::Infinite));
        assert_eq!(decode_bits::<Ieee128>(0x7fff_8000 << 96).1, FullDecoded::Nan);
    }
}
