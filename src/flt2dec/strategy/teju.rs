/*!
The Tejú Jaguá shortest conversion.

For a value `m * 2^e` let `f = floor(log_10 2^e)`. Every value whose binary
interval of "rounds-to-me" reals is symmetric (centred) is handled by
scaling the interval bounds `(2m - 1) * 2^(e-1)` and `(2m + 1) * 2^(e-1)` by
`10^-f`, looking for a multiple of 10 between them and otherwise rounding the
scaled value itself. The scaling is one multiply-and-shift by a generated
multiplier, exact for every mantissa the algorithm can submit.

The smallest normal mantissa of a binade has its lower neighbour twice as
close (uncentred), and needs a few more cases; small integers bypass the
tables altogether.

[1] Cassio Neri. 2024. The Tejú Jaguá algorithm.
*/

use crate::flt2dec::estimator::{log10_pow2, residual};
use crate::flt2dec::minverse::{is_multiple_of_pow5, remove_trailing_zeros};
use crate::flt2dec::multiply::{mshift_pow2, Div10, MShift};
use crate::flt2dec::{BinaryFloat, DecimalFloat, Format, Table};
use crate::num::Limb;

/// Converts `binary` to the shortest decimal of the format `F` that reads
/// back as the same value, choosing the closest one (and then the one with an
/// even mantissa) among equally short candidates.
///
/// `binary` must be a finite value of the format: `exponent` within the
/// table range and `mantissa` below `2^mantissa_width`.
pub fn convert<F: Format>(binary: BinaryFloat<F::Limb>) -> DecimalFloat<F::Limb> {
    convert_with::<F::Limb, F::MShift, F::Div10>(F::table(), binary)
}

/// Same as `convert`, with the table and the arithmetic given explicitly.
pub fn convert_with<L, M, D>(table: &Table<L>, binary: BinaryFloat<L>) -> DecimalFloat<L>
where
    L: Limb,
    M: MShift<L>,
    D: Div10<L>,
{
    let BinaryFloat { sign, exponent, mantissa } = binary;
    let (exponent, mantissa) = shortest::<L, M, D>(table, exponent, mantissa);
    DecimalFloat { sign, exponent, mantissa }
}

// `n * 10^f` is an exact scaled bound, i.e. a tie
fn is_tie<L: Limb>(table: &Table<L>, n: L, f: i32) -> bool {
    f >= 0 && is_multiple_of_pow5(table, n, f)
}

// rounds `c2 / 2` to the nearest integer, ties to even. `c2` approximates
// twice the scaled value and is exact iff `is_tie(c2, f)`.
fn round_half<L: Limb>(table: &Table<L>, c2: L, f: i32) -> L {
    let c = c2 >> 1;
    if c2.is_even() || (c.is_even() && is_tie(table, c2, f)) {
        c
    } else {
        c + L::ONE
    }
}

fn shortest<L, M, D>(table: &Table<L>, e: i32, m: L) -> (i32, L)
where
    L: Limb,
    M: MShift<L>,
    D: Div10<L>,
{
    debug_assert!(table.exponent_min <= e && e <= table.exponent_max);
    debug_assert!(m >> table.mantissa_width == L::ZERO);

    if m == L::ZERO {
        return (0, L::ZERO);
    }

    let (two, four, ten) = (L::from_small(2), L::from_small(4), L::from_small(10));
    let m_min = L::ONE << (table.mantissa_width - 1);

    // m * 2^e is an integer below 2^mantissa_width
    let p = table.mantissa_width as i32;
    if -(p - 1) <= e && e <= 0 {
        let k = (-e) as u32;
        if (m >> k) << k == m {
            return remove_trailing_zeros(table, 0, m >> k);
        }
    }

    let f = log10_pow2(e);
    let r = residual(e);
    let multiplier = table.multiplier(f);
    let mshift = |n: L| M::mshift(n, multiplier, table.shift);

    if m != m_min || e == table.exponent_min {
        let m_a = (two * m - L::ONE) << r;
        let m_b = (two * m + L::ONE) << r;
        let a = mshift(m_a);
        let b = mshift(m_b);
        let q = D::div10(b);
        let s = ten * q;

        if s >= a {
            if s == b {
                if m.is_even() || !is_tie(table, m_b, f) {
                    return remove_trailing_zeros(table, f + 1, q);
                }
            } else if s > a || (m.is_even() && is_tie(table, m_a, f)) {
                return remove_trailing_zeros(table, f + 1, q);
            }
        }

        let c2 = mshift((four * m) << r);
        return (f, round_half(table, c2, -f));
    }

    // the lower bound is (4m - 1) * 2^(e-2), scaled twice as much as `a`
    let m_a = (four * m - L::ONE) << r;
    let a = mshift(m_a) >> 1;
    let b = mshift((two * m + L::ONE) << r);
    let a_is_exact = f >= 0 && e >= f + 2 && (f == 0 || is_multiple_of_pow5(table, four * m - L::ONE, f));

    if b > a {
        let q = D::div10(b);
        let s = ten * q;
        if s > a || (s == a && a_is_exact) {
            return remove_trailing_zeros(table, f + 1, q);
        }

        // 4m is a power of two
        let c2 = mshift_pow2(table.mantissa_width + 1 + r, multiplier, table.shift);
        let c = c2 >> 1;
        if c == a && !a_is_exact {
            return (f, c + L::ONE);
        }
        return (f, round_half(table, c2, -f));
    }

    // no integer fits between the scaled bounds but possibly the lower one
    if a_is_exact {
        return remove_trailing_zeros(table, f, a);
    }
    let c2 = mshift((L::from_small(40) * m) << r);
    (f - 1, round_half(table, c2, 1 - f))
}

/// Writes the shortest digits of `binary` into `buf` and returns the number
/// of digits `len` and an exponent `exp` such that the value equals
/// `0.buf[..len] * 10^exp`.
///
/// `buf` should be at least `MAX_SIG_DIGITS` bytes long and `binary` non-zero.
pub fn format_shortest<F: Format>(binary: &BinaryFloat<F::Limb>, buf: &mut [u8]) -> (usize, i16) {
    let decimal = convert::<F>(*binary);
    debug_assert!(decimal.mantissa != <F::Limb as Limb>::ZERO);

    let mut mantissa = decimal.mantissa.to_u128();
    let mut len = 0;
    while mantissa > 0 {
        buf[len] = b'0' + (mantissa % 10) as u8;
        mantissa /= 10;
        len += 1;
    }
    buf[..len].reverse();
    (len, (decimal.exponent + len as i32) as i16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flt2dec::format::{Bfloat16, Ieee128, Ieee16, Ieee32, Ieee64};
    use crate::flt2dec::generated::{ieee128, ieee32, ieee64};
    use crate::flt2dec::multiply::{BuiltIn1, BuiltIn2, BuiltIn4, Synthetic1, Synthetic2};
    use crate::flt2dec::testing;
    use crate::flt2dec::{decode, decode_bits, FullDecoded};
    use proptest::prelude::*;
    use rand::Rng;

    fn binary<L>(exponent: i32, mantissa: L) -> BinaryFloat<L> {
        BinaryFloat { sign: false, exponent, mantissa }
    }

    fn decimal<L>(exponent: i32, mantissa: L) -> DecimalFloat<L> {
        DecimalFloat { sign: false, exponent, mantissa }
    }

    fn convert_f64(v: f64) -> DecimalFloat<u64> {
        match decode(v).1 {
            FullDecoded::Finite(b) => convert::<Ieee64>(b),
            FullDecoded::Zero => decimal(0, 0),
            other => panic!("{:?} is not finite: {:?}", v, other),
        }
    }

    fn convert_f32(v: f32) -> DecimalFloat<u32> {
        match decode(v).1 {
            FullDecoded::Finite(b) => convert::<Ieee32>(b),
            FullDecoded::Zero => decimal(0, 0),
            other => panic!("{:?} is not finite: {:?}", v, other),
        }
    }

    #[test]
    fn test_one() {
        assert_eq!(convert::<Ieee32>(binary(-23, 8388608)), decimal(0, 1));
        assert_eq!(convert::<Ieee64>(binary(-52, 1 << 52)), decimal(0, 1));
    }

    #[test]
    fn test_just_below_one() {
        // 0.999999940395355224609375, the lower bound of 1.0 is twice as close
        let below = convert::<Ieee32>(binary(-24, (1 << 24) - 1));
        assert_ne!(below, decimal(0, 1));
        assert_eq!(below, decimal(-8, 99999994));
        assert_eq!(convert_f64(1.0 - f64::EPSILON / 2.0), decimal(-16, 9999999999999999));
    }

    #[test]
    fn test_small() {
        assert_eq!(convert_f64(123.456), decimal(-3, 123456));
        assert_eq!(convert_f64(0.1234), decimal(-4, 1234));
        assert_eq!(convert_f64(core::f64::consts::PI), decimal(-15, 3141592653589793));
        assert_eq!(convert_f64(core::f64::consts::E), decimal(-15, 2718281828459045));
        assert_eq!(convert_f64(core::f64::consts::LN_2), decimal(-16, 6931471805599453));
        assert_eq!(convert_f64(1.0 / 3.0), decimal(-16, 3333333333333333));
        assert_eq!(convert_f32(0.1), decimal(-1, 1));
        assert_eq!(convert_f32(1.0 / 3.0), decimal(-8, 33333334));
    }

    #[test]
    fn test_small_integer() {
        assert_eq!(convert_f64(123456.0), decimal(0, 123456));
        assert_eq!(convert_f64(123000123000.0), decimal(3, 123000123));
        assert_eq!(convert_f64(9007199254740991.0), decimal(0, 9007199254740991));
        assert_eq!(convert_f32(16777215.0), decimal(0, 16777215));
        assert_eq!(convert_f32(100.0), decimal(2, 1));
    }

    #[test]
    fn test_extremes() {
        assert_eq!(convert_f64(0.0), decimal(0, 0));
        assert_eq!(convert_f64(f64::from_bits(1)), decimal(-324, 5));
        assert_eq!(convert_f64(f64::MIN_POSITIVE), decimal(-324, 22250738585072014));
        assert_eq!(convert_f64(f64::MAX), decimal(292, 17976931348623157));
        assert_eq!(convert_f32(f32::from_bits(1)), decimal(-45, 1));
        assert_eq!(convert_f32(f32::MIN_POSITIVE), decimal(-45, 11754944));
        assert_eq!(convert_f32(f32::MAX), decimal(31, 34028235));
    }

    #[test]
    fn test_ties_to_even() {
        // 1.00000762939453125 is exactly halfway between two 17-digit candidates
        assert_eq!(convert_f64(1.00000762939453125), decimal(-16, 10000076293945312));
        // 10^23 lies exactly on the upper bound of its neighbour, which is even
        assert_eq!(convert_f64(1.0e23), decimal(23, 1));
    }

    #[test]
    fn test_sign() {
        let negative = BinaryFloat { sign: true, exponent: -52, mantissa: 3u64 << 51 };
        assert_eq!(convert::<Ieee64>(negative), DecimalFloat { sign: true, exponent: -1, mantissa: 15 });
    }

    #[test]
    fn test_sixteen_bit_formats() {
        // 65504 is the largest binary16 value, 0x3555 is the closest to 1/3
        let (_, half_max) = decode_bits::<Ieee16>(0x7bff);
        assert_eq!(half_max, FullDecoded::Finite(binary(5, 2047)));
        assert_eq!(convert::<Ieee16>(binary(5, 2047)), decimal(2, 655));
        assert_eq!(convert::<Ieee16>(binary(-12, 0x155 | 1 << 10)), decimal(-4, 3333));
        assert_eq!(convert::<Ieee16>(binary(-24, 1)), decimal(-8, 6));
        assert_eq!(convert::<Bfloat16>(binary(-7, 1 << 7)), decimal(0, 1));
        // both 9e-41 and 1e-40 read back as 2^-133, the larger exponent wins
        assert_eq!(convert::<Bfloat16>(binary(-133, 1)), decimal(-40, 1));
    }

    #[test]
    fn test_equal_length_prefers_larger_exponent() {
        // 2^-133 is about 9.18e-41: 9e-41 is closer, but 1e-40 is just as short
        assert_eq!(convert::<Bfloat16>(binary(-133, 1)), decimal(-40, 1));
        assert_eq!(testing::reference_shortest(8, -133, -133, 1), (-40, 1));
    }

    fn convert_f128(bits: u128) -> DecimalFloat<u128> {
        match decode_bits::<Ieee128>(bits).1 {
            FullDecoded::Finite(b) => convert::<Ieee128>(b),
            other => panic!("{:x} is not finite: {:?}", bits, other),
        }
    }

    #[test]
    fn test_ieee128() {
        assert_eq!(convert_f128(0x3fff << 112), decimal(0, 1));
        assert_eq!(convert_f128(0x4005_9000 << 96), decimal(2, 1));
        // the largest finite value, the smallest normal and the smallest subnormal
        assert_eq!(convert_f128(0x7ffe_ffff_ffff_ffff_ffff_ffff_ffff_ffff),
                   decimal(4899, 1189731495357231765085759326628007));
        assert_eq!(convert_f128(0x0001 << 112),
                   decimal(-4966, 33621031431120935062626778173217526));
        assert_eq!(convert_f128(1), decimal(-4966, 6));
    }

    #[test]
    fn test_ieee128_against_reference() {
        let mut rng = rand::thread_rng();
        let table = &ieee128::TABLE;
        let exponents = (table.exponent_min..=table.exponent_max).step_by(997)
            .chain([table.exponent_min + 1, -1, 0, 1, table.exponent_max]);
        for e in exponents {
            let mut mantissas = vec![1 << 112, (1 << 113) - 1, rng.gen_range(1 << 112..1 << 113)];
            if e == table.exponent_min {
                mantissas.extend((0..8).map(|_| rng.gen_range(1..1 << 112)));
            }
            for m in mantissas {
                testing::check_against_reference::<Ieee128>(e, m);
            }
        }
    }

    #[test]
    fn shortest_sanity_test() {
        testing::f32_shortest_sanity_test(format_shortest::<Ieee32>);
        testing::f64_shortest_sanity_test(format_shortest::<Ieee64>);
    }

    #[test]
    fn test_ieee16_exhaustive() {
        testing::exhaustive_reference_test::<Ieee16>();
    }

    #[test]
    fn test_bfloat16_exhaustive() {
        testing::exhaustive_reference_test::<Bfloat16>();
    }

    #[test]
    fn test_f32_against_reference() {
        let mut rng = rand::thread_rng();
        let table = &ieee32::TABLE;
        for e in table.exponent_min..=table.exponent_max {
            let mut mantissas = vec![1 << 23, (1 << 23) + 1, (1 << 24) - 1];
            mantissas.extend((0..8).map(|_| rng.gen_range(1 << 23..1 << 24)));
            if e == table.exponent_min {
                mantissas.extend((0..64).map(|_| rng.gen_range(1..1 << 23)));
            }
            for m in mantissas {
                testing::check_against_reference::<Ieee32>(e, m);
            }
        }
    }

    #[test]
    fn test_f64_against_reference() {
        let mut rng = rand::thread_rng();
        let table = &ieee64::TABLE;
        for e in (table.exponent_min..=table.exponent_max).step_by(3) {
            let mut mantissas = vec![1 << 52, (1 << 53) - 1];
            mantissas.extend((0..2).map(|_| rng.gen_range(1 << 52..1 << 53)));
            if e == table.exponent_min {
                mantissas.extend((0..64).map(|_| rng.gen_range(1..1 << 52)));
            }
            for m in mantissas {
                testing::check_against_reference::<Ieee64>(e, m);
            }
        }
    }

    // every strategy must agree with the one the format uses
    #[test]
    fn test_strategies_agree() {
        let mut rng = rand::thread_rng();
        for _ in 0..20_000 {
            let bits = rng.gen::<u32>() & 0x7fff_ffff;
            if let (_, FullDecoded::Finite(b)) = decode(f32::from_bits(bits)) {
                let expected = convert::<Ieee32>(b);
                let table = &ieee32::TABLE;
                assert_eq!(convert_with::<u32, Synthetic2, BuiltIn2>(table, b), expected);
                assert_eq!(convert_with::<u32, BuiltIn2, Synthetic1>(table, b), expected);
                assert_eq!(convert_with::<u32, Synthetic1, BuiltIn1>(table, b), expected);
                assert_eq!(convert_with::<u32, BuiltIn1, BuiltIn1>(table, b), expected);
            }

            let bits = rng.gen::<u64>() & 0x7fff_ffff_ffff_ffff;
            if let (_, FullDecoded::Finite(b)) = decode(f64::from_bits(bits)) {
                let expected = convert::<Ieee64>(b);
                let table = &ieee64::TABLE;
                assert_eq!(convert_with::<u64, Synthetic2, Synthetic1>(table, b), expected);
                assert_eq!(convert_with::<u64, Synthetic1, BuiltIn1>(table, b), expected);
                assert_eq!(convert_with::<u64, BuiltIn1, BuiltIn2>(table, b), expected);
            }
        }
        let b = binary(-149, 1u32);
        assert_eq!(convert_with::<u32, BuiltIn4, BuiltIn2>(&ieee32::TABLE, b), decimal(-45, 1));
    }

    #[test]
    #[ignore] // it is too expensive
    fn shortest_f32_exhaustive_test() {
        testing::f32_exhaustive_roundtrip_test(format_shortest::<Ieee32>);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10_000))]

        #[test]
        fn integer_roundtrip(int in -(1i64 << 53)..(1i64 << 53)) {
            let decimal = convert_f64(int.unsigned_abs() as f64);
            let mut mantissa = int.unsigned_abs();
            let mut exponent = 0;
            while mantissa != 0 && mantissa % 10 == 0 {
                mantissa /= 10;
                exponent += 1;
            }
            prop_assert_eq!((decimal.exponent, decimal.mantissa), (exponent, mantissa));
        }

        #[test]
        fn f64_roundtrip(bits in 0u64..0x7ff0_0000_0000_0000) {
            let v = f64::from_bits(bits);
            let decimal = convert_f64(v);
            let s = format!("{}e{}", decimal.mantissa, decimal.exponent);
            prop_assert_eq!(s.parse::<f64>().unwrap().to_bits(), bits);
            prop_assert!(decimal.mantissa == 0 || decimal.mantissa % 10 != 0);
        }

        #[test]
        fn f64_shortest(bits in 1u64..0x7ff0_0000_0000_0000) {
            prop_assert!(testing::is_shortest(f64::from_bits(bits), convert_f64(f64::from_bits(bits))));
        }

        #[test]
        fn f32_roundtrip(bits in 0u32..0x7f80_0000) {
            let v = f32::from_bits(bits);
            let decimal = convert_f32(v);
            let s = format!("{}e{}", decimal.mantissa, decimal.exponent);
            prop_assert_eq!(s.parse::<f32>().unwrap().to_bits(), bits);
        }
    }
}
