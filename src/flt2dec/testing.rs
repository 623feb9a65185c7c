//! Shared test helpers: sanity checks against known digits and an exact
//! reference implementation of the shortest conversion.

use std::string::ToString;
use std::str::{self, FromStr};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive};

use crate::flt2dec::strategy::teju::convert;
use crate::flt2dec::{decode, decode_bits, BinaryFloat, DecimalFloat, Format, FullDecoded, MAX_SIG_DIGITS};
use crate::num::Limb;

macro_rules! check_shortest {
    ($f:ident($v:expr) => $buf:expr, $exp:expr) => ({
        let mut buf = [0; MAX_SIG_DIGITS];
        let binary = match decode($v).1 {
            FullDecoded::Finite(binary) => binary,
            decoded => panic!("{:?} is not finite: {:?}", $v, decoded),
        };
        let (len, k) = $f(&binary, &mut buf);
        assert_eq!((str::from_utf8(&buf[..len]).unwrap(), k),
                   (str::from_utf8($buf).unwrap(), $exp));
    })
}

// in the following comments, three numbers are spaced by 1 ulp apart,
// and the second one is being formatted.

pub fn f32_shortest_sanity_test<F>(mut f: F)
        where F: FnMut(&BinaryFloat<u32>, &mut [u8]) -> (usize, i16) {
    // 0.0999999940395355224609375
    // 0.100000001490116119384765625
    // 0.10000000894069671630859375
    check_shortest!(f(0.1f32) => b"1", 0);

    // 0.333333313465118408203125
    // 0.3333333432674407958984375 (1/3 in the default rounding)
    // 0.33333337306976318359375
    check_shortest!(f(1.0f32/3.0) => b"33333334", 0);

    // 10^1 * 0.31415917873382568359375
    // 10^1 * 0.31415920257568359375
    // 10^1 * 0.31415922641754150390625
    check_shortest!(f(3.141592f32) => b"3141592", 1);

    // 10^18 * 0.31415916243714048
    // 10^18 * 0.314159196796878848
    // 10^18 * 0.314159231156617216
    check_shortest!(f(3.141592e17f32) => b"3141592", 18);

    // 10^39 * 0.340282326356119256160033759537265639424
    // 10^39 * 0.34028234663852885981170418348451692544
    // 10^39 * 0.340282366920938463463374607431768211456
    check_shortest!(f(f32::MAX) => b"34028235", 39);

    // 10^-37 * 0.1175494210692441075487029444849287348827...
    // 10^-37 * 0.1175494350822287507968736537222245677818...
    // 10^-37 * 0.1175494490952133940450443629595204006810...
    check_shortest!(f(f32::MIN_POSITIVE) => b"11754944", -37);

    // 10^-44 * 0
    // 10^-44 * 0.1401298464324817070923729583289916131280...
    // 10^-44 * 0.2802596928649634141847459166579832262560...
    check_shortest!(f(f32::from_bits(1)) => b"1", -44);

    // 0.999999940395355224609375
    // 1 (exact), with the lower neighbour twice as close
    // 1.00000011920928955078125
    check_shortest!(f(1.0f32) => b"1", 1);
}

pub fn f64_shortest_sanity_test<F>(mut f: F)
        where F: FnMut(&BinaryFloat<u64>, &mut [u8]) -> (usize, i16) {
    // 0.0999999999999999777955395074968691915273...
    // 0.1000000000000000055511151231257827021181...
    // 0.1000000000000000333066907387546962127089...
    check_shortest!(f(0.1f64) => b"1", 0);

    // 10^3 * 0.0999999999999999857891452847979962825775...
    // 10^3 * 0.1 (exact)
    // 10^3 * 0.1000000000000000142108547152020037174224...
    check_shortest!(f(100.0f64) => b"1", 3);

    // 0.3333333333333332593184650249895639717578...
    // 0.3333333333333333148296162562473909929394... (1/3 in the default rounding)
    // 0.3333333333333333703407674875052180141210...
    check_shortest!(f(1.0f64/3.0) => b"3333333333333333", 0);

    // explicit test case for equally closest representations.
    // both 17-digit candidates are 2^-53 away, the even one is chosen.
    // 10^1 * 0.1000007629394531027955395074968691915273...
    // 10^1 * 0.100000762939453125 (exact)
    // 10^1 * 0.1000007629394531472044604925031308084726...
    check_shortest!(f(1.00000762939453125f64) => b"10000076293945312", 1);

    // 10^1 * 0.3141591999999999718085064159822650253772...
    // 10^1 * 0.3141592000000000162174274009885266423225...
    // 10^1 * 0.3141592000000000606263483859947882592678...
    check_shortest!(f(3.141592f64) => b"3141592", 1);

    // 10^18 * 0.314159199999999936
    // 10^18 * 0.3141592 (exact)
    // 10^18 * 0.314159200000000064
    check_shortest!(f(3.141592e17f64) => b"3141592", 18);

    // pathological case: high = 10^23 (exact). tie breaking should always prefer that.
    // 10^24 * 0.099999999999999974834176
    // 10^24 * 0.099999999999999991611392
    // 10^24 * 0.100000000000000008388608
    check_shortest!(f(1.0e23f64) => b"1", 24);

    // 10^309 * 0.1797693134862315508561243283845062402343...
    // 10^309 * 0.1797693134862315708145274237317043567980...
    // 10^309 * 0.1797693134862315907729305190789024733617...
    check_shortest!(f(f64::MAX) => b"17976931348623157", 309);

    // 10^-307 * 0.2225073858507200889024586876085859887650...
    // 10^-307 * 0.2225073858507201383090232717332404064219...
    // 10^-307 * 0.2225073858507201877155878558578948240788...
    check_shortest!(f(f64::MIN_POSITIVE) => b"22250738585072014", -307);

    // 10^-323 * 0
    // 10^-323 * 0.4940656458412465441765687928682213723650...
    // 10^-323 * 0.9881312916824930883531375857364427447301...
    check_shortest!(f(f64::from_bits(1)) => b"5", -323);
}

fn pow_rational(base: u32, exp: i32) -> BigRational {
    let p = BigInt::from(base).pow(exp.unsigned_abs());
    if exp >= 0 {
        BigRational::from_integer(p)
    } else {
        BigRational::new(BigInt::one(), p)
    }
}

fn ndigits(n: &BigInt) -> i32 {
    n.to_string().len() as i32
}

/// Returns the shortest `(exponent, mantissa)` in base 10 for
/// `mantissa * 2^exponent`, computed with exact rationals by trying every
/// decimal exponent from above. Among candidates at the first exponent that
/// has any, the closest wins, then the even one.
pub fn reference_shortest(mantissa_width: u32, exponent_min: i32,
                          exponent: i32, mantissa: u128) -> (i32, u128) {
    assert!(mantissa > 0);
    let v = BigRational::from_integer(BigInt::from(mantissa)) * pow_rational(2, exponent);
    let lower = if mantissa == 1 << (mantissa_width - 1) && exponent != exponent_min {
        &v - pow_rational(2, exponent - 2)
    } else {
        &v - pow_rational(2, exponent - 1)
    };
    let upper = &v + pow_rational(2, exponent - 1);
    let inclusive = mantissa % 2 == 0;
    let inside = |x: &BigRational| {
        if inclusive { lower <= *x && *x <= upper } else { lower < *x && *x < upper }
    };

    let mut k = ndigits(upper.numer()) - ndigits(upper.denom()) + 2;
    loop {
        let scale = pow_rational(10, k);
        let first = (&lower / &scale).floor().to_integer();
        let last = (&upper / &scale).ceil().to_integer();

        let mut best: Option<(BigRational, BigInt)> = None;
        let mut d = first;
        while d <= last {
            let x = BigRational::from_integer(d.clone()) * &scale;
            if d.is_positive() && inside(&x) {
                let distance = (&x - &v).abs();
                let better = match best {
                    None => true,
                    Some((ref bd, ref bdigits)) =>
                        distance < *bd || (distance == *bd && d.is_even() && !bdigits.is_even()),
                };
                if better {
                    best = Some((distance, d.clone()));
                }
            }
            d += 1;
        }
        if let Some((_, d)) = best {
            return (k, d.to_u128().unwrap());
        }
        k -= 1;
    }
}

pub fn check_against_reference<F: Format>(exponent: i32, mantissa: F::Limb) {
    let table = F::table();
    let actual = convert::<F>(BinaryFloat { sign: false, exponent, mantissa });
    let expected = reference_shortest(table.mantissa_width, table.exponent_min,
                                      exponent, mantissa.to_u128());
    assert_eq!((actual.exponent, actual.mantissa.to_u128()), expected,
               "{} * 2^{}", mantissa, exponent);
}

/// Checks every positive finite value of `F` against `reference_shortest`.
pub fn exhaustive_reference_test<F: Format>() {
    let stored_bits = F::table().mantissa_width - 1;
    let limit = ((1u128 << F::EXPONENT_BITS) - 1) << stored_bits;
    for bits in 1..limit {
        if let (_, FullDecoded::Finite(binary)) = decode_bits::<F>(bits) {
            check_against_reference::<F>(binary.exponent, binary.mantissa);
        }
    }
}

/// Returns true if no decimal with one digit less reads back as `v`.
pub fn is_shortest<T, L>(v: T, decimal: DecimalFloat<L>) -> bool
        where T: FromStr + PartialEq, L: Limb {
    let shorter = decimal.mantissa.to_u128() / 10;
    let reads_back = |m: u128| {
        m != 0 && format!("{}e{}", m, decimal.exponent + 1).parse::<T>().ok().as_ref() == Some(&v)
    };
    !reads_back(shorter) && !reads_back(shorter + 1)
}

pub fn f32_exhaustive_roundtrip_test<F>(mut f: F)
        where F: FnMut(&BinaryFloat<u32>, &mut [u8]) -> (usize, i16) {
    // we have only 2^23 * (2^8 - 1) - 1 = 2,139,095,039 positive finite f32 values,
    // so why not simply testing all of them?
    //
    // this is of course very stressful (and thus should be behind an `#[ignore]` attribute),
    // but with `--release` this only takes a while.

    let mut ntested = 0;
    let mut npassed = 0;

    for i in 0x00000001u32..0x7f800000 {
        if (i & 0xfffff) == 0 {
            println!("in progress, {:x}/{:x} (passed={} failed={})",
                     i, 0x7f800000u32, npassed, ntested - npassed);
        }

        let x = f32::from_bits(i);
        let binary = match decode(x).1 {
            FullDecoded::Finite(binary) => binary,
            decoded => panic!("{:x} is not finite: {:?}", i, decoded),
        };
        let mut buf = [0; MAX_SIG_DIGITS];
        let (len, exp) = f(&binary, &mut buf);
        let digits = str::from_utf8(&buf[..len]).unwrap();
        let parsed = format!("0.{}e{}", digits, exp).parse::<f32>().unwrap();
        let decimal = DecimalFloat { sign: false, exponent: exp as i32 - len as i32,
                                     mantissa: digits.parse::<u32>().unwrap() };
        if parsed == x && is_shortest(x, decimal) {
            npassed += 1;
        } else {
            println!("roundtrip test failed, i={:x} f(i)=0.{}e{}", i, digits, exp);
        }
        ntested += 1;
    }
    println!("done, passed={} failed={}", npassed, ntested - npassed);
    assert!(npassed == ntested,
            "{} out of {} f32 values returns an incorrect value!",
            ntested - npassed, ntested);
}
