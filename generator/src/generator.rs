//! Computation of the multiplier and modular inverse tables.

use log::{debug, info, trace};
use num_bigint::{BigInt, BigUint, ToBigUint};
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use teju::flt2dec::estimator::{log10_pow2, residual};
use teju::flt2dec::{MultInverse, Multiplier, Table};
use teju::num::Limb;

use crate::config::FormatConfig;
use crate::error::Error;
use crate::maximum::max1;

/// The generated constants of one format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedTable {
    pub limb_width: u32,
    pub mantissa_width: u32,
    pub exponent_min: i32,
    pub exponent_max: i32,
    /// Decimal exponent of `multipliers[0]`.
    pub index_offset: i32,
    pub shift: u32,
    pub multipliers: Vec<Multiplier<BigUint>>,
    pub minverse: Vec<MultInverse<BigUint>>,
}

/// All binary exponents sharing the decimal exponent `f`.
///
/// The multiplier for `f` approximates `alpha / delta = 2^(e0 - 1) / 10^f`,
/// where `e0` is the smallest binary exponent with that `f`; the conversion
/// makes up for `e - e0` by shifting the mantissa left.
#[derive(Clone, Debug)]
pub struct Problem {
    pub f: i32,
    pub alpha: BigInt,
    pub delta: BigInt,
    /// Pairs of a binary exponent and its residual `e - e0`.
    pub exponents: Vec<(i32, u32)>,
}

fn pow(base: u32, exp: u32) -> BigInt {
    BigInt::from(base).pow(exp)
}

impl Problem {
    fn new(f: i32, e0: i32) -> Problem {
        // 2^(e0 - 1) / 10^f == 2^(e0 - 1 - f) / 5^f
        let e = e0 - 1 - f;
        Problem {
            f,
            alpha: pow(2, e.max(0) as u32) * pow(5, (-f).max(0) as u32),
            delta: pow(2, (-e).max(0) as u32) * pow(5, f.max(0) as u32),
            exponents: Vec::new(),
        }
    }

    /// Every numerator the conversion scales with this multiplier, as
    /// half-open intervals. Each value in them is already shifted left by the
    /// residual of its exponent.
    pub fn domain(&self, config: &FormatConfig) -> Vec<(BigInt, BigInt)> {
        let m0 = BigInt::from(config.mantissa_min());
        let m_max = &m0 * 2u32 - 1u32;
        let mut domain = Vec::new();
        for &(e, r) in &self.exponents {
            let m_min = if e == config.exponent.minimum { BigInt::one() } else { m0.clone() };
            // centred: 2m - 1, 2m + 1 and 4m
            domain.push(((&m_min * 2u32 - 1u32) << r, ((&m_max * 2u32 + 1u32) << r) + 1u32));
            domain.push(((&m_min * 4u32) << r, ((&m_max * 4u32) << r) + 1u32));
            if e != config.exponent.minimum {
                // uncentred: 4m - 1 and 40m
                let lower = (&m0 * 4u32 - 1u32) << r;
                let upper = (&m0 * 40u32) << r;
                domain.push((lower.clone(), lower + 1u32));
                domain.push((upper.clone(), upper + 1u32));
            }
        }
        domain
    }

    /// Returns the maximum of `phi_1` over `domain`.
    pub fn maximum(&self, config: &FormatConfig) -> BigRational {
        let alpha = &self.alpha % &self.delta;
        let mut maximum = BigRational::zero();
        for (a, b) in self.domain(config) {
            maximum = maximum.max(max1(&alpha, &self.delta, &a, &b));
        }
        maximum
    }

    // is (floor(alpha * 2^k / delta) + 1, k) exact for every n with phi_1(n) <= maximum?
    fn is_exact(&self, maximum: &BigRational, k: u32) -> bool {
        let rho = (&self.alpha << k) % &self.delta;
        *maximum < BigRational::new(BigInt::one() << k, &self.delta - rho)
    }

    /// Returns the smallest `k` making `U = floor(alpha * 2^k / delta) + 1` exact.
    pub fn minimal_shift(&self, maximum: &BigRational, limb_width: u32) -> Result<u32, Error> {
        let mut k = 0;
        while !self.is_exact(maximum, k) {
            k += 1;
            if k >= 3 * limb_width {
                return Err(Error::SearchFailure { f: self.f });
            }
        }
        Ok(k)
    }
}

/// Groups the binary exponents of the format by decimal exponent.
pub fn problems(config: &FormatConfig) -> Vec<Problem> {
    let mut problems: Vec<Problem> = Vec::new();
    for e in config.exponent.minimum..=config.exponent.maximum {
        let f = log10_pow2(e);
        let r = residual(e);
        match problems.last_mut() {
            Some(problem) if problem.f == f => problem.exponents.push((e, r)),
            _ => {
                let mut problem = Problem::new(f, e - r as i32);
                problem.exponents.push((e, r));
                problems.push(problem);
            }
        }
    }
    problems
}

fn split(value: BigInt, limb_width: u32) -> Option<(BigUint, BigUint)> {
    let value = value.to_biguint()?;
    let lower = &value & ((BigUint::one() << limb_width) - 1u32);
    Some((value >> limb_width, lower))
}

/// Generates the tables for a validated `config`.
pub fn generate(config: &FormatConfig) -> Result<GeneratedTable, Error> {
    config.validate()?;
    let width = config.size;
    info!("generating tables for {} ({}-bit limbs)", config.id, width);

    let problems = problems(config);
    let mut maxima = Vec::with_capacity(problems.len());
    let mut shift = 2 * width;
    for problem in &problems {
        let maximum = problem.maximum(config);
        let k = problem.minimal_shift(&maximum, width)?;
        trace!("f = {}: maximum = {}, k = {}", problem.f, maximum, k);
        shift = shift.max(k);
        maxima.push(maximum);
    }
    debug!("{} multipliers with common shift {}", problems.len(), shift);

    let mut multipliers = Vec::with_capacity(problems.len());
    for (problem, maximum) in problems.iter().zip(&maxima) {
        if !problem.is_exact(maximum, shift) {
            return Err(Error::SameShift { f: problem.f });
        }
        let u = (&problem.alpha << shift) / &problem.delta + 1u32;
        let (upper, lower) = split(u, width).ok_or(Error::OutOfRange { f: problem.f })?;
        if upper.bits() > width as u64 {
            return Err(Error::OutOfRange { f: problem.f });
        }
        multipliers.push(Multiplier { upper, lower });
    }

    let minverse = minverse(width, config.mantissa.size);
    debug!("{} modular inverses", minverse.len());

    let table = GeneratedTable {
        limb_width: width,
        mantissa_width: config.mantissa.size,
        exponent_min: config.exponent.minimum,
        exponent_max: config.exponent.maximum,
        index_offset: problems.first().map_or(0, |problem| problem.f),
        shift,
        multipliers,
        minverse,
    };
    info!("generated {} multipliers and {} modular inverses, shift = {}",
          table.multipliers.len(), table.minverse.len(), table.shift);
    Ok(table)
}

/// Computes `(5^-f mod 2^width, floor(2^width / 5^f))` for every `f` with
/// `5^f <= 200 * 2^mantissa_width`. No larger power of 5 divides a value the
/// conversion tests.
pub fn minverse(width: u32, mantissa_width: u32) -> Vec<MultInverse<BigUint>> {
    let modulus = BigUint::one() << width;
    let inverse5 = &modulus - (&modulus - 1u32) / 5u32;
    let limit = BigUint::from(200u32) << mantissa_width;

    let mut minverse = Vec::new();
    let mut multiplier = BigUint::one();
    let mut p5 = BigUint::one();
    while p5 <= limit {
        let mut bound = &modulus / &p5;
        if minverse.is_empty() {
            bound -= 1u32;
        }
        minverse.push(MultInverse { multiplier: multiplier.clone(), bound });
        multiplier = multiplier * &inverse5 % &modulus;
        p5 *= 5u32;
    }
    minverse
}

fn to_limb<L: Limb>(value: &BigUint) -> L {
    // every entry fits in a limb by construction
    L::truncate(value.to_u128().unwrap_or(u128::MAX))
}

impl GeneratedTable {
    /// Runs `f` with the tables converted to limbs of type `L`.
    pub fn with_table<L: Limb, R>(&self, f: impl FnOnce(&Table<'_, L>) -> R) -> R {
        assert_eq!(L::BITS, self.limb_width);
        let multipliers: Vec<Multiplier<L>> = self.multipliers.iter()
            .map(|m| Multiplier { upper: to_limb(&m.upper), lower: to_limb(&m.lower) })
            .collect();
        let minverse: Vec<MultInverse<L>> = self.minverse.iter()
            .map(|m| MultInverse { multiplier: to_limb(&m.multiplier), bound: to_limb(&m.bound) })
            .collect();
        f(&Table {
            mantissa_width: self.mantissa_width,
            exponent_min: self.exponent_min,
            exponent_max: self.exponent_max,
            index_offset: self.index_offset,
            shift: self.shift,
            multipliers: &multipliers,
            minverse: &minverse,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Base, CalculationConfig, ExponentConfig, MantissaConfig, Multiply,
                        StorageConfig};
    use teju::flt2dec::format::{Bfloat16, Format, Ieee128, Ieee16, Ieee32, Ieee64};
    use teju::flt2dec::multiply::{BuiltIn1, BuiltIn2, Div10, MShift, Synthetic1};
    use teju::flt2dec::strategy::teju::convert_with;
    use teju::flt2dec::testing::reference_shortest;
    use teju::flt2dec::BinaryFloat;

    fn config(json: &str) -> FormatConfig {
        FormatConfig::from_json(json).unwrap()
    }

    fn ieee32() -> FormatConfig {
        config(include_str!("../configs/ieee32.json"))
    }

    fn custom(size: u32, mantissa: u32, minimum: i32, maximum: i32) -> FormatConfig {
        FormatConfig {
            id: "custom".to_string(),
            size,
            exponent: ExponentConfig { size: 8, minimum, maximum },
            mantissa: MantissaConfig { size: mantissa },
            storage: StorageConfig { base: Base::Decimal },
            calculation: CalculationConfig {
                div10: Multiply::Synthetic1,
                mshift: Multiply::Synthetic1,
            },
        }
    }

    fn assert_matches_shipped<F: Format>(generated: &GeneratedTable) {
        let shipped = F::table();
        generated.with_table::<F::Limb, _>(|table| {
            assert_eq!(table.mantissa_width, shipped.mantissa_width);
            assert_eq!(table.exponent_min, shipped.exponent_min);
            assert_eq!(table.exponent_max, shipped.exponent_max);
            assert_eq!(table.index_offset, shipped.index_offset);
            assert_eq!(table.shift, shipped.shift);
            assert_eq!(table.multipliers, shipped.multipliers);
            assert_eq!(table.minverse, shipped.minverse);
        });
    }

    #[test]
    fn test_ieee32() {
        let table = generate(&ieee32()).unwrap();
        assert_eq!(table.index_offset, -45);
        assert_eq!(table.shift, 64);
        assert_eq!(table.multipliers.len(), 77);
        assert_eq!(table.minverse.len(), 14);
        // 2^-150 / 10^-45
        assert_eq!(table.multipliers[0], Multiplier {
            upper: BigUint::from(0xb35dbf82u32),
            lower: BigUint::from(0x1ae4f38cu32),
        });
        assert_matches_shipped::<Ieee32>(&table);
    }

    #[test]
    fn test_shipped_tables() {
        assert_matches_shipped::<Ieee64>(
            &generate(&config(include_str!("../configs/ieee64.json"))).unwrap());
        assert_matches_shipped::<Ieee16>(
            &generate(&config(include_str!("../configs/ieee16.json"))).unwrap());
        assert_matches_shipped::<Bfloat16>(
            &generate(&config(include_str!("../configs/bfloat16.json"))).unwrap());
    }

    #[test]
    #[ignore] // it is too expensive
    fn test_shipped_ieee128_table() {
        let table = generate(&config(include_str!("../configs/ieee128.json"))).unwrap();
        assert_eq!(table.index_offset, -4966);
        assert_eq!(table.shift, 256);
        assert_eq!(table.multipliers.len(), 9865);
        assert_eq!(table.minverse.len(), 52);
        assert_matches_shipped::<Ieee128>(&table);
    }

    #[test]
    fn test_minverse() {
        let minverse = minverse(32, 24);
        assert_eq!(minverse.len(), 14);
        assert_eq!(minverse[0], MultInverse {
            multiplier: BigUint::one(),
            bound: BigUint::from(u32::MAX),
        });
        assert_eq!(minverse[1].multiplier, BigUint::from(0xcccccccdu32));
        assert_eq!(minverse[1].bound, BigUint::from(0x33333333u32));
        let modulus = BigUint::one() << 32;
        for (f, entry) in minverse.iter().enumerate() {
            let p5 = BigUint::from(5u32).pow(f as u32);
            assert_eq!(&entry.multiplier * &p5 % &modulus, BigUint::one());
        }
    }

    #[test]
    fn test_problems_cover_exponents() {
        let config = ieee32();
        let problems = problems(&config);
        assert_eq!(problems.len(), 77);
        let mut next = config.exponent.minimum;
        for (i, problem) in problems.iter().enumerate() {
            assert_eq!(problem.f, -45 + i as i32);
            assert!(!problem.exponents.is_empty() && problem.exponents.len() <= 4);
            for &(e, r) in &problem.exponents {
                assert_eq!(e, next);
                assert!(r <= 3);
                next += 1;
            }
        }
        assert_eq!(next, config.exponent.maximum + 1);
    }

    // floor(alpha * n / delta) == floor(U * n / 2^shift) for every n in the domain
    fn check_invariant(config: &FormatConfig) {
        let table = generate(config).unwrap();
        for (problem, multiplier) in problems(config).iter().zip(&table.multipliers) {
            let u = BigInt::from((&multiplier.upper << table.limb_width) + &multiplier.lower);
            for (a, b) in problem.domain(config) {
                let mut n = a;
                while n < b {
                    assert_eq!(&problem.alpha * &n / &problem.delta, (&u * &n) >> table.shift,
                               "f = {}, n = {}", problem.f, n);
                    n += 1u32;
                }
            }
        }
    }

    #[test]
    fn test_invariant_bfloat16() {
        check_invariant(&config(include_str!("../configs/bfloat16.json")));
    }

    #[test]
    fn test_invariant_small_formats() {
        check_invariant(&custom(16, 5, -40, 60));
        check_invariant(&custom(32, 11, -24, 15));
    }

    #[test]
    fn test_invariant_ieee32_sampled() {
        use rand::Rng;

        let config = ieee32();
        let table = generate(&config).unwrap();
        let mut rng = rand::thread_rng();
        for (problem, multiplier) in problems(&config).iter().zip(&table.multipliers) {
            let u = BigInt::from((&multiplier.upper << 32) + &multiplier.lower);
            for (a, b) in problem.domain(&config) {
                let (a, b) = (a.to_u64().unwrap(), b.to_u64().unwrap());
                for n in [a, b - 1, rng.gen_range(a..b), rng.gen_range(a..b)] {
                    let n = BigInt::from(n);
                    assert_eq!(&problem.alpha * &n / &problem.delta, (&u * &n) >> table.shift);
                }
            }
        }
    }

    fn check_exhaustive<L: Limb, M: MShift<L>, D: Div10<L>>(config: &FormatConfig) {
        let generated = generate(config).unwrap();
        let width = config.mantissa.size;
        let exponent_min = config.exponent.minimum;
        generated.with_table::<L, _>(|table| {
            for exponent in exponent_min..=config.exponent.maximum {
                let first = if exponent == exponent_min { 1 } else { 1 << (width - 1) };
                for mantissa in first..1u128 << width {
                    let binary = BinaryFloat { sign: false, exponent, mantissa: L::truncate(mantissa) };
                    let decimal = convert_with::<L, M, D>(table, binary);
                    assert_eq!((decimal.exponent, decimal.mantissa.to_u128()),
                               reference_shortest(width, exponent_min, exponent, mantissa),
                               "{} * 2^{}", mantissa, exponent);
                }
            }
        });
    }

    #[test]
    fn test_generated_tables_convert_exactly() {
        // 5-bit mantissas in 16-bit limbs, through two different strategies
        let config = custom(16, 5, -40, 60);
        check_exhaustive::<u16, BuiltIn1, BuiltIn1>(&config);
        check_exhaustive::<u16, Synthetic1, Synthetic1>(&config);
        check_exhaustive::<u32, BuiltIn2, BuiltIn2>(&custom(32, 12, -300, -250));
    }

    #[test]
    fn test_search_failure() {
        let config = ieee32();
        let problem = &problems(&config)[0];
        let maximum = problem.maximum(&config);
        assert!(matches!(problem.minimal_shift(&maximum, 8),
                         Err(Error::SearchFailure { f: -45 })));
        assert!(problem.minimal_shift(&maximum, 32).is_ok());
    }
}
