//! The JSON description of a floating-point format.
//!
//! ```json
//! {
//!   "id": "ieee32",
//!   "size": 32,
//!   "exponent": { "size": 8, "minimum": -149, "maximum": 104 },
//!   "mantissa": { "size": 24 },
//!   "storage": { "base": "decimal" },
//!   "calculation": { "div10": "built_in_2", "mshift": "built_in_4" }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use teju::flt2dec::estimator::LOG10_POW2_BOUNDS;

use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Names the generated module, so it must be a Rust identifier.
    pub id: String,
    /// Limb width in bits.
    pub size: u32,
    pub exponent: ExponentConfig,
    pub mantissa: MantissaConfig,
    pub storage: StorageConfig,
    pub calculation: CalculationConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExponentConfig {
    /// Bits of the biased exponent field.
    pub size: u32,
    /// Binary exponent of the subnormals.
    pub minimum: i32,
    pub maximum: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MantissaConfig {
    /// Bits of the mantissa, counting the implicit one.
    pub size: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    pub base: Base,
}

/// How multipliers are indexed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base {
    /// One multiplier per binary exponent.
    Binary,
    /// One multiplier per decimal exponent, shared by up to four binary ones.
    Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationConfig {
    pub div10: Multiply,
    pub mshift: Multiply,
}

/// The multiplication capability used by `div10` or `mshift`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub enum Multiply {
    #[serde(rename = "built_in_1")]
    BuiltIn1,
    #[serde(rename = "synthetic_1")]
    Synthetic1,
    #[serde(rename = "built_in_2")]
    BuiltIn2,
    #[serde(rename = "synthetic_2")]
    Synthetic2,
    #[serde(rename = "built_in_4")]
    BuiltIn4,
}

impl Multiply {
    /// The marker type in `teju::flt2dec::multiply`.
    pub fn type_name(self) -> &'static str {
        match self {
            Multiply::BuiltIn1 => "BuiltIn1",
            Multiply::Synthetic1 => "Synthetic1",
            Multiply::BuiltIn2 => "BuiltIn2",
            Multiply::Synthetic2 => "Synthetic2",
            Multiply::BuiltIn4 => "BuiltIn4",
        }
    }

    // the widest limb having the native integers this needs
    fn max_limb_size(self) -> u32 {
        match self {
            Multiply::BuiltIn1 | Multiply::Synthetic1 => 128,
            Multiply::BuiltIn2 | Multiply::Synthetic2 => 64,
            Multiply::BuiltIn4 => 32,
        }
    }
}

fn violation(constraint: &'static str) -> Result<(), Error> {
    Err(Error::ConfigViolation(constraint))
}

impl FormatConfig {
    pub fn from_json(json: &str) -> Result<FormatConfig, Error> {
        let config: FormatConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<FormatConfig, Error> {
        let json = fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_owned(), source })?;
        FormatConfig::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let id_ok = self.id.starts_with(|c: char| c.is_ascii_lowercase())
            && self.id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !id_ok {
            return violation("id matches [a-z][a-z0-9_]*");
        }

        if !matches!(self.size, 16 | 32 | 64 | 128) {
            return violation("size in { 16, 32, 64, 128 }");
        }

        let exponent = &self.exponent;
        if exponent.minimum > exponent.maximum {
            return violation("exponent.minimum <= exponent.maximum");
        }
        if !LOG10_POW2_BOUNDS.contains(&exponent.minimum)
            || !LOG10_POW2_BOUNDS.contains(&exponent.maximum)
        {
            return violation("|exponent.minimum|, |exponent.maximum| <= 112815");
        }
        if exponent.size >= 32
            || (exponent.maximum as i64 - exponent.minimum as i64) >= 1i64 << exponent.size
        {
            return violation("exponent.maximum - exponent.minimum < 2^{exponent.size}");
        }

        if self.mantissa.size < 2 {
            return violation("mantissa.size >= 2");
        }
        if exponent.size as u64 + self.mantissa.size as u64 > self.size as u64 {
            return violation("exponent.size + mantissa.size <= size");
        }
        // the widest value the conversion forms is 40 * 2^(mantissa.size - 1) * 2^3
        if self.mantissa.size + 8 > self.size {
            return violation("mantissa.size + 8 <= size");
        }

        if self.storage.base != Base::Decimal {
            return Err(Error::Unsupported(
                "storage.base \"binary\", teju only reads tables indexed by decimal exponent",
            ));
        }

        let div10 = self.calculation.div10;
        if !matches!(div10, Multiply::BuiltIn1 | Multiply::Synthetic1 | Multiply::BuiltIn2) {
            return violation(
                "calculation.div10 in { \"built_in_1\", \"synthetic_1\", \"built_in_2\" }",
            );
        }
        if self.size > div10.max_limb_size() {
            return violation("calculation.div10 is available for the limb size");
        }
        if self.size > self.calculation.mshift.max_limb_size() {
            return violation("calculation.mshift is available for the limb size");
        }

        Ok(())
    }

    /// The normal mantissas are `[2^(mantissa.size - 1), 2^mantissa.size)`.
    pub fn mantissa_min(&self) -> u128 {
        1 << (self.mantissa.size - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IEEE32: &str = include_str!("../configs/ieee32.json");

    fn ieee32() -> FormatConfig {
        FormatConfig::from_json(IEEE32).unwrap()
    }

    fn assert_violation(config: &FormatConfig, expected: &str) {
        match config.validate() {
            Err(Error::ConfigViolation(constraint)) => assert_eq!(constraint, expected),
            other => panic!("expected a violation of {:?}, got {:?}", expected, other),
        }
    }

    #[test]
    fn test_parse() {
        let config = ieee32();
        assert_eq!(config.id, "ieee32");
        assert_eq!(config.size, 32);
        assert_eq!(config.exponent, ExponentConfig { size: 8, minimum: -149, maximum: 104 });
        assert_eq!(config.mantissa.size, 24);
        assert_eq!(config.storage.base, Base::Decimal);
        assert_eq!(config.calculation.div10, Multiply::BuiltIn2);
        assert_eq!(config.calculation.mshift, Multiply::BuiltIn4);
        assert_eq!(config.mantissa_min(), 1 << 23);
    }

    #[test]
    fn test_shipped_configs_are_valid() {
        for json in [
            include_str!("../configs/ieee64.json"),
            include_str!("../configs/ieee16.json"),
            include_str!("../configs/bfloat16.json"),
            include_str!("../configs/ieee128.json"),
        ] {
            FormatConfig::from_json(json).unwrap();
        }
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(FormatConfig::from_json("{"), Err(Error::Json(_))));
        let unknown = IEEE32.replace("\"built_in_4\"", "\"built_in_3\"");
        assert!(matches!(FormatConfig::from_json(&unknown), Err(Error::Json(_))));
        let extra = IEEE32.replace("\"id\"", "\"extra\": 1, \"id\"");
        assert!(matches!(FormatConfig::from_json(&extra), Err(Error::Json(_))));
    }

    #[test]
    fn test_violations() {
        let mut config = ieee32();
        config.id = "long double".to_string();
        assert_violation(&config, "id matches [a-z][a-z0-9_]*");

        let mut config = ieee32();
        config.size = 48;
        assert_violation(&config, "size in { 16, 32, 64, 128 }");

        let mut config = ieee32();
        config.exponent.minimum = 200;
        assert_violation(&config, "exponent.minimum <= exponent.maximum");

        let mut config = ieee32();
        config.exponent.size = 7;
        assert_violation(&config, "exponent.maximum - exponent.minimum < 2^{exponent.size}");

        let mut config = ieee32();
        config.mantissa.size = 25;
        assert_violation(&config, "exponent.size + mantissa.size <= size");

        let mut config = ieee32();
        config.exponent.size = 1;
        config.exponent.minimum = 0;
        config.exponent.maximum = 1;
        config.mantissa.size = 25;
        assert_violation(&config, "mantissa.size + 8 <= size");


        let mut config = ieee32();
        config.calculation.div10 = Multiply::BuiltIn4;
        assert_violation(&config,
                         "calculation.div10 in { \"built_in_1\", \"synthetic_1\", \"built_in_2\" }");

        let mut config = ieee32();
        config.size = 64;
        assert_violation(&config, "calculation.mshift is available for the limb size");
    }

    #[test]
    fn test_binary_storage_is_unsupported() {
        let mut config = ieee32();
        config.storage.base = Base::Binary;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
        assert_eq!(err.to_string(), "Unsupported configuration: storage.base \"binary\", \
                                     teju only reads tables indexed by decimal exponent");

        let json = IEEE32.replace("\"decimal\"", "\"binary\"");
        assert!(matches!(FormatConfig::from_json(&json), Err(Error::Unsupported(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FormatConfig::load(Path::new("configs/does-not-exist.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
