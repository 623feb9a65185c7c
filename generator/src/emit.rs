//! Rust source for a generated table, as checked in under
//! `src/flt2dec/generated/`.

use std::io::{self, Write};

use crate::config::FormatConfig;
use crate::generator::GeneratedTable;

/// Writes the module for `table`, generated from `config`.
pub fn emit<W: Write>(out: &mut W, config: &FormatConfig, table: &GeneratedTable) -> io::Result<()> {
    let limb = format!("u{}", table.limb_width);
    // `0x` and one digit per nibble
    let width = table.limb_width as usize / 4 + 2;

    writeln!(out, "// This file was generated by teju-gen from `{}.json`. DO NOT EDIT IT.", config.id)?;
    writeln!(out)?;
    writeln!(out, "use crate::flt2dec::multiply;")?;
    writeln!(out, "use crate::flt2dec::{{MultInverse, Multiplier, Table}};")?;
    writeln!(out)?;
    writeln!(out, "pub type MShift = multiply::{};", config.calculation.mshift.type_name())?;
    writeln!(out, "pub type Div10 = multiply::{};", config.calculation.div10.type_name())?;
    writeln!(out)?;

    writeln!(out, "pub static TABLE: Table<'static, {}> = Table {{", limb)?;
    writeln!(out, "    mantissa_width: {},", table.mantissa_width)?;
    writeln!(out, "    exponent_min: {},", table.exponent_min)?;
    writeln!(out, "    exponent_max: {},", table.exponent_max)?;
    writeln!(out, "    index_offset: {},", table.index_offset)?;
    writeln!(out, "    shift: {},", table.shift)?;
    writeln!(out, "    multipliers: &MULTIPLIERS,")?;
    writeln!(out, "    minverse: &MINVERSE,")?;
    writeln!(out, "}};")?;
    writeln!(out)?;

    writeln!(out, "static MULTIPLIERS: [Multiplier<{}>; {}] = [", limb, table.multipliers.len())?;
    for (f, m) in (table.index_offset..).zip(&table.multipliers) {
        writeln!(out, "    Multiplier {{ upper: {:#0w$x}, lower: {:#0w$x} }}, // {}",
                 m.upper, m.lower, f, w = width)?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;

    writeln!(out, "static MINVERSE: [MultInverse<{}>; {}] = [", limb, table.minverse.len())?;
    for (f, m) in table.minverse.iter().enumerate() {
        writeln!(out, "    MultInverse {{ multiplier: {:#0w$x}, bound: {:#0w$x} }}, // {}",
                 m.multiplier, m.bound, f, w = width)?;
    }
    writeln!(out, "];")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    fn emit_to_string(json: &str) -> String {
        let config = FormatConfig::from_json(json).unwrap();
        let table = generate(&config).unwrap();
        let mut out = Vec::new();
        emit(&mut out, &config, &table).unwrap();
        String::from_utf8(out).unwrap()
    }

    // the checked-in tables must be exactly what the generator writes today
    #[test]
    fn test_checked_in_tables_are_current() {
        assert_eq!(emit_to_string(include_str!("../configs/ieee32.json")),
                   include_str!("../../src/flt2dec/generated/ieee32.rs"));
        assert_eq!(emit_to_string(include_str!("../configs/ieee64.json")),
                   include_str!("../../src/flt2dec/generated/ieee64.rs"));
        assert_eq!(emit_to_string(include_str!("../configs/ieee16.json")),
                   include_str!("../../src/flt2dec/generated/ieee16.rs"));
        assert_eq!(emit_to_string(include_str!("../configs/bfloat16.json")),
                   include_str!("../../src/flt2dec/generated/bfloat16.rs"));
    }

    #[test]
    #[ignore] // it is too expensive
    fn test_checked_in_ieee128_table_is_current() {
        assert_eq!(emit_to_string(include_str!("../configs/ieee128.json")),
                   include_str!("../../src/flt2dec/generated/ieee128.rs"));
    }

    #[test]
    fn test_layout() {
        let text = emit_to_string(include_str!("../configs/bfloat16.json"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[5], "pub type MShift = multiply::BuiltIn1;");
        assert_eq!(lines[8], "pub static TABLE: Table<'static, u16> = Table {");
        assert!(text.contains("    Multiplier { upper: 0x92ef, lower: 0xd1b9 }, // -41\n"));
        assert!(text.contains("    MultInverse { multiplier: 0x0001, bound: 0xffff }, // 0\n"));
        assert!(text.ends_with("];\n"));
    }
}
