/*!

Shortest floating-point to decimal conversion.

The conversion proper happens in `strategy::teju`, which turns a `BinaryFloat`
into the `DecimalFloat` with the fewest significant digits that reads back as
the same value. Everything it needs at run time is a per-format `Table` of
fixed-point multipliers and modular inverses, produced offline by the
`teju-gen` tool and checked in under `generated`.

This module also renders the digits as text, either in the plain decimal
form (`to_shortest_str`) or switching to the exponential form outside of
given bounds (`to_shortest_exp_str`). Both produce a list of `Part`s so that
no allocation is needed.

*/

pub use self::decoder::{decode, decode_bits, DecodableFloat, FullDecoded};
pub use self::format::Format;

pub mod decoder;
pub mod estimator;
pub mod format;
pub mod generated;
pub mod minverse;
pub mod multiply;

pub mod strategy {
    pub mod teju;
}

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod tests;

/// The maximal number of significant decimal digits of the shortest
/// representation of any supported format, that is, `ceil(113 * log_10 2) + 1`
/// for binary128. `f32` and `f64` need no more than 17.
pub const MAX_SIG_DIGITS: usize = 36;

/// A binary floating-point value `(-1)^sign * mantissa * 2^exponent`.
///
/// The implicit leading bit, if any, is already part of `mantissa`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BinaryFloat<L> {
    pub sign: bool,
    pub exponent: i32,
    pub mantissa: L,
}

/// A decimal floating-point value `(-1)^sign * mantissa * 10^exponent`.
///
/// As returned by the conversion, `mantissa` has no trailing decimal zeros
/// unless the value is zero, in which case both fields are zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DecimalFloat<L> {
    pub sign: bool,
    pub exponent: i32,
    pub mantissa: L,
}

/// The double-limb multiplier `upper * 2^N + lower` for one decimal exponent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Multiplier<L> {
    pub upper: L,
    pub lower: L,
}

/// `n` is a multiple of `5^f` iff `n * multiplier <= bound` modulo `2^N`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MultInverse<L> {
    pub multiplier: L,
    pub bound: L,
}

/// Constants driving the conversion for one floating-point format.
#[derive(Copy, Clone, Debug)]
pub struct Table<'a, L> {
    /// Number of mantissa bits including the implicit one.
    pub mantissa_width: u32,
    /// Smallest binary exponent, the one of subnormals.
    pub exponent_min: i32,
    pub exponent_max: i32,
    /// Decimal exponent of `multipliers[0]`.
    pub index_offset: i32,
    /// Common shift of every multiplier.
    pub shift: u32,
    pub multipliers: &'a [Multiplier<L>],
    /// `minverse[f]` tests divisibility by `5^f`.
    pub minverse: &'a [MultInverse<L>],
}

impl<'a, L> Table<'a, L> {
    /// Returns the multiplier for the decimal exponent `f`.
    pub fn multiplier(&self, f: i32) -> &Multiplier<L> {
        debug_assert!(f >= self.index_offset, "exponent {} below the table", f);
        &self.multipliers[(f - self.index_offset) as usize]
    }

    /// Returns the modular inverse of `5^f`, or `None` when `5^f` exceeds
    /// every value the conversion may test.
    pub fn minverse(&self, f: i32) -> Option<&MultInverse<L>> {
        usize::try_from(f).ok().and_then(|f| self.minverse.get(f))
    }
}

/// Formatted parts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Part<'a> {
    /// Given number of zero digits.
    Zero(usize),
    /// A literal number up to 5 digits.
    Num(u16),
    /// A verbatim copy of given bytes.
    Copy(&'a [u8]),
}

impl<'a> Part<'a> {
    /// Returns the exact byte length of given part.
    pub fn len(&self) -> usize {
        match *self {
            Part::Zero(nzeroes) => nzeroes,
            Part::Num(v) => v.checked_ilog10().unwrap_or_default() as usize + 1,
            Part::Copy(buf) => buf.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes a part into the supplied buffer.
    /// Returns the number of written bytes, or `None` if the buffer is not enough.
    pub fn write(&self, out: &mut [u8]) -> Option<usize> {
        let len = self.len();
        if out.len() < len {
            return None;
        }
        match *self {
            Part::Zero(nzeroes) => {
                for c in &mut out[..nzeroes] {
                    *c = b'0';
                }
            }
            Part::Num(mut v) => {
                for c in out[..len].iter_mut().rev() {
                    *c = b'0' + (v % 10) as u8;
                    v /= 10;
                }
            }
            Part::Copy(buf) => {
                out[..buf.len()].copy_from_slice(buf);
            }
        }
        Some(len)
    }
}

/// Formatted result containing one or more parts.
#[derive(Clone, Debug)]
pub struct Formatted<'a> {
    /// Either `""`, `"-"` or `"+"`.
    pub sign: &'static str,
    pub parts: &'a [Part<'a>],
}

impl<'a> Formatted<'a> {
    /// Returns the exact byte length of combined formatted result.
    pub fn len(&self) -> usize {
        self.sign.len() + self.parts.iter().map(|part| part.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes all formatted parts into the supplied buffer.
    /// Returns the number of written bytes, or `None` if the buffer is not enough.
    pub fn write(&self, out: &mut [u8]) -> Option<usize> {
        out.get_mut(..self.sign.len())?.copy_from_slice(self.sign.as_bytes());

        let mut written = self.sign.len();
        for part in self.parts {
            written += part.write(&mut out[written..])?;
        }
        Some(written)
    }
}

fn digits_to_dec_str<'a>(
    buf: &'a [u8],
    exp: i16,
    frac_digits: usize,
    parts: &'a mut [Part<'a>],
) -> &'a [Part<'a>] {
    assert!(!buf.is_empty());
    assert!(buf[0] > b'0');
    assert!(parts.len() >= 4);

    // `buf` holds `0.d1d2...dn * 10^exp` without the leading `0.`. when
    // `frac_digits` asks for more fractional digits than there are, the
    // missing ones are rendered as trailing zeroes:
    //
    //                       |<-virtual->|
    //       |<---- buf ---->|  zeroes   |     exp
    //    0. 1 2 3 4 5 6 7 8 9 _ _ _ _ _ _ x 10
    //    |                  |           |
    // 10^exp    10^(exp-buf.len())   10^(exp-buf.len()-nzeroes)

    if exp <= 0 {
        // the decimal point is before rendered digits: [0.][000...000][1234][____]
        let minus_exp = -(exp as i32) as usize;
        parts[0] = Part::Copy(b"0.");
        parts[1] = Part::Zero(minus_exp);
        parts[2] = Part::Copy(buf);
        if frac_digits > buf.len() && frac_digits - buf.len() > minus_exp {
            parts[3] = Part::Zero((frac_digits - buf.len()) - minus_exp);
            &parts[..4]
        } else {
            &parts[..3]
        }
    } else {
        let exp = exp as usize;
        if exp < buf.len() {
            // the decimal point is inside rendered digits: [12][.][34][____]
            parts[0] = Part::Copy(&buf[..exp]);
            parts[1] = Part::Copy(b".");
            parts[2] = Part::Copy(&buf[exp..]);
            if frac_digits > buf.len() - exp {
                parts[3] = Part::Zero(frac_digits - (buf.len() - exp));
                &parts[..4]
            } else {
                &parts[..3]
            }
        } else {
            // the decimal point is after rendered digits: [1234][____0000] or [1234][__][.][__].
            parts[0] = Part::Copy(buf);
            parts[1] = Part::Zero(exp - buf.len());
            if frac_digits > 0 {
                parts[2] = Part::Copy(b".");
                parts[3] = Part::Zero(frac_digits);
                &parts[..4]
            } else {
                &parts[..2]
            }
        }
    }
}

fn digits_to_exp_str<'a>(
    buf: &'a [u8],
    exp: i16,
    upper: bool,
    parts: &'a mut [Part<'a>],
) -> &'a [Part<'a>] {
    assert!(!buf.is_empty());
    assert!(buf[0] > b'0');
    assert!(parts.len() >= 5);

    let mut n = 0;

    parts[n] = Part::Copy(&buf[..1]);
    n += 1;

    if buf.len() > 1 {
        parts[n] = Part::Copy(b".");
        parts[n + 1] = Part::Copy(&buf[1..]);
        n += 2;
    }

    // 0.1234 x 10^exp = 1.234 x 10^(exp-1)
    let exp = exp as i32 - 1; // avoid underflow when exp is i16::MIN
    if exp < 0 {
        parts[n] = Part::Copy(if upper { b"E-" } else { b"e-" });
        parts[n + 1] = Part::Num(-exp as u16);
    } else {
        parts[n] = Part::Copy(if upper { b"E" } else { b"e" });
        parts[n + 1] = Part::Num(exp as u16);
    }
    &parts[..n + 2]
}

/// Sign formatting options.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Sign {
    /// Prints `-` for any negative value.
    Minus, // -inf -1 -0 0 1 inf nan
    /// Prints `-` for any negative value, or `+` otherwise.
    MinusPlus, // -inf -1 -0 +0 +1 +inf nan
}

fn determine_sign<L>(sign: Sign, decoded: &FullDecoded<L>, negative: bool) -> &'static str {
    match (decoded, sign) {
        (FullDecoded::Nan, _) => "",
        (_, Sign::Minus) => {
            if negative {
                "-"
            } else {
                ""
            }
        }
        (_, Sign::MinusPlus) => {
            if negative {
                "-"
            } else {
                "+"
            }
        }
    }
}

/// Formats the given floating point number into the decimal form with at
/// least given number of fractional digits, using the shortest digits that
/// read back as the same number.
///
/// `parts` must have at least 4 elements and `buf` at least `MAX_SIG_DIGITS`
/// bytes.
pub fn to_shortest_str<'a, T: DecodableFloat>(
    v: T,
    sign: Sign,
    frac_digits: usize,
    buf: &'a mut [u8],
    parts: &'a mut [Part<'a>],
) -> Formatted<'a> {
    assert!(parts.len() >= 4);
    assert!(buf.len() >= MAX_SIG_DIGITS);

    let (negative, full_decoded) = decode(v);
    let sign = determine_sign(sign, &full_decoded, negative);
    match full_decoded {
        FullDecoded::Nan => {
            parts[0] = Part::Copy(b"NaN");
            Formatted { sign, parts: &parts[..1] }
        }
        FullDecoded::Infinite => {
            parts[0] = Part::Copy(b"inf");
            Formatted { sign, parts: &parts[..1] }
        }
        FullDecoded::Zero => {
            if frac_digits > 0 {
                // [0.][0000]
                parts[0] = Part::Copy(b"0.");
                parts[1] = Part::Zero(frac_digits);
                Formatted { sign, parts: &parts[..2] }
            } else {
                parts[0] = Part::Copy(b"0");
                Formatted { sign, parts: &parts[..1] }
            }
        }
        FullDecoded::Finite(ref binary) => {
            let (len, exp) = strategy::teju::format_shortest::<T::Format>(binary, buf);
            Formatted { sign, parts: digits_to_dec_str(&buf[..len], exp, frac_digits, parts) }
        }
    }
}

/// Formats the given floating point number into the decimal form or
/// the exponential form, depending on the resulting exponent, using the
/// shortest digits that read back as the same number.
///
/// `dec_bounds == (lo, hi)` renders `v` in the decimal form when
/// `10^lo <= v < 10^hi`. `parts` must have at least 5 elements and `buf` at
/// least `MAX_SIG_DIGITS` bytes.
pub fn to_shortest_exp_str<'a, T: DecodableFloat>(
    v: T,
    sign: Sign,
    dec_bounds: (i16, i16),
    upper: bool,
    buf: &'a mut [u8],
    parts: &'a mut [Part<'a>],
) -> Formatted<'a> {
    assert!(parts.len() >= 5);
    assert!(buf.len() >= MAX_SIG_DIGITS);
    assert!(dec_bounds.0 <= dec_bounds.1);

    let (negative, full_decoded) = decode(v);
    let sign = determine_sign(sign, &full_decoded, negative);
    match full_decoded {
        FullDecoded::Nan => {
            parts[0] = Part::Copy(b"NaN");
            Formatted { sign, parts: &parts[..1] }
        }
        FullDecoded::Infinite => {
            parts[0] = Part::Copy(b"inf");
            Formatted { sign, parts: &parts[..1] }
        }
        FullDecoded::Zero => {
            parts[0] = if dec_bounds.0 <= 0 && 0 < dec_bounds.1 {
                Part::Copy(b"0")
            } else {
                Part::Copy(if upper { b"0E0" } else { b"0e0" })
            };
            Formatted { sign, parts: &parts[..1] }
        }
        FullDecoded::Finite(ref binary) => {
            let (len, exp) = strategy::teju::format_shortest::<T::Format>(binary, buf);
            let vis_exp = exp as i32 - 1;
            let parts = if dec_bounds.0 as i32 <= vis_exp && vis_exp < dec_bounds.1 as i32 {
                digits_to_dec_str(&buf[..len], exp, 0, parts)
            } else {
                digits_to_exp_str(&buf[..len], exp, upper, parts)
            };
            Formatted { sign, parts }
        }
    }
}
