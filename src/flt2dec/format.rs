//! Supported floating-point formats.

use crate::flt2dec::generated;
use crate::flt2dec::multiply::{Div10, MShift};
use crate::flt2dec::Table;
use crate::num::Limb;

/// A binary floating-point format together with its generated table and
/// the arithmetic used to convert it.
pub trait Format {
    type Limb: Limb + 'static;
    type MShift: MShift<Self::Limb>;
    type Div10: Div10<Self::Limb>;

    /// Width of the biased exponent field in the IEEE 754 style encoding.
    const EXPONENT_BITS: u32;

    fn table() -> &'static Table<'static, Self::Limb>;
}

/// IEEE 754 binary32, `f32`.
pub enum Ieee32 {}

/// IEEE 754 binary64, `f64`.
pub enum Ieee64 {}

/// IEEE 754 binary128. There is no native Rust type, so values come in
/// through `decode_bits`.
pub enum Ieee128 {}

/// IEEE 754 binary16. Computed on 32-bit limbs.
pub enum Ieee16 {}

/// The upper half of binary32, with 8 bits of precision.
pub enum Bfloat16 {}

macro_rules! impl_format {
    ($($name:ident: limb=$limb:ty, exponent_bits=$ebits:expr, table=$module:ident;)*) => (
        $(
            impl Format for $name {
                type Limb = $limb;
                type MShift = generated::$module::MShift;
                type Div10 = generated::$module::Div10;

                const EXPONENT_BITS: u32 = $ebits;

                fn table() -> &'static Table<'static, $limb> {
                    &generated::$module::TABLE
                }
            }
        )*
    )
}

impl_format! {
    Ieee32:   limb=u32, exponent_bits=8,  table=ieee32;
    Ieee64:   limb=u64, exponent_bits=11, table=ieee64;
    Ieee128:  limb=u128, exponent_bits=15, table=ieee128;
    Ieee16:   limb=u32, exponent_bits=5,  table=ieee16;
    Bfloat16: limb=u16, exponent_bits=8,  table=bfloat16;
}
