// This file was generated by teju-gen from `ieee16.json`. DO NOT EDIT IT.

use crate::flt2dec::multiply;
use crate::flt2dec::{MultInverse, Multiplier, Table};

pub type MShift = multiply::Synthetic1;
pub type Div10 = multiply::Synthetic1;

pub static TABLE: Table<'static, u32> = Table {
    mantissa_width: 11,
    exponent_min: -24,
    exponent_max: 5,
    index_offset: -8,
    shift: 64,
    multipliers: &MULTIPLIERS,
    minverse: &MINVERSE,
};

static MULTIPLIERS: [Multiplier<u32>; 10] = [
    Multiplier { upper: 0xbebc2000, lower: 0x00000001 }, // -8
    Multiplier { upper: 0x98968000, lower: 0x00000001 }, // -7
    Multiplier { upper: 0xf4240000, lower: 0x00000001 }, // -6
    Multiplier { upper: 0xc3500000, lower: 0x00000001 }, // -5
    Multiplier { upper: 0x9c400000, lower: 0x00000001 }, // -4
    Multiplier { upper: 0xfa000000, lower: 0x00000001 }, // -3
    Multiplier { upper: 0xc8000000, lower: 0x00000001 }, // -2
    Multiplier { upper: 0xa0000000, lower: 0x00000001 }, // -1
    Multiplier { upper: 0x80000000, lower: 0x00000001 }, // 0
    Multiplier { upper: 0xcccccccc, lower: 0xcccccccd }, // 1
];

static MINVERSE: [MultInverse<u32>; 9] = [
    MultInverse { multiplier: 0x00000001, bound: 0xffffffff }, // 0
    MultInverse { multiplier: 0xcccccccd, bound: 0x33333333 }, // 1
    MultInverse { multiplier: 0xc28f5c29, bound: 0x0a3d70a3 }, // 2
    MultInverse { multiplier: 0x26e978d5, bound: 0x020c49ba }, // 3
    MultInverse { multiplier: 0x3afb7e91, bound: 0x0068db8b }, // 4
    MultInverse { multiplier: 0x0bcbe61d, bound: 0x0014f8b5 }, // 5
    MultInverse { multiplier: 0x68c26139, bound: 0x000431bd }, // 6
    MultInverse { multiplier: 0xae8d46a5, bound: 0x0000d6bf }, // 7
    MultInverse { multiplier: 0x22e90e21, bound: 0x00002af3 }, // 8
];
