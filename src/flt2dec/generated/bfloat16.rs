// This file was generated by teju-gen from `bfloat16.json`. DO NOT EDIT IT.

use crate::flt2dec::multiply;
use crate::flt2dec::{MultInverse, Multiplier, Table};

pub type MShift = multiply::BuiltIn1;
pub type Div10 = multiply::BuiltIn1;

pub static TABLE: Table<'static, u16> = Table {
    mantissa_width: 8,
    exponent_min: -133,
    exponent_max: 120,
    index_offset: -41,
    shift: 32,
    multipliers: &MULTIPLIERS,
    minverse: &MINVERSE,
};

static MULTIPLIERS: [Multiplier<u16>; 78] = [
    Multiplier { upper: 0x92ef, lower: 0xd1b9 }, // -41
    Multiplier { upper: 0xeb19, lower: 0x4f8f }, // -40
    Multiplier { upper: 0xbc14, lower: 0x3fa5 }, // -39
    Multiplier { upper: 0x9676, lower: 0x9951 }, // -38
    Multiplier { upper: 0xf0bd, lower: 0xc21b }, // -37
    Multiplier { upper: 0xc097, lower: 0xce7c }, // -36
    Multiplier { upper: 0x9a13, lower: 0x0b97 }, // -35
    Multiplier { upper: 0xf684, lower: 0xdf57 }, // -34
    Multiplier { upper: 0xc537, lower: 0x1913 }, // -33
    Multiplier { upper: 0x9dc5, lower: 0xada9 }, // -32
    Multiplier { upper: 0xfc6f, lower: 0x7c41 }, // -31
    Multiplier { upper: 0xc9f2, lower: 0xc9ce }, // -30
    Multiplier { upper: 0xa18f, lower: 0x07d8 }, // -29
    Multiplier { upper: 0x813f, lower: 0x3979 }, // -28
    Multiplier { upper: 0xcecb, lower: 0x8f28 }, // -27
    Multiplier { upper: 0xa56f, lower: 0xa5ba }, // -26
    Multiplier { upper: 0x8459, lower: 0x5162 }, // -25
    Multiplier { upper: 0xd3c2, lower: 0x1bcf }, // -24
    Multiplier { upper: 0xa968, lower: 0x1640 }, // -23
    Multiplier { upper: 0x8786, lower: 0x7833 }, // -22
    Multiplier { upper: 0xd8d7, lower: 0x26b8 }, // -21
    Multiplier { upper: 0xad78, lower: 0xebc6 }, // -20
    Multiplier { upper: 0x8ac7, lower: 0x2305 }, // -19
    Multiplier { upper: 0xde0b, lower: 0x6b3b }, // -18
    Multiplier { upper: 0xb1a2, lower: 0xbc2f }, // -17
    Multiplier { upper: 0x8e1b, lower: 0xc9c0 }, // -16
    Multiplier { upper: 0xe35f, lower: 0xa932 }, // -15
    Multiplier { upper: 0xb5e6, lower: 0x20f5 }, // -14
    Multiplier { upper: 0x9184, lower: 0xe72b }, // -13
    Multiplier { upper: 0xe8d4, lower: 0xa511 }, // -12
    Multiplier { upper: 0xba43, lower: 0xb741 }, // -11
    Multiplier { upper: 0x9502, lower: 0xf901 }, // -10
    Multiplier { upper: 0xee6b, lower: 0x2801 }, // -9
    Multiplier { upper: 0xbebc, lower: 0x2001 }, // -8
    Multiplier { upper: 0x9896, lower: 0x8001 }, // -7
    Multiplier { upper: 0xf424, lower: 0x0001 }, // -6
    Multiplier { upper: 0xc350, lower: 0x0001 }, // -5
    Multiplier { upper: 0x9c40, lower: 0x0001 }, // -4
    Multiplier { upper: 0xfa00, lower: 0x0001 }, // -3
    Multiplier { upper: 0xc800, lower: 0x0001 }, // -2
    Multiplier { upper: 0xa000, lower: 0x0001 }, // -1
    Multiplier { upper: 0x8000, lower: 0x0001 }, // 0
    Multiplier { upper: 0xcccc, lower: 0xcccd }, // 1
    Multiplier { upper: 0xa3d7, lower: 0x0a3e }, // 2
    Multiplier { upper: 0x8312, lower: 0x6e98 }, // 3
    Multiplier { upper: 0xd1b7, lower: 0x1759 }, // 4
    Multiplier { upper: 0xa7c5, lower: 0xac48 }, // 5
    Multiplier { upper: 0x8637, lower: 0xbd06 }, // 6
    Multiplier { upper: 0xd6bf, lower: 0x94d6 }, // 7
    Multiplier { upper: 0xabcc, lower: 0x7712 }, // 8
    Multiplier { upper: 0x8970, lower: 0x5f42 }, // 9
    Multiplier { upper: 0xdbe6, lower: 0xfecf }, // 10
    Multiplier { upper: 0xafeb, lower: 0xff0c }, // 11
    Multiplier { upper: 0x8cbc, lower: 0xcc0a }, // 12
    Multiplier { upper: 0xe12e, lower: 0x1343 }, // 13
    Multiplier { upper: 0xb424, lower: 0xdc36 }, // 14
    Multiplier { upper: 0x901d, lower: 0x7cf8 }, // 15
    Multiplier { upper: 0xe695, lower: 0x94bf }, // 16
    Multiplier { upper: 0xb877, lower: 0xaa33 }, // 17
    Multiplier { upper: 0x9392, lower: 0xee8f }, // 18
    Multiplier { upper: 0xec1e, lower: 0x4a7e }, // 19
    Multiplier { upper: 0xbce5, lower: 0x0865 }, // 20
    Multiplier { upper: 0x971d, lower: 0xa051 }, // 21
    Multiplier { upper: 0xf1c9, lower: 0x0081 }, // 22
    Multiplier { upper: 0xc16d, lower: 0x9a01 }, // 23
    Multiplier { upper: 0x9abe, lower: 0x14ce }, // 24
    Multiplier { upper: 0xf796, lower: 0x87af }, // 25
    Multiplier { upper: 0xc612, lower: 0x0626 }, // 26
    Multiplier { upper: 0x9e74, lower: 0xd1b8 }, // 27
    Multiplier { upper: 0xfd87, lower: 0xb5f3 }, // 28
    Multiplier { upper: 0xcad2, lower: 0xf7f6 }, // 29
    Multiplier { upper: 0xa242, lower: 0x5ff8 }, // 30
    Multiplier { upper: 0x81ce, lower: 0xb32d }, // 31
    Multiplier { upper: 0xcfb1, lower: 0x1eae }, // 32
    Multiplier { upper: 0xa627, lower: 0x4bbe }, // 33
    Multiplier { upper: 0x84ec, lower: 0x3c98 }, // 34
    Multiplier { upper: 0xd4ad, lower: 0x2dc0 }, // 35
    Multiplier { upper: 0xaa24, lower: 0x249a }, // 36
];

static MINVERSE: [MultInverse<u16>; 7] = [
    MultInverse { multiplier: 0x0001, bound: 0xffff }, // 0
    MultInverse { multiplier: 0xcccd, bound: 0x3333 }, // 1
    MultInverse { multiplier: 0x5c29, bound: 0x0a3d }, // 2
    MultInverse { multiplier: 0x78d5, bound: 0x020c }, // 3
    MultInverse { multiplier: 0x7e91, bound: 0x0068 }, // 4
    MultInverse { multiplier: 0xe61d, bound: 0x0014 }, // 5
    MultInverse { multiplier: 0x6139, bound: 0x0004 }, // 6
];
