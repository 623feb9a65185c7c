// This file was generated by teju-gen from `ieee32.json`. DO NOT EDIT IT.

use crate::flt2dec::multiply;
use crate::flt2dec::{MultInverse, Multiplier, Table};

pub type MShift = multiply::BuiltIn4;
pub type Div10 = multiply::BuiltIn2;

pub static TABLE: Table<'static, u32> = Table {
    mantissa_width: 24,
    exponent_min: -149,
    exponent_max: 104,
    index_offset: -45,
    shift: 64,
    multipliers: &MULTIPLIERS,
    minverse: &MINVERSE,
};

static MULTIPLIERS: [Multiplier<u32>; 77] = [
    Multiplier { upper: 0xb35dbf82, lower: 0x1ae4f38c }, // -45
    Multiplier { upper: 0x8f7e32ce, lower: 0x7bea5c70 }, // -44
    Multiplier { upper: 0xe596b7b0, lower: 0xc643c71a }, // -43
    Multiplier { upper: 0xb7abc627, lower: 0x050305ae }, // -42
    Multiplier { upper: 0x92efd1b8, lower: 0xd0cf37bf }, // -41
    Multiplier { upper: 0xeb194f8e, lower: 0x1ae525fe }, // -40
    Multiplier { upper: 0xbc143fa4, lower: 0xe250eb32 }, // -39
    Multiplier { upper: 0x96769950, lower: 0xb50d88f5 }, // -38
    Multiplier { upper: 0xf0bdc21a, lower: 0xbb48db21 }, // -37
    Multiplier { upper: 0xc097ce7b, lower: 0xc90715b4 }, // -36
    Multiplier { upper: 0x9a130b96, lower: 0x3a6c115d }, // -35
    Multiplier { upper: 0xf684df56, lower: 0xc3e01bc7 }, // -34
    Multiplier { upper: 0xc5371912, lower: 0x364ce306 }, // -33
    Multiplier { upper: 0x9dc5ada8, lower: 0x2b70b59e }, // -32
    Multiplier { upper: 0xfc6f7c40, lower: 0x45812297 }, // -31
    Multiplier { upper: 0xc9f2c9cd, lower: 0x04674edf }, // -30
    Multiplier { upper: 0xa18f07d7, lower: 0x36b90be6 }, // -29
    Multiplier { upper: 0x813f3978, lower: 0xf8940985 }, // -28
    Multiplier { upper: 0xcecb8f27, lower: 0xf4200f3b }, // -27
    Multiplier { upper: 0xa56fa5b9, lower: 0x9019a5c9 }, // -26
    Multiplier { upper: 0x84595161, lower: 0x401484a1 }, // -25
    Multiplier { upper: 0xd3c21bce, lower: 0xcceda101 }, // -24
    Multiplier { upper: 0xa968163f, lower: 0x0a57b401 }, // -23
    Multiplier { upper: 0x87867832, lower: 0x6eac9001 }, // -22
    Multiplier { upper: 0xd8d726b7, lower: 0x177a8001 }, // -21
    Multiplier { upper: 0xad78ebc5, lower: 0xac620001 }, // -20
    Multiplier { upper: 0x8ac72304, lower: 0x89e80001 }, // -19
    Multiplier { upper: 0xde0b6b3a, lower: 0x76400001 }, // -18
    Multiplier { upper: 0xb1a2bc2e, lower: 0xc5000001 }, // -17
    Multiplier { upper: 0x8e1bc9bf, lower: 0x04000001 }, // -16
    Multiplier { upper: 0xe35fa931, lower: 0xa0000001 }, // -15
    Multiplier { upper: 0xb5e620f4, lower: 0x80000001 }, // -14
    Multiplier { upper: 0x9184e72a, lower: 0x00000001 }, // -13
    Multiplier { upper: 0xe8d4a510, lower: 0x00000001 }, // -12
    Multiplier { upper: 0xba43b740, lower: 0x00000001 }, // -11
    Multiplier { upper: 0x9502f900, lower: 0x00000001 }, // -10
    Multiplier { upper: 0xee6b2800, lower: 0x00000001 }, // -9
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
    Multiplier { upper: 0xa3d70a3d, lower: 0x70a3d70b }, // 2
    Multiplier { upper: 0x83126e97, lower: 0x8d4fdf3c }, // 3
    Multiplier { upper: 0xd1b71758, lower: 0xe219652c }, // 4
    Multiplier { upper: 0xa7c5ac47, lower: 0x1b478424 }, // 5
    Multiplier { upper: 0x8637bd05, lower: 0xaf6c69b6 }, // 6
    Multiplier { upper: 0xd6bf94d5, lower: 0xe57a42bd }, // 7
    Multiplier { upper: 0xabcc7711, lower: 0x8461cefd }, // 8
    Multiplier { upper: 0x89705f41, lower: 0x36b4a598 }, // 9
    Multiplier { upper: 0xdbe6fece, lower: 0xbdedd5bf }, // 10
    Multiplier { upper: 0xafebff0b, lower: 0xcb24aaff }, // 11
    Multiplier { upper: 0x8cbccc09, lower: 0x6f5088cc }, // 12
    Multiplier { upper: 0xe12e1342, lower: 0x4bb40e14 }, // 13
    Multiplier { upper: 0xb424dc35, lower: 0x095cd810 }, // 14
    Multiplier { upper: 0x901d7cf7, lower: 0x3ab0acda }, // 15
    Multiplier { upper: 0xe69594be, lower: 0xc44de15c }, // 16
    Multiplier { upper: 0xb877aa32, lower: 0x36a4b44a }, // 17
    Multiplier { upper: 0x9392ee8e, lower: 0x921d5d08 }, // 18
    Multiplier { upper: 0xec1e4a7d, lower: 0xb69561a6 }, // 19
    Multiplier { upper: 0xbce50864, lower: 0x92111aeb }, // 20
    Multiplier { upper: 0x971da050, lower: 0x74da7bef }, // 21
    Multiplier { upper: 0xf1c90080, lower: 0xbaf72cb2 }, // 22
    Multiplier { upper: 0xc16d9a00, lower: 0x95928a28 }, // 23
    Multiplier { upper: 0x9abe14cd, lower: 0x44753b53 }, // 24
    Multiplier { upper: 0xf79687ae, lower: 0xd3eec552 }, // 25
    Multiplier { upper: 0xc6120625, lower: 0x76589ddb }, // 26
    Multiplier { upper: 0x9e74d1b7, lower: 0x91e07e49 }, // 27
    Multiplier { upper: 0xfd87b5f2, lower: 0x8300ca0e }, // 28
    Multiplier { upper: 0xcad2f7f5, lower: 0x359a3b3f }, // 29
    Multiplier { upper: 0xa2425ff7, lower: 0x5e14fc32 }, // 30
    Multiplier { upper: 0x81ceb32c, lower: 0x4b43fcf5 }, // 31
];

static MINVERSE: [MultInverse<u32>; 14] = [
    MultInverse { multiplier: 0x00000001, bound: 0xffffffff }, // 0
    MultInverse { multiplier: 0xcccccccd, bound: 0x33333333 }, // 1
    MultInverse { multiplier: 0xc28f5c29, bound: 0x0a3d70a3 }, // 2
    MultInverse { multiplier: 0x26e978d5, bound: 0x020c49ba }, // 3
    MultInverse { multiplier: 0x3afb7e91, bound: 0x0068db8b }, // 4
    MultInverse { multiplier: 0x0bcbe61d, bound: 0x0014f8b5 }, // 5
    MultInverse { multiplier: 0x68c26139, bound: 0x000431bd }, // 6
    MultInverse { multiplier: 0xae8d46a5, bound: 0x0000d6bf }, // 7
    MultInverse { multiplier: 0x22e90e21, bound: 0x00002af3 }, // 8
    MultInverse { multiplier: 0x3a2e9c6d, bound: 0x00000897 }, // 9
    MultInverse { multiplier: 0x3ed61f49, bound: 0x000001b7 }, // 10
    MultInverse { multiplier: 0x0c913975, bound: 0x00000057 }, // 11
    MultInverse { multiplier: 0xcf503eb1, bound: 0x00000011 }, // 12
    MultInverse { multiplier: 0xf6433fbd, bound: 0x00000003 }, // 13
];
