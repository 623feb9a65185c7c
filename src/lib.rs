/* Rust-teju -- Shortest binary-to-decimal conversion of floating-point
 * numbers, driven by generated fixed-point tables.
 * Written by Kang Seonghoon <http://mearie.org/>.
 *
 * The author disclaims copyright to this source code.  In place of
 * a legal notice, here is a blessing:
 *
 *    May you do good and not evil.
 *    May you find forgiveness for yourself and forgive others.
 *    May you share freely, never taking more than you give.
 *
 * See LICENSE.txt for the exact and precise legal mumbo-jumbo.
 * This legal notice and blessing is shamelessly adopted from
 * the SQLite library.
 */

#![no_std]

// tests and the `testing` feature only
#[cfg(any(test, feature = "testing"))]
#[macro_use]
extern crate std;

pub mod num;
pub mod flt2dec;

pub use crate::flt2dec::format::{Bfloat16, Format, Ieee128, Ieee16, Ieee32, Ieee64};
pub use crate::flt2dec::strategy::teju::{convert, convert_with};
pub use crate::flt2dec::{BinaryFloat, DecimalFloat};
