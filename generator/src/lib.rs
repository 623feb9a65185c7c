/*!
Offline generator of the tables driving `teju`.

For every decimal exponent `f` of a format, the conversion scales numerators
`n` by `2^(e0 - 1) / 10^f` with a single multiply-and-shift. `generator`
finds the smallest multiplier exact for every `n` the conversion can form,
using the maximisation in `maximum`, and brings all of them to a common
shift. It also computes the modular inverses of the powers of 5 used to test
divisibility. `emit` writes the result as a Rust module.
*/

pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod maximum;

pub use crate::config::FormatConfig;
pub use crate::error::Error;
pub use crate::generator::{generate, GeneratedTable};
