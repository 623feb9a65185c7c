//! Tables generated by `teju-gen`, one module per format.
//!
//! Regenerate with `cargo run -p teju-gen -- generator/configs/<id>.json -o src/flt2dec/generated/<id>.rs`.

pub mod bfloat16;
pub mod ieee128;
pub mod ieee16;
pub mod ieee32;
pub mod ieee64;
