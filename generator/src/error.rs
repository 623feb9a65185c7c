use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that stops a table from being generated.
///
/// None of these is worth retrying: the search is deterministic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Constraint violation: {0}")]
    ConfigViolation(&'static str),

    /// Valid in general, but not something the `teju` runtime implements.
    #[error("Unsupported configuration: {0}")]
    Unsupported(&'static str),

    #[error("Cannot find fast EAF for decimal exponent {f}.")]
    SearchFailure { f: i32 },

    #[error("Unable to use same shift for decimal exponent {f}.")]
    SameShift { f: i32 },

    #[error("Multiplier for decimal exponent {f} is out of range.")]
    OutOfRange { f: i32 },

    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
