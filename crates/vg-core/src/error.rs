//! Engine-wide error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `OutputError`) and
//! wrap `VgError` where they need to.  Route computation itself never fails:
//! terminal conditions are reported through a stop reason, not an error.

use thiserror::Error;

/// The base error type for `vg-core`.
#[derive(Debug, Error, PartialEq)]
pub enum VgError {
    #[error("unknown health tier {0:?}: expected best, good, poor, dying or dead")]
    UnknownHealth(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `vg-core`.
pub type VgResult<T> = Result<T, VgError>;
