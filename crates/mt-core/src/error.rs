//! Framework error type.
//!
//! Sub-crates define their own error enums and convert `MtError` into them
//! via `From` impls.

use thiserror::Error;

/// The top-level error type for `mt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum MtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `mt-*` crates.
pub type MtResult<T> = Result<T, MtError>;
