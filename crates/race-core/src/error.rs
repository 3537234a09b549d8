//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `RaceError` as one
//! variant via `From`.  The simulator's lifecycle operations never return
//! errors; these only surface from configuration and parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RaceError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `race-core`.
pub type CoreResult<T> = Result<T, RaceError>;
