//! Error types

use thiserror::Error;

/// Recoverable calculation failures. Each one puts the calculator into its
/// error state until cleared.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative number")]
    NegativeSquareRoot,
    #[error("result out of range")]
    Overflow,
}

/// Failures while loading or saving preferences.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no config directory available")]
    NoConfigDir,
}
