//! Error model shared by the console formatter crates.

use thiserror::Error;

/// Result type used across the console formatter.
pub type LogResult<T> = Result<T, LogError>;

/// Console formatter error.
///
/// Sink failures are not represented here: they stay `std::io::Error` and reach
/// the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogError {
    /// A severity name did not match any known severity (case-sensitive).
    #[error("unknown severity: {0:?}")]
    UnknownSeverity(String),

    /// The console facade already routes through emitters.
    #[error("console facade is already patched")]
    AlreadyPatched,

    /// The process-wide subscriber could not be installed.
    #[error("failed to install global logger: {0}")]
    Install(String),
}

impl LogError {
    pub fn unknown_severity(name: impl Into<String>) -> Self {
        Self::UnknownSeverity(name.into())
    }

    pub fn install(msg: impl Into<String>) -> Self {
        Self::Install(msg.into())
    }
}
