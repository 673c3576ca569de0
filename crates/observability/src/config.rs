//! Startup configuration for the console formatter.

use tintlog_core::{Severity, Threshold};

/// Process-wide settings, built once by the composition root and handed to
/// [`crate::LoggerFactory`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub threshold: Threshold,
}

impl ConsoleConfig {
    pub const fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    /// Resolves the threshold from `LOG_LEVEL`. Call once at startup.
    pub fn from_env() -> Self {
        Self::new(Threshold::from_env())
    }

    pub const fn with_min_severity(min: Severity) -> Self {
        Self::new(Threshold::new(min))
    }
}
