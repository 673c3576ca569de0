//! Minimum severity resolved once from the environment.

use tracing::level_filters::LevelFilter;

use crate::severity::Severity;

/// Environment variable holding the threshold name.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Threshold used when the variable is unset or unrecognized.
pub const DEFAULT_THRESHOLD: Severity = Severity::Info;

/// Minimum severity whose messages are emitted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Threshold(Severity);

impl Threshold {
    pub const fn new(min: Severity) -> Self {
        Self(min)
    }

    /// Exact, case-sensitive match against the severity names; anything else
    /// (absent, empty, unknown, wrong case) falls back to [`DEFAULT_THRESHOLD`].
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Severity::from_name)
            .map(Self)
            .unwrap_or_default()
    }

    /// Reads [`LOG_LEVEL_ENV`]. A non-UTF-8 value counts as unrecognized.
    pub fn from_env() -> Self {
        Self::from_env_var(LOG_LEVEL_ENV)
    }

    pub fn from_env_var(var: &str) -> Self {
        Self::resolve(std::env::var(var).ok().as_deref())
    }

    pub const fn severity(self) -> Severity {
        self.0
    }

    pub const fn ordinal(self) -> usize {
        self.0.ordinal()
    }

    /// `true` when `severity` is at or above the threshold.
    pub const fn allows(self, severity: Severity) -> bool {
        severity.ordinal() >= self.ordinal()
    }

    /// Most verbose `tracing` level that can pass this threshold.
    pub fn level_filter(self) -> LevelFilter {
        LevelFilter::from_level(self.0.as_tracing())
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl From<Severity> for Threshold {
    fn from(value: Severity) -> Self {
        Self(value)
    }
}
