//! Ordered severity scale.
//!
//! The set and its order are fixed: `debug < info < warn < error`. Comparisons
//! go through the ordinal (declaration order), so the derived `Ord` is the
//! severity order.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Severity of a console call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Every severity, in increasing order. `ALL[s.ordinal()] == s`.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Position in [`Severity::ALL`].
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Canonical lowercase name, as read from the environment.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Maps a `tracing` level onto the scale. `TRACE` has no counterpart.
    pub fn from_tracing(level: &tracing::Level) -> Option<Self> {
        if *level == tracing::Level::ERROR {
            Some(Severity::Error)
        } else if *level == tracing::Level::WARN {
            Some(Severity::Warn)
        } else if *level == tracing::Level::INFO {
            Some(Severity::Info)
        } else if *level == tracing::Level::DEBUG {
            Some(Severity::Debug)
        } else {
            None
        }
    }

    pub const fn as_tracing(self) -> tracing::Level {
        match self {
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LogError::unknown_severity(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (index, severity) in Severity::ALL.into_iter().enumerate() {
            assert_eq!(severity.ordinal(), index);
        }
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn name_lookup_is_case_sensitive() {
        assert_eq!(Severity::from_name("warn"), Some(Severity::Warn));
        assert_eq!(Severity::from_name("WARN"), None);
        assert_eq!(Severity::from_name("Info"), None);
        assert_eq!(Severity::from_name(" info"), None);
        assert_eq!(Severity::from_name(""), None);
    }

    #[test]
    fn from_str_reports_unknown_names() {
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));

        let err = "verbose".parse::<Severity>().unwrap_err();
        assert_eq!(err, LogError::UnknownSeverity("verbose".to_string()));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn tracing_levels_map_except_trace() {
        assert_eq!(Severity::from_tracing(&tracing::Level::TRACE), None);
        for severity in Severity::ALL {
            assert_eq!(Severity::from_tracing(&severity.as_tracing()), Some(severity));
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Severity::Warn).unwrap();
        assert_eq!(json, "\"warn\"");

        let parsed: Severity = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(parsed, Severity::Debug);

        assert!(serde_json::from_str::<Severity>("\"DEBUG\"").is_err());
    }
}
