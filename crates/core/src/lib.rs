//! `tintlog-core` — building blocks of the console formatter.
//!
//! This crate contains the **pure** parts (no sink, no global state): the
//! severity scale and its styles, the timestamp formatter, threshold
//! resolution, and the error model.

pub mod error;
pub mod severity;
pub mod style;
pub mod threshold;
pub mod timestamp;

pub use error::{LogError, LogResult};
pub use severity::Severity;
pub use style::LevelStyle;
pub use threshold::{DEFAULT_THRESHOLD, LOG_LEVEL_ENV, Threshold};
pub use timestamp::{Clock, LocalClock};
