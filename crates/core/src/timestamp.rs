//! Fixed-width local wall-clock timestamps (`HH:MM:SS.mmm`).

use chrono::{Local, Timelike};

/// Length of every formatted timestamp.
pub const TIMESTAMP_WIDTH: usize = 12;

/// Source of the timestamp printed in front of each message.
///
/// Called once per emitted message; implementations must not cache.
pub trait Clock: Send + Sync {
    fn timestamp(&self) -> String;
}

/// Samples `chrono::Local` on every call.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn timestamp(&self) -> String {
        format_time(&Local::now())
    }
}

/// Formats any time-of-day as `HH:MM:SS.mmm` (24-hour, zero padded, no zone).
///
/// chrono encodes a leap second as `nanosecond() >= 1_000_000_000`; the
/// millisecond field is clamped to `999` so the width never changes.
pub fn format_time<T: Timelike>(time: &T) -> String {
    let millis = (time.nanosecond() / 1_000_000).min(999);
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        time.hour(),
        time.minute(),
        time.second(),
        millis
    )
}
