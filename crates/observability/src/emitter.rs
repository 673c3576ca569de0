//! Logger factory: turns a severity and its original entry point into an
//! [`Emitter`].
//!
//! The threshold decision is taken once, when the emitter is built. A
//! below-threshold emitter is [`Emitter::Discard`] and never formats, reads the
//! clock or touches the sink.

use std::fmt;
use std::io;
use std::sync::Arc;

use tintlog_core::style::{self, LevelStyle};
use tintlog_core::{Clock, LocalClock, Severity, Threshold};

use crate::config::ConsoleConfig;
use crate::facade::{EntryPoint, entry_point};

/// Builds emitters for one console configuration.
#[derive(Clone)]
pub struct LoggerFactory {
    threshold: Threshold,
    clock: Arc<dyn Clock>,
}

impl LoggerFactory {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            threshold: config.threshold,
            clock: Arc::new(LocalClock),
        }
    }

    /// Replaces the wall clock (tests pin the timestamp with this).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn build_emitter(&self, severity: Severity, original: EntryPoint) -> Emitter {
        if !self.threshold.allows(severity) {
            return Emitter::Discard;
        }

        Emitter::Forward {
            style: severity.style(),
            original,
            clock: Arc::clone(&self.clock),
        }
    }
}

impl fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerFactory")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// Patched entry point for one severity.
#[derive(Clone)]
pub enum Emitter {
    /// Below threshold: accepts anything, does nothing.
    Discard,
    /// Prefixes timestamp and badge, then calls the original entry point.
    Forward {
        style: LevelStyle,
        original: EntryPoint,
        clock: Arc<dyn Clock>,
    },
}

impl Emitter {
    pub fn is_discard(&self) -> bool {
        matches!(self, Emitter::Discard)
    }

    /// Sink errors from the original entry point are returned unchanged.
    pub fn emit(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let Emitter::Forward {
            style,
            original,
            clock,
        } = self
        else {
            return Ok(());
        };

        let prefix = compose_prefix(style, &clock.timestamp());
        if args.as_str() == Some("") {
            original(format_args!("{prefix}"))
        } else {
            original(format_args!("{prefix} {args}"))
        }
    }

    pub fn into_entry_point(self) -> EntryPoint {
        entry_point(move |args| self.emit(args))
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emitter::Discard => f.write_str("Discard"),
            Emitter::Forward { style, .. } => f
                .debug_struct("Forward")
                .field("badge", &style.badge)
                .finish_non_exhaustive(),
        }
    }
}

/// `<dim>timestamp<reset> <color><bold>BADGE<reset>`
pub fn prefix(severity: Severity, timestamp: &str) -> String {
    compose_prefix(&severity.style(), timestamp)
}

fn compose_prefix(style: &LevelStyle, timestamp: &str) -> String {
    format!("{} {}", style::dim(timestamp), style.paint_badge())
}
