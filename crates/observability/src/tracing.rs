//! Bridge from the process-wide `tracing` dispatcher to the patched console.
//!
//! Applications keep calling `tracing::info!` (or `log::info!`, via the
//! `tracing-log` bridge installed by `tracing-subscriber`). Each event is
//! rendered to a single message and handed to the console entry point of its
//! severity. `TRACE` has no console counterpart and is dropped.

use std::fmt::{self, Write as _};

use tintlog_core::{Severity, Threshold};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::{Filtered, LevelFilter};
use tracing_subscriber::layer::{Context, Layer};

use crate::facade::Console;

/// Fields added by the `log` bridge; they describe the call site, not the message.
const LOG_FIELD_PREFIX: &str = "log.";

/// `tracing_subscriber` layer writing every event through a [`Console`].
#[derive(Debug, Clone)]
pub struct ConsoleLayer {
    console: Console,
}

impl ConsoleLayer {
    pub fn new(console: Console) -> Self {
        Self { console }
    }

    /// Wraps the layer in a per-layer filter so events below `threshold` are
    /// never recorded.
    pub fn with_threshold<S>(self, threshold: Threshold) -> Filtered<Self, LevelFilter, S>
    where
        S: Subscriber,
    {
        Layer::<S>::with_filter(self, threshold.level_filter())
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let Some(severity) = Severity::from_tracing(event.metadata().level()) else {
            return;
        };

        let mut message = EventMessage::default();
        event.record(&mut message);

        // Events have no return channel: a failing sink is dropped here, the
        // same way tracing-subscriber's fmt layer drops writer errors.
        let _ = if message.is_empty() {
            self.console.log(severity, format_args!(""))
        } else {
            self.console.log(severity, format_args!("{message}"))
        };
    }
}

/// Renders `message` verbatim, then `name=value` for every other field.
#[derive(Debug, Default)]
struct EventMessage {
    message: String,
    fields: String,
}

impl Visit for EventMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let name = field.name();
        if name == "message" {
            let _ = write!(self.message, "{value:?}");
        } else if !name.starts_with(LOG_FIELD_PREFIX) {
            if !self.fields.is_empty() {
                self.fields.push(' ');
            }
            let _ = write!(self.fields, "{name}={value:?}");
        }
    }
}

impl EventMessage {
    fn is_empty(&self) -> bool {
        self.message.is_empty() && self.fields.is_empty()
    }
}

impl fmt::Display for EventMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => f.write_str(&self.message),
            (true, false) => f.write_str(&self.fields),
            (false, false) => write!(f, "{} {}", self.message, self.fields),
        }
    }
}
