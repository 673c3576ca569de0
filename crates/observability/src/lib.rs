//! Console formatter (shared setup).
//!
//! Every `debug`/`info`/`warn`/`error` call made through the process-wide
//! logging facade is printed as
//! `<dim HH:MM:SS.mmm> <bold colored BADGE> <message>`, and calls below the
//! `LOG_LEVEL` threshold are dropped.
//!
//! The pieces compose at a single point, [`try_init`]:
//! resolve [`ConsoleConfig`] once, [`patch`] a [`Console`] with emitters from a
//! [`LoggerFactory`], then install a [`ConsoleLayer`] as the global `tracing`
//! subscriber.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use tintlog_core::{LogError, LogResult, Severity, Threshold};

pub mod config;
pub mod emitter;
pub mod facade;
pub mod patch;

/// `tracing` integration (layer, per-layer filter).
pub mod tracing;

#[cfg(test)]
mod testing;

pub use config::ConsoleConfig;
pub use emitter::{Emitter, LoggerFactory};
pub use facade::{Console, EntryPoint, entry_point};
pub use patch::patch;
pub use self::tracing::ConsoleLayer;

/// Initialize the console formatter for the process, reading `LOG_LEVEL`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let _ = try_init();
}

/// Like [`init`], but reports whether a global logger was already installed.
pub fn try_init() -> LogResult<()> {
    try_init_with(ConsoleConfig::from_env())
}

/// Installs the patched stdout/stderr console as the global subscriber.
///
/// Must complete before other threads start logging. Records from the `log`
/// crate are routed through the same console.
pub fn try_init_with(config: ConsoleConfig) -> LogResult<()> {
    let mut console = Console::stdio();
    patch(&mut console, &LoggerFactory::new(config))?;

    tracing_subscriber::registry()
        .with(ConsoleLayer::new(console).with_threshold(config.threshold))
        .try_init()
        .map_err(|e| LogError::install(e.to_string()))
}
