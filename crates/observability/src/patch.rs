//! Facade patcher.

use tintlog_core::{LogError, LogResult, Severity};

use crate::emitter::LoggerFactory;
use crate::facade::{Console, EntryPoint};

/// Rewrites every entry point of `console` to go through an emitter built by
/// `factory`.
///
/// The current entry points are captured first and only survive inside the
/// emitters, so formatted output still reaches the original sink. A console
/// that is already patched is left untouched and `LogError::AlreadyPatched` is
/// returned; wrapping twice would print the prefix twice.
pub fn patch(console: &mut Console, factory: &LoggerFactory) -> LogResult<()> {
    if console.is_patched() {
        return Err(LogError::AlreadyPatched);
    }

    let originals: [EntryPoint; 4] = Severity::ALL.map(|s| console.entry(s).clone());

    for (severity, original) in Severity::ALL.into_iter().zip(originals) {
        let emitter = factory.build_emitter(severity, original);
        tracing::trace!(%severity, discard = emitter.is_discard(), "patching console entry point");
        console.replace(severity, emitter.into_entry_point());
    }

    console.mark_patched();
    Ok(())
}
