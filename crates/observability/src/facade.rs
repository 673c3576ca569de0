//! The console facade: four entry points, one per severity.
//!
//! A [`Console`] is the object the patcher rewrites. The process-wide instance
//! is built by [`crate::try_init`]; tests build their own with
//! [`Console::from_fn`] and inject recording entry points instead of touching
//! stdout/stderr.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use tintlog_core::Severity;

/// One logging entry point.
///
/// Takes the caller's (already composed) arguments and writes them as a line.
/// A failing sink is reported through the `io::Result`.
pub type EntryPoint = Arc<dyn Fn(fmt::Arguments<'_>) -> io::Result<()> + Send + Sync>;

/// Wraps a closure or function as an [`EntryPoint`].
pub fn entry_point<F>(f: F) -> EntryPoint
where
    F: Fn(fmt::Arguments<'_>) -> io::Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Facade holding the current entry point for every severity.
#[derive(Clone)]
pub struct Console {
    entries: [EntryPoint; 4],
    patched: bool,
}

impl Console {
    /// Builds a console whose entry point for `severity` is `make(severity)`.
    pub fn from_fn(mut make: impl FnMut(Severity) -> EntryPoint) -> Self {
        Self {
            entries: Severity::ALL.map(&mut make),
            patched: false,
        }
    }

    /// The real sink: `debug`/`info` go to stdout, `warn`/`error` to stderr.
    pub fn stdio() -> Self {
        Self::from_fn(|severity| match severity {
            Severity::Debug | Severity::Info => entry_point(stdout_line),
            Severity::Warn | Severity::Error => entry_point(stderr_line),
        })
    }

    pub fn entry(&self, severity: Severity) -> &EntryPoint {
        &self.entries[severity.ordinal()]
    }

    /// Installs `entry` for `severity`, returning the one it replaces.
    pub fn replace(&mut self, severity: Severity, entry: EntryPoint) -> EntryPoint {
        std::mem::replace(&mut self.entries[severity.ordinal()], entry)
    }

    /// Whether [`crate::patch()`] has already rewritten this console.
    pub fn is_patched(&self) -> bool {
        self.patched
    }

    pub(crate) fn mark_patched(&mut self) {
        self.patched = true;
    }

    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) -> io::Result<()> {
        (self.entry(severity))(args)
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(Severity::Debug, args)
    }

    pub fn info(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(Severity::Info, args)
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(Severity::Warn, args)
    }

    pub fn error(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(Severity::Error, args)
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("patched", &self.patched)
            .finish_non_exhaustive()
    }
}

fn stdout_line(args: fmt::Arguments<'_>) -> io::Result<()> {
    writeln!(io::stdout().lock(), "{args}")
}

fn stderr_line(args: fmt::Arguments<'_>) -> io::Result<()> {
    writeln!(io::stderr().lock(), "{args}")
}
