//! Recording fakes shared by the unit tests.

use std::sync::{Arc, Mutex};

use tintlog_core::{Clock, Severity};

use crate::facade::{Console, entry_point};

/// Captures every line written through a console built by [`Recorder::console`].
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    lines: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl Recorder {
    pub fn console(&self) -> Console {
        Console::from_fn(|severity| {
            let lines = Arc::clone(&self.lines);
            entry_point(move |args| {
                lines.lock().unwrap().push((severity, args.to_string()));
                Ok(())
            })
        })
    }

    pub fn lines(&self) -> Vec<(Severity, String)> {
        self.lines.lock().unwrap().clone()
    }
}

/// Always reports the same timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub &'static str);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.to_string()
    }
}
