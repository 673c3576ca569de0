//! ANSI styling and the per-severity badge table.

use crate::severity::Severity;

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2m";
pub const BOLD: &str = "\x1b[1m";

pub const GRAY: &str = "\x1b[90m";
pub const CYAN: &str = "\x1b[36m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";

/// Every badge has exactly this many visible characters.
pub const BADGE_WIDTH: usize = 4;

/// Visual configuration of one severity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LevelStyle {
    /// SGR foreground color sequence.
    pub color: &'static str,
    /// Short, fixed-width label.
    pub badge: &'static str,
}

impl LevelStyle {
    /// `<color><bold><badge><reset>`
    pub fn paint_badge(&self) -> String {
        format!("{}{BOLD}{}{RESET}", self.color, self.badge)
    }
}

impl Severity {
    pub const fn style(self) -> LevelStyle {
        match self {
            Severity::Debug => LevelStyle { color: GRAY, badge: "DBUG" },
            Severity::Info => LevelStyle { color: CYAN, badge: "INFO" },
            Severity::Warn => LevelStyle { color: YELLOW, badge: "WARN" },
            Severity::Error => LevelStyle { color: RED, badge: "ERRO" },
        }
    }
}

/// `<dim><text><reset>`
pub fn dim(text: &str) -> String {
    format!("{DIM}{text}{RESET}")
}

/// Removes CSI escape sequences (`ESC [ ... final-byte`), leaving the visible text.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.peek() != Some(&'[') {
            continue;
        }
        chars.next();
        // Parameter and intermediate bytes run until a byte in 0x40..=0x7e.
        for c in chars.by_ref() {
            if ('\x40'..='\x7e').contains(&c) {
                break;
            }
        }
    }

    out
}
