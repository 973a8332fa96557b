//! The per-tag logger and its dispatch pipeline: gate, lock, format, write.

use crate::config::Shared;
use crate::fmt::{self, Color};
use crate::level::Level;
use std::io::Write;
use std::sync::atomic::Ordering;
use std::sync::{PoisonError, Weak};

/// Emitted on stderr when the file sink is enabled with no open file. Covers
/// both "path never set" and "open failed"; the write path cannot tell them
/// apart.
const FILE_NOT_SET: &str = "[Logger Error] Log file path is not set.";

/// One instance per distinct tag, owned by the registry inside
/// [`SharedConfig`](crate::SharedConfig) and handed to callers as an `Arc`.
/// Holds no mutable state of its own: every behavior-affecting flag lives in
/// the shared configuration, so configuration changes reach all tags at once.
pub struct Logger {
    tag: String,
    shared: Weak<Shared>,
}

impl Logger {
    pub(crate) const fn new(tag: String, shared: Weak<Shared>) -> Self {
        Self { tag, shared }
    }

    /// The display tag this instance was created with, fixed for its lifetime.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Formats and writes one line to every enabled sink. Never fails: sink
    /// I/O errors drop the line for that sink only, and a logger that has
    /// outlived its configuration is a no-op.
    pub fn log(&self, level: Level, message: &str) {
        self.dispatch(Some(level), message);
    }

    /// Raw-code entry point for callers that receive levels as integers.
    /// Codes outside the fixed set render as `UNKNOWN` in the default color
    /// rather than being dropped.
    pub fn log_code(&self, code: u8, message: &str) {
        self.dispatch(Level::from_code(code), message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Information, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn dispatch(&self, level: Option<Level>, message: &str) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };

        // Cheap early exit: only the atomic flag is read, no lock taken.
        if level == Some(Level::Debug) && !shared.debug_enabled.load(Ordering::Relaxed) {
            return;
        }

        // Held for the whole format-and-write sequence so lines from
        // concurrent callers come out whole and in acquisition order.
        let mut state = shared.state.lock().unwrap_or_else(PoisonError::into_inner);

        let line = fmt::format_line(level, &self.tag, message);

        if state.console_enabled {
            let colored = fmt::level_color(level)
                .map_or_else(|| line.clone(), |color| fmt::colorize(&line, color));
            let stream = if level == Some(Level::Error) {
                &mut state.console.err
            } else {
                &mut state.console.out
            };
            let _ = writeln!(stream, "{colored}");
        }

        if state.file_enabled {
            if let Some(file) = state.log_file.as_mut() {
                let _ = writeln!(file, "{line}");
            } else {
                let diagnostic = fmt::colorize(FILE_NOT_SET, Color::red());
                let _ = writeln!(state.console.err, "{diagnostic}");
            }
        }
    }
}
