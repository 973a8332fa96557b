//! Process-wide shared state: sink toggles, the open log file, and the
//! per-tag logger registry, all behind one mutex so a logical line is never
//! interleaved with another and first-access races on a tag resolve to
//! exactly one instance.

mod file;

pub use file::{ConfigFile, ConsoleSection, FileSection, GeneralSection};

use crate::error::Error;
use crate::fmt;
use crate::logger::Logger;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Default stdout/stderr, replaceable so tests and embedding hosts can
/// capture console output without redirecting process streams.
pub(crate) struct ConsoleStreams {
    pub(crate) out: Box<dyn Write + Send>,
    pub(crate) err: Box<dyn Write + Send>,
}

impl Default for ConsoleStreams {
    fn default() -> Self {
        Self {
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
        }
    }
}

/// Everything a logging decision reads, guarded by the one lock.
pub(crate) struct State {
    pub(crate) console_enabled: bool,
    pub(crate) file_enabled: bool,
    pub(crate) log_file: Option<File>,
    pub(crate) console: ConsoleStreams,
    loggers: HashMap<String, Arc<Logger>>,
}

/// The debug flag lives outside the mutex as an atomic so the DEBUG early
/// exit in `Logger::log` never has to take the lock.
pub(crate) struct Shared {
    pub(crate) debug_enabled: AtomicBool,
    pub(crate) state: Mutex<State>,
}

/// Handle to the one shared configuration. Cloning the handle is cheap and
/// every clone sees the same state; flag changes take effect immediately for
/// every logger of every tag.
#[derive(Clone)]
pub struct SharedConfig {
    shared: Arc<Shared>,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedConfig {
    /// Defaults: debug on, console on, file off, no file open.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                debug_enabled: AtomicBool::new(true),
                state: Mutex::new(State {
                    console_enabled: true,
                    file_enabled: false,
                    log_file: None,
                    console: ConsoleStreams::default(),
                    loggers: HashMap::new(),
                }),
            }),
        }
    }

    /// A poisoned lock only means another thread panicked mid-write; the
    /// state itself stays usable, and logging must never fail.
    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Gates DEBUG-level messages globally, for every tag at once.
    pub fn set_debug_enabled(&self, enabled: bool) {
        self.shared.debug_enabled.store(enabled, Ordering::Relaxed);
    }

    /// Toggles the console sink (stdout, with ERROR on stderr).
    pub fn set_console_enabled(&self, enabled: bool) {
        self.lock_state().console_enabled = enabled;
    }

    /// Toggles the file sink. Enabling it without a path set is a valid but
    /// degraded state; each affected call reports a diagnostic on stderr.
    pub fn set_file_enabled(&self, enabled: bool) {
        self.lock_state().file_enabled = enabled;
    }

    /// Opens `path` in append mode (creating it if absent) after tilde
    /// expansion. An empty path closes and releases the current file.
    ///
    /// # Errors
    /// Returns `Error::Io` when the file cannot be opened; the handle is left
    /// unset, so the logging path treats the failure the same as "path not
    /// set" and keeps emitting its diagnostic.
    pub fn set_file_path(&self, path: &str) -> Result<(), Error> {
        let mut state = self.lock_state();
        if path.is_empty() {
            state.log_file = None;
            return Ok(());
        }

        let expanded = shellexpand::tilde(path);
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(expanded.as_ref())
        {
            Ok(file) => {
                state.log_file = Some(file);
                Ok(())
            }
            Err(e) => {
                state.log_file = None;
                Err(e.into())
            }
        }
    }

    /// Tests and diagnostics need to see whether the DEBUG gate is open.
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.shared.debug_enabled.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn console_enabled(&self) -> bool {
        self.lock_state().console_enabled
    }

    #[must_use]
    pub fn file_enabled(&self) -> bool {
        self.lock_state().file_enabled
    }

    /// Whether a log file is currently open. False both when no path was ever
    /// set and when the last open attempt failed; the two states are not
    /// distinguishable at write time.
    #[must_use]
    pub fn file_open(&self) -> bool {
        self.lock_state().log_file.is_some()
    }

    /// The singleton logger for `tag`, created under the lock on first call
    /// and pinned for the life of this configuration. An empty tag resolves
    /// to the fixed `untagged` placeholder.
    #[must_use]
    pub fn logger(&self, tag: &str) -> Arc<Logger> {
        let display = fmt::display_name(tag).to_string();
        let mut state = self.lock_state();
        let logger = state
            .loggers
            .entry(display)
            .or_insert_with_key(|name| {
                Arc::new(Logger::new(name.clone(), Arc::downgrade(&self.shared)))
            });
        Arc::clone(logger)
    }

    /// Tags lines with the trailing segment of `T`'s type name, so
    /// `my_app::net::Client` logs as `Client`. Identity-equal to
    /// `logger("Client")`.
    #[must_use]
    pub fn logger_for_type<T: ?Sized>(&self) -> Arc<Logger> {
        self.logger(fmt::short_type_name(std::any::type_name::<T>()))
    }

    /// The `untagged` singleton, for callers with no meaningful context name.
    #[must_use]
    pub fn logger_untagged(&self) -> Arc<Logger> {
        self.logger("")
    }

    /// Tests verify the registry hands out one instance per distinct tag.
    #[must_use]
    pub fn logger_count(&self) -> usize {
        self.lock_state().loggers.len()
    }

    /// Replaces the console streams. Stream capture in tests goes through
    /// here instead of redirecting the process-wide stdout/stderr.
    pub fn set_console_writers(
        &self,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) {
        self.lock_state().console = ConsoleStreams { out, err };
    }
}
