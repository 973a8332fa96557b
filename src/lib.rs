#![forbid(unsafe_code)]

//! `taglog` - Tag-scoped leveled logging with console and file sinks.
//!
//! A minimal process-wide logging facility:
//! - One shared configuration object gates everything: a global debug flag,
//!   console and file sink toggles, and one append-mode log file
//! - One logger singleton per tag, created lazily and pinned in a registry
//! - Fixed line shape `[timestamp] [LEVEL] [tag] message` with millisecond
//!   precision and per-level ANSI colors on the console
//! - ERROR lines go to stderr, everything else to stdout
//! - Logging calls never fail; sink problems surface as stderr diagnostics
//!
//! # Example
//!
//! ```
//! use taglog::SharedConfig;
//!
//! let config = SharedConfig::new();
//! let logger = config.logger("MAIN");
//!
//! logger.info("Application started");
//! logger.warning("Cache directory missing, using defaults");
//!
//! config.set_debug_enabled(false);
//! logger.debug("Suppressed for every tag once debug is off");
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `taglog` one-shot command-line logger

pub mod config;
pub mod error;
pub mod fmt;
pub mod level;
pub mod logger;

// Re-exports for convenience
pub use config::{ConfigFile, ConsoleSection, FileSection, GeneralSection, SharedConfig};
pub use error::Error;
pub use fmt::{Color, colorize};
pub use level::{Level, ParseLevelError};
pub use logger::Logger;
