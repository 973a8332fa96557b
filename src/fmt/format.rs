//! Line assembly: timestamp, level label, tag, and message in one fixed shape.

use crate::fmt::color::Color;
use crate::level::Level;
use chrono::Local;

/// Local wall-clock time with zero-padded millisecond precision.
#[must_use]
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// `None` covers raw level codes outside the fixed set; rendering never fails.
#[must_use]
pub const fn level_label(level: Option<Level>) -> &'static str {
    match level {
        Some(level) => level.label(),
        None => "UNKNOWN",
    }
}

/// `None` means the terminal default: INFORMATION and unrecognized levels are uncolored.
#[must_use]
pub const fn level_color(level: Option<Level>) -> Option<Color> {
    match level {
        Some(Level::Debug) => Some(Color::cyan()),
        Some(Level::Warning) => Some(Color::orange()),
        Some(Level::Error) => Some(Color::red()),
        Some(Level::Information) | None => None,
    }
}

/// The one line shape every sink shares; color is layered on afterwards for the console.
#[must_use]
pub fn format_line(level: Option<Level>, tag: &str, message: &str) -> String {
    format!(
        "[{}] [{}] [{}] {}",
        timestamp(),
        level_label(level),
        tag,
        message
    )
}
