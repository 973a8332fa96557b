//! Tests for line formatting, colors, and tag-name resolution.

use regex::Regex;
use taglog::fmt::{
    self, Color, colorize, display_name, format_line, level_color, level_label, short_type_name,
};
use taglog::Level;

#[test]
fn short_type_name_takes_trailing_segment() {
    assert_eq!(short_type_name("my_app::net::Client"), "Client");
    assert_eq!(short_type_name("Client"), "Client");
}

#[test]
fn short_type_name_keeps_generic_params() {
    assert_eq!(short_type_name("alloc::vec::Vec<u8>"), "Vec<u8>");
}

#[test]
fn display_name_placeholder_for_empty() {
    assert_eq!(display_name(""), "untagged");
    assert_eq!(display_name("MAIN"), "MAIN");
}

#[test]
fn level_label_renders_unknown_for_unmapped() {
    assert_eq!(level_label(Some(Level::Warning)), "WARNING");
    assert_eq!(level_label(None), "UNKNOWN");
}

#[test]
fn level_colors() {
    assert_eq!(level_color(Some(Level::Debug)), Some(Color::cyan()));
    assert_eq!(level_color(Some(Level::Warning)), Some(Color::orange()));
    assert_eq!(level_color(Some(Level::Error)), Some(Color::red()));
    assert_eq!(level_color(Some(Level::Information)), None);
    assert_eq!(level_color(None), None);
}

#[test]
fn colorize_wraps_with_escape_and_reset() {
    let text = colorize("hello", Color::cyan());
    assert!(text.starts_with("\x1b[38;2;139;233;253m"));
    assert!(text.ends_with("\x1b[0m"));
    assert!(text.contains("hello"));
}

#[test]
fn timestamp_has_millisecond_precision() {
    let re = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}$").unwrap();
    assert!(re.is_match(&fmt::timestamp()));
}

#[test]
fn format_line_shape() {
    let re = Regex::new(
        r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}\] \[INFORMATION\] \[MAIN\] hello$",
    )
    .unwrap();
    assert!(re.is_match(&format_line(Some(Level::Information), "MAIN", "hello")));
}

#[test]
fn format_line_unknown_level() {
    let line = format_line(None, "MAIN", "hello");
    assert!(line.contains("[UNKNOWN]"));
}
