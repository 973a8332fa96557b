//! Tag-name resolution: turning a caller-supplied context token into the
//! display string that appears in every line.

/// Placeholder tag for loggers obtained without a context name.
pub const UNTAGGED: &str = "untagged";

/// An empty tag would render as `[]`; the fixed placeholder keeps lines scannable.
#[must_use]
pub fn display_name(raw: &str) -> &str {
    if raw.is_empty() { UNTAGGED } else { raw }
}

/// Trailing-segment extraction for `std::any::type_name` output, so
/// `my_app::net::Client` tags lines as `Client`. Generic parameters are kept
/// as-is; a name with no path separator is returned unchanged.
#[must_use]
pub fn short_type_name(full: &str) -> &str {
    let base_end = full.find('<').unwrap_or(full.len());
    match full[..base_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
