//! Rendering concerns split by kind: ANSI colors, tag-name resolution, and
//! the fixed line format.

mod color;
mod format;
mod tag;

pub use color::{Color, colorize};
pub use format::{format_line, level_color, level_label, timestamp};
pub use tag::{UNTAGGED, display_name, short_type_name};
