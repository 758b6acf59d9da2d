//! Display formatting for feed timestamps.
//!
//! Feeds carry RFC 3339 timestamps (`2024-06-15T14:30:45Z`). The preview page
//! only shows them down to the minute, so formatting is a best-effort cut:
//! no validation, no timezone conversion.
//!
//! # Examples
//!
//! ```ignore
//! assert_eq!(format_date("2024-06-15T14:30:45Z"), "2024-06-15 14:30");
//! assert_eq!(format_date(""), "");
//! ```

/// Length of `YYYY-MM-DDTHH:MM`.
const DISPLAY_LEN: usize = 16;

/// Separator between the date and time parts of an RFC 3339 timestamp.
const DATE_TIME_SEPARATOR: char = 'T';

/// Format a raw timestamp as `YYYY-MM-DD HH:MM`.
///
/// Takes the first 16 characters and replaces the first date/time separator
/// with a space. Shorter or non-standard input passes through truncated
/// rather than failing.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    // Cut on a char boundary so non-ASCII input cannot split a code point
    let end = raw
        .char_indices()
        .nth(DISPLAY_LEN)
        .map_or(raw.len(), |(idx, _)| idx);

    raw[..end].replacen(DATE_TIME_SEPARATOR, " ", 1)
}
