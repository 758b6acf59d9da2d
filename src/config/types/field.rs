//! Config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a field in `feed-preview.toml`, used to point diagnostics
/// at the offending key.
///
/// # Example
///
/// ```ignore
/// diag.error(FieldPath::new("assets.stylesheet"), "must not be empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_as_str() {
        const PATH: FieldPath = FieldPath::new("feed.namespace");
        assert_eq!(PATH.as_str(), "feed.namespace");
        assert!(PATH.to_string().contains("`feed.namespace`"));
    }
}
