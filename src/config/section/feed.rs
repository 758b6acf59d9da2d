//! `[feed]` section.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::feed::ATOM_NS;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Namespace URI feed elements must carry to be recognized.
    pub namespace: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            namespace: ATOM_NS.into(),
        }
    }
}

impl FeedConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        const FIELD: FieldPath = FieldPath::new("feed.namespace");

        if self.namespace.trim().is_empty() {
            diag.error_with_hint(FIELD, "must not be empty", format!("the Atom namespace is `{ATOM_NS}`"));
            return;
        }

        if let Err(err) = url::Url::parse(&self.namespace) {
            diag.error_with_hint(
                FIELD,
                format!("`{}` is not an absolute URI: {err}", self.namespace),
                format!("the Atom namespace is `{ATOM_NS}`"),
            );
        }
    }
}
