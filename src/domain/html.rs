// src/domain/html.rs
use std::fmt;

/// HTML that has been through the sanitizer.
///
/// Only the sanitize stage of the rendering pipeline can construct a value,
/// so anything holding a `TrustedHtml` may embed it without re-escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub(crate) fn from_sanitized(html: String) -> Self {
        Self(html)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrustedHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
