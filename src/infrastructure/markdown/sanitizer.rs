// src/infrastructure/markdown/sanitizer.rs
use crate::constants::HTML_ID_PREFIX;
use crate::domain::TrustedHtml;
use std::collections::HashSet;
use std::fmt;

/// Second pipeline stage: untrusted HTML to [`TrustedHtml`].
///
/// Implementations must strip rather than reject; sanitizing never fails.
pub trait HtmlSanitizer {
    fn sanitize(&self, html: &str) -> TrustedHtml;
}

/// Allow-list sanitizer backed by ammonia.
///
/// Uses ammonia's defaults (no scripts, no event handler attributes, no
/// `javascript:` URLs) plus what rendered Markdown needs: task list
/// checkboxes, language classes on code blocks, table column alignment and
/// footnote anchors. Every kept `id` gets [`HTML_ID_PREFIX`].
pub struct AmmoniaSanitizer {
    policy: ammonia::Builder<'static>,
}

impl AmmoniaSanitizer {
    pub fn new() -> Self {
        let mut policy = ammonia::Builder::default();
        policy
            .add_tags(&["input"])
            .add_tag_attributes("input", &["type", "checked", "disabled"])
            .add_tag_attributes("code", &["class"])
            .add_tag_attributes("th", &["style"])
            .add_tag_attributes("td", &["style"])
            .add_tag_attributes("div", &["id"])
            .filter_style_properties(HashSet::from(["text-align"]))
            .id_prefix(Some(HTML_ID_PREFIX));
        Self { policy }
    }
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AmmoniaSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AmmoniaSanitizer").finish_non_exhaustive()
    }
}

impl HtmlSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> TrustedHtml {
        TrustedHtml::from_sanitized(self.policy.clean(html).to_string())
    }
}
