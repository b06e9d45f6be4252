// src/infrastructure/markdown/mod.rs
pub mod parser;
pub mod sanitizer;

pub use parser::{CmarkParser, MarkdownParser, RenderOptions};
pub use sanitizer::{AmmoniaSanitizer, HtmlSanitizer};

use crate::domain::TrustedHtml;
use tracing::instrument;

/// Markdown to safe HTML: parse, then sanitize.
///
/// The order is fixed here and both stages always run for non-empty input;
/// there is no way to get parser output out of the pipeline unsanitized.
#[derive(Debug, Clone)]
pub struct RenderPipeline<P = CmarkParser, Z = AmmoniaSanitizer> {
    parser: P,
    sanitizer: Z,
}

impl RenderPipeline {
    pub fn new(options: RenderOptions) -> Self {
        Self::with_stages(CmarkParser::new(options), AmmoniaSanitizer::new())
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl<P: MarkdownParser, Z: HtmlSanitizer> RenderPipeline<P, Z> {
    pub fn with_stages(parser: P, sanitizer: Z) -> Self {
        Self { parser, sanitizer }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn sanitizer(&self) -> &Z {
        &self.sanitizer
    }

    /// Empty input short-circuits to empty output without touching either stage.
    #[instrument(level = "debug", skip_all, fields(len = markdown.len()))]
    pub fn render(&self, markdown: &str) -> TrustedHtml {
        if markdown.is_empty() {
            return TrustedHtml::empty();
        }
        let raw = self.parser.parse(markdown);
        self.sanitizer.sanitize(&raw)
    }
}
