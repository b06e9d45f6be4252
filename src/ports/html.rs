// src/ports/html.rs
use crate::domain::{Note, Theme, TrustedHtml};
use crate::util::text::format_timestamp;
use html_escape::encode_text;
use tracing::instrument;

/// Wraps a rendered note body into a standalone HTML page.
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Only the title is escaped here; `body` has already been sanitized.
    #[instrument(level = "debug", skip_all, fields(note_id = %note.id))]
    pub fn render(&self, note: &Note, body: &TrustedHtml, theme: Theme) -> String {
        let title = encode_text(note.display_title());
        let body = if body.is_empty() {
            r#"<p class="empty">No content</p>"#.to_string()
        } else {
            body.to_string()
        };
        let (background, surface, text, muted, code_bg) = match theme {
            Theme::Light => ("#f5f5f5", "#ffffff", "#1f2933", "#666666", "#f0f0f0"),
            Theme::Dark => ("#111827", "#1f2937", "#e5e7eb", "#9ca3af", "#374151"),
        };

        format!(
            r#"<!DOCTYPE html>
<html class="{theme}">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: {background};
            color: {text};
        }}
        .note {{
            background: {surface};
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        pre {{
            white-space: pre-wrap;
            word-wrap: break-word;
            background-color: {code_bg};
            padding: 1rem;
            border-radius: 4px;
            overflow-x: auto;
        }}
        code {{
            background-color: {code_bg};
            padding: 2px 4px;
            border-radius: 3px;
            font-family: monospace;
        }}
        table {{
            border-collapse: collapse;
        }}
        th, td {{
            border: 1px solid {muted};
            padding: 4px 8px;
        }}
        .empty, .note-info {{
            color: {muted};
        }}
        .note-info {{
            margin-top: 1rem;
            padding-top: 1rem;
            border-top: 1px solid {muted};
            font-size: 0.9em;
        }}
    </style>
</head>
<body>
    <div class="note">
        <h1 class="note-title">{title}</h1>
        <div class="markdown-preview">{body}</div>
        <div class="note-info">
            <div>Last modified: {modified}</div>
        </div>
    </div>
</body>
</html>"#,
            modified = format_timestamp(note.last_modified),
        )
    }
}
