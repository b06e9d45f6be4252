use mdnotes::domain::{Note, Theme};
use mdnotes::infrastructure::markdown::{RenderOptions, RenderPipeline};
use mdnotes::ports::HtmlPresenter;

fn note(title: &str, content: &str) -> Note {
    Note {
        id: "abc".to_string(),
        title: title.to_string(),
        content: content.to_string(),
        last_modified: 1_700_000_000_000,
    }
}

fn page(note: &Note, theme: Theme) -> String {
    let body = RenderPipeline::new(RenderOptions::default()).render(&note.content);
    HtmlPresenter::new().render(note, &body, theme)
}

#[test]
fn given_markdown_note_when_rendering_page_then_contains_sanitized_body() {
    // Arrange
    let note = note("Plan", "## Steps\n\n1. one\n2. two<script>alert(1)</script>");

    // Act
    let html = page(&note, Theme::Light);

    // Assert
    assert!(html.contains("<h2>Steps</h2>"));
    assert!(html.contains("<ol>"));
    assert!(!html.contains("alert(1)"));
}

#[test]
fn given_note_when_rendering_page_then_shows_formatted_timestamp() {
    let html = page(&note("Plan", "x"), Theme::Light);

    assert!(html.contains("Last modified: 2023-11-14 22:13 UTC"));
}

#[test]
fn given_dark_theme_when_rendering_page_then_marks_root_dark() {
    let html = page(&note("Plan", "x"), Theme::Dark);

    assert!(html.contains(r#"<html class="dark">"#));
}

#[test]
fn given_empty_content_when_rendering_page_then_shows_placeholder() {
    let html = page(&note("Plan", ""), Theme::Light);

    assert!(html.contains(r#"<p class="empty">No content</p>"#));
}
