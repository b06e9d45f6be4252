// src/domain/note.rs
use crate::constants::{DEFAULT_NOTE_TITLE, SNIPPET_LENGTH};
use crate::util::text::{single_line, snippet};
use serde::{Deserialize, Serialize};

pub type NoteId = String;

/// A single Markdown note.
///
/// Serialized with camelCase field names so the persisted `notes-data` blob
/// reads `lastModified`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Epoch milliseconds of the last mutation.
    pub last_modified: i64,
}

impl Note {
    pub fn new(id: impl Into<NoteId>, now_millis: i64) -> Self {
        Self {
            id: id.into(),
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: String::new(),
            last_modified: now_millis,
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_NOTE_TITLE
        } else {
            &self.title
        }
    }

    /// First characters of the content on one line, with an ellipsis when
    /// truncated.
    pub fn snippet(&self) -> String {
        snippet(&single_line(&self.content), SNIPPET_LENGTH)
    }

    /// Case-insensitive substring match against title or content.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.content.to_lowercase().contains(&term)
    }

    /// Replace the fields present in `patch` and move `last_modified` forward.
    ///
    /// A clock that went backwards never lowers the timestamp.
    pub fn apply(&mut self, patch: NotePatch, now_millis: i64) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.last_modified = self.last_modified.max(now_millis);
    }
}

/// Whole-field replacement for a note. Has no `id` field, so identity cannot
/// change through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_note_when_created_then_uses_default_title_and_empty_content() {
        let note = Note::new("abc", 1_000);

        assert_eq!(note.id, "abc");
        assert_eq!(note.title, "Untitled Note");
        assert_eq!(note.content, "");
        assert_eq!(note.last_modified, 1_000);
    }

    #[test]
    fn given_empty_title_when_displaying_then_falls_back_to_placeholder() {
        let mut note = Note::new("abc", 0);
        note.title.clear();

        assert_eq!(note.display_title(), "Untitled Note");
    }

    #[test]
    fn given_title_patch_when_applying_then_only_title_changes() {
        // Arrange
        let mut note = Note::new("abc", 1_000);
        note.content = "body".to_string();

        // Act
        note.apply(NotePatch::title("Groceries"), 2_000);

        // Assert
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "body");
        assert_eq!(note.last_modified, 2_000);
    }

    #[test]
    fn given_clock_regression_when_applying_then_timestamp_does_not_decrease() {
        let mut note = Note::new("abc", 5_000);

        note.apply(NotePatch::content("x"), 4_000);

        assert_eq!(note.content, "x");
        assert_eq!(note.last_modified, 5_000);
    }

    #[test]
    fn given_mixed_case_term_when_matching_then_ignores_case() {
        let mut note = Note::new("abc", 0);
        note.title = "Work".to_string();
        note.content = "deploy MILK-123 ticket".to_string();

        assert!(note.matches("milk"));
        assert!(note.matches("WORK"));
        assert!(!note.matches("bread"));
    }

    #[test]
    fn given_long_content_when_building_snippet_then_truncates_with_ellipsis() {
        let mut note = Note::new("abc", 0);
        note.content = "a".repeat(50);

        assert_eq!(note.snippet(), format!("{}...", "a".repeat(40)));
    }
}
