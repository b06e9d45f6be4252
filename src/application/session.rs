// src/application/session.rs
use crate::application::clock::{Clock, SystemClock};
use crate::application::note_repository::NoteRepository;
use crate::application::preferences::Preferences;
use crate::application::state_store::KeyValueStore;
use crate::domain::{Note, NoteId, NotePatch, TrustedHtml};
use crate::infrastructure::markdown::{HtmlSanitizer, MarkdownParser, RenderPipeline};
use tracing::debug;

/// A key press as reported by the host, reduced to what shortcuts need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: char,
    pub ctrl: bool,
    /// Cmd on macOS, the Windows/Super key elsewhere.
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    pub fn meta(key: char) -> Self {
        Self {
            meta: true,
            ..Self::plain(key)
        }
    }
}

/// Whether the session consumed a key press. On `Handled` the host must
/// suppress its own default action for the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

/// Coordinates the repository and preferences with the transient UI state:
/// which note is active and what the list is filtered by.
#[derive(Debug)]
pub struct Session<S: KeyValueStore, C: Clock = SystemClock> {
    notes: NoteRepository<S, C>,
    preferences: Preferences<S>,
    active_id: Option<NoteId>,
    search: String,
}

impl<S: KeyValueStore, C: Clock> Session<S, C> {
    pub fn new(notes: NoteRepository<S, C>, preferences: Preferences<S>) -> Self {
        Self {
            notes,
            preferences,
            active_id: None,
            search: String::new(),
        }
    }

    pub fn notes(&self) -> &NoteRepository<S, C> {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteRepository<S, C> {
        &mut self.notes
    }

    pub fn preferences(&self) -> &Preferences<S> {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences<S> {
        &mut self.preferences
    }

    /// Create a note, make it active and make sure the list is visible.
    pub fn new_note(&mut self) -> Note {
        let note = self.notes.add();
        self.active_id = Some(note.id.clone());
        if self.preferences.sidebar_collapsed() {
            self.preferences.set_sidebar_collapsed(false);
        }
        note
    }

    /// Delete a note, dropping the selection if it pointed at it.
    pub fn delete_note(&mut self, id: &str) -> bool {
        let deleted = self.notes.delete(id);
        if self.active_id.as_deref() == Some(id) {
            debug!(note_id = id, "Clearing selection of deleted note");
            self.active_id = None;
        }
        deleted
    }

    pub fn select(&mut self, id: impl Into<NoteId>) {
        self.active_id = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.active_id = None;
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// The selected note, if it still exists.
    pub fn active_note(&self) -> Option<&Note> {
        self.active_id
            .as_deref()
            .and_then(|id| self.notes.find_by_id(id))
    }

    pub fn update_active(&mut self, patch: NotePatch) -> bool {
        match self.active_id.clone() {
            Some(id) => self.notes.update(&id, patch),
            None => false,
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn visible_notes(&self) -> Vec<&Note> {
        self.notes.list(&self.search)
    }

    /// Ctrl+N / Cmd+N creates a note. The key is matched exactly, so the
    /// shifted `N` stays with the host.
    pub fn handle_key(&mut self, press: KeyPress) -> KeyOutcome {
        let accelerator = press.ctrl || press.meta;
        if accelerator && press.key == 'n' {
            let note = self.new_note();
            debug!(note_id = %note.id, "New note via shortcut");
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Render the active note's content; empty when nothing is selected.
    pub fn preview_active<P, Z>(&self, pipeline: &RenderPipeline<P, Z>) -> TrustedHtml
    where
        P: MarkdownParser,
        Z: HtmlSanitizer,
    {
        match self.active_note() {
            Some(note) => pipeline.render(&note.content),
            None => TrustedHtml::empty(),
        }
    }
}
