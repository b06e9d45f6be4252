// src/application/note_repository.rs
use crate::application::clock::{Clock, SystemClock};
use crate::application::state_store::{keys, KeyValueStore, StateStore};
use crate::domain::{Note, NotePatch};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Owns the note collection and mirrors it to the `notes-data` store entry.
///
/// Every mutation rewrites the whole collection. The in-memory state is the
/// source of truth for reads; a failed write only means the store lags
/// behind until the next successful one.
#[derive(Debug)]
pub struct NoteRepository<S: KeyValueStore, C: Clock = SystemClock> {
    store: StateStore<S>,
    clock: C,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteRepository<S, SystemClock> {
    pub fn open(store: StateStore<S>) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> NoteRepository<S, C> {
    pub fn with_clock(store: StateStore<S>, clock: C) -> Self {
        let loaded = store.read(keys::NOTES, Vec::new());
        let notes = dedupe_ids(loaded);
        info!(count = notes.len(), "Loaded notes");
        Self {
            store,
            clock,
            notes,
        }
    }

    /// Create a note with a fresh id, put it first and persist.
    #[instrument(level = "debug", skip(self))]
    pub fn add(&mut self) -> Note {
        let mut id = Uuid::new_v4().to_string();
        while self.find_by_id(&id).is_some() {
            id = Uuid::new_v4().to_string();
        }

        let note = Note::new(id, self.clock.now_millis());
        self.notes.insert(0, note.clone());
        self.persist();

        info!(note_id = %note.id, "Created note");
        note
    }

    /// Remove the note with `id`. Returns `false` when there was nothing to
    /// remove; the store is left untouched in that case.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            debug!(note_id = id, "Note not found for deletion");
            return false;
        }

        self.persist();
        info!(note_id = id, "Deleted note");
        true
    }

    /// Apply `patch` to the note with `id` and refresh its timestamp.
    /// Returns `false` for an unknown id.
    #[instrument(level = "debug", skip(self, patch))]
    pub fn update(&mut self, id: &str, patch: NotePatch) -> bool {
        let now = self.clock.now_millis();
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            debug!(note_id = id, "Note not found for update");
            return false;
        };

        if now < note.last_modified {
            warn!(
                note_id = id,
                now,
                last_modified = note.last_modified,
                "Clock went backwards, keeping previous timestamp"
            );
        }
        note.apply(patch, now);
        debug!(note_id = id, last_modified = note.last_modified, "Updated note");

        self.persist();
        true
    }

    /// All notes, most recently modified first, optionally narrowed to those
    /// whose title or content contains `filter` (case-insensitive).
    ///
    /// Ties keep collection order. A blank filter returns everything.
    pub fn list(&self, filter: &str) -> Vec<&Note> {
        let mut sorted: Vec<&Note> = self.notes.iter().collect();
        sorted.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

        if filter.trim().is_empty() {
            return sorted;
        }
        sorted.into_iter().filter(|n| n.matches(filter)).collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Notes in collection order (newest insertion first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn persist(&mut self) {
        self.store.write(keys::NOTES, &self.notes);
    }
}

/// Keep the first note for every id; a hand-edited or corrupted blob must not
/// break id uniqueness.
fn dedupe_ids(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    notes
        .into_iter()
        .filter(|n| {
            let fresh = seen.insert(n.id.clone());
            if !fresh {
                warn!(note_id = %n.id, "Dropping note with duplicate id");
            }
            fresh
        })
        .collect()
}
