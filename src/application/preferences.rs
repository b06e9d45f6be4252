// src/application/preferences.rs
use crate::application::state_store::{keys, KeyValueStore, StateStore};
use crate::domain::Theme;
use tracing::debug;

/// Appearance flags persisted next to the notes. Last write wins.
#[derive(Debug)]
pub struct Preferences<S: KeyValueStore> {
    store: StateStore<S>,
    ambient_theme: Theme,
}

impl<S: KeyValueStore> Preferences<S> {
    /// `ambient_theme` is used until a theme has been stored explicitly.
    pub fn new(store: StateStore<S>, ambient_theme: Theme) -> Self {
        Self {
            store,
            ambient_theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.store.read(keys::THEME, self.ambient_theme)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        debug!(%theme, "Setting theme");
        self.store.write(keys::THEME, &theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme().toggled();
        self.set_theme(theme);
        theme
    }

    /// Defaults to collapsed.
    pub fn sidebar_collapsed(&self) -> bool {
        self.store.read(keys::SIDEBAR_COLLAPSED, true)
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        debug!(collapsed, "Setting sidebar state");
        self.store.write(keys::SIDEBAR_COLLAPSED, &collapsed);
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        let collapsed = !self.sidebar_collapsed();
        self.set_sidebar_collapsed(collapsed);
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_store::MemoryStore;

    #[test]
    fn given_nothing_stored_when_reading_then_uses_ambient_theme_and_collapsed_sidebar() {
        let prefs = Preferences::new(StateStore::new(MemoryStore::new()), Theme::Dark);

        assert_eq!(prefs.theme(), Theme::Dark);
        assert!(prefs.sidebar_collapsed());
    }

    #[test]
    fn given_stored_theme_when_ambient_differs_then_stored_value_wins() {
        let backend = MemoryStore::new();
        Preferences::new(StateStore::new(backend.clone()), Theme::Light).set_theme(Theme::Dark);

        let prefs = Preferences::new(StateStore::new(backend), Theme::Light);

        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn given_toggles_when_reopening_then_last_values_survive() {
        // Arrange
        let backend = MemoryStore::new();
        let mut prefs = Preferences::new(StateStore::new(backend.clone()), Theme::Light);

        // Act
        assert_eq!(prefs.toggle_theme(), Theme::Dark);
        assert!(!prefs.toggle_sidebar());

        // Assert
        let reopened = Preferences::new(StateStore::new(backend), Theme::Light);
        assert_eq!(reopened.theme(), Theme::Dark);
        assert!(!reopened.sidebar_collapsed());
    }
}
