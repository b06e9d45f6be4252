// src/application/state_store.rs
use crate::domain::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, instrument, warn};

/// Raw persistence backend: a durable mapping from key to JSON text.
pub trait KeyValueStore {
    /// Stored text for `key`, or `None` when nothing has been written yet.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the text stored under `key`.
    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// A store key bound to the type of value kept under it.
pub struct StoreKey<T> {
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> StoreKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _value: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for StoreKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StoreKey<T> {}

impl<T> fmt::Debug for StoreKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StoreKey").field(&self.name).finish()
    }
}

/// Every entry the application persists.
pub mod keys {
    use super::StoreKey;
    use crate::domain::{Note, Theme};

    pub const NOTES: StoreKey<Vec<Note>> = StoreKey::new("notes-data");
    pub const THEME: StoreKey<Theme> = StoreKey::new("theme");
    pub const SIDEBAR_COLLAPSED: StoreKey<bool> = StoreKey::new("sidebar-collapsed");
}

/// Typed JSON access on top of a [`KeyValueStore`].
///
/// Reads never fail: a missing entry, a backend error or a corrupt blob all
/// resolve to the caller's default. Writes log failures and carry on.
#[derive(Debug, Clone)]
pub struct StateStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> StateStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn read<T: DeserializeOwned>(&self, key: StoreKey<T>, default: T) -> T {
        self.read_or_else(key, || default)
    }

    #[instrument(level = "debug", skip(self, key, default), fields(key = key.name()))]
    pub fn read_or_else<T, F>(&self, key: StoreKey<T>, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let raw = match self.backend.get_raw(key.name()) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored value, using default");
                return default();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored value, using default");
                return default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(source) => {
                let e = StoreError::Json {
                    key: key.name().to_string(),
                    source,
                };
                warn!(error = %e, "Stored value is corrupt, using default");
                default()
            }
        }
    }

    /// Serialize and persist `value`, absorbing any failure.
    pub fn write<T: Serialize>(&mut self, key: StoreKey<T>, value: &T) {
        if let Err(e) = self.try_write(key, value) {
            warn!(key = key.name(), error = %e, "Failed to persist value");
        }
    }

    #[instrument(level = "debug", skip(self, key, value), fields(key = key.name()))]
    pub fn try_write<T: Serialize>(&mut self, key: StoreKey<T>, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Json {
            key: key.name().to_string(),
            source,
        })?;
        self.backend.set_raw(key.name(), &json)?;
        debug!(bytes = json.len(), "Persisted value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Note, Theme};
    use crate::infrastructure::memory_store::MemoryStore;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        fn set_raw(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    #[test]
    fn given_missing_entry_when_reading_then_returns_default() {
        let store = StateStore::new(MemoryStore::new());

        assert!(store.read(keys::SIDEBAR_COLLAPSED, true));
        assert!(store.read(keys::NOTES, vec![]).is_empty());
    }

    #[test]
    fn given_written_value_when_reading_then_returns_it() {
        // Arrange
        let mut store = StateStore::new(MemoryStore::new());

        // Act
        store.write(keys::THEME, &Theme::Dark);

        // Assert
        assert_eq!(store.read(keys::THEME, Theme::Light), Theme::Dark);
        assert_eq!(
            store.backend().get_raw("theme").unwrap().as_deref(),
            Some(r#""dark""#)
        );
    }

    #[test]
    fn given_corrupt_blob_when_reading_then_returns_default() {
        let mut backend = MemoryStore::new();
        backend.set_raw("notes-data", "{not json").unwrap();
        let store = StateStore::new(backend);

        let notes: Vec<Note> = store.read(keys::NOTES, vec![]);

        assert!(notes.is_empty());
    }

    #[test]
    fn given_blob_of_wrong_shape_when_reading_then_returns_default() {
        let mut backend = MemoryStore::new();
        backend.set_raw("sidebar-collapsed", r#""yes""#).unwrap();
        let store = StateStore::new(backend);

        assert!(!store.read(keys::SIDEBAR_COLLAPSED, false));
    }

    #[test]
    fn given_failing_backend_when_reading_then_returns_default() {
        let store = StateStore::new(FailingStore);

        assert_eq!(store.read(keys::THEME, Theme::Light), Theme::Light);
    }

    #[test]
    fn given_failing_backend_when_writing_then_absorbs_error() {
        let mut store = StateStore::new(FailingStore);

        store.write(keys::SIDEBAR_COLLAPSED, &false);

        assert!(store.try_write(keys::SIDEBAR_COLLAPSED, &false).is_err());
    }

    #[test]
    fn given_default_closure_when_entry_exists_then_closure_is_not_called() {
        let mut store = StateStore::new(MemoryStore::new());
        store.write(keys::THEME, &Theme::Light);

        let theme = store.read_or_else(keys::THEME, || panic!("default should not be computed"));

        assert_eq!(theme, Theme::Light);
    }
}
