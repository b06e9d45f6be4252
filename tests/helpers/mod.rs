use anyhow::{Context, Result};
use mdnotes::application::{NoteRepository, Preferences, Session, StateStore};
use mdnotes::domain::Theme;
use mdnotes::infrastructure::FileStore;
use mdnotes::util::testing::ManualClock;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Throwaway data directory backed by a real `FileStore`.
#[allow(dead_code)]
pub struct TestWorkspace {
    _temp_dir: TempDir,
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let data_dir = temp_dir.path().join("data");
        Ok(Self {
            _temp_dir: temp_dir,
            data_dir,
        })
    }

    pub fn store(&self) -> StateStore<FileStore> {
        StateStore::new(FileStore::new(&self.data_dir))
    }

    pub fn repository(&self, clock: ManualClock) -> NoteRepository<FileStore, ManualClock> {
        NoteRepository::with_clock(self.store(), clock)
    }

    pub fn session(&self, clock: ManualClock) -> Session<FileStore, ManualClock> {
        let store = self.store();
        Session::new(
            NoteRepository::with_clock(store.clone(), clock),
            Preferences::new(store, Theme::Light),
        )
    }

    /// Path of the file backing `key`.
    pub fn entry(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    pub fn write_entry(&self, key: &str, raw: &str) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::write(self.entry(key), raw)?;
        Ok(())
    }

    pub fn read_entry(&self, key: &str) -> Result<String> {
        read(&self.entry(key))
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
