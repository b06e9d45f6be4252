// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

/// Writes preview pages to a private temp directory and opens them in the
/// default browser. The directory is removed when this value is dropped.
#[derive(Debug, Default)]
pub struct BrowserPreview {
    temp_dir: Option<TempDir>,
}

impl BrowserPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `page` to `<tempdir>/<file_name>` and return its path.
    pub fn write_page(&mut self, file_name: &str, page: &str) -> Result<PathBuf> {
        if self.temp_dir.is_none() {
            let dir = Builder::new()
                .prefix("mdnotes-preview-")
                .rand_bytes(5)
                .tempdir()
                .context("Failed to create temporary directory")?;
            self.temp_dir = Some(dir);
        }
        let dir = self
            .temp_dir
            .as_ref()
            .context("Preview directory missing")?;

        let file_path = dir.path().join(file_name);
        File::create(&file_path)
            .with_context(|| format!("Failed to create preview file at {}", file_path.display()))?
            .write_all(page.as_bytes())
            .context("Failed to write preview page")?;

        debug!(?file_path, bytes = page.len(), "Wrote preview page");
        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        // The page lives in our temp dir; give the browser time to load it.
        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }
}
