use std::fs;
use std::path::{Path, PathBuf};

use checklist_core::model::Snapshot;
use tracing::info;

use crate::error::ExportError;

/// Name of the downloaded results file.
pub const EXPORT_FILE_NAME: &str = "cult_checklist_results.json";

/// Writes snapshots to disk as indented JSON.
#[derive(Debug, Clone)]
pub struct ExportService {
    dir: PathBuf,
}

impl ExportService {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `write` puts the file.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.dir.join(EXPORT_FILE_NAME)
    }

    /// Serialize `snapshot` and write it, replacing any earlier export.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Serialization` if encoding fails, or
    /// `ExportError::Io` if the directory or file cannot be written.
    pub fn write(&self, snapshot: &Snapshot) -> Result<PathBuf, ExportError> {
        let body = render_json(snapshot)?;
        fs::create_dir_all(&self.dir)?;
        let path = self.target_path();
        fs::write(&path, body)?;
        info!(path = %path.display(), "results exported");
        Ok(path)
    }
}

/// Indented JSON body of an export.
///
/// # Errors
///
/// Returns `serde_json::Error` if the snapshot cannot be encoded.
pub fn render_json(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}
