//! JSON file storage for the site document.
//!
//! The whole [`Document`] lives in one file (`data.json` by default):
//! ```text
//! {
//!   "admin":    { "username": ..., "passwordHash": ... },
//!   "profile":  { "name": ..., "bio": [...], ... },
//!   "skills":   [ { "id": 1, "category": ..., "items": [...] }, ... ],
//!   "projects": [ { "id": 1, "type": ..., "title": ..., ... }, ... ]
//! }
//! ```
//!
//! There is no partial update: callers load, mutate and save the whole thing.
//! Concurrent writers are not coordinated and the last save wins.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::models::Document;

/// Errors that can occur while reading or writing the data file.
#[derive(Debug)]
pub enum StoreError {
    /// I/O error reading or writing a file.
    Io(PathBuf, io::Error),
    /// The file exists but is not a valid document.
    Parse(PathBuf, serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(path, e) => write!(f, "I/O error for {}: {}", path.display(), e),
            StoreError::Parse(path, e) => {
                write!(f, "Failed to parse document {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(_, e) => Some(e),
            StoreError::Parse(_, e) => Some(e),
        }
    }
}

/// Handle on the data file. Holds no cached copy of the document.
#[derive(Debug, Clone)]
pub struct DataStore {
    path: PathBuf,
}

impl DataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document from disk.
    ///
    /// A missing file yields an empty document. Malformed content is an error,
    /// never replaced with defaults.
    pub fn load(&self) -> Result<Document, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("{} not found, using empty document", self.path.display());
                return Ok(Document::default());
            }
            Err(e) => return Err(StoreError::Io(self.path.clone(), e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Parse(self.path.clone(), e))
    }

    /// Overwrites the data file with `doc`.
    pub fn save(&self, doc: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(parent.to_path_buf(), e))?;
        }

        let bytes = serde_json::to_vec_pretty(doc)
            .map_err(|e| StoreError::Parse(self.path.clone(), e))?;

        // Write atomically using temp file + rename
        let temp_path = self.path.with_extension("json.tmp");

        let mut file =
            File::create(&temp_path).map_err(|e| StoreError::Io(temp_path.clone(), e))?;

        file.write_all(&bytes)
            .map_err(|e| StoreError::Io(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| StoreError::Io(temp_path.clone(), e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Io(self.path.clone(), e))?;

        tracing::debug!("Saved document to {}", self.path.display());
        Ok(())
    }

    /// Returns true if the data file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
