//! File-based paper store.
//!
//! Every paper lives in its own pretty-printed JSON file:
//!
//! ```text
//! papers/
//!   2301.12345v1.json
//!   hep-th_9901001v1.json
//! ```
//!
//! There is no index: a paper exists when its file exists. The directory is
//! created on the first save, and a missing directory is an empty store.
//! Saving a record with an existing id replaces the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::PaperRecord;
use crate::utils::{validate_paper_id, ValidationError};

/// Extension of record files
pub const RECORD_EXTENSION: &str = "json";

/// Errors raised by the paper store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The paper id cannot be used as a filename
    #[error(transparent)]
    InvalidId(#[from] ValidationError),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A record file could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A directory of paper records
#[derive(Debug, Clone)]
pub struct PaperStore {
    dir: PathBuf,
}

impl PaperStore {
    /// Create a store rooted at `dir`; nothing is touched on disk
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the records
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether anything exists at the store path yet
    pub fn exists(&self) -> bool {
        self.dir.exists()
    }

    /// Create the store directory if it is missing
    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Path of the record file for `id`
    pub fn path_for(&self, id: &str) -> Result<PathBuf, StoreError> {
        Ok(self
            .dir
            .join(format!("{}.{}", file_stem(id)?, RECORD_EXTENSION)))
    }

    /// Whether a record for `id` is present
    pub fn contains(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.path_for(id)?.is_file())
    }

    /// Write `record`, replacing any existing file for the same id
    pub fn save(&self, record: &PaperRecord) -> Result<PathBuf, StoreError> {
        let path = self.path_for(&record.id)?;
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(record)?;
        fs::write(&path, content)?;

        tracing::debug!("Saved paper {} to {}", record.id, path.display());
        Ok(path)
    }

    /// Read the record for `id`, or `None` when no file exists
    pub fn load(&self, id: &str) -> Result<Option<PaperRecord>, StoreError> {
        let path = self.path_for(id)?;

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Names of the `.json` files in the store, sorted
    ///
    /// Returns `None` when the directory does not exist. File contents are
    /// not inspected.
    pub fn list(&self) -> Result<Option<Vec<String>>, StoreError> {
        if !self.exists() {
            return Ok(None);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(&format!(".{}", RECORD_EXTENSION)) {
                names.push(name);
            }
        }

        names.sort();
        Ok(Some(names))
    }
}

/// Filename stem for a paper id
///
/// The id is validated first; a `/` (old-style arXiv ids) becomes `_`.
pub fn file_stem(id: &str) -> Result<String, StoreError> {
    Ok(validate_paper_id(id)?.replace('/', "_"))
}
