//! Persistent store adapter for the question collection.
//!
//! The whole collection is persisted as a single JSON array and replaced
//! wholesale on every save; there are no partial or delta writes. A store
//! that has never been written, or whose contents fail to parse, loads as
//! the empty collection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Question;

const STORE_FILE: &str = "questions.json";

/// Failures talking to the persistent store.
///
/// Parse failures are deliberately absent: unreadable *content* loads as
/// an empty store, only unreachable *storage* is an error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read question store at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write question store at {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode question collection")]
    Encode(#[source] serde_json::Error),

    #[error("no usable data directory for the default store")]
    NoDataDir,
}

enum Backend {
    File(PathBuf),
    Memory(Option<String>),
}

/// Adapter over the durable question collection.
pub struct QuestionStore {
    backend: Backend,
}

impl QuestionStore {
    /// Open a store backed by the given file. The file need not exist yet;
    /// it is created on first load or save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::File(path.into()),
        }
    }

    /// Open the store at the platform data directory
    /// (`<data_dir>/qboard/questions.json`).
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::open(Self::default_path()?))
    }

    /// Resolve the default store location without opening it.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let dirs =
            directories::ProjectDirs::from("", "", "qboard").ok_or(StoreError::NoDataDir)?;
        Ok(dirs.data_dir().join(STORE_FILE))
    }

    /// Open a store that lives only in memory. Used by tests and ephemeral
    /// boards; behaves exactly like the file backend otherwise.
    pub fn open_memory() -> Self {
        Self {
            backend: Backend::Memory(None),
        }
    }

    /// Load the persisted collection.
    ///
    /// An absent value is initialized to the empty collection and written
    /// through before returning. Content that fails to parse is treated
    /// identically to absent content.
    pub fn load(&mut self) -> Result<Vec<Question>, StoreError> {
        let raw = match self.read_raw()? {
            Some(raw) => raw,
            None => {
                tracing::info!("initializing empty question store");
                self.save(&[])?;
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(questions) => Ok(questions),
            Err(err) => {
                tracing::warn!("discarding malformed question store: {err}");
                self.save(&[])?;
                Ok(Vec::new())
            }
        }
    }

    /// Replace the persisted collection wholesale.
    pub fn save(&mut self, questions: &[Question]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(questions).map_err(StoreError::Encode)?;

        match &mut self.backend {
            Backend::File(path) => write_atomic(path, &json)?,
            Backend::Memory(slot) => *slot = Some(json),
        }

        tracing::debug!(count = questions.len(), "persisted question collection");
        Ok(())
    }

    fn read_raw(&self) -> Result<Option<String>, StoreError> {
        match &self.backend {
            Backend::File(path) => match fs::read_to_string(path) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(StoreError::Read {
                    path: path.clone(),
                    source: err,
                }),
            },
            Backend::Memory(slot) => Ok(slot.clone()),
        }
    }
}

/// Write via temp file + rename; the stored document is replaced in a
/// single step, never left truncated.
fn write_atomic(path: &Path, content: &str) -> Result<(), StoreError> {
    let write_err = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)
}
