//! JSON file persistence for the journal, plus import/export.
//!
//! The store is deliberately dumb: one file, the whole record set, written
//! after every mutation. A corrupt file is not fatal; the journal starts
//! empty and the damage is reported, never silently propagated.

use crate::journal::Journal;
use crate::model::Thought;
use crate::{IntroResult, IntrospectError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Per-user default location, e.g. `~/.local/share/introspect/thoughts.json`.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("introspect")
            .join("thoughts.json")
    }

    /// Load the journal. A missing file means a fresh journal; a corrupt
    /// one is reported and replaced by an empty journal on the next save.
    pub fn load(&self) -> IntroResult<Journal> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no store at {}; starting empty", self.path.display());
                return Ok(Journal::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<Thought>>(&raw) {
            Ok(thoughts) => {
                debug!("loaded {} thoughts from {}", thoughts.len(), self.path.display());
                Ok(Journal::from_thoughts(thoughts))
            }
            Err(e) => {
                warn!("failed to parse store {}: {}", self.path.display(), e);
                Ok(Journal::new())
            }
        }
    }

    pub fn save(&self, journal: &Journal) -> IntroResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(journal.thoughts())?;
        fs::write(&self.path, raw)?;
        debug!("saved {} thoughts to {}", journal.len(), self.path.display());
        Ok(())
    }
}

/// Serialize the full record set as the backup payload.
pub fn export_string(journal: &Journal) -> IntroResult<String> {
    Ok(serde_json::to_string(journal.thoughts())?)
}

/// Parse a backup payload. Must be a JSON array of thoughts; anything else
/// is rejected before it can replace the store.
pub fn import_str(raw: &str) -> IntroResult<Vec<Thought>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_array() {
        return Err(IntrospectError::Validation(
            "import payload must be a JSON array of thoughts".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}
