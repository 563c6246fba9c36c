//! # License Store
//!
//! Owns the single on-disk license record (`license.json`).
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        License Store                                    │
//! │                                                                         │
//! │  load()                              save(record)                       │
//! │  ──────                              ────────────                       │
//! │  file absent        → None           serialize to pretty JSON          │
//! │  file unreadable    → None (warn)    write to temp file in same dir    │
//! │  malformed JSON     → None (warn)    rename over license.json          │
//! │  schema mismatch    → None (warn)                                       │
//! │  valid record       → Some(record)   crash mid-write → old file OR     │
//! │                                      content load() maps to None       │
//! │                                                                         │
//! │  Absence is a NORMAL state (pre-activation), never an error.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only one process writes the store in this system, so there is no
//! cross-process locking; atomicity only has to protect against crash
//! mid-write, which the temp-file + rename pattern covers.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::warn;

use junction_core::types::LicenseRecord;

use crate::error::LicenseResult;

/// File name of the persisted license record.
const LICENSE_FILE: &str = "license.json";

/// File-backed store for the activation record.
///
/// The path is explicit constructor state (no process-wide singleton), so
/// tests point the store at a temp directory.
#[derive(Debug, Clone)]
pub struct LicenseStore {
    path: PathBuf,
}

impl LicenseStore {
    /// Creates a store over an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LicenseStore { path: path.into() }
    }

    /// Creates a store at the platform's application data directory,
    /// e.g. `~/.local/share/junction-pos/license.json` on Linux.
    pub fn at_default_path() -> Option<Self> {
        directories::ProjectDirs::from("com", "junction", "pos")
            .map(|dirs| LicenseStore::new(dirs.data_dir().join(LICENSE_FILE)))
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted record, if a valid one exists.
    ///
    /// Absence, unreadable content, and malformed JSON all map to `None`.
    /// A licensing problem must never take down order-taking, so nothing
    /// here propagates as an error.
    pub fn load(&self) -> Option<LicenseRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "license file unreadable; treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "license file malformed; treating as absent");
                None
            }
        }
    }

    /// Persists a record, overwriting any previous one atomically.
    ///
    /// The record is written whole to a temp file in the destination
    /// directory and renamed into place; re-activation replaces the old
    /// record, never merges with it.
    pub fn save(&self, record: &LicenseRecord) -> LicenseResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(record)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
