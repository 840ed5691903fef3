//! Persistence of the last submitted request, with file locking.
//!
//! Only one snapshot is kept. It is written atomically and read under a
//! shared lock; a missing or unreadable snapshot is treated as absent.

use crate::{CalculationRequest, Error, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// File name of the snapshot inside the data directory
pub const SNAPSHOT_FILE: &str = "snapshot.json";

/// The last submitted request and when it was saved
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub saved_at: DateTime<Utc>,
    pub request: CalculationRequest,
}

impl Snapshot {
    pub fn new(request: CalculationRequest) -> Self {
        Self {
            saved_at: Utc::now(),
            request,
        }
    }

    /// Load the snapshot with shared locking
    ///
    /// Returns `None` if the file doesn't exist.
    /// If the file is corrupted, logs a warning and returns `None`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::info!("No snapshot found at {:?}", path);
            return Ok(None);
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("Unable to open snapshot {:?}: {}. Ignoring it.", path, e);
                return Ok(None);
            }
        };

        if let Err(e) = file.lock_shared() {
            tracing::warn!("Unable to lock snapshot {:?}: {}. Ignoring it.", path, e);
            return Ok(None);
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!("Failed to read snapshot {:?}: {}. Ignoring it.", path, e);
            return Ok(None);
        }

        file.unlock()?;

        match serde_json::from_str::<Snapshot>(&contents) {
            Ok(snapshot) => {
                tracing::debug!("Loaded snapshot from {:?}", path);
                Ok(Some(snapshot))
            }
            Err(e) => {
                tracing::warn!("Failed to parse snapshot {:?}: {}. Ignoring it.", path, e);
                Ok(None)
            }
        }
    }

    /// Save the snapshot with exclusive locking
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| Error::Snapshot(format!("snapshot path {:?} has no parent", path)))?;
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string_pretty(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved snapshot to {:?}", path);
        Ok(())
    }

    /// Remove the snapshot. Returns whether one existed.
    pub fn clear(path: &Path) -> Result<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => {
                tracing::info!("Cleared snapshot {:?}", path);
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
