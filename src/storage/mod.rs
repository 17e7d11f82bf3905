//! # Persistence Layer
//!
//! Reads the snapshot file into memory and writes it back as a whole-file
//! rewrite with fsync. The whole-file rewrite trades throughput for
//! simplicity and is deliberate: partial updates would break the
//! reload-before-mutate consistency model in `store`.
//!
//! ## Invariants
//! - PERSIST-1: A missing file is "no data yet", never an I/O failure
//! - PERSIST-2: Saves rewrite the entire snapshot in one operation
//! - PERSIST-3: Malformed file contents halt startup (no silent reset)

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::{StoreError, StoreResult};
use crate::snapshot::{self, Snapshot};

/// Handle to the single on-disk snapshot file.
///
/// Owns no file descriptor between operations; every load and save opens the
/// path fresh so external rewrites are picked up.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Create a handle for the snapshot file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this handle reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the full snapshot.
    ///
    /// Returns `Ok(None)` when the file does not exist; callers initialize
    /// an empty snapshot rather than failing (PERSIST-1). Decode failures
    /// are `Corrupt` and fatal at startup (PERSIST-3).
    pub fn load(&self) -> StoreResult<Option<Snapshot>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };
        snapshot::decode(&bytes).map(Some)
    }

    /// Encode and overwrite the file with the full snapshot (PERSIST-2).
    ///
    /// The write is flushed to disk before returning; a reported success
    /// means the bytes reached the device, not just the page cache.
    pub fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let bytes = snapshot::encode(snapshot)?;
        let mut file = File::create(&self.path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        Ok(())
    }

    /// Delete the backing file. Missing file counts as success, so the
    /// start-fresh path is idempotent.
    pub fn remove(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
