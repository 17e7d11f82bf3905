//! # Record Store
//!
//! The in-memory snapshot plus its backing file, behind a single
//! reader/writer lock. This module owns the lock discipline; the operation
//! impls live in `posts`, `users`, and `tokens`.
//!
//! ## Lock discipline
//! - Reads take the shared lock and serve from memory. No disk access, so
//!   read-your-writes holds within the process.
//! - Writes take the exclusive lock for the full reload -> mutate -> persist
//!   cycle. Reloading first reconciles anything an external process wrote;
//!   persisting last makes the mutation durable before the lock drops.
//!
//! A persist failure leaves memory mutated and disk stale. The error is
//! surfaced and no rollback happens; the next successful write closes the
//! window.
//!
//! ## Invariants
//! - STORE-1: No two mutations interleave, process-wide
//! - STORE-2: Mutations never run against a stale view of the file
//! - STORE-3: Read operations never touch the disk

mod posts;
mod tokens;
mod users;

use std::path::PathBuf;
use std::sync::RwLock;

use tracing::{info, warn};

use crate::errors::{StoreError, StoreResult};
use crate::snapshot::Snapshot;
use crate::storage::SnapshotFile;

/// The embedded document store.
///
/// Construct once at startup and share by reference across request handlers;
/// there is no global instance.
pub struct DocumentStore {
    file: SnapshotFile,
    state: RwLock<Snapshot>,
}

impl DocumentStore {
    /// Open the store backed by the file at `path`.
    ///
    /// With `start_fresh` set, any existing file is removed first. A missing
    /// file is "no data yet": an empty snapshot is written immediately, so
    /// the file always exists once this returns. A present-but-malformed
    /// file is `Corrupt` and must halt startup.
    pub fn open(path: impl Into<PathBuf>, start_fresh: bool) -> StoreResult<Self> {
        let file = SnapshotFile::new(path);
        if start_fresh {
            file.remove()?;
            info!(path = %file.path().display(), "starting fresh, removed existing snapshot file");
        }

        let snapshot = match file.load()? {
            Some(snapshot) => snapshot,
            None => {
                let empty = Snapshot::default();
                file.save(&empty)?;
                empty
            }
        };

        info!(
            path = %file.path().display(),
            users = snapshot.users.len(),
            posts = snapshot.posts.len(),
            "document store opened"
        );

        Ok(Self {
            file,
            state: RwLock::new(snapshot),
        })
    }

    /// Run a read-only operation against the in-memory snapshot.
    fn read<T>(&self, op: impl FnOnce(&Snapshot) -> StoreResult<T>) -> StoreResult<T> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::Internal("snapshot lock poisoned".to_string()))?;
        op(&state)
    }

    /// Run a mutation under the exclusive lock: reload from disk, apply,
    /// persist.
    ///
    /// If `op` fails the file is left untouched. If the persist fails the
    /// in-memory state keeps the mutation and the caller sees the error.
    fn mutate<T>(&self, op: impl FnOnce(&mut Snapshot) -> StoreResult<T>) -> StoreResult<T> {
        let mut state = self
            .state
            .write()
            .map_err(|_| StoreError::Internal("snapshot lock poisoned".to_string()))?;

        // Disk is the authority at the start of every mutation; a missing
        // file reconciles to "no data yet".
        *state = self.file.load()?.unwrap_or_default();

        let value = op(&mut state)?;

        if let Err(e) = self.file.save(&state) {
            warn!(error = %e, "snapshot persist failed; in-memory state is ahead of disk");
            return Err(e);
        }
        Ok(value)
    }
}
