//! # Configuration
//!
//! Process configuration, loaded from a JSON file with every field
//! defaulted. The store itself never reads config; the CLI shell loads this
//! and passes the pieces where they belong.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{StoreError, StoreResult};

/// Process configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the snapshot file
    pub database_path: PathBuf,

    /// Secret for signing access credentials
    pub jwt_secret: String,

    /// Issuer label stamped into access credentials
    pub jwt_issuer: String,

    /// Default access credential lifetime, in seconds
    pub access_token_ttl_seconds: i64,

    /// Refresh token lifetime, in seconds
    pub refresh_token_ttl_seconds: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("./nestdb.json"),
            jwt_secret: "CHANGE_THIS_SECRET_IN_PRODUCTION".to_string(),
            jwt_issuer: "nestdb".to_string(),
            access_token_ttl_seconds: 60 * 60,
            refresh_token_ttl_seconds: 60 * 60 * 24 * 60,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// A missing file yields the defaults; a present-but-invalid file is an
    /// error, never silently defaulted.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_str(&content)
            .map_err(|e| StoreError::Corrupt(format!("invalid config JSON: {}", e)))
    }
}
