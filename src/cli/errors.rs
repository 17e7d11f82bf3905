//! CLI-specific error types
//!
//! Every CLI error is fatal to the invocation: it is printed to stderr and
//! the process exits non-zero.

use thiserror::Error;

use crate::auth::AuthError;
use crate::content::ContentError;
use crate::errors::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Store operation failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Credential or token operation failed
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Post body rejected
    #[error("content error: {0}")]
    Content(#[from] ContentError),

    /// Login credentials did not match
    #[error("invalid email or password")]
    LoginFailed,

    /// Result could not be rendered
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
