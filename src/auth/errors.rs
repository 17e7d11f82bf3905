//! # Auth Errors
//!
//! Error types for the auth collaborators.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Credentials do not match (generic - don't leak which part failed)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Access token is malformed
    #[error("Malformed token")]
    MalformedToken,

    /// Access token has expired
    #[error("Token expired")]
    TokenExpired,

    /// Access token signature is invalid
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Password hashing failed
    #[error("Internal error: password hashing failed")]
    HashingFailed,

    /// Token generation failed
    #[error("Internal error: token generation failed")]
    TokenGenerationFailed,
}
