//! # Cryptographic Utilities
//!
//! Password digesting and secure token generation.
//!
//! ## Invariants
//! - AUTH-C1: Passwords only stored as Argon2id digests
//! - AUTH-C2: Refresh tokens come from the OS RNG, never a seeded PRNG

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;

use super::errors::{AuthError, AuthResult};

/// Digest a password using Argon2id
///
/// # Invariant
/// AUTH-C1: Passwords only stored as Argon2id digests
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::HashingFailed)
}

/// Verify a password against its stored digest
///
/// Uses constant-time comparison internally (via the argon2 crate).
pub fn verify_password(password: &str, digest: &str) -> AuthResult<bool> {
    let parsed = PasswordHash::new(digest).map_err(|_| AuthError::InvalidCredentials)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Generate a cryptographically secure random token
///
/// Returns a 256-bit (32-byte) random value as URL-safe base64. The value
/// is an external capability: unguessability is the defense against token
/// forgery, not a performance detail.
///
/// # Invariant
/// AUTH-C2: Refresh tokens come from the OS RNG, never a seeded PRNG
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    base64::Engine::encode(&base64::engine::general_purpose::URL_SAFE_NO_PAD, bytes)
}
