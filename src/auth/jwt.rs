//! # Access Credentials
//!
//! Short-lived signed claims proving identity for a bounded time. These are
//! never persisted; the store's refresh tokens are exchanged for them.
//!
//! ## Invariants
//! - AUTH-T1: Stateless validation (no store lookup)
//! - AUTH-T2: Lifetime clamped to one day
//! - AUTH-T3: No secrets in the claims

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::{AuthError, AuthResult};

/// Longest permitted access credential lifetime, in seconds.
pub const MAX_TTL_SECONDS: i64 = 60 * 60 * 24;

/// Registered claims carried by an access credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Issuer label
    pub iss: String,

    /// Subject (user ID, as a string)
    pub sub: String,

    /// Issued at (Unix epoch seconds)
    pub iat: i64,

    /// Expiration (Unix epoch seconds)
    pub exp: i64,
}

impl AccessClaims {
    /// The subject parsed back into a user ID.
    pub fn user_id(&self) -> AuthResult<i64> {
        self.sub.parse().map_err(|_| AuthError::MalformedToken)
    }
}

/// Signs and checks access credentials with a server-held secret.
#[derive(Clone)]
pub struct AccessTokens {
    issuer: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AccessTokens {
    /// Create a signer around the given secret and issuer label.
    pub fn new(secret: &str, issuer: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign an access credential for `subject`.
    ///
    /// A non-positive or over-limit TTL is clamped to [`MAX_TTL_SECONDS`]
    /// (AUTH-T2).
    pub fn sign(&self, subject: &str, ttl_seconds: i64) -> AuthResult<String> {
        let ttl = if ttl_seconds <= 0 || ttl_seconds > MAX_TTL_SECONDS {
            MAX_TTL_SECONDS
        } else {
            ttl_seconds
        };

        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::seconds(ttl);
        let claims = AccessClaims {
            iss: self.issuer.clone(),
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenGenerationFailed)
    }

    /// Check a credential and extract its claims (AUTH-T1).
    pub fn parse(&self, token: &str) -> AuthResult<AccessClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);

        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AuthError::InvalidSignature
                    }
                    _ => AuthError::MalformedToken,
                }
            })?;

        Ok(token_data.claims)
    }
}
