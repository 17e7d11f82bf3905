//! Refresh token lifecycle.
//!
//! Tokens move `Issued -> Expired` by the clock, or `Issued -> Revoked`
//! (terminal) by explicit delete. Validation never deletes: an expired entry
//! stays in the snapshot until revoked, so a concurrent revoke-then-validate
//! keeps its observable `NotFound` outcome.

use chrono::{Duration, Utc};

use crate::auth::crypto::generate_token;
use crate::errors::{StoreError, StoreResult};
use crate::snapshot::RefreshToken;

use super::DocumentStore;

impl DocumentStore {
    /// Issue a refresh token for `user_id`, valid for `ttl_seconds`.
    ///
    /// The token string comes from the OS RNG and is the capability itself;
    /// an (astronomically unlikely) collision with a stored token is
    /// `AlreadyExists`, never an overwrite. Callers retry with a fresh
    /// value.
    pub fn issue_refresh_token(&self, user_id: i64, ttl_seconds: i64) -> StoreResult<RefreshToken> {
        let token = generate_token();
        self.mutate(|snapshot| {
            if snapshot.refresh_tokens.contains_key(&token) {
                return Err(StoreError::AlreadyExists);
            }
            let refresh_token = RefreshToken {
                token: token.clone(),
                user_id,
                expires_at: Utc::now() + Duration::seconds(ttl_seconds),
            };
            snapshot
                .refresh_tokens
                .insert(token.clone(), refresh_token.clone());
            Ok(refresh_token)
        })
    }

    /// Validate a refresh token.
    ///
    /// `NotFound` if absent (never issued, or revoked), `Expired` if past
    /// its expiry in UTC. Expired entries are left in place.
    pub fn validate_refresh_token(&self, token: &str) -> StoreResult<RefreshToken> {
        self.read(|snapshot| {
            let refresh_token = snapshot
                .refresh_tokens
                .get(token)
                .ok_or(StoreError::NotFound)?;
            if refresh_token.is_expired(Utc::now()) {
                return Err(StoreError::Expired);
            }
            Ok(refresh_token.clone())
        })
    }

    /// Revoke a refresh token. Idempotent: revoking an absent token
    /// succeeds.
    pub fn revoke_refresh_token(&self, token: &str) -> StoreResult<()> {
        self.mutate(|snapshot| {
            snapshot.refresh_tokens.remove(token);
            Ok(())
        })
    }
}
