//! # Snapshot Data Model
//!
//! Record types and the whole-store aggregate. The serde derives on these
//! types are the persisted schema: field names here are the on-disk field
//! names and must stay stable (see `codec` for the layout contract).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single post. Immutable once created, except deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier, assigned at creation only
    pub id: i64,

    /// The user that authored this post
    pub author_id: i64,

    /// Post body, at most 140 characters (enforced at the caller seam)
    pub body: String,
}

/// Public user record. This is what store operations return; the password
/// digest lives only on [`AuthUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier, assigned at creation only
    pub id: i64,

    /// Email address, unique across the store via the secondary index
    pub email: String,

    /// Whether the account has been upgraded
    #[serde(default)]
    pub upgraded: bool,
}

/// Stored user record: the public fields plus the password digest.
///
/// Only the store's internal auth lookup exposes this type; everything else
/// sees [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(flatten)]
    pub user: User,

    /// Opaque password digest. Never echoed outside the auth lookup.
    pub password: String,
}

/// A long-lived refresh token bound to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// The opaque, unguessable token string
    pub token: String,

    /// The user this token was issued for
    pub user_id: i64,

    /// Absolute expiry instant (UTC)
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Returns whether the token is past its expiry at the given instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// The whole-store aggregate: all records, counters, and indices.
///
/// Every field defaults, so files written by older layouts (or an empty
/// object) decode to a usable snapshot instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Highest post ID ever assigned
    pub last_post_id: i64,

    /// Highest user ID ever assigned
    pub last_user_id: i64,

    /// Posts keyed by ID
    pub posts: HashMap<i64, Post>,

    /// Users keyed by ID, digest embedded
    pub users: HashMap<i64, AuthUser>,

    /// Secondary index: email -> user ID
    pub user_email_idx: HashMap<String, i64>,

    /// Refresh tokens keyed by token string
    pub refresh_tokens: HashMap<String, RefreshToken>,
}

impl Snapshot {
    /// Advance and return the post ID counter.
    ///
    /// IDs move forward only; deletion never frees one for reuse.
    pub fn next_post_id(&mut self) -> i64 {
        self.last_post_id += 1;
        self.last_post_id
    }

    /// Advance and return the user ID counter.
    pub fn next_user_id(&mut self) -> i64 {
        self.last_user_id += 1;
        self.last_user_id
    }
}
