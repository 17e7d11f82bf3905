//! # Snapshot Subsystem
//!
//! The snapshot is the complete in-memory state of the store, mirrored to
//! disk as a single JSON document. It is the unit of persistence: every
//! mutation rewrites it whole, every startup reloads it whole.
//!
//! ## Invariants
//! - SNAP-1: Post and user IDs are strictly increasing, never reused
//! - SNAP-2: `user_email_idx[email] == id` iff `users[id].email == email`
//! - SNAP-3: At most one refresh token entry per token string

mod codec;
mod model;

pub use codec::{decode, encode};
pub use model::{AuthUser, Post, RefreshToken, Snapshot, User};
