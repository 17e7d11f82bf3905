//! # Snapshot Codec
//!
//! Encodes and decodes the snapshot to and from its on-disk JSON layout.
//!
//! The layout is a single JSON object with six top-level fields:
//! `last_post_id`, `last_user_id`, `posts` (stringified integer keys),
//! `users` (stringified integer keys, digest embedded), `user_email_idx`,
//! and `refresh_tokens` (token keys, each entry carrying `user_id` and an
//! RFC3339 `expires_at`). These names are the compatibility contract with
//! existing data files; the serde derives in `model` declare the mapping
//! once and nothing else may redefine it.

use crate::errors::{StoreError, StoreResult};
use crate::snapshot::Snapshot;

/// Encode a snapshot into its on-disk byte representation.
pub fn encode(snapshot: &Snapshot) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(snapshot)
        .map_err(|e| StoreError::Internal(format!("snapshot encode failed: {}", e)))
}

/// Decode a snapshot from its on-disk byte representation.
///
/// Malformed input is `Corrupt`: the caller must not fall back to an empty
/// snapshot, since that would silently discard data.
pub fn decode(bytes: &[u8]) -> StoreResult<Snapshot> {
    serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{AuthUser, Post, RefreshToken, User};
    use chrono::{Duration, Utc};

    fn populated_snapshot() -> Snapshot {
        let mut snapshot = Snapshot::default();
        let user_id = snapshot.next_user_id();
        snapshot.users.insert(
            user_id,
            AuthUser {
                user: User {
                    id: user_id,
                    email: "a@x.com".to_string(),
                    upgraded: true,
                },
                password: "digest".to_string(),
            },
        );
        snapshot.user_email_idx.insert("a@x.com".to_string(), user_id);

        let post_id = snapshot.next_post_id();
        snapshot.posts.insert(
            post_id,
            Post {
                id: post_id,
                author_id: user_id,
                body: "hello".to_string(),
            },
        );

        snapshot.refresh_tokens.insert(
            "tok".to_string(),
            RefreshToken {
                token: "tok".to_string(),
                user_id,
                expires_at: Utc::now() + Duration::hours(1),
            },
        );
        snapshot
    }

    #[test]
    fn test_round_trip_preserves_snapshot() {
        let snapshot = populated_snapshot();
        let bytes = encode(&snapshot).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_layout_uses_stable_field_names() {
        let snapshot = populated_snapshot();
        let bytes = encode(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert!(value.get("last_post_id").is_some());
        assert!(value.get("last_user_id").is_some());
        // Integer-keyed maps serialize with stringified keys
        assert!(value["posts"].get("1").is_some());
        assert!(value["users"].get("1").is_some());
        assert_eq!(value["user_email_idx"]["a@x.com"], 1);
        assert_eq!(value["refresh_tokens"]["tok"]["user_id"], 1);
        assert!(value["refresh_tokens"]["tok"].get("expires_at").is_some());
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        let result = decode(b"{\"last_post_id\": ");
        assert!(matches!(result, Err(StoreError::Corrupt(_))));

        let result = decode(b"not json at all");
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_decode_empty_object_is_empty_snapshot() {
        // Counters and maps all default; an empty object is a valid store
        let snapshot = decode(b"{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }
}
