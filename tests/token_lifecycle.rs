//! Token Lifecycle Tests
//!
//! Tests the refresh token state machine end to end, including the exchange
//! of a refresh token for a signed access credential:
//! - Issued -> Valid until expiry -> Expired
//! - Issued -> Revoked (terminal)
//! - SNAP-3: At most one entry per token string

use std::thread;
use std::time::Duration;

use nestdb::auth::{self, AccessTokens};
use nestdb::errors::StoreError;
use nestdb::store::DocumentStore;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn open_store(dir: &TempDir) -> DocumentStore {
    DocumentStore::open(dir.path().join("db.json"), false).expect("Failed to open store")
}

fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

// =============================================================================
// State Machine: Issued -> Valid -> Expired
// =============================================================================

#[test]
fn test_issued_token_validates_until_ttl_elapses() {
    let dir = create_temp_dir();
    let store = open_store(&dir);

    let issued = store.issue_refresh_token(1, 1).unwrap();
    let validated = store.validate_refresh_token(&issued.token).unwrap();
    assert_eq!(validated.user_id, 1);

    // Zero-TTL token is past expiry as soon as the clock moves
    let expired = store.issue_refresh_token(1, 0).unwrap();
    thread::sleep(Duration::from_millis(50));
    assert!(matches!(
        store.validate_refresh_token(&expired.token),
        Err(StoreError::Expired)
    ));
}

#[test]
fn test_expired_tokens_are_not_deleted_by_validation() {
    let dir = create_temp_dir();
    let path = dir.path().join("db.json");
    let store = DocumentStore::open(&path, false).unwrap();

    let expired = store.issue_refresh_token(1, 0).unwrap();
    thread::sleep(Duration::from_millis(50));

    // Repeated validation keeps answering Expired, never NotFound: the
    // entry stays in the snapshot until revoked.
    for _ in 0..3 {
        assert!(matches!(
            store.validate_refresh_token(&expired.token),
            Err(StoreError::Expired)
        ));
    }

    // The stale entry also survives a restart
    let reopened = DocumentStore::open(&path, false).unwrap();
    assert!(matches!(
        reopened.validate_refresh_token(&expired.token),
        Err(StoreError::Expired)
    ));
}

// =============================================================================
// State Machine: Issued -> Revoked (terminal)
// =============================================================================

#[test]
fn test_revoked_token_is_indistinguishable_from_never_issued() {
    let dir = create_temp_dir();
    let store = open_store(&dir);

    let issued = store.issue_refresh_token(1, 3600).unwrap();
    store.revoke_refresh_token(&issued.token).unwrap();

    assert!(matches!(
        store.validate_refresh_token(&issued.token),
        Err(StoreError::NotFound)
    ));

    // Revoking again is still success
    store.revoke_refresh_token(&issued.token).unwrap();
}

#[test]
fn test_revocation_survives_restart() {
    let dir = create_temp_dir();
    let path = dir.path().join("db.json");

    let token = {
        let store = DocumentStore::open(&path, false).unwrap();
        let issued = store.issue_refresh_token(1, 3600).unwrap();
        store.revoke_refresh_token(&issued.token).unwrap();
        issued.token
    };

    let store = DocumentStore::open(&path, false).unwrap();
    assert!(matches!(
        store.validate_refresh_token(&token),
        Err(StoreError::NotFound)
    ));
}

// =============================================================================
// Full Exchange: Refresh Token -> Access Credential
// =============================================================================

#[test]
fn test_login_refresh_exchange_end_to_end() {
    let dir = create_temp_dir();
    let store = open_store(&dir);
    let signer = AccessTokens::new("integration_test_secret", "nestdb");

    // Signup
    let digest = auth::hash_password("hunter2!").unwrap();
    let user = store.create_user("a@x.com", &digest).unwrap();

    // Login: verify credentials, get both tokens
    let auth_user = store.auth_user_by_email("a@x.com").unwrap();
    assert!(auth::verify_password("hunter2!", &auth_user.password).unwrap());
    assert!(!auth::verify_password("wrong", &auth_user.password).unwrap());

    let refresh = store.issue_refresh_token(user.id, 3600).unwrap();
    let access = signer.sign(&user.id.to_string(), 900).unwrap();

    // The access credential round-trips to the same subject
    let claims = signer.parse(&access).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);

    // Exchange: validate the refresh token, mint a new access credential
    let validated = store.validate_refresh_token(&refresh.token).unwrap();
    let fresh_access = signer.sign(&validated.user_id.to_string(), 900).unwrap();
    assert_eq!(
        signer.parse(&fresh_access).unwrap().user_id().unwrap(),
        user.id
    );

    // Logout: revoke, the exchange path closes
    store.revoke_refresh_token(&refresh.token).unwrap();
    assert!(matches!(
        store.validate_refresh_token(&refresh.token),
        Err(StoreError::NotFound)
    ));
}

#[test]
fn test_tokens_for_multiple_users_stay_bound() {
    let dir = create_temp_dir();
    let store = open_store(&dir);

    let a = store.issue_refresh_token(1, 3600).unwrap();
    let b = store.issue_refresh_token(2, 3600).unwrap();

    assert_eq!(store.validate_refresh_token(&a.token).unwrap().user_id, 1);
    assert_eq!(store.validate_refresh_token(&b.token).unwrap().user_id, 2);

    // Revoking one user's token leaves the other's intact
    store.revoke_refresh_token(&a.token).unwrap();
    assert_eq!(store.validate_refresh_token(&b.token).unwrap().user_id, 2);
}
