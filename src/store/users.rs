//! User operations.
//!
//! Users carry an opaque password digest that is only exposed through the
//! internal auth lookup; every other operation returns the public record.
//! The email index is maintained on every email-affecting mutation and is
//! never left stale (SNAP-2).

use crate::errors::{StoreError, StoreResult};
use crate::snapshot::{AuthUser, User};

use super::DocumentStore;

impl DocumentStore {
    /// Create a user. `AlreadyExists` if the email is taken.
    ///
    /// The returned record omits the digest; see [`auth_user_by_email`]
    /// for the credential lookup.
    ///
    /// [`auth_user_by_email`]: DocumentStore::auth_user_by_email
    pub fn create_user(&self, email: &str, password_digest: &str) -> StoreResult<User> {
        self.mutate(|snapshot| {
            if snapshot.user_email_idx.contains_key(email) {
                return Err(StoreError::AlreadyExists);
            }
            let user = User {
                id: snapshot.next_user_id(),
                email: email.to_string(),
                upgraded: false,
            };
            snapshot.users.insert(
                user.id,
                AuthUser {
                    user: user.clone(),
                    password: password_digest.to_string(),
                },
            );
            snapshot.user_email_idx.insert(user.email.clone(), user.id);
            Ok(user)
        })
    }

    /// Look up the public user record by email.
    pub fn get_user_by_email(&self, email: &str) -> StoreResult<User> {
        self.auth_user_by_email(email).map(|auth| auth.user)
    }

    /// Look up the stored record, digest included. This is the auth seam:
    /// the login path verifies the supplied password against it.
    pub fn auth_user_by_email(&self, email: &str) -> StoreResult<AuthUser> {
        self.read(|snapshot| {
            let id = snapshot
                .user_email_idx
                .get(email)
                .ok_or(StoreError::NotFound)?;
            snapshot.users.get(id).cloned().ok_or(StoreError::NotFound)
        })
    }

    /// Replace a user's email and digest in place.
    ///
    /// The old email index entry is removed and the new one installed in the
    /// same mutation, so no interleaved read sees both or neither resolve.
    /// Moving to an email owned by a different user is `AlreadyExists`.
    pub fn update_user(
        &self,
        id: i64,
        new_email: &str,
        new_password_digest: &str,
    ) -> StoreResult<User> {
        self.mutate(|snapshot| {
            match snapshot.user_email_idx.get(new_email) {
                Some(&owner) if owner != id => return Err(StoreError::AlreadyExists),
                _ => {}
            }
            let auth = snapshot.users.get_mut(&id).ok_or(StoreError::NotFound)?;
            snapshot.user_email_idx.remove(&auth.user.email);
            auth.user.email = new_email.to_string();
            auth.password = new_password_digest.to_string();
            snapshot.user_email_idx.insert(new_email.to_string(), id);
            Ok(auth.user.clone())
        })
    }

    /// Set the upgraded flag. Idempotent: re-upgrading succeeds silently.
    pub fn upgrade_user(&self, id: i64) -> StoreResult<()> {
        self.mutate(|snapshot| {
            let auth = snapshot.users.get_mut(&id).ok_or(StoreError::NotFound)?;
            auth.user.upgraded = true;
            Ok(())
        })
    }

    /// All users, ascending by ID, digests omitted.
    pub fn list_users(&self) -> StoreResult<Vec<User>> {
        self.read(|snapshot| {
            let mut users: Vec<User> = snapshot
                .users
                .values()
                .map(|auth| auth.user.clone())
                .collect();
            users.sort_by_key(|user| user.id);
            Ok(users)
        })
    }
}
