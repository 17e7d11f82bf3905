//! Post operations.
//!
//! Posts are immutable once created; the only mutations are creation and
//! deletion. Authorization (author match on delete) is the caller's concern,
//! the store enforces existence only.

use crate::errors::{StoreError, StoreResult};
use crate::snapshot::Post;

use super::DocumentStore;

impl DocumentStore {
    /// Create a post with the next available ID.
    pub fn create_post(&self, body: &str, author_id: i64) -> StoreResult<Post> {
        self.mutate(|snapshot| {
            let post = Post {
                id: snapshot.next_post_id(),
                author_id,
                body: body.to_string(),
            };
            snapshot.posts.insert(post.id, post.clone());
            Ok(post)
        })
    }

    /// Look up a post by ID.
    pub fn get_post(&self, id: i64) -> StoreResult<Post> {
        self.read(|snapshot| snapshot.posts.get(&id).cloned().ok_or(StoreError::NotFound))
    }

    /// All posts, ascending by ID.
    ///
    /// The sort is explicit; map iteration order is never relied upon.
    pub fn list_posts(&self) -> StoreResult<Vec<Post>> {
        self.read(|snapshot| {
            let mut posts: Vec<Post> = snapshot.posts.values().cloned().collect();
            posts.sort_by_key(|post| post.id);
            Ok(posts)
        })
    }

    /// Delete a post. `NotFound` if it does not exist.
    pub fn delete_post(&self, id: i64) -> StoreResult<()> {
        self.mutate(|snapshot| {
            snapshot
                .posts
                .remove(&id)
                .map(|_| ())
                .ok_or(StoreError::NotFound)
        })
    }
}
