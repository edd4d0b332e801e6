//! In-memory local repository implementation.
//!
//! All data lives in a `Vec<Post>` behind a single `RwLock`, which is the
//! only concurrency boundary in the system: every operation takes the lock
//! once and completes inside it. Insertion order is preserved; creation
//! appends, deletion removes by id, update mutates in place.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::db::models::Post;
use crate::db::repository::{PostRepository, RepositoryError, RepositoryResult, UpdatedFields};

/// In-memory post registry.
///
/// Cloning is cheap and shares the underlying storage, so a single instance
/// can be handed to the HTTP state and to tests alike.
#[derive(Clone, Default)]
pub struct LocalRepository {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl LocalRepository {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the given posts, preserving
    /// their order and ids.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(RwLock::new(posts)),
        }
    }

    /// Number of posts currently stored.
    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.read().is_empty()
    }
}

#[async_trait::async_trait]
impl PostRepository for LocalRepository {
    async fn list_posts(&self) -> RepositoryResult<Vec<Post>> {
        Ok(self.posts.read().clone())
    }

    async fn create_post(&self, title: String, content: String) -> RepositoryResult<Post> {
        let mut posts = self.posts.write();
        // Ids are assigned as count + 1 for wire compatibility with the
        // original service. After a delete this can collide with a surviving
        // id; the original has the same behavior.
        let post = Post {
            id: posts.len() as i64 + 1,
            title,
            content,
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn delete_post(&self, post_id: i64) -> RepositoryResult<()> {
        let mut posts = self.posts.write();
        match posts.iter().position(|post| post.id == post_id) {
            Some(index) => {
                posts.remove(index);
                Ok(())
            }
            None => Err(RepositoryError::NotFound(post_id)),
        }
    }

    async fn update_post(
        &self,
        post_id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> RepositoryResult<UpdatedFields> {
        let mut posts = self.posts.write();
        let post = posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or(RepositoryError::NotFound(post_id))?;

        // Checked only once a post matched: "not found" wins over "no change".
        if title.is_none() && content.is_none() {
            return Err(RepositoryError::NoChange);
        }

        let mut updated = UpdatedFields {
            title: false,
            content: false,
        };
        if let Some(title) = title {
            post.title = title;
            updated.title = true;
        }
        if let Some(content) = content {
            post.content = content;
            updated.content = true;
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::seed_posts;

    #[tokio::test]
    async fn create_assigns_count_plus_one() {
        let repo = LocalRepository::with_posts(seed_posts());
        let post = repo
            .create_post("Third".into(), "Body".into())
            .await
            .unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn delete_missing_id_leaves_registry_untouched() {
        let repo = LocalRepository::with_posts(seed_posts());
        let err = repo.delete_post(9999).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(9999)));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn update_not_found_beats_no_change() {
        let repo = LocalRepository::with_posts(seed_posts());
        let err = repo.update_post(9999, None, None).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(9999)));
    }

    #[tokio::test]
    async fn update_mutates_in_place() {
        let repo = LocalRepository::with_posts(seed_posts());
        let updated = repo
            .update_post(1, None, Some("New body".into()))
            .await
            .unwrap();
        assert!(!updated.title);
        assert!(updated.content);

        let posts = repo.list_posts().await.unwrap();
        assert_eq!(posts[0].title, "First post");
        assert_eq!(posts[0].content, "New body");
    }
}
