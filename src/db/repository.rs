//! Repository trait for abstracting post storage.
//!
//! The trait defines the storage-level operations on the post registry,
//! allowing different implementations (in-memory, or a real database later)
//! to be swapped via dependency injection. Business logic that does not need
//! the registry lock (sorting, searching over a snapshot) lives in
//! [`super::services`] instead.

use async_trait::async_trait;

use super::models::Post;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No post with the given id exists in the registry.
    #[error("post with id ({0}) does not exist")]
    NotFound(i64),

    /// An update carried no fields to apply.
    #[error("nothing was changed")]
    NoChange,

    /// Anything else the storage backend may fail with.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Which fields an update actually overwrote. At least one of the two is
/// always true on the success path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdatedFields {
    pub title: bool,
    pub content: bool,
}

/// Storage operations on the post registry.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; every method is expected to take a
/// single mutual-exclusion boundary around the registry and complete
/// synchronously inside it.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Return a snapshot of the registry in insertion order.
    async fn list_posts(&self) -> RepositoryResult<Vec<Post>>;

    /// Append a new post, assigning its id, and return it.
    ///
    /// Callers are responsible for presence validation; `title` and
    /// `content` must be non-empty by the time they reach the repository.
    async fn create_post(&self, title: String, content: String) -> RepositoryResult<Post>;

    /// Remove the first post whose id equals `post_id`.
    ///
    /// Fails with [`RepositoryError::NotFound`] without mutating the
    /// registry when no post matches.
    async fn delete_post(&self, post_id: i64) -> RepositoryResult<()>;

    /// Overwrite the provided fields of the first post whose id equals
    /// `post_id`, in place.
    ///
    /// `None` fields are left untouched. Fails with
    /// [`RepositoryError::NotFound`] when no post matches, and with
    /// [`RepositoryError::NoChange`] when a post matches but both fields are
    /// `None` — the id match is checked first, so the two failures are
    /// mutually exclusive.
    async fn update_post(
        &self,
        post_id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> RepositoryResult<UpdatedFields>;
}
