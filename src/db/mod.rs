//! Post storage module.
//!
//! Follows the repository pattern so the storage backend can be swapped
//! without touching the HTTP layer:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  HTTP layer (axum handlers)                 │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  Service layer (services.rs)                │
//! │  - sort / search over snapshots             │
//! │  - presence normalization                   │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  PostRepository trait (repository.rs)       │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  LocalRepository (repositories/local.rs)    │
//! │  in-memory Vec<Post> behind one RwLock      │
//! └─────────────────────────────────────────────┘
//! ```

pub mod models;
pub mod repositories;
pub mod repository;
pub mod services;

pub use models::{seed_posts, Post};
pub use repositories::LocalRepository;
pub use repository::{PostRepository, RepositoryError, RepositoryResult, UpdatedFields};
