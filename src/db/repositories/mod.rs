//! Repository implementations module.
//!
//! Currently a single implementation of the [`PostRepository`] trait:
//! - `local`: in-memory registry used both in production and in tests.
//!
//! [`PostRepository`]: crate::db::repository::PostRepository

pub mod local;

pub use local::LocalRepository;
