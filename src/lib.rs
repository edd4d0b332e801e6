//! # Posts Backend
//!
//! A small REST service for managing blog posts held in process memory.
//!
//! The crate exposes five operations over a single in-memory registry:
//! list (with optional sorting), create, delete, update, and search. There
//! is no persistence; the registry starts from two seed posts and lives for
//! the process lifetime.
//!
//! ## Architecture
//!
//! - [`db`]: post model, repository trait, in-memory implementation, and
//!   the service layer the handlers call
//! - [`http`]: axum router, handlers, DTOs, and error mapping
//!
//! The registry is owned by [`http::AppState`] and passed into handlers
//! explicitly; all access goes through one lock.

pub mod db;
pub mod http;
