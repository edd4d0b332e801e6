//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies model the loosely-typed payloads of the wire protocol as
//! explicit structures with optional fields; presence is validated in the
//! handlers before anything touches the registry. Stored posts serialize
//! directly, so there is no separate response DTO for them.

use serde::{Deserialize, Serialize};

/// Query parameters for the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListQuery {
    /// Field to sort by (`title` or `content`); anything else means no sort.
    #[serde(default)]
    pub sort: Option<String>,
    /// Sort direction (`asc` or `desc`), default ascending.
    #[serde(default)]
    pub direction: Option<String>,
}

/// Query parameters for the search endpoint. At least one must be present
/// and non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Request body for creating a post. Both fields are required on the wire;
/// they are optional here so absence reports the protocol's 400 rather than
/// a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Request body for updating a post. Absent or empty fields are left
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Response for a successful deletion: `{"success": <message>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: String,
}

/// Response for a successful update: `{"message": <message>}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Number of posts currently in the registry.
    pub posts: usize,
}
