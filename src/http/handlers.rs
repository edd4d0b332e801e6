//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one endpoint: it parses the request, runs the
//! matching service-layer operation against the shared registry, and
//! serializes the response. Every handler is a single synchronous pass over
//! the registry with no multi-step protocol.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreatePostRequest, DeleteResponse, HealthResponse, ListQuery, SearchQuery, UpdatePostRequest,
    UpdateResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::models::Post;
use crate::db::services::{self as db_services, non_empty, SortDirection, SortField};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Liveness probe reporting the registry size.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let posts = db_services::count_posts(state.repository.as_ref()).await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        posts,
    }))
}

/// GET /api/posts
///
/// List all posts, optionally sorted by `sort` (`title`/`content`) in
/// `direction` (`asc` default, `desc` case-insensitively). Always succeeds.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HandlerResult<Vec<Post>> {
    let sort = SortField::from_query(query.sort.as_deref());
    let direction = SortDirection::from_query(query.direction.as_deref());

    let posts = db_services::list_posts(state.repository.as_ref(), sort, direction).await?;
    Ok(Json(posts))
}

/// POST /api/posts
///
/// Create a post from `{title, content}`. Both fields must be present and
/// non-empty; on success returns the created post with status 201.
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let (Some(title), Some(content)) = (non_empty(request.title), non_empty(request.content))
    else {
        return Err(AppError::MissingField);
    };

    let post = db_services::create_post(state.repository.as_ref(), title, content).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// DELETE /api/posts/{post_id}
///
/// Remove the first post with the given id; 404 if none matches.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> HandlerResult<DeleteResponse> {
    db_services::delete_post(state.repository.as_ref(), post_id).await?;

    Ok(Json(DeleteResponse {
        success: format!("Post with id ({post_id}) has been deleted successfully."),
    }))
}

/// PUT /api/posts/{post_id}
///
/// Overwrite the provided fields of the matching post. 404 if the id does
/// not match; 400 if it does but both fields are absent or empty. The
/// success message names exactly the fields that changed.
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Json(request): Json<UpdatePostRequest>,
) -> HandlerResult<UpdateResponse> {
    let title = non_empty(request.title);
    let content = non_empty(request.content);

    let updated =
        db_services::update_post(state.repository.as_ref(), post_id, title, content).await?;

    // At least one field changed on the success path.
    let changed = match (updated.title, updated.content) {
        (true, true) => "title and content",
        (true, false) => "title",
        _ => "content",
    };

    Ok(Json(UpdateResponse {
        message: format!("{changed} of post ({post_id}) was updated."),
    }))
}

/// GET /api/posts/search
///
/// Case-insensitive substring search over titles and contents. At least one
/// of `title`/`content` must be provided; a post matching both appears once,
/// in registry order.
pub async fn search_posts(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> HandlerResult<Vec<Post>> {
    let title = non_empty(query.title);
    let content = non_empty(query.content);

    if title.is_none() && content.is_none() {
        return Err(AppError::MissingQuery);
    }

    let posts =
        db_services::search_posts(state.repository.as_ref(), title.as_deref(), content.as_deref())
            .await?;
    Ok(Json(posts))
}
