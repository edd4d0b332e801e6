//! High-level service layer over the post registry.
//!
//! Repository-agnostic operations that work with any [`PostRepository`]
//! implementation. The storage backend owns the registry lock and the
//! in-place mutations; this layer owns everything computed over a snapshot
//! (sorting, searching) plus the presence normalization shared by the
//! handlers.

use tracing::{debug, info};

use super::models::Post;
use super::repository::{PostRepository, RepositoryResult, UpdatedFields};

/// Field a list request may sort by. Any other requested value means
/// "no sort".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    /// Parse the `sort` query value. Unrecognized values (including case
    /// variants — the original matched exactly) and absence mean no sort.
    pub fn from_query(value: Option<&str>) -> Option<Self> {
        match value {
            Some("title") => Some(Self::Title),
            Some("content") => Some(Self::Content),
            _ => None,
        }
    }
}

/// Sort direction for list requests. Defaults to ascending; only the exact
/// word `desc` (any casing) flips it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some(direction) if direction.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// Normalize an optional request field: empty strings count as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Return a snapshot of the registry, sorted when requested.
///
/// Sorting is stable and compares the lowercased field value, so posts with
/// equal keys keep their registry order in both directions.
pub async fn list_posts(
    repo: &dyn PostRepository,
    sort: Option<SortField>,
    direction: SortDirection,
) -> RepositoryResult<Vec<Post>> {
    let mut posts = repo.list_posts().await?;

    if let Some(field) = sort {
        let key = |post: &Post| match field {
            SortField::Title => post.title.to_lowercase(),
            SortField::Content => post.content.to_lowercase(),
        };
        match direction {
            SortDirection::Asc => posts.sort_by(|a, b| key(a).cmp(&key(b))),
            SortDirection::Desc => posts.sort_by(|a, b| key(b).cmp(&key(a))),
        }
    }

    debug!(count = posts.len(), ?sort, ?direction, "listed posts");
    Ok(posts)
}

/// Append a new post. Presence validation happens at the HTTP boundary;
/// both fields are non-empty here.
pub async fn create_post(
    repo: &dyn PostRepository,
    title: String,
    content: String,
) -> RepositoryResult<Post> {
    let post = repo.create_post(title, content).await?;
    info!(id = post.id, "created post");
    Ok(post)
}

/// Remove the first post with the given id.
pub async fn delete_post(repo: &dyn PostRepository, post_id: i64) -> RepositoryResult<()> {
    repo.delete_post(post_id).await?;
    info!(id = post_id, "deleted post");
    Ok(())
}

/// Overwrite the provided fields of the matching post in place.
pub async fn update_post(
    repo: &dyn PostRepository,
    post_id: i64,
    title: Option<String>,
    content: Option<String>,
) -> RepositoryResult<UpdatedFields> {
    let updated = repo.update_post(post_id, title, content).await?;
    info!(
        id = post_id,
        title = updated.title,
        content = updated.content,
        "updated post"
    );
    Ok(updated)
}

/// Return every post whose title contains `title` or whose content contains
/// `content`, case-insensitively, in registry order. A post matching both
/// criteria appears once. At least one query is provided by the caller.
pub async fn search_posts(
    repo: &dyn PostRepository,
    title: Option<&str>,
    content: Option<&str>,
) -> RepositoryResult<Vec<Post>> {
    let title = title.map(str::to_lowercase);
    let content = content.map(str::to_lowercase);

    let matches: Vec<Post> = repo
        .list_posts()
        .await?
        .into_iter()
        .filter(|post| {
            let title_match = title
                .as_deref()
                .is_some_and(|needle| post.title.to_lowercase().contains(needle));
            let content_match = content
                .as_deref()
                .is_some_and(|needle| post.content.to_lowercase().contains(needle));
            title_match || content_match
        })
        .collect();

    debug!(count = matches.len(), "searched posts");
    Ok(matches)
}

/// Number of posts currently in the registry, for the health endpoint.
pub async fn count_posts(repo: &dyn PostRepository) -> RepositoryResult<usize> {
    Ok(repo.list_posts().await?.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_matches_exactly() {
        assert_eq!(SortField::from_query(Some("title")), Some(SortField::Title));
        assert_eq!(
            SortField::from_query(Some("content")),
            Some(SortField::Content)
        );
        assert_eq!(SortField::from_query(Some("Title")), None);
        assert_eq!(SortField::from_query(Some("id")), None);
        assert_eq!(SortField::from_query(None), None);
    }

    #[test]
    fn direction_only_desc_flips() {
        assert_eq!(SortDirection::from_query(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::from_query(Some("DESC")), SortDirection::Desc);
        assert_eq!(SortDirection::from_query(Some("descending")), SortDirection::Asc);
        assert_eq!(SortDirection::from_query(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::from_query(None), SortDirection::Asc);
    }

    #[test]
    fn empty_strings_are_absent() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".to_string()));
    }
}
