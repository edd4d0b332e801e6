//! Data models for stored posts.

use serde::{Deserialize, Serialize};

/// A single blog post record as stored in the registry and serialized on the
/// wire: `{"id": int, "title": string, "content": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, assigned at creation time.
    pub id: i64,
    /// Post title, non-empty at creation.
    pub title: String,
    /// Post body, non-empty at creation.
    pub content: String,
}

impl Post {
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The two posts present at process start.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(1, "First post", "This is the first post."),
        Post::new(2, "Second post", "This is the second post."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_shape() {
        let posts = seed_posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].title, "First post");
        assert_eq!(posts[1].id, 2);
        assert_eq!(posts[1].content, "This is the second post.");
    }

    #[test]
    fn post_json_shape() {
        let post = Post::new(1, "Title", "Body");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "Title", "content": "Body"})
        );
    }
}
