//! Registry semantics tested straight on the in-memory repository.

use posts_backend::db::repositories::LocalRepository;
use posts_backend::db::repository::{PostRepository, RepositoryError};
use posts_backend::db::{seed_posts, Post};

#[tokio::test]
async fn list_returns_snapshot_not_live_view() {
    let repo = LocalRepository::with_posts(seed_posts());
    let mut snapshot = repo.list_posts().await.unwrap();
    snapshot.clear();
    assert_eq!(repo.len(), 2);
}

#[tokio::test]
async fn create_appends_at_the_end() {
    let repo = LocalRepository::with_posts(seed_posts());
    repo.create_post("Third post".into(), "Body".into())
        .await
        .unwrap();

    let posts = repo.list_posts().await.unwrap();
    assert_eq!(posts.last().unwrap().title, "Third post");
    assert_eq!(posts.last().unwrap().id, 3);
}

#[tokio::test]
async fn id_formula_is_count_plus_one_even_after_deletes() {
    // Inherited wire behavior: ids are not monotonic. Deleting post 1 and
    // creating again reuses id 2, colliding with the surviving post.
    let repo = LocalRepository::with_posts(seed_posts());
    repo.delete_post(1).await.unwrap();

    let post = repo
        .create_post("Recreated".into(), "Body".into())
        .await
        .unwrap();
    assert_eq!(post.id, 2);

    let duplicates = repo
        .list_posts()
        .await
        .unwrap()
        .iter()
        .filter(|p| p.id == 2)
        .count();
    assert_eq!(duplicates, 2);
}

#[tokio::test]
async fn delete_removes_first_match_only() {
    let posts = vec![
        Post::new(1, "a", "x"),
        Post::new(2, "b", "y"),
        Post::new(2, "c", "z"),
    ];
    let repo = LocalRepository::with_posts(posts);

    repo.delete_post(2).await.unwrap();
    let remaining = repo.list_posts().await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining[1].title, "c");
}

#[tokio::test]
async fn update_on_empty_registry_is_not_found() {
    let repo = LocalRepository::new();
    let err = repo
        .update_post(1, Some("t".into()), None)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(1)));
}

#[tokio::test]
async fn clones_share_storage() {
    let repo = LocalRepository::with_posts(seed_posts());
    let other = repo.clone();
    other.delete_post(1).await.unwrap();
    assert_eq!(repo.len(), 1);
}
