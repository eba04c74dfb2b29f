use std::sync::Arc;

use tracing::info;

use crate::models::posts::Post;
use crate::repositories::post_repository::PostStore;
use crate::utils::errors::app_error::AppError;

pub const MAX_POST_LENGTH: usize = 5000;

#[derive(Clone)]
pub struct PostService {
    post_store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(post_store: Arc<dyn PostStore>) -> Self {
        Self { post_store }
    }

    pub async fn create_post(&self, user_id: &str, content: &str) -> Result<Post, AppError> {
        if content.is_empty() {
            return Err(AppError::BadRequest(
                "Post content cannot be empty".to_string(),
            ));
        }
        if content.chars().count() > MAX_POST_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Post content cannot exceed {} characters",
                MAX_POST_LENGTH
            )));
        }

        let post = self.post_store.insert_post(user_id, content).await?;
        info!("User {} created post {}", user_id, post.id);
        Ok(post)
    }

    pub async fn list_posts(&self, user_id: &str) -> Result<Vec<Post>, AppError> {
        self.post_store.list_by_author(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryPostStore;
    use rstest::rstest;

    fn service() -> PostService {
        PostService::new(Arc::new(MemoryPostStore::new()))
    }

    #[tokio::test]
    async fn create_post_persists_content_for_author() {
        let service = service();

        let post = service.create_post("u1", "Dear journal").await.unwrap();
        assert_eq!(post.author_id, "u1");
        assert_eq!(post.content, "Dear journal");
        assert_eq!(post.created_at, post.updated_at);

        let posts = service.list_posts("u1").await.unwrap();
        assert_eq!(posts, vec![post]);
    }

    #[rstest]
    #[case::empty("".to_string())]
    #[case::too_long("x".repeat(MAX_POST_LENGTH + 1))]
    #[tokio::test]
    async fn invalid_content_is_rejected(#[case] content: String) {
        let service = service();

        let err = service.create_post("u1", &content).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(service.list_posts("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn content_at_max_length_is_accepted() {
        let service = service();

        let content = "x".repeat(MAX_POST_LENGTH);
        let post = service.create_post("u1", &content).await.unwrap();
        assert_eq!(post.content.chars().count(), MAX_POST_LENGTH);
    }

    #[tokio::test]
    async fn list_posts_returns_newest_first() {
        let service = service();

        service.create_post("u1", "first").await.unwrap();
        service.create_post("u1", "second").await.unwrap();
        service.create_post("u2", "other author").await.unwrap();

        let posts = service.list_posts("u1").await.unwrap();
        let contents: Vec<&str> = posts.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["second", "first"]);
    }
}
