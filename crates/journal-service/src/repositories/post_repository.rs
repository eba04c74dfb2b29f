use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::models::posts::Post;
use crate::utils::errors::app_error::AppError;

use super::bounded;

/// Storage capability for journal posts.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert_post(&self, author_id: &str, content: &str) -> Result<Post, AppError>;
    /// The author's posts, newest first.
    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Post>, AppError>;
    /// Posts by any of the given authors, newest first.
    async fn list_by_authors(&self, author_ids: &[String]) -> Result<Vec<Post>, AppError>;
}

pub struct PgPostRepository {
    db: Arc<PgPool>,
    timeout: Duration,
}

impl PgPostRepository {
    pub fn new(db: Arc<PgPool>, timeout: Duration) -> Self {
        PgPostRepository { db, timeout }
    }
}

#[async_trait]
impl PostStore for PgPostRepository {
    async fn insert_post(&self, author_id: &str, content: &str) -> Result<Post, AppError> {
        bounded("insert post", self.timeout, async {
            let now = Utc::now();
            sqlx::query_as::<_, Post>(
                "INSERT INTO posts (id, author_id, content, created_at, updated_at) \
                 VALUES ($1, $2, $3, $4, $4) RETURNING *",
            )
            .bind(Uuid::new_v4())
            .bind(author_id)
            .bind(content)
            .bind(now)
            .fetch_one(self.db.as_ref())
            .await
            .map_err(AppError::from)
        })
        .await
    }

    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Post>, AppError> {
        bounded("list posts by author", self.timeout, async {
            sqlx::query_as::<_, Post>(
                "SELECT * FROM posts WHERE author_id = $1 ORDER BY created_at DESC",
            )
            .bind(author_id)
            .fetch_all(self.db.as_ref())
            .await
            .map_err(AppError::from)
        })
        .await
    }

    async fn list_by_authors(&self, author_ids: &[String]) -> Result<Vec<Post>, AppError> {
        bounded("list posts by authors", self.timeout, async {
            sqlx::query_as::<_, Post>(
                "SELECT * FROM posts WHERE author_id = ANY($1) ORDER BY created_at DESC",
            )
            .bind(author_ids)
            .fetch_all(self.db.as_ref())
            .await
            .map_err(AppError::from)
        })
        .await
    }
}
