use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::models::follows::Follow;
use crate::utils::errors::app_error::AppError;

use super::bounded;

/// Storage capability for follow edges. Injected into the services so tests
/// can substitute an in-memory implementation.
#[async_trait]
pub trait FollowStore: Send + Sync {
    /// Number of edges pointing at `user_id` (people who follow them).
    async fn count_followers(&self, user_id: &str) -> Result<i64, AppError>;
    /// Number of edges originating from `user_id` (people they follow).
    async fn count_following(&self, user_id: &str) -> Result<i64, AppError>;
    async fn find_follow(
        &self,
        follower_id: &str,
        following_id: &str,
    ) -> Result<Option<Follow>, AppError>;
    /// Inserts a new edge. A uniqueness violation on the
    /// `(follower_id, following_id)` pair surfaces as `AppError::Conflict`.
    async fn insert_follow(
        &self,
        follower_id: &str,
        following_id: &str,
    ) -> Result<Follow, AppError>;
    /// Deletes an edge by id, returning the prior row state, or `None` if the
    /// row was already gone.
    async fn delete_follow(&self, id: Uuid) -> Result<Option<Follow>, AppError>;
    async fn list_following_ids(&self, follower_id: &str) -> Result<Vec<String>, AppError>;
}

pub struct PgFollowRepository {
    db: Arc<PgPool>,
    timeout: Duration,
}

impl PgFollowRepository {
    pub fn new(db: Arc<PgPool>, timeout: Duration) -> Self {
        PgFollowRepository { db, timeout }
    }
}

#[async_trait]
impl FollowStore for PgFollowRepository {
    async fn count_followers(&self, user_id: &str) -> Result<i64, AppError> {
        bounded("count followers", self.timeout, async {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows WHERE following_id = $1")
                .bind(user_id)
                .fetch_one(self.db.as_ref())
                .await
                .map_err(AppError::from)
        })
        .await
    }

    async fn count_following(&self, user_id: &str) -> Result<i64, AppError> {
        bounded("count following", self.timeout, async {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows WHERE follower_id = $1")
                .bind(user_id)
                .fetch_one(self.db.as_ref())
                .await
                .map_err(AppError::from)
        })
        .await
    }

    async fn find_follow(
        &self,
        follower_id: &str,
        following_id: &str,
    ) -> Result<Option<Follow>, AppError> {
        bounded("find follow", self.timeout, async {
            sqlx::query_as::<_, Follow>(
                "SELECT * FROM follows WHERE follower_id = $1 AND following_id = $2",
            )
            .bind(follower_id)
            .bind(following_id)
            .fetch_optional(self.db.as_ref())
            .await
            .map_err(AppError::from)
        })
        .await
    }

    async fn insert_follow(
        &self,
        follower_id: &str,
        following_id: &str,
    ) -> Result<Follow, AppError> {
        bounded("insert follow", self.timeout, async {
            sqlx::query_as::<_, Follow>(
                "INSERT INTO follows (id, follower_id, following_id, created_at) \
                 VALUES ($1, $2, $3, $4) RETURNING *",
            )
            .bind(Uuid::new_v4())
            .bind(follower_id)
            .bind(following_id)
            .bind(Utc::now())
            .fetch_one(self.db.as_ref())
            .await
            .map_err(|e| match &e {
                // Lost check-then-create race: the unique index on the pair
                // is the authoritative guard, report it as the same conflict.
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AppError::Conflict("User is already following the other user.".to_string())
                }
                _ => AppError::DatabaseError(e),
            })
        })
        .await
    }

    async fn delete_follow(&self, id: Uuid) -> Result<Option<Follow>, AppError> {
        bounded("delete follow", self.timeout, async {
            sqlx::query_as::<_, Follow>("DELETE FROM follows WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(self.db.as_ref())
                .await
                .map_err(AppError::from)
        })
        .await
    }

    async fn list_following_ids(&self, follower_id: &str) -> Result<Vec<String>, AppError> {
        bounded("list following ids", self.timeout, async {
            sqlx::query_scalar::<_, String>(
                "SELECT following_id FROM follows WHERE follower_id = $1",
            )
            .bind(follower_id)
            .fetch_all(self.db.as_ref())
            .await
            .map_err(AppError::from)
        })
        .await
    }
}
