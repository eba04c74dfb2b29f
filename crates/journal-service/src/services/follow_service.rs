use std::sync::Arc;

use tracing::info;

use crate::models::follows::Follow;
use crate::repositories::follow_repository::FollowStore;
use crate::utils::errors::app_error::AppError;

/// Maintains the directed follow relation between users. Every operation acts
/// on behalf of exactly one authenticated caller, supplied per call.
#[derive(Clone)]
pub struct FollowService {
    follow_store: Arc<dyn FollowStore>,
}

impl FollowService {
    pub fn new(follow_store: Arc<dyn FollowStore>) -> Self {
        Self { follow_store }
    }

    pub async fn get_follower_count(&self, user_id: &str) -> Result<i64, AppError> {
        self.follow_store.count_followers(user_id).await
    }

    pub async fn get_following_count(&self, user_id: &str) -> Result<i64, AppError> {
        self.follow_store.count_following(user_id).await
    }

    /// Whether the caller follows `following_user_id`. An unknown target is
    /// simply not followed; no existence check against the identity provider.
    pub async fn is_following(
        &self,
        user_id: &str,
        following_user_id: &str,
    ) -> Result<bool, AppError> {
        if following_user_id.is_empty() {
            return Err(AppError::BadRequest(
                "Following user id cannot be empty".to_string(),
            ));
        }

        let existing = self
            .follow_store
            .find_follow(user_id, following_user_id)
            .await?;
        Ok(existing.is_some())
    }

    pub async fn follow_user(
        &self,
        user_id: &str,
        following_user_id: &str,
    ) -> Result<Follow, AppError> {
        if following_user_id.is_empty() {
            return Err(AppError::BadRequest(
                "Following user id cannot be empty".to_string(),
            ));
        }
        if following_user_id == user_id {
            return Err(AppError::BadRequest(
                "Users cannot follow themselves".to_string(),
            ));
        }

        let existing = self
            .follow_store
            .find_follow(user_id, following_user_id)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(
                "User is already following the other user.".to_string(),
            ));
        }

        // The store's unique index still guards the pair; a concurrent insert
        // that wins this race comes back as the same Conflict.
        let follow = self
            .follow_store
            .insert_follow(user_id, following_user_id)
            .await?;

        info!("User {} followed user {}", user_id, following_user_id);
        Ok(follow)
    }

    pub async fn unfollow_user(
        &self,
        user_id: &str,
        following_user_id: &str,
    ) -> Result<Follow, AppError> {
        let existing = self
            .follow_store
            .find_follow(user_id, following_user_id)
            .await?
            .ok_or_else(|| {
                AppError::Conflict("User is not following the other user.".to_string())
            })?;

        let deleted = self
            .follow_store
            .delete_follow(existing.id)
            .await?
            .ok_or_else(|| {
                AppError::Conflict("User is not following the other user.".to_string())
            })?;

        info!("User {} unfollowed user {}", user_id, following_user_id);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryFollowStore;
    use futures::future::join_all;
    use rstest::rstest;

    fn service() -> FollowService {
        FollowService::new(Arc::new(MemoryFollowStore::new()))
    }

    #[tokio::test]
    async fn initial_state_is_not_following() {
        let service = service();

        assert!(!service.is_following("u1", "u2").await.unwrap());
        assert_eq!(service.get_follower_count("u1").await.unwrap(), 0);
        assert_eq!(service.get_following_count("u1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn follow_creates_edge_and_updates_counts() {
        let service = service();

        let follow = service.follow_user("u1", "u2").await.unwrap();
        assert_eq!(follow.follower_id, "u1");
        assert_eq!(follow.following_id, "u2");

        assert!(service.is_following("u1", "u2").await.unwrap());
        assert_eq!(service.get_following_count("u1").await.unwrap(), 1);
        assert_eq!(service.get_follower_count("u2").await.unwrap(), 1);
        // The relation is directed.
        assert!(!service.is_following("u2", "u1").await.unwrap());
        assert_eq!(service.get_follower_count("u1").await.unwrap(), 0);
        assert_eq!(service.get_following_count("u2").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn second_follow_conflicts_and_leaves_state_unchanged() {
        let service = service();

        service.follow_user("u1", "u2").await.unwrap();
        let err = service.follow_user("u1", "u2").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        assert_eq!(service.get_following_count("u1").await.unwrap(), 1);
        assert_eq!(service.get_follower_count("u2").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn unfollow_when_not_following_conflicts() {
        let service = service();

        let err = service.unfollow_user("u1", "u3").await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(service.get_follower_count("u3").await.unwrap(), 0);
        assert_eq!(service.get_following_count("u1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unfollow_removes_edge_and_restores_counts() {
        let service = service();

        let created = service.follow_user("u1", "u2").await.unwrap();
        let deleted = service.unfollow_user("u1", "u2").await.unwrap();
        assert_eq!(deleted.id, created.id);

        assert!(!service.is_following("u1", "u2").await.unwrap());
        assert_eq!(service.get_following_count("u1").await.unwrap(), 0);
        assert_eq!(service.get_follower_count("u2").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn follow_unfollow_follow_cycle_leaves_single_edge() {
        let service = service();

        service.follow_user("u1", "u2").await.unwrap();
        service.unfollow_user("u1", "u2").await.unwrap();
        service.follow_user("u1", "u2").await.unwrap();

        assert!(service.is_following("u1", "u2").await.unwrap());
        assert_eq!(service.get_following_count("u1").await.unwrap(), 1);
        assert_eq!(service.get_follower_count("u2").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn self_follow_is_rejected() {
        let service = service();

        let err = service.follow_user("u1", "u1").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(service.get_following_count("u1").await.unwrap(), 0);
    }

    #[rstest]
    #[case::follow(true)]
    #[case::is_following(false)]
    #[tokio::test]
    async fn empty_target_id_is_rejected(#[case] mutate: bool) {
        let service = service();

        let err = if mutate {
            service.follow_user("u1", "").await.unwrap_err()
        } else {
            service.is_following("u1", "").await.unwrap_err()
        };
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn concurrent_follows_create_exactly_one_edge() {
        let service = Arc::new(service());

        let calls = (0..8).map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.follow_user("u1", "u2").await })
        });
        let results: Vec<_> = join_all(calls)
            .await
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        let successes = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(AppError::Conflict(_))))
            .count();
        assert_eq!(successes, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(service.get_follower_count("u2").await.unwrap(), 1);
        assert_eq!(service.get_following_count("u1").await.unwrap(), 1);
    }
}
