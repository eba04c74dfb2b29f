//! In-memory implementations of the store and identity capabilities, used
//! across the service tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::external_services::identity::{IdentityProvider, IdentityUser, ProfileMetadata};
use crate::models::{follows::Follow, posts::Post};
use crate::repositories::{follow_repository::FollowStore, post_repository::PostStore};
use crate::utils::errors::app_error::AppError;

#[derive(Default)]
pub struct MemoryFollowStore {
    follows: Mutex<Vec<Follow>>,
}

impl MemoryFollowStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FollowStore for MemoryFollowStore {
    async fn count_followers(&self, user_id: &str) -> Result<i64, AppError> {
        let follows = self.follows.lock().await;
        Ok(follows.iter().filter(|f| f.following_id == user_id).count() as i64)
    }

    async fn count_following(&self, user_id: &str) -> Result<i64, AppError> {
        let follows = self.follows.lock().await;
        Ok(follows.iter().filter(|f| f.follower_id == user_id).count() as i64)
    }

    async fn find_follow(
        &self,
        follower_id: &str,
        following_id: &str,
    ) -> Result<Option<Follow>, AppError> {
        let follows = self.follows.lock().await;
        Ok(follows
            .iter()
            .find(|f| f.follower_id == follower_id && f.following_id == following_id)
            .cloned())
    }

    async fn insert_follow(
        &self,
        follower_id: &str,
        following_id: &str,
    ) -> Result<Follow, AppError> {
        // Check and insert under one lock, mirroring the unique index the
        // Postgres store enforces.
        let mut follows = self.follows.lock().await;
        if follows
            .iter()
            .any(|f| f.follower_id == follower_id && f.following_id == following_id)
        {
            return Err(AppError::Conflict(
                "User is already following the other user.".to_string(),
            ));
        }

        let follow = Follow {
            id: Uuid::new_v4(),
            follower_id: follower_id.to_string(),
            following_id: following_id.to_string(),
            created_at: Utc::now(),
        };
        follows.push(follow.clone());
        Ok(follow)
    }

    async fn delete_follow(&self, id: Uuid) -> Result<Option<Follow>, AppError> {
        let mut follows = self.follows.lock().await;
        let position = follows.iter().position(|f| f.id == id);
        Ok(position.map(|i| follows.remove(i)))
    }

    async fn list_following_ids(&self, follower_id: &str) -> Result<Vec<String>, AppError> {
        let follows = self.follows.lock().await;
        Ok(follows
            .iter()
            .filter(|f| f.follower_id == follower_id)
            .map(|f| f.following_id.clone())
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryPostStore {
    posts: Mutex<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert_post(&self, author_id: &str, content: &str) -> Result<Post, AppError> {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            author_id: author_id.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.posts.lock().await.push(post.clone());
        Ok(post)
    }

    async fn list_by_author(&self, author_id: &str) -> Result<Vec<Post>, AppError> {
        self.list_by_authors(&[author_id.to_string()]).await
    }

    async fn list_by_authors(&self, author_ids: &[String]) -> Result<Vec<Post>, AppError> {
        let posts = self.posts.lock().await;
        // Reverse insertion order first so timestamp ties stay newest-first
        // through the stable sort.
        let mut matched: Vec<Post> = posts
            .iter()
            .rev()
            .filter(|p| author_ids.contains(&p.author_id))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }
}

pub struct FakeIdentityProvider {
    users: Mutex<HashMap<String, IdentityUser>>,
}

impl FakeIdentityProvider {
    pub fn with_users(ids: &[&str]) -> Self {
        let users = ids
            .iter()
            .map(|id| {
                (
                    id.to_string(),
                    IdentityUser {
                        id: id.to_string(),
                        first_name: Some(format!("First-{}", id)),
                        last_name: Some(format!("Last-{}", id)),
                        display_name: None,
                        image_url: Some(format!("https://img.example/{}", id)),
                        public_metadata: ProfileMetadata::default(),
                    },
                )
            })
            .collect();
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn get_user(&self, id: &str) -> Result<Option<IdentityUser>, AppError> {
        Ok(self.users.lock().await.get(id).cloned())
    }

    async fn get_users(&self, ids: &[String]) -> Result<Vec<IdentityUser>, AppError> {
        let users = self.users.lock().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn update_public_metadata(
        &self,
        id: &str,
        metadata: ProfileMetadata,
    ) -> Result<IdentityUser, AppError> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(id)
            .ok_or_else(|| AppError::UpstreamFailure("unknown user".to_string()))?;
        user.public_metadata = metadata;
        Ok(user.clone())
    }
}
