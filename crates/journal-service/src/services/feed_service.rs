use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::apis::api_models::response::FeedEntryResponse;
use crate::external_services::identity::{IdentityProvider, IdentityUser};
use crate::repositories::{follow_repository::FollowStore, post_repository::PostStore};
use crate::utils::errors::app_error::AppError;

/// Assembles the caller's feed: posts by followed authors, newest first,
/// joined with the authors' identity-provider attributes.
#[derive(Clone)]
pub struct FeedService {
    follow_store: Arc<dyn FollowStore>,
    post_store: Arc<dyn PostStore>,
    identity_service: Arc<dyn IdentityProvider>,
}

impl FeedService {
    pub fn new(
        follow_store: Arc<dyn FollowStore>,
        post_store: Arc<dyn PostStore>,
        identity_service: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            follow_store,
            post_store,
            identity_service,
        }
    }

    pub async fn get_feed(&self, user_id: &str) -> Result<Vec<FeedEntryResponse>, AppError> {
        let following = self.follow_store.list_following_ids(user_id).await?;
        if following.is_empty() {
            debug!("User {} follows nobody, feed is empty", user_id);
            return Ok(vec![]);
        }

        let posts = self.post_store.list_by_authors(&following).await?;

        let mut author_ids: Vec<String> = posts.iter().map(|p| p.author_id.clone()).collect();
        author_ids.sort();
        author_ids.dedup();

        let authors: HashMap<String, IdentityUser> = self
            .identity_service
            .get_users(&author_ids)
            .await?
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();

        let feed = posts
            .into_iter()
            .filter_map(|post| match authors.get(&post.author_id) {
                Some(user) => Some(FeedEntryResponse {
                    user: user.clone().into(),
                    post: post.into(),
                }),
                None => {
                    warn!(
                        "Skipping post {}: author {} unknown to identity provider",
                        post.id, post.author_id
                    );
                    None
                }
            })
            .collect();

        Ok(feed)
    }
}
