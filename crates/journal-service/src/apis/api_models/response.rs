use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{posts::PostResponse, users::IdentityUserResponse};

/// One feed entry: a post together with its author's identity attributes.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntryResponse {
    pub user: IdentityUserResponse,
    pub post: PostResponse,
}
