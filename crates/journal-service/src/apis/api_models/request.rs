use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
}

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDescriptionRequest {
    pub description: String,
}
