use axum::{http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::external_services::identity::IdentityUser;

/// Identity-provider-owned user attributes, as exposed over this API.
#[derive(Serialize, Deserialize, ToSchema, Clone, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUserResponse {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl From<IdentityUser> for IdentityUserResponse {
    fn from(user: IdentityUser) -> Self {
        IdentityUserResponse {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            display_name: user.display_name,
            image_url: user.image_url,
            description: user.public_metadata.description,
        }
    }
}

impl IntoResponse for IdentityUserResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
