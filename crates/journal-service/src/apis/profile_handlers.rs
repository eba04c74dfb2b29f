use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    models::users::IdentityUserResponse,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

use super::{api_models::request::UpdateDescriptionRequest, middlewares::auth::AuthUser};

const TAG: &str = "profiles";

/// Update the caller's profile description
#[utoipa::path(
    patch,
    tag = TAG,
    path = "/description",
    operation_id = "updateDescription",
    responses(
        (status = 200, description = "Description updated successfully", body = IdentityUserResponse),
        (status = 400, description = "Description too long", body = ErrorPayload),
        (status = 401, description = "Missing caller identity", body = ErrorPayload),
        (status = 502, description = "Identity provider failure", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("x-user-id" = String, Header, description = "Authenticated caller id")
    ),
    request_body = UpdateDescriptionRequest
)]
pub(super) async fn update_description(
    State(app_state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(body): Json<UpdateDescriptionRequest>,
) -> Result<(StatusCode, Json<IdentityUserResponse>), AppError> {
    let user = app_state
        .profile_service
        .update_description(&auth.user_id, &body.description)
        .await?;
    Ok((StatusCode::OK, Json(user.into())))
}
