use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    apis::api_models::response::FeedEntryResponse,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

use super::middlewares::auth::AuthUser;

const TAG: &str = "feed";

/// Get the caller's feed: posts by followed users, newest first
#[utoipa::path(
    get,
    tag = TAG,
    path = "/",
    operation_id = "getFeed",
    responses(
        (status = 200, description = "Feed entries, newest first", body = Vec<FeedEntryResponse>),
        (status = 401, description = "Missing caller identity", body = ErrorPayload),
        (status = 502, description = "Identity provider failure", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("x-user-id" = String, Header, description = "Authenticated caller id")
    )
)]
pub(super) async fn get_feed(
    State(app_state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<Vec<FeedEntryResponse>>), AppError> {
    let feed = app_state.feed_service.get_feed(&auth.user_id).await?;
    Ok((StatusCode::OK, Json(feed)))
}
