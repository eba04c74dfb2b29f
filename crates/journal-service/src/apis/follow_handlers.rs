use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    models::follows::FollowResponse,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

use super::middlewares::auth::AuthUser;

const TAG: &str = "follows";

/// Get the caller's follower count
#[utoipa::path(
    get,
    tag = TAG,
    path = "/follower-count",
    operation_id = "getFollowerCount",
    responses(
        (status = 200, description = "Number of users following the caller", body = i64),
        (status = 401, description = "Missing caller identity", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("x-user-id" = String, Header, description = "Authenticated caller id")
    )
)]
pub(super) async fn get_follower_count(
    State(app_state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<i64>), AppError> {
    let count = app_state
        .follow_service
        .get_follower_count(&auth.user_id)
        .await?;
    Ok((StatusCode::OK, Json(count)))
}

/// Get the caller's following count
#[utoipa::path(
    get,
    tag = TAG,
    path = "/following-count",
    operation_id = "getFollowingCount",
    responses(
        (status = 200, description = "Number of users the caller follows", body = i64),
        (status = 401, description = "Missing caller identity", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("x-user-id" = String, Header, description = "Authenticated caller id")
    )
)]
pub(super) async fn get_following_count(
    State(app_state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<i64>), AppError> {
    let count = app_state
        .follow_service
        .get_following_count(&auth.user_id)
        .await?;
    Ok((StatusCode::OK, Json(count)))
}

/// Check whether the caller follows a user
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{user_id}",
    operation_id = "isFollowingById",
    responses(
        (status = 200, description = "Whether the caller follows the user", body = bool),
        (status = 400, description = "Empty user id", body = ErrorPayload),
        (status = 401, description = "Missing caller identity", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("user_id" = String, Path, description = "User id to check"),
        ("x-user-id" = String, Header, description = "Authenticated caller id")
    )
)]
pub(super) async fn is_following_by_id(
    State(app_state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<bool>), AppError> {
    let following = app_state
        .follow_service
        .is_following(&auth.user_id, &user_id)
        .await?;
    Ok((StatusCode::OK, Json(following)))
}

/// Follow a user
#[utoipa::path(
    post,
    tag = TAG,
    path = "/{user_id}",
    operation_id = "followUser",
    responses(
        (status = 200, description = "User followed successfully", body = FollowResponse),
        (status = 400, description = "Empty or self-referential user id", body = ErrorPayload),
        (status = 401, description = "Missing caller identity", body = ErrorPayload),
        (status = 409, description = "User is already followed", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("user_id" = String, Path, description = "User id to follow"),
        ("x-user-id" = String, Header, description = "Authenticated caller id")
    )
)]
pub(super) async fn follow_user(
    State(app_state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<FollowResponse>), AppError> {
    let follow = app_state
        .follow_service
        .follow_user(&auth.user_id, &user_id)
        .await?;
    Ok((StatusCode::OK, Json(follow.into())))
}

/// Unfollow a user
#[utoipa::path(
    delete,
    tag = TAG,
    path = "/{user_id}",
    operation_id = "unfollowUser",
    responses(
        (status = 200, description = "User unfollowed successfully", body = FollowResponse),
        (status = 401, description = "Missing caller identity", body = ErrorPayload),
        (status = 409, description = "User is not followed", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("user_id" = String, Path, description = "User id to unfollow"),
        ("x-user-id" = String, Header, description = "Authenticated caller id")
    )
)]
pub(super) async fn unfollow_user(
    State(app_state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<FollowResponse>), AppError> {
    let follow = app_state
        .follow_service
        .unfollow_user(&auth.user_id, &user_id)
        .await?;
    Ok((StatusCode::OK, Json(follow.into())))
}
