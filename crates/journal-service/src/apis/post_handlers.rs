use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    models::posts::PostResponse,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

use super::{api_models::request::CreatePostRequest, middlewares::auth::AuthUser};

const TAG: &str = "posts";

/// Write a journal post
#[utoipa::path(
    post,
    tag = TAG,
    path = "/",
    operation_id = "createPost",
    responses(
        (status = 200, description = "Post created successfully", body = PostResponse),
        (status = 400, description = "Empty or over-long content", body = ErrorPayload),
        (status = 401, description = "Missing caller identity", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("x-user-id" = String, Header, description = "Authenticated caller id")
    ),
    request_body = CreatePostRequest
)]
pub(super) async fn create_post(
    State(app_state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(body): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let post = app_state
        .post_service
        .create_post(&auth.user_id, &body.content)
        .await?;
    Ok((StatusCode::OK, Json(post.into())))
}

/// List the caller's posts, newest first
#[utoipa::path(
    get,
    tag = TAG,
    path = "/",
    operation_id = "getMyPosts",
    responses(
        (status = 200, description = "The caller's posts", body = Vec<PostResponse>),
        (status = 401, description = "Missing caller identity", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("x-user-id" = String, Header, description = "Authenticated caller id")
    )
)]
pub(super) async fn get_my_posts(
    State(app_state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<Vec<PostResponse>>), AppError> {
    let posts = app_state.post_service.list_posts(&auth.user_id).await?;
    let posts = posts.into_iter().map(PostResponse::from).collect();
    Ok((StatusCode::OK, Json(posts)))
}
