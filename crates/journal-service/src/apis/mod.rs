use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod api_models;
pub mod feed_handlers;
pub mod follow_handlers;
pub mod middlewares;
pub mod post_handlers;
pub mod profile_handlers;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "follows", description = "Follow graph API"),
        (name = "posts", description = "Journal post API"),
        (name = "feed", description = "Aggregated feed API"),
        (name = "profiles", description = "Profile metadata API")
    )
)]
pub struct ApiDoc;

pub fn setup_routes() -> Router<Arc<AppState>> {
    let api_doc = ApiDoc::openapi();

    let follow_router = OpenApiRouter::new()
        .routes(routes!(follow_handlers::get_follower_count))
        .routes(routes!(follow_handlers::get_following_count))
        .routes(routes!(
            follow_handlers::is_following_by_id,
            follow_handlers::follow_user,
            follow_handlers::unfollow_user
        ));

    let post_router = OpenApiRouter::new().routes(routes!(
        post_handlers::create_post,
        post_handlers::get_my_posts
    ));

    let feed_router = OpenApiRouter::new().routes(routes!(feed_handlers::get_feed));

    let profile_router =
        OpenApiRouter::new().routes(routes!(profile_handlers::update_description));

    let follow_router = OpenApiRouter::with_openapi(api_doc.clone()).nest("/follows", follow_router);
    let post_router = OpenApiRouter::with_openapi(api_doc.clone()).nest("/posts", post_router);
    let feed_router = OpenApiRouter::with_openapi(api_doc.clone()).nest("/feed", feed_router);
    let profile_router =
        OpenApiRouter::with_openapi(api_doc.clone()).nest("/profiles", profile_router);

    let router = OpenApiRouter::new()
        .merge(follow_router)
        .merge(post_router)
        .merge(feed_router)
        .merge(profile_router);

    let (api_router, api_openapi) = OpenApiRouter::new()
        .nest("/api/v1", router)
        .split_for_parts();

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
}
