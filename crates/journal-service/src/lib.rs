use std::sync::Arc;
use std::time::Duration;

use apis::setup_routes;
use axum::Router;
use external_services::identity::HttpIdentityService;
use repositories::{
    follow_repository::PgFollowRepository, post_repository::PgPostRepository,
    DEFAULT_STORE_TIMEOUT_SECS,
};
use services::{
    feed_service::FeedService, follow_service::FollowService, post_service::PostService,
    profile_service::ProfileService,
};
use sqlx::postgres::PgPool;
use tower_http::cors::CorsLayer;

pub mod apis;
pub mod external_services;
pub mod models;
pub mod repositories;
pub mod services;
pub mod settings;
#[cfg(test)]
pub mod testing;
pub mod utils;

pub struct AppState {
    pub follow_service: FollowService,
    pub post_service: PostService,
    pub feed_service: FeedService,
    pub profile_service: ProfileService,
}

pub async fn setup_database(database_url: &str) -> Result<Arc<PgPool>, sqlx::Error> {
    let pool = PgPool::connect(database_url).await?;
    sqlx::migrate!().run(&pool).await?;
    Ok(Arc::new(pool))
}

pub async fn setup_router(
    settings: &settings::Settings,
) -> Result<Router, Box<dyn std::error::Error>> {
    let db = setup_database(&settings.database_url).await?;
    let (follow_service, post_service, feed_service, profile_service) =
        setup_services(db, settings);
    let router = setup_routes();

    Ok(router
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(AppState {
            follow_service,
            post_service,
            feed_service,
            profile_service,
        })))
}

pub fn setup_services(
    db: Arc<PgPool>,
    settings: &settings::Settings,
) -> (FollowService, PostService, FeedService, ProfileService) {
    let store_timeout = Duration::from_secs(
        settings
            .store_timeout_secs
            .unwrap_or(DEFAULT_STORE_TIMEOUT_SECS),
    );
    let follow_repository = Arc::new(PgFollowRepository::new(db.clone(), store_timeout));
    let post_repository = Arc::new(PgPostRepository::new(db.clone(), store_timeout));
    let identity_service = Arc::new(HttpIdentityService::new(
        settings.identity_api_url.clone(),
        settings.identity_api_secret.clone(),
    ));

    let follow_service = FollowService::new(follow_repository.clone());
    let post_service = PostService::new(post_repository.clone());
    let feed_service = FeedService::new(
        follow_repository,
        post_repository,
        identity_service.clone(),
    );
    let profile_service = ProfileService::new(identity_service);

    (follow_service, post_service, feed_service, profile_service)
}

pub fn init_tracing(settings: &settings::Settings) {
    let env = settings.environment.clone().unwrap_or("DEV".to_string());
    let level = match env.as_str() {
        "PROD" => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_ansi(env != "PROD")
        .init();
}
