use std::future::Future;
use std::time::Duration;

use crate::utils::errors::app_error::AppError;

pub mod follow_repository;
pub mod post_repository;

pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;

/// Bounds a store call so a stalled database connection surfaces as a
/// distinct timeout error instead of hanging the request.
pub(crate) async fn bounded<T, F>(op: &'static str, limit: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| AppError::Timeout(op))?
}
