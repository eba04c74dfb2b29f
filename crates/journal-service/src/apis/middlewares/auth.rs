use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::HeaderName, request::Parts},
};
use once_cell::sync::Lazy;

use crate::utils::errors::app_error::AppError;

/// Header the authenticating gateway sets on every forwarded request.
pub static USER_ID_HEADER: Lazy<HeaderName> = Lazy::new(|| HeaderName::from_static("x-user-id"));

/// The authenticated caller's identity. Unauthenticated requests are rejected
/// upstream; this extractor enforces that contract in-process.
#[derive(Debug)]
pub struct AuthUser {
    pub user_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER.as_str())
            .and_then(|header| header.to_str().ok());

        match user_id {
            Some(id) if !id.is_empty() => Ok(AuthUser {
                user_id: id.to_string(),
            }),
            Some(_) => Err(AppError::Unauthorized("Empty user id header".to_string())),
            None => Err(AppError::Unauthorized("Missing user id header".to_string())),
        }
    }
}
