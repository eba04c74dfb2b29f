use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::utils::errors::app_error::AppError;

/// A user as the identity provider reports it. All attributes except
/// `public_metadata` are read-only to this service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUser {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub public_metadata: ProfileMetadata,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetadata {
    pub description: Option<String>,
}

/// Capability interface over the external identity vendor. The services only
/// ever see this trait, so tests can substitute an in-memory fake and the
/// vendor can be swapped without touching domain logic.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<Option<IdentityUser>, AppError>;
    async fn get_users(&self, ids: &[String]) -> Result<Vec<IdentityUser>, AppError>;
    async fn update_public_metadata(
        &self,
        id: &str,
        metadata: ProfileMetadata,
    ) -> Result<IdentityUser, AppError>;
}

pub struct HttpIdentityService {
    client: Client,
    identity_api_url: String,
    identity_api_secret: String,
}

impl HttpIdentityService {
    pub fn new(identity_api_url: String, identity_api_secret: String) -> Self {
        let client = Client::new();
        Self {
            client,
            identity_api_url,
            identity_api_secret,
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityService {
    async fn get_user(&self, id: &str) -> Result<Option<IdentityUser>, AppError> {
        let res = self
            .client
            .get(format!("{}/v1/users/{}", self.identity_api_url, id))
            .bearer_auth(&self.identity_api_secret)
            .send()
            .await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !res.status().is_success() {
            error!("Identity provider returned {} for user {}", res.status(), id);
            return Err(AppError::UpstreamFailure(format!(
                "identity provider returned {}",
                res.status()
            )));
        }

        let user = res.json::<IdentityUser>().await?;
        Ok(Some(user))
    }

    async fn get_users(&self, ids: &[String]) -> Result<Vec<IdentityUser>, AppError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let query: Vec<(&str, &str)> = ids.iter().map(|id| ("user_id", id.as_str())).collect();
        let res = self
            .client
            .get(format!("{}/v1/users", self.identity_api_url))
            .bearer_auth(&self.identity_api_secret)
            .query(&query)
            .send()
            .await?;

        if !res.status().is_success() {
            error!("Identity provider returned {} for batch lookup", res.status());
            return Err(AppError::UpstreamFailure(format!(
                "identity provider returned {}",
                res.status()
            )));
        }

        let users = res.json::<Vec<IdentityUser>>().await?;
        Ok(users)
    }

    async fn update_public_metadata(
        &self,
        id: &str,
        metadata: ProfileMetadata,
    ) -> Result<IdentityUser, AppError> {
        let res = self
            .client
            .patch(format!("{}/v1/users/{}/metadata", self.identity_api_url, id))
            .bearer_auth(&self.identity_api_secret)
            .json(&serde_json::json!({ "publicMetadata": metadata }))
            .send()
            .await?;

        if !res.status().is_success() {
            error!(
                "Identity provider returned {} updating metadata for user {}",
                res.status(),
                id
            );
            return Err(AppError::UpstreamFailure(format!(
                "identity provider returned {}",
                res.status()
            )));
        }

        let user = res.json::<IdentityUser>().await?;
        Ok(user)
    }
}
