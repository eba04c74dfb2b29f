use std::sync::Arc;

use tracing::info;

use crate::external_services::identity::{IdentityProvider, IdentityUser, ProfileMetadata};
use crate::utils::errors::app_error::AppError;

pub const MAX_DESCRIPTION_LENGTH: usize = 255;

/// Thin wrapper around the identity provider for the profile attributes it
/// owns. The only write this service performs is the public description.
#[derive(Clone)]
pub struct ProfileService {
    identity_service: Arc<dyn IdentityProvider>,
}

impl ProfileService {
    pub fn new(identity_service: Arc<dyn IdentityProvider>) -> Self {
        Self { identity_service }
    }

    pub async fn update_description(
        &self,
        user_id: &str,
        description: &str,
    ) -> Result<IdentityUser, AppError> {
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Description cannot exceed {} characters",
                MAX_DESCRIPTION_LENGTH
            )));
        }

        let user = self.identity_service.get_user(user_id).await?;
        if user.is_none() {
            return Err(AppError::UpstreamFailure(
                "User does not exist in the identity provider".to_string(),
            ));
        }

        let updated = self
            .identity_service
            .update_public_metadata(
                user_id,
                ProfileMetadata {
                    description: Some(description.to_string()),
                },
            )
            .await?;

        info!("User {} updated profile description", user_id);
        Ok(updated)
    }
}
