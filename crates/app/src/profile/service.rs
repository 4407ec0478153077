//! Profile service.

use async_trait::async_trait;
use mockall::automock;

use crate::api::{ApiClient, ApiError, models::ProfileRecord};

/// Profile lookups backed by the storefront API.
#[derive(Debug, Clone)]
pub struct HttpProfileService {
    client: ApiClient,
}

impl HttpProfileService {
    /// Wrap an API client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ProfileService for HttpProfileService {
    async fn fetch_profile(&self) -> Result<ProfileRecord, ApiError> {
        self.client.profile().await
    }
}

#[automock]
#[async_trait(?Send)]
/// Signed-in user profile operations.
pub trait ProfileService {
    /// Fetches the profile and order history of the session's user.
    async fn fetch_profile(&self) -> Result<ProfileRecord, ApiError>;
}
