//! Account pages: sign-up, login, password-reset OTP and profile.
//!
//! Every page talks to the backend through one [`Account`], so the session
//! a login starts is the one the profile request presents.

use storefront_app::{
    api::{ApiClient, ApiError},
    auth::HttpAuthService,
    config::{ApiConfig, Environment},
    profile::HttpProfileService,
};

mod auth;
mod profile;

pub use auth::{LoginPage, OtpPage, SignupPage};
pub use profile::ProfilePage;

/// Backend services sharing one API client.
#[derive(Debug, Clone)]
pub struct Account {
    pub auth: HttpAuthService,
    pub profile: HttpProfileService,
}

impl Account {
    /// Build the services for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client cannot be built.
    pub fn connect(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = ApiClient::new(config)?;

        Ok(Self {
            auth: HttpAuthService::new(client.clone()),
            profile: HttpProfileService::new(client),
        })
    }
}

/// Backend settings baked in at build time. `STOREFRONT_API_URL` overrides
/// the production backend.
pub fn api_config() -> ApiConfig {
    ApiConfig {
        environment: Environment::Production,
        api_url: option_env!("STOREFRONT_API_URL").map(str::to_string),
    }
}
