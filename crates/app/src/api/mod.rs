//! Remote API client
//!
//! Thin wrapper over the storefront backend. Requests carry the session
//! cookie; failures are reported as-is with no retry.

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ApiConfig, ConfigError};

pub mod models;

use models::{ApiMessage, LoginRequest, OtpRequest, ProfileEnvelope, ProfileRecord, RegisterRequest};

/// Register endpoint.
pub const REGISTER_PATH: &str = "auth/register";

/// Login endpoint.
pub const LOGIN_PATH: &str = "auth/login";

/// Reset OTP endpoint.
pub const SEND_RESET_OTP_PATH: &str = "auth/send-reset-otp";

/// Profile endpoint.
pub const PROFILE_PATH: &str = "user/profile";

/// Errors that can occur when calling the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx response.
    #[error("unexpected response ({status}): {body}")]
    UnexpectedResponse {
        /// HTTP status code
        status: u16,

        /// Response body, verbatim
        body: String,
    },

    /// An endpoint URL could not be built.
    #[error("invalid endpoint {path}: {reason}")]
    InvalidEndpoint {
        /// Endpoint path
        path: &'static str,

        /// Parser message
        reason: String,
    },

    /// The API configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// HTTP client for the storefront backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    /// Create a client from configuration. Natively the client keeps its
    /// own cookie jar, shared by every clone; in the browser requests carry
    /// the page's cookies instead.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid base URL or if the HTTP client
    /// cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        #[cfg(not(target_arch = "wasm32"))]
        let builder = Client::builder().cookie_store(true);
        #[cfg(target_arch = "wasm32")]
        let builder = Client::builder();

        let http = builder.build()?;

        Ok(Self {
            base_url: config.base_url()?,
            http,
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidEndpoint`] if the path does not join.
    pub fn endpoint(&self, path: &'static str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|error| ApiError::InvalidEndpoint {
                path,
                reason: error.to_string(),
            })
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiMessage, ApiError> {
        self.post(REGISTER_PATH, request).await
    }

    /// Start a session.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiMessage, ApiError> {
        self.post(LOGIN_PATH, request).await
    }

    /// Submit a password-reset OTP.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn send_reset_otp(&self, request: &OtpRequest) -> Result<ApiMessage, ApiError> {
        self.post(SEND_RESET_OTP_PATH, request).await
    }

    /// Fetch the signed-in user's profile and orders.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx response or an
    /// unexpected body.
    pub async fn profile(&self) -> Result<ProfileRecord, ApiError> {
        let url = self.endpoint(PROFILE_PATH)?;

        debug!(%url, "GET");

        let response = check_status(with_session(self.http.get(url)).send().await?).await?;
        let envelope: ProfileEnvelope = response.json().await?;

        Ok(envelope.data)
    }

    async fn post<B>(&self, path: &'static str, body: &B) -> Result<ApiMessage, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;

        debug!(%url, "POST");

        let response =
            check_status(with_session(self.http.post(url).json(body)).send().await?).await?;
        let text = response.text().await?;

        Ok(decode_lenient(&text))
    }
}

#[cfg(target_arch = "wasm32")]
fn with_session(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_session(request: RequestBuilder) -> RequestBuilder {
    request
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    warn!(status, "request rejected");

    Err(ApiError::UnexpectedResponse { status, body })
}

fn decode_lenient<T>(text: &str) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_str(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::config::Environment;

    #[test]
    fn endpoints_join_under_base_path() -> TestResult {
        let client = ApiClient::new(&ApiConfig::for_environment(Environment::Production))?;

        assert_eq!(
            client.endpoint(LOGIN_PATH)?.as_str(),
            "https://gsap-landing-backend.onrender.com/api/auth/login"
        );
        assert_eq!(
            client.endpoint(SEND_RESET_OTP_PATH)?.as_str(),
            "https://gsap-landing-backend.onrender.com/api/auth/send-reset-otp"
        );

        Ok(())
    }

    #[test]
    fn override_without_trailing_slash_keeps_path() -> TestResult {
        let client = ApiClient::new(&ApiConfig {
            environment: Environment::Development,
            api_url: Some("http://localhost:5000/api".to_string()),
        })?;

        assert_eq!(
            client.endpoint(PROFILE_PATH)?.as_str(),
            "http://localhost:5000/api/user/profile"
        );

        Ok(())
    }

    #[test]
    fn acknowledgements_decode_leniently() {
        let message: ApiMessage = decode_lenient(r#"{"success":true,"message":"ok"}"#);
        let plain: ApiMessage = decode_lenient("Created");

        assert_eq!(message.message.as_deref(), Some("ok"));
        assert_eq!(plain, ApiMessage::default());
    }
}
