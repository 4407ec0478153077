//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::api::{
    ApiClient, ApiError,
    models::{ApiMessage, LoginRequest, OtpRequest, RegisterRequest},
};

/// Auth calls backed by the storefront API.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
}

impl HttpAuthService {
    /// Wrap an API client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    async fn register(&self, request: RegisterRequest) -> Result<ApiMessage, ApiError> {
        self.client.register(&request).await
    }

    async fn login(&self, request: LoginRequest) -> Result<ApiMessage, ApiError> {
        self.client.login(&request).await
    }

    async fn request_otp(&self, request: OtpRequest) -> Result<ApiMessage, ApiError> {
        self.client.send_reset_otp(&request).await
    }
}

#[automock]
#[async_trait(?Send)]
/// Remote authentication operations. Futures are not `Send` so browser
/// fetches can back them.
pub trait AuthService {
    /// Creates an account.
    async fn register(&self, request: RegisterRequest) -> Result<ApiMessage, ApiError>;

    /// Starts a session.
    async fn login(&self, request: LoginRequest) -> Result<ApiMessage, ApiError>;

    /// Submits a password-reset OTP.
    async fn request_otp(&self, request: OtpRequest) -> Result<ApiMessage, ApiError>;
}
