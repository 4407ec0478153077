//! Auth form controller

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    api::{
        ApiError,
        models::{ApiMessage, LoginRequest, OtpRequest, RegisterRequest},
    },
    auth::{
        forms::{FormErrors, LoginForm, OtpForm, SignupForm},
        service::AuthService,
    },
};

/// Form-level message shown when the backend rejects a submission.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Page a successful submission navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page
    Landing,

    /// Home page
    Home,

    /// Password reset page
    ResetPassword,
}

impl Route {
    /// Path of the route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Home => "/home",
            Route::ResetPassword => "/reset-password",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Whether a submission is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// Ready to submit
    #[default]
    Idle,

    /// Waiting for the backend
    Pending,
}

/// Which auth form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthFormKind {
    /// Account creation
    Signup,

    /// Sign-in
    Login,

    /// Password-reset OTP
    Otp,
}

impl AuthFormKind {
    /// Submit button label in `state`.
    pub fn submit_label(self, state: SubmitState) -> &'static str {
        match (self, state) {
            (AuthFormKind::Signup, SubmitState::Idle) => "Signup",
            (AuthFormKind::Signup, SubmitState::Pending) => "Signing Up...",
            (AuthFormKind::Login, SubmitState::Idle) => "Login",
            (AuthFormKind::Login, SubmitState::Pending) => "Logging in...",
            (AuthFormKind::Otp, _) => "Verify OTP",
        }
    }

    /// Page shown after a successful submission.
    pub fn success_route(self) -> Route {
        match self {
            AuthFormKind::Signup => Route::Landing,
            AuthFormKind::Login => Route::Home,
            AuthFormKind::Otp => Route::ResetPassword,
        }
    }
}

/// Errors raised by form submission.
#[derive(Debug, Error)]
pub enum AuthFormError {
    /// Client-side validation failed; nothing was sent.
    #[error("{0}")]
    Invalid(FormErrors),

    /// A submission from this form is still waiting for the backend.
    #[error("a submission is already in progress")]
    InFlight,

    /// The backend rejected the request or could not be reached.
    #[error("Something went wrong. Please try again.")]
    Rejected(#[source] ApiError),
}

/// Submits auth forms through an [`AuthService`] and tracks submit state.
///
/// A submission is two steps: `begin_*` validates the form, marks the
/// controller [`SubmitState::Pending`] and hands back the request to send;
/// [`AuthController::complete`] applies the backend's answer. Callers that
/// drive the request themselves can render the pending state in between.
#[derive(Debug)]
pub struct AuthController<S> {
    service: S,
    state: SubmitState,
    form_error: Option<&'static str>,
}

impl<S> AuthController<S> {
    /// Create an idle controller.
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: SubmitState::Idle,
            form_error: None,
        }
    }

    /// Service requests are sent through.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Current submit state.
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Form-level error from the last rejected submission.
    pub fn form_error(&self) -> Option<&'static str> {
        self.form_error
    }

    /// Validate the signup form and mark it pending.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFormError::InFlight`] while a submission is pending, or
    /// [`AuthFormError::Invalid`] if validation fails.
    pub fn begin_signup(&mut self, form: &SignupForm) -> Result<RegisterRequest, AuthFormError> {
        self.begin(form.validate())
    }

    /// Validate the login form and mark it pending.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFormError::InFlight`] while a submission is pending, or
    /// [`AuthFormError::Invalid`] if validation fails.
    pub fn begin_login(&mut self, form: &LoginForm) -> Result<LoginRequest, AuthFormError> {
        self.begin(form.validate())
    }

    /// Validate the OTP form and mark it pending.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFormError::InFlight`] while a submission is pending, or
    /// [`AuthFormError::Invalid`] if validation fails.
    pub fn begin_otp(&mut self, form: &OtpForm) -> Result<OtpRequest, AuthFormError> {
        self.begin(form.validate())
    }

    /// Apply the backend's answer to a pending submission of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFormError::Rejected`] if the backend call failed; the
    /// generic form error is then shown.
    pub fn complete(
        &mut self,
        kind: AuthFormKind,
        result: Result<ApiMessage, ApiError>,
    ) -> Result<Route, AuthFormError> {
        self.state = SubmitState::Idle;

        match result {
            Ok(message) => {
                let route = kind.success_route();

                info!(?kind, %route, message = message.message.as_deref(), "auth form accepted");

                Ok(route)
            }
            Err(error) => {
                warn!(?kind, %error, "auth form rejected");

                self.form_error = Some(GENERIC_FAILURE);

                Err(AuthFormError::Rejected(error))
            }
        }
    }

    fn begin<R>(&mut self, validated: Result<R, FormErrors>) -> Result<R, AuthFormError> {
        if self.state == SubmitState::Pending {
            return Err(AuthFormError::InFlight);
        }

        self.form_error = None;

        let request = validated.map_err(AuthFormError::Invalid)?;

        self.state = SubmitState::Pending;

        Ok(request)
    }
}

impl<S: AuthService> AuthController<S> {
    /// Validate and submit the signup form.
    ///
    /// # Errors
    ///
    /// See [`AuthController::begin_signup`] and [`AuthController::complete`].
    pub async fn signup(&mut self, form: &SignupForm) -> Result<Route, AuthFormError> {
        let request = self.begin_signup(form)?;
        let result = self.service.register(request).await;

        self.complete(AuthFormKind::Signup, result)
    }

    /// Validate and submit the login form.
    ///
    /// # Errors
    ///
    /// See [`AuthController::begin_login`] and [`AuthController::complete`].
    pub async fn login(&mut self, form: &LoginForm) -> Result<Route, AuthFormError> {
        let request = self.begin_login(form)?;
        let result = self.service.login(request).await;

        self.complete(AuthFormKind::Login, result)
    }

    /// Validate and submit the OTP form.
    ///
    /// # Errors
    ///
    /// See [`AuthController::begin_otp`] and [`AuthController::complete`].
    pub async fn verify_otp(&mut self, form: &OtpForm) -> Result<Route, AuthFormError> {
        let request = self.begin_otp(form)?;
        let result = self.service.request_otp(request).await;

        self.complete(AuthFormKind::Otp, result)
    }
}
