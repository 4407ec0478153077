//! Authentication forms: validation, submission and routing.

pub mod controller;
pub mod forms;
pub mod service;

pub use controller::{AuthController, AuthFormError, AuthFormKind, Route, SubmitState};
pub use forms::{AuthField, FormErrors, LoginForm, OtpForm, SignupForm};
pub use service::{AuthService, HttpAuthService, MockAuthService};
