//! Auth form validation

use std::fmt;

use smallvec::SmallVec;

use crate::api::models::{LoginRequest, OtpRequest, RegisterRequest};

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Message for a blank name.
pub const NAME_REQUIRED: &str = "Name is required";

/// Message for a blank email.
pub const EMAIL_REQUIRED: &str = "Email is required";

/// Message for a malformed email.
pub const EMAIL_INVALID: &str = "Invalid email";

/// Message for a blank password.
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Message for a short password.
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

/// Message for a blank OTP.
pub const OTP_REQUIRED: &str = "Otp is required";

/// Auth form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthField {
    /// Display name
    Name,

    /// Email address
    Email,

    /// Password
    Password,

    /// One-time password
    Otp,
}

impl fmt::Display for AuthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AuthField::Name => "name",
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::Otp => "otp",
        })
    }
}

/// A failed check on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field
    pub field: AuthField,

    /// Message shown under the field
    pub message: &'static str,
}

/// Validation failures, at most one per field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(SmallVec<[FieldError; 3]>);

impl FormErrors {
    fn push(&mut self, field: AuthField, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: AuthField) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    /// Whether every field passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .0
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect();

        f.write_str(&messages.join("; "))
    }
}

/// Whether `email` looks like an address: a local part of the usual
/// permitted characters, `@`, then dot-separated host labels.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));

    local_ok && !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

fn check_email(errors: &mut FormErrors, email: &str) {
    if email.is_empty() {
        errors.push(AuthField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.push(AuthField::Email, EMAIL_INVALID);
    }
}

fn check_password(errors: &mut FormErrors, password: &str) {
    if password.is_empty() {
        errors.push(AuthField::Password, PASSWORD_REQUIRED);
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(AuthField::Password, PASSWORD_TOO_SHORT);
    }
}

/// Signup form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

impl SignupForm {
    /// Validate into a register request.
    ///
    /// # Errors
    ///
    /// Returns every failed field.
    pub fn validate(&self) -> Result<RegisterRequest, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.is_empty() {
            errors.push(AuthField::Name, NAME_REQUIRED);
        }

        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);

        errors.into_result(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Login form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

impl LoginForm {
    /// Validate into a login request.
    ///
    /// # Errors
    ///
    /// Returns every failed field.
    pub fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::default();

        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);

        errors.into_result(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// OTP form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpForm {
    /// One-time password
    pub otp: String,
}

impl OtpForm {
    /// Validate into an OTP request.
    ///
    /// # Errors
    ///
    /// Returns the failed field.
    pub fn validate(&self) -> Result<OtpRequest, FormErrors> {
        let mut errors = FormErrors::default();

        if self.otp.is_empty() {
            errors.push(AuthField::Otp, OTP_REQUIRED);
        }

        errors.into_result(OtpRequest {
            otp: self.otp.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co"));
        assert!(is_valid_email("ada@localhost"));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("ada@exa mple.com"));
        assert!(!is_valid_email("ada@-example.com"));
        assert!(!is_valid_email("ada@example..com"));
        assert!(!is_valid_email("a@b@c"));
    }

    #[test]
    fn empty_signup_reports_required_messages() {
        let errors = SignupForm::default().validate().err().unwrap_or_default();

        assert_eq!(errors.get(AuthField::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(AuthField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(AuthField::Password), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn login_rejects_bad_email_and_short_password() {
        let form = LoginForm {
            email: "not-an-email".to_string(),
            password: "12345".to_string(),
        };

        let errors = form.validate().err().unwrap_or_default();

        assert_eq!(errors.get(AuthField::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(AuthField::Password), Some(PASSWORD_TOO_SHORT));
        assert_eq!(
            errors.to_string(),
            "email: Invalid email; password: Password must be at least 6 characters"
        );
    }

    #[test]
    fn valid_login_builds_request() -> TestResult {
        let form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "123456".to_string(),
        };

        let request = form.validate()?;

        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.password, "123456");

        Ok(())
    }

    #[test]
    fn otp_is_required() -> TestResult {
        let errors = OtpForm::default().validate().err().unwrap_or_default();

        assert_eq!(errors.get(AuthField::Otp), Some(OTP_REQUIRED));
        assert_eq!(
            OtpForm {
                otp: "482913".to_string()
            }
            .validate()?
            .otp,
            "482913"
        );

        Ok(())
    }
}
