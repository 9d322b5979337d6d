//! Error types for the form input crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use serde::Serialize;
use thiserror::Error;

/// A form control that can block a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Phone,
    Email,
}

/// Reasons a form submission is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A submission from this form is already in flight
    #[error("Submission already in progress")]
    AlreadySubmitting,

    /// Phone digits are not a valid mobile or landline number
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Email does not pass the syntax check
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl SubmitError {
    /// The control the UI should move focus to, if any.
    pub fn focus_field(&self) -> Option<FormField> {
        match self {
            Self::AlreadySubmitting => None,
            Self::InvalidPhone(_) => Some(FormField::Phone),
            Self::InvalidEmail(_) => Some(FormField::Email),
        }
    }
}

impl From<crate::domain::ValidationError> for SubmitError {
    fn from(err: crate::domain::ValidationError) -> Self {
        match err {
            crate::domain::ValidationError::InvalidPhone(phone) => Self::InvalidPhone(phone),
            crate::domain::ValidationError::InvalidEmail(email) => Self::InvalidEmail(email),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
