//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("a {kind} named '{name}' is already registered")]
    DuplicateName { kind: &'static str, name: String },

    #[error("no member named '{0}'")]
    UnknownMember(String),

    #[error("no protest named '{0}'")]
    UnknownProtest(String),

    #[error("no movement named '{0}'")]
    UnknownMovement(String),

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// True for failures the UI treats as "bad input, please retry".
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Domain(_) | Self::Validation { .. } | Self::DuplicateName { .. }
        )
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
