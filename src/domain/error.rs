//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business rule violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed zip code: {0}")]
    MalformedZip(String),

    #[error("unresolvable zip code: {0}")]
    UnresolvableZip(String),

    #[error("unparsable date/time: {0}")]
    InvalidDate(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
