//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Presentation
/// concerns (alerts, unknown commands) belong to the shell.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty product name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The targeted record is not held by the store.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// The message to show a user, without the error-kind prefix.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Validation(msg) => msg.clone(),
            DomainError::InvalidId(msg) => msg.clone(),
            DomainError::NotFound => "product not found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind() {
        let err = DomainError::validation("product name is required");
        assert_eq!(err.to_string(), "validation failed: product name is required");
        assert_eq!(err.user_message(), "product name is required");
    }

    #[test]
    fn not_found_has_user_message() {
        assert_eq!(DomainError::not_found().user_message(), "product not found");
    }
}
