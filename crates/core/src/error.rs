//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers deterministic business failures only. Lookups and conflicts are
/// reported by the API and surface as client errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank product name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant would be violated (e.g. stock going below zero).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = DomainError::validation("product name cannot be empty");
        assert_eq!(err.to_string(), "validation failed: product name cannot be empty");

        let err = DomainError::invariant("insufficient stock");
        assert_eq!(err.to_string(), "invariant violated: insufficient stock");
    }

    #[test]
    fn constructors_map_to_their_variants() {
        assert!(matches!(DomainError::validation("x"), DomainError::Validation(m) if m == "x"));
        assert!(matches!(
            DomainError::invariant("y"),
            DomainError::InvariantViolation(m) if m == "y"
        ));
        assert!(matches!(DomainError::invalid_id("z"), DomainError::InvalidId(m) if m == "z"));
    }
}
