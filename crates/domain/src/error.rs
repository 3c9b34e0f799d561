//! Unified error types for the domain layer
//!
//! Character creation is mostly infallible: unknown catalog ids
//! fall back to defaults and malformed roll tables fall back to their last
//! band. The errors here cover what is left, value-object construction and
//! user picks that do not fit the race's rules.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if spent > total {
    ///     return Err(DomainError::validation("XP spent cannot exceed XP total"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("XP spent cannot exceed XP total");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: XP spent cannot exceed XP total"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("unknown stat edit policy 'sometimes'");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error: "));
    }
}
