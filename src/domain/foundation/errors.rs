//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
///
/// Each code maps to exactly one HTTP status at the boundary; nothing
/// below the HTTP adapter knows about status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // Not found errors
    UserNotFound,
    StoreNotFound,
    RecordNotFound,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::StoreNotFound => "STORE_NOT_FOUND",
            ErrorCode::RecordNotFound => "RECORD_NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field)
    }

    /// Creates a forbidden error. The message is intentionally generic:
    /// a store that does not exist and a store the principal cannot
    /// reach must be indistinguishable.
    pub fn forbidden() -> Self {
        Self::new(ErrorCode::Forbidden, "No access to this store")
    }

    /// Creates a generic invalid-credentials error. Never reveals which
    /// of username or password was wrong.
    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::Unauthorized, "Invalid username or password")
    }

    /// Creates a not-found error for a row id that did not resolve.
    pub fn record_not_found(kind: &str) -> Self {
        Self::new(ErrorCode::RecordNotFound, format!("{} not found", kind))
    }

    /// Creates a database error. The underlying cause goes into the
    /// message for server-side logging; the HTTP layer replaces it with
    /// an opaque body.
    pub fn database(cause: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, format!("Storage failure: {}", cause))
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::StoreNotFound, "Store not found");
        assert_eq!(format!("{}", err), "[STORE_NOT_FOUND] Store not found");
    }

    #[test]
    fn validation_error_carries_field_detail() {
        let err = DomainError::validation("username", "must be lowercase");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"username".to_string()));
    }

    #[test]
    fn forbidden_does_not_mention_existence() {
        let err = DomainError::forbidden();
        assert!(!err.message.to_lowercase().contains("exist"));
        assert!(!err.message.to_lowercase().contains("found"));
    }

    #[test]
    fn unauthorized_is_generic() {
        let err = DomainError::unauthorized();
        assert_eq!(err.message, "Invalid username or password");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::Forbidden), "FORBIDDEN");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
