//! Domain errors

use thiserror::Error;

/// Why an admin request was refused. Messages never include the token or
/// the stored hash.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("missing token")]
    MissingToken,

    #[error("no active session")]
    NoActiveSession,

    #[error("invalid session")]
    InvalidSession,

    #[error("invalid session expiry")]
    InvalidSessionExpiry,

    #[error("session expired")]
    SessionExpired,

    #[error("invalid password")]
    InvalidPassword,

    #[error("current password incorrect")]
    CurrentPasswordIncorrect,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unauthorized: {0}")]
    Unauthorized(AuthFailure),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Admin password not initialized")]
    AdminPasswordNotInitialized,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<AuthFailure> for DomainError {
    fn from(failure: AuthFailure) -> Self {
        DomainError::Unauthorized(failure)
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_messages() {
        assert_eq!(
            DomainError::from(AuthFailure::MissingToken).to_string(),
            "Unauthorized: missing token"
        );
        assert_eq!(
            DomainError::from(AuthFailure::SessionExpired).to_string(),
            "Unauthorized: session expired"
        );
        assert_eq!(DomainError::NotFound("Product").to_string(), "Product not found");
    }
}
