use thiserror::Error;

use crate::domain::email::EmailError;

/// Error for OwnerId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OwnerIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all owner-related operations
#[derive(Debug, Clone, Error)]
pub enum OwnerError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid owner ID: {0}")]
    InvalidOwnerId(#[from] OwnerIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Owner not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Store lookup timed out")]
    StoreTimeout,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
