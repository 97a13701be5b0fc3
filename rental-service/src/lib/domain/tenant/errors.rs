use thiserror::Error;

use crate::domain::email::EmailError;

/// Error for TenantId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TenantIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all tenant-related operations
#[derive(Debug, Clone, Error)]
pub enum TenantError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid tenant ID: {0}")]
    InvalidTenantId(#[from] TenantIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Tenant not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
