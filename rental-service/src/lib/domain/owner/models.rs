use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::email::EmailAddress;
use crate::domain::owner::errors::OwnerIdError;

/// Owner aggregate entity.
///
/// Represents a property owner (propietario) account. The email address is
/// the login username; `password_hash` is the base64 PBKDF2 derivation of the
/// owner's password. The authentication flow only reads owners, never
/// mutates them.
#[derive(Debug, Clone)]
pub struct Owner {
    pub id: OwnerId,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub address: String,
    pub phone: String,
    pub email: EmailAddress,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Owner {
    /// Display name used in issued tokens, "<first> <last>".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Owner unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(pub Uuid);

impl OwnerId {
    /// Generate a new random owner ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an owner ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, OwnerIdError> {
        Uuid::parse_str(s)
            .map(OwnerId)
            .map_err(|e| OwnerIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new owner with domain types
#[derive(Debug)]
pub struct CreateOwnerCommand {
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub address: String,
    pub phone: String,
    pub email: EmailAddress,
    pub password: String,
}

/// Command to update an existing owner with optional validated fields.
///
/// All fields are optional to support partial updates.
#[derive(Debug, Default)]
pub struct UpdateOwnerCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<EmailAddress>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

/// Claimed login credentials.
///
/// Transient value created per login request and dropped once the flow
/// completes; the plaintext password is never persisted.
#[derive(Debug)]
pub struct OwnerCredentials {
    pub email: EmailAddress,
    pub password: String,
}
