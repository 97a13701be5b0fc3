use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::email::EmailAddress;
use crate::domain::tenant::errors::TenantIdError;

/// Tenant aggregate entity.
///
/// Represents a tenant (inquilino) of a rented property. Tenants do not
/// authenticate; there is no credential material here.
#[derive(Debug, Clone)]
pub struct Tenant {
    pub id: TenantId,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub phone: String,
    pub email: EmailAddress,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Tenant unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TenantId(pub Uuid);

impl TenantId {
    /// Generate a new random tenant ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a tenant ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TenantIdError> {
        Uuid::parse_str(s)
            .map(TenantId)
            .map_err(|e| TenantIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new tenant with domain types
#[derive(Debug)]
pub struct CreateTenantCommand {
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub phone: String,
    pub email: EmailAddress,
}

/// Command to update an existing tenant with optional validated fields.
///
/// All fields are optional to support partial updates.
#[derive(Debug, Default)]
pub struct UpdateTenantCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dni: Option<String>,
    pub phone: Option<String>,
    pub email: Option<EmailAddress>,
    pub is_active: Option<bool>,
}
