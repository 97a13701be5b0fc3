use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::tenant::models::Tenant;

pub mod create_tenant;
pub mod delete_tenant;
pub mod get_tenant;
pub mod list_tenants;
pub mod update_tenant;

pub use create_tenant::create_tenant;
pub use delete_tenant::delete_tenant;
pub use get_tenant::get_tenant;
pub use list_tenants::list_tenants;
pub use update_tenant::update_tenant;

/// Response body for tenant operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub phone: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Tenant> for TenantData {
    fn from(tenant: &Tenant) -> Self {
        Self {
            id: tenant.id.to_string(),
            first_name: tenant.first_name.clone(),
            last_name: tenant.last_name.clone(),
            dni: tenant.dni.clone(),
            phone: tenant.phone.clone(),
            email: tenant.email.as_str().to_string(),
            is_active: tenant.is_active,
            created_at: tenant.created_at,
        }
    }
}
