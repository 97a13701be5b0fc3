use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::owner::models::Owner;

pub mod create_owner;
pub mod delete_owner;
pub mod get_owner;
pub mod list_owners;
pub mod login;
pub mod update_owner;

pub use create_owner::create_owner;
pub use delete_owner::delete_owner;
pub use get_owner::get_owner;
pub use list_owners::list_owners;
pub use login::login;
pub use update_owner::update_owner;

/// Response body for owner operations. The password hash never leaves the
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub dni: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Owner> for OwnerData {
    fn from(owner: &Owner) -> Self {
        Self {
            id: owner.id.to_string(),
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            dni: owner.dni.clone(),
            address: owner.address.clone(),
            phone: owner.phone.clone(),
            email: owner.email.as_str().to_string(),
            is_active: owner.is_active,
            created_at: owner.created_at,
        }
    }
}
