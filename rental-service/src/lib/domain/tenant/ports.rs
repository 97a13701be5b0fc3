use async_trait::async_trait;

use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::models::CreateTenantCommand;
use crate::domain::tenant::models::Tenant;
use crate::domain::tenant::models::TenantId;
use crate::domain::tenant::models::UpdateTenantCommand;

/// Port for tenant domain service operations.
#[async_trait]
pub trait TenantServicePort: Send + Sync + 'static {
    /// Create a new tenant.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create_tenant(&self, command: CreateTenantCommand) -> Result<Tenant, TenantError>;

    /// Retrieve tenant by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Tenant does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_tenant(&self, id: &TenantId) -> Result<Tenant, TenantError>;

    /// Retrieve all tenants.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_tenants(&self) -> Result<Vec<Tenant>, TenantError>;

    /// Update existing tenant with optional fields.
    ///
    /// # Errors
    /// * `NotFound` - Tenant does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn update_tenant(
        &self,
        id: &TenantId,
        command: UpdateTenantCommand,
    ) -> Result<Tenant, TenantError>;

    /// Delete existing tenant.
    ///
    /// # Errors
    /// * `NotFound` - Tenant does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_tenant(&self, id: &TenantId) -> Result<(), TenantError>;
}

/// Persistence operations for the tenant aggregate.
#[async_trait]
pub trait TenantRepository: Send + Sync + 'static {
    /// Persist new tenant to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, tenant: Tenant) -> Result<Tenant, TenantError>;

    /// Retrieve tenant by identifier.
    ///
    /// # Returns
    /// Optional tenant entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, TenantError>;

    /// Retrieve all tenants from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Tenant>, TenantError>;

    /// Update existing tenant in storage.
    ///
    /// # Errors
    /// * `NotFound` - Tenant does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, tenant: Tenant) -> Result<Tenant, TenantError>;

    /// Remove tenant from storage.
    ///
    /// # Errors
    /// * `NotFound` - Tenant does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: &TenantId) -> Result<(), TenantError>;
}
