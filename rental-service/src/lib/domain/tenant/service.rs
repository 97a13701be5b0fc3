use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::models::CreateTenantCommand;
use crate::domain::tenant::models::Tenant;
use crate::domain::tenant::models::TenantId;
use crate::domain::tenant::models::UpdateTenantCommand;
use crate::domain::tenant::ports::TenantRepository;
use crate::domain::tenant::ports::TenantServicePort;

/// Domain service implementation for tenant operations.
pub struct TenantService<R>
where
    R: TenantRepository,
{
    repository: Arc<R>,
}

impl<R> TenantService<R>
where
    R: TenantRepository,
{
    /// Create a new tenant service with an injected repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TenantServicePort for TenantService<R>
where
    R: TenantRepository,
{
    async fn create_tenant(&self, command: CreateTenantCommand) -> Result<Tenant, TenantError> {
        let tenant = Tenant {
            id: TenantId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            dni: command.dni,
            phone: command.phone,
            email: command.email,
            is_active: true,
            created_at: Utc::now(),
        };

        self.repository.create(tenant).await
    }

    async fn get_tenant(&self, id: &TenantId) -> Result<Tenant, TenantError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TenantError::NotFound(id.to_string()))
    }

    async fn list_tenants(&self) -> Result<Vec<Tenant>, TenantError> {
        self.repository.list_all().await
    }

    async fn update_tenant(
        &self,
        id: &TenantId,
        command: UpdateTenantCommand,
    ) -> Result<Tenant, TenantError> {
        let mut tenant = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TenantError::NotFound(id.to_string()))?;

        if let Some(first_name) = command.first_name {
            tenant.first_name = first_name;
        }
        if let Some(last_name) = command.last_name {
            tenant.last_name = last_name;
        }
        if let Some(dni) = command.dni {
            tenant.dni = dni;
        }
        if let Some(phone) = command.phone {
            tenant.phone = phone;
        }
        if let Some(email) = command.email {
            tenant.email = email;
        }
        if let Some(is_active) = command.is_active {
            tenant.is_active = is_active;
        }

        self.repository.update(tenant).await
    }

    async fn delete_tenant(&self, id: &TenantId) -> Result<(), TenantError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;
    use crate::domain::email::EmailAddress;

    mock! {
        pub TestTenantRepository {}

        #[async_trait]
        impl TenantRepository for TestTenantRepository {
            async fn create(&self, tenant: Tenant) -> Result<Tenant, TenantError>;
            async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, TenantError>;
            async fn list_all(&self) -> Result<Vec<Tenant>, TenantError>;
            async fn update(&self, tenant: Tenant) -> Result<Tenant, TenantError>;
            async fn delete(&self, id: &TenantId) -> Result<(), TenantError>;
        }
    }

    fn tenant() -> Tenant {
        Tenant {
            id: TenantId::new(),
            first_name: "Luis".to_string(),
            last_name: "Perez".to_string(),
            dni: "28999111".to_string(),
            phone: "+54 381 555 0002".to_string(),
            email: EmailAddress::new("luis@example.com".to_string()).unwrap(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_tenant_starts_active() {
        let mut repository = MockTestTenantRepository::new();
        repository
            .expect_create()
            .withf(|tenant| tenant.is_active)
            .times(1)
            .returning(|tenant| Ok(tenant));

        let service = TenantService::new(Arc::new(repository));

        let command = CreateTenantCommand {
            first_name: "Luis".to_string(),
            last_name: "Perez".to_string(),
            dni: "28999111".to_string(),
            phone: "+54 381 555 0002".to_string(),
            email: EmailAddress::new("luis@example.com".to_string()).unwrap(),
        };

        let created = service.create_tenant(command).await.unwrap();
        assert_eq!(created.email.as_str(), "luis@example.com");
    }

    #[tokio::test]
    async fn test_get_tenant_not_found() {
        let mut repository = MockTestTenantRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TenantService::new(Arc::new(repository));

        let result = service.get_tenant(&TenantId::new()).await;
        assert!(matches!(result.unwrap_err(), TenantError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_tenant_applies_partial_fields() {
        let mut repository = MockTestTenantRepository::new();

        let existing = tenant();
        let tenant_id = existing.id;

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == tenant_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(|tenant| tenant.phone == "+54 381 555 9999" && tenant.first_name == "Luis")
            .times(1)
            .returning(|tenant| Ok(tenant));

        let service = TenantService::new(Arc::new(repository));

        let command = UpdateTenantCommand {
            phone: Some("+54 381 555 9999".to_string()),
            ..UpdateTenantCommand::default()
        };

        let updated = service.update_tenant(&tenant_id, command).await.unwrap();
        assert_eq!(updated.phone, "+54 381 555 9999");
    }

    #[tokio::test]
    async fn test_delete_tenant_not_found() {
        let mut repository = MockTestTenantRepository::new();

        let tenant_id = TenantId::new();
        repository
            .expect_delete()
            .times(1)
            .returning(move |_| Err(TenantError::NotFound(tenant_id.to_string())));

        let service = TenantService::new(Arc::new(repository));

        let result = service.delete_tenant(&tenant_id).await;
        assert!(matches!(result.unwrap_err(), TenantError::NotFound(_)));
    }
}
