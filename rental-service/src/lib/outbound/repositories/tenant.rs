use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::email::EmailAddress;
use crate::domain::tenant::errors::TenantError;
use crate::domain::tenant::models::Tenant;
use crate::domain::tenant::models::TenantId;
use crate::domain::tenant::ports::TenantRepository;

pub struct PostgresTenantRepository {
    pool: PgPool,
}

impl PostgresTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TenantRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    dni: String,
    phone: String,
    email: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TenantRow {
    fn try_into_tenant(self) -> Result<Tenant, TenantError> {
        Ok(Tenant {
            id: TenantId(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            dni: self.dni,
            phone: self.phone,
            email: EmailAddress::new(self.email)?,
            is_active: self.is_active,
            created_at: self.created_at,
        })
    }
}

const TENANT_COLUMNS: &str =
    "id, first_name, last_name, dni, phone, email, is_active, created_at";

#[async_trait]
impl TenantRepository for PostgresTenantRepository {
    async fn create(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
        sqlx::query(
            "INSERT INTO tenants (id, first_name, last_name, dni, phone, email, is_active, \
             created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(tenant.id.0)
        .bind(&tenant.first_name)
        .bind(&tenant.last_name)
        .bind(&tenant.dni)
        .bind(&tenant.phone)
        .bind(tenant.email.as_str())
        .bind(tenant.is_active)
        .bind(tenant.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("tenants_email_key")
                {
                    return TenantError::EmailAlreadyExists(tenant.email.as_str().to_string());
                }
            }
            TenantError::DatabaseError(e.to_string())
        })?;

        Ok(tenant)
    }

    async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, TenantError> {
        let row = sqlx::query_as::<_, TenantRow>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TenantError::DatabaseError(e.to_string()))?;

        row.map(TenantRow::try_into_tenant).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Tenant>, TenantError> {
        let rows = sqlx::query_as::<_, TenantRow>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TenantError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(TenantRow::try_into_tenant).collect()
    }

    async fn update(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
        let result = sqlx::query(
            "UPDATE tenants \
             SET first_name = $2, last_name = $3, dni = $4, phone = $5, email = $6, \
                 is_active = $7 \
             WHERE id = $1",
        )
        .bind(tenant.id.0)
        .bind(&tenant.first_name)
        .bind(&tenant.last_name)
        .bind(&tenant.dni)
        .bind(&tenant.phone)
        .bind(tenant.email.as_str())
        .bind(tenant.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("tenants_email_key")
                {
                    return TenantError::EmailAlreadyExists(tenant.email.as_str().to_string());
                }
            }
            TenantError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(TenantError::NotFound(tenant.id.to_string()));
        }

        Ok(tenant)
    }

    async fn delete(&self, id: &TenantId) -> Result<(), TenantError> {
        let result = sqlx::query("DELETE FROM tenants WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| TenantError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TenantError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
