use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::email::EmailAddress;
use crate::domain::owner::errors::OwnerError;
use crate::domain::owner::models::Owner;
use crate::domain::owner::models::OwnerId;
use crate::domain::owner::ports::OwnerRepository;

pub struct PostgresOwnerRepository {
    pool: PgPool,
}

impl PostgresOwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OwnerRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    dni: String,
    address: String,
    phone: String,
    email: String,
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl OwnerRow {
    fn try_into_owner(self) -> Result<Owner, OwnerError> {
        Ok(Owner {
            id: OwnerId(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            dni: self.dni,
            address: self.address,
            phone: self.phone,
            email: EmailAddress::new(self.email)?,
            password_hash: self.password_hash,
            is_active: self.is_active,
            created_at: self.created_at,
        })
    }
}

const OWNER_COLUMNS: &str =
    "id, first_name, last_name, dni, address, phone, email, password_hash, is_active, created_at";

#[async_trait]
impl OwnerRepository for PostgresOwnerRepository {
    async fn create(&self, owner: Owner) -> Result<Owner, OwnerError> {
        sqlx::query(
            "INSERT INTO owners (id, first_name, last_name, dni, address, phone, email, \
             password_hash, is_active, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(owner.id.0)
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.dni)
        .bind(&owner.address)
        .bind(&owner.phone)
        .bind(owner.email.as_str())
        .bind(&owner.password_hash)
        .bind(owner.is_active)
        .bind(owner.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("owners_email_key") {
                    return OwnerError::EmailAlreadyExists(owner.email.as_str().to_string());
                }
            }
            OwnerError::DatabaseError(e.to_string())
        })?;

        Ok(owner)
    }

    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, OwnerError> {
        let row = sqlx::query_as::<_, OwnerRow>(&format!(
            "SELECT {OWNER_COLUMNS} FROM owners WHERE id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| OwnerError::DatabaseError(e.to_string()))?;

        row.map(OwnerRow::try_into_owner).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Owner>, OwnerError> {
        let row = sqlx::query_as::<_, OwnerRow>(&format!(
            "SELECT {OWNER_COLUMNS} FROM owners WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| OwnerError::DatabaseError(e.to_string()))?;

        row.map(OwnerRow::try_into_owner).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Owner>, OwnerError> {
        let rows = sqlx::query_as::<_, OwnerRow>(&format!(
            "SELECT {OWNER_COLUMNS} FROM owners ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OwnerError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(OwnerRow::try_into_owner).collect()
    }

    async fn update(&self, owner: Owner) -> Result<Owner, OwnerError> {
        let result = sqlx::query(
            "UPDATE owners \
             SET first_name = $2, last_name = $3, dni = $4, address = $5, phone = $6, \
                 email = $7, password_hash = $8, is_active = $9 \
             WHERE id = $1",
        )
        .bind(owner.id.0)
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.dni)
        .bind(&owner.address)
        .bind(&owner.phone)
        .bind(owner.email.as_str())
        .bind(&owner.password_hash)
        .bind(owner.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("owners_email_key") {
                    return OwnerError::EmailAlreadyExists(owner.email.as_str().to_string());
                }
            }
            OwnerError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(OwnerError::NotFound(owner.id.to_string()));
        }

        Ok(owner)
    }

    async fn delete(&self, id: &OwnerId) -> Result<(), OwnerError> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| OwnerError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(OwnerError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
