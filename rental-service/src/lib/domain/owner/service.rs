use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::owner::errors::OwnerError;
use crate::domain::owner::models::CreateOwnerCommand;
use crate::domain::owner::models::Owner;
use crate::domain::owner::models::OwnerCredentials;
use crate::domain::owner::models::OwnerId;
use crate::domain::owner::models::UpdateOwnerCommand;
use crate::domain::owner::ports::OwnerRepository;
use crate::domain::owner::ports::OwnerServicePort;

/// Deadline for the store lookup during login. An elapsed deadline surfaces
/// as a store failure, never an authentication failure.
const LOGIN_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Domain service implementation for owner operations.
///
/// Concrete implementation of OwnerServicePort with dependency injection.
pub struct OwnerService<R>
where
    R: OwnerRepository,
{
    repository: Arc<R>,
    authenticator: Arc<Authenticator>,
}

impl<R> OwnerService<R>
where
    R: OwnerRepository,
{
    /// Create a new owner service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Owner persistence implementation
    /// * `authenticator` - Credential hashing and token issuance
    pub fn new(repository: Arc<R>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<R> OwnerServicePort for OwnerService<R>
where
    R: OwnerRepository,
{
    async fn create_owner(&self, command: CreateOwnerCommand) -> Result<Owner, OwnerError> {
        let password_hash = self.authenticator.hash_password(&command.password);

        let owner = Owner {
            id: OwnerId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            dni: command.dni,
            address: command.address,
            phone: command.phone,
            email: command.email,
            password_hash,
            is_active: true,
            created_at: Utc::now(),
        };

        self.repository.create(owner).await
    }

    async fn get_owner(&self, id: &OwnerId) -> Result<Owner, OwnerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(OwnerError::NotFound(id.to_string()))
    }

    async fn list_owners(&self) -> Result<Vec<Owner>, OwnerError> {
        self.repository.list_all().await
    }

    async fn update_owner(
        &self,
        id: &OwnerId,
        command: UpdateOwnerCommand,
    ) -> Result<Owner, OwnerError> {
        let mut owner = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(OwnerError::NotFound(id.to_string()))?;

        if let Some(first_name) = command.first_name {
            owner.first_name = first_name;
        }
        if let Some(last_name) = command.last_name {
            owner.last_name = last_name;
        }
        if let Some(dni) = command.dni {
            owner.dni = dni;
        }
        if let Some(address) = command.address {
            owner.address = address;
        }
        if let Some(phone) = command.phone {
            owner.phone = phone;
        }
        if let Some(email) = command.email {
            owner.email = email;
        }
        if let Some(password) = command.password {
            owner.password_hash = self.authenticator.hash_password(&password);
        }
        if let Some(is_active) = command.is_active {
            owner.is_active = is_active;
        }

        self.repository.update(owner).await
    }

    async fn delete_owner(&self, id: &OwnerId) -> Result<(), OwnerError> {
        self.repository.delete(id).await
    }

    async fn login(&self, credentials: OwnerCredentials) -> Result<String, OwnerError> {
        let lookup = self.repository.find_by_email(&credentials.email);
        let owner = tokio::time::timeout(LOGIN_LOOKUP_TIMEOUT, lookup)
            .await
            .map_err(|_| OwnerError::StoreTimeout)??;

        let owner = match owner {
            Some(owner) => owner,
            None => {
                tracing::debug!(email = %credentials.email, "login rejected: unknown email");
                return Err(OwnerError::InvalidCredentials);
            }
        };

        let result = self
            .authenticator
            .authenticate(
                &credentials.password,
                &owner.password_hash,
                owner.email.as_str(),
                &owner.full_name(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => {
                    tracing::debug!(email = %credentials.email, "login rejected: password mismatch");
                    OwnerError::InvalidCredentials
                }
                AuthenticationError::JwtError(err) => {
                    OwnerError::Unknown(format!("Token issuance failed: {}", err))
                }
            })?;

        Ok(result.access_token)
    }
}
