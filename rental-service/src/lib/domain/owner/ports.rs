use async_trait::async_trait;

use crate::domain::email::EmailAddress;
use crate::domain::owner::errors::OwnerError;
use crate::domain::owner::models::CreateOwnerCommand;
use crate::domain::owner::models::Owner;
use crate::domain::owner::models::OwnerCredentials;
use crate::domain::owner::models::OwnerId;
use crate::domain::owner::models::UpdateOwnerCommand;

/// Port for owner domain service operations.
#[async_trait]
pub trait OwnerServicePort: Send + Sync + 'static {
    /// Create a new owner; the plaintext password in the command is hashed
    /// before it reaches the store.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create_owner(&self, command: CreateOwnerCommand) -> Result<Owner, OwnerError>;

    /// Retrieve owner by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Owner does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_owner(&self, id: &OwnerId) -> Result<Owner, OwnerError>;

    /// Retrieve all owners.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_owners(&self) -> Result<Vec<Owner>, OwnerError>;

    /// Update existing owner with optional fields. A new password, when
    /// present, is hashed before storage.
    ///
    /// # Errors
    /// * `NotFound` - Owner does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn update_owner(
        &self,
        id: &OwnerId,
        command: UpdateOwnerCommand,
    ) -> Result<Owner, OwnerError>;

    /// Delete existing owner.
    ///
    /// # Errors
    /// * `NotFound` - Owner does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_owner(&self, id: &OwnerId) -> Result<(), OwnerError>;

    /// Authenticate an owner and issue an access token.
    ///
    /// Unknown email and wrong password produce the same
    /// `InvalidCredentials` outcome; the two causes are distinguished only in
    /// internal logging.
    ///
    /// # Returns
    /// Signed bearer token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or password mismatch
    /// * `StoreTimeout` - Store lookup exceeded its deadline
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, credentials: OwnerCredentials) -> Result<String, OwnerError>;
}

/// Persistence operations for the owner aggregate.
#[async_trait]
pub trait OwnerRepository: Send + Sync + 'static {
    /// Persist new owner to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, owner: Owner) -> Result<Owner, OwnerError>;

    /// Retrieve owner by identifier.
    ///
    /// # Returns
    /// Optional owner entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, OwnerError>;

    /// Retrieve owner by email address (exact match).
    ///
    /// # Returns
    /// Optional owner entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Owner>, OwnerError>;

    /// Retrieve all owners from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Owner>, OwnerError>;

    /// Update existing owner in storage.
    ///
    /// # Errors
    /// * `NotFound` - Owner does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, owner: Owner) -> Result<Owner, OwnerError>;

    /// Remove owner from storage.
    ///
    /// # Errors
    /// * `NotFound` - Owner does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: &OwnerId) -> Result<(), OwnerError>;
}
