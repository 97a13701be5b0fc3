use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenIssuer;
use chrono::Utc;
use rental_service::domain::email::EmailAddress;
use rental_service::domain::owner::errors::OwnerError;
use rental_service::domain::owner::models::Owner;
use rental_service::domain::owner::models::OwnerId;
use rental_service::domain::owner::ports::OwnerRepository;
use rental_service::domain::owner::service::OwnerService;
use rental_service::domain::tenant::errors::TenantError;
use rental_service::domain::tenant::models::Tenant;
use rental_service::domain::tenant::models::TenantId;
use rental_service::domain::tenant::ports::TenantRepository;
use rental_service::domain::tenant::service::TenantService;
use rental_service::inbound::http::router::create_router;

pub const TEST_SALT: &[u8] = b"test-salt-value";
pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-32b!";
pub const TEST_ISSUER: &str = "rental-service-test";
pub const TEST_AUDIENCE: &str = "rental-clients-test";

/// Test application that spawns a real server on a random port, backed by
/// in-memory repositories.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
    /// Issuer sharing the server's secrets, for decoding issued tokens and
    /// crafting tokens in tests
    pub token_issuer: TokenIssuer,
    owner_repository: Arc<InMemoryOwnerRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(
            TEST_SALT,
            TEST_SECRET,
            TEST_ISSUER,
            TEST_AUDIENCE,
        ));

        let owner_repository = Arc::new(InMemoryOwnerRepository::new());
        let tenant_repository = Arc::new(InMemoryTenantRepository::new());

        let owner_service = Arc::new(OwnerService::new(
            Arc::clone(&owner_repository),
            Arc::clone(&authenticator),
        ));
        let tenant_service = Arc::new(TenantService::new(tenant_repository));

        let router = create_router(owner_service, tenant_service, Arc::clone(&authenticator));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let token_issuer = TokenIssuer::new(TEST_SECRET, TEST_ISSUER, TEST_AUDIENCE);

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
            token_issuer,
            owner_repository,
        }
    }

    /// Insert an owner directly into the store, hashing the password the way
    /// the service does.
    pub async fn seed_owner(&self, email: &str, password: &str, first: &str, last: &str) -> Owner {
        let owner = Owner {
            id: OwnerId::new(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            dni: "30111222".to_string(),
            address: "Calle Falsa 123".to_string(),
            phone: "+54 381 555 0001".to_string(),
            email: EmailAddress::new(email.to_string()).expect("invalid seed email"),
            password_hash: self.authenticator.hash_password(password),
            is_active: true,
            created_at: Utc::now(),
        };

        self.owner_repository
            .create(owner)
            .await
            .expect("Failed to seed owner")
    }

    /// Number of owner-by-email lookups the store has served
    pub fn email_lookup_count(&self) -> usize {
        self.owner_repository.email_lookups.load(Ordering::SeqCst)
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PATCH request
    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PATCH request with Bearer token
    pub fn patch_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.patch(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }
}

/// In-memory owner store. Counts email lookups so tests can assert that the
/// store is never touched for malformed login requests.
pub struct InMemoryOwnerRepository {
    owners: Mutex<Vec<Owner>>,
    email_lookups: AtomicUsize,
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self {
            owners: Mutex::new(Vec::new()),
            email_lookups: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn create(&self, owner: Owner) -> Result<Owner, OwnerError> {
        let mut owners = self.owners.lock().unwrap();
        if owners.iter().any(|o| o.email == owner.email) {
            return Err(OwnerError::EmailAlreadyExists(
                owner.email.as_str().to_string(),
            ));
        }
        owners.push(owner.clone());
        Ok(owner)
    }

    async fn find_by_id(&self, id: &OwnerId) -> Result<Option<Owner>, OwnerError> {
        let owners = self.owners.lock().unwrap();
        Ok(owners.iter().find(|o| o.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Owner>, OwnerError> {
        self.email_lookups.fetch_add(1, Ordering::SeqCst);
        let owners = self.owners.lock().unwrap();
        Ok(owners.iter().find(|o| o.email == *email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Owner>, OwnerError> {
        Ok(self.owners.lock().unwrap().clone())
    }

    async fn update(&self, owner: Owner) -> Result<Owner, OwnerError> {
        let mut owners = self.owners.lock().unwrap();
        if owners
            .iter()
            .any(|o| o.id != owner.id && o.email == owner.email)
        {
            return Err(OwnerError::EmailAlreadyExists(
                owner.email.as_str().to_string(),
            ));
        }
        match owners.iter_mut().find(|o| o.id == owner.id) {
            Some(existing) => {
                *existing = owner.clone();
                Ok(owner)
            }
            None => Err(OwnerError::NotFound(owner.id.to_string())),
        }
    }

    async fn delete(&self, id: &OwnerId) -> Result<(), OwnerError> {
        let mut owners = self.owners.lock().unwrap();
        let before = owners.len();
        owners.retain(|o| o.id != *id);
        if owners.len() == before {
            return Err(OwnerError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// In-memory tenant store.
pub struct InMemoryTenantRepository {
    tenants: Mutex<Vec<Tenant>>,
}

impl InMemoryTenantRepository {
    pub fn new() -> Self {
        Self {
            tenants: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn create(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
        let mut tenants = self.tenants.lock().unwrap();
        if tenants.iter().any(|t| t.email == tenant.email) {
            return Err(TenantError::EmailAlreadyExists(
                tenant.email.as_str().to_string(),
            ));
        }
        tenants.push(tenant.clone());
        Ok(tenant)
    }

    async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, TenantError> {
        let tenants = self.tenants.lock().unwrap();
        Ok(tenants.iter().find(|t| t.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Tenant>, TenantError> {
        Ok(self.tenants.lock().unwrap().clone())
    }

    async fn update(&self, tenant: Tenant) -> Result<Tenant, TenantError> {
        let mut tenants = self.tenants.lock().unwrap();
        if tenants
            .iter()
            .any(|t| t.id != tenant.id && t.email == tenant.email)
        {
            return Err(TenantError::EmailAlreadyExists(
                tenant.email.as_str().to_string(),
            ));
        }
        match tenants.iter_mut().find(|t| t.id == tenant.id) {
            Some(existing) => {
                *existing = tenant.clone();
                Ok(tenant)
            }
            None => Err(TenantError::NotFound(tenant.id.to_string())),
        }
    }

    async fn delete(&self, id: &TenantId) -> Result<(), TenantError> {
        let mut tenants = self.tenants.lock().unwrap();
        let before = tenants.len();
        tenants.retain(|t| t.id != *id);
        if tenants.len() == before {
            return Err(TenantError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
