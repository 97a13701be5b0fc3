//! Authentication library for the property-rental backend.
//!
//! Provides the credential-verification flow for owner login:
//! - Deterministic password hashing (PBKDF2-HMAC-SHA1, fixed salt)
//! - Signed access-token issuance and validation (HS256, fixed 60-minute expiry)
//! - An authenticator coordinating both
//!
//! All secret material (salt, signing key, issuer, audience) is injected at
//! construction time and immutable for the process lifetime.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new(b"fixed-salt".to_vec());
//! let hash = hasher.hash("my_password");
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Token Issuance
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", "issuer", "audience");
//! let token = issuer.issue("owner@example.com", "Ana Gomez").unwrap();
//! let claims = issuer.decode(&token).unwrap();
//! assert_eq!(claims.sub, "owner@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(
//!     b"fixed-salt",
//!     b"secret_key_at_least_32_bytes_long!",
//!     "issuer",
//!     "audience",
//! );
//!
//! // Registration: hash the password for storage
//! let stored_hash = auth.hash_password("password123");
//!
//! // Login: verify and issue a token
//! let result = auth
//!     .authenticate("password123", &stored_hash, "owner@example.com", "Ana Gomez")
//!     .unwrap();
//!
//! // Later: validate the bearer token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "owner@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::Role;
pub use jwt::TokenIssuer;
pub use jwt::TOKEN_LIFETIME_MINUTES;
pub use password::PasswordHasher;
