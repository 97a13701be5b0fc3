use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::password::PasswordHasher;

/// Authentication coordinator combining credential verification and token
/// issuance.
///
/// Holds the process-wide secret material (salt, signing key, issuer,
/// audience), injected once at construction and immutable afterwards.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `salt` - Fixed salt for password derivation
    /// * `signing_key` - Secret key for token signing
    /// * `issuer` - Issuer string for issued tokens
    /// * `audience` - Audience string for issued tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(
        salt: &[u8],
        signing_key: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            password_hasher: PasswordHasher::new(salt),
            token_issuer: TokenIssuer::new(signing_key, issuer, audience),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Base64-encoded derived key
    pub fn hash_password(&self, password: &str) -> String {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash for the claimed identity
    /// * `email` - Identity email (token subject)
    /// * `full_name` - Identity display name
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `JwtError` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        email: &str,
        full_name: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_issuer.issue(email, full_name)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate and decode an access token.
    ///
    /// # Arguments
    /// * `token` - Token string
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `JwtError` - Signature, issuer, audience, or expiry check failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_issuer.decode(token)
    }
}
