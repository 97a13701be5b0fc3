use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

/// PBKDF2 iteration count. Intentionally slow to resist offline brute force;
/// must never be replaced with a single fast hash round.
const ITERATIONS: u32 = 1_000;

/// Derived key length in bytes (256 bits).
const KEY_LENGTH: usize = 32;

/// Deterministic password hasher.
///
/// Derives a 256-bit key from the password with PBKDF2-HMAC-SHA1 over a
/// process-wide salt and encodes it as base64. The same password and salt
/// always produce the same output, so verification is a plain string
/// comparison against the stored hash.
pub struct PasswordHasher {
    salt: Vec<u8>,
}

impl PasswordHasher {
    /// Create a hasher bound to a fixed salt.
    ///
    /// # Arguments
    /// * `salt` - Process-wide salt, loaded once from configuration
    ///
    /// # Returns
    /// PasswordHasher instance deriving keys over the given salt
    pub fn new(salt: impl Into<Vec<u8>>) -> Self {
        Self { salt: salt.into() }
    }

    /// Hash a plaintext password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Base64-encoded 256-bit derived key
    pub fn hash(&self, password: &str) -> String {
        let mut derived = [0u8; KEY_LENGTH];
        pbkdf2_hmac::<Sha1>(password.as_bytes(), &self.salt, ITERATIONS, &mut derived);
        BASE64.encode(derived)
    }

    /// Verify a password against a stored hash.
    ///
    /// Re-derives the key for the supplied password and compares it to the
    /// stored base64 form.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored base64 hash
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        self.hash(password) == stored_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(b"test-salt".to_vec())
    }

    #[test]
    fn test_hash_is_deterministic() {
        let hasher = hasher();
        assert_eq!(hasher.hash("my_secure_password"), hasher.hash("my_secure_password"));
    }

    #[test]
    fn test_hash_encodes_256_bits() {
        let decoded = BASE64
            .decode(hasher().hash("my_secure_password"))
            .expect("hash is not valid base64");
        assert_eq!(decoded.len(), KEY_LENGTH);
    }

    #[test]
    fn test_distinct_passwords_yield_distinct_hashes() {
        let hasher = hasher();
        assert_ne!(hasher.hash("password_one"), hasher.hash("password_two"));
    }

    #[test]
    fn test_distinct_salts_yield_distinct_hashes() {
        let first = PasswordHasher::new(b"salt-one".to_vec());
        let second = PasswordHasher::new(b"salt-two".to_vec());
        assert_ne!(first.hash("my_secure_password"), second.hash("my_secure_password"));
    }

    #[test]
    fn test_verify_accepts_exact_match_only() {
        let hasher = hasher();
        let hash = hasher.hash("my_secure_password");

        assert!(hasher.verify("my_secure_password", &hash));
        assert!(!hasher.verify("wrong_password", &hash));
        assert!(!hasher.verify("my_secure_password", "not-a-real-hash"));
    }
}
