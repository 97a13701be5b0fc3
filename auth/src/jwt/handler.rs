use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Issues and validates signed access tokens.
///
/// Uses HS256 (HMAC with SHA-256) keyed by a process-wide secret. Issuer and
/// audience are fixed at construction and enforced on every decode.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `signing_key` - Secret key for signing tokens (should be stored securely)
    /// * `issuer` - Issuer string stamped into every token
    /// * `audience` - Audience string stamped into every token
    ///
    /// # Returns
    /// TokenIssuer configured with HS256
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(signing_key: &[u8], issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(signing_key),
            decoding_key: DecodingKey::from_secret(signing_key),
            algorithm: Algorithm::HS256,
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Issue a token for an authenticated owner.
    ///
    /// Builds the claim set with the configured issuer and audience and a
    /// fixed 60-minute expiry, then signs it. The token value itself is never
    /// logged; the issuance event carries subject and expiry only.
    ///
    /// # Arguments
    /// * `email` - Owner email (token subject)
    /// * `full_name` - Owner display name
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, email: &str, full_name: &str) -> Result<String, JwtError> {
        let claims =
            Claims::for_owner(email, full_name, self.issuer.as_str(), self.audience.as_str());
        let token = self.encode(&claims)?;

        tracing::debug!(
            subject = %claims.sub,
            expires_at = claims.exp,
            "access token issued"
        );

        Ok(token)
    }

    /// Encode a claim set into a signed token.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Validates signature, expiry, issuer, and audience.
    ///
    /// # Arguments
    /// * `token` - Token string to decode
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `TokenExpired` - Token has passed its expiration timestamp
    /// * `InvalidToken` - Signature, issuer, or audience does not match
    /// * `DecodingFailed` - Token is malformed
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    ErrorKind::InvalidSignature
                    | ErrorKind::InvalidIssuer
                    | ErrorKind::InvalidAudience => JwtError::InvalidToken(e.to_string()),
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::jwt::claims::Role;
    use crate::jwt::claims::TOKEN_LIFETIME_MINUTES;

    const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes!";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, "rental-service", "rental-clients")
    }

    #[test]
    fn test_issue_and_decode() {
        let token = issuer()
            .issue("a@b.com", "Ana Gomez")
            .expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = issuer().decode(&token).expect("Failed to decode token");
        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.full_name, "Ana Gomez");
        assert_eq!(claims.role, Role::Propietario);
        assert_eq!(claims.iss, "rental-service");
        assert_eq!(claims.aud, "rental-clients");
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME_MINUTES * 60);
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let token = issuer()
            .issue("a@b.com", "Ana Gomez")
            .expect("Failed to issue token");

        let other = TokenIssuer::new(
            b"another-secret-key-32-bytes-long!!",
            "rental-service",
            "rental-clients",
        );
        assert!(matches!(other.decode(&token), Err(JwtError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_rejects_wrong_issuer_and_audience() {
        let token = issuer()
            .issue("a@b.com", "Ana Gomez")
            .expect("Failed to issue token");

        let wrong_issuer = TokenIssuer::new(SECRET, "someone-else", "rental-clients");
        assert!(matches!(
            wrong_issuer.decode(&token),
            Err(JwtError::InvalidToken(_))
        ));

        let wrong_audience = TokenIssuer::new(SECRET, "rental-service", "other-clients");
        assert!(matches!(
            wrong_audience.decode(&token),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        let issuer = issuer();

        let mut claims =
            Claims::for_owner("a@b.com", "Ana Gomez", "rental-service", "rental-clients");
        claims.iat = (Utc::now() - Duration::hours(2)).timestamp();
        claims.exp = (Utc::now() - Duration::hours(1)).timestamp();

        let token = issuer.encode(&claims).expect("Failed to encode token");
        assert!(matches!(issuer.decode(&token), Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_decode_malformed_token() {
        assert!(issuer().decode("not.a.token").is_err());
    }
}
