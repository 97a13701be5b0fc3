use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of every issued token, in minutes. Tokens expire exactly this
/// long after issuance and are never revoked server-side before expiry.
pub const TOKEN_LIFETIME_MINUTES: i64 = 60;

/// Role granted to an authenticated identity.
///
/// The system has a single role today; adding variants does not change
/// issuance or validation call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Propietario,
}

/// Claims carried by an access token.
///
/// Serializes to the standard JWT claim names (`sub`, `iss`, `aud`, `iat`,
/// `exp`) plus the `FullName` and `role` claims, so any compliant verifier
/// can validate signature, issuer, audience, and expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject: the owner's email address
    pub sub: String,

    /// Display name, "<first> <last>"
    #[serde(rename = "FullName")]
    pub full_name: String,

    /// Granted role
    pub role: Role,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated owner.
    ///
    /// Expiration is fixed at issuance time plus [`TOKEN_LIFETIME_MINUTES`].
    ///
    /// # Arguments
    /// * `email` - Owner email, becomes the subject
    /// * `full_name` - Display name
    /// * `issuer` - Configured issuer string
    /// * `audience` - Configured audience string
    ///
    /// # Returns
    /// Claims with sub, FullName, role, iss, aud, iat, and exp set
    pub fn for_owner(
        email: impl Into<String>,
        full_name: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(TOKEN_LIFETIME_MINUTES);

        Self {
            sub: email.into(),
            full_name: full_name.into(),
            role: Role::Propietario,
            iss: issuer.into(),
            aud: audience.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}
