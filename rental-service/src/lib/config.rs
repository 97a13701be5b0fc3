use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Process-wide secret material for the authentication flow.
///
/// Loaded once at startup and held immutable for the process lifetime;
/// rotation requires a restart.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub salt: String,
    pub secret_key: String,
    pub issuer: String,
    pub audience: String,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, AUTH__SECRET_KEY, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// A missing or empty secret is a fatal startup condition, not a
    /// per-request error.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SECRET_KEY=... overrides auth.secret_key
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("database.url", &self.database.url),
            ("auth.salt", &self.auth.salt),
            ("auth.secret_key", &self.auth.secret_key),
            ("auth.issuer", &self.auth.issuer),
            ("auth.audience", &self.auth.audience),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Message(format!(
                    "required configuration value `{}` is missing or empty",
                    name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/rental".to_string(),
            },
            server: ServerConfig { http_port: 8080 },
            auth: AuthConfig {
                salt: "salt".to_string(),
                secret_key: "secret".to_string(),
                issuer: "issuer".to_string(),
                audience: "audience".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let mut config = config();
        config.auth.secret_key = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_salt() {
        let mut config = config();
        config.auth.salt = String::new();
        assert!(config.validate().is_err());
    }
}
