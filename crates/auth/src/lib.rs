//! # Crewdesk Auth
//!
//! The authentication collaborator: Argon2id password hashing and JWT
//! access-token issuance/validation. Nothing in here touches the business
//! graph; the server consumes a verified principal and moves on.

pub mod jwt;
pub mod password;

// Re-export so downstream crates use one secrecy version.
pub use secrecy;

/// JWT signing configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Base64-encoded signing secret
    pub secret:             String,
    /// Access token lifetime in seconds
    pub expiration_seconds: u64,
    /// Token issuer
    pub issuer:             String,
    /// Token audience
    pub audience:           String,
}

impl JwtConfig {
    /// Build the configuration from `CREWDESK_JWT_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a config error when `CREWDESK_JWT_SECRET` is unset.
    pub fn from_env() -> error::Result<Self> {
        let secret = std::env::var("CREWDESK_JWT_SECRET")
            .map_err(|_| error::AppError::config("CREWDESK_JWT_SECRET is not set"))?;
        let expiration_seconds = std::env::var("CREWDESK_JWT_EXPIRATION_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Ok(Self {
            secret,
            expiration_seconds,
            issuer: std::env::var("CREWDESK_JWT_ISSUER").unwrap_or_else(|_| "crewdesk".to_string()),
            audience: std::env::var("CREWDESK_JWT_AUDIENCE").unwrap_or_else(|_| "crewdesk-api".to_string()),
        })
    }
}
