//! # JWT Token Management
//!
//! JWT token generation and validation for API authentication.

use std::{
    collections::HashSet,
    time::{Duration, SystemTime},
};

use error::{AppError, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::JwtConfig;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Username of the principal
    pub username: String,

    /// User email
    pub email: String,

    /// Token issuer
    pub iss: String,

    /// Token audience
    pub aud: String,

    /// Expiration time (Unix timestamp)
    pub exp: u64,

    /// Issued at (Unix timestamp)
    pub iat: u64,

    /// Unique token ID
    pub jti: String,
}

/// Creates a new JWT access token
///
/// # Arguments
///
/// * `config` - JWT configuration
/// * `user_id` - The user's unique identifier
/// * `username` - The user's login name
/// * `email` - The user's email address
///
/// # Errors
///
/// Returns an error if token encoding fails.
pub fn create_access_token(config: &JwtConfig, user_id: i32, username: &str, email: &str) -> Result<String> {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| AppError::unauthorized(format!("Failed to get current time: {}", e)))?;

    let issued_at = now.as_secs();
    let expiration = now + Duration::from_secs(config.expiration_seconds);

    let claims = Claims {
        sub:      user_id.to_string(),
        username: username.to_string(),
        email:    email.to_string(),
        iss:      config.issuer.clone(),
        aud:      config.audience.clone(),
        exp:      expiration.as_secs(),
        iat:      issued_at,
        jti:      uuid::Uuid::new_v4().to_string(),
    };

    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_base64_secret(&config.secret)
            .map_err(|e| AppError::unauthorized(format!("Invalid JWT secret: {}", e)))?,
    )
    .map_err(|e| AppError::unauthorized(format!("Failed to encode token: {}", e)))?;

    Ok(token)
}

/// Validates a JWT token and returns the claims
///
/// # Arguments
///
/// * `config` - JWT configuration
/// * `token` - The JWT token to validate
///
/// # Errors
///
/// Returns an error if token validation fails.
pub fn validate_token(config: &JwtConfig, token: &str) -> Result<Claims> {
    let decoding_key = DecodingKey::from_base64_secret(&config.secret)
        .map_err(|e| AppError::unauthorized(format!("Invalid JWT secret: {}", e)))?;

    let mut validation = Validation::default();
    let mut iss_set = HashSet::new();
    iss_set.insert(config.issuer.clone());
    validation.iss = Some(iss_set);
    let mut aud = HashSet::new();
    aud.insert(config.audience.clone());
    validation.aud = Some(aud);
    validation.validate_exp = true;

    let claims = jsonwebtoken::decode(token, &decoding_key, &validation)
        .map_err(|e| AppError::unauthorized(format!("Token validation failed: {}", e)))?;

    Ok(claims.claims)
}

/// Extracts the Bearer token from the Authorization header
///
/// # Arguments
///
/// * `auth_header` - The Authorization header value
///
/// # Returns
///
/// The token string if present, or None if missing/invalid.
pub fn extract_bearer_token(auth_header: &str) -> Option<String> {
    let token = auth_header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    }
    else {
        Some(token.to_string())
    }
}
