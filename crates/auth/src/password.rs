//! Password hashing and verification utilities using Argon2id.
//!
//! Hashes are stored in the conventional
//! `$argon2id$v=19$m=...,t=...,p=...$<salt_b64>$<hash_b64>` format so the
//! parameters travel with the hash and can be tightened later without
//! invalidating existing credentials.

use argon2::{Algorithm, Argon2, Params, Version};
use base64::prelude::*;
use rand::{rng, RngCore};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Verification failed: password does not match")]
    VerificationFailed,

    #[error("Invalid hash format")]
    InvalidHashFormat,

    #[error("Base64 decoding failed: {0}")]
    DecodingFailed(#[from] base64::DecodeError),
}

/// Password strength violations reported by [`validate_password_strength`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordValidationError {
    #[error("Password must be at least 8 characters long")]
    TooShort,

    #[error("Password must not exceed 256 characters")]
    TooLong,

    #[error("Password must contain at least one letter")]
    MissingLetter,

    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Configuration for Argon2id password hashing.
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// Memory cost in KiB (default: 15 MiB = 15360 KiB)
    pub memory_cost: u32,
    /// Number of iterations (default: 3)
    pub time_cost:   u32,
    /// Number of lanes (default: 2)
    pub parallelism: u32,
    /// Length of the generated hash (default: 32 bytes)
    pub hash_length: u32,
    /// Length of the salt (default: 16 bytes)
    pub salt_length: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_cost: 15360, // 15 MiB
            time_cost:   3,
            parallelism: 2,
            hash_length: 32,
            salt_length: 16,
        }
    }
}

/// Hashes a password using Argon2id.
///
/// # Arguments
///
/// * `password` - The password to hash
/// * `config` - Optional configuration for Argon2id parameters
pub fn hash_password(password: &SecretString, config: Option<PasswordConfig>) -> Result<SecretString, PasswordError> {
    let config = config.unwrap_or_default();

    let mut salt = vec![0u8; config.salt_length as usize];
    rng().fill_bytes(&mut salt);

    let argon2 = Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            Some(config.hash_length as usize),
        )
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?,
    );

    let mut output = vec![0u8; config.hash_length as usize];
    argon2
        .hash_password_into(password.expose_secret().as_bytes(), &salt, &mut output)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

    let salt_b64 = BASE64_STANDARD.encode(&salt);
    let hash_b64 = BASE64_STANDARD.encode(&output);

    let hash_format = format!(
        "$argon2id$v=19$m={},t={},p={}${}${}",
        config.memory_cost, config.time_cost, config.parallelism, salt_b64, hash_b64
    );

    Ok(SecretString::from(hash_format))
}

/// Verifies a password against a stored hash.
///
/// # Arguments
///
/// * `password` - The password to verify
/// * `expected_hash` - The stored hash to verify against
pub fn verify_password(password: &SecretString, expected_hash: &str) -> Result<(), PasswordError> {
    // Splitting by '$' gives: ["", "argon2id", "v=19", "m=...,t=...,p=...", "<salt>", "<hash>"]
    let parts: Vec<&str> = expected_hash.split('$').collect();
    if parts.len() != 6 {
        return Err(PasswordError::InvalidHashFormat);
    }

    let algo_identifier = parts[1];
    let version_str = parts[2];
    let params_str = parts[3];
    let salt_b64 = parts[4];
    let hash_b64 = parts[5];

    if algo_identifier != "argon2id" {
        return Err(PasswordError::InvalidHashFormat);
    }

    if version_str != "v=19" {
        return Err(PasswordError::InvalidHashFormat);
    }

    let memory_cost: u32 = parse_param(params_str, 'm').unwrap_or(15360);
    let time_cost: u32 = parse_param(params_str, 't').unwrap_or(3);
    let parallelism: u32 = parse_param(params_str, 'p').unwrap_or(2);

    let salt = BASE64_STANDARD.decode(salt_b64)?;
    let stored_hash = BASE64_STANDARD.decode(hash_b64)?;

    let argon2 = Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(memory_cost, time_cost, parallelism, Some(stored_hash.len()))
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))?,
    );

    let mut computed_hash = vec![0u8; stored_hash.len()];
    argon2
        .hash_password_into(
            password.expose_secret().as_bytes(),
            &salt,
            &mut computed_hash,
        )
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

    use subtle::ConstantTimeEq;
    if computed_hash.as_slice().ct_eq(&stored_hash).into() {
        Ok(())
    }
    else {
        Err(PasswordError::VerificationFailed)
    }
}

/// Parse one `key=value` entry out of `m=...,t=...,p=...`.
fn parse_param(params_str: &str, key: char) -> Option<u32> {
    params_str
        .split(',')
        .find(|p| p.starts_with(key))
        .and_then(|p| p.split('=').nth(1))
        .and_then(|p| p.parse().ok())
}

/// Checks if a password is strong enough.
///
/// # Arguments
///
/// * `password` - The password to check
///
/// # Returns
///
/// A `Result` indicating success or a vector of validation errors.
pub fn validate_password_strength(password: &str) -> Result<(), Vec<PasswordValidationError>> {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push(PasswordValidationError::TooShort);
    }

    if password.len() > 256 {
        errors.push(PasswordValidationError::TooLong);
    }

    if !password.chars().any(|c| c.is_alphabetic()) {
        errors.push(PasswordValidationError::MissingLetter);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(PasswordValidationError::MissingDigit);
    }

    if errors.is_empty() {
        Ok(())
    }
    else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let password = SecretString::from("correct horse battery 1".to_string());
        let hash = hash_password(&password, None).unwrap();
        assert!(verify_password(&password, hash.expose_secret()).is_ok());
    }

    #[test]
    fn test_verify_wrong_password() {
        let password = SecretString::from("correct horse battery 1".to_string());
        let wrong = SecretString::from("incorrect horse battery 1".to_string());
        let hash = hash_password(&password, None).unwrap();
        assert!(matches!(
            verify_password(&wrong, hash.expose_secret()),
            Err(PasswordError::VerificationFailed)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = SecretString::from("same password 1".to_string());
        let a = hash_password(&password, None).unwrap();
        let b = hash_password(&password, None).unwrap();
        assert_ne!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn test_verify_invalid_format() {
        let password = SecretString::from("whatever1".to_string());
        assert!(matches!(
            verify_password(&password, "not-a-hash"),
            Err(PasswordError::InvalidHashFormat)
        ));
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("m=15360,t=3,p=2", 'm'), Some(15360));
        assert_eq!(parse_param("m=15360,t=3,p=2", 't'), Some(3));
        assert_eq!(parse_param("m=15360,t=3,p=2", 'p'), Some(2));
        assert_eq!(parse_param("m=15360,t=3", 'p'), None);
    }

    #[test]
    fn test_password_strength_ok() {
        assert!(validate_password_strength("sturdy-pass-99").is_ok());
    }

    #[test]
    fn test_password_strength_too_short() {
        let errors = validate_password_strength("ab1").unwrap_err();
        assert!(errors.contains(&PasswordValidationError::TooShort));
    }

    #[test]
    fn test_password_strength_missing_digit() {
        let errors = validate_password_strength("onlyletters").unwrap_err();
        assert!(errors.contains(&PasswordValidationError::MissingDigit));
    }
}
