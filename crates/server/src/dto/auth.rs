//! # Authentication Data Transfer Objects
//!
//! Request and response types for authentication endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for registering a new user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login name
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username must be between 3 and 50 characters"
    ))]
    pub username: String,

    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password (strength rules applied by the auth collaborator)
    #[validate(length(
        min = 8,
        max = 256,
        message = "Password must be between 8 and 256 characters"
    ))]
    pub password: String,
}

/// Request body for user login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login name
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response containing the issued access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    /// JWT access token for API requests
    pub access_token: String,
    /// Token type (always "bearer")
    pub token_type:   String,
    /// Token lifetime in seconds
    pub expires_in:   u64,
}

/// Response describing a user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id:         i32,
    /// Login name
    pub username:   String,
    /// Email address
    pub email:      String,
    /// Whether the account may authenticate
    pub is_active:  bool,
    /// Account creation timestamp
    pub created_at: String,
}

/// Generic success envelope for delete-style endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Human-readable result message
    pub message: String,
}
