//! # Authentication Middleware
//!
//! Bearer-token middleware for protecting API endpoints. Validates the JWT,
//! loads the principal, and rejects tokens for missing or inactive users.

use auth::jwt::{extract_bearer_token, validate_token};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use entity::users::Entity as UsersEntity;
use error::AppError;
use sea_orm::EntityTrait;

use crate::AppState;

/// User information extracted from the JWT token and the users table
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User ID
    pub id:       i32,
    /// Login name
    pub username: String,
    /// User email
    pub email:    String,
}

/// Authentication middleware
///
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the JWT token
/// 3. Confirms the user still exists and is active
/// 4. Adds the authenticated user to request extensions
pub async fn auth_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let auth_header = match request.headers().get(header::AUTHORIZATION) {
        Some(header) => {
            match header.to_str() {
                Ok(h) => h,
                Err(_) => {
                    return unauthorized("Invalid authorization header encoding");
                },
            }
        },
        None => {
            return unauthorized("Missing authorization header");
        },
    };

    let token = match extract_bearer_token(auth_header) {
        Some(token) => token,
        None => {
            return unauthorized("Invalid authorization header format");
        },
    };

    let claims = match validate_token(&state.jwt_config, &token) {
        Ok(claims) => claims,
        Err(e) => {
            let message = e.to_string().to_lowercase();
            if message.contains("expired") {
                return unauthorized("Token has expired");
            }
            return unauthorized("Invalid token");
        },
    };

    let user_id: i32 = match claims.sub.parse() {
        Ok(id) => id,
        Err(_) => {
            return unauthorized("Invalid token subject");
        },
    };

    let db_user = match UsersEntity::find_by_id(user_id).one(&state.db).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return unauthorized("User no longer exists");
        },
        Err(e) => {
            tracing::error!("Failed to load user for token validation: {}", e);
            return AppError::internal("Authentication service unavailable").into_response();
        },
    };

    if !db_user.is_active {
        return unauthorized("User account is inactive");
    }

    let user = AuthenticatedUser {
        id:       db_user.id,
        username: db_user.username,
        email:    db_user.email,
    };

    request.extensions_mut().insert(user);

    next.run(request).await
}

fn unauthorized(message: &str) -> Response { AppError::unauthorized(message).into_response() }
