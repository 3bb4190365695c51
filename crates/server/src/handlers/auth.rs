//! # Authentication Handlers
//!
//! Registration, login, and principal lookup. Everything else about
//! authentication lives in the `auth` crate and the bearer middleware.

use auth::{
    jwt::create_access_token,
    password::{hash_password, validate_password_strength, verify_password},
    secrecy::{ExposeSecret, SecretString},
};
use axum::Json;
use chrono::Utc;
use entity::users::{Column as UserColumn, Entity as UsersEntity};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, Set};
use tracing::info;
use validator::Validate;

use crate::{
    dto::auth::{LoginRequest, RegisterRequest, TokenResponse, UserResponse},
    middleware::auth::AuthenticatedUser,
    AppState,
};

/// Register a new user account
pub async fn register_handler(state: &AppState, req: RegisterRequest) -> Result<Json<UserResponse>> {
    req.validate().map_err(AppError::from)?;

    if let Err(errors) = validate_password_strength(&req.password) {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(AppError::validation(messages.join(", ")));
    }

    let existing = UsersEntity::find()
        .filter(
            Condition::any()
                .add(UserColumn::Username.eq(&req.username))
                .add(UserColumn::Email.eq(&req.email)),
        )
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(AppError::conflict(
            "A user with this username or email already exists",
        ));
    }

    let password_secret = SecretString::from(req.password);
    let hashed_password = hash_password(&password_secret, None)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))?;

    let user = entity::users::ActiveModel {
        username: Set(req.username.clone()),
        email: Set(req.email.clone()),
        hashed_password: Set(hashed_password.expose_secret().to_string()),
        is_active: Set(true),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    let created = user
        .insert(&state.db)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                AppError::conflict("A user with this username or email already exists")
            }
            else {
                AppError::database(format!("Failed to create user: {}", e))
            }
        })?;

    info!(user_id = %created.id, username = %created.username, "User registered");

    Ok(Json(user_model_to_response(&created)))
}

/// Authenticate a user and issue an access token
pub async fn login_handler(state: &AppState, req: LoginRequest) -> Result<Json<TokenResponse>> {
    req.validate().map_err(AppError::from)?;

    let user = UsersEntity::find()
        .filter(UserColumn::Username.eq(&req.username))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

    let password_secret = SecretString::from(req.password);
    verify_password(&password_secret, &user.hashed_password)
        .map_err(|_| AppError::unauthorized("Invalid username or password"))?;

    if !user.is_active {
        return Err(AppError::unauthorized("User account is inactive"));
    }

    let access_token = create_access_token(&state.jwt_config, user.id, &user.username, &user.email)?;

    info!(user_id = %user.id, "User logged in");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: state.jwt_config.expiration_seconds,
    }))
}

/// Return the authenticated principal's account
pub async fn me_handler(state: &AppState, user: AuthenticatedUser) -> Result<Json<UserResponse>> {
    let db_user = UsersEntity::find_by_id(user.id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(user_model_to_response(&db_user)))
}

/// Convert a user entity model to a response DTO
fn user_model_to_response(user: &entity::users::Model) -> UserResponse {
    UserResponse {
        id:         user.id,
        username:   user.username.clone(),
        email:      user.email.clone(),
        is_active:  user.is_active,
        created_at: user.created_at.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_model_to_response() {
        let user = entity::users::Model {
            id:              1,
            username:        "admin".to_string(),
            email:           "admin@example.com".to_string(),
            hashed_password: "hash".to_string(),
            is_active:       true,
            created_at:      chrono::NaiveDateTime::default(),
        };

        let response = user_model_to_response(&user);
        assert_eq!(response.id, 1);
        assert_eq!(response.username, "admin");
        assert!(response.is_active);
    }
}
