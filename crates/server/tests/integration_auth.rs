//! # Integration Tests for Authentication
//!
//! Register/login/me flow against the in-memory store.

mod common;

use common::create_test_app_state;
use entity::users::Entity as UsersEntity;
use error::AppError;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use server::{
    dto::auth::{LoginRequest, RegisterRequest},
    handlers,
    middleware::auth::AuthenticatedUser,
};

const TEST_PASSWORD: &str = "SecureTestPassword123";

fn register_request(username: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email:    format!("{}@example.com", username),
        password: TEST_PASSWORD.to_string(),
    }
}

#[tokio::test]
async fn test_register_and_login_flow() {
    let state = create_test_app_state().await;

    let user = handlers::auth::register_handler(&state, register_request("admin"))
        .await
        .unwrap()
        .0;
    assert_eq!(user.username, "admin");
    assert!(user.is_active);

    let tokens = handlers::auth::login_handler(
        &state,
        LoginRequest {
            username: "admin".to_string(),
            password: TEST_PASSWORD.to_string(),
        },
    )
    .await
    .unwrap()
    .0;
    assert_eq!(tokens.token_type, "bearer");

    let claims = auth::jwt::validate_token(&state.jwt_config, &tokens.access_token).unwrap();
    assert_eq!(claims.username, "admin");
    assert_eq!(claims.sub, user.id.to_string());

    let me = handlers::auth::me_handler(
        &state,
        AuthenticatedUser {
            id:       user.id,
            username: user.username.clone(),
            email:    user.email.clone(),
        },
    )
    .await
    .unwrap()
    .0;
    assert_eq!(me.id, user.id);
}

#[tokio::test]
async fn test_register_duplicate_username_conflict() {
    let state = create_test_app_state().await;

    handlers::auth::register_handler(&state, register_request("admin"))
        .await
        .unwrap();

    let mut request = register_request("admin");
    request.email = "different@example.com".to_string();

    let err = handlers::auth::register_handler(&state, request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));
}

#[tokio::test]
async fn test_register_duplicate_email_conflict() {
    let state = create_test_app_state().await;

    handlers::auth::register_handler(&state, register_request("admin"))
        .await
        .unwrap();

    let mut request = register_request("other");
    request.email = "admin@example.com".to_string();

    let err = handlers::auth::register_handler(&state, request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));
}

#[tokio::test]
async fn test_register_weak_password_rejected() {
    let state = create_test_app_state().await;

    let mut request = register_request("admin");
    request.password = "lettersonly".to_string();

    let err = handlers::auth::register_handler(&state, request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let state = create_test_app_state().await;

    handlers::auth::register_handler(&state, register_request("admin"))
        .await
        .unwrap();

    let err = handlers::auth::login_handler(
        &state,
        LoginRequest {
            username: "admin".to_string(),
            password: "WrongPassword123".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_login_inactive_user_rejected() {
    let state = create_test_app_state().await;

    let user = handlers::auth::register_handler(&state, register_request("admin"))
        .await
        .unwrap()
        .0;

    let model = UsersEntity::find_by_id(user.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    let mut active_model: entity::users::ActiveModel = model.into();
    active_model.is_active = Set(false);
    active_model.update(&state.db).await.unwrap();

    let err = handlers::auth::login_handler(
        &state,
        LoginRequest {
            username: "admin".to_string(),
            password: TEST_PASSWORD.to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized { .. }));
}
