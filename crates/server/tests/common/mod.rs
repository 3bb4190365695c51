//! # Common Test Utilities
//!
//! Shared test infrastructure: a fresh in-memory SQLite database per test,
//! migrated with the workspace migrator, plus fixture builders for the
//! staffing graph.

#![allow(dead_code)]

use std::sync::Once;

use base64::prelude::*;
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database};
use server::{
    dto::{
        employees::EmployeeData,
        leaders::{CreateLeaderRequest, LeaderResponse},
        programmers::{CreateProgrammerRequest, ProgrammerResponse},
        projects::ProjectData,
        teams::{CreateTeamRequest, TeamResponse},
    },
    handlers,
    middleware::auth::AuthenticatedUser,
    AppState,
};

/// Initialize test logging (run once per test session)
static INIT: Once = Once::new();

/// Initialize test environment including structured logging
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Create test app state backed by a fresh in-memory SQLite database
///
/// The pool is pinned to one connection so every query sees the same
/// in-memory database.
pub async fn create_test_app_state() -> AppState {
    init_test_env();

    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);
    options.sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let jwt_config = auth::JwtConfig {
        secret:             BASE64_STANDARD.encode("test-jwt-secret-for-integration-tests!!"),
        expiration_seconds: 3600,
        issuer:             "crewdesk-test".to_string(),
        audience:           "crewdesk-api-test".to_string(),
    };

    AppState {
        db,
        jwt_config,
        start_time: std::time::Instant::now(),
    }
}

/// A principal for handler calls that require one
pub fn test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id:       1,
        username: "tester".to_string(),
        email:    "tester@example.com".to_string(),
    }
}

/// Employee payload with a distinct identity card
pub fn employee_data(identity_card: &str, name: &str, base_salary: i64) -> EmployeeData {
    EmployeeData {
        identity_card: identity_card.to_string(),
        name:          name.to_string(),
        age:           30,
        sex:           "F".to_string(),
        base_salary:   Decimal::from(base_salary),
    }
}

/// Create a programmer through the handler under test
pub async fn create_programmer(
    state: &AppState,
    identity_card: &str,
    name: &str,
    languages: &[&str],
) -> ProgrammerResponse {
    let request = CreateProgrammerRequest {
        employee_data: employee_data(identity_card, name, 1000),
        category:      entity::programmers::ProgrammerCategory::B,
        languages:     languages.iter().map(|s| s.to_string()).collect(),
    };

    handlers::programmers::create_programmer_handler(state, test_user(), request)
        .await
        .expect("Failed to create programmer")
        .0
}

/// Create a leader through the handler under test
pub async fn create_leader(
    state: &AppState,
    identity_card: &str,
    name: &str,
    base_salary: i64,
    years_experience: i32,
    projects_led: i32,
) -> LeaderResponse {
    let request = CreateLeaderRequest {
        employee_data: employee_data(identity_card, name, base_salary),
        years_experience,
        projects_led,
    };

    handlers::leaders::create_leader_handler(state, test_user(), request)
        .await
        .expect("Failed to create leader")
        .0
}

/// Create a team through the handler under test
pub async fn create_team(state: &AppState, name: &str, leader_id: Option<i32>) -> TeamResponse {
    let request = CreateTeamRequest {
        name: name.to_string(),
        leader_id,
    };

    handlers::teams::create_team_handler(state, test_user(), request)
        .await
        .expect("Failed to create team")
        .0
}

/// Project payload assigned to the given team
pub fn project_data(name: &str, team_id: i32, estimated_time: i32, price: i64) -> ProjectData {
    ProjectData {
        name: name.to_string(),
        description: None,
        estimated_time,
        price: Decimal::from(price),
        team_id,
    }
}
