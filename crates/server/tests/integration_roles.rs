//! # Integration Tests for Role Operations
//!
//! Programmer and leader lifecycle: transactional creation, language-set
//! replacement, and the referential guards on deletion.

mod common;

use std::collections::HashSet;

use common::{create_leader, create_programmer, create_team, create_test_app_state, employee_data, test_user};
use entity::{
    employees::Entity as EmployeesEntity,
    programmer_languages::Entity as LanguagesEntity,
    programmers::{Entity as ProgrammersEntity, ProgrammerCategory},
};
use error::AppError;
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};
use server::{
    dto::{
        programmers::{AddLanguageRequest, CreateProgrammerRequest, UpdateProgrammerRequest},
        teams::AddTeamMemberRequest,
        employees::UpdateEmployeeRequest,
        leaders::UpdateLeaderRequest,
    },
    handlers,
};

#[tokio::test]
async fn test_create_programmer_language_roundtrip() {
    let state = create_test_app_state().await;

    let created = create_programmer(&state, "P1001", "Ada", &["Go", "Rust", "Go"]).await;
    assert_eq!(created.employee.role, "programmer");

    let languages = handlers::programmers::get_programmer_languages_handler(&state, created.employee.id)
        .await
        .unwrap()
        .0
        .languages;

    let set: HashSet<String> = languages.into_iter().collect();
    let expected: HashSet<String> = ["Go", "Rust"].iter().map(|s| s.to_string()).collect();
    assert_eq!(set, expected);
}

#[tokio::test]
async fn test_create_programmer_duplicate_identity_leaves_no_orphan() {
    let state = create_test_app_state().await;

    create_programmer(&state, "P2001", "Ada", &["Go"]).await;

    let request = CreateProgrammerRequest {
        employee_data: employee_data("P2001", "Copy", 1000),
        category:      ProgrammerCategory::A,
        languages:     vec!["C".to_string()],
    };
    let err = handlers::programmers::create_programmer_handler(&state, test_user(), request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));

    // Exactly one employee and one programmer row remain.
    assert_eq!(EmployeesEntity::find().count(&state.db).await.unwrap(), 1);
    assert_eq!(ProgrammersEntity::find().count(&state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_programmer_rejects_bad_identity_card() {
    let state = create_test_app_state().await;

    let request = CreateProgrammerRequest {
        employee_data: employee_data("P-30 01", "Ada", 1000),
        category:      ProgrammerCategory::A,
        languages:     vec![],
    };
    let err = handlers::programmers::create_programmer_handler(&state, test_user(), request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    assert_eq!(EmployeesEntity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_programmer_replaces_language_set() {
    let state = create_test_app_state().await;

    let created = create_programmer(&state, "P4001", "Ada", &["Go", "Rust"]).await;

    let updated = handlers::programmers::update_programmer_handler(
        &state,
        test_user(),
        created.employee.id,
        UpdateProgrammerRequest {
            category:  None,
            languages: Some(vec!["C".to_string()]),
        },
    )
    .await
    .unwrap()
    .0;
    assert_eq!(updated.languages, vec!["C".to_string()]);

    // An empty list empties the whole set, never a partial merge.
    let emptied = handlers::programmers::update_programmer_handler(
        &state,
        test_user(),
        created.employee.id,
        UpdateProgrammerRequest {
            category:  Some(ProgrammerCategory::A),
            languages: Some(vec![]),
        },
    )
    .await
    .unwrap()
    .0;
    assert!(emptied.languages.is_empty());
    assert_eq!(emptied.category, "A");
    assert_eq!(LanguagesEntity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_add_and_remove_single_language() {
    let state = create_test_app_state().await;

    let created = create_programmer(&state, "P5001", "Ada", &["Go"]).await;

    let languages = handlers::programmers::add_programmer_language_handler(
        &state,
        test_user(),
        created.employee.id,
        AddLanguageRequest {
            language: "Rust".to_string(),
        },
    )
    .await
    .unwrap()
    .0
    .languages;
    assert_eq!(languages.len(), 2);

    // Adding the same language again violates the composite key.
    let err = handlers::programmers::add_programmer_language_handler(
        &state,
        test_user(),
        created.employee.id,
        AddLanguageRequest {
            language: "Rust".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));

    handlers::programmers::remove_programmer_language_handler(&state, test_user(), created.employee.id, "Go")
        .await
        .unwrap();

    let err = handlers::programmers::remove_programmer_language_handler(&state, test_user(), created.employee.id, "Go")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_programmer_in_team_fails() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "P6001", "Ada", &[]).await;
    let team = create_team(&state, "Alpha", None).await;

    handlers::teams::add_team_member_handler(
        &state,
        test_user(),
        team.id,
        AddTeamMemberRequest {
            programmer_id: programmer.employee.id,
        },
    )
    .await
    .unwrap();

    let err = handlers::programmers::delete_programmer_handler(&state, test_user(), programmer.employee.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));

    // Nothing was deleted.
    assert_eq!(ProgrammersEntity::find().count(&state.db).await.unwrap(), 1);
    assert_eq!(EmployeesEntity::find().count(&state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_programmer_removes_all_rows() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "P7001", "Ada", &["Go", "Rust"]).await;

    handlers::programmers::delete_programmer_handler(&state, test_user(), programmer.employee.id)
        .await
        .unwrap();

    assert_eq!(ProgrammersEntity::find().count(&state.db).await.unwrap(), 0);
    assert_eq!(LanguagesEntity::find().count(&state.db).await.unwrap(), 0);
    assert_eq!(EmployeesEntity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_leader_assigned_to_team_fails() {
    let state = create_test_app_state().await;

    let leader = create_leader(&state, "L1001", "Maria", 1000, 4, 2).await;
    let team = create_team(&state, "Alpha", Some(leader.employee.id)).await;

    let err = handlers::leaders::delete_leader_handler(&state, test_user(), leader.employee.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));

    // Leader and team both survive the failed deletion.
    assert!(handlers::leaders::get_leader_handler(&state, leader.employee.id)
        .await
        .is_ok());
    assert!(handlers::teams::get_team_handler(&state, team.id)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_delete_leader_without_team_succeeds() {
    let state = create_test_app_state().await;

    let leader = create_leader(&state, "L2001", "Maria", 1000, 4, 2).await;

    handlers::leaders::delete_leader_handler(&state, test_user(), leader.employee.id)
        .await
        .unwrap();

    assert_eq!(EmployeesEntity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_leader_partial_fields() {
    let state = create_test_app_state().await;

    let leader = create_leader(&state, "L3001", "Maria", 1000, 4, 2).await;

    let updated = handlers::leaders::update_leader_handler(
        &state,
        test_user(),
        leader.employee.id,
        UpdateLeaderRequest {
            years_experience: Some(6),
            projects_led:     None,
        },
    )
    .await
    .unwrap()
    .0;

    assert_eq!(updated.years_experience, 6);
    assert_eq!(updated.projects_led, 2);
}

#[tokio::test]
async fn test_update_employee_applies_present_fields_only() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "P8001", "Ada", &[]).await;

    let updated = handlers::employees::update_employee_handler(
        &state,
        test_user(),
        programmer.employee.id,
        UpdateEmployeeRequest {
            identity_card: None,
            name:          Some("Ada Byron".to_string()),
            age:           None,
            sex:           None,
            base_salary:   Some(Decimal::from(2000)),
        },
    )
    .await
    .unwrap()
    .0;

    assert_eq!(updated.name, "Ada Byron");
    assert_eq!(updated.base_salary, Decimal::from(2000));
    assert_eq!(updated.identity_card, "P8001");
    assert_eq!(updated.age, 30);
}

#[tokio::test]
async fn test_update_employee_duplicate_identity_conflict() {
    let state = create_test_app_state().await;

    create_programmer(&state, "P9001", "Ada", &[]).await;
    let other = create_programmer(&state, "P9002", "Grace", &[]).await;

    let err = handlers::employees::update_employee_handler(
        &state,
        test_user(),
        other.employee.id,
        UpdateEmployeeRequest {
            identity_card: Some("P9001".to_string()),
            name:          None,
            age:           None,
            sex:           None,
            base_salary:   None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));
}

#[tokio::test]
async fn test_update_missing_employee_not_found() {
    let state = create_test_app_state().await;

    let err = handlers::employees::update_employee_handler(
        &state,
        test_user(),
        999,
        UpdateEmployeeRequest {
            identity_card: None,
            name:          Some("Ghost".to_string()),
            age:           None,
            sex:           None,
            base_salary:   None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}
