//! # Integration Tests for Analytics & Derivation
//!
//! Salary computation, rankings, counts, cross-entity traversals, and the
//! text export.

mod common;

use common::{create_leader, create_programmer, create_team, create_test_app_state, project_data, test_user};
use entity::{multimedia_projects::DevelopmentTool, projects::ProjectType};
use error::AppError;
use rust_decimal::Decimal;
use server::{
    dto::{
        analytics::HighestPaidQuery,
        projects::{CreateManagementProjectRequest, CreateMultimediaProjectRequest, CreateProjectRequest},
        teams::AddTeamMemberRequest,
    },
    handlers,
};

#[tokio::test]
async fn test_leader_salary_scenario() {
    let state = create_test_app_state().await;

    // base 1000 + 300*4 + 500*2 = 3200
    let leader = create_leader(&state, "A1001", "Maria", 1000, 4, 2).await;

    let salary = handlers::analytics::calculate_salary_handler(&state, leader.employee.id)
        .await
        .unwrap()
        .0;
    assert_eq!(salary.total_salary, Decimal::from(3200));
}

#[tokio::test]
async fn test_programmer_salary_counts_languages() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "A2001", "Ada", &["Go", "Rust", "C"]).await;

    // base 1000 + 200*3 = 1600
    let salary = handlers::analytics::calculate_salary_handler(&state, programmer.employee.id)
        .await
        .unwrap()
        .0;
    assert_eq!(salary.total_salary, Decimal::from(1600));
}

#[tokio::test]
async fn test_salary_is_pure_without_mutation() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "A3001", "Ada", &["Go", "Rust"]).await;

    let first = handlers::analytics::calculate_salary_handler(&state, programmer.employee.id)
        .await
        .unwrap()
        .0;
    let second = handlers::analytics::calculate_salary_handler(&state, programmer.employee.id)
        .await
        .unwrap()
        .0;
    assert_eq!(first.total_salary, second.total_salary);
}

#[tokio::test]
async fn test_salary_missing_employee_not_found() {
    let state = create_test_app_state().await;

    let err = handlers::analytics::calculate_salary_handler(&state, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_highest_paid_sorted_and_truncated() {
    let state = create_test_app_state().await;

    // Salaries: Ada 1000+2*200=1400, Maria 1000+300*4+500*2=3200,
    // Grace 1000+0=1000.
    create_programmer(&state, "A4001", "Ada", &["Go", "Rust"]).await;
    create_leader(&state, "A4002", "Maria", 1000, 4, 2).await;
    create_programmer(&state, "A4003", "Grace", &[]).await;

    let ranking = handlers::analytics::get_highest_paid_employees_handler(
        &state,
        HighestPaidQuery {
            limit: Some(2),
        },
    )
    .await
    .unwrap()
    .0;

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].name, "Maria");
    assert_eq!(ranking[0].total_salary, Decimal::from(3200));
    assert_eq!(ranking[1].name, "Ada");
}

#[tokio::test]
async fn test_highest_paid_stable_on_ties() {
    let state = create_test_app_state().await;

    // Identical salaries keep creation (id) order.
    create_programmer(&state, "A5001", "First", &[]).await;
    create_programmer(&state, "A5002", "Second", &[]).await;

    let ranking = handlers::analytics::get_highest_paid_employees_handler(
        &state,
        HighestPaidQuery {
            limit: None,
        },
    )
    .await
    .unwrap()
    .0;

    assert_eq!(ranking[0].name, "First");
    assert_eq!(ranking[1].name, "Second");
}

#[tokio::test]
async fn test_count_projects_by_type() {
    let state = create_test_app_state().await;

    for (name, project_type) in [
        ("One", ProjectType::Management),
        ("Two", ProjectType::Management),
        ("Three", ProjectType::Multimedia),
    ] {
        let team = create_team(&state, name, None).await;
        handlers::projects::create_project_handler(
            &state,
            test_user(),
            CreateProjectRequest {
                data: project_data(name, team.id, 6, 10_000),
                project_type,
            },
        )
        .await
        .unwrap();
    }

    let mut counts = handlers::analytics::count_projects_by_type_handler(&state)
        .await
        .unwrap()
        .0;
    counts.sort_by(|a, b| a.project_type.cmp(&b.project_type));

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].project_type, "management");
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts[1].project_type, "multimedia");
    assert_eq!(counts[1].count, 1);
}

#[tokio::test]
async fn test_programmers_by_framework_traversal() {
    let state = create_test_app_state().await;

    let axum_programmer = create_programmer(&state, "A6001", "Ada", &["Rust"]).await;
    let other_programmer = create_programmer(&state, "A6002", "Grace", &["Go"]).await;

    let axum_team = create_team(&state, "Alpha", None).await;
    let other_team = create_team(&state, "Bravo", None).await;

    for (team_id, programmer_id) in [
        (axum_team.id, axum_programmer.employee.id),
        (other_team.id, other_programmer.employee.id),
    ] {
        handlers::teams::add_team_member_handler(
            &state,
            test_user(),
            team_id,
            AddTeamMemberRequest {
                programmer_id,
            },
        )
        .await
        .unwrap();
    }

    handlers::projects::create_management_project_handler(
        &state,
        test_user(),
        CreateManagementProjectRequest {
            project_data:         project_data("Billing", axum_team.id, 12, 25_000),
            database_type:        "PostgreSQL".to_string(),
            programming_language: "Rust".to_string(),
            framework:            "Axum".to_string(),
        },
    )
    .await
    .unwrap();

    handlers::projects::create_management_project_handler(
        &state,
        test_user(),
        CreateManagementProjectRequest {
            project_data:         project_data("Ledger", other_team.id, 8, 15_000),
            database_type:        "MySQL".to_string(),
            programming_language: "Go".to_string(),
            framework:            "Gin".to_string(),
        },
    )
    .await
    .unwrap();

    let found = handlers::analytics::get_programmers_by_framework_handler(&state, "Axum")
        .await
        .unwrap()
        .0;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].employee.id, axum_programmer.employee.id);

    let none = handlers::analytics::get_programmers_by_framework_handler(&state, "Rails")
        .await
        .unwrap()
        .0;
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_programmers_by_project() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "A7001", "Ada", &[]).await;
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

    let project = handlers::projects::create_project_handler(
        &state,
        test_user(),
        CreateProjectRequest {
            data:         project_data("Portal", team.id, 12, 25_000),
            project_type: ProjectType::Management,
        },
    )
    .await
    .unwrap()
    .0;

    let members = handlers::analytics::get_programmers_by_project_handler(&state, project.id)
        .await
        .unwrap()
        .0;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].employee.id, programmer.employee.id);
}

#[tokio::test]
async fn test_project_by_programmer_identity() {
    let state = create_test_app_state().await;

    let assigned = create_programmer(&state, "A8001", "Ada", &[]).await;
    let unassigned = create_programmer(&state, "A8002", "Grace", &[]).await;

    let team = create_team(&state, "Alpha", None).await;
    handlers::teams::add_team_member_handler(
        &state,
        test_user(),
        team.id,
        AddTeamMemberRequest {
            programmer_id: assigned.employee.id,
        },
    )
    .await
    .unwrap();

    let project = handlers::projects::create_project_handler(
        &state,
        test_user(),
        CreateProjectRequest {
            data:         project_data("Portal", team.id, 12, 25_000),
            project_type: ProjectType::Management,
        },
    )
    .await
    .unwrap()
    .0;

    // Assigned programmer resolves to the team's project.
    let found = handlers::analytics::get_project_by_programmer_identity_handler(&state, "A8001")
        .await
        .unwrap()
        .0;
    assert_eq!(found.map(|p| p.id), Some(project.id));

    // Team-less programmer resolves to null.
    let none = handlers::analytics::get_project_by_programmer_identity_handler(&state, "A8002")
        .await
        .unwrap()
        .0;
    assert!(none.is_none());
    let _ = unassigned;

    // Unknown identity card is a not-found.
    let err = handlers::analytics::get_project_by_programmer_identity_handler(&state, "NOPE")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_project_by_leader_identity_not_found() {
    let state = create_test_app_state().await;

    // Only programmer-role employees resolve through this lookup.
    create_leader(&state, "A9001", "Maria", 1000, 4, 2).await;

    let err = handlers::analytics::get_project_by_programmer_identity_handler(&state, "A9001")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_export_project_text_content_and_determinism() {
    let state = create_test_app_state().await;

    let leader = create_leader(&state, "A9101", "Maria Lopez", 1000, 4, 2).await;
    let programmer = create_programmer(&state, "A9102", "Juan Perez", &["Rust"]).await;
    let team = create_team(&state, "Alpha", Some(leader.employee.id)).await;

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

    let details = handlers::projects::create_multimedia_project_handler(
        &state,
        test_user(),
        CreateMultimediaProjectRequest {
            project_data:     project_data("Kiosk", team.id, 3, 5_000),
            development_tool: DevelopmentTool::Director,
        },
    )
    .await
    .unwrap()
    .0;

    let first = handlers::projects::export_project_text_handler(&state, details.project_id)
        .await
        .unwrap();
    let second = handlers::projects::export_project_text_handler(&state, details.project_id)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert!(first.contains("Name: Kiosk\n"));
    assert!(first.contains("Type: multimedia\n"));
    assert!(first.contains("Tool: director\n"));
    assert!(first.contains("Team: Alpha\n"));
    assert!(first.contains("Leader: Maria Lopez\n"));
    assert!(first.contains("  - Juan Perez\n"));
}
