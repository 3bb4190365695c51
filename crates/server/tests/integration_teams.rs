//! # Integration Tests for Team Composition
//!
//! Membership uniqueness, the deletion cascade, and the composed member
//! views.

mod common;

use common::{create_leader, create_programmer, create_team, create_test_app_state, project_data, test_user};
use entity::team_members::Entity as TeamMembersEntity;
use error::AppError;
use sea_orm::{EntityTrait, PaginatorTrait, Set};
use server::{
    dto::{
        projects::CreateProjectRequest,
        teams::{AddTeamMemberRequest, CreateTeamRequest, UpdateTeamRequest},
    },
    handlers,
};

#[tokio::test]
async fn test_create_team_with_missing_leader_fails() {
    let state = create_test_app_state().await;

    let err = handlers::teams::create_team_handler(
        &state,
        test_user(),
        CreateTeamRequest {
            name:      "Alpha".to_string(),
            leader_id: Some(42),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_programmer_belongs_to_at_most_one_team() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "T1001", "Ada", &[]).await;
    let first = create_team(&state, "Alpha", None).await;
    let second = create_team(&state, "Bravo", None).await;

    handlers::teams::add_team_member_handler(
        &state,
        test_user(),
        first.id,
        AddTeamMemberRequest {
            programmer_id: programmer.employee.id,
        },
    )
    .await
    .unwrap();

    // Joining a second team trips the one-team-per-programmer invariant.
    let err = handlers::teams::add_team_member_handler(
        &state,
        test_user(),
        second.id,
        AddTeamMemberRequest {
            programmer_id: programmer.employee.id,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));

    assert_eq!(TeamMembersEntity::find().count(&state.db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_membership_unique_index_is_final_arbiter() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "T2001", "Ada", &[]).await;
    let first = create_team(&state, "Alpha", None).await;
    let second = create_team(&state, "Bravo", None).await;

    // Write the first membership directly, skipping the handler pre-check.
    TeamMembersEntity::insert(entity::team_members::ActiveModel {
        team_id:       Set(first.id),
        programmer_id: Set(programmer.employee.id),
    })
    .exec_without_returning(&state.db)
    .await
    .unwrap();

    // A second raw insert is stopped by the unique index itself.
    let db_err = TeamMembersEntity::insert(entity::team_members::ActiveModel {
        team_id:       Set(second.id),
        programmer_id: Set(programmer.employee.id),
    })
    .exec_without_returning(&state.db)
    .await
    .unwrap_err();

    assert!(error::is_unique_violation(&db_err));
}

#[tokio::test]
async fn test_add_member_missing_team_or_programmer() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "T3001", "Ada", &[]).await;
    let team = create_team(&state, "Alpha", None).await;

    let err = handlers::teams::add_team_member_handler(
        &state,
        test_user(),
        999,
        AddTeamMemberRequest {
            programmer_id: programmer.employee.id,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));

    let err = handlers::teams::add_team_member_handler(
        &state,
        test_user(),
        team.id,
        AddTeamMemberRequest {
            programmer_id: 999,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_remove_member_not_in_team() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "T4001", "Ada", &[]).await;
    let team = create_team(&state, "Alpha", None).await;

    let err = handlers::teams::remove_team_member_handler(&state, test_user(), team.id, programmer.employee.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_remove_member_roundtrip() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "T5001", "Ada", &[]).await;
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

    handlers::teams::remove_team_member_handler(&state, test_user(), team.id, programmer.employee.id)
        .await
        .unwrap();

    assert_eq!(TeamMembersEntity::find().count(&state.db).await.unwrap(), 0);

    // The programmer is free to join another team again.
    let other = create_team(&state, "Bravo", None).await;
    handlers::teams::add_team_member_handler(
        &state,
        test_user(),
        other.id,
        AddTeamMemberRequest {
            programmer_id: programmer.employee.id,
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_delete_team_detaches_project_and_clears_members() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "T6001", "Ada", &[]).await;
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
            project_type: entity::projects::ProjectType::Management,
        },
    )
    .await
    .unwrap()
    .0;

    handlers::teams::delete_team_handler(&state, test_user(), team.id)
        .await
        .unwrap();

    // The project survives, detached from the deleted team.
    let detached = handlers::projects::get_project_handler(&state, project.id)
        .await
        .unwrap()
        .0;
    assert_eq!(detached.team_id, None);

    assert_eq!(TeamMembersEntity::find().count(&state.db).await.unwrap(), 0);

    let err = handlers::teams::get_team_handler(&state, team.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_missing_team_not_found() {
    let state = create_test_app_state().await;

    let err = handlers::teams::delete_team_handler(&state, test_user(), 7)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_team_members_composed_view() {
    let state = create_test_app_state().await;

    let programmer = create_programmer(&state, "T7001", "Ada", &["Go", "Rust"]).await;
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

    let members = handlers::teams::get_team_members_handler(&state, team.id)
        .await
        .unwrap()
        .0
        .members;

    assert_eq!(members.len(), 1);
    let member = &members[0];
    assert_eq!(member.programmer_id, programmer.employee.id);
    assert_eq!(member.identity_card, "T7001");
    assert_eq!(member.name, "Ada");
    assert_eq!(member.category, "B");
    assert_eq!(member.languages.len(), 2);
}

#[tokio::test]
async fn test_get_team_by_leader() {
    let state = create_test_app_state().await;

    let leader = create_leader(&state, "T8001", "Maria", 1000, 4, 2).await;
    let team = create_team(&state, "Alpha", Some(leader.employee.id)).await;

    let found = handlers::teams::get_team_by_leader_handler(&state, leader.employee.id)
        .await
        .unwrap()
        .0;
    assert_eq!(found.map(|t| t.id), Some(team.id));

    // A leader without a team resolves to null, not an error.
    let idle = create_leader(&state, "T8002", "Elena", 1000, 2, 0).await;
    let none = handlers::teams::get_team_by_leader_handler(&state, idle.employee.id)
        .await
        .unwrap()
        .0;
    assert!(none.is_none());
}

#[tokio::test]
async fn test_update_team_leader_and_name() {
    let state = create_test_app_state().await;

    let leader = create_leader(&state, "T9001", "Maria", 1000, 4, 2).await;
    let team = create_team(&state, "Alpha", None).await;

    let updated = handlers::teams::update_team_handler(
        &state,
        test_user(),
        team.id,
        UpdateTeamRequest {
            name:      Some("Omega".to_string()),
            leader_id: Some(leader.employee.id),
        },
    )
    .await
    .unwrap()
    .0;

    assert_eq!(updated.name, "Omega");
    assert_eq!(updated.leader_id, Some(leader.employee.id));
}
