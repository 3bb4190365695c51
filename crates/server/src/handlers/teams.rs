//! # Team Handlers
//!
//! Team composition: CRUD plus membership management. The one-team-per-
//! programmer rule is pre-checked here and arbitrated by the unique index
//! on `team_members.programmer_id`.

use axum::Json;
use entity::{
    leaders::Entity as LeadersEntity,
    programmers::Entity as ProgrammersEntity,
    projects::{Column as ProjectColumn, Entity as ProjectsEntity},
    team_members::{Column as MemberColumn, Entity as TeamMembersEntity},
    teams::{Column as TeamColumn, Entity as TeamsEntity},
};
use error::{AppError, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    EntityTrait,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    QuerySelect,
    Set,
    TransactionTrait,
};
use tracing::info;
use validator::Validate;

use crate::{
    dto::{
        auth::SuccessResponse,
        teams::{
            AddTeamMemberRequest,
            CreateTeamRequest,
            TeamMemberView,
            TeamMembersResponse,
            TeamResponse,
            UpdateTeamRequest,
        },
        ListQuery,
    },
    handlers::programmers::load_languages,
    middleware::auth::AuthenticatedUser,
    AppState,
};

/// Create a new team
///
/// Members are added only after creation, through the membership endpoint.
pub async fn create_team_handler(
    state: &AppState,
    user: AuthenticatedUser,
    req: CreateTeamRequest,
) -> Result<Json<TeamResponse>> {
    req.validate().map_err(AppError::from)?;

    if let Some(leader_id) = req.leader_id {
        let leader = LeadersEntity::find_by_id(leader_id).one(&state.db).await?;
        if leader.is_none() {
            return Err(AppError::not_found("Leader not found"));
        }
    }

    let team = entity::teams::ActiveModel {
        name: Set(req.name.clone()),
        leader_id: Set(req.leader_id),
        ..Default::default()
    };

    let created = team
        .insert(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to create team: {}", e)))?;

    info!(team_id = %created.id, user_id = %user.id, "Team created");

    Ok(Json(TeamResponse::from_model(&created, Some(0))))
}

/// Get a single team by ID
pub async fn get_team_handler(state: &AppState, team_id: i32) -> Result<Json<TeamResponse>> {
    let team = TeamsEntity::find_by_id(team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))?;

    let member_count = TeamMembersEntity::find()
        .filter(MemberColumn::TeamId.eq(team_id))
        .count(&state.db)
        .await
        .unwrap_or(0);

    Ok(Json(TeamResponse::from_model(&team, Some(member_count))))
}

/// List teams with offset/limit
pub async fn list_teams_handler(state: &AppState, query: ListQuery) -> Result<Json<Vec<TeamResponse>>> {
    let teams = TeamsEntity::find()
        .order_by_asc(TeamColumn::Id)
        .offset(query.offset())
        .limit(query.limit())
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch teams: {}", e)))?;

    Ok(Json(
        teams
            .iter()
            .map(|team| TeamResponse::from_model(team, None))
            .collect(),
    ))
}

/// Partially update a team
pub async fn update_team_handler(
    state: &AppState,
    user: AuthenticatedUser,
    team_id: i32,
    req: UpdateTeamRequest,
) -> Result<Json<TeamResponse>> {
    req.validate().map_err(AppError::from)?;

    let team = TeamsEntity::find_by_id(team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))?;

    let mut active_model: entity::teams::ActiveModel = team.into();

    if let Some(name) = req.name {
        active_model.name = Set(name);
    }
    if let Some(leader_id) = req.leader_id {
        let leader = LeadersEntity::find_by_id(leader_id).one(&state.db).await?;
        if leader.is_none() {
            return Err(AppError::not_found("Leader not found"));
        }
        active_model.leader_id = Set(Some(leader_id));
    }

    let updated = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update team: {}", e)))?;

    info!(team_id = %team_id, user_id = %user.id, "Team updated");

    Ok(Json(TeamResponse::from_model(&updated, None)))
}

/// Delete a team, detaching its project and removing its members
///
/// The three steps are one transaction: the project survives with
/// `team_id = NULL`, the membership rows go, then the team row goes.
pub async fn delete_team_handler(
    state: &AppState,
    user: AuthenticatedUser,
    team_id: i32,
) -> Result<Json<SuccessResponse>> {
    let team = TeamsEntity::find_by_id(team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))?;

    let txn = state.db.begin().await?;

    let project = ProjectsEntity::find()
        .filter(ProjectColumn::TeamId.eq(team_id))
        .one(&txn)
        .await?;

    if let Some(project) = project {
        let mut active_model: entity::projects::ActiveModel = project.into();
        active_model.team_id = Set(None);
        active_model
            .update(&txn)
            .await
            .map_err(|e| AppError::database(format!("Failed to detach project: {}", e)))?;
    }

    TeamMembersEntity::delete_many()
        .filter(MemberColumn::TeamId.eq(team_id))
        .exec(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete team members: {}", e)))?;

    TeamsEntity::delete_by_id(team.id)
        .exec(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete team: {}", e)))?;

    txn.commit().await?;

    info!(team_id = %team_id, user_id = %user.id, "Team deleted");

    Ok(Json(SuccessResponse {
        success: true,
        message: "Team deleted successfully".to_string(),
    }))
}

/// Add a programmer to a team
///
/// The membership pre-check gives callers a clean conflict; the unique
/// index on `programmer_id` closes the race between concurrent adds.
pub async fn add_team_member_handler(
    state: &AppState,
    user: AuthenticatedUser,
    team_id: i32,
    req: AddTeamMemberRequest,
) -> Result<Json<TeamMembersResponse>> {
    TeamsEntity::find_by_id(team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))?;

    ProgrammersEntity::find_by_id(req.programmer_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Programmer not found"))?;

    let existing = TeamMembersEntity::find()
        .filter(MemberColumn::ProgrammerId.eq(req.programmer_id))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(AppError::conflict(
            "Programmer already belongs to a team",
        ));
    }

    let member = entity::team_members::ActiveModel {
        team_id:       Set(team_id),
        programmer_id: Set(req.programmer_id),
    };

    TeamMembersEntity::insert(member)
        .exec_without_returning(&state.db)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                AppError::conflict("Programmer already belongs to a team")
            }
            else {
                AppError::database(format!("Failed to add team member: {}", e))
            }
        })?;

    info!(team_id = %team_id, programmer_id = %req.programmer_id, user_id = %user.id, "Team member added");

    list_team_members(state, team_id).await
}

/// Remove a programmer from a team
pub async fn remove_team_member_handler(
    state: &AppState,
    user: AuthenticatedUser,
    team_id: i32,
    programmer_id: i32,
) -> Result<Json<SuccessResponse>> {
    TeamsEntity::find_by_id(team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))?;

    ProgrammersEntity::find_by_id(programmer_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Programmer not found"))?;

    let result = TeamMembersEntity::delete_many()
        .filter(MemberColumn::TeamId.eq(team_id))
        .filter(MemberColumn::ProgrammerId.eq(programmer_id))
        .exec(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to remove team member: {}", e)))?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(
            "Programmer is not a member of this team",
        ));
    }

    info!(team_id = %team_id, programmer_id = %programmer_id, user_id = %user.id, "Team member removed");

    Ok(Json(SuccessResponse {
        success: true,
        message: "Team member removed".to_string(),
    }))
}

/// List the members of a team as composed views
pub async fn get_team_members_handler(state: &AppState, team_id: i32) -> Result<Json<TeamMembersResponse>> {
    TeamsEntity::find_by_id(team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Team not found"))?;

    list_team_members(state, team_id).await
}

/// Get the team a leader runs, if any
pub async fn get_team_by_leader_handler(state: &AppState, leader_id: i32) -> Result<Json<Option<TeamResponse>>> {
    LeadersEntity::find_by_id(leader_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Leader not found"))?;

    let team = TeamsEntity::find()
        .filter(TeamColumn::LeaderId.eq(leader_id))
        .order_by_asc(TeamColumn::Id)
        .one(&state.db)
        .await?;

    Ok(Json(
        team.map(|team| TeamResponse::from_model(&team, None)),
    ))
}

/// Build the composed member list for a team assumed to exist.
async fn list_team_members(state: &AppState, team_id: i32) -> Result<Json<TeamMembersResponse>> {
    let memberships = TeamMembersEntity::find()
        .filter(MemberColumn::TeamId.eq(team_id))
        .order_by_asc(MemberColumn::ProgrammerId)
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch team members: {}", e)))?;

    let mut members = Vec::with_capacity(memberships.len());
    for membership in &memberships {
        let programmer = ProgrammersEntity::find_by_id(membership.programmer_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::internal("Membership without programmer record"))?;

        let employee = entity::employees::Entity::find_by_id(programmer.employee_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::internal("Programmer without employee record"))?;

        let languages = load_languages(&state.db, programmer.employee_id).await?;

        members.push(TeamMemberView {
            programmer_id: programmer.employee_id,
            identity_card: employee.identity_card,
            name: employee.name,
            age: employee.age,
            sex: employee.sex,
            base_salary: employee.base_salary,
            category: programmer.category.to_string(),
            languages,
        });
    }

    Ok(Json(TeamMembersResponse {
        success: true,
        members,
    }))
}
