//! # Leader Handlers
//!
//! Role operations for leaders. Deletion is guarded: a leader still
//! referenced by a team cannot be removed.

use axum::Json;
use entity::{
    employees::{Column as EmployeeColumn, EmployeeRole, Entity as EmployeesEntity},
    leaders::{Column as LeaderColumn, Entity as LeadersEntity},
    teams::{Column as TeamColumn, Entity as TeamsEntity},
};
use error::{AppError, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
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
        employees::EmployeeResponse,
        leaders::{CreateLeaderRequest, LeaderResponse, UpdateLeaderRequest},
        ListQuery,
    },
    handlers::{ensure_identity_card_format, ensure_positive},
    middleware::auth::AuthenticatedUser,
    AppState,
};

/// Create a leader together with its employee record
///
/// Both creations are one transaction; a failure on the leader row leaves
/// no orphaned employee behind.
pub async fn create_leader_handler(
    state: &AppState,
    user: AuthenticatedUser,
    req: CreateLeaderRequest,
) -> Result<Json<LeaderResponse>> {
    req.validate().map_err(AppError::from)?;
    ensure_identity_card_format(&req.employee_data.identity_card)?;
    ensure_positive("Base salary", req.employee_data.base_salary)?;

    let existing = EmployeesEntity::find()
        .filter(EmployeeColumn::IdentityCard.eq(&req.employee_data.identity_card))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(AppError::conflict(
            "An employee with this identity card already exists",
        ));
    }

    let txn = state.db.begin().await?;

    let employee = entity::employees::ActiveModel {
        identity_card: Set(req.employee_data.identity_card.clone()),
        name: Set(req.employee_data.name.clone()),
        age: Set(req.employee_data.age),
        sex: Set(req.employee_data.sex.clone()),
        base_salary: Set(req.employee_data.base_salary),
        role: Set(EmployeeRole::Leader),
        ..Default::default()
    };

    let created_employee = employee
        .insert(&txn)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                AppError::conflict("An employee with this identity card already exists")
            }
            else {
                AppError::database(format!("Failed to create employee: {}", e))
            }
        })?;

    let leader = entity::leaders::ActiveModel {
        employee_id:      Set(created_employee.id),
        years_experience: Set(req.years_experience),
        projects_led:     Set(req.projects_led),
    };
    LeadersEntity::insert(leader)
        .exec_without_returning(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to create leader: {}", e)))?;

    txn.commit().await?;

    info!(leader_id = %created_employee.id, user_id = %user.id, "Leader created");

    Ok(Json(LeaderResponse {
        employee:         EmployeeResponse::from_model(&created_employee),
        years_experience: req.years_experience,
        projects_led:     req.projects_led,
    }))
}

/// Get a single leader with its composed view
pub async fn get_leader_handler(state: &AppState, leader_id: i32) -> Result<Json<LeaderResponse>> {
    let leader = LeadersEntity::find_by_id(leader_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Leader not found"))?;

    Ok(Json(leader_response(&state.db, &leader).await?))
}

/// List leaders with offset/limit
pub async fn list_leaders_handler(state: &AppState, query: ListQuery) -> Result<Json<Vec<LeaderResponse>>> {
    let leaders = LeadersEntity::find()
        .order_by_asc(LeaderColumn::EmployeeId)
        .offset(query.offset())
        .limit(query.limit())
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch leaders: {}", e)))?;

    let mut responses = Vec::with_capacity(leaders.len());
    for leader in &leaders {
        responses.push(leader_response(&state.db, leader).await?);
    }

    Ok(Json(responses))
}

/// Partially update a leader's role fields
pub async fn update_leader_handler(
    state: &AppState,
    user: AuthenticatedUser,
    leader_id: i32,
    req: UpdateLeaderRequest,
) -> Result<Json<LeaderResponse>> {
    req.validate().map_err(AppError::from)?;

    let leader = LeadersEntity::find_by_id(leader_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Leader not found"))?;

    let mut active_model: entity::leaders::ActiveModel = leader.into();

    if let Some(years_experience) = req.years_experience {
        active_model.years_experience = Set(years_experience);
    }
    if let Some(projects_led) = req.projects_led {
        active_model.projects_led = Set(projects_led);
    }

    let updated = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update leader: {}", e)))?;

    info!(leader_id = %leader_id, user_id = %user.id, "Leader updated");

    Ok(Json(leader_response(&state.db, &updated).await?))
}

/// Delete a leader and its employee record
///
/// Fails with a conflict while any team references the leader; on success
/// both rows go in one transaction.
pub async fn delete_leader_handler(
    state: &AppState,
    user: AuthenticatedUser,
    leader_id: i32,
) -> Result<Json<SuccessResponse>> {
    let leader = LeadersEntity::find_by_id(leader_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Leader not found"))?;

    let team = TeamsEntity::find()
        .filter(TeamColumn::LeaderId.eq(leader_id))
        .one(&state.db)
        .await?;

    if team.is_some() {
        return Err(AppError::conflict(
            "Cannot delete a leader assigned to a team",
        ));
    }

    let txn = state.db.begin().await?;

    LeadersEntity::delete_by_id(leader.employee_id)
        .exec(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete leader: {}", e)))?;

    EmployeesEntity::delete_by_id(leader.employee_id)
        .exec(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete employee: {}", e)))?;

    txn.commit().await?;

    info!(leader_id = %leader_id, user_id = %user.id, "Leader deleted");

    Ok(Json(SuccessResponse {
        success: true,
        message: "Leader deleted successfully".to_string(),
    }))
}

/// Compose the full leader view for one leader row.
pub(crate) async fn leader_response<C: ConnectionTrait>(
    conn: &C,
    leader: &entity::leaders::Model,
) -> Result<LeaderResponse> {
    let employee = EmployeesEntity::find_by_id(leader.employee_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::internal("Leader without employee record"))?;

    Ok(LeaderResponse {
        employee:         EmployeeResponse::from_model(&employee),
        years_experience: leader.years_experience,
        projects_led:     leader.projects_led,
    })
}
