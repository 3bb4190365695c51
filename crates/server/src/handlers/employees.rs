//! # Employee Handlers
//!
//! CRUD for the base employee entity. The role handlers own the
//! referential guards; deletion here is unconditional by contract.

use axum::Json;
use entity::employees::{Column as EmployeeColumn, Entity as EmployeesEntity};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use tracing::info;
use validator::Validate;

use crate::{
    dto::{
        auth::SuccessResponse,
        employees::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest},
        ListQuery,
    },
    handlers::{ensure_identity_card_format, ensure_positive},
    middleware::auth::AuthenticatedUser,
    AppState,
};

/// Create a standalone employee
///
/// Role creation endpoints are the usual entry point; this one exists for
/// completeness of the base entity lifecycle.
pub async fn create_employee_handler(
    state: &AppState,
    user: AuthenticatedUser,
    req: CreateEmployeeRequest,
) -> Result<Json<EmployeeResponse>> {
    req.validate().map_err(AppError::from)?;
    ensure_identity_card_format(&req.data.identity_card)?;
    ensure_positive("Base salary", req.data.base_salary)?;

    let existing = EmployeesEntity::find()
        .filter(EmployeeColumn::IdentityCard.eq(&req.data.identity_card))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(AppError::conflict(
            "An employee with this identity card already exists",
        ));
    }

    let employee = entity::employees::ActiveModel {
        identity_card: Set(req.data.identity_card.clone()),
        name: Set(req.data.name.clone()),
        age: Set(req.data.age),
        sex: Set(req.data.sex.clone()),
        base_salary: Set(req.data.base_salary),
        role: Set(req.role),
        ..Default::default()
    };

    let created = employee
        .insert(&state.db)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                AppError::conflict("An employee with this identity card already exists")
            }
            else {
                AppError::database(format!("Failed to create employee: {}", e))
            }
        })?;

    info!(employee_id = %created.id, role = %created.role, user_id = %user.id, "Employee created");

    Ok(Json(EmployeeResponse::from_model(&created)))
}

/// Get a single employee by ID
pub async fn get_employee_handler(state: &AppState, employee_id: i32) -> Result<Json<EmployeeResponse>> {
    let employee = EmployeesEntity::find_by_id(employee_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    Ok(Json(EmployeeResponse::from_model(&employee)))
}

/// Get a single employee by identity card
pub async fn get_employee_by_identity_handler(
    state: &AppState,
    identity_card: &str,
) -> Result<Json<EmployeeResponse>> {
    let employee = EmployeesEntity::find()
        .filter(EmployeeColumn::IdentityCard.eq(identity_card))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    Ok(Json(EmployeeResponse::from_model(&employee)))
}

/// List employees with offset/limit
pub async fn list_employees_handler(state: &AppState, query: ListQuery) -> Result<Json<Vec<EmployeeResponse>>> {
    let employees = EmployeesEntity::find()
        .order_by_asc(EmployeeColumn::Id)
        .offset(query.offset())
        .limit(query.limit())
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch employees: {}", e)))?;

    Ok(Json(
        employees.iter().map(EmployeeResponse::from_model).collect(),
    ))
}

/// Partially update an employee
///
/// Only fields present in the request are applied.
pub async fn update_employee_handler(
    state: &AppState,
    user: AuthenticatedUser,
    employee_id: i32,
    req: UpdateEmployeeRequest,
) -> Result<Json<EmployeeResponse>> {
    req.validate().map_err(AppError::from)?;

    let employee = EmployeesEntity::find_by_id(employee_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    let mut active_model: entity::employees::ActiveModel = employee.clone().into();

    if let Some(identity_card) = req.identity_card {
        ensure_identity_card_format(&identity_card)?;
        if identity_card != employee.identity_card {
            let existing = EmployeesEntity::find()
                .filter(EmployeeColumn::IdentityCard.eq(&identity_card))
                .filter(EmployeeColumn::Id.ne(employee_id))
                .one(&state.db)
                .await?;
            if existing.is_some() {
                return Err(AppError::conflict(
                    "An employee with this identity card already exists",
                ));
            }
        }
        active_model.identity_card = Set(identity_card);
    }
    if let Some(name) = req.name {
        active_model.name = Set(name);
    }
    if let Some(age) = req.age {
        active_model.age = Set(age);
    }
    if let Some(sex) = req.sex {
        active_model.sex = Set(sex);
    }
    if let Some(base_salary) = req.base_salary {
        ensure_positive("Base salary", base_salary)?;
        active_model.base_salary = Set(base_salary);
    }

    let updated = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update employee: {}", e)))?;

    info!(employee_id = %employee_id, user_id = %user.id, "Employee updated");

    Ok(Json(EmployeeResponse::from_model(&updated)))
}

/// Physically delete an employee
///
/// No referential checks happen here; role deletion endpoints guard
/// against removing employees still referenced by teams or memberships.
pub async fn delete_employee_handler(
    state: &AppState,
    user: AuthenticatedUser,
    employee_id: i32,
) -> Result<Json<SuccessResponse>> {
    let employee = EmployeesEntity::find_by_id(employee_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    entity::employees::Entity::delete_by_id(employee.id)
        .exec(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete employee: {}", e)))?;

    info!(employee_id = %employee_id, user_id = %user.id, "Employee deleted");

    Ok(Json(SuccessResponse {
        success: true,
        message: "Employee deleted successfully".to_string(),
    }))
}
