//! # Programmer Handlers
//!
//! Role operations for programmers. Creation and deletion span several
//! rows (employee, programmer, languages) and run inside one transaction
//! so no partial state can commit.

use axum::Json;
use entity::{
    employees::{Column as EmployeeColumn, EmployeeRole, Entity as EmployeesEntity},
    programmer_languages::{Column as LanguageColumn, Entity as LanguagesEntity},
    programmers::{Column as ProgrammerColumn, Entity as ProgrammersEntity},
    team_members::{Column as MemberColumn, Entity as TeamMembersEntity},
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
        programmers::{
            AddLanguageRequest,
            CreateProgrammerRequest,
            LanguagesResponse,
            ProgrammerResponse,
            UpdateProgrammerRequest,
        },
        ListQuery,
    },
    dto::employees::EmployeeResponse,
    handlers::{dedup_preserving_order, ensure_identity_card_format, ensure_positive},
    middleware::auth::AuthenticatedUser,
    AppState,
};

/// Create a programmer, its employee record, and its language set
///
/// All three creations are one logical transaction: a failure at any step
/// leaves no orphaned employee behind.
pub async fn create_programmer_handler(
    state: &AppState,
    user: AuthenticatedUser,
    req: CreateProgrammerRequest,
) -> Result<Json<ProgrammerResponse>> {
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

    let languages = dedup_preserving_order(&req.languages);

    let txn = state.db.begin().await?;

    let employee = entity::employees::ActiveModel {
        identity_card: Set(req.employee_data.identity_card.clone()),
        name: Set(req.employee_data.name.clone()),
        age: Set(req.employee_data.age),
        sex: Set(req.employee_data.sex.clone()),
        base_salary: Set(req.employee_data.base_salary),
        role: Set(EmployeeRole::Programmer),
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

    let programmer = entity::programmers::ActiveModel {
        employee_id: Set(created_employee.id),
        category:    Set(req.category),
    };
    ProgrammersEntity::insert(programmer)
        .exec_without_returning(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to create programmer: {}", e)))?;

    insert_languages(&txn, created_employee.id, &languages).await?;

    txn.commit().await?;

    info!(
        programmer_id = %created_employee.id,
        languages = languages.len(),
        user_id = %user.id,
        "Programmer created"
    );

    Ok(Json(ProgrammerResponse {
        employee: EmployeeResponse::from_model(&created_employee),
        category: req.category.to_string(),
        languages,
    }))
}

/// Get a single programmer with its composed view
pub async fn get_programmer_handler(state: &AppState, programmer_id: i32) -> Result<Json<ProgrammerResponse>> {
    let response = load_programmer_response(&state.db, programmer_id)
        .await?
        .ok_or_else(|| AppError::not_found("Programmer not found"))?;

    Ok(Json(response))
}

/// List programmers with offset/limit
pub async fn list_programmers_handler(state: &AppState, query: ListQuery) -> Result<Json<Vec<ProgrammerResponse>>> {
    let programmers = ProgrammersEntity::find()
        .order_by_asc(ProgrammerColumn::EmployeeId)
        .offset(query.offset())
        .limit(query.limit())
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch programmers: {}", e)))?;

    let mut responses = Vec::with_capacity(programmers.len());
    for programmer in &programmers {
        responses.push(programmer_response(&state.db, programmer).await?);
    }

    Ok(Json(responses))
}

/// Partially update a programmer
///
/// A provided language list (even an empty one) replaces the entire set —
/// delete-all-then-insert, never a partial merge.
pub async fn update_programmer_handler(
    state: &AppState,
    user: AuthenticatedUser,
    programmer_id: i32,
    req: UpdateProgrammerRequest,
) -> Result<Json<ProgrammerResponse>> {
    req.validate().map_err(AppError::from)?;

    let programmer = ProgrammersEntity::find_by_id(programmer_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Programmer not found"))?;

    let txn = state.db.begin().await?;

    if let Some(category) = req.category {
        let mut active_model: entity::programmers::ActiveModel = programmer.clone().into();
        active_model.category = Set(category);
        active_model
            .update(&txn)
            .await
            .map_err(|e| AppError::database(format!("Failed to update programmer: {}", e)))?;
    }

    if let Some(ref languages) = req.languages {
        LanguagesEntity::delete_many()
            .filter(LanguageColumn::ProgrammerId.eq(programmer_id))
            .exec(&txn)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear languages: {}", e)))?;

        insert_languages(&txn, programmer_id, &dedup_preserving_order(languages)).await?;
    }

    txn.commit().await?;

    info!(programmer_id = %programmer_id, user_id = %user.id, "Programmer updated");

    let response = load_programmer_response(&state.db, programmer_id)
        .await?
        .ok_or_else(|| AppError::internal("Programmer vanished during update"))?;

    Ok(Json(response))
}

/// Delete a programmer, its languages, and its employee record
///
/// Fails with a conflict while the programmer is still a team member.
pub async fn delete_programmer_handler(
    state: &AppState,
    user: AuthenticatedUser,
    programmer_id: i32,
) -> Result<Json<SuccessResponse>> {
    let programmer = ProgrammersEntity::find_by_id(programmer_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Programmer not found"))?;

    let membership = TeamMembersEntity::find()
        .filter(MemberColumn::ProgrammerId.eq(programmer_id))
        .one(&state.db)
        .await?;

    if membership.is_some() {
        return Err(AppError::conflict(
            "Cannot delete a programmer who belongs to a team",
        ));
    }

    let txn = state.db.begin().await?;

    LanguagesEntity::delete_many()
        .filter(LanguageColumn::ProgrammerId.eq(programmer_id))
        .exec(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete languages: {}", e)))?;

    ProgrammersEntity::delete_by_id(programmer.employee_id)
        .exec(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete programmer: {}", e)))?;

    EmployeesEntity::delete_by_id(programmer.employee_id)
        .exec(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete employee: {}", e)))?;

    txn.commit().await?;

    info!(programmer_id = %programmer_id, user_id = %user.id, "Programmer deleted");

    Ok(Json(SuccessResponse {
        success: true,
        message: "Programmer deleted successfully".to_string(),
    }))
}

/// Get a programmer's language set
pub async fn get_programmer_languages_handler(
    state: &AppState,
    programmer_id: i32,
) -> Result<Json<LanguagesResponse>> {
    ProgrammersEntity::find_by_id(programmer_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Programmer not found"))?;

    let languages = load_languages(&state.db, programmer_id).await?;

    Ok(Json(LanguagesResponse {
        programmer_id,
        languages,
    }))
}

/// Add a single language to a programmer
pub async fn add_programmer_language_handler(
    state: &AppState,
    user: AuthenticatedUser,
    programmer_id: i32,
    req: AddLanguageRequest,
) -> Result<Json<LanguagesResponse>> {
    req.validate().map_err(AppError::from)?;

    ProgrammersEntity::find_by_id(programmer_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Programmer not found"))?;

    let language = entity::programmer_languages::ActiveModel {
        programmer_id: Set(programmer_id),
        language:      Set(req.language.clone()),
    };

    LanguagesEntity::insert(language)
        .exec_without_returning(&state.db)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                AppError::conflict("Programmer already masters this language")
            }
            else {
                AppError::database(format!("Failed to add language: {}", e))
            }
        })?;

    info!(programmer_id = %programmer_id, language = %req.language, user_id = %user.id, "Language added");

    let languages = load_languages(&state.db, programmer_id).await?;

    Ok(Json(LanguagesResponse {
        programmer_id,
        languages,
    }))
}

/// Remove a single language from a programmer
pub async fn remove_programmer_language_handler(
    state: &AppState,
    user: AuthenticatedUser,
    programmer_id: i32,
    language: &str,
) -> Result<Json<SuccessResponse>> {
    ProgrammersEntity::find_by_id(programmer_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Programmer not found"))?;

    let result = LanguagesEntity::delete_many()
        .filter(LanguageColumn::ProgrammerId.eq(programmer_id))
        .filter(LanguageColumn::Language.eq(language))
        .exec(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to remove language: {}", e)))?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(
            "Programmer does not master this language",
        ));
    }

    info!(programmer_id = %programmer_id, language = %language, user_id = %user.id, "Language removed");

    Ok(Json(SuccessResponse {
        success: true,
        message: "Language removed".to_string(),
    }))
}

/// Insert one language row per entry, assuming the list is already
/// de-duplicated.
async fn insert_languages<C: ConnectionTrait>(conn: &C, programmer_id: i32, languages: &[String]) -> Result<()> {
    for language in languages {
        let row = entity::programmer_languages::ActiveModel {
            programmer_id: Set(programmer_id),
            language:      Set(language.clone()),
        };
        LanguagesEntity::insert(row)
            .exec_without_returning(conn)
            .await
            .map_err(|e| AppError::database(format!("Failed to add language {}: {}", language, e)))?;
    }
    Ok(())
}

/// Load the language set in storage order.
pub(crate) async fn load_languages<C: ConnectionTrait>(conn: &C, programmer_id: i32) -> Result<Vec<String>> {
    let rows = LanguagesEntity::find()
        .filter(LanguageColumn::ProgrammerId.eq(programmer_id))
        .all(conn)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch languages: {}", e)))?;

    Ok(rows.into_iter().map(|row| row.language).collect())
}

/// Compose the full programmer view for one programmer row.
pub(crate) async fn programmer_response<C: ConnectionTrait>(
    conn: &C,
    programmer: &entity::programmers::Model,
) -> Result<ProgrammerResponse> {
    let employee = EmployeesEntity::find_by_id(programmer.employee_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::internal("Programmer without employee record"))?;

    let languages = load_languages(conn, programmer.employee_id).await?;

    Ok(ProgrammerResponse {
        employee: EmployeeResponse::from_model(&employee),
        category: programmer.category.to_string(),
        languages,
    })
}

/// Load the composed view by id, or `None` when the programmer is absent.
pub(crate) async fn load_programmer_response<C: ConnectionTrait>(
    conn: &C,
    programmer_id: i32,
) -> Result<Option<ProgrammerResponse>> {
    let Some(programmer) = ProgrammersEntity::find_by_id(programmer_id).one(conn).await? else {
        return Ok(None);
    };

    Ok(Some(programmer_response(conn, &programmer).await?))
}
