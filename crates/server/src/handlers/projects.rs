//! # Project Handlers
//!
//! Project assignment: base CRUD plus the typed creations that write the
//! base row and the matching detail row in one transaction. A team takes
//! at most one project, arbitrated by the unique index on
//! `projects.team_id`.

use axum::Json;
use entity::{
    employees::Entity as EmployeesEntity,
    management_projects::{Column as ManagementColumn, Entity as ManagementProjectsEntity},
    multimedia_projects::{Column as MultimediaColumn, Entity as MultimediaProjectsEntity},
    projects::{Column as ProjectColumn, Entity as ProjectsEntity, ProjectType},
    team_members::{Column as MemberColumn, Entity as TeamMembersEntity},
    teams::Entity as TeamsEntity,
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
        projects::{
            CreateManagementProjectRequest,
            CreateMultimediaProjectRequest,
            CreateProjectRequest,
            ManagementProjectResponse,
            MultimediaProjectResponse,
            ProjectData,
            ProjectResponse,
            ProjectWithDetailsResponse,
            UpdateManagementProjectRequest,
            UpdateMultimediaProjectRequest,
            UpdateProjectRequest,
        },
        ListQuery,
    },
    handlers::ensure_positive,
    middleware::auth::AuthenticatedUser,
    report::{format_project_report, ReportTeam},
    AppState,
};

/// Create a base project assigned to a team
pub async fn create_project_handler(
    state: &AppState,
    user: AuthenticatedUser,
    req: CreateProjectRequest,
) -> Result<Json<ProjectResponse>> {
    req.validate().map_err(AppError::from)?;
    ensure_positive("Price", req.data.price)?;
    ensure_team_can_take_project(&state.db, req.data.team_id, None).await?;

    let created = insert_base_project(&state.db, &req.data, req.project_type).await?;

    info!(project_id = %created.id, project_type = %created.project_type, user_id = %user.id, "Project created");

    Ok(Json(ProjectResponse::from_model(&created)))
}

/// Create a management project: base row plus detail row, one transaction
///
/// The subtype is forced to `management` regardless of caller input.
pub async fn create_management_project_handler(
    state: &AppState,
    user: AuthenticatedUser,
    req: CreateManagementProjectRequest,
) -> Result<Json<ManagementProjectResponse>> {
    req.validate().map_err(AppError::from)?;
    ensure_positive("Price", req.project_data.price)?;
    ensure_team_can_take_project(&state.db, req.project_data.team_id, None).await?;

    let txn = state.db.begin().await?;

    let created = insert_base_project(&txn, &req.project_data, ProjectType::Management).await?;

    let details = entity::management_projects::ActiveModel {
        project_id:           Set(created.id),
        database_type:        Set(req.database_type.clone()),
        programming_language: Set(req.programming_language.clone()),
        framework:            Set(req.framework.clone()),
    };
    ManagementProjectsEntity::insert(details)
        .exec_without_returning(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to create management details: {}", e)))?;

    txn.commit().await?;

    info!(project_id = %created.id, user_id = %user.id, "Management project created");

    Ok(Json(ManagementProjectResponse {
        project_id:           created.id,
        database_type:        req.database_type,
        programming_language: req.programming_language,
        framework:            req.framework,
    }))
}

/// Create a multimedia project: base row plus detail row, one transaction
///
/// The subtype is forced to `multimedia` regardless of caller input.
pub async fn create_multimedia_project_handler(
    state: &AppState,
    user: AuthenticatedUser,
    req: CreateMultimediaProjectRequest,
) -> Result<Json<MultimediaProjectResponse>> {
    req.validate().map_err(AppError::from)?;
    ensure_positive("Price", req.project_data.price)?;
    ensure_team_can_take_project(&state.db, req.project_data.team_id, None).await?;

    let txn = state.db.begin().await?;

    let created = insert_base_project(&txn, &req.project_data, ProjectType::Multimedia).await?;

    let details = entity::multimedia_projects::ActiveModel {
        project_id:       Set(created.id),
        development_tool: Set(req.development_tool),
    };
    MultimediaProjectsEntity::insert(details)
        .exec_without_returning(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to create multimedia details: {}", e)))?;

    txn.commit().await?;

    info!(project_id = %created.id, user_id = %user.id, "Multimedia project created");

    Ok(Json(MultimediaProjectResponse {
        project_id:       created.id,
        development_tool: req.development_tool.to_string(),
    }))
}

/// Get a single project by ID
pub async fn get_project_handler(state: &AppState, project_id: i32) -> Result<Json<ProjectResponse>> {
    let project = ProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    Ok(Json(ProjectResponse::from_model(&project)))
}

/// List projects with offset/limit
pub async fn list_projects_handler(state: &AppState, query: ListQuery) -> Result<Json<Vec<ProjectResponse>>> {
    let projects = ProjectsEntity::find()
        .order_by_asc(ProjectColumn::Id)
        .offset(query.offset())
        .limit(query.limit())
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch projects: {}", e)))?;

    Ok(Json(
        projects.iter().map(ProjectResponse::from_model).collect(),
    ))
}

/// List all projects of one subtype
pub async fn get_projects_by_type_handler(state: &AppState, project_type: &str) -> Result<Json<Vec<ProjectResponse>>> {
    let project_type = parse_project_type(project_type)?;

    let projects = ProjectsEntity::find()
        .filter(ProjectColumn::ProjectType.eq(project_type))
        .order_by_asc(ProjectColumn::Id)
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch projects: {}", e)))?;

    Ok(Json(
        projects.iter().map(ProjectResponse::from_model).collect(),
    ))
}

/// Get a project joined with the detail row matching its type
pub async fn get_project_with_details_handler(
    state: &AppState,
    project_id: i32,
) -> Result<Json<ProjectWithDetailsResponse>> {
    let details = load_project_with_details(&state.db, project_id)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    Ok(Json(details))
}

/// Partially update a base project
///
/// A team move re-validates that the new team exists and is project-free,
/// excluding the project being updated.
pub async fn update_project_handler(
    state: &AppState,
    user: AuthenticatedUser,
    project_id: i32,
    req: UpdateProjectRequest,
) -> Result<Json<ProjectResponse>> {
    req.validate().map_err(AppError::from)?;

    let project = ProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    let mut active_model: entity::projects::ActiveModel = project.clone().into();

    if let Some(name) = req.name {
        active_model.name = Set(name);
    }
    if let Some(description) = req.description {
        active_model.description = Set(Some(description));
    }
    if let Some(estimated_time) = req.estimated_time {
        active_model.estimated_time = Set(estimated_time);
    }
    if let Some(price) = req.price {
        ensure_positive("Price", price)?;
        active_model.price = Set(price);
    }
    if let Some(team_id) = req.team_id {
        if project.team_id != Some(team_id) {
            ensure_team_can_take_project(&state.db, team_id, Some(project_id)).await?;
        }
        active_model.team_id = Set(Some(team_id));
    }

    let updated = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update project: {}", e)))?;

    info!(project_id = %project_id, user_id = %user.id, "Project updated");

    Ok(Json(ProjectResponse::from_model(&updated)))
}

/// Get a management detail row by project id
pub async fn get_management_project_handler(
    state: &AppState,
    project_id: i32,
) -> Result<Json<ManagementProjectResponse>> {
    let details = ManagementProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Management project not found"))?;

    Ok(Json(ManagementProjectResponse::from_model(&details)))
}

/// Update a management detail row
///
/// Fails with a conflict when the project exists but is not a management
/// project; absent project or detail row is a plain not-found.
pub async fn update_management_project_handler(
    state: &AppState,
    user: AuthenticatedUser,
    project_id: i32,
    req: UpdateManagementProjectRequest,
) -> Result<Json<ManagementProjectResponse>> {
    req.validate().map_err(AppError::from)?;

    let project = ProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    if project.project_type != ProjectType::Management {
        return Err(AppError::conflict("Project is not a management project"));
    }

    let details = ManagementProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Management project not found"))?;

    let mut active_model: entity::management_projects::ActiveModel = details.into();

    if let Some(database_type) = req.database_type {
        active_model.database_type = Set(database_type);
    }
    if let Some(programming_language) = req.programming_language {
        active_model.programming_language = Set(programming_language);
    }
    if let Some(framework) = req.framework {
        active_model.framework = Set(framework);
    }

    let updated = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update management details: {}", e)))?;

    info!(project_id = %project_id, user_id = %user.id, "Management project updated");

    Ok(Json(ManagementProjectResponse::from_model(&updated)))
}

/// Get a multimedia detail row by project id
pub async fn get_multimedia_project_handler(
    state: &AppState,
    project_id: i32,
) -> Result<Json<MultimediaProjectResponse>> {
    let details = MultimediaProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Multimedia project not found"))?;

    Ok(Json(MultimediaProjectResponse::from_model(&details)))
}

/// Update a multimedia detail row
pub async fn update_multimedia_project_handler(
    state: &AppState,
    user: AuthenticatedUser,
    project_id: i32,
    req: UpdateMultimediaProjectRequest,
) -> Result<Json<MultimediaProjectResponse>> {
    req.validate().map_err(AppError::from)?;

    let project = ProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    if project.project_type != ProjectType::Multimedia {
        return Err(AppError::conflict("Project is not a multimedia project"));
    }

    let details = MultimediaProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Multimedia project not found"))?;

    let mut active_model: entity::multimedia_projects::ActiveModel = details.into();

    if let Some(development_tool) = req.development_tool {
        active_model.development_tool = Set(development_tool);
    }

    let updated = active_model
        .update(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to update multimedia details: {}", e)))?;

    info!(project_id = %project_id, user_id = %user.id, "Multimedia project updated");

    Ok(Json(MultimediaProjectResponse::from_model(&updated)))
}

/// Delete a project and its detail rows in one transaction
///
/// Both detail tables are cleared unconditionally; at most one row exists.
pub async fn delete_project_handler(
    state: &AppState,
    user: AuthenticatedUser,
    project_id: i32,
) -> Result<Json<SuccessResponse>> {
    let project = ProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    let txn = state.db.begin().await?;

    ManagementProjectsEntity::delete_many()
        .filter(ManagementColumn::ProjectId.eq(project_id))
        .exec(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete management details: {}", e)))?;

    MultimediaProjectsEntity::delete_many()
        .filter(MultimediaColumn::ProjectId.eq(project_id))
        .exec(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete multimedia details: {}", e)))?;

    ProjectsEntity::delete_by_id(project.id)
        .exec(&txn)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete project: {}", e)))?;

    txn.commit().await?;

    info!(project_id = %project_id, user_id = %user.id, "Project deleted");

    Ok(Json(SuccessResponse {
        success: true,
        message: "Project deleted successfully".to_string(),
    }))
}

/// Get the project with the smallest estimated time
///
/// Ties break on ascending id, the stable storage order.
pub async fn get_earliest_finishing_project_handler(state: &AppState) -> Result<Json<ProjectResponse>> {
    let project = ProjectsEntity::find()
        .order_by_asc(ProjectColumn::EstimatedTime)
        .order_by_asc(ProjectColumn::Id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("No projects found"))?;

    Ok(Json(ProjectResponse::from_model(&project)))
}

/// Render the plain-text export for a project
pub async fn export_project_text_handler(state: &AppState, project_id: i32) -> Result<String> {
    let project = ProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    let management = ManagementProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?;
    let multimedia = MultimediaProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?;

    let team = match project.team_id {
        Some(team_id) => TeamsEntity::find_by_id(team_id).one(&state.db).await?,
        None => None,
    };

    let report_team = match &team {
        Some(team) => {
            let leader_name = match team.leader_id {
                Some(leader_id) => {
                    EmployeesEntity::find_by_id(leader_id)
                        .one(&state.db)
                        .await?
                        .map(|employee| employee.name)
                },
                None => None,
            };

            let memberships = TeamMembersEntity::find()
                .filter(MemberColumn::TeamId.eq(team.id))
                .order_by_asc(MemberColumn::ProgrammerId)
                .all(&state.db)
                .await?;

            let mut member_names = Vec::with_capacity(memberships.len());
            for membership in &memberships {
                let employee = EmployeesEntity::find_by_id(membership.programmer_id)
                    .one(&state.db)
                    .await?
                    .ok_or_else(|| AppError::internal("Membership without employee record"))?;
                member_names.push(employee.name);
            }

            Some(ReportTeam {
                name: team.name.clone(),
                leader_name,
                member_names,
            })
        },
        None => None,
    };

    Ok(format_project_report(
        &project,
        management.as_ref(),
        multimedia.as_ref(),
        report_team.as_ref(),
    ))
}

/// Insert the base project row with the given forced subtype.
async fn insert_base_project<C: ConnectionTrait>(
    conn: &C,
    data: &ProjectData,
    project_type: ProjectType,
) -> Result<entity::projects::Model> {
    let project = entity::projects::ActiveModel {
        name: Set(data.name.clone()),
        description: Set(data.description.clone()),
        estimated_time: Set(data.estimated_time),
        price: Set(data.price),
        project_type: Set(project_type),
        team_id: Set(Some(data.team_id)),
        ..Default::default()
    };

    project.insert(conn).await.map_err(|e| {
        if error::is_unique_violation(&e) {
            AppError::conflict("Team already has a project assigned")
        }
        else {
            AppError::database(format!("Failed to create project: {}", e))
        }
    })
}

/// Verify a team exists and carries no project, optionally ignoring one
/// project id (for moves).
async fn ensure_team_can_take_project<C: ConnectionTrait>(
    conn: &C,
    team_id: i32,
    exclude_project: Option<i32>,
) -> Result<()> {
    let team = TeamsEntity::find_by_id(team_id).one(conn).await?;
    if team.is_none() {
        return Err(AppError::not_found("Team not found"));
    }

    let mut query = ProjectsEntity::find().filter(ProjectColumn::TeamId.eq(team_id));
    if let Some(project_id) = exclude_project {
        query = query.filter(ProjectColumn::Id.ne(project_id));
    }

    if query.one(conn).await?.is_some() {
        return Err(AppError::conflict("Team already has a project assigned"));
    }

    Ok(())
}

/// Load a project with its matching detail sub-object, or `None` when the
/// project is absent.
pub(crate) async fn load_project_with_details<C: ConnectionTrait>(
    conn: &C,
    project_id: i32,
) -> Result<Option<ProjectWithDetailsResponse>> {
    let Some(project) = ProjectsEntity::find_by_id(project_id).one(conn).await? else {
        return Ok(None);
    };

    let mut response = ProjectWithDetailsResponse {
        project:            ProjectResponse::from_model(&project),
        management_details: None,
        multimedia_details: None,
    };

    match project.project_type {
        ProjectType::Management => {
            response.management_details = ManagementProjectsEntity::find_by_id(project_id)
                .one(conn)
                .await?
                .as_ref()
                .map(ManagementProjectResponse::from_model);
        },
        ProjectType::Multimedia => {
            response.multimedia_details = MultimediaProjectsEntity::find_by_id(project_id)
                .one(conn)
                .await?
                .as_ref()
                .map(MultimediaProjectResponse::from_model);
        },
    }

    Ok(Some(response))
}

/// Parse a project subtype path parameter
fn parse_project_type(value: &str) -> Result<ProjectType> {
    match value.to_lowercase().as_str() {
        "management" => Ok(ProjectType::Management),
        "multimedia" => Ok(ProjectType::Multimedia),
        _ => {
            Err(AppError::bad_request(
                "Invalid project type. Must be one of: management, multimedia",
            ))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_type_valid() {
        assert_eq!(
            parse_project_type("management").unwrap(),
            ProjectType::Management
        );
        assert_eq!(
            parse_project_type("multimedia").unwrap(),
            ProjectType::Multimedia
        );
    }

    #[test]
    fn test_parse_project_type_case_insensitive() {
        assert_eq!(
            parse_project_type("Management").unwrap(),
            ProjectType::Management
        );
        assert_eq!(
            parse_project_type("MULTIMEDIA").unwrap(),
            ProjectType::Multimedia
        );
    }

    #[test]
    fn test_parse_project_type_invalid() {
        assert!(parse_project_type("research").is_err());
        assert!(parse_project_type("").is_err());
    }
}
