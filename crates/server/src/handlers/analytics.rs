//! # Analytics Handlers
//!
//! Read-only derivations over the staffing graph: salary computation,
//! rankings, counts, and the cross-entity traversals.

use axum::Json;
use entity::{
    employees::{Column as EmployeeColumn, EmployeeRole, Entity as EmployeesEntity},
    management_projects::{Column as ManagementColumn, Entity as ManagementProjectsEntity},
    programmer_languages::{Column as LanguageColumn, Entity as LanguagesEntity},
    programmers::Entity as ProgrammersEntity,
    projects::{Column as ProjectColumn, Entity as ProjectsEntity, ProjectType},
    team_members::{Column as MemberColumn, Entity as TeamMembersEntity},
};
use error::{AppError, Result};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::{
    dto::{
        analytics::{HighestPaidQuery, ProjectTypeCount, SalaryInfo},
        programmers::ProgrammerResponse,
        projects::ProjectResponse,
    },
    handlers::programmers::programmer_response,
    AppState,
};

/// Bonus per mastered language for programmers.
const LANGUAGE_BONUS: i64 = 200;
/// Bonus per year of experience for leaders.
const EXPERIENCE_BONUS: i64 = 300;
/// Bonus per led project for leaders.
const PROJECT_LED_BONUS: i64 = 500;

/// Compute the derived salary for one employee
pub async fn calculate_salary_handler(state: &AppState, employee_id: i32) -> Result<Json<SalaryInfo>> {
    let employee = EmployeesEntity::find_by_id(employee_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    let total_salary = calculate_salary(&state.db, &employee).await?;

    Ok(Json(SalaryInfo {
        employee_id: employee.id,
        name: employee.name,
        total_salary,
    }))
}

/// Count projects grouped by subtype
pub async fn count_projects_by_type_handler(state: &AppState) -> Result<Json<Vec<ProjectTypeCount>>> {
    let rows: Vec<(ProjectType, i64)> = ProjectsEntity::find()
        .select_only()
        .column(ProjectColumn::ProjectType)
        .column_as(ProjectColumn::Id.count(), "count")
        .group_by(ProjectColumn::ProjectType)
        .into_tuple()
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to count projects: {}", e)))?;

    Ok(Json(
        rows.into_iter()
            .map(|(project_type, count)| {
                ProjectTypeCount {
                    project_type: project_type.to_string(),
                    count:        count as u64,
                }
            })
            .collect(),
    ))
}

/// Rank all employees by derived salary, highest first
///
/// The sort is stable: employees with equal salaries keep their id order.
pub async fn get_highest_paid_employees_handler(
    state: &AppState,
    query: HighestPaidQuery,
) -> Result<Json<Vec<SalaryInfo>>> {
    let employees = EmployeesEntity::find()
        .order_by_asc(EmployeeColumn::Id)
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch employees: {}", e)))?;

    let mut ranking = Vec::with_capacity(employees.len());
    for employee in &employees {
        let total_salary = calculate_salary(&state.db, employee).await?;
        ranking.push(SalaryInfo {
            employee_id: employee.id,
            name: employee.name.clone(),
            total_salary,
        });
    }

    ranking.sort_by(|a, b| b.total_salary.cmp(&a.total_salary));
    ranking.truncate(query.limit());

    Ok(Json(ranking))
}

/// Find programmers whose team's project uses the given framework
///
/// Walks Programmer → TeamMember → Team → Project → ManagementProject and
/// de-duplicates by programmer.
pub async fn get_programmers_by_framework_handler(
    state: &AppState,
    framework: &str,
) -> Result<Json<Vec<ProgrammerResponse>>> {
    let detail_rows = ManagementProjectsEntity::find()
        .filter(ManagementColumn::Framework.eq(framework))
        .all(&state.db)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch management projects: {}", e)))?;

    let project_ids: Vec<i32> = detail_rows.iter().map(|row| row.project_id).collect();
    if project_ids.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let projects = ProjectsEntity::find()
        .filter(ProjectColumn::Id.is_in(project_ids))
        .all(&state.db)
        .await?;

    let team_ids: Vec<i32> = projects.iter().filter_map(|project| project.team_id).collect();
    if team_ids.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let memberships = TeamMembersEntity::find()
        .filter(MemberColumn::TeamId.is_in(team_ids))
        .order_by_asc(MemberColumn::ProgrammerId)
        .all(&state.db)
        .await?;

    let mut seen: Vec<i32> = Vec::with_capacity(memberships.len());
    let mut responses = Vec::with_capacity(memberships.len());
    for membership in &memberships {
        if seen.contains(&membership.programmer_id) {
            continue;
        }
        seen.push(membership.programmer_id);

        let programmer = ProgrammersEntity::find_by_id(membership.programmer_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::internal("Membership without programmer record"))?;
        responses.push(programmer_response(&state.db, &programmer).await?);
    }

    Ok(Json(responses))
}

/// List programmers assigned to a project through its team
pub async fn get_programmers_by_project_handler(
    state: &AppState,
    project_id: i32,
) -> Result<Json<Vec<ProgrammerResponse>>> {
    let project = ProjectsEntity::find_by_id(project_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    let Some(team_id) = project.team_id else {
        return Ok(Json(Vec::new()));
    };

    let memberships = TeamMembersEntity::find()
        .filter(MemberColumn::TeamId.eq(team_id))
        .order_by_asc(MemberColumn::ProgrammerId)
        .all(&state.db)
        .await?;

    let mut responses = Vec::with_capacity(memberships.len());
    for membership in &memberships {
        let programmer = ProgrammersEntity::find_by_id(membership.programmer_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::internal("Membership without programmer record"))?;
        responses.push(programmer_response(&state.db, &programmer).await?);
    }

    Ok(Json(responses))
}

/// Resolve the project a programmer works on, by identity card
///
/// Returns `null` when the programmer has no team or the team has no
/// project; an unknown identity card is a not-found.
pub async fn get_project_by_programmer_identity_handler(
    state: &AppState,
    identity_card: &str,
) -> Result<Json<Option<ProjectResponse>>> {
    let employee = EmployeesEntity::find()
        .filter(EmployeeColumn::IdentityCard.eq(identity_card))
        .filter(EmployeeColumn::Role.eq(EmployeeRole::Programmer))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("No programmer found with this identity card"))?;

    let membership = TeamMembersEntity::find()
        .filter(MemberColumn::ProgrammerId.eq(employee.id))
        .one(&state.db)
        .await?;

    let Some(membership) = membership else {
        return Ok(Json(None));
    };

    let project = ProjectsEntity::find()
        .filter(ProjectColumn::TeamId.eq(membership.team_id))
        .one(&state.db)
        .await?;

    Ok(Json(project.as_ref().map(ProjectResponse::from_model)))
}

/// Compute the derived salary for an already-loaded employee
///
/// A pure function of the current employee, role, and language state.
pub(crate) async fn calculate_salary<C: ConnectionTrait>(
    conn: &C,
    employee: &entity::employees::Model,
) -> Result<Decimal> {
    match employee.role {
        EmployeeRole::Programmer => {
            let language_count = LanguagesEntity::find()
                .filter(LanguageColumn::ProgrammerId.eq(employee.id))
                .count(conn)
                .await
                .map_err(|e| AppError::database(format!("Failed to count languages: {}", e)))?;

            Ok(programmer_salary(employee.base_salary, language_count))
        },
        EmployeeRole::Leader => {
            let leader = entity::leaders::Entity::find_by_id(employee.id)
                .one(conn)
                .await?
                .ok_or_else(|| AppError::internal("Leader without role record"))?;

            Ok(leader_salary(
                employee.base_salary,
                leader.years_experience,
                leader.projects_led,
            ))
        },
    }
}

/// Flat-bonus salary for programmers: base + 200 per language.
fn programmer_salary(base_salary: Decimal, language_count: u64) -> Decimal {
    base_salary + Decimal::from(LANGUAGE_BONUS) * Decimal::from(language_count)
}

/// Flat-bonus salary for leaders: base + 300 per year + 500 per project.
fn leader_salary(base_salary: Decimal, years_experience: i32, projects_led: i32) -> Decimal {
    base_salary
        + Decimal::from(EXPERIENCE_BONUS) * Decimal::from(years_experience)
        + Decimal::from(PROJECT_LED_BONUS) * Decimal::from(projects_led)
}
