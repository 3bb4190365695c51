//! # API Router Configuration
//!
//! Configures API routes for the Crewdesk application. Reads on the
//! staffing graph are public; team routes and every mutation require an
//! authenticated active user.

use axum::{
    extract::{Extension, Path, Query, State as AxumState},
    http::header,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json,
    Router,
};
use error::Result;

use crate::{
    dto::{
        analytics::{HighestPaidQuery, ProjectTypeCount, SalaryInfo},
        auth::{LoginRequest, RegisterRequest, SuccessResponse, TokenResponse, UserResponse},
        employees::{CreateEmployeeRequest, EmployeeResponse, UpdateEmployeeRequest},
        leaders::{CreateLeaderRequest, LeaderResponse, UpdateLeaderRequest},
        programmers::{
            AddLanguageRequest,
            CreateProgrammerRequest,
            LanguagesResponse,
            ProgrammerResponse,
            UpdateProgrammerRequest,
        },
        projects::{
            CreateManagementProjectRequest,
            CreateMultimediaProjectRequest,
            CreateProjectRequest,
            ManagementProjectResponse,
            MultimediaProjectResponse,
            ProjectResponse,
            ProjectWithDetailsResponse,
            UpdateManagementProjectRequest,
            UpdateMultimediaProjectRequest,
            UpdateProjectRequest,
        },
        teams::{AddTeamMemberRequest, CreateTeamRequest, TeamMembersResponse, TeamResponse, UpdateTeamRequest},
        ListQuery,
    },
    handlers,
    middleware::auth::{auth_middleware, AuthenticatedUser},
    AppState,
};

/// Creates the API router with all routes
///
/// # Arguments
///
/// * `state` - Application state containing DB pool and config
///
/// # Returns
///
/// Configured Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    // Routes that require an authenticated active user: the whole team
    // surface and every mutation elsewhere.
    let protected_routes = Router::new()
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/employees", post(create_employee))
        .route(
            "/api/v1/employees/:id",
            put(update_employee).delete(delete_employee),
        )
        .route("/api/v1/programmers", post(create_programmer))
        .route(
            "/api/v1/programmers/:id",
            put(update_programmer).delete(delete_programmer),
        )
        .route(
            "/api/v1/programmers/:id/languages",
            post(add_programmer_language),
        )
        .route(
            "/api/v1/programmers/:id/languages/:language",
            delete(remove_programmer_language),
        )
        .route("/api/v1/leaders", post(create_leader))
        .route(
            "/api/v1/leaders/:id",
            put(update_leader).delete(delete_leader),
        )
        .route("/api/v1/teams", post(create_team).get(list_teams))
        .route(
            "/api/v1/teams/:id",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route(
            "/api/v1/teams/:id/members",
            get(get_team_members).post(add_team_member),
        )
        .route(
            "/api/v1/teams/:id/members/:programmer_id",
            delete(remove_team_member),
        )
        .route("/api/v1/teams/by-leader/:leader_id", get(get_team_by_leader))
        .route("/api/v1/projects", post(create_project))
        .route(
            "/api/v1/projects/:id",
            put(update_project).delete(delete_project),
        )
        .route(
            "/api/v1/management-projects",
            post(create_management_project),
        )
        .route(
            "/api/v1/management-projects/:id",
            put(update_management_project),
        )
        .route(
            "/api/v1/multimedia-projects",
            post(create_multimedia_project),
        )
        .route(
            "/api/v1/multimedia-projects/:id",
            put(update_multimedia_project),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Public routes: authentication entry points and graph reads.
    let public_routes = Router::new()
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/employees", get(list_employees))
        .route("/api/v1/employees/:id", get(get_employee))
        .route(
            "/api/v1/employees/by-identity/:identity_card",
            get(get_employee_by_identity),
        )
        .route("/api/v1/programmers", get(list_programmers))
        .route("/api/v1/programmers/:id", get(get_programmer))
        .route(
            "/api/v1/programmers/:id/languages",
            get(get_programmer_languages),
        )
        .route("/api/v1/leaders", get(list_leaders))
        .route("/api/v1/leaders/:id", get(get_leader))
        .route("/api/v1/projects", get(list_projects))
        .route("/api/v1/projects/:id", get(get_project))
        .route("/api/v1/projects/by-type/:project_type", get(get_projects_by_type))
        .route("/api/v1/projects/:id/details", get(get_project_with_details))
        .route("/api/v1/projects/:id/export-txt", get(export_project_text))
        .route("/api/v1/management-projects/:id", get(get_management_project))
        .route("/api/v1/multimedia-projects/:id", get(get_multimedia_project))
        .route(
            "/api/v1/analytics/earliest-project",
            get(get_earliest_finishing_project),
        )
        .route("/api/v1/analytics/projects-count", get(count_projects_by_type))
        .route(
            "/api/v1/analytics/highest-paid-employees",
            get(get_highest_paid_employees),
        )
        .route("/api/v1/analytics/salary/:employee_id", get(calculate_salary))
        .route(
            "/api/v1/analytics/programmers/by-framework/:framework",
            get(get_programmers_by_framework),
        )
        .route(
            "/api/v1/analytics/projects/:id/programmers",
            get(get_programmers_by_project),
        )
        .route(
            "/api/v1/analytics/programmer-project/:identity_card",
            get(get_project_by_programmer_identity),
        );

    public_routes.merge(protected_routes).with_state(state)
}

/// Creates the health check router
pub fn create_health_router() -> Router { Router::new().route("/health", get(|| async { "OK" })) }

/// Creates the main application router
///
/// # Arguments
///
/// * `state` - Application state containing DB pool and config
///
/// # Returns
///
/// Main router with health checks and API routes
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .merge(create_health_router())
        .merge(create_router(state))
}

// ==================== Auth ====================

async fn register(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<UserResponse>> {
    handlers::auth::register_handler(&state, req).await
}

async fn login(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    handlers::auth::login_handler(&state, req).await
}

async fn me(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>> {
    handlers::auth::me_handler(&state, user).await
}

// ==================== Employees ====================

async fn create_employee(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>> {
    handlers::employees::create_employee_handler(&state, user, req).await
}

async fn get_employee(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EmployeeResponse>> {
    handlers::employees::get_employee_handler(&state, id).await
}

async fn get_employee_by_identity(
    AxumState(state): AxumState<AppState>,
    Path(identity_card): Path<String>,
) -> Result<Json<EmployeeResponse>> {
    handlers::employees::get_employee_by_identity_handler(&state, &identity_card).await
}

async fn list_employees(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<EmployeeResponse>>> {
    handlers::employees::list_employees_handler(&state, query).await
}

async fn update_employee(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<EmployeeResponse>> {
    handlers::employees::update_employee_handler(&state, user, id, req).await
}

async fn delete_employee(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>> {
    handlers::employees::delete_employee_handler(&state, user, id).await
}

// ==================== Programmers ====================

async fn create_programmer(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(req): Json<CreateProgrammerRequest>,
) -> Result<Json<ProgrammerResponse>> {
    handlers::programmers::create_programmer_handler(&state, user, req).await
}

async fn get_programmer(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProgrammerResponse>> {
    handlers::programmers::get_programmer_handler(&state, id).await
}

async fn list_programmers(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ProgrammerResponse>>> {
    handlers::programmers::list_programmers_handler(&state, query).await
}

async fn update_programmer(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateProgrammerRequest>,
) -> Result<Json<ProgrammerResponse>> {
    handlers::programmers::update_programmer_handler(&state, user, id, req).await
}

async fn delete_programmer(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>> {
    handlers::programmers::delete_programmer_handler(&state, user, id).await
}

async fn get_programmer_languages(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<LanguagesResponse>> {
    handlers::programmers::get_programmer_languages_handler(&state, id).await
}

async fn add_programmer_language(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(req): Json<AddLanguageRequest>,
) -> Result<Json<LanguagesResponse>> {
    handlers::programmers::add_programmer_language_handler(&state, user, id, req).await
}

async fn remove_programmer_language(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, language)): Path<(i32, String)>,
) -> Result<Json<SuccessResponse>> {
    handlers::programmers::remove_programmer_language_handler(&state, user, id, &language).await
}

// ==================== Leaders ====================

async fn create_leader(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(req): Json<CreateLeaderRequest>,
) -> Result<Json<LeaderResponse>> {
    handlers::leaders::create_leader_handler(&state, user, req).await
}

async fn get_leader(AxumState(state): AxumState<AppState>, Path(id): Path<i32>) -> Result<Json<LeaderResponse>> {
    handlers::leaders::get_leader_handler(&state, id).await
}

async fn list_leaders(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<LeaderResponse>>> {
    handlers::leaders::list_leaders_handler(&state, query).await
}

async fn update_leader(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateLeaderRequest>,
) -> Result<Json<LeaderResponse>> {
    handlers::leaders::update_leader_handler(&state, user, id, req).await
}

async fn delete_leader(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>> {
    handlers::leaders::delete_leader_handler(&state, user, id).await
}

// ==================== Teams ====================

async fn create_team(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Json<TeamResponse>> {
    handlers::teams::create_team_handler(&state, user, req).await
}

async fn get_team(AxumState(state): AxumState<AppState>, Path(id): Path<i32>) -> Result<Json<TeamResponse>> {
    handlers::teams::get_team_handler(&state, id).await
}

async fn list_teams(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TeamResponse>>> {
    handlers::teams::list_teams_handler(&state, query).await
}

async fn update_team(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>> {
    handlers::teams::update_team_handler(&state, user, id, req).await
}

async fn delete_team(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>> {
    handlers::teams::delete_team_handler(&state, user, id).await
}

async fn get_team_members(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TeamMembersResponse>> {
    handlers::teams::get_team_members_handler(&state, id).await
}

async fn add_team_member(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(req): Json<AddTeamMemberRequest>,
) -> Result<Json<TeamMembersResponse>> {
    handlers::teams::add_team_member_handler(&state, user, id, req).await
}

async fn remove_team_member(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path((id, programmer_id)): Path<(i32, i32)>,
) -> Result<Json<SuccessResponse>> {
    handlers::teams::remove_team_member_handler(&state, user, id, programmer_id).await
}

async fn get_team_by_leader(
    AxumState(state): AxumState<AppState>,
    Path(leader_id): Path<i32>,
) -> Result<Json<Option<TeamResponse>>> {
    handlers::teams::get_team_by_leader_handler(&state, leader_id).await
}

// ==================== Projects ====================

async fn create_project(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<ProjectResponse>> {
    handlers::projects::create_project_handler(&state, user, req).await
}

async fn get_project(AxumState(state): AxumState<AppState>, Path(id): Path<i32>) -> Result<Json<ProjectResponse>> {
    handlers::projects::get_project_handler(&state, id).await
}

async fn list_projects(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ProjectResponse>>> {
    handlers::projects::list_projects_handler(&state, query).await
}

async fn get_projects_by_type(
    AxumState(state): AxumState<AppState>,
    Path(project_type): Path<String>,
) -> Result<Json<Vec<ProjectResponse>>> {
    handlers::projects::get_projects_by_type_handler(&state, &project_type).await
}

async fn get_project_with_details(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProjectWithDetailsResponse>> {
    handlers::projects::get_project_with_details_handler(&state, id).await
}

async fn update_project(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectResponse>> {
    handlers::projects::update_project_handler(&state, user, id, req).await
}

async fn delete_project(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> Result<Json<SuccessResponse>> {
    handlers::projects::delete_project_handler(&state, user, id).await
}

async fn create_management_project(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(req): Json<CreateManagementProjectRequest>,
) -> Result<Json<ManagementProjectResponse>> {
    handlers::projects::create_management_project_handler(&state, user, req).await
}

async fn get_management_project(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ManagementProjectResponse>> {
    handlers::projects::get_management_project_handler(&state, id).await
}

async fn update_management_project(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateManagementProjectRequest>,
) -> Result<Json<ManagementProjectResponse>> {
    handlers::projects::update_management_project_handler(&state, user, id, req).await
}

async fn create_multimedia_project(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(req): Json<CreateMultimediaProjectRequest>,
) -> Result<Json<MultimediaProjectResponse>> {
    handlers::projects::create_multimedia_project_handler(&state, user, req).await
}

async fn get_multimedia_project(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MultimediaProjectResponse>> {
    handlers::projects::get_multimedia_project_handler(&state, id).await
}

async fn update_multimedia_project(
    AxumState(state): AxumState<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateMultimediaProjectRequest>,
) -> Result<Json<MultimediaProjectResponse>> {
    handlers::projects::update_multimedia_project_handler(&state, user, id, req).await
}

async fn export_project_text(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let text = handlers::projects::export_project_text_handler(&state, id).await?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    ))
}

// ==================== Analytics ====================

async fn calculate_salary(
    AxumState(state): AxumState<AppState>,
    Path(employee_id): Path<i32>,
) -> Result<Json<SalaryInfo>> {
    handlers::analytics::calculate_salary_handler(&state, employee_id).await
}

async fn count_projects_by_type(AxumState(state): AxumState<AppState>) -> Result<Json<Vec<ProjectTypeCount>>> {
    handlers::analytics::count_projects_by_type_handler(&state).await
}

async fn get_highest_paid_employees(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<HighestPaidQuery>,
) -> Result<Json<Vec<SalaryInfo>>> {
    handlers::analytics::get_highest_paid_employees_handler(&state, query).await
}

async fn get_earliest_finishing_project(AxumState(state): AxumState<AppState>) -> Result<Json<ProjectResponse>> {
    handlers::projects::get_earliest_finishing_project_handler(&state).await
}

async fn get_programmers_by_framework(
    AxumState(state): AxumState<AppState>,
    Path(framework): Path<String>,
) -> Result<Json<Vec<ProgrammerResponse>>> {
    handlers::analytics::get_programmers_by_framework_handler(&state, &framework).await
}

async fn get_programmers_by_project(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ProgrammerResponse>>> {
    handlers::analytics::get_programmers_by_project_handler(&state, id).await
}

async fn get_project_by_programmer_identity(
    AxumState(state): AxumState<AppState>,
    Path(identity_card): Path<String>,
) -> Result<Json<Option<ProjectResponse>>> {
    handlers::analytics::get_project_by_programmer_identity_handler(&state, &identity_card).await
}
