//! # Crewdesk API Server
//!
//! Axum-based HTTP API server for Crewdesk, the staffing and projects
//! backend.
//!
//! ## Modules
//!
//! - [`dto`]: Request/response data transfer objects
//! - [`handlers`]: Business operations (employees, roles, teams, projects,
//!   analytics, auth)
//! - [`middleware`]: HTTP middleware (bearer auth)
//! - [`report`]: Plain-text project export rendering
//! - [`router`]: API route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod report;
pub mod router;

pub use router::create_app_router;

/// Application state shared across request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db:         sea_orm::DbConn,
    /// JWT configuration
    pub jwt_config: auth::JwtConfig,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}
