//! # Crewdesk Migrations
//!
//! Database schema migrations for the Crewdesk application, managed with
//! `sea-orm-migration`. One migration per table, ordered by dependency.

pub use sea_orm_migration::prelude::*;

mod m20260310_000001_create_users_table;
mod m20260310_000002_create_employees_table;
mod m20260310_000003_create_programmers_table;
mod m20260310_000004_create_programmer_languages_table;
mod m20260310_000005_create_leaders_table;
mod m20260310_000006_create_teams_table;
mod m20260310_000007_create_team_members_table;
mod m20260310_000008_create_projects_table;
mod m20260310_000009_create_management_projects_table;
mod m20260310_000010_create_multimedia_projects_table;

pub mod migrator;
pub use migrator::Migrator;

/// Database connection helper for CLI and test usage
pub async fn connect_to_database(database_url: &str) -> Result<sea_orm::DatabaseConnection, sea_orm::DbErr> {
    sea_orm::Database::connect(database_url).await
}
