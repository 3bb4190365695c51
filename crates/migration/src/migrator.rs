//! # Database Migrator
//!
//! Implements the Sea-ORM migrator trait coordinating all schema changes.
//! Migrations run in list order; referenced tables come before referencing
//! tables so inline foreign keys resolve on every backend.

use sea_orm_migration::prelude::*;

/// The main migrator that coordinates all migration operations
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(crate::m20260310_000001_create_users_table::Migration),
            Box::new(crate::m20260310_000002_create_employees_table::Migration),
            Box::new(crate::m20260310_000003_create_programmers_table::Migration),
            Box::new(crate::m20260310_000004_create_programmer_languages_table::Migration),
            Box::new(crate::m20260310_000005_create_leaders_table::Migration),
            Box::new(crate::m20260310_000006_create_teams_table::Migration),
            Box::new(crate::m20260310_000007_create_team_members_table::Migration),
            Box::new(crate::m20260310_000008_create_projects_table::Migration),
            Box::new(crate::m20260310_000009_create_management_projects_table::Migration),
            Box::new(crate::m20260310_000010_create_multimedia_projects_table::Migration),
        ]
    }
}
