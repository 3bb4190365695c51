//! Programmers Entity
//!
//! 1:1 extension of an employee with role `programmer`. The language set
//! lives in `programmer_languages`, keyed by (programmer_id, language).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "programmers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: i32,
    pub category:    ProgrammerCategory,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::EmployeeId",
        to = "super::employees::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Employee,
    #[sea_orm(has_many = "super::programmer_languages::Entity")]
    Languages,
    #[sea_orm(has_many = "super::team_members::Entity")]
    Memberships,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl Related<super::programmer_languages::Entity> for Entity {
    fn to() -> RelationDef { Relation::Languages.def() }
}

impl Related<super::team_members::Entity> for Entity {
    fn to() -> RelationDef { Relation::Memberships.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Programmer seniority category
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum ProgrammerCategory {
    #[sea_orm(string_value = "A")]
    A,
    #[sea_orm(string_value = "B")]
    B,
    #[sea_orm(string_value = "C")]
    C,
}

impl std::fmt::Display for ProgrammerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgrammerCategory::A => write!(f, "A"),
            ProgrammerCategory::B => write!(f, "B"),
            ProgrammerCategory::C => write!(f, "C"),
        }
    }
}
