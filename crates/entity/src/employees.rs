//! Employees Entity
//!
//! The polymorphic base for programmers and leaders. The `role` column
//! discriminates which extension table holds the rest of the record.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:            i32,
    #[sea_orm(unique)]
    pub identity_card: String,
    pub name:          String,
    pub age:           i32,
    pub sex:           String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub base_salary:   Decimal,
    pub role:          EmployeeRole,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::programmers::Entity")]
    Programmer,
    #[sea_orm(has_one = "super::leaders::Entity")]
    Leader,
}

impl Related<super::programmers::Entity> for Entity {
    fn to() -> RelationDef { Relation::Programmer.def() }
}

impl Related<super::leaders::Entity> for Entity {
    fn to() -> RelationDef { Relation::Leader.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Employee role discriminator
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum EmployeeRole {
    /// Extended by a `programmers` row
    #[sea_orm(string_value = "programmer")]
    Programmer,
    /// Extended by a `leaders` row
    #[sea_orm(string_value = "leader")]
    Leader,
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeRole::Programmer => write!(f, "programmer"),
            EmployeeRole::Leader => write!(f, "leader"),
        }
    }
}
