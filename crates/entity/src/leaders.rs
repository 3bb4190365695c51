//! Leaders Entity
//!
//! 1:1 extension of an employee with role `leader`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "leaders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id:      i32,
    pub years_experience: i32,
    pub projects_led:     i32,
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
    #[sea_orm(has_many = "super::teams::Entity")]
    Teams,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef { Relation::Teams.def() }
}

impl ActiveModelBehavior for ActiveModel {}
