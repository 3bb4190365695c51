//! Team Members Entity
//!
//! Join table linking programmers to teams. Besides the composite primary
//! key, a unique index on `programmer_id` alone guarantees a programmer
//! belongs to at most one team system-wide.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "team_members")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_id:       i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub programmer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::TeamId",
        to = "super::teams::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::programmers::Entity",
        from = "Column::ProgrammerId",
        to = "super::programmers::Column::EmployeeId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Programmer,
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef { Relation::Team.def() }
}

impl Related<super::programmers::Entity> for Entity {
    fn to() -> RelationDef { Relation::Programmer.def() }
}

impl ActiveModelBehavior for ActiveModel {}
