//! Teams Entity
//!
//! A team optionally references its leader and owns zero-or-one project
//! (enforced by the unique index on `projects.team_id`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:        i32,
    pub name:      String,
    pub leader_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::leaders::Entity",
        from = "Column::LeaderId",
        to = "super::leaders::Column::EmployeeId",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Leader,
    #[sea_orm(has_many = "super::team_members::Entity")]
    Members,
    #[sea_orm(has_one = "super::projects::Entity")]
    Project,
}

impl Related<super::leaders::Entity> for Entity {
    fn to() -> RelationDef { Relation::Leader.def() }
}

impl Related<super::team_members::Entity> for Entity {
    fn to() -> RelationDef { Relation::Members.def() }
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef { Relation::Project.def() }
}

impl ActiveModelBehavior for ActiveModel {}
