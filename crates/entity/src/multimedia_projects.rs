//! Multimedia Projects Entity
//!
//! Detail row for projects of type `multimedia`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "multimedia_projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_id:       i32,
    pub development_tool: DevelopmentTool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef { Relation::Project.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Authoring tool for multimedia projects
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentTool {
    #[sea_orm(string_value = "flash")]
    Flash,
    #[sea_orm(string_value = "director")]
    Director,
}

impl std::fmt::Display for DevelopmentTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DevelopmentTool::Flash => write!(f, "flash"),
            DevelopmentTool::Director => write!(f, "director"),
        }
    }
}
