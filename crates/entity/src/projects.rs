//! Projects Entity
//!
//! The base project row. `project_type` determines which detail table
//! (`management_projects` or `multimedia_projects`) extends it. `team_id`
//! is nullable so a team deletion can detach the project, and unique so a
//! team never carries two projects.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:             i32,
    pub name:           String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description:    Option<String>,
    pub estimated_time: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price:          Decimal,
    pub project_type:   ProjectType,
    #[sea_orm(unique)]
    pub team_id:        Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teams::Entity",
        from = "Column::TeamId",
        to = "super::teams::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(has_one = "super::management_projects::Entity")]
    ManagementDetails,
    #[sea_orm(has_one = "super::multimedia_projects::Entity")]
    MultimediaDetails,
}

impl Related<super::teams::Entity> for Entity {
    fn to() -> RelationDef { Relation::Team.def() }
}

impl Related<super::management_projects::Entity> for Entity {
    fn to() -> RelationDef { Relation::ManagementDetails.def() }
}

impl Related<super::multimedia_projects::Entity> for Entity {
    fn to() -> RelationDef { Relation::MultimediaDetails.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Project subtype discriminator
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Extended by a `management_projects` row
    #[sea_orm(string_value = "management")]
    Management,
    /// Extended by a `multimedia_projects` row
    #[sea_orm(string_value = "multimedia")]
    Multimedia,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectType::Management => write!(f, "management"),
            ProjectType::Multimedia => write!(f, "multimedia"),
        }
    }
}
