//! Programmer Languages Entity
//!
//! One row per language a programmer masters. The composite primary key
//! makes duplicates impossible at the store level.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "programmer_languages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub programmer_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub language:      String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::programmers::Entity",
        from = "Column::ProgrammerId",
        to = "super::programmers::Column::EmployeeId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Programmer,
}

impl Related<super::programmers::Entity> for Entity {
    fn to() -> RelationDef { Relation::Programmer.def() }
}

impl ActiveModelBehavior for ActiveModel {}
