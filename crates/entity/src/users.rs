//! Users Entity
//!
//! Authentication principals. Unrelated to the business graph; consumed
//! only by the auth endpoints and the bearer middleware.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:              i32,
    #[sea_orm(unique)]
    pub username:        String,
    #[sea_orm(unique)]
    pub email:           String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub is_active:       bool,
    pub created_at:      chrono::NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
