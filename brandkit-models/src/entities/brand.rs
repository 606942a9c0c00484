//! `SeaORM` Entity for the brand table.
//!
//! A deployment holds a **single row**; every other table is scoped to it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "brand")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::personality::Entity")]
    Personality,
    #[sea_orm(has_many = "super::adjective::Entity")]
    Adjective,
    #[sea_orm(has_many = "super::rule::Entity")]
    Rule,
}

impl Related<super::personality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Personality.def()
    }
}

impl Related<super::adjective::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Adjective.def()
    }
}

impl Related<super::rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
