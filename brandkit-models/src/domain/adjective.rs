use crate::entities::prelude::AdjectiveModel;
use chrono::{DateTime, Utc};
use sea_orm::{DerivePartialModel, FromQueryResult, ModelTrait};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdjectiveInput {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub subtle_example: String,
    #[validate(length(min = 1, max = 255))]
    pub obvious_example: String,
    #[validate(length(min = 1, max = 255))]
    pub intense_example: String,
}

/// Complete adjective set; replaces every stored adjective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdjectives {
    pub adjectives: Vec<AdjectiveInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, DerivePartialModel)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::AdjectiveModel as ModelTrait>::Entity")]
pub struct AdjectiveInfo {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub subtle_example: String,
    pub obvious_example: String,
    pub intense_example: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AdjectiveModel> for AdjectiveInfo {
    fn from(model: AdjectiveModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            subtle_example: model.subtle_example,
            obvious_example: model.obvious_example,
            intense_example: model.intense_example,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
