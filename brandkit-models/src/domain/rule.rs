use crate::entities::prelude::RuleModel;
use chrono::{DateTime, Utc};
use sea_orm::{DerivePartialModel, FromQueryResult, ModelTrait};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Editable fields of a rule, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RuleInput {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 10, max = 500))]
    pub description: String,
    #[validate(length(min = 5, max = 255))]
    pub do_example: String,
    #[validate(length(min = 5, max = 255))]
    pub dont_example: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRule {
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, DerivePartialModel)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::RuleModel as ModelTrait>::Entity")]
pub struct RuleInfo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub do_example: String,
    pub dont_example: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RuleModel> for RuleInfo {
    fn from(model: RuleModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            do_example: model.do_example,
            dont_example: model.dont_example,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
