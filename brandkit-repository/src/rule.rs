use brandkit_error::StorageResult;
use brandkit_models::{
    domain::prelude::{RuleInfo, RuleInput},
    entities::prelude::{Rule, RuleActiveModel, RuleColumn, RuleModel},
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set,
};

/// Repository for writing rules
pub struct RuleRepository;

impl RuleRepository {
    /// Rules of a brand, newest first.
    pub async fn find_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<Vec<RuleInfo>>
    where
        C: ConnectionTrait,
    {
        Ok(Rule::find()
            .filter(RuleColumn::BrandId.eq(brand_id))
            .order_by_desc(RuleColumn::CreatedAt)
            .order_by_desc(RuleColumn::Id)
            .into_partial_model::<RuleInfo>()
            .all(db)
            .await?)
    }

    /// Find a rule only if it belongs to `brand_id`.
    pub async fn find_owned<C>(id: i32, brand_id: i32, db: &C) -> StorageResult<Option<RuleModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Rule::find_by_id(id)
            .filter(RuleColumn::BrandId.eq(brand_id))
            .one(db)
            .await?)
    }

    /// Insert an active rule.
    pub async fn create<C>(brand_id: i32, rule: RuleInput, db: &C) -> StorageResult<RuleModel>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        let rule = RuleActiveModel {
            brand_id: Set(brand_id),
            title: Set(rule.title),
            description: Set(rule.description),
            do_example: Set(rule.do_example),
            dont_example: Set(rule.dont_example),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        Ok(rule.insert(db).await?)
    }

    /// Flip the active flag; nothing else but `updated_at` changes.
    pub async fn set_active<C>(rule: RuleModel, is_active: bool, db: &C) -> StorageResult<RuleModel>
    where
        C: ConnectionTrait,
    {
        let mut active = rule.into_active_model();
        active.is_active = Set(is_active);
        active.updated_at = Set(Utc::now());
        Ok(active.update(db).await?)
    }

    /// Overwrite the editable fields of a rule.
    pub async fn update<C>(rule: RuleModel, fields: RuleInput, db: &C) -> StorageResult<RuleModel>
    where
        C: ConnectionTrait,
    {
        let mut active = rule.into_active_model();
        active.title = Set(fields.title);
        active.description = Set(fields.description);
        active.do_example = Set(fields.do_example);
        active.dont_example = Set(fields.dont_example);
        active.updated_at = Set(Utc::now());
        Ok(active.update(db).await?)
    }

    /// Permanently remove a rule.
    pub async fn delete<C>(rule: RuleModel, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(rule.delete(db).await?.rows_affected)
    }
}
