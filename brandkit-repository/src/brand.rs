//! Repository for the brand row.
//!
//! A deployment is expected to hold a single brand. Lookups pick the oldest
//! row so a stray duplicate never changes which brand is current.

use brandkit_error::StorageResult;
use brandkit_models::entities::prelude::{Brand, BrandActiveModel, BrandColumn, BrandModel};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};

pub struct BrandRepository;

impl BrandRepository {
    /// Load the current brand, if any.
    pub async fn find_first<C>(db: &C) -> StorageResult<Option<BrandModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::find()
            .order_by_asc(BrandColumn::Id)
            .limit(1)
            .one(db)
            .await?)
    }

    pub async fn exists<C>(db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::find().count(db).await? > 0)
    }

    /// Insert the brand row.
    pub async fn create<C>(name: String, db: &C) -> StorageResult<BrandModel>
    where
        C: ConnectionTrait,
    {
        let brand = BrandActiveModel {
            name: Set(name),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        Ok(brand.insert(db).await?)
    }

    /// Rename an existing brand.
    pub async fn update_name<C>(brand: BrandModel, name: String, db: &C) -> StorageResult<BrandModel>
    where
        C: ConnectionTrait,
    {
        let mut active = brand.into_active_model();
        active.name = Set(name);
        Ok(active.update(db).await?)
    }
}
