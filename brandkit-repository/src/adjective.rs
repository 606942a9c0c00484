use brandkit_error::StorageResult;
use brandkit_models::{
    domain::prelude::{AdjectiveInfo, AdjectiveInput},
    entities::prelude::{Adjective, AdjectiveActiveModel, AdjectiveColumn},
};
use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::instrument;

/// Repository for brand adjectives
pub struct AdjectiveRepository;

impl AdjectiveRepository {
    /// Adjectives of a brand, oldest first; the id keeps submission order
    /// within one save.
    pub async fn find_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<Vec<AdjectiveInfo>>
    where
        C: ConnectionTrait,
    {
        Ok(Adjective::find()
            .filter(AdjectiveColumn::BrandId.eq(brand_id))
            .order_by_asc(AdjectiveColumn::CreatedAt)
            .order_by_asc(AdjectiveColumn::Id)
            .into_partial_model::<AdjectiveInfo>()
            .all(db)
            .await?)
    }

    pub async fn count_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Adjective::find()
            .filter(AdjectiveColumn::BrandId.eq(brand_id))
            .count(db)
            .await?)
    }

    /// Replace every adjective of a brand in one transaction.
    #[instrument(name = "replace-adjectives", skip(adjectives, db))]
    pub async fn replace_all<C>(
        brand_id: i32,
        adjectives: Vec<AdjectiveInput>,
        db: &C,
    ) -> StorageResult<usize>
    where
        C: TransactionTrait,
    {
        let now = Utc::now();
        let rows: Vec<AdjectiveActiveModel> = adjectives
            .into_iter()
            .map(|a| AdjectiveActiveModel {
                brand_id: Set(brand_id),
                name: Set(a.name),
                description: Set(a.description),
                subtle_example: Set(a.subtle_example),
                obvious_example: Set(a.obvious_example),
                intense_example: Set(a.intense_example),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();
        let inserted = rows.len();

        let txn = db.begin().await?;
        Adjective::delete_many()
            .filter(AdjectiveColumn::BrandId.eq(brand_id))
            .exec(&txn)
            .await?;
        if !rows.is_empty() {
            Adjective::insert_many(rows).exec(&txn).await?;
        }
        txn.commit().await?;
        Ok(inserted)
    }
}
