use brandkit_error::StorageResult;
use brandkit_models::{
    domain::prelude::{PersonalityAnswerInput, PersonalityInfo},
    entities::prelude::{Personality, PersonalityActiveModel, PersonalityColumn},
};
use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::instrument;

/// Repository for personality answers
pub struct PersonalityRepository;

impl PersonalityRepository {
    /// Answers of a brand in question order.
    pub async fn find_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<Vec<PersonalityInfo>>
    where
        C: ConnectionTrait,
    {
        Ok(Personality::find()
            .filter(PersonalityColumn::BrandId.eq(brand_id))
            .order_by_asc(PersonalityColumn::QuestionIndex)
            .into_partial_model::<PersonalityInfo>()
            .all(db)
            .await?)
    }

    pub async fn count_by_brand<C>(brand_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Personality::find()
            .filter(PersonalityColumn::BrandId.eq(brand_id))
            .count(db)
            .await?)
    }

    /// Replace every answer of a brand in one transaction.
    ///
    /// Readers see either the previous set or the new one. Any failure drops
    /// the transaction, which rolls it back.
    #[instrument(name = "replace-personality", skip(answers, db))]
    pub async fn replace_all<C>(
        brand_id: i32,
        answers: Vec<PersonalityAnswerInput>,
        db: &C,
    ) -> StorageResult<usize>
    where
        C: TransactionTrait,
    {
        let now = Utc::now();
        let rows: Vec<PersonalityActiveModel> = answers
            .into_iter()
            .map(|a| PersonalityActiveModel {
                brand_id: Set(brand_id),
                question_index: Set(a.question_index),
                answer: Set(a.answer),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            })
            .collect();
        let inserted = rows.len();

        let txn = db.begin().await?;
        Personality::delete_many()
            .filter(PersonalityColumn::BrandId.eq(brand_id))
            .exec(&txn)
            .await?;
        if !rows.is_empty() {
            Personality::insert_many(rows).exec(&txn).await?;
        }
        txn.commit().await?;
        Ok(inserted)
    }
}
