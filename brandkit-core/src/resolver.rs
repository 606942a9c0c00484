use brandkit_error::{action::ActionError, ActionOutcome};
use brandkit_models::entities::prelude::BrandModel;
use brandkit_repository::BrandRepository;
use sea_orm::ConnectionTrait;
use tracing::warn;

/// Looks up the single brand of the deployment.
///
/// The plain lookups fail soft: a storage fault is logged and reported as
/// absence. Mutations go through [`BrandResolver::resolve`], which keeps the
/// two apart.
pub struct BrandResolver;

impl BrandResolver {
    pub async fn current_brand<C>(db: &C) -> Option<BrandModel>
    where
        C: ConnectionTrait,
    {
        match BrandRepository::find_first(db).await {
            Ok(brand) => brand,
            Err(e) => {
                warn!(error = %e, "Failed to look up current brand");
                None
            }
        }
    }

    pub async fn current_brand_id<C>(db: &C) -> Option<i32>
    where
        C: ConnectionTrait,
    {
        Self::current_brand(db).await.map(|brand| brand.id)
    }

    pub async fn has_brand<C>(db: &C) -> bool
    where
        C: ConnectionTrait,
    {
        Self::current_brand(db).await.is_some()
    }

    pub async fn brand_name<C>(db: &C) -> Option<String>
    where
        C: ConnectionTrait,
    {
        Self::current_brand(db).await.map(|brand| brand.name)
    }

    /// Strict lookup: `NoBrand` when absent, `Storage` when the store failed.
    pub async fn resolve<C>(db: &C) -> ActionOutcome<BrandModel>
    where
        C: ConnectionTrait,
    {
        BrandRepository::find_first(db)
            .await?
            .ok_or(ActionError::NoBrand)
    }
}
