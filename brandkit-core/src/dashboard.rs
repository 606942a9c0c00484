use crate::{
    queries::{adjectives_for, personality_for, rules_for},
    resolver::BrandResolver,
};
use brandkit_models::domain::prelude::BrandDashboard;
use sea_orm::ConnectionTrait;
use tracing::instrument;

/// Brand, its three collections and the completion stats.
///
/// Returns `None` without touching the child tables when no brand exists.
/// The three reads are independent and run concurrently.
#[instrument(name = "brand-dashboard", skip_all)]
pub async fn get_brand_dashboard_data<C>(db: &C) -> Option<BrandDashboard>
where
    C: ConnectionTrait,
{
    let brand = BrandResolver::current_brand(db).await?;
    let (personality, adjectives, rules) = tokio::join!(
        personality_for(db, brand.id),
        adjectives_for(db, brand.id),
        rules_for(db, brand.id),
    );
    Some(BrandDashboard::new(brand, personality, adjectives, rules))
}

/// Both the questionnaire and the adjective set are complete.
pub async fn is_brand_setup_complete<C>(db: &C) -> bool
where
    C: ConnectionTrait,
{
    get_brand_dashboard_data(db)
        .await
        .is_some_and(|dashboard| dashboard.is_setup_complete())
}
