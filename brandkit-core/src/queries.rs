//! Fail-soft reads scoped to the current brand.
//!
//! Missing brand and storage faults both yield an empty result; faults are
//! logged.

use crate::resolver::BrandResolver;
use brandkit_error::StorageResult;
use brandkit_models::domain::prelude::{AdjectiveInfo, PersonalityInfo, RuleInfo};
use brandkit_repository::{AdjectiveRepository, PersonalityRepository, RuleRepository};
use sea_orm::ConnectionTrait;
use tracing::error;

fn or_empty<T: Default>(result: StorageResult<T>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        error!(error = %e, "Failed to fetch {what}");
        T::default()
    })
}

/// Personality answers of a known brand, in question order.
pub async fn personality_for<C>(db: &C, brand_id: i32) -> Vec<PersonalityInfo>
where
    C: ConnectionTrait,
{
    or_empty(
        PersonalityRepository::find_by_brand(brand_id, db).await,
        "personality data",
    )
}

/// Adjectives of a known brand, oldest first.
pub async fn adjectives_for<C>(db: &C, brand_id: i32) -> Vec<AdjectiveInfo>
where
    C: ConnectionTrait,
{
    or_empty(
        AdjectiveRepository::find_by_brand(brand_id, db).await,
        "adjectives data",
    )
}

/// Rules of a known brand, newest first.
pub async fn rules_for<C>(db: &C, brand_id: i32) -> Vec<RuleInfo>
where
    C: ConnectionTrait,
{
    or_empty(RuleRepository::find_by_brand(brand_id, db).await, "rules data")
}

pub async fn get_brand_personality<C>(db: &C) -> Vec<PersonalityInfo>
where
    C: ConnectionTrait,
{
    match BrandResolver::current_brand_id(db).await {
        Some(brand_id) => personality_for(db, brand_id).await,
        None => Vec::new(),
    }
}

pub async fn get_brand_adjectives<C>(db: &C) -> Vec<AdjectiveInfo>
where
    C: ConnectionTrait,
{
    match BrandResolver::current_brand_id(db).await {
        Some(brand_id) => adjectives_for(db, brand_id).await,
        None => Vec::new(),
    }
}

pub async fn get_brand_rules<C>(db: &C) -> Vec<RuleInfo>
where
    C: ConnectionTrait,
{
    match BrandResolver::current_brand_id(db).await {
        Some(brand_id) => rules_for(db, brand_id).await,
        None => Vec::new(),
    }
}

/// A rule of the current brand; foreign and missing ids both give `None`.
pub async fn get_rule_by_id<C>(db: &C, rule_id: i32) -> Option<RuleInfo>
where
    C: ConnectionTrait,
{
    let brand_id = BrandResolver::current_brand_id(db).await?;
    or_empty(
        RuleRepository::find_owned(rule_id, brand_id, db).await,
        "rule by id",
    )
    .map(RuleInfo::from)
}
