//! Mutating entry points.
//!
//! Each function resolves the brand, validates its input, writes, and
//! converts the outcome into an [`ActionResult`]. Nothing here returns an
//! error across the boundary; storage faults are logged and replaced by a
//! retry hint.

use crate::resolver::BrandResolver;
use brandkit_error::{action::ActionError, ActionOutcome};
use brandkit_models::{
    domain::prelude::{
        ActionResult, AdjectiveInput, NewBrand, PersonalityAnswerInput, RuleInfo, RuleInput,
        UpdateAdjectives, UpdateBrandName, UpdatePersonality,
    },
    entities::prelude::{BrandModel, RuleModel},
    validation::{prepare, validate_adjectives, validate_personality, Normalize},
};
use brandkit_repository::{
    AdjectiveRepository, BrandRepository, PersonalityRepository, RuleRepository,
};
use sea_orm::{ConnectionTrait, TransactionTrait};
use tracing::{error, info, instrument};

const RULE_ENTITY: &str = "Rule";

/// Convert an internal outcome into the boundary shape, logging storage faults.
fn finish<T>(outcome: ActionOutcome<T>, failure: &str) -> ActionResult<T> {
    if let Err(e) = &outcome {
        if e.is_internal() {
            error!(error = %e, "{failure}");
        } else {
            info!(reason = %e, "{failure}");
        }
    }
    ActionResult::from_outcome(outcome, failure)
}

/// Unit outcomes carry no payload, so success serializes as `{"success":true}`.
fn finish_empty(outcome: ActionOutcome<()>, failure: &str) -> ActionResult<()> {
    let result = finish(outcome, failure);
    if result.is_success() {
        ActionResult::ok_empty()
    } else {
        result
    }
}

/// Create the brand. Only allowed while none exists.
#[instrument(name = "setup-brand", skip_all)]
pub async fn setup_brand<C>(db: &C, input: NewBrand) -> ActionResult<BrandModel>
where
    C: ConnectionTrait,
{
    let outcome = async {
        if BrandRepository::exists(db).await? {
            return Err(ActionError::AlreadyExists);
        }
        let input = prepare(input)?;
        let brand = BrandRepository::create(input.name, db).await?;
        info!(brand_id = brand.id, "Brand created");
        Ok::<_, ActionError>(brand)
    }
    .await;
    finish(outcome, "An unexpected error occurred")
}

#[instrument(name = "update-brand-name", skip_all)]
pub async fn update_brand_name<C>(db: &C, input: UpdateBrandName) -> ActionResult<BrandModel>
where
    C: ConnectionTrait,
{
    let outcome = async {
        let brand = BrandResolver::resolve(db).await?;
        let input = prepare(input)?;
        Ok::<_, ActionError>(BrandRepository::update_name(brand, input.name, db).await?)
    }
    .await;
    finish(outcome, "Failed to update brand name")
}

/// Replace the whole questionnaire.
#[instrument(name = "update-personality", skip_all)]
pub async fn update_personality<C>(
    db: &C,
    answers: Vec<PersonalityAnswerInput>,
) -> ActionResult<()>
where
    C: ConnectionTrait + TransactionTrait,
{
    let outcome = async {
        let brand = BrandResolver::resolve(db).await?;
        let mut update = UpdatePersonality { answers };
        update.normalize();
        validate_personality(&update.answers)?;
        let saved = PersonalityRepository::replace_all(brand.id, update.answers, db).await?;
        info!(brand_id = brand.id, saved, "Personality replaced");
        Ok::<_, ActionError>(())
    }
    .await;
    finish_empty(outcome, "Failed to update personality")
}

/// Replace the adjective set.
#[instrument(name = "update-adjectives", skip_all)]
pub async fn update_adjectives<C>(db: &C, adjectives: Vec<AdjectiveInput>) -> ActionResult<()>
where
    C: ConnectionTrait + TransactionTrait,
{
    let outcome = async {
        let brand = BrandResolver::resolve(db).await?;
        let mut update = UpdateAdjectives { adjectives };
        update.normalize();
        validate_adjectives(&update.adjectives)?;
        let saved = AdjectiveRepository::replace_all(brand.id, update.adjectives, db).await?;
        info!(brand_id = brand.id, saved, "Adjectives replaced");
        Ok::<_, ActionError>(())
    }
    .await;
    finish_empty(outcome, "Failed to update adjectives")
}

#[instrument(name = "create-rule", skip_all)]
pub async fn create_rule<C>(db: &C, input: RuleInput) -> ActionResult<RuleInfo>
where
    C: ConnectionTrait,
{
    let outcome = async {
        let brand = BrandResolver::resolve(db).await?;
        let input = prepare(input)?;
        let rule = RuleRepository::create(brand.id, input, db).await?;
        Ok::<_, ActionError>(RuleInfo::from(rule))
    }
    .await;
    finish(outcome, "Failed to create rule")
}

/// Load a rule of the current brand, `NotFound` for missing or foreign ids.
async fn owned_rule<C>(db: &C, rule_id: i32) -> ActionOutcome<RuleModel>
where
    C: ConnectionTrait,
{
    let brand = BrandResolver::resolve(db).await?;
    RuleRepository::find_owned(rule_id, brand.id, db)
        .await?
        .ok_or_else(|| ActionError::not_found(RULE_ENTITY))
}

#[instrument(name = "toggle-rule", skip(db))]
pub async fn toggle_rule<C>(db: &C, rule_id: i32, is_active: bool) -> ActionResult<RuleInfo>
where
    C: ConnectionTrait,
{
    let outcome = async {
        let rule = owned_rule(db, rule_id).await?;
        let rule = RuleRepository::set_active(rule, is_active, db).await?;
        Ok::<_, ActionError>(RuleInfo::from(rule))
    }
    .await;
    finish(outcome, "Failed to update rule status")
}

#[instrument(name = "update-rule", skip(db, input))]
pub async fn update_rule<C>(db: &C, rule_id: i32, input: RuleInput) -> ActionResult<RuleInfo>
where
    C: ConnectionTrait,
{
    let outcome = async {
        let rule = owned_rule(db, rule_id).await?;
        let input = prepare(input)?;
        let rule = RuleRepository::update(rule, input, db).await?;
        Ok::<_, ActionError>(RuleInfo::from(rule))
    }
    .await;
    finish(outcome, "Failed to update rule")
}

#[instrument(name = "delete-rule", skip(db))]
pub async fn delete_rule<C>(db: &C, rule_id: i32) -> ActionResult<()>
where
    C: ConnectionTrait,
{
    let outcome = async {
        let rule = owned_rule(db, rule_id).await?;
        RuleRepository::delete(rule, db).await?;
        Ok::<_, ActionError>(())
    }
    .await;
    finish_empty(outcome, "Failed to delete rule")
}
