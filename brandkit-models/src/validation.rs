//! Input validation for brand mutations.
//!
//! Inputs are trimmed once through [`Normalize`], then checked with the
//! `validator` derives on the payload types. Only the first failing rule is
//! reported, walking fields in declaration order so the message is stable.

use crate::{
    constants::{ADJECTIVE_COUNT, PERSONALITY_QUESTION_COUNT},
    domain::prelude::{
        AdjectiveInput, NewBrand, PersonalityAnswerInput, RuleInput, UpdateAdjectives,
        UpdateBrandName, UpdatePersonality,
    },
};
use brandkit_error::action::ActionError;
use std::collections::HashSet;
use validator::{Validate, ValidationError, ValidationErrors};

/// Stable cleanup applied before validation.
pub trait Normalize {
    fn normalize(&mut self);
}

/// User-facing messages for one validated field.
pub struct FieldRule {
    pub field: &'static str,
    /// Wire name, accepted in case the validator reports the serialized key.
    pub camel: &'static str,
    pub required: &'static str,
    /// Below the minimum length; falls back to `required` when absent.
    pub too_short: Option<&'static str>,
    pub too_long: &'static str,
}

/// Field table of a payload, in declaration order.
pub trait FieldMessages {
    const FIELDS: &'static [FieldRule];
}

const fn rule(
    field: &'static str,
    camel: &'static str,
    required: &'static str,
    too_short: Option<&'static str>,
    too_long: &'static str,
) -> FieldRule {
    FieldRule {
        field,
        camel,
        required,
        too_short,
        too_long,
    }
}

const BRAND_NAME_FIELDS: &[FieldRule] = &[rule(
    "name",
    "name",
    "Brand name is required",
    None,
    "Brand name must be less than 100 characters",
)];

impl FieldMessages for NewBrand {
    const FIELDS: &'static [FieldRule] = BRAND_NAME_FIELDS;
}

impl FieldMessages for UpdateBrandName {
    const FIELDS: &'static [FieldRule] = BRAND_NAME_FIELDS;
}

impl FieldMessages for PersonalityAnswerInput {
    const FIELDS: &'static [FieldRule] = &[
        rule(
            "question_index",
            "questionIndex",
            "Question index must be between 0 and 8",
            None,
            "Question index must be between 0 and 8",
        ),
        rule("answer", "answer", "Answer is required", None, "Answer is too long"),
    ];
}

impl FieldMessages for AdjectiveInput {
    const FIELDS: &'static [FieldRule] = &[
        rule(
            "name",
            "name",
            "Adjective is required",
            None,
            "Adjective must be less than 50 characters",
        ),
        rule(
            "description",
            "description",
            "Description is required",
            None,
            "Description must be less than 255 characters",
        ),
        rule(
            "subtle_example",
            "subtleExample",
            "Subtle example is required",
            None,
            "Subtle example must be less than 255 characters",
        ),
        rule(
            "obvious_example",
            "obviousExample",
            "Obvious example is required",
            None,
            "Obvious example must be less than 255 characters",
        ),
        rule(
            "intense_example",
            "intenseExample",
            "Intense example is required",
            None,
            "Intense example must be less than 255 characters",
        ),
    ];
}

impl FieldMessages for RuleInput {
    const FIELDS: &'static [FieldRule] = &[
        rule(
            "title",
            "title",
            "Rule title is required",
            None,
            "Title must be less than 100 characters",
        ),
        rule(
            "description",
            "description",
            "Description must be at least 10 characters",
            Some("Description must be at least 10 characters"),
            "Description must be less than 500 characters",
        ),
        rule(
            "do_example",
            "doExample",
            "Do example is required",
            Some("Do example must be at least 5 characters"),
            "Do example must be less than 255 characters",
        ),
        rule(
            "dont_example",
            "dontExample",
            "Don't example is required",
            Some("Don't example must be at least 5 characters"),
            "Don't example must be less than 255 characters",
        ),
    ];
}

impl Normalize for String {
    #[inline]
    fn normalize(&mut self) {
        let trimmed = self.trim();
        if trimmed.len() != self.len() {
            *self = trimmed.to_string();
        }
    }
}

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(&mut self) {
        self.iter_mut().for_each(Normalize::normalize);
    }
}

impl Normalize for NewBrand {
    fn normalize(&mut self) {
        self.name.normalize();
    }
}

impl Normalize for UpdateBrandName {
    fn normalize(&mut self) {
        self.name.normalize();
    }
}

impl Normalize for PersonalityAnswerInput {
    fn normalize(&mut self) {
        self.answer.normalize();
    }
}

impl Normalize for UpdatePersonality {
    fn normalize(&mut self) {
        self.answers.normalize();
    }
}

impl Normalize for AdjectiveInput {
    fn normalize(&mut self) {
        self.name.normalize();
        self.description.normalize();
        self.subtle_example.normalize();
        self.obvious_example.normalize();
        self.intense_example.normalize();
    }
}

impl Normalize for UpdateAdjectives {
    fn normalize(&mut self) {
        self.adjectives.normalize();
    }
}

impl Normalize for RuleInput {
    fn normalize(&mut self) {
        self.title.normalize();
        self.description.normalize();
        self.do_example.normalize();
        self.dont_example.normalize();
    }
}

fn render(field: &FieldRule, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }
    let len = error
        .params
        .get("value")
        .and_then(|v| v.as_str())
        .map(|s| s.chars().count())
        .unwrap_or(0);
    if len == 0 {
        return field.required.to_string();
    }
    match error.params.get("min").and_then(|v| v.as_u64()) {
        Some(min) if (len as u64) < min => field.too_short.unwrap_or(field.required).to_string(),
        _ => field.too_long.to_string(),
    }
}

/// First failing rule, in field declaration order.
pub fn first_message(errors: &ValidationErrors, fields: &[FieldRule]) -> String {
    let field_errors = errors.field_errors();
    for field in fields {
        let hit = field_errors.iter().find(|(key, _)| {
            let key = key.to_string();
            key == field.field || key == field.camel
        });
        if let Some(error) = hit.and_then(|(_, errs)| errs.first()) {
            return render(field, error);
        }
    }
    "Invalid input".to_string()
}

/// Check a single payload, reporting the first failure.
pub fn validate_input<T: Validate + FieldMessages>(input: &T) -> Result<(), ActionError> {
    input
        .validate()
        .map_err(|errors| ActionError::validation(first_message(&errors, T::FIELDS)))
}

/// Normalize, then validate.
pub fn prepare<T: Normalize + Validate + FieldMessages>(mut input: T) -> Result<T, ActionError> {
    input.normalize();
    validate_input(&input)?;
    Ok(input)
}

/// The answer set must cover every question exactly once.
pub fn validate_personality(answers: &[PersonalityAnswerInput]) -> Result<(), ActionError> {
    if answers.len() != PERSONALITY_QUESTION_COUNT {
        return Err(ActionError::validation("Must have exactly 9 answers"));
    }
    for answer in answers {
        validate_input(answer)?;
    }
    let indexes: HashSet<i32> = answers.iter().map(|a| a.question_index).collect();
    let in_range = indexes
        .iter()
        .all(|i| (0..PERSONALITY_QUESTION_COUNT as i32).contains(i));
    if indexes.len() != PERSONALITY_QUESTION_COUNT || !in_range {
        return Err(ActionError::validation(
            "Must have answers for all 9 questions (indexes 0-8)",
        ));
    }
    Ok(())
}

pub fn validate_adjectives(adjectives: &[AdjectiveInput]) -> Result<(), ActionError> {
    if adjectives.len() != ADJECTIVE_COUNT {
        return Err(ActionError::validation("Must have exactly 3 adjectives"));
    }
    adjectives.iter().try_for_each(validate_input)
}
