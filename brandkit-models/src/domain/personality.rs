use crate::{
    constants::{PERSONALITY_QUESTIONS, PERSONALITY_QUESTION_COUNT},
    entities::prelude::PersonalityModel,
};
use chrono::{DateTime, Utc};
use sea_orm::{DerivePartialModel, FromQueryResult, ModelTrait};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityAnswerInput {
    #[validate(range(min = 0, max = 8, message = "Question index must be between 0 and 8"))]
    pub question_index: i32,
    #[validate(length(min = 1))]
    pub answer: String,
}

/// Full questionnaire submission; replaces every stored answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonality {
    pub answers: Vec<PersonalityAnswerInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, DerivePartialModel)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::PersonalityModel as ModelTrait>::Entity")]
pub struct PersonalityInfo {
    pub id: i32,
    pub question_index: i32,
    pub answer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PersonalityModel> for PersonalityInfo {
    fn from(model: PersonalityModel) -> Self {
        Self {
            id: model.id,
            question_index: model.question_index,
            answer: model.answer,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// One questionnaire row as shown to the brand owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityQuestion {
    pub question_index: i32,
    pub question: String,
    pub answer: String,
    pub is_answered: bool,
}

/// Pair every question with its stored answer.
///
/// Always yields all nine questions in order; unanswered ones carry an
/// empty answer.
pub fn map_personality_with_questions(answers: &[PersonalityInfo]) -> Vec<PersonalityQuestion> {
    PERSONALITY_QUESTIONS
        .iter()
        .enumerate()
        .take(PERSONALITY_QUESTION_COUNT)
        .map(|(index, question)| {
            let index = index as i32;
            let answer = answers
                .iter()
                .find(|a| a.question_index == index)
                .map(|a| a.answer.clone())
                .unwrap_or_default();
            PersonalityQuestion {
                question_index: index,
                question: (*question).to_string(),
                is_answered: !answer.is_empty(),
                answer,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(question_index: i32, answer: &str) -> PersonalityInfo {
        PersonalityInfo {
            id: question_index + 1,
            question_index,
            answer: answer.into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_map_personality_with_questions() {
        let mapped = map_personality_with_questions(&[info(2, "Warm"), info(0, "Playful")]);
        assert_eq!(mapped.len(), 9);
        assert_eq!(mapped[0].answer, "Playful");
        assert!(mapped[0].is_answered);
        assert!(!mapped[1].is_answered);
        assert_eq!(mapped[1].answer, "");
        assert_eq!(mapped[2].answer, "Warm");
        assert_eq!(mapped[8].question_index, 8);
        assert_eq!(
            mapped[8].question,
            "What makes your brand unique in your industry?"
        );
    }
}
