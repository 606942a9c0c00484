pub use crate::domain::{
    adjective::{AdjectiveInfo, AdjectiveInput, UpdateAdjectives},
    brand::{NewBrand, UpdateBrandName},
    common::ActionResult,
    dashboard::{BrandDashboard, DashboardStats},
    personality::{
        map_personality_with_questions, PersonalityAnswerInput, PersonalityInfo,
        PersonalityQuestion, UpdatePersonality,
    },
    rule::{RuleInfo, RuleInput, ToggleRule},
};
