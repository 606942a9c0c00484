use super::{adjective::AdjectiveInfo, personality::PersonalityInfo, rule::RuleInfo};
use crate::{
    constants::{ADJECTIVE_COUNT, PERSONALITY_QUESTION_COUNT},
    entities::prelude::BrandModel,
};
use serde::{Deserialize, Serialize};

/// Completion counters derived from the stored rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Stored answers, 0..=9.
    pub personality_completion: usize,
    /// Stored adjectives, 0..=3.
    pub adjectives_completion: usize,
    pub total_rules: usize,
    pub active_rules_count: usize,
    pub is_personality_complete: bool,
    pub are_adjectives_complete: bool,
}

impl DashboardStats {
    pub fn compute(
        personality: &[PersonalityInfo],
        adjectives: &[AdjectiveInfo],
        rules: &[RuleInfo],
    ) -> Self {
        let personality_completion = personality.len();
        let adjectives_completion = adjectives.len();
        Self {
            personality_completion,
            adjectives_completion,
            total_rules: rules.len(),
            active_rules_count: rules.iter().filter(|r| r.is_active).count(),
            is_personality_complete: personality_completion == PERSONALITY_QUESTION_COUNT,
            are_adjectives_complete: adjectives_completion == ADJECTIVE_COUNT,
        }
    }
}

/// Everything the dashboard shows, assembled from one brand lookup and
/// three independent reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDashboard {
    pub brand: BrandModel,
    pub personality: Vec<PersonalityInfo>,
    pub adjectives: Vec<AdjectiveInfo>,
    pub rules: Vec<RuleInfo>,
    pub stats: DashboardStats,
}

impl BrandDashboard {
    pub fn new(
        brand: BrandModel,
        personality: Vec<PersonalityInfo>,
        adjectives: Vec<AdjectiveInfo>,
        rules: Vec<RuleInfo>,
    ) -> Self {
        let stats = DashboardStats::compute(&personality, &adjectives, &rules);
        Self {
            brand,
            personality,
            adjectives,
            rules,
            stats,
        }
    }

    /// Both fixed-size sets are fully populated.
    #[inline]
    pub fn is_setup_complete(&self) -> bool {
        self.stats.is_personality_complete && self.stats.are_adjectives_complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn rule(id: i32, is_active: bool) -> RuleInfo {
        RuleInfo {
            id,
            title: format!("Rule {id}"),
            description: "Keep sentences short".into(),
            do_example: "We ship.".into(),
            dont_example: "We are in the process of shipping.".into(),
            is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_stats_count_active_rules() {
        let stats = DashboardStats::compute(&[], &[], &[rule(1, true), rule(2, false)]);
        assert_eq!(stats.total_rules, 2);
        assert_eq!(stats.active_rules_count, 1);
        assert_eq!(stats.personality_completion, 0);
        assert!(!stats.is_personality_complete);
        assert!(!stats.are_adjectives_complete);
    }
}
