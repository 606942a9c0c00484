// Constants shared across the brandkit crates

/// The default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "brandkit.toml";

/// Prefix for environment overrides, e.g. `BK__WEB__PORT=8080`.
pub const ENV_PREFIX: &str = "BK";

/// Sqlite path value selecting a private in-memory database.
pub const IN_MEMORY_DB_PATH: &str = ":memory:";

pub const DATA_DIR: &str = "./data";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "brandkit.log";

/// Number of personality questions every brand answers.
pub const PERSONALITY_QUESTION_COUNT: usize = 9;

/// Number of adjectives a brand defines.
pub const ADJECTIVE_COUNT: usize = 3;

/// The personality questionnaire, indexed by `question_index`.
pub const PERSONALITY_QUESTIONS: [&str; PERSONALITY_QUESTION_COUNT] = [
    "What's your brand's primary tone of voice?",
    "How formal should your communications be?",
    "What emotions should your brand evoke in customers?",
    "How do you want customers to perceive your brand?",
    "What's your brand's personality archetype?",
    "How should your brand handle conflict or criticism?",
    "What's your preferred communication style?",
    "How does your brand demonstrate authority and expertise?",
    "What makes your brand unique in your industry?",
];

/// Look up a personality question, `None` when the index is out of range.
#[inline]
pub fn question_by_index(index: i32) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| PERSONALITY_QUESTIONS.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_by_index() {
        assert_eq!(
            question_by_index(0),
            Some("What's your brand's primary tone of voice?")
        );
        assert_eq!(
            question_by_index(8),
            Some("What makes your brand unique in your industry?")
        );
        assert_eq!(question_by_index(9), None);
        assert_eq!(question_by_index(-1), None);
    }
}
