#![allow(dead_code)]

use brandkit_models::{
    constants::IN_MEMORY_DB_PATH,
    domain::prelude::{AdjectiveInput, PersonalityAnswerInput, RuleInput},
    settings::Sqlite,
};
use brandkit_storage::{init_db, Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

/// A private, migrated in-memory database.
pub async fn setup_db() -> DatabaseConnection {
    let config = Sqlite {
        path: IN_MEMORY_DB_PATH.into(),
        ..Sqlite::default()
    };
    let db = init_db(&config).await.expect("open in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrate schema");
    db
}

pub fn answers(prefix: &str) -> Vec<PersonalityAnswerInput> {
    (0..9)
        .map(|i| PersonalityAnswerInput {
            question_index: i,
            answer: format!("{prefix} {i}"),
        })
        .collect()
}

pub fn adjective(name: &str) -> AdjectiveInput {
    AdjectiveInput {
        name: name.into(),
        description: format!("{name} in every message"),
        subtle_example: format!("a hint of {name}"),
        obvious_example: format!("clearly {name}"),
        intense_example: format!("extremely {name}"),
    }
}

pub fn rule(title: &str) -> RuleInput {
    RuleInput {
        title: title.into(),
        description: "Keep every sentence under twenty words.".into(),
        do_example: "We ship on Fridays.".into(),
        dont_example: "It is our intention to ship on Fridays.".into(),
    }
}
