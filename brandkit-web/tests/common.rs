#![allow(dead_code)]

use brandkit_models::{constants::IN_MEMORY_DB_PATH, settings::Sqlite};
use brandkit_storage::{init_db, Migrator, MigratorTrait};
use brandkit_web::AppState;
use serde_json::{json, Value};

pub const PREFIX: &str = "/api";

pub async fn state() -> AppState {
    let config = Sqlite {
        path: IN_MEMORY_DB_PATH.into(),
        ..Sqlite::default()
    };
    let db = init_db(&config).await.expect("open in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrate schema");
    AppState::new(db)
}

pub fn answers() -> Value {
    let answers: Vec<Value> = (0..9)
        .map(|i| json!({ "questionIndex": i, "answer": format!("answer {i}") }))
        .collect();
    json!({ "answers": answers })
}

pub fn adjectives(names: [&str; 3]) -> Value {
    let adjectives: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "description": format!("{name} in every message"),
                "subtleExample": "a hint",
                "obviousExample": "clearly so",
                "intenseExample": "all the way",
            })
        })
        .collect();
    json!({ "adjectives": adjectives })
}

pub fn rule(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Prefer short sentences.",
        "doExample": "We ship.",
        "dontExample": "We are shipping soon-ish.",
    })
}
