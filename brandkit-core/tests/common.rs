#![allow(dead_code)]

use brandkit_models::{
    constants::IN_MEMORY_DB_PATH,
    domain::prelude::{AdjectiveInput, NewBrand, PersonalityAnswerInput, RuleInput},
    settings::Sqlite,
};
use brandkit_storage::{init_db, Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Once,
};
use tracing::{subscriber::DefaultGuard, Event, Level, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer,
};

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("info")
            .try_init();
    });
}

/// A private, migrated in-memory database.
pub async fn setup_db() -> DatabaseConnection {
    init_tracing();
    let config = Sqlite {
        path: IN_MEMORY_DB_PATH.into(),
        ..Sqlite::default()
    };
    let db = init_db(&config).await.expect("open in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrate schema");
    db
}

/// A database that already holds the brand "Acme".
pub async fn setup_acme() -> DatabaseConnection {
    let db = setup_db().await;
    let created = brandkit_core::actions::setup_brand(&db, brand("Acme")).await;
    assert!(created.is_success(), "{:?}", created.error());
    db
}

pub fn brand(name: &str) -> NewBrand {
    NewBrand { name: name.into() }
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

pub fn adjectives(names: [&str; 3]) -> Vec<AdjectiveInput> {
    names.into_iter().map(adjective).collect()
}

pub fn rule(title: &str) -> RuleInput {
    RuleInput {
        title: title.into(),
        description: "Keep every sentence under twenty words.".into(),
        do_example: "We ship on Fridays.".into(),
        dont_example: "It is our intention to ship on Fridays.".into(),
    }
}

/// Drop tables behind the application's back to make later queries fail.
pub async fn drop_tables(db: &DatabaseConnection, tables: &[&str]) {
    for table in tables {
        db.execute_unprepared(&format!("DROP TABLE {table}"))
            .await
            .expect("drop table");
    }
}

/// Counts warn and error events seen on the current thread.
#[derive(Clone, Default)]
pub struct FaultCounter(Arc<AtomicUsize>);

impl FaultCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for FaultCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() <= Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Route this thread's events into a fresh [`FaultCounter`] until the guard drops.
pub fn count_faults() -> (FaultCounter, DefaultGuard) {
    let counter = FaultCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}
