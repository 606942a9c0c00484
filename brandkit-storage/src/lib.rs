mod migration;
mod sql;

use async_trait::async_trait;
use brandkit_error::{init::InitContextError, storage::StorageError, BKResult};
use brandkit_models::{settings::Settings, DbManager};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};

pub use migration::{Migrator, MigratorTrait};
pub use sql::sqlite::init_db;

/// Database manager backed by a SQLite pool.
pub struct BKDbManager {
    db_conn: Option<DatabaseConnection>,
}

impl BKDbManager {
    /// Wrap an already migrated connection.
    pub fn from_connection(db_conn: DatabaseConnection) -> Arc<Self> {
        Arc::new(BKDbManager {
            db_conn: Some(db_conn),
        })
    }
}

#[async_trait]
impl DbManager for BKDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    async fn init(settings: &Settings) -> BKResult<Arc<Self>, InitContextError> {
        let db_conn = {
            let db = init_db(&settings.db.sqlite).await.map_err(|e| {
                InitContextError::Primitive(format!("Failed to init SQLite database: {e}"))
            })?;

            // Run database migrations
            Migrator::up(&db, None).await.map_err(|e| {
                InitContextError::Primitive(format!("Failed to migrate SQLite database: {e}"))
            })?;

            db
        };

        info!("Database manager initialized successfully");
        Ok(BKDbManager::from_connection(db_conn))
    }

    #[inline]
    fn get_connection(&self) -> BKResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    async fn close(&self) -> BKResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed successfully");
        Ok(())
    }
}
