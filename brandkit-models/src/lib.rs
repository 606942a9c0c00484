pub mod constants;
pub mod domain;
pub mod entities;
mod idens;
pub mod initializer;
pub mod settings;
pub mod validation;
pub mod web;

use async_trait::async_trait;
use brandkit_error::{init::InitContextError, storage::StorageError, BKResult};
use downcast_rs::{impl_downcast, DowncastSync};
use sea_orm::DatabaseConnection;
use settings::Settings;
use std::sync::Arc;

// Implement downcast for core system traits
impl_downcast!(sync WebServer);
impl_downcast!(sync DbManager);

/// Database manager interface.
///
/// Owns the connection pool and the schema lifecycle. Every data access
/// function receives a connection obtained from here; nothing holds a global
/// handle.
#[async_trait]
pub trait DbManager: DowncastSync + Send + Sync + 'static {
    /// Opens the pool and brings the schema up to date.
    ///
    /// # Arguments
    /// * `settings` - The application configuration settings
    ///
    /// # Returns
    /// An Arc-wrapped instance of the database manager
    async fn init(settings: &Settings) -> BKResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Retrieves a database connection from the connection pool.
    fn get_connection(&self) -> BKResult<DatabaseConnection, StorageError>;

    /// Gracefully closes all database connections.
    async fn close(&self) -> BKResult<()>;
}

/// HTTP front end.
#[async_trait]
pub trait WebServer: DowncastSync + Send + Sync + 'static {
    /// Binds the listener and starts serving in the background.
    ///
    /// # Arguments
    /// * `settings` - The application configuration settings
    /// * `db_manager` - Source of database connections for request handlers
    async fn init(
        settings: &Settings,
        db_manager: Arc<dyn DbManager>,
    ) -> BKResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Gracefully stops the web server.
    async fn stop(&self) -> BKResult<()>;
}
