use brandkit_models::initializer::initializers;
use sea_orm_migration::prelude::*;
use tracing::{info, instrument};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[instrument(name = "migrate-up", skip_all)]
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_tables(manager).await?;
        create_indexes(manager).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // children first, the brand table last
        for initializer in initializers().into_iter().rev() {
            manager
                .drop_table(initializer.to_drop_table_stmt(manager.get_database_backend()))
                .await?;
        }
        Ok(())
    }
}

async fn create_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    let backend = manager.get_database_backend();
    for initializer in initializers() {
        manager
            .create_table(initializer.to_create_table_stmt(backend))
            .await?;
        info!(table = initializer.name(), "table ready");
    }
    Ok(())
}

async fn create_indexes(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    for initializer in initializers() {
        for stmt in initializer
            .to_create_indexes_stmt(manager.get_database_backend())
            .unwrap_or_default()
        {
            manager.create_index(stmt).await?;
        }
    }
    Ok(())
}
