use crate::idens;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    DatabaseBackend,
};

/// Schema contribution of a single table.
///
/// The migrator walks [`initializers`] in `order()` and applies the table,
/// then its indexes. Tables referenced by foreign keys must sort first.
pub trait BKInitializer: Send + Sync {
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;
}

pub fn initializers() -> Vec<Box<dyn BKInitializer>> {
    let mut initializers: Vec<Box<dyn BKInitializer>> = vec![
        Box::new(idens::rules::Rules::Table),
        Box::new(idens::adjectives::Adjectives::Table),
        Box::new(idens::personality::Personality::Table),
        Box::new(idens::brand::Brand::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}
