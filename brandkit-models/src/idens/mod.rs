pub mod adjectives;
pub mod brand;
pub mod personality;
pub mod rules;

const INIT_BRAND_ORDER: i32 = 0;
const INIT_PERSONALITY_ORDER: i32 = INIT_BRAND_ORDER + 1;
const INIT_ADJECTIVES_ORDER: i32 = INIT_PERSONALITY_ORDER + 1;
const INIT_RULES_ORDER: i32 = INIT_ADJECTIVES_ORDER + 1;

/// Implements [`BKInitializer`](crate::initializer::BKInitializer) for an iden
/// enum whose `Table` variant names the table.
macro_rules! table_initializer {
    (
        $iden:ident,
        name = $name:literal,
        order = $order:expr,
        create_table = $create_table:path,
        create_indexes = $create_indexes:path $(,)?
    ) => {
        impl $crate::initializer::BKInitializer for $iden {
            fn order(&self) -> i32 {
                $order
            }

            fn name(&self) -> &str {
                $name
            }

            fn to_create_table_stmt(
                &self,
                backend: sea_orm::DatabaseBackend,
            ) -> sea_orm::sea_query::TableCreateStatement {
                $create_table(backend)
            }

            fn to_drop_table_stmt(
                &self,
                _: sea_orm::DatabaseBackend,
            ) -> sea_orm::sea_query::TableDropStatement {
                sea_orm::sea_query::Table::drop()
                    .table($iden::Table)
                    .if_exists()
                    .to_owned()
            }

            fn to_create_indexes_stmt(
                &self,
                backend: sea_orm::DatabaseBackend,
            ) -> Option<Vec<sea_orm::sea_query::IndexCreateStatement>> {
                $create_indexes(backend)
            }
        }
    };
}

pub(crate) use table_initializer;
