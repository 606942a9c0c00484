use super::table_initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Brand {
    Table,
    Id,
    Name,
    CreatedAt,
}

table_initializer!(
    Brand,
    name = "brand",
    order = super::INIT_BRAND_ORDER,
    create_table = create_brand_table,
    create_indexes = create_brand_indexes,
);

fn create_brand_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Brand::Table)
        .if_not_exists()
        .col(pk_auto(Brand::Id))
        .col(
            ColumnDef::new(Brand::Name)
                .string_len(100)
                .not_null()
                .comment("Brand name"),
        )
        .col(
            ColumnDef::new(Brand::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .to_owned()
}

fn create_brand_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    None
}
