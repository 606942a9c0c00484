use super::{brand::Brand, table_initializer};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Adjectives {
    Table,
    Id,
    BrandId,
    Name,
    Description,
    SubtleExample,
    ObviousExample,
    IntenseExample,
    CreatedAt,
    UpdatedAt,
}

table_initializer!(
    Adjectives,
    name = "adjectives",
    order = super::INIT_ADJECTIVES_ORDER,
    create_table = create_adjectives_table,
    create_indexes = create_adjectives_indexes,
);

fn create_adjectives_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Adjectives::Table)
        .if_not_exists()
        .col(pk_auto(Adjectives::Id))
        .col(
            ColumnDef::new(Adjectives::BrandId)
                .integer()
                .not_null()
                .comment("FK: brand.id"),
        )
        .col(
            ColumnDef::new(Adjectives::Name)
                .string_len(50)
                .not_null()
                .comment("Adjective"),
        )
        .col(
            ColumnDef::new(Adjectives::Description)
                .text()
                .not_null()
                .comment("What the adjective means for the brand"),
        )
        .col(
            ColumnDef::new(Adjectives::SubtleExample)
                .text()
                .not_null()
                .comment("Subtle example"),
        )
        .col(
            ColumnDef::new(Adjectives::ObviousExample)
                .text()
                .not_null()
                .comment("Obvious example"),
        )
        .col(
            ColumnDef::new(Adjectives::IntenseExample)
                .text()
                .not_null()
                .comment("Intense example"),
        )
        .col(
            ColumnDef::new(Adjectives::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(Adjectives::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_adjectives_brand")
                .from(Adjectives::Table, Adjectives::BrandId)
                .to(Brand::Table, Brand::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_adjectives_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_adjectives_brand")
        .table(Adjectives::Table)
        .col(Adjectives::BrandId)
        .if_not_exists()
        .to_owned()])
}
