use super::{brand::Brand, table_initializer};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Personality {
    Table,
    Id,
    BrandId,
    QuestionIndex,
    Answer,
    CreatedAt,
    UpdatedAt,
}

table_initializer!(
    Personality,
    name = "personality",
    order = super::INIT_PERSONALITY_ORDER,
    create_table = create_personality_table,
    create_indexes = create_personality_indexes,
);

fn create_personality_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Personality::Table)
        .if_not_exists()
        .col(pk_auto(Personality::Id))
        .col(
            ColumnDef::new(Personality::BrandId)
                .integer()
                .not_null()
                .comment("FK: brand.id"),
        )
        .col(
            ColumnDef::new(Personality::QuestionIndex)
                .integer()
                .not_null()
                .comment("Question index (0-8)"),
        )
        .col(
            ColumnDef::new(Personality::Answer)
                .text()
                .not_null()
                .comment("Answer"),
        )
        .col(
            ColumnDef::new(Personality::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(Personality::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_personality_brand")
                .from(Personality::Table, Personality::BrandId)
                .to(Brand::Table, Brand::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_personality_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("uq_personality_brand_question")
        .table(Personality::Table)
        .col(Personality::BrandId)
        .col(Personality::QuestionIndex)
        .unique()
        .if_not_exists()
        .to_owned()])
}
