use super::{brand::Brand, table_initializer};
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Rules {
    Table,
    Id,
    BrandId,
    Title,
    Description,
    DoExample,
    DontExample,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

table_initializer!(
    Rules,
    name = "rules",
    order = super::INIT_RULES_ORDER,
    create_table = create_rules_table,
    create_indexes = create_rules_indexes,
);

fn create_rules_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Rules::Table)
        .if_not_exists()
        .col(pk_auto(Rules::Id))
        .col(
            ColumnDef::new(Rules::BrandId)
                .integer()
                .not_null()
                .comment("FK: brand.id"),
        )
        .col(
            ColumnDef::new(Rules::Title)
                .string_len(100)
                .not_null()
                .comment("Rule title"),
        )
        .col(
            ColumnDef::new(Rules::Description)
                .text()
                .not_null()
                .comment("Rule description"),
        )
        .col(
            ColumnDef::new(Rules::DoExample)
                .text()
                .not_null()
                .comment("Do example"),
        )
        .col(
            ColumnDef::new(Rules::DontExample)
                .text()
                .not_null()
                .comment("Don't example"),
        )
        .col(
            ColumnDef::new(Rules::IsActive)
                .boolean()
                .not_null()
                .default(true)
                .comment("Active flag"),
        )
        .col(
            ColumnDef::new(Rules::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(Rules::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_rules_brand")
                .from(Rules::Table, Rules::BrandId)
                .to(Brand::Table, Brand::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn create_rules_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_rules_brand")
        .table(Rules::Table)
        .col(Rules::BrandId)
        .if_not_exists()
        .to_owned()])
}
