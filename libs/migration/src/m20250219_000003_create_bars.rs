use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bars::Table)
                    .if_not_exists()
                    .col(pk_auto(Bars::Id))
                    .col(string(Bars::Name))
                    .col(text(Bars::Address))
                    .col(
                        timestamp_with_time_zone(Bars::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Bars::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bars_name")
                    .table(Bars::Table)
                    .col(Bars::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Bars {
    Table,
    Id,
    Name,
    Address,
    CreatedAt,
    UpdatedAt,
}
