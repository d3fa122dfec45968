use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Breweries::Table)
                    .if_not_exists()
                    .col(pk_auto(Breweries::Id))
                    .col(string(Breweries::Name))
                    .col(
                        timestamp_with_time_zone(Breweries::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Breweries::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_breweries_name")
                    .table(Breweries::Table)
                    .col(Breweries::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Breweries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Breweries {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
