use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250219_000001_create_breweries::Breweries;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beers::Table)
                    .if_not_exists()
                    .col(pk_auto(Beers::Id))
                    .col(string(Beers::Name))
                    .col(double(Beers::AlcoholByVolume))
                    .col(integer_null(Beers::BreweryId))
                    .col(
                        timestamp_with_time_zone(Beers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Beers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_beers_brewery_id")
                            .from(Beers::Table, Beers::BreweryId)
                            .to(Breweries::Table, Breweries::Id)
                            // Deleting a brewery orphans its beers, it does
                            // not delete them
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_beers_brewery_id")
                    .table(Beers::Table)
                    .col(Beers::BreweryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_beers_alcohol_by_volume")
                    .table(Beers::Table)
                    .col(Beers::AlcoholByVolume)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Beers {
    Table,
    Id,
    Name,
    AlcoholByVolume,
    BreweryId,
    CreatedAt,
    UpdatedAt,
}
