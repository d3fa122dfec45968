use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250219_000002_create_beers::Beers;
use crate::m20250219_000003_create_bars::Bars;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Join table: a row records that a bar serves a beer. The composite
        // primary key is the uniqueness guard for concurrent assignments.
        manager
            .create_table(
                Table::create()
                    .table(BarBeers::Table)
                    .if_not_exists()
                    .col(integer(BarBeers::BarId))
                    .col(integer(BarBeers::BeerId))
                    .primary_key(
                        Index::create()
                            .name("pk_bar_beers")
                            .col(BarBeers::BarId)
                            .col(BarBeers::BeerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bar_beers_bar_id")
                            .from(BarBeers::Table, BarBeers::BarId)
                            .to(Bars::Table, Bars::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bar_beers_beer_id")
                            .from(BarBeers::Table, BarBeers::BeerId)
                            .to(Beers::Table, Beers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The primary key covers bar_id lookups; beer_id needs its own index
        manager
            .create_index(
                Index::create()
                    .name("idx_bar_beers_beer_id")
                    .table(BarBeers::Table)
                    .col(BarBeers::BeerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BarBeers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BarBeers {
    Table,
    BarId,
    BeerId,
}
