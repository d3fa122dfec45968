pub use sea_orm_migration::prelude::*;

mod m20250219_000001_create_breweries;
mod m20250219_000002_create_beers;
mod m20250219_000003_create_bars;
mod m20250219_000004_create_bar_beers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250219_000001_create_breweries::Migration),
            Box::new(m20250219_000002_create_beers::Migration),
            Box::new(m20250219_000003_create_bars::Migration),
            Box::new(m20250219_000004_create_bar_beers::Migration),
        ]
    }
}
