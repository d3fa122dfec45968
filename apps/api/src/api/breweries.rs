use axum::Router;
use domain_beers::PgBeerRepository;
use domain_breweries::{handlers, BreweryService, PgBreweryRepository};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgBreweryRepository::new(state.db.clone());
    let beers = PgBeerRepository::new(state.db.clone());
    let service = BreweryService::new(repository, beers);
    handlers::router(service)
}
