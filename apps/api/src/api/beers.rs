use axum::Router;
use domain_beers::{handlers, BeerService, PgBeerRepository};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgBeerRepository::new(state.db.clone());
    let service = BeerService::new(repository);
    handlers::router(service)
}
