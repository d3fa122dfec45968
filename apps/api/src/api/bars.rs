use axum::Router;
use domain_bars::{handlers, BarService, PgBarRepository};
use domain_beers::PgBeerRepository;

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgBarRepository::new(state.db.clone());
    let beers = PgBeerRepository::new(state.db.clone());
    let service = BarService::new(repository, beers);
    handlers::router(service)
}
