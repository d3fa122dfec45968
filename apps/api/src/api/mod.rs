use axum::Router;

pub mod bars;
pub mod beers;
pub mod breweries;
pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Takes a reference to AppState and wires each domain's repository and
/// service; returns a stateless Router (sub-routers carry their own state).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/beer", beers::router(state))
        .nest("/brewery", breweries::router(state))
        .nest("/bar", bars::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health
/// checks against the database.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
