//! Application state management.
//!
//! The shared state handed to request handlers: configuration plus the
//! PostgreSQL connection pool. Cloning is cheap (pool handles are Arcs).

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
