//! Beers Domain
//!
//! Beer catalog: CRUD plus the alcohol-range listing. Follows the uniform
//! domain layout:
//!
//! ```text
//! handlers → service → repository (trait + in-memory / postgres) → entity
//! ```
//!
//! The brewery association on a beer is read-only here; it is written by
//! the brewery domain's assignment operation.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{BeerError, BeerResult};
pub use models::{AbvRangeQuery, AssignmentOutcome, Beer, CreateBeer, UpdateBeer};
pub use postgres::PgBeerRepository;
pub use repository::{BeerRepository, InMemoryBeerRepository};
pub use service::BeerService;
