//! Bars Domain
//!
//! Bar CRUD plus the bar ↔ beer many-to-many join. A join row records that
//! a bar serves a beer; assignment is an existence-checked insert whose
//! composite primary key guards against concurrent duplicates.
//!
//! Depends on `domain_beers` for the beer model, entity and repository
//! trait; the service composes both repositories to verify assignment
//! parents.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{BarError, BarResult};
pub use models::{AssignBeerToBar, Bar, BarWithBeers, CreateBar, UpdateBar};
pub use postgres::PgBarRepository;
pub use repository::{BarRepository, InMemoryBarRepository};
pub use service::BarService;
