//! Breweries Domain
//!
//! Brewery CRUD plus the brewery → beer linkage. A beer points at its
//! producing brewery through a nullable reference on the beer row;
//! assignment sets that reference and deleting a brewery clears it.
//!
//! Depends on `domain_beers` for the beer model and repository trait; the
//! service composes both repositories to verify assignment parents.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{BreweryError, BreweryResult};
pub use models::{
    AssignBeerToBrewery, Brewery, BreweryWithBeers, CreateBrewery, UpdateBrewery,
};
pub use postgres::PgBreweryRepository;
pub use repository::{BreweryRepository, InMemoryBreweryRepository};
pub use service::BreweryService;
