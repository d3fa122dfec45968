//! PostgreSQL connectivity for the taplist services
//!
//! Wraps SeaORM connection management: pool configuration from the
//! environment, connection with retry/backoff, migration running, and a
//! health check suitable for readiness probes.
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{PostgresConfig, connect_from_config_with_retry, run_migrations};
//! use core_config::FromEnv;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = connect_from_config_with_retry(config, None).await?;
//! run_migrations::<migration::Migrator>(&db, "taplist_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
