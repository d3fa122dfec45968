//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the HTTP-facing crates.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured error responses (`{ message, statusCode }`)
//! - **[`extractors`]**: custom extractors (positive-integer ids, validated JSON)
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`server`]**: server setup, OpenAPI docs, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    create_app, create_production_app, create_router, health_router, run_health_checks,
    shutdown_signal, HealthCheckFuture, HealthResponse, ShutdownCoordinator,
};

// Re-export HTTP middleware
pub use http::security_headers;

// Re-export error types
pub use errors::{AppError, ErrorResponse, MessageResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};
