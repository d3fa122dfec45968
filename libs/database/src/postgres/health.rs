use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Check PostgreSQL database health.
///
/// Executes `SELECT 1` to verify the connection is alive; intended for
/// readiness probes.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("PostgreSQL health check failed: {}", e))
    })?;

    Ok(())
}

/// Health check result with timing, for detailed status reporting.
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthStatus {
    /// Run [`check_health`] and capture the outcome with response time.
    pub async fn measure(db: &DatabaseConnection) -> Self {
        let start = std::time::Instant::now();

        match check_health(db).await {
            Ok(_) => Self {
                healthy: true,
                message: None,
                response_time_ms: start.elapsed().as_millis() as u64,
            },
            Err(e) => Self {
                healthy: false,
                message: Some(e.to_string()),
                response_time_ms: start.elapsed().as_millis() as u64,
            },
        }
    }
}
