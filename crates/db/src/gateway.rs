//! Postgres-backed implementation of the core's log gateway.

use async_trait::async_trait;
use sentinel_core::gateway::{GatewayError, LogGateway, LogRecord};
use sentinel_core::types::DbId;

use crate::repositories::LogRepo;
use crate::DbPool;

/// [`LogGateway`] over a connection pool. Cheap to clone.
#[derive(Clone)]
pub struct PgLogGateway {
    pool: DbPool,
}

impl PgLogGateway {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogGateway for PgLogGateway {
    async fn insert_log(&self, content: &str) -> Result<LogRecord, GatewayError> {
        let row = LogRepo::insert(&self.pool, content)
            .await
            .map_err(to_gateway_error)?;
        Ok(row.into())
    }

    async fn list_recent_logs(&self, limit: i64) -> Result<Vec<LogRecord>, GatewayError> {
        let rows = LogRepo::list_recent(&self.pool, limit)
            .await
            .map_err(to_gateway_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_log(&self, id: DbId) -> Result<Option<LogRecord>, GatewayError> {
        let row = LogRepo::delete(&self.pool, id)
            .await
            .map_err(to_gateway_error)?;
        Ok(row.map(Into::into))
    }

    async fn ping(&self) -> Result<(), GatewayError> {
        crate::health_check(&self.pool)
            .await
            .map_err(to_gateway_error)
    }
}

/// Flatten a sqlx error into the gateway's opaque message. The driver's
/// Display text carries no credentials or connection parameters.
fn to_gateway_error(err: sqlx::Error) -> GatewayError {
    tracing::error!(error = %err, "Log gateway query failed");
    GatewayError(err.to_string())
}
