use chrono::Utc;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::config::database::DatabaseConnections;
use crate::types::dto::common::HealthResponse;

/// Liveness plus a database round trip
pub struct HealthApi {
    connections: DatabaseConnections,
}

impl HealthApi {
    pub fn new(connections: DatabaseConnections) -> Self {
        Self { connections }
    }
}

#[derive(Tags)]
enum HealthTags {
    /// Service status
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Report whether the service can reach its database
    #[oai(path = "/health", method = "get", tag = "HealthTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let database_reachable = match self.connections.directory.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Health check could not reach the database: {}", e);
                false
            }
        };

        Json(HealthResponse {
            status: if database_reachable { "healthy" } else { "degraded" }.to_string(),
            database: if database_reachable { "reachable" } else { "unreachable" }.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
