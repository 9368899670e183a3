use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    /// `healthy`, or `degraded` when the database cannot be reached
    pub status: String,

    /// `reachable` or `unreachable`
    pub database: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Plain acknowledgement carrying only a message
#[derive(Object, Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MessageResponse {
    /// Human-readable result message
    pub message: String,
}
