use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    /// Always `"up"` while the process is able to answer.
    pub status: String,
    pub version: String,
}
