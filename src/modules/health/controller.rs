use tracing::instrument;

use quillgate_core::ApiResponse;

use crate::modules::health::model::HealthStatus;

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = ApiResponse<HealthStatus>)
    ),
    tag = "Health"
)]
#[instrument]
pub async fn get_health() -> ApiResponse<HealthStatus> {
    ApiResponse::ok(HealthStatus {
        status: "up".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
