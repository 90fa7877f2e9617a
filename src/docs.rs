use utoipa::OpenApi;

use quillgate_core::{ApiResponse, AuthUser, Role};

use crate::modules::health::model::HealthStatus;
use crate::modules::session::model::SessionState;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::get_health,
        crate::modules::session::controller::get_session,
        crate::modules::session::controller::get_profile,
    ),
    components(
        schemas(
            HealthStatus,
            SessionState,
            AuthUser,
            Role,
            ApiResponse<HealthStatus>,
            ApiResponse<SessionState>,
            ApiResponse<AuthUser>,
        )
    ),
    tags(
        (name = "Health", description = "Service liveness endpoints"),
        (name = "Session", description = "Session inspection endpoints")
    )
)]
pub struct ApiDoc;
