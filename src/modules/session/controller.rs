use tracing::instrument;

use quillgate_core::{ApiResponse, AppError, AuthUser};

use crate::middleware::auth::CurrentUser;
use crate::modules::session::model::SessionState;

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Session state for the current request", body = ApiResponse<SessionState>)
    ),
    tag = "Session"
)]
#[instrument(skip(user))]
pub async fn get_session(user: Option<CurrentUser>) -> ApiResponse<SessionState> {
    let state = match user {
        Some(CurrentUser(user)) => SessionState::authenticated(user),
        None => SessionState::anonymous(),
    };

    ApiResponse::ok(state)
}

#[utoipa::path(
    get,
    path = "/api/session/me",
    responses(
        (status = 200, description = "The authenticated user's context", body = ApiResponse<AuthUser>),
        (status = 401, description = "No authenticated user attached to the request")
    ),
    tag = "Session"
)]
#[instrument(skip(user))]
pub async fn get_profile(user: CurrentUser) -> Result<ApiResponse<AuthUser>, AppError> {
    Ok(ApiResponse::ok(user.0))
}
