use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_profile, get_session};

pub fn init_session_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/me", get(get_profile))
}
