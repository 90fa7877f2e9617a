use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_health;

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/", get(get_health))
}
