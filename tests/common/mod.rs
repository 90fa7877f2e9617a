use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use quillgate::router::init_router;
use quillgate::state::AppState;
use quillgate_config::{CorsConfig, ServerConfig};
use quillgate_core::{AuthUser, Role};

pub fn setup_test_app() -> axum::Router {
    let state = AppState {
        server_config: ServerConfig::default(),
        cors_config: CorsConfig::default(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub fn generate_test_user(role: Role) -> AuthUser {
    AuthUser::new(format!("usr_{}", Uuid::new_v4()), role)
}

/// Fires a GET at the app, optionally with an authenticated-user context
/// attached the way upstream auth middleware would attach it.
pub async fn get_json(
    app: axum::Router,
    uri: &str,
    user: Option<AuthUser>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(user) = user {
        builder = builder.extension(user);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}
