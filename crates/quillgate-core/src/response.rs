//! The standardized success envelope for API responses.
//!
//! Every successful endpoint returns the same three-field JSON shape:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "OK",
//!   "data": { ... }
//! }
//! ```
//!
//! `message` defaults to `"OK"` and the HTTP status to `200`; both can be
//! overridden independently through the builder methods.
//!
//! # Example
//!
//! ```ignore
//! use quillgate_core::ApiResponse;
//! use axum::http::StatusCode;
//!
//! async fn create_widget() -> ApiResponse<Widget> {
//!     let widget = Widget::default();
//!     ApiResponse::ok(widget)
//!         .with_message("Created")
//!         .with_status(StatusCode::CREATED)
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope wrapping a serializable payload.
///
/// The envelope is constructed and immediately serialized into a single
/// response; it carries no identity and is not mutated after being sent.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true`; failures are reported through `AppError` instead.
    pub success: bool,
    /// Human-readable summary of the outcome.
    pub message: String,
    /// Caller-supplied payload of arbitrary shape.
    pub data: T,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps `data` with the default message (`"OK"`) and status (`200`).
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: "OK".to_string(),
            data,
            status: StatusCode::OK,
        }
    }

    /// Overrides the human-readable message, keeping everything else.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Overrides the HTTP status code the envelope is sent with.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Status code the envelope will be sent with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let response = ApiResponse::ok(json!({"id": 1}));

        assert!(response.success);
        assert_eq!(response.message, "OK");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_overrides_are_independent() {
        let message_only = ApiResponse::ok(json!(null)).with_message("Created");
        assert_eq!(message_only.message, "Created");
        assert_eq!(message_only.status(), StatusCode::OK);

        let status_only = ApiResponse::ok(json!(null)).with_status(StatusCode::ACCEPTED);
        assert_eq!(status_only.message, "OK");
        assert_eq!(status_only.status(), StatusCode::ACCEPTED);

        let both = ApiResponse::ok(json!(null))
            .with_message("Created")
            .with_status(StatusCode::CREATED);
        assert_eq!(both.message, "Created");
        assert_eq!(both.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_chaining_preserves_payload() {
        let response = ApiResponse::ok(vec![1, 2, 3])
            .with_status(StatusCode::CREATED)
            .with_message("Created")
            .with_message("Updated");

        assert_eq!(response.data, vec![1, 2, 3]);
        assert_eq!(response.message, "Updated");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_serializes_exactly_three_fields() {
        let value = serde_json::to_value(ApiResponse::ok(json!({"id": 1}))).unwrap();

        assert_eq!(
            value,
            json!({"success": true, "message": "OK", "data": {"id": 1}})
        );
    }

    #[tokio::test]
    async fn test_into_response_defaults() {
        let response = ApiResponse::ok(json!({"id": 1})).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "message": "OK", "data": {"id": 1}})
        );
    }

    #[tokio::test]
    async fn test_into_response_with_overrides() {
        let response = ApiResponse::ok(json!(null))
            .with_message("Created")
            .with_status(StatusCode::CREATED)
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "message": "Created", "data": null})
        );
    }
}
