use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::{Value, json};

use quillgate_core::ApiResponse;

async fn send(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_data_only_call_uses_both_defaults() {
    let response = ApiResponse::ok(json!({"id": 1})).into_response();

    let (status, body) = send(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "OK", "data": {"id": 1}})
    );
}

#[tokio::test]
async fn test_null_data_with_message_and_status() {
    let response = ApiResponse::ok(json!(null))
        .with_message("Created")
        .with_status(StatusCode::CREATED)
        .into_response();

    let (status, body) = send(response).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"success": true, "message": "Created", "data": null})
    );
}

#[tokio::test]
async fn test_arbitrary_payload_shapes_pass_through() {
    for data in [
        json!([1, 2, 3]),
        json!("plain string"),
        json!({"nested": {"deeply": true}}),
        json!(42),
    ] {
        let response = ApiResponse::ok(data.clone()).into_response();
        let (status, body) = send(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "OK");
        assert_eq!(body["data"], data);
    }
}
