// HTTP backend tests against a stub server
//
// The stub mimics the chat backend: JSON bodies on every path, including
// application errors reported with a 5xx status.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, serve};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;
use webchat_client::backend::{BackendError, ChatBackend, ChatReply, HttpBackend, ResetReply};

async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        serve(listener, router).await.expect("stub server");
    });
    format!("http://{addr}")
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    let message = body["message"].as_str().unwrap_or_default();
    Json(json!({ "status": "success", "response": format!("echo: {message}") }))
}

#[tokio::test]
async fn chat_success_returns_response_text() {
    let base = spawn_stub(Router::new().route("/api/chat", post(echo))).await;
    let backend = HttpBackend::new(base);

    let reply = backend.send_message("Halo").await.expect("reply");
    assert_eq!(reply, ChatReply::Success("echo: Halo".to_string()));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let base = spawn_stub(Router::new().route("/api/chat", post(echo))).await;
    let backend = HttpBackend::new(format!("{base}/"));

    let reply = backend.send_message("x").await.expect("reply");
    assert_eq!(reply, ChatReply::Success("echo: x".to_string()));
}

#[tokio::test]
async fn error_body_with_server_error_status_is_decoded() {
    let router = Router::new().route(
        "/api/chat",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "error": "model unavailable" })),
            )
        }),
    );
    let backend = HttpBackend::new(spawn_stub(router).await);

    let reply = backend.send_message("Halo").await.expect("reply");
    assert_eq!(reply, ChatReply::Failure("model unavailable".to_string()));
}

#[tokio::test]
async fn error_without_detail_falls_back_to_status() {
    let router = Router::new().route(
        "/api/chat",
        post(|| async { Json(json!({ "status": "overloaded" })) }),
    );
    let backend = HttpBackend::new(spawn_stub(router).await);

    let reply = backend.send_message("Halo").await.expect("reply");
    assert_eq!(reply, ChatReply::Failure("overloaded".to_string()));
}

#[tokio::test]
async fn success_without_response_is_a_decode_error() {
    let router = Router::new().route(
        "/api/chat",
        post(|| async { Json(json!({ "status": "success" })) }),
    );
    let backend = HttpBackend::new(spawn_stub(router).await);

    let result = backend.send_message("Halo").await;
    assert!(matches!(result, Err(BackendError::Decode { .. })));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let router = Router::new().route(
        "/api/chat",
        post(|| async { (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") }),
    );
    let backend = HttpBackend::new(spawn_stub(router).await);

    let result = backend.send_message("Halo").await;
    assert!(matches!(result, Err(BackendError::Decode { .. })));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let backend = HttpBackend::new(format!("http://{addr}"));

    let error = backend.send_message("Halo").await.expect_err("refused");
    assert!(matches!(error, BackendError::Network { .. }));
    assert!(error.user_message().starts_with("Tidak dapat terhubung"));

    let result = backend.reset().await;
    assert!(matches!(result, Err(BackendError::Network { .. })));
}

#[tokio::test]
async fn reset_posts_with_json_content_type() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route(
            "/api/reset",
            post(
                |State(calls): State<Arc<AtomicUsize>>, headers: HeaderMap| async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    if is_json(&headers) {
                        Json(json!({ "status": "success" })).into_response()
                    } else {
                        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "expected json").into_response()
                    }
                },
            ),
        )
        .with_state(calls.clone());
    let backend = HttpBackend::new(spawn_stub(router).await);

    let reply = backend.reset().await.expect("reply");
    assert_eq!(reply, ResetReply::Success);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn reset_failure_reports_status() {
    let router = Router::new().route(
        "/api/reset",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error" })),
            )
        }),
    );
    let backend = HttpBackend::new(spawn_stub(router).await);

    let reply = backend.reset().await.expect("reply");
    assert_eq!(reply, ResetReply::Failure("error".to_string()));
}
