use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use axum::response::Response;
use cineshelf::{AppState, db, routes};
use tempfile::TempDir;
use tower::ServiceExt;

// Each test gets its own sqlite file; the TempDir guard must stay bound for
// the duration of the test or the file vanishes under the pool.
pub async fn test_app() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("catalog.db").display());
    let conn = db::connect_and_migrate(&url).await.expect("connect and migrate");
    let app = routes::router(Arc::new(AppState::new(conn)));
    (dir, app)
}

pub async fn send(app: &Router, method: &str, uri: &str) -> Response {
    let req = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: serde_json::Value) -> Response {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec()
}
