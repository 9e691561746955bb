mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, send, send_json, test_app};
use serde_json::json;

#[tokio::test]
async fn create_then_list_shows_assigned_id() {
    let (_dir, app) = test_app().await;

    let resp = send_json(&app, "POST", "/directors/", json!({"name": "Nolan"})).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(body_bytes(resp).await.is_empty());

    let resp = send(&app, "GET", "/directors/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([{"id": 1, "name": "Nolan"}]));
}

#[tokio::test]
async fn collection_answers_with_and_without_trailing_slash() {
    let (_dir, app) = test_app().await;

    let resp = send(&app, "GET", "/directors").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = send(&app, "GET", "/directors/").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn put_overwrites_name_and_keeps_id() {
    let (_dir, app) = test_app().await;

    let resp = send_json(&app, "POST", "/directors/", json!({"name": "Nolan"})).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp =
        send_json(&app, "PUT", "/directors/1", json!({"id": 5, "name": "Christopher Nolan"}))
            .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(&app, "GET", "/directors/1").await;
    assert_eq!(body_json(resp).await, json!({"id": 1, "name": "Christopher Nolan"}));

    // an empty body nulls the name: updates replace, they do not merge
    let resp = send_json(&app, "PUT", "/directors/1", json!({})).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = send(&app, "GET", "/directors/1").await;
    assert_eq!(body_json(resp).await, json!({"id": 1, "name": null}));
}

#[tokio::test]
async fn update_missing_returns_404() {
    let (_dir, app) = test_app().await;

    let resp = send_json(&app, "PUT", "/directors/3", json!({"name": "x"})).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}
