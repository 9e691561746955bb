use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, entities::director, error::AppResult, models::DirectorPayload};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<director::Model>>> {
    Ok(Json(state.directors.list().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DirectorPayload>,
) -> AppResult<StatusCode> {
    let id = state.directors.create(&payload).await?;
    tracing::debug!(id, "director created");
    Ok(StatusCode::CREATED)
}

pub async fn read(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> AppResult<Response> {
    match state.directors.get(id).await? {
        Some(model) => Ok(Json(model).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<DirectorPayload>,
) -> AppResult<StatusCode> {
    match state.directors.update(id, &payload).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Ok(StatusCode::NOT_FOUND),
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let rows = state.directors.delete(id).await?;
    tracing::debug!(id, rows, "director deleted");
    Ok(StatusCode::NO_CONTENT)
}
