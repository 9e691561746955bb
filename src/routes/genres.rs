use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, entities::genre, error::AppResult, models::GenrePayload};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<genre::Model>>> {
    Ok(Json(state.genres.list().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenrePayload>,
) -> AppResult<StatusCode> {
    let id = state.genres.create(&payload).await?;
    tracing::debug!(id, "genre created");
    Ok(StatusCode::CREATED)
}

pub async fn read(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> AppResult<Response> {
    match state.genres.get(id).await? {
        Some(model) => Ok(Json(model).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<GenrePayload>,
) -> AppResult<StatusCode> {
    match state.genres.update(id, &payload).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Ok(StatusCode::NOT_FOUND),
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let rows = state.genres.delete(id).await?;
    tracing::debug!(id, rows, "genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
