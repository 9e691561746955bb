use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    error::AppResult,
    models::{MovieFilter, MoviePayload, MovieRecord},
};

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<MovieFilter>,
) -> AppResult<Json<Vec<MovieRecord>>> {
    Ok(Json(state.movies.list(&filter).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MoviePayload>,
) -> AppResult<StatusCode> {
    let id = state.movies.create(&payload).await?;
    tracing::debug!(id, "movie created");
    Ok(StatusCode::CREATED)
}

pub async fn read(State(state): State<Arc<AppState>>, Path(id): Path<i32>) -> AppResult<Response> {
    match state.movies.get(id).await? {
        Some(record) => Ok(Json(record).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<MoviePayload>,
) -> AppResult<StatusCode> {
    match state.movies.update(id, &payload).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Ok(StatusCode::NOT_FOUND),
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    // deleting an id that never existed still reports success
    let rows = state.movies.delete(id).await?;
    tracing::debug!(id, rows, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
