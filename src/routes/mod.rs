use std::sync::Arc;

use axum::{Router, routing::get};

use crate::AppState;

pub mod directors;
pub mod genres;
pub mod movies;

// Collection paths are registered with and without the trailing slash; axum
// does not redirect between the two forms.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(movies::list).post(movies::create))
        .route("/movies/", get(movies::list).post(movies::create))
        .route("/movies/{id}", get(movies::read).put(movies::update).delete(movies::delete))
        .route("/directors", get(directors::list).post(directors::create))
        .route("/directors/", get(directors::list).post(directors::create))
        .route(
            "/directors/{id}",
            get(directors::read).put(directors::update).delete(directors::delete),
        )
        .route("/genres", get(genres::list).post(genres::create))
        .route("/genres/", get(genres::list).post(genres::create))
        .route("/genres/{id}", get(genres::read).put(genres::update).delete(genres::delete))
        .with_state(state)
}
