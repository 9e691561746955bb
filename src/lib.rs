//! Movie catalog CRUD service: axum handlers over SeaORM-backed repositories.

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod repo;
pub mod routes;

use sea_orm::DatabaseConnection;

use crate::repo::{DirectorRepo, GenreRepo, MovieRepo};

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieRepo,
    pub directors: DirectorRepo,
    pub genres: GenreRepo,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            movies: MovieRepo::new(db.clone()),
            directors: DirectorRepo::new(db.clone()),
            genres: GenreRepo::new(db),
        }
    }
}
