pub mod config;
pub mod data;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod omdb;
pub mod routes;
pub mod templates;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{config::Config, data::DataManager};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub data: DataManager,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/users", post(routes::create_user))
        .route("/users/{user_id}/movies", get(routes::movies).post(routes::add_movie))
        .route("/users/{user_id}/movies/{movie_id}/update", post(routes::update_movie))
        .route("/users/{user_id}/movies/{movie_id}/delete", post(routes::delete_movie))
        .with_state(state)
}
