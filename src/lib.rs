pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::store::MovieStore;

pub struct AppState {
    pub store: MovieStore,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/items", get(routes::top_rated))
        .route("/items/", get(routes::top_rated))
        .route("/items/{id}", get(routes::movie_by_id))
        .route("/items/title/{title}", get(routes::by_title))
        .route("/items/actor/{actor}", get(routes::by_actor))
        .route("/items/director/{director}", get(routes::by_director))
        .route("/items/genre/{genre}", get(routes::by_genre))
        .route("/items/bygenre/{genre}", get(routes::random_by_genre))
        .route("/health", get(routes::health))
        .route("/debug/directors", get(routes::debug_directors))
        .fallback(routes::fallback)
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
