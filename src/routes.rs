use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use marquee_record::{HealthReport, Movie};

use crate::{
    AppState,
    error::{AppError, AppResult},
};

pub async fn movie_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    Ok(Json(state.store.get(&id).await?))
}

pub async fn by_title(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.store.search_title(&title).await?))
}

pub async fn by_actor(
    State(state): State<Arc<AppState>>,
    Path(actor): Path<String>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.store.search_actor(&actor).await?))
}

pub async fn by_director(
    State(state): State<Arc<AppState>>,
    Path(director): Path<String>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.store.search_director(&director).await?))
}

pub async fn by_genre(
    State(state): State<Arc<AppState>>,
    Path(genre): Path<String>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.store.list_genre(&genre).await?))
}

pub async fn random_by_genre(
    State(state): State<Arc<AppState>>,
    Path(genre): Path<String>,
) -> AppResult<Json<Movie>> {
    Ok(Json(state.store.random_in_genre(&genre).await?))
}

pub async fn top_rated(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.store.top_rated().await?))
}

pub async fn health(State(state): State<Arc<AppState>>) -> AppResult<Json<HealthReport>> {
    Ok(Json(HealthReport { count: state.store.count().await? }))
}

pub async fn debug_directors(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<Option<String>>>> {
    Ok(Json(state.store.sample_directors().await?))
}

pub async fn fallback() -> AppError {
    AppError::not_found("Not Found")
}
