use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    AppState,
    error::AppResult,
    models::{NameInput, NamedView},
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<NamedView>>> {
    let genres = state.catalog.list_genres().await?;
    Ok(Json(genres.into_iter().map(NamedView::from).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<NamedView>> {
    Ok(Json(state.catalog.get_genre(id).await?.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NameInput>,
) -> AppResult<impl IntoResponse> {
    let id = state.catalog.create_genre(input).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/genres/{id}"))]))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(input): Json<NameInput>,
) -> AppResult<StatusCode> {
    state.catalog.update_genre(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.catalog.delete_genre(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
