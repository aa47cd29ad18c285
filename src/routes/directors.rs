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
    let directors = state.catalog.list_directors().await?;
    Ok(Json(directors.into_iter().map(NamedView::from).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<NamedView>> {
    Ok(Json(state.catalog.get_director(id).await?.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NameInput>,
) -> AppResult<impl IntoResponse> {
    let id = state.catalog.create_director(input).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/directors/{id}"))]))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(input): Json<NameInput>,
) -> AppResult<StatusCode> {
    state.catalog.update_director(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.catalog.delete_director(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
