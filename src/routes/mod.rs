use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

mod directors;
mod genres;
mod movies;

pub fn router(state: Arc<AppState>) -> Router {
    let movies = get(movies::list).post(movies::create);
    let directors = get(directors::list).post(directors::create);
    let genres = get(genres::list).post(genres::create);

    Router::new()
        .route("/movies", movies.clone())
        .route("/movies/", movies)
        .route("/movies/{id}", get(movies::get).put(movies::update).delete(movies::delete))
        .route("/directors", directors.clone())
        .route("/directors/", directors)
        .route(
            "/directors/{id}",
            get(directors::get).put(directors::update).delete(directors::delete),
        )
        .route("/genres", genres.clone())
        .route("/genres/", genres)
        .route("/genres/{id}", get(genres::get).put(genres::update).delete(genres::delete))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
