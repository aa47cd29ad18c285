use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    AppState,
    error::AppResult,
    models::{MovieFilter, MovieInput, MovieView},
};

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<MovieFilter>,
) -> AppResult<Json<Vec<MovieView>>> {
    let movies = state.catalog.list_movies(filter).await?;
    Ok(Json(movies.into_iter().map(MovieView::from).collect()))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<MovieView>> {
    Ok(Json(state.catalog.get_movie(id).await?.into()))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(input): Json<MovieInput>,
) -> AppResult<impl IntoResponse> {
    let id = state.catalog.create_movie(input).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/movies/{id}"))]))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(input): Json<MovieInput>,
) -> AppResult<StatusCode> {
    state.catalog.update_movie(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.catalog.delete_movie(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::routes::test_support::{app, body_bytes, body_json, created_id, send};

    #[tokio::test]
    async fn create_then_get_round_trips_fields() {
        let app = app().await;

        let resp = send(
            &app,
            Method::POST,
            "/movies/",
            Some(json!({"title": "Inception", "year": 2010, "rating": 8.8})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let id = created_id(&resp);
        assert!(body_bytes(resp).await.is_empty());

        let resp = send(&app, Method::GET, &format!("/movies/{id}"), None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let movie = body_json(resp).await;
        assert_eq!(movie["id"], id);
        assert_eq!(movie["title"], "Inception");
        assert_eq!(movie["year"], 2010);
        assert_eq!(movie["rating"], 8.8);
        assert!(movie["genre_id"].is_null());
        assert!(movie["director_id"].is_null());
    }

    #[tokio::test]
    async fn get_missing_movie_is_404_with_empty_body() {
        let app = app().await;
        let resp = send(&app, Method::GET, "/movies/999", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn list_filters_by_director_and_genre() {
        let app = app().await;
        for (title, director_id, genre_id) in
            [("A", 1, 10), ("B", 1, 20), ("C", 2, 10), ("D", 2, 20)]
        {
            let body = json!({"title": title, "director_id": director_id, "genre_id": genre_id});
            let resp = send(&app, Method::POST, "/movies/", Some(body)).await;
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let titles = |v: serde_json::Value| {
            v.as_array()
                .unwrap()
                .iter()
                .map(|m| m["title"].as_str().unwrap().to_string())
                .collect::<Vec<_>>()
        };

        let resp = send(&app, Method::GET, "/movies/", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(titles(body_json(resp).await), vec!["A", "B", "C", "D"]);

        let resp = send(&app, Method::GET, "/movies/?director_id=1", None).await;
        assert_eq!(titles(body_json(resp).await), vec!["A", "B"]);

        let resp = send(&app, Method::GET, "/movies/?genre_id=20", None).await;
        assert_eq!(titles(body_json(resp).await), vec!["B", "D"]);

        let resp = send(&app, Method::GET, "/movies/?director_id=2&genre_id=10", None).await;
        assert_eq!(titles(body_json(resp).await), vec!["C"]);

        let resp = send(&app, Method::GET, "/movies/?director_id=&genre_id=10", None).await;
        assert_eq!(titles(body_json(resp).await), vec!["A", "C"]);

        let resp = send(&app, Method::GET, "/movies/?director_id=7", None).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!([]));
    }

    #[tokio::test]
    async fn collection_route_works_without_trailing_slash() {
        let app = app().await;
        let resp = send(&app, Method::POST, "/movies", Some(json!({"title": "Heat"}))).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = send(&app, Method::GET, "/movies", None).await;
        assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_title() {
        let app = app().await;
        let resp = send(
            &app,
            Method::POST,
            "/movies/",
            Some(json!({"title": "Alien", "description": "old", "year": 1978, "rating": 7.0})),
        )
        .await;
        let id = created_id(&resp);

        let resp = send(
            &app,
            Method::PUT,
            &format!("/movies/{id}"),
            Some(json!({
                "title": "Aliens",
                "description": "In space no one can hear you scream",
                "trailer": "https://example.com/alien",
                "year": 1979,
                "rating": 8.5,
                "genre_id": 3,
                "director_id": 4,
            })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(body_bytes(resp).await.is_empty());

        let movie = body_json(send(&app, Method::GET, &format!("/movies/{id}"), None).await).await;
        assert_eq!(movie["title"], "Alien");
        assert_eq!(movie["description"], "In space no one can hear you scream");
        assert_eq!(movie["trailer"], "https://example.com/alien");
        assert_eq!(movie["year"], 1979);
        assert_eq!(movie["rating"], 8.5);
        assert_eq!(movie["genre_id"], 3);
        assert_eq!(movie["director_id"], 4);
    }

    #[tokio::test]
    async fn update_or_delete_missing_movie_is_404() {
        let app = app().await;
        let resp = send(&app, Method::PUT, "/movies/5", Some(json!({"year": 2000}))).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = send(&app, Method::DELETE, "/movies/5", None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_get_is_404() {
        let app = app().await;
        let resp = send(&app, Method::POST, "/movies/", Some(json!({"title": "Tenet"}))).await;
        let id = created_id(&resp);

        let resp = send(&app, Method::DELETE, &format!("/movies/{id}"), None).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = send(&app, Method::GET, &format!("/movies/{id}"), None).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_body_field_is_rejected() {
        let app = app().await;
        let resp = send(&app, Method::POST, "/movies/", Some(json!({"name": "Tenet"}))).await;
        assert!(resp.status().is_client_error());

        let resp = send(&app, Method::GET, "/movies/", None).await;
        assert_eq!(body_json(resp).await, json!([]));
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let app = app().await;
        let resp = send(&app, Method::GET, "/movies/abc", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
