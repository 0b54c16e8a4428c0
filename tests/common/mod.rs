use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, header::CONTENT_TYPE},
    response::Response,
};
use migration::{Migrator, MigratorTrait};
use movieboxd::{
    AppState, app,
    config::Config,
    models::{CandidateMovie, MovieDetail},
    store::MovieStore,
    tmdb::{MovieSearch, SearchError},
};
use sea_orm::Database;
use tower::ServiceExt;

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Stand-in for the TMDB client so route tests control exactly what the
/// upstream returns.
pub enum FakeSearch {
    Empty,
    Candidates(Vec<CandidateMovie>),
    Detail(MovieDetail),
    Failing,
}

#[async_trait]
impl MovieSearch for FakeSearch {
    async fn search(&self, _title: &str) -> Result<Vec<CandidateMovie>, SearchError> {
        match self {
            FakeSearch::Empty | FakeSearch::Detail(_) => Ok(Vec::new()),
            FakeSearch::Candidates(candidates) => Ok(candidates.clone()),
            FakeSearch::Failing => Err(SearchError::Unavailable("connection refused".to_string())),
        }
    }

    async fn movie_detail(&self, tmdb_id: i64) -> Result<MovieDetail, SearchError> {
        match self {
            FakeSearch::Detail(detail) => Ok(MovieDetail { id: tmdb_id, ..detail.clone() }),
            _ => Err(SearchError::Unavailable("connection refused".to_string())),
        }
    }
}

fn test_config() -> Config {
    Config {
        addr: "127.0.0.1:0".parse().unwrap(),
        database_url: "sqlite::memory:".to_string(),
        tmdb_access_token: "test-token".to_string(),
        tmdb_base_url: "https://api.themoviedb.org/3".to_string(),
        tmdb_image_base_url: IMAGE_BASE_URL.to_string(),
        tmdb_rps: 4,
        secret_key: "an-integration-test-secret-key-of-decent-length".to_string(),
    }
}

/// Fresh app over an in-memory database, plus a handle on the same
/// store for asserting what the handlers did (or did not) persist.
pub async fn build_app(search: FakeSearch) -> (Router, MovieStore) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    let store = MovieStore::new(db);
    let state = AppState::new(Arc::new(test_config()), store.clone(), Arc::new(search));
    (app(state), store)
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
