pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod flash;
pub mod forms;
pub mod models;
pub mod routes;
pub mod store;
pub mod templates;
pub mod tmdb;

use std::sync::Arc;

use axum::{Router, extract::FromRef, routing::get};
use axum_extra::extract::cookie::Key;

use crate::{config::Config, store::MovieStore, tmdb::MovieSearch};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
    pub search: Arc<dyn MovieSearch>,
    key: Key,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: MovieStore, search: Arc<dyn MovieSearch>) -> Self {
        let key = Key::derive_from(config.secret_key.as_bytes());
        Self { config, store, search, key }
    }
}

// Lets SignedCookieJar pull its signing key straight out of the state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/add", get(routes::add_form).post(routes::add_search))
        .route("/add/manual", get(routes::manual_form).post(routes::manual_submit))
        .route("/selected/{external_id}", get(routes::select))
        .route("/edit/{id}", get(routes::edit_form).post(routes::edit_submit))
        .route("/delete/{id}", get(routes::delete))
        .with_state(state)
}
