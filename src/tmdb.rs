use std::{num::NonZeroU32, sync::Arc};

use async_trait::async_trait;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{CandidateMovie, MovieDetail};

/// Failure signal from the movie database boundary. Empty result lists
/// are not errors; they come back as `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("movie database request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("movie database unavailable: {0}")]
    Unavailable(String),
}

/// Seam between the route handlers and the movie-metadata service, so
/// tests can swap in a fake.
#[async_trait]
pub trait MovieSearch: Send + Sync {
    async fn search(&self, title: &str) -> Result<Vec<CandidateMovie>, SearchError>;

    async fn movie_detail(&self, tmdb_id: i64) -> Result<MovieDetail, SearchError>;
}

pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, access_token: String, base_url: String, rps: u32) -> Self {
        // Warn once on app load if using mock data
        if access_token.trim().is_empty() {
            tracing::warn!("Using mock TMDB data - no TMDB_ACCESS_TOKEN provided");
        }

        let limiter =
            Arc::new(RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps.max(1)).unwrap())));
        Self { client, access_token, base_url, limiter }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl MovieSearch for TmdbClient {
    async fn search(&self, title: &str) -> Result<Vec<CandidateMovie>, SearchError> {
        // Use mock data if access token is not provided
        if self.access_token.trim().is_empty() {
            return Ok(vec![mock_candidate()]);
        }

        self.limiter.until_ready().await;

        let resp: SearchResponse = self
            .client
            .get(self.endpoint("/search/movie"))
            .bearer_auth(&self.access_token)
            .query(&[("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp.results)
    }

    async fn movie_detail(&self, tmdb_id: i64) -> Result<MovieDetail, SearchError> {
        if self.access_token.trim().is_empty() {
            return Ok(mock_detail(tmdb_id));
        }

        self.limiter.until_ready().await;

        let detail: MovieDetail = self
            .client
            .get(self.endpoint(&format!("/movie/{tmdb_id}")))
            .bearer_auth(&self.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(detail)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<CandidateMovie>,
}

fn mock_candidate() -> CandidateMovie {
    CandidateMovie {
        id: 550,
        title: Some("Fight Club".to_string()),
        original_title: Some("Fight Club".to_string()),
        overview: Some("An insomniac office worker crosses paths with a soap maker.".to_string()),
        release_date: Some("1999-10-15".to_string()),
        poster_path: Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg".to_string()),
    }
}

fn mock_detail(tmdb_id: i64) -> MovieDetail {
    let c = mock_candidate();
    MovieDetail {
        id: tmdb_id,
        title: c.title,
        original_title: c.original_title,
        overview: c.overview,
        release_date: c.release_date,
        poster_path: c.poster_path,
    }
}
