use jiff::civil::Date;
use serde::Deserialize;

/// A search hit from the movie database, not yet persisted.
#[derive(Clone, Debug, Deserialize)]
pub struct CandidateMovie {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl CandidateMovie {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().or(self.original_title.as_deref()).unwrap_or("Untitled")
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl MovieDetail {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().or(self.original_title.as_deref()).unwrap_or("Untitled")
    }

    /// Four-digit release year, when the release date parses.
    pub fn year(&self) -> Option<i32> {
        let raw = self.release_date.as_deref()?.trim();
        raw.parse::<Date>().ok().map(|d| i32::from(d.year()))
    }

    pub fn image_url(&self, image_base_url: &str) -> Option<String> {
        let poster = self.poster_path.as_deref()?;
        Some(format!("{}{}", image_base_url.trim_end_matches('/'), poster))
    }
}

/// Fields accepted by `MovieStore::insert`. Everything except the title
/// may be absent; the search-first add flow fills rating, ranking and
/// review later through the edit form.
#[derive(Clone, Debug, Default)]
pub struct NewMovie {
    pub title: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub ranking: Option<i32>,
    pub review: Option<String>,
    pub img_url: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MovieOrder {
    RatingDesc,
}
