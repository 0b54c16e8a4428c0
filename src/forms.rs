use serde::Deserialize;

use crate::models::NewMovie;

const REQUIRED: &str = "This field is required.";
const RATING_RANGE: &str = "Rating must be between 0 and 10.";

/// Field-level validation messages, rendered next to the offending
/// inputs when a form is re-displayed.
#[derive(Clone, Debug, Default)]
pub struct FormErrors(Vec<(&'static str, String)>);

impl FormErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Title-only form that starts the search-first add flow.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchTitleForm {
    #[serde(default)]
    pub title: String,
}

impl SearchTitleForm {
    pub fn validate(&self) -> Result<String, FormErrors> {
        let mut errors = FormErrors::default();
        let title = self.title.trim();
        if title.is_empty() {
            errors.push("title", REQUIRED);
        }
        errors.into_result(title.to_string())
    }
}

/// Full creation form for the direct add flow. Submitted values stay as
/// strings so a bad number is a field error rather than a rejected
/// request body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ManualMovieForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub ranking: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub img_url: String,
}

impl ManualMovieForm {
    pub fn validate(&self) -> Result<NewMovie, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push("title", REQUIRED);
        }

        let year = parse_required_int(&self.year, "year", "Year must be a whole number.", &mut errors);
        let rating = parse_rating(&self.rating, &mut errors);
        let ranking =
            parse_required_int(&self.ranking, "ranking", "Ranking must be a whole number.", &mut errors);

        let description = self.description.trim();
        if description.is_empty() {
            errors.push("description", REQUIRED);
        }
        let review = self.review.trim();
        if review.is_empty() {
            errors.push("review", REQUIRED);
        }
        let img_url = self.img_url.trim();
        if img_url.is_empty() {
            errors.push("img_url", REQUIRED);
        }

        errors.into_result(NewMovie {
            title: title.to_string(),
            year,
            description: Some(description.to_string()),
            rating,
            ranking,
            review: Some(review.to_string()),
            img_url: Some(img_url.to_string()),
        })
    }
}

/// Rating/review form used by the edit workflow.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

impl UpdateForm {
    pub fn validate(&self) -> Result<(f64, String), FormErrors> {
        let mut errors = FormErrors::default();

        let rating = parse_rating(&self.rating, &mut errors);

        let review = self.review.trim();
        if review.is_empty() {
            errors.push("review", REQUIRED);
        }

        errors.into_result((rating.unwrap_or_default(), review.to_string()))
    }
}

fn parse_rating(raw: &str, errors: &mut FormErrors) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push("rating", REQUIRED);
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if (0.0..=10.0).contains(&value) => Some(value),
        Ok(_) => {
            errors.push("rating", RATING_RANGE);
            None
        },
        Err(_) => {
            errors.push("rating", "Rating must be a number.");
            None
        },
    }
}

fn parse_required_int(
    raw: &str,
    field: &'static str,
    message: &'static str,
    errors: &mut FormErrors,
) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(field, REQUIRED);
        return None;
    }
    match raw.parse::<i32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(field, message);
            None
        },
    }
}
