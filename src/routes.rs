use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::warn;

use crate::{
    AppState,
    error::AppResult,
    flash,
    forms::{FormErrors, ManualMovieForm, SearchTitleForm, UpdateForm},
    models::{MovieOrder, NewMovie},
    store::StoreError,
    templates,
};

const DUPLICATE_TITLE: &str =
    "A movie with this title already exists. Please use a different title.";
const UPSTREAM_DOWN: &str =
    "The movie database could not be reached. Please try again in a moment.";

pub async fn index(State(state): State<AppState>, jar: SignedCookieJar) -> AppResult<Response> {
    let (jar, message) = flash::take(jar);
    let movies = state.store.list_all(Some(MovieOrder::RatingDesc)).await?;
    Ok((jar, Html(templates::index_page(message.as_deref(), &movies))).into_response())
}

pub async fn add_form(jar: SignedCookieJar) -> Response {
    let (jar, message) = flash::take(jar);
    let body = templates::add_page("", &FormErrors::default(), message.as_deref());
    (jar, Html(body)).into_response()
}

/// Search-first add: a valid title goes out to the movie database and
/// comes back as a candidate list. Nothing is persisted here.
pub async fn add_search(
    State(state): State<AppState>,
    Form(form): Form<SearchTitleForm>,
) -> AppResult<Response> {
    let title = match form.validate() {
        Ok(title) => title,
        Err(errors) => {
            return Ok(Html(templates::add_page(&form.title, &errors, None)).into_response());
        },
    };

    match state.search.search(&title).await {
        Ok(candidates) => Ok(Html(templates::candidates_page(&title, &candidates)).into_response()),
        Err(err) => {
            warn!(title = %title, error = %err, "movie search failed");
            let body = templates::add_page(&title, &FormErrors::default(), Some(UPSTREAM_DOWN));
            Ok(Html(body).into_response())
        },
    }
}

/// Persists the chosen candidate with metadata from the detail lookup,
/// then hands off to the edit form for rating and review.
pub async fn select(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(external_id): Path<i64>,
) -> AppResult<Response> {
    let detail = match state.search.movie_detail(external_id).await {
        Ok(detail) => detail,
        Err(err) => {
            warn!(external_id, error = %err, "movie detail lookup failed");
            return Ok((flash::push(jar, UPSTREAM_DOWN), Redirect::to("/add")).into_response());
        },
    };

    let description = detail.overview.as_deref().and_then(|s| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    });

    let new = NewMovie {
        title: detail.display_title().to_string(),
        year: detail.year(),
        description,
        img_url: detail.image_url(&state.config.tmdb_image_base_url),
        ..Default::default()
    };

    match state.store.insert(new).await {
        Ok(movie) => Ok(Redirect::to(&format!("/edit/{}", movie.id)).into_response()),
        Err(StoreError::DuplicateTitle) => {
            Ok((flash::push(jar, DUPLICATE_TITLE), Redirect::to("/add")).into_response())
        },
        Err(err) => Err(err.into()),
    }
}

pub async fn manual_form(jar: SignedCookieJar) -> Response {
    let (jar, message) = flash::take(jar);
    let body = templates::manual_add_page(
        &ManualMovieForm::default(),
        &FormErrors::default(),
        message.as_deref(),
    );
    (jar, Html(body)).into_response()
}

pub async fn manual_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ManualMovieForm>,
) -> AppResult<Response> {
    let new = match form.validate() {
        Ok(new) => new,
        Err(errors) => {
            return Ok(Html(templates::manual_add_page(&form, &errors, None)).into_response());
        },
    };

    match state.store.insert(new).await {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(StoreError::DuplicateTitle) => {
            Ok((flash::push(jar, DUPLICATE_TITLE), Redirect::to("/add/manual")).into_response())
        },
        Err(err) => Err(err.into()),
    }
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(id).await?;
    let form = UpdateForm {
        rating: movie.rating.map(|r| r.to_string()).unwrap_or_default(),
        review: movie.review.clone().unwrap_or_default(),
    };
    Ok(Html(templates::edit_page(&movie, &form, &FormErrors::default())))
}

pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<UpdateForm>,
) -> AppResult<Response> {
    let movie = state.store.get(id).await?;

    match form.validate() {
        Ok((rating, review)) => {
            state.store.update_review(id, rating, review).await?;
            Ok(Redirect::to("/").into_response())
        },
        Err(errors) => Ok(Html(templates::edit_page(&movie, &form, &errors)).into_response()),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Response> {
    state.store.delete(id).await?;
    Ok(Redirect::to("/").into_response())
}
