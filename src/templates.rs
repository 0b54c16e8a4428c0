use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    forms::{FormErrors, ManualMovieForm, UpdateForm},
    models::CandidateMovie,
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700";
const BUTTON_CLASS: &str = "w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700";

pub fn index_page(flash: Option<&str>, movies: &[movie::Model]) -> String {
    page(
        "My Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-3xl mx-auto px-6 py-12" {
                    (flash_banner(flash))

                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Movies" }
                            p class="mt-2 text-gray-600" { "Everything you have tracked, best rated first." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add your first movie." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(title_value: &str, errors: &FormErrors, notice: Option<&str>) -> String {
    page(
        "Add a movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    (flash_banner(notice))

                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add a movie" }
                        p class="mt-2 text-gray-600" { "Search the movie database by title, then pick the right match." }

                        form class="mt-8 space-y-6" method="post" action="/add" {
                            div {
                                label class=(LABEL_CLASS) for="title" { "Movie title" }
                                input class=(INPUT_CLASS) name="title" id="title" value=(title_value);
                                (field_error(errors, "title"))
                            }
                            button class=(BUTTON_CLASS) type="submit" { "Search" }
                        }

                        p class="mt-6 text-sm text-gray-500" {
                            "Not on the database? "
                            a class="text-blue-600 hover:text-blue-800" href="/add/manual" { "Enter it by hand." }
                        }
                    }
                }
            }
        },
    )
}

pub fn candidates_page(query: &str, candidates: &[CandidateMovie]) -> String {
    page(
        "Pick a match",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "Pick a match" }
                            p class="mt-2 text-gray-600" { "Results for \"" (query) "\"" }
                        }
                        a class="text-sm text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                    }

                    @if candidates.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "No matches found. Try a different title." }
                        }
                    } @else {
                        ul class="mt-10 space-y-3" {
                            @for candidate in candidates {
                                li class="bg-white shadow rounded-lg p-5" {
                                    a class="block hover:text-blue-700" href=(format!("/selected/{}", candidate.id)) {
                                        span class="font-semibold text-gray-900" { (candidate.display_title()) }
                                        @if let Some(date) = &candidate.release_date {
                                            @if !date.is_empty() {
                                                span class="ml-2 text-gray-500" { "(" (date) ")" }
                                            }
                                        }
                                    }
                                    @if let Some(overview) = &candidate.overview {
                                        p class="mt-2 text-sm text-gray-600 line-clamp-2" { (overview) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn manual_add_page(form: &ManualMovieForm, errors: &FormErrors, notice: Option<&str>) -> String {
    page(
        "Add a movie by hand",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    (flash_banner(notice))

                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add a movie by hand" }

                        form class="mt-8 space-y-6" method="post" action="/add/manual" {
                            div {
                                label class=(LABEL_CLASS) for="title" { "Title" }
                                input class=(INPUT_CLASS) name="title" id="title" value=(form.title);
                                (field_error(errors, "title"))
                            }
                            div {
                                label class=(LABEL_CLASS) for="year" { "Year" }
                                input class=(INPUT_CLASS) name="year" id="year" inputmode="numeric" value=(form.year);
                                (field_error(errors, "year"))
                            }
                            div {
                                label class=(LABEL_CLASS) for="description" { "Description" }
                                input class=(INPUT_CLASS) name="description" id="description" value=(form.description);
                                (field_error(errors, "description"))
                            }
                            div {
                                label class=(LABEL_CLASS) for="rating" { "Rating (0-10)" }
                                input class=(INPUT_CLASS) name="rating" id="rating" inputmode="decimal" value=(form.rating);
                                (field_error(errors, "rating"))
                            }
                            div {
                                label class=(LABEL_CLASS) for="ranking" { "Ranking" }
                                input class=(INPUT_CLASS) name="ranking" id="ranking" inputmode="numeric" value=(form.ranking);
                                (field_error(errors, "ranking"))
                            }
                            div {
                                label class=(LABEL_CLASS) for="review" { "Review" }
                                input class=(INPUT_CLASS) name="review" id="review" value=(form.review);
                                (field_error(errors, "review"))
                            }
                            div {
                                label class=(LABEL_CLASS) for="img_url" { "Poster URL" }
                                input class=(INPUT_CLASS) name="img_url" id="img_url" value=(form.img_url);
                                (field_error(errors, "img_url"))
                            }
                            button class=(BUTTON_CLASS) type="submit" { "Add movie" }
                        }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, form: &UpdateForm, errors: &FormErrors) -> String {
    page(
        "Edit rating",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Edit " (movie.title) }
                        @if let Some(year) = movie.year {
                            p class="mt-1 text-gray-500" { "(" (year) ")" }
                        }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit/{}", movie.id)) {
                            div {
                                label class=(LABEL_CLASS) for="rating" { "Your rating (0-10)" }
                                input class=(INPUT_CLASS) name="rating" id="rating" inputmode="decimal" value=(form.rating);
                                (field_error(errors, "rating"))
                            }
                            div {
                                label class=(LABEL_CLASS) for="review" { "Your review" }
                                input class=(INPUT_CLASS) name="review" id="review" value=(form.review);
                                (field_error(errors, "review"))
                            }
                            button class=(BUTTON_CLASS) type="submit" { "Save" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to the list" }
                    }
                }
            }
        },
    )
}

pub fn not_found_page() -> String {
    page(
        "Not found",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Not found" }
                        p class="mt-4 text-gray-700" { "That movie is not in your list." }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn flash_banner(message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            div class="mb-6 rounded-md border border-amber-300 bg-amber-50 px-4 py-3 text-sm text-amber-800" {
                (message)
            }
        }
    }
}

fn field_error(errors: &FormErrors, field: &str) -> Markup {
    html! {
        @if let Some(message) = errors.get(field) {
            p class="mt-2 text-sm text-red-600" { (message) }
        }
    }
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start gap-5" {
                @if let Some(img_url) = &movie.img_url {
                    img class="w-16 rounded shadow-sm" src=(img_url) alt=(movie.title);
                }
                div class="flex-1" {
                    div class="flex items-start justify-between gap-4" {
                        h2 class="text-xl font-semibold text-gray-900" {
                            (movie.title)
                            @if let Some(year) = movie.year {
                                span class="ml-2 font-normal text-gray-500" { "(" (year) ")" }
                            }
                        }
                        @if let Some(rating) = movie.rating {
                            span class="rounded-full bg-blue-50 px-3 py-1 text-sm font-semibold text-blue-700" {
                                (format!("{rating:.1}"))
                            }
                        }
                    }
                    @if let Some(ranking) = movie.ranking {
                        p class="mt-1 text-sm text-gray-500" { "#" (ranking) }
                    }
                    @if let Some(review) = &movie.review {
                        p class="mt-2 text-gray-700 italic" { "\u{201c}" (review) "\u{201d}" }
                    }
                    @if let Some(description) = &movie.description {
                        p class="mt-2 text-sm text-gray-600" { (description) }
                    }
                    div class="mt-4 flex gap-4 text-sm" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/edit/{}", movie.id)) { "Edit" }
                        a class="text-red-600 hover:text-red-800" href=(format!("/delete/{}", movie.id)) { "Delete" }
                    }
                }
            }
        }
    }
}
