//! Wire types shared by the query service and the chat client.

use serde::{Deserialize, Serialize};

/// One movie row as it crosses the HTTP boundary.
///
/// Only `id` is guaranteed. Every other field serializes as `null` when absent
/// and may be missing on input. Multi-value fields (`writers`, `directors`,
/// `stars`, `genres`, ...) carry the store's flat delimited string verbatim; use
/// [`split_list`] or the `*_list` accessors to get at the elements.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: Option<String>,
    pub year: Option<i32>,
    pub duration: Option<String>,
    #[serde(rename = "MPA")]
    pub mpa: Option<String>,
    pub rating: Option<f64>,
    pub votes: Option<String>,
    pub meta_score: Option<f64>,
    pub description: Option<String>,
    pub movie_link: Option<String>,
    pub writers: Option<String>,
    pub directors: Option<String>,
    pub stars: Option<String>,
    pub budget: Option<String>,
    pub opening_weekend_gross: Option<String>,
    pub gross_worldwide: Option<String>,
    pub gross_us_canada: Option<String>,
    pub release_date: Option<f64>,
    pub countries_origin: Option<String>,
    pub filming_locations: Option<String>,
    pub production_companies: Option<String>,
    pub awards_content: Option<String>,
    pub genres: Option<String>,
    pub languages: Option<String>,
}

impl Movie {
    pub fn director_list(&self) -> Vec<String> {
        list_of(&self.directors)
    }

    pub fn writer_list(&self) -> Vec<String> {
        list_of(&self.writers)
    }

    pub fn star_list(&self) -> Vec<String> {
        list_of(&self.stars)
    }

    pub fn genre_list(&self) -> Vec<String> {
        list_of(&self.genres)
    }

    pub fn country_list(&self) -> Vec<String> {
        list_of(&self.countries_origin)
    }

    pub fn location_list(&self) -> Vec<String> {
        list_of(&self.filming_locations)
    }

    pub fn company_list(&self) -> Vec<String> {
        list_of(&self.production_companies)
    }

    pub fn language_list(&self) -> Vec<String> {
        list_of(&self.languages)
    }
}

fn list_of(field: &Option<String>) -> Vec<String> {
    field.as_deref().map(split_list).unwrap_or_default()
}

/// Splits a flat multi-value string into its elements.
///
/// Accepts the bracketed, quoted form the dataset was exported with
/// (`['Christopher Nolan', 'Jonathan Nolan']`) as well as a bare
/// comma-separated list (`Drama, Sci-Fi`). Commas inside a quoted element do
/// not split it. Elements are trimmed and empty elements are dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    let mut inner = raw.trim();
    if let Some(stripped) = inner.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        inner = stripped;
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in inner.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == ',' => {
                push_item(&mut items, &current);
                current.clear();
            },
            // a quote only opens an element; apostrophes mid-name stay literal
            None if (ch == '\'' || ch == '"') && current.trim().is_empty() => {
                current.clear();
                quote = Some(ch);
            },
            None => current.push(ch),
        }
    }
    push_item(&mut items, &current);

    items
}

fn push_item(items: &mut Vec<String>, item: &str) {
    let item = item.trim();
    if !item.is_empty() {
        items.push(item.to_string());
    }
}

/// Body of `GET /health`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub count: u64,
}

/// Body of every non-2xx response from the query service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
