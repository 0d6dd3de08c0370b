//! Turning query results into chat messages.
//!
//! Everything here is pure: the command layer fetches, this module decides what
//! the user sees.

use marquee_record::Movie;
use serenity::builder::CreateEmbed;

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_RESULTS: &str = "No movies found.";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const LIST_FIELD_NAME: &str = "Name - Length - Rating - Director";
pub const LIST_LEN: usize = 10;

// Discord embed limits, counted in characters.
const TITLE_LIMIT: usize = 256;
const FIELD_VALUE_LIMIT: usize = 1024;
const DESCRIPTION_LIMIT: usize = 4096;

/// Stable sort by rating, highest first, counting a missing rating as `0.0`.
/// The records themselves are left as they came.
pub fn rank_by_rating(mut movies: Vec<Movie>) -> Vec<Movie> {
    movies.sort_by(|a, b| ranking_score(b).total_cmp(&ranking_score(a)));
    movies
}

/// The rating used for ordering and shown in ranked lists.
fn ranking_score(movie: &Movie) -> f64 {
    movie.rating.unwrap_or(0.0)
}

pub fn top_ten(movies: Vec<Movie>) -> Vec<Movie> {
    let mut ranked = rank_by_rating(movies);
    ranked.truncate(LIST_LEN);
    ranked
}

/// A movie with its multi-value fields split once, ready for rendering.
pub struct MovieCard<'a> {
    pub movie: &'a Movie,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
    pub stars: Vec<String>,
    pub genres: Vec<String>,
    pub countries: Vec<String>,
    pub locations: Vec<String>,
    pub companies: Vec<String>,
    pub languages: Vec<String>,
}

impl<'a> From<&'a Movie> for MovieCard<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            movie,
            directors: movie.director_list(),
            writers: movie.writer_list(),
            stars: movie.star_list(),
            genres: movie.genre_list(),
            countries: movie.country_list(),
            locations: movie.location_list(),
            companies: movie.company_list(),
            languages: movie.language_list(),
        }
    }
}

/// `**1.** Title - Duration - Rating - Director, Director` for each movie, in
/// the order given. An unrated movie shows the `0.0` it was ranked with.
pub fn ranked_lines(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let card = MovieCard::from(movie);
            format!(
                "**{}.** {} - {} - {} - {}",
                i + 1,
                or_na(movie.title.clone()),
                or_na(movie.duration.clone()),
                display_float(ranking_score(movie)),
                or_na(joined(&card.directors)),
            )
        })
        .collect()
}

pub fn list_title(query: &str) -> String {
    clip(&format!("Top 10 '{query}' Movies"), TITLE_LIMIT)
}

/// Embed listing the ten best rated of `movies`.
pub fn ranked_embed(title: String, movies: Vec<Movie>) -> CreateEmbed {
    let embed = CreateEmbed::new().title(title);
    let top = top_ten(movies);
    if top.is_empty() {
        return embed.description(NO_RESULTS);
    }
    let value = join_within(&ranked_lines(&top), "\n\n", FIELD_VALUE_LIMIT);
    embed.field(LIST_FIELD_NAME, value, false)
}

pub fn no_results_embed(query: &str) -> CreateEmbed {
    CreateEmbed::new().title(clip(&format!("'{query}'"), TITLE_LIMIT)).description(NO_RESULTS)
}

pub fn detail_embed(movie: &Movie) -> CreateEmbed {
    CreateEmbed::new()
        .title(clip(movie.title.as_deref().unwrap_or(NOT_AVAILABLE), TITLE_LIMIT))
        .description(clip(&detail_text(movie), DESCRIPTION_LIMIT))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// `**Label:** value`
    Inline,
    /// Inline, after a blank line.
    Section,
    /// Blank line, `**Label:**`, value on its own line.
    Block,
}

struct DetailField {
    label: &'static str,
    value: fn(&MovieCard<'_>) -> Option<String>,
    missing: &'static str,
    layout: Layout,
}

const DETAIL_FIELDS: &[DetailField] = &[
    DetailField {
        label: "Title",
        value: |c| c.movie.title.clone(),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Year",
        value: |c| c.movie.year.map(|y| y.to_string()),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Duration",
        value: |c| c.movie.duration.clone(),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "MPA Rating",
        value: |c| c.movie.mpa.clone(),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "IMDb Rating",
        value: |c| c.movie.rating.map(display_float),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Votes",
        value: |c| c.movie.votes.clone(),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Metascore",
        value: |c| c.movie.meta_score.map(display_float),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Description",
        value: |c| c.movie.description.clone(),
        missing: NO_DESCRIPTION,
        layout: Layout::Block,
    },
    DetailField {
        label: "Link",
        value: |c| c.movie.movie_link.clone(),
        missing: NOT_AVAILABLE,
        layout: Layout::Section,
    },
    DetailField {
        label: "Writers",
        value: |c| joined(&c.writers),
        missing: NOT_AVAILABLE,
        layout: Layout::Section,
    },
    DetailField {
        label: "Directors",
        value: |c| joined(&c.directors),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Stars",
        value: |c| joined(&c.stars),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Budget",
        value: |c| c.movie.budget.clone(),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Opening Weekend Gross",
        value: |c| c.movie.opening_weekend_gross.clone(),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Worldwide Gross",
        value: |c| c.movie.gross_worldwide.clone(),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "US/Canada Gross",
        value: |c| c.movie.gross_us_canada.clone(),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Release Date",
        value: |c| c.movie.release_date.map(display_float),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Countries of Origin",
        value: |c| joined(&c.countries),
        missing: NOT_AVAILABLE,
        layout: Layout::Section,
    },
    DetailField {
        label: "Filming Locations",
        value: |c| joined(&c.locations),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Production Companies",
        value: |c| joined(&c.companies),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Awards",
        value: |c| c.movie.awards_content.clone(),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Genres",
        value: |c| joined(&c.genres),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
    DetailField {
        label: "Languages",
        value: |c| joined(&c.languages),
        missing: NOT_AVAILABLE,
        layout: Layout::Inline,
    },
];

/// Every displayed field as `(label, value)`, with the field's placeholder in
/// place of anything missing.
pub fn detail_lines(movie: &Movie) -> Vec<(&'static str, String)> {
    let card = MovieCard::from(movie);
    DETAIL_FIELDS
        .iter()
        .map(|f| (f.label, (f.value)(&card).unwrap_or_else(|| f.missing.to_string())))
        .collect()
}

pub fn detail_text(movie: &Movie) -> String {
    let mut out = String::new();
    for (field, (label, value)) in DETAIL_FIELDS.iter().zip(detail_lines(movie)) {
        if !out.is_empty() {
            out.push('\n');
            if field.layout != Layout::Inline {
                out.push('\n');
            }
        }
        match field.layout {
            Layout::Block => out.push_str(&format!("**{label}:**\n{value}")),
            Layout::Inline | Layout::Section => out.push_str(&format!("**{label}:** {value}")),
        }
    }
    out
}

fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn joined(items: &[String]) -> Option<String> {
    (!items.is_empty()).then(|| items.join(", "))
}

/// Whole numbers keep one decimal (`9.0`), everything else prints as is.
fn display_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Joins whole lines until the next one would pass `limit` characters.
fn join_within(lines: &[String], sep: &str, limit: usize) -> String {
    let mut out = String::new();
    let mut len = 0;
    for line in lines {
        let extra = line.chars().count() + if out.is_empty() { 0 } else { sep.chars().count() };
        if len + extra > limit {
            break;
        }
        if !out.is_empty() {
            out.push_str(sep);
        }
        out.push_str(line);
        len += extra;
    }
    if out.is_empty() {
        if let Some(first) = lines.first() {
            return clip(first, limit);
        }
    }
    out
}

fn clip(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit.saturating_sub(1)).collect();
    out.push('…');
    out
}
