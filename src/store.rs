use marquee_record::Movie;
use sea_orm::{
    DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Alias, Expr, Func, LikeExpr, SimpleExpr},
};
use tracing::debug;

use crate::{
    entities::movie,
    error::{AppError, AppResult},
};

pub const TOP_RATED_LIMIT: u64 = 10;
pub const GENRE_LIST_LIMIT: u64 = 2500;
pub const DIRECTOR_SAMPLE_LIMIT: u64 = 20;

/// Read-only queries over the movie table.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: &str) -> AppResult<Movie> {
        movie::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .map(Movie::from)
            .ok_or_else(|| AppError::not_found("Movie not found"))
    }

    pub async fn search_title(&self, title: &str) -> AppResult<Vec<Movie>> {
        let needle = needle(title)?;
        let trimmed_title =
            SimpleExpr::from(Func::cust(Alias::new("TRIM")).arg(Expr::col(movie::Column::Title)));
        let rows = movie::Entity::find()
            .filter(contains_ci(trimmed_title, &needle))
            .all(&self.db)
            .await?;
        debug!(needle = %needle, matches = rows.len(), "title search");

        non_empty(rows, || "Movie not found".to_string())
    }

    pub async fn search_actor(&self, actor: &str) -> AppResult<Vec<Movie>> {
        let needle = needle(actor)?;
        let rows = movie::Entity::find()
            .filter(contains_ci(Expr::col(movie::Column::Stars).into(), &needle))
            .all(&self.db)
            .await?;
        debug!(needle = %needle, matches = rows.len(), "actor search");

        non_empty(rows, || format!("No movies found for actor '{}'", actor.trim()))
    }

    pub async fn search_director(&self, director: &str) -> AppResult<Vec<Movie>> {
        let needle = needle(director)?;
        let rows = movie::Entity::find()
            .filter(contains_ci(Expr::col(movie::Column::Directors).into(), &needle))
            .all(&self.db)
            .await?;
        debug!(needle = %needle, matches = rows.len(), "director search");

        non_empty(rows, || format!("No movies found for director '{}'", director.trim()))
    }

    /// At most [`GENRE_LIST_LIMIT`] movies whose genres mention `genre`.
    pub async fn list_genre(&self, genre: &str) -> AppResult<Vec<Movie>> {
        let needle = needle(genre)?;
        // the cap only ever shrinks a non-empty result, so checking emptiness
        // after it is the same as checking before
        let rows = movie::Entity::find()
            .filter(contains_ci(Expr::col(movie::Column::Genres).into(), &needle))
            .limit(GENRE_LIST_LIMIT)
            .all(&self.db)
            .await?;
        debug!(needle = %needle, matches = rows.len(), "genre listing");

        non_empty(rows, || format!("No movies found in genre '{}'", genre.trim()))
    }

    /// One movie picked uniformly at random among those matching `genre`.
    pub async fn random_in_genre(&self, genre: &str) -> AppResult<Movie> {
        let needle = needle(genre)?;
        let picked = movie::Entity::find()
            .filter(contains_ci(Expr::col(movie::Column::Genres).into(), &needle))
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .one(&self.db)
            .await?;
        debug!(needle = %needle, id = ?picked.as_ref().map(|m| &m.id), "random genre pick");

        picked.map(Movie::from).ok_or_else(|| {
            AppError::not_found(format!("No movies found in genre '{}'", genre.trim()))
        })
    }

    /// Highest rated first; unrated rows sort after every rated one.
    pub async fn top_rated(&self) -> AppResult<Vec<Movie>> {
        let rows = movie::Entity::find()
            .order_by(Expr::col(movie::Column::Rating).is_null(), Order::Asc)
            .order_by_desc(movie::Column::Rating)
            .limit(TOP_RATED_LIMIT)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    pub async fn count(&self) -> AppResult<u64> {
        Ok(movie::Entity::find().count(&self.db).await?)
    }

    /// Raw `directors` values of the first rows in store order.
    pub async fn sample_directors(&self) -> AppResult<Vec<Option<String>>> {
        Ok(movie::Entity::find()
            .select_only()
            .column(movie::Column::Directors)
            .limit(DIRECTOR_SAMPLE_LIMIT)
            .into_tuple()
            .all(&self.db)
            .await?)
    }
}

/// Normalizes a free-text argument: trimmed, ASCII lower-cased, never blank.
///
/// SQLite's `LOWER()` only folds ASCII, so the needle must fold the same way.
fn needle(input: &str) -> AppResult<String> {
    let needle = input.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Err(AppError::BadRequest("search text must not be blank".to_string()));
    }
    Ok(needle)
}

/// `LOWER(expr) LIKE '%needle%'` with the needle's wildcards taken literally.
fn contains_ci(expr: SimpleExpr, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(expr)).like(LikeExpr::new(contains_pattern(needle)).escape('\\'))
}

fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn non_empty(rows: Vec<movie::Model>, detail: impl FnOnce() -> String) -> AppResult<Vec<Movie>> {
    if rows.is_empty() {
        return Err(AppError::NotFound(detail()));
    }
    Ok(rows.into_iter().map(Movie::from).collect())
}
