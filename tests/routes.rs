use std::{collections::HashSet, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use marquee::{
    AppState, db,
    entities::movie,
    router,
    store::{GENRE_LIST_LIMIT, MovieStore},
};
use marquee_record::{ErrorBody, HealthReport, Movie};
use sea_orm::{ConnectionTrait, EntityTrait, Schema, Set};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

fn row(id: &str, title: &str, rating: Option<f64>, genres: &str) -> movie::ActiveModel {
    movie::ActiveModel {
        id: Set(id.to_string()),
        title: Set(Some(title.to_string())),
        year: Set(Some(2000)),
        duration: Set(Some("2h 0m".to_string())),
        rating: Set(rating),
        genres: Set(Some(genres.to_string())),
        ..Default::default()
    }
}

fn catalogue() -> Vec<movie::ActiveModel> {
    let mut interstellar =
        row("tt0816692", "Interstellar", Some(8.7), "['Adventure', 'Drama', 'Sci-Fi']");
    interstellar.directors = Set(Some("['Christopher Nolan']".to_string()));
    interstellar.stars = Set(Some("['Matthew McConaughey', 'Anne Hathaway']".to_string()));

    let mut prestige =
        row("tt0482571", "  The Prestige ", Some(8.5), "['Drama', 'Mystery', 'Sci-Fi']");
    prestige.directors = Set(Some("['Christopher Nolan']".to_string()));
    prestige.stars = Set(Some("['Christian Bale', 'Hugh Jackman']".to_string()));

    let mut arrival = row("tt2543164", "Arrival", Some(7.9), "['Drama', 'Sci-Fi']");
    arrival.directors = Set(Some("['Denis Villeneuve']".to_string()));
    arrival.stars = Set(Some("['Amy Adams', 'Jeremy Renner']".to_string()));

    let mut unrated = row("tt9999999", "Unrated Sci-Fi Short", None, "['Sci-Fi', 'Short']");
    unrated.directors = Set(None);

    let airplane = row("tt0080339", "Airplane!", Some(7.7), "['Comedy']");

    vec![interstellar, prestige, arrival, unrated, airplane]
}

async fn app_with(rows: Vec<movie::ActiveModel>) -> Router {
    let db = db::connect("sqlite::memory:", 1, false).await.unwrap();
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(movie::Entity))).await.unwrap();
    for r in rows {
        movie::Entity::insert(r).exec_without_returning(&db).await.unwrap();
    }
    router(Arc::new(AppState { store: MovieStore::new(db) }))
}

async fn get<T: DeserializeOwned>(app: &Router, uri: &str) -> (StatusCode, T) {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("{uri}: bad body {e}: {}", String::from_utf8_lossy(&bytes)));
    (status, body)
}

#[tokio::test]
async fn get_by_id_returns_exactly_that_movie() {
    let app = app_with(catalogue()).await;

    let (status, movie): (_, Movie) = get(&app, "/items/tt2543164").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movie.id, "tt2543164");
    assert_eq!(movie.title.as_deref(), Some("Arrival"));

    let (status, err): (_, ErrorBody) = get(&app, "/items/tt0000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err.detail, "Movie not found");
}

#[tokio::test]
async fn title_search_is_trimmed_and_case_insensitive() {
    let app = app_with(catalogue()).await;

    let (status, movies): (_, Vec<Movie>) = get(&app, "/items/title/%20%20interSTELLAR%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title.as_deref(), Some("Interstellar"));

    let (status, movies): (_, Vec<Movie>) = get(&app, "/items/title/prest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movies[0].id, "tt0482571");
}

#[tokio::test]
async fn title_search_matches_non_ascii_titles_as_typed() {
    let mut rows = catalogue();
    rows.push(row("tt0861739", "Élite Squad", Some(8.0), "['Action', 'Crime']"));
    let app = app_with(rows).await;

    let (status, movies): (_, Vec<Movie>) = get(&app, "/items/title/%C3%89lite%20Squad").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movies[0].id, "tt0861739");

    let (status, movies): (_, Vec<Movie>) = get(&app, "/items/title/%C3%89LITE%20squad").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movies[0].id, "tt0861739");
}

#[tokio::test]
async fn title_search_treats_wildcards_literally() {
    let app = app_with(catalogue()).await;

    let (status, _): (_, ErrorBody) = get(&app, "/items/title/%25").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _): (_, ErrorBody) = get(&app, "/items/title/_").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_search_text_is_rejected() {
    let app = app_with(catalogue()).await;

    let (status, err): (_, ErrorBody) = get(&app, "/items/actor/%20%20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err.detail.contains("blank"));
}

#[tokio::test]
async fn actor_and_director_search_match_substrings() {
    let app = app_with(catalogue()).await;

    let (status, movies): (_, Vec<Movie>) = get(&app, "/items/actor/hathaway").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movies.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), ["tt0816692"]);

    let (status, movies): (_, Vec<Movie>) = get(&app, "/items/director/NOLAN").await;
    assert_eq!(status, StatusCode::OK);
    let ids: HashSet<_> = movies.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, HashSet::from(["tt0816692", "tt0482571"]));

    let (status, err): (_, ErrorBody) = get(&app, "/items/director/kubrick").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err.detail, "No movies found for director 'kubrick'");
}

#[tokio::test]
async fn genre_listing_only_returns_matching_genres() {
    let app = app_with(catalogue()).await;

    let (status, movies): (_, Vec<Movie>) = get(&app, "/items/genre/sci-fi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movies.len(), 4);
    for m in &movies {
        assert!(m.genres.as_deref().unwrap().to_lowercase().contains("sci-fi"));
    }

    let (status, err): (_, ErrorBody) = get(&app, "/items/genre/western").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err.detail, "No movies found in genre 'western'");
}

#[tokio::test]
async fn genre_listing_is_capped() {
    let westerns = (0..GENRE_LIST_LIMIT + 100)
        .map(|i| row(&format!("tt{i:07}"), &format!("Western {i}"), Some(6.0), "['Western']"))
        .collect();
    let app = app_with(westerns).await;

    let (status, movies): (_, Vec<Movie>) = get(&app, "/items/genre/western").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movies.len() as u64, GENRE_LIST_LIMIT);
}

#[tokio::test]
async fn random_pick_stays_in_genre_and_varies() {
    let app = app_with(catalogue()).await;

    let mut seen = HashSet::new();
    for _ in 0..60 {
        let (status, movie): (_, Movie) = get(&app, "/items/bygenre/Drama").await;
        assert_eq!(status, StatusCode::OK);
        assert!(movie.genres.as_deref().unwrap().contains("Drama"));
        seen.insert(movie.id);
    }
    assert!(seen.len() > 1, "sixty picks over three dramas all returned {seen:?}");

    let (status, _): (_, ErrorBody) = get(&app, "/items/bygenre/western").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn top_rated_is_sorted_capped_and_puts_unrated_last() {
    let mut rows = catalogue();
    for i in 0..12 {
        let rating = Some(5.0 + i as f64 / 10.0);
        rows.push(row(&format!("tt10000{i:02}"), &format!("Filler {i}"), rating, "['Drama']"));
    }
    let app = app_with(rows).await;

    let (status, movies): (_, Vec<Movie>) = get(&app, "/items/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movies.len(), 10);
    assert_eq!(movies[0].id, "tt0816692");
    assert!(movies.iter().all(|m| m.rating.is_some()));
    assert!(movies.windows(2).all(|w| w[0].rating >= w[1].rating));

    let (_, without_slash): (_, Vec<Movie>) = get(&app, "/items").await;
    assert_eq!(without_slash.len(), 10);
}

#[tokio::test]
async fn top_rated_on_empty_store_is_an_empty_list() {
    let app = app_with(vec![]).await;

    let (status, movies): (_, Vec<Movie>) = get(&app, "/items/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(movies.is_empty());

    let (_, health): (_, HealthReport) = get(&app, "/health").await;
    assert_eq!(health.count, 0);
}

#[tokio::test]
async fn health_reports_row_count() {
    let app = app_with(catalogue()).await;

    let (status, health): (_, HealthReport) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health, HealthReport { count: 5 });
}

#[tokio::test]
async fn responses_emit_nulls_instead_of_omitting_fields() {
    let app = app_with(catalogue()).await;

    let (_, value): (_, serde_json::Value) = get(&app, "/items/tt9999999").await;
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 24);
    assert!(obj["rating"].is_null());
    assert!(obj["directors"].is_null());
    assert!(obj.contains_key("MPA"));
}

#[tokio::test]
async fn debug_directors_returns_raw_values() {
    let app = app_with(catalogue()).await;

    let (status, directors): (_, Vec<Option<String>>) = get(&app, "/debug/directors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(directors.len(), 5);
    assert!(directors.contains(&Some("['Denis Villeneuve']".to_string())));
    assert!(directors.contains(&None));
}

#[tokio::test]
async fn unknown_paths_get_a_json_not_found() {
    let app = app_with(vec![]).await;

    let (status, err): (_, ErrorBody) = get(&app, "/movies/actor/bale").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err.detail, "Not Found");
}
