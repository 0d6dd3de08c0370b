use std::time::Duration;

use anyhow::Context;
use marquee_record::{ErrorBody, HealthReport, Movie};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{BotError, BotResult};

/// HTTP client for the movie query service.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Fails only on local setup problems (TLS backend, bad settings), never
    /// because the service is down.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("marquee-bot/0.1")
            .timeout(timeout)
            .build()
            .context("building http client")?;
        Ok(Self { http, base_url: base_url.into().trim_end_matches('/').to_string() })
    }

    pub async fn search_title(&self, title: &str) -> BotResult<Vec<Movie>> {
        self.get_json(&format!("/items/title/{}", urlencoding::encode(title))).await
    }

    pub async fn search_actor(&self, actor: &str) -> BotResult<Vec<Movie>> {
        self.get_json(&format!("/items/actor/{}", urlencoding::encode(actor))).await
    }

    pub async fn search_director(&self, director: &str) -> BotResult<Vec<Movie>> {
        self.get_json(&format!("/items/director/{}", urlencoding::encode(director))).await
    }

    pub async fn list_genre(&self, genre: &str) -> BotResult<Vec<Movie>> {
        self.get_json(&format!("/items/genre/{}", urlencoding::encode(genre))).await
    }

    pub async fn random_in_genre(&self, genre: &str) -> BotResult<Movie> {
        self.get_json(&format!("/items/bygenre/{}", urlencoding::encode(genre))).await
    }

    pub async fn top_rated(&self) -> BotResult<Vec<Movie>> {
        self.get_json("/items/").await
    }

    pub async fn health(&self) -> BotResult<HealthReport> {
        self.get_json("/health").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> BotResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "querying movie service");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(BotError::NotFound(detail_of(&body)));
        }
        if !status.is_success() {
            return Err(BotError::Upstream { status, detail: detail_of(&body) });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

fn detail_of(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.detail)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned())
}
