use std::{num::NonZeroU64, time::Duration};

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub discord_token: String,
    pub api_base_url: String,
    pub api_timeout: Duration,
    /// Register commands on this guild only; global registration otherwise.
    pub guild_id: Option<NonZeroU64>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let discord_token = var("DISCORD_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .context("DISCORD_TOKEN is not set")?;

        let api_base_url =
            var("API_BASE_URL").unwrap_or_else(|| "http://localhost:8000".to_string());

        let api_timeout_secs: u64 =
            var("API_TIMEOUT_SECS").and_then(|s| s.parse().ok()).unwrap_or(10);

        let guild_id = match var("GUILD_ID") {
            Some(raw) if !raw.trim().is_empty() => Some(raw.trim().parse().context("GUILD_ID")?),
            _ => None,
        };

        Ok(Self {
            discord_token,
            api_base_url,
            api_timeout: Duration::from_secs(api_timeout_secs.max(1)),
            guild_id,
        })
    }
}
