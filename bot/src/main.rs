use anyhow::Context;
use marquee_bot::{api::ApiClient, config::Config, handler::Handler};
use serenity::model::id::GuildId;
use serenity::prelude::{Client, GatewayIntents};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,marquee_bot=debug,serenity=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let api = ApiClient::new(&config.api_base_url, config.api_timeout)?;
    let url = &config.api_base_url;
    match api.health().await {
        Ok(health) => {
            tracing::info!(movie_count = health.count, url = %url, "query service reachable")
        },
        Err(err) => tracing::warn!(error = %err, url = %url, "query service not reachable yet"),
    }

    let handler = Handler { api, guild_id: config.guild_id.map(|id| GuildId::new(id.get())) };

    let mut client = Client::builder(&config.discord_token, GatewayIntents::GUILDS)
        .event_handler(handler)
        .await
        .context("building discord client")?;

    client.start().await.context("discord client stopped")?;

    Ok(())
}
