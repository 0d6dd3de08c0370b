use serenity::async_trait;
use serenity::builder::CreateCommand;
use serenity::model::application::{Command, Interaction};
use serenity::model::{gateway::Ready, id::GuildId};
use serenity::prelude::{Context, EventHandler};
use tracing::{info, warn};

use crate::{api::ApiClient, commands};

pub struct Handler {
    pub api: ApiClient,
    /// Register on one guild (instant) instead of globally (cached by Discord).
    pub guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            commands::run_slash(&ctx, &command, &self.api).await;
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, "connected to discord");

        let to_register: Vec<CreateCommand> =
            commands::MovieCommand::ALL.into_iter().map(|c| c.register()).collect();
        let registered = match self.guild_id {
            Some(guild_id) => guild_id.set_commands(&ctx.http, to_register).await,
            None => Command::set_global_commands(&ctx.http, to_register).await,
        };
        match registered {
            Ok(commands) => {
                info!(count = commands.len(), guild = ?self.guild_id, "registered slash commands")
            },
            Err(err) => warn!(error = %err, "failed to register slash commands"),
        }
    }
}
