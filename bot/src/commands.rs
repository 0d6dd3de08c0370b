use std::str::FromStr;

use marquee_record::Movie;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::prelude::Context;
use tracing::{debug, warn};

use crate::{
    api::ApiClient,
    error::{BotError, BotResult},
    format,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovieCommand {
    SearchTitle,
    Details,
    SearchGenre,
    SearchDirector,
    SearchActor,
    RandomInGenre,
    TopRated,
}

impl FromStr for MovieCommand {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stitle" => Ok(MovieCommand::SearchTitle),
            "moviedetails" => Ok(MovieCommand::Details),
            "sgenre" => Ok(MovieCommand::SearchGenre),
            "sdirector" => Ok(MovieCommand::SearchDirector),
            "sactor" => Ok(MovieCommand::SearchActor),
            "genrerandom" => Ok(MovieCommand::RandomInGenre),
            "toprated" => Ok(MovieCommand::TopRated),
            _ => Err(()),
        }
    }
}

impl MovieCommand {
    pub const ALL: [MovieCommand; 7] = [
        MovieCommand::SearchTitle,
        MovieCommand::Details,
        MovieCommand::SearchGenre,
        MovieCommand::SearchDirector,
        MovieCommand::SearchActor,
        MovieCommand::RandomInGenre,
        MovieCommand::TopRated,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MovieCommand::SearchTitle => "stitle",
            MovieCommand::Details => "moviedetails",
            MovieCommand::SearchGenre => "sgenre",
            MovieCommand::SearchDirector => "sdirector",
            MovieCommand::SearchActor => "sactor",
            MovieCommand::RandomInGenre => "genrerandom",
            MovieCommand::TopRated => "toprated",
        }
    }

    fn description(self) -> &'static str {
        match self {
            MovieCommand::SearchTitle => "Shows all movies that match the given title",
            MovieCommand::Details => "Shows all details for a given movie",
            MovieCommand::SearchGenre => "Shows top movies within a given genre",
            MovieCommand::SearchDirector => "Shows top movies for a given director",
            MovieCommand::SearchActor => "Shows top movies for a given actor",
            MovieCommand::RandomInGenre => {
                "Returns details for a random movie within a given genre"
            },
            MovieCommand::TopRated => "Shows the ten highest rated movies",
        }
    }

    /// The single free-text option, if the command takes one.
    pub fn argument(self) -> Option<&'static str> {
        match self {
            MovieCommand::SearchTitle | MovieCommand::Details => Some("title"),
            MovieCommand::SearchGenre | MovieCommand::RandomInGenre => Some("genre"),
            MovieCommand::SearchDirector => Some("director"),
            MovieCommand::SearchActor => Some("actor"),
            MovieCommand::TopRated => None,
        }
    }

    pub fn register(self) -> CreateCommand {
        let command = CreateCommand::new(self.name()).description(self.description());
        let Some(arg) = self.argument() else {
            return command;
        };
        command.add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                arg,
                format!("The {arg} to search for"),
            )
            .required(true),
        )
    }

    /// Fetches from the query service and renders the reply.
    pub async fn execute(self, api: &ApiClient, arg: &str) -> BotResult<CreateEmbed> {
        let arg = arg.trim();
        if let Some(what) = self.argument() {
            if arg.is_empty() {
                return Err(BotError::MissingArgument(what));
            }
        }

        let embed = match self {
            MovieCommand::SearchTitle => {
                let movies = or_empty(api.search_title(arg).await)?;
                format::ranked_embed(format::list_title(arg), movies)
            },
            MovieCommand::SearchGenre => {
                let movies = or_empty(api.list_genre(arg).await)?;
                format::ranked_embed(format::list_title(arg), movies)
            },
            MovieCommand::SearchDirector => {
                let movies = or_empty(api.search_director(arg).await)?;
                format::ranked_embed(format::list_title(arg), movies)
            },
            MovieCommand::SearchActor => {
                let movies = or_empty(api.search_actor(arg).await)?;
                format::ranked_embed(format::list_title(arg), movies)
            },
            MovieCommand::TopRated => {
                format::ranked_embed("Top 10 Movies".to_string(), api.top_rated().await?)
            },
            MovieCommand::Details => {
                let matches = or_empty(api.search_title(arg).await)?;
                match format::rank_by_rating(matches).first() {
                    Some(best) => format::detail_embed(best),
                    None => format::no_results_embed(arg),
                }
            },
            MovieCommand::RandomInGenre => match api.random_in_genre(arg).await {
                Ok(movie) => format::detail_embed(&movie),
                Err(BotError::NotFound(_)) => format::no_results_embed(arg),
                Err(err) => return Err(err),
            },
        };
        Ok(embed)
    }
}

/// A 404 from a search is an empty result, not a failure.
fn or_empty(result: BotResult<Vec<Movie>>) -> BotResult<Vec<Movie>> {
    match result {
        Err(BotError::NotFound(detail)) => {
            debug!(detail = %detail, "search matched nothing");
            Ok(Vec::new())
        },
        other => other,
    }
}

/// Acknowledges the command, then posts the result (or a readable error) as a
/// follow-up.
pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, api: &ApiClient) {
    let Ok(command) = MovieCommand::from_str(&interaction.data.name) else {
        warn!(name = %interaction.data.name, "unknown command");
        return;
    };
    let arg = interaction
        .data
        .options
        .first()
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default()
        .trim()
        .to_string();

    let ack = if command.argument().is_some() {
        format!("Now searching {arg}")
    } else {
        "Fetching the top rated movies".to_string()
    };
    let response =
        CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(ack));
    if let Err(err) = interaction.create_response(&ctx.http, response).await {
        warn!(command = command.name(), error = %err, "failed to acknowledge command");
        return;
    }

    let followup = match command.execute(api, &arg).await {
        Ok(embed) => CreateInteractionResponseFollowup::new().embed(embed),
        Err(err) => {
            warn!(command = command.name(), arg = %arg, error = %err, "command failed");
            CreateInteractionResponseFollowup::new().content(err.user_message())
        },
    };
    if let Err(err) = interaction.create_followup(&ctx.http, followup).await {
        warn!(command = command.name(), error = %err, "failed to post result");
    }
}
