use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// The query service answered 404.
    #[error("not found: {0}")]
    NotFound(String),
    #[error("query service unreachable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),
    #[error("query service returned {status}: {detail}")]
    Upstream { status: StatusCode, detail: String },
    #[error("unexpected response from query service: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("missing {0}")]
    MissingArgument(&'static str),
}

impl BotError {
    /// Text shown in chat when a command fails.
    pub fn user_message(&self) -> String {
        match self {
            BotError::NotFound(_) => "No movies found.".to_string(),
            BotError::UpstreamUnavailable(err) if err.is_timeout() => {
                "The movie service took too long to answer. Try again in a moment.".to_string()
            },
            BotError::UpstreamUnavailable(_) => {
                "The movie service is unavailable right now. Try again later.".to_string()
            },
            BotError::Upstream { status, .. } => {
                format!("The movie service returned an error ({}).", status.as_u16())
            },
            BotError::MalformedResponse(_) => {
                "The movie service sent a response I could not read.".to_string()
            },
            BotError::MissingArgument(what) => format!("Please give me a {what} to search for."),
        }
    }
}

pub type BotResult<T> = Result<T, BotError>;
