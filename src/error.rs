use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API error: {0}")]
    #[allow(dead_code)]
    ApiError(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("Team not found in schedule data: {0}")]
    TeamNotFound(String),

    #[error("No games found for {team} in {year}")]
    NoGames { team: String, year: u32 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Export error: {0}")]
    ExportError(String),
}
