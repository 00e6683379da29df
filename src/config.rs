use crate::error::AppError;
use std::env;

const DEFAULT_API_URL: &str = "https://api.collegefootballdata.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("CFBD_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "CFBD_API_KEY not found in .env file".to_string(),
            )
        })?;

        let base_url = env::var("CFBD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Config { api_key, base_url })
    }
}
