use crate::config::Config;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints::{GAMES_ENDPOINT, TEAM_STATS_ENDPOINT, WEATHER_ENDPOINT};
use super::models::*;

pub struct CfbdClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl CfbdClient {
    pub fn new(config: Config) -> Self {
        // Stay well under the CFBD free-tier throttle
        let rate_limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::new(5).unwrap()));
        CfbdClient {
            config,
            rate_limiter,
        }
    }

    fn execute_request(&self, path: &str, query: &[(&str, String)]) -> Result<String, AppError> {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(50));
        }

        let mut retry_count = 0;
        const MAX_RETRIES: u32 = 3;

        loop {
            let url = format!("{}{}", self.config.base_url, path);
            let mut request = ureq::get(&url)
                .set("Authorization", &format!("Bearer {}", self.config.api_key))
                .set("User-Agent", "cfb_trends/0.1.0");
            for (key, value) in query {
                request = request.query(key, value);
            }

            match request.call() {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| {
                        AppError::HttpError(e.to_string())
                    });
                }
                Err(ureq::Error::Status(429, _)) => {
                    // Throttled - wait and retry
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(ureq::Error::Status(401, _)) => {
                    return Err(AppError::ConfigError(
                        "CFBD_API_KEY was rejected by the API".to_string(),
                    ));
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    pub fn get_games(
        &self,
        year: u32,
        team: &str,
        season_type: &str,
    ) -> Result<Vec<RawGame>, AppError> {
        let query = [
            ("year", year.to_string()),
            ("team", team.to_string()),
            ("seasonType", season_type.to_string()),
        ];

        let body = self.execute_request(GAMES_ENDPOINT, &query)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })
    }

    pub fn get_weather(&self, year: u32, team: &str) -> Result<Vec<RawWeather>, AppError> {
        let query = [("year", year.to_string()), ("team", team.to_string())];

        let body = self.execute_request(WEATHER_ENDPOINT, &query)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })
    }

    pub fn get_game_stats(
        &self,
        year: u32,
        game_id: u64,
    ) -> Result<Vec<GameTeamStatsDto>, AppError> {
        let query = [("year", year.to_string()), ("gameId", game_id.to_string())];

        let body = self.execute_request(TEAM_STATS_ENDPOINT, &query)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })
    }
}
