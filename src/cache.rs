use crate::api::models::{RawGame, RawTeamGameStat, RawWeather};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Cached season payloads go stale after an hour.
pub const CACHE_TTL_MINUTES: u64 = 60;

/// One season's raw API payloads for one team. Raw records are cached rather
/// than processed ones so the pipeline always recomputes from source shapes.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonCache {
    pub team: String,
    pub year: u32,
    pub fetched_at: DateTime<Utc>,
    pub games: Vec<RawGame>,
    pub weather: Vec<RawWeather>,
    pub stats: Vec<RawTeamGameStat>,
}

impl SeasonCache {
    pub fn new(team: &str, year: u32) -> Self {
        SeasonCache {
            team: team.to_string(),
            year,
            fetched_at: Utc::now(),
            games: Vec::new(),
            weather: Vec::new(),
            stats: Vec::new(),
        }
    }

    pub fn get_cache_path(team: &str, year: u32) -> PathBuf {
        let cache_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cfb_trends");

        let _ = fs::create_dir_all(&cache_dir);

        cache_dir.join(format!("{}_{}.json", team.replace(' ', "_"), year))
    }

    pub fn load(team: &str, year: u32) -> Result<Self, AppError> {
        let path = Self::get_cache_path(team, year);

        match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| {
                    AppError::JsonError(format!("Failed to parse cache: {}", e))
                })
            }
            Err(_) => {
                // Cache doesn't exist yet, return empty
                Ok(SeasonCache::new(team, year))
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::get_cache_path(&self.team, self.year);
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::JsonError(format!("Failed to serialize cache: {}", e))
        })?;

        fs::write(&path, json).map_err(|e| {
            AppError::JsonError(format!("Failed to write cache: {}", e))
        })?;

        Ok(())
    }

    pub fn replace(
        &mut self,
        games: Vec<RawGame>,
        weather: Vec<RawWeather>,
        stats: Vec<RawTeamGameStat>,
    ) {
        self.games = games;
        self.weather = weather;
        self.stats = stats;
        self.fetched_at = Utc::now();
    }

    pub fn is_stale(&self, max_age_mins: u64) -> bool {
        let now = Utc::now();
        let age = now.signed_duration_since(self.fetched_at);
        age.num_minutes() > max_age_mins as i64
    }

    pub fn age_minutes(&self) -> i64 {
        Utc::now().signed_duration_since(self.fetched_at).num_minutes()
    }
}
