use crate::api::models::{RawGame, RawTeamGameStat, RawWeather};
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Temperature bucket. Lower bounds are inclusive, upper bounds exclusive,
/// so 32.0°F is Cold and 70.0°F is Warm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeatherCategory {
    Freezing,
    Cold,
    Moderate,
    Warm,
}

impl WeatherCategory {
    pub const ALL: [WeatherCategory; 4] = [
        WeatherCategory::Freezing,
        WeatherCategory::Cold,
        WeatherCategory::Moderate,
        WeatherCategory::Warm,
    ];

    pub fn from_temperature(temp: f64) -> Self {
        if temp < 32.0 {
            WeatherCategory::Freezing
        } else if temp < 50.0 {
            WeatherCategory::Cold
        } else if temp < 70.0 {
            WeatherCategory::Moderate
        } else {
            WeatherCategory::Warm
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCategory::Freezing => "Freezing",
            WeatherCategory::Cold => "Cold",
            WeatherCategory::Moderate => "Moderate",
            WeatherCategory::Warm => "Warm",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kickoff-hour bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeCategory {
    Morning,
    EarlyAfternoon,
    LateAfternoon,
    Night,
}

impl TimeCategory {
    pub const ALL: [TimeCategory; 4] = [
        TimeCategory::Morning,
        TimeCategory::EarlyAfternoon,
        TimeCategory::LateAfternoon,
        TimeCategory::Night,
    ];

    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeCategory::Morning
        } else if hour < 15 {
            TimeCategory::EarlyAfternoon
        } else if hour < 18 {
            TimeCategory::LateAfternoon
        } else {
            TimeCategory::Night
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeCategory::Morning => "Morning",
            TimeCategory::EarlyAfternoon => "Early Afternoon",
            TimeCategory::LateAfternoon => "Late Afternoon",
            TimeCategory::Night => "Night",
        }
    }
}

impl fmt::Display for TimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical unit of analysis: one game from the perspective of one team,
/// with weather and box-score data joined in when the sources have them.
///
/// Field definedness follows the data, not defaults: `won` stays `None` when
/// either score is unknown (an unknown outcome is not a loss), and
/// `weather_category` is present exactly when `temperature` is.
#[derive(Debug, Clone)]
pub struct ProcessedGame {
    pub game_id: u64,
    pub season: Option<u32>,
    pub week: Option<u32>,
    pub date: Option<NaiveDateTime>,
    pub is_home: bool,
    pub opponent: String,
    pub team_score: Option<i64>,
    pub opponent_score: Option<i64>,
    pub won: Option<bool>,
    pub point_differential: Option<i64>,
    pub neutral_site: bool,
    pub conference_game: bool,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub precipitation: Option<f64>,
    pub wind_speed: Option<f64>,
    pub weather_condition: Option<String>,
    pub time_category: Option<TimeCategory>,
    pub weather_category: Option<WeatherCategory>,
    pub total_yards: Option<f64>,
    pub passing_yards: Option<f64>,
    pub rushing_yards: Option<f64>,
    pub turnovers: Option<f64>,
}

/// Kickoff timestamps arrive as RFC 3339; a bare timestamp without offset is
/// tolerated too. The hour is taken as written, no timezone shifting.
fn parse_kickoff(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Build a `ProcessedGame` for `team` out of one raw game plus the weather
/// and box-score lookups. Returns `None` when `team` is neither side of the
/// game (exact, case-sensitive match) so callers can `filter_map` a batch.
///
/// A single bad record never fails the batch: an unparseable date just leaves
/// `time_category` unset and the rest of the record goes through.
pub fn normalize_game(
    raw: &RawGame,
    weather_by_game: &HashMap<u64, RawWeather>,
    stats_by_game: &HashMap<u64, RawTeamGameStat>,
    team: &str,
) -> Option<ProcessedGame> {
    let home = raw.home_team.as_deref().unwrap_or("");
    let away = raw.away_team.as_deref().unwrap_or("");
    let is_home = if home == team {
        true
    } else if away == team {
        false
    } else {
        return None;
    };

    let opponent = if is_home { away } else { home }.to_string();
    let (team_score, opponent_score) = if is_home {
        (raw.home_points, raw.away_points)
    } else {
        (raw.away_points, raw.home_points)
    };

    let (won, point_differential) = match (team_score, opponent_score) {
        (Some(ts), Some(os)) => (Some(ts > os), Some(ts - os)),
        _ => (None, None),
    };

    let date = raw.start_date.as_deref().and_then(parse_kickoff);
    let time_category = date.map(|d| TimeCategory::from_hour(d.hour()));

    let weather = weather_by_game.get(&raw.id);
    let temperature = weather.and_then(|w| w.temperature);
    let weather_category = temperature.map(WeatherCategory::from_temperature);

    let stats = stats_by_game.get(&raw.id);

    Some(ProcessedGame {
        game_id: raw.id,
        season: raw.season,
        week: raw.week,
        date,
        is_home,
        opponent,
        team_score,
        opponent_score,
        won,
        point_differential,
        neutral_site: raw.neutral_site.unwrap_or(false),
        conference_game: raw.conference_game.unwrap_or(false),
        temperature,
        humidity: weather.and_then(|w| w.humidity),
        precipitation: weather.and_then(|w| w.precipitation),
        wind_speed: weather.and_then(|w| w.wind_speed),
        weather_condition: weather.and_then(|w| w.weather_condition.clone()),
        time_category,
        weather_category,
        total_yards: stats.and_then(|s| s.total_yards),
        passing_yards: stats.and_then(|s| s.passing_yards),
        rushing_yards: stats.and_then(|s| s.rushing_yards),
        turnovers: stats.and_then(|s| s.turnovers),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_game(
        id: u64,
        home: &str,
        away: &str,
        home_points: Option<i64>,
        away_points: Option<i64>,
        start_date: Option<&str>,
    ) -> RawGame {
        RawGame {
            id,
            season: Some(2024),
            week: Some(1),
            season_type: Some("regular".to_string()),
            start_date: start_date.map(|s| s.to_string()),
            neutral_site: Some(false),
            conference_game: Some(false),
            venue: None,
            home_team: Some(home.to_string()),
            home_points,
            away_team: Some(away.to_string()),
            away_points,
        }
    }

    fn weather_for(id: u64, temperature: Option<f64>) -> RawWeather {
        RawWeather {
            id,
            temperature,
            dew_point: None,
            humidity: None,
            precipitation: None,
            snowfall: None,
            wind_speed: None,
            wind_direction: None,
            pressure: None,
            weather_condition: None,
        }
    }

    fn no_weather() -> HashMap<u64, RawWeather> {
        HashMap::new()
    }

    fn no_stats() -> HashMap<u64, RawTeamGameStat> {
        HashMap::new()
    }

    #[test]
    fn home_win_gets_freezing_night_buckets() {
        let raw = raw_game(1, "X", "Y", Some(30), Some(20), Some("2024-11-23T19:30:00.000Z"));
        let weather = HashMap::from([(1, weather_for(1, Some(28.0)))]);

        let game = normalize_game(&raw, &weather, &no_stats(), "X").unwrap();
        assert!(game.is_home);
        assert_eq!(game.opponent, "Y");
        assert_eq!(game.team_score, Some(30));
        assert_eq!(game.opponent_score, Some(20));
        assert_eq!(game.won, Some(true));
        assert_eq!(game.point_differential, Some(10));
        assert_eq!(game.weather_category, Some(WeatherCategory::Freezing));
        assert_eq!(game.time_category, Some(TimeCategory::Night));
    }

    #[test]
    fn away_win_swaps_score_sides() {
        let raw = raw_game(2, "Y", "X", Some(10), Some(24), Some("2024-09-07T13:00:00.000Z"));
        let weather = HashMap::from([(2, weather_for(2, Some(55.0)))]);

        let game = normalize_game(&raw, &weather, &no_stats(), "X").unwrap();
        assert!(!game.is_home);
        assert_eq!(game.opponent, "Y");
        assert_eq!(game.team_score, Some(24));
        assert_eq!(game.opponent_score, Some(10));
        assert_eq!(game.won, Some(true));
        assert_eq!(game.weather_category, Some(WeatherCategory::Moderate));
        assert_eq!(game.time_category, Some(TimeCategory::EarlyAfternoon));
    }

    #[test]
    fn uninvolved_team_is_excluded() {
        let raw = raw_game(3, "X", "Y", Some(7), Some(3), None);
        assert!(normalize_game(&raw, &no_weather(), &no_stats(), "Z").is_none());
        // Case-sensitive match
        assert!(normalize_game(&raw, &no_weather(), &no_stats(), "x").is_none());
    }

    #[test]
    fn missing_score_leaves_outcome_unset() {
        let raw = raw_game(4, "X", "Y", Some(21), None, Some("2024-10-05T11:00:00.000Z"));
        let game = normalize_game(&raw, &no_weather(), &no_stats(), "X").unwrap();
        assert_eq!(game.won, None);
        assert_eq!(game.point_differential, None);
        assert_eq!(game.time_category, Some(TimeCategory::Morning));
    }

    #[test]
    fn weather_category_tracks_temperature_exactly() {
        let raw = raw_game(5, "X", "Y", Some(14), Some(10), None);

        // No weather record: both unset
        let game = normalize_game(&raw, &no_weather(), &no_stats(), "X").unwrap();
        assert!(game.temperature.is_none());
        assert!(game.weather_category.is_none());

        // Weather record without a temperature reading: still unset
        let weather = HashMap::from([(5, weather_for(5, None))]);
        let game = normalize_game(&raw, &weather, &no_stats(), "X").unwrap();
        assert!(game.weather_category.is_none());
    }

    #[test]
    fn bad_date_keeps_the_record() {
        let raw = raw_game(6, "X", "Y", Some(14), Some(10), Some("not a date"));
        let game = normalize_game(&raw, &no_weather(), &no_stats(), "X").unwrap();
        assert!(game.time_category.is_none());
        assert_eq!(game.won, Some(true));
    }

    #[test]
    fn temperature_bucket_boundaries() {
        assert_eq!(WeatherCategory::from_temperature(31.9), WeatherCategory::Freezing);
        assert_eq!(WeatherCategory::from_temperature(32.0), WeatherCategory::Cold);
        assert_eq!(WeatherCategory::from_temperature(49.9), WeatherCategory::Cold);
        assert_eq!(WeatherCategory::from_temperature(50.0), WeatherCategory::Moderate);
        assert_eq!(WeatherCategory::from_temperature(69.9), WeatherCategory::Moderate);
        assert_eq!(WeatherCategory::from_temperature(70.0), WeatherCategory::Warm);
    }

    #[test]
    fn hour_bucket_boundaries() {
        assert_eq!(TimeCategory::from_hour(11), TimeCategory::Morning);
        assert_eq!(TimeCategory::from_hour(12), TimeCategory::EarlyAfternoon);
        assert_eq!(TimeCategory::from_hour(14), TimeCategory::EarlyAfternoon);
        assert_eq!(TimeCategory::from_hour(15), TimeCategory::LateAfternoon);
        assert_eq!(TimeCategory::from_hour(17), TimeCategory::LateAfternoon);
        assert_eq!(TimeCategory::from_hour(18), TimeCategory::Night);
        assert_eq!(TimeCategory::from_hour(23), TimeCategory::Night);
    }

    #[test]
    fn offset_timestamp_keeps_written_hour() {
        let raw = raw_game(7, "X", "Y", None, None, Some("2024-09-07T15:30:00-04:00"));
        let game = normalize_game(&raw, &no_weather(), &no_stats(), "X").unwrap();
        assert_eq!(game.time_category, Some(TimeCategory::LateAfternoon));
    }
}
