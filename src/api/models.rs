use serde::{Deserialize, Serialize};

// /games response. The API has shipped both snake_case and camelCase
// spellings of these fields over time, so every field carries an alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGame {
    pub id: u64,
    #[serde(default)]
    pub season: Option<u32>,
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default, alias = "season_type")]
    pub season_type: Option<String>,
    #[serde(default, alias = "start_date")]
    pub start_date: Option<String>,
    #[serde(default, alias = "neutral_site")]
    pub neutral_site: Option<bool>,
    #[serde(default, alias = "conference_game")]
    pub conference_game: Option<bool>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default, alias = "home_team")]
    pub home_team: Option<String>,
    #[serde(default, alias = "home_points")]
    pub home_points: Option<i64>,
    #[serde(default, alias = "away_team")]
    pub away_team: Option<String>,
    #[serde(default, alias = "away_points")]
    pub away_points: Option<i64>,
}

// /games/weather response, keyed by game id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct RawWeather {
    #[serde(alias = "game_id", alias = "gameId")]
    pub id: u64,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default, alias = "dew_point")]
    pub dew_point: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub snowfall: Option<f64>,
    #[serde(default, alias = "wind_speed")]
    pub wind_speed: Option<f64>,
    #[serde(default, alias = "wind_direction")]
    pub wind_direction: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default, alias = "weather_condition")]
    pub weather_condition: Option<String>,
}

// /games/teams response: box scores arrive as category/stat string pairs
// nested under each side of the game.
#[derive(Debug, Clone, Deserialize)]
pub struct GameTeamStatsDto {
    pub id: u64,
    #[serde(default)]
    pub teams: Vec<TeamSideStats>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamSideStats {
    #[serde(default, alias = "school")]
    pub team: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatPair>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatPair {
    pub category: String,
    pub stat: serde_json::Value,
}

/// Flattened per-game box score for one team, the shape the rest of the
/// pipeline consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTeamGameStat {
    pub game_id: u64,
    pub total_yards: Option<f64>,
    pub passing_yards: Option<f64>,
    pub rushing_yards: Option<f64>,
    #[allow(dead_code)]
    pub first_downs: Option<f64>,
    pub turnovers: Option<f64>,
    #[allow(dead_code)]
    pub possession_time: Option<String>,
}

/// Stat values come back as JSON numbers or as strings like "435"; composite
/// strings ("5-12", "29:51") are not plain numbers and yield None.
fn stat_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl TeamSideStats {
    fn stat(&self, category: &str) -> Option<f64> {
        self.stats
            .iter()
            .find(|p| p.category == category)
            .and_then(|p| stat_number(&p.stat))
    }

    fn stat_text(&self, category: &str) -> Option<String> {
        self.stats
            .iter()
            .find(|p| p.category == category)
            .and_then(|p| p.stat.as_str().map(|s| s.to_string()))
    }
}

impl GameTeamStatsDto {
    /// Pick out the named team's side and flatten its stat pairs.
    pub fn for_team(&self, team: &str) -> Option<RawTeamGameStat> {
        let side = self
            .teams
            .iter()
            .find(|t| t.team.as_deref() == Some(team))?;

        Some(RawTeamGameStat {
            game_id: self.id,
            total_yards: side.stat("totalYards"),
            passing_yards: side.stat("netPassingYards"),
            rushing_yards: side.stat("rushingYards"),
            first_downs: side.stat("firstDowns"),
            turnovers: side.stat("turnovers"),
            possession_time: side.stat_text("possessionTime"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_game_parses_camel_case() {
        let body = r#"{
            "id": 401520342,
            "season": 2023,
            "week": 1,
            "startDate": "2023-09-02T19:30:00.000Z",
            "neutralSite": false,
            "conferenceGame": true,
            "homeTeam": "Michigan",
            "homePoints": 30,
            "awayTeam": "East Carolina",
            "awayPoints": 3
        }"#;

        let game: RawGame = serde_json::from_str(body).unwrap();
        assert_eq!(game.id, 401520342);
        assert_eq!(game.home_team.as_deref(), Some("Michigan"));
        assert_eq!(game.away_points, Some(3));
        assert_eq!(game.conference_game, Some(true));
    }

    #[test]
    fn raw_game_parses_snake_case() {
        let body = r#"{
            "id": 7,
            "home_team": "Michigan",
            "away_team": "Ohio State",
            "home_points": 30,
            "away_points": 24,
            "start_date": "2023-11-25T17:00:00.000Z",
            "neutral_site": false,
            "conference_game": true
        }"#;

        let game: RawGame = serde_json::from_str(body).unwrap();
        assert_eq!(game.home_team.as_deref(), Some("Michigan"));
        assert_eq!(game.home_points, Some(30));
        assert_eq!(game.start_date.as_deref(), Some("2023-11-25T17:00:00.000Z"));
    }

    #[test]
    fn weather_tolerates_missing_fields() {
        let body = r#"{"id": 9, "temperature": 28.4}"#;
        let weather: RawWeather = serde_json::from_str(body).unwrap();
        assert_eq!(weather.id, 9);
        assert_eq!(weather.temperature, Some(28.4));
        assert_eq!(weather.wind_speed, None);
    }

    #[test]
    fn box_score_flattens_for_named_team() {
        let body = r#"{
            "id": 42,
            "teams": [
                {"school": "Rutgers", "stats": [
                    {"category": "totalYards", "stat": "212"}
                ]},
                {"school": "Michigan", "stats": [
                    {"category": "totalYards", "stat": "435"},
                    {"category": "netPassingYards", "stat": 201},
                    {"category": "rushingYards", "stat": "234"},
                    {"category": "firstDowns", "stat": "22"},
                    {"category": "turnovers", "stat": "1"},
                    {"category": "thirdDownEff", "stat": "5-12"},
                    {"category": "possessionTime", "stat": "33:10"}
                ]}
            ]
        }"#;

        let dto: GameTeamStatsDto = serde_json::from_str(body).unwrap();
        let flat = dto.for_team("Michigan").unwrap();
        assert_eq!(flat.game_id, 42);
        assert_eq!(flat.total_yards, Some(435.0));
        assert_eq!(flat.passing_yards, Some(201.0));
        assert_eq!(flat.rushing_yards, Some(234.0));
        assert_eq!(flat.turnovers, Some(1.0));
        assert_eq!(flat.possession_time.as_deref(), Some("33:10"));
        assert!(dto.for_team("Iowa").is_none());
    }
}
