use super::normalizer::{ProcessedGame, TimeCategory, WeatherCategory};
use chrono::{Datelike, Weekday};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HomeAway {
    Home,
    Away,
}

impl HomeAway {
    pub const ALL: [HomeAway; 2] = [HomeAway::Home, HomeAway::Away];

    pub fn label(&self) -> &'static str {
        match self {
            HomeAway::Home => "Home",
            HomeAway::Away => "Away",
        }
    }
}

impl fmt::Display for HomeAway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chart axis order for day-of-week groupings.
pub const DAY_ORDER: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Per-bucket summary statistics.
///
/// `games_played` is the raw group size, while `win_rate` is computed over
/// decided games only - a group can have 5 games played and a win rate based
/// on the 3 of them whose outcome is known. Missing numeric fields count as 0
/// in the averages so partial box-score data never drops a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryAggregate {
    pub win_rate: f64,
    pub avg_points_for: f64,
    pub avg_points_against: f64,
    pub avg_point_differential: f64,
    pub avg_total_yards: f64,
    pub avg_pass_yards: f64,
    pub avg_rush_yards: f64,
    pub avg_turnovers: f64,
    pub games_played: usize,
}

impl CategoryAggregate {
    fn from_group(group: &[&ProcessedGame]) -> Self {
        let n = group.len() as f64;

        let decided = group.iter().filter(|g| g.won.is_some()).count();
        let wins = group.iter().filter(|g| g.won == Some(true)).count();
        let win_rate = if decided == 0 {
            0.0
        } else {
            wins as f64 / decided as f64
        };

        let mut points_for = 0.0;
        let mut points_against = 0.0;
        let mut point_diff = 0.0;
        let mut total_yards = 0.0;
        let mut pass_yards = 0.0;
        let mut rush_yards = 0.0;
        let mut turnovers = 0.0;

        for g in group {
            points_for += g.team_score.unwrap_or(0) as f64;
            points_against += g.opponent_score.unwrap_or(0) as f64;
            point_diff += g.point_differential.unwrap_or(0) as f64;
            total_yards += g.total_yards.unwrap_or(0.0);
            pass_yards += g.passing_yards.unwrap_or(0.0);
            rush_yards += g.rushing_yards.unwrap_or(0.0);
            turnovers += g.turnovers.unwrap_or(0.0);
        }

        CategoryAggregate {
            win_rate,
            avg_points_for: points_for / n,
            avg_points_against: points_against / n,
            avg_point_differential: point_diff / n,
            avg_total_yards: total_yards / n,
            avg_pass_yards: pass_yards / n,
            avg_rush_yards: rush_yards / n,
            avg_turnovers: turnovers / n,
            games_played: group.len(),
        }
    }
}

/// Group games by a categorical key and summarize each group.
///
/// `allowed_keys` fixes both the candidate set and the output order, which
/// downstream tables and charts use as their axis order. Keys with no
/// matching games are omitted entirely rather than emitted with zero counts.
pub fn aggregate_by_category<K: Copy + PartialEq>(
    games: &[ProcessedGame],
    key_fn: impl Fn(&ProcessedGame) -> Option<K>,
    allowed_keys: &[K],
) -> Vec<(K, CategoryAggregate)> {
    let mut out = Vec::new();

    for &key in allowed_keys {
        let group: Vec<&ProcessedGame> =
            games.iter().filter(|g| key_fn(g) == Some(key)).collect();
        if group.is_empty() {
            continue;
        }
        out.push((key, CategoryAggregate::from_group(&group)));
    }

    out
}

pub fn aggregate_by_weather(
    games: &[ProcessedGame],
) -> Vec<(WeatherCategory, CategoryAggregate)> {
    aggregate_by_category(games, |g| g.weather_category, &WeatherCategory::ALL)
}

pub fn aggregate_by_time(games: &[ProcessedGame]) -> Vec<(TimeCategory, CategoryAggregate)> {
    aggregate_by_category(games, |g| g.time_category, &TimeCategory::ALL)
}

pub fn aggregate_by_day(games: &[ProcessedGame]) -> Vec<(Weekday, CategoryAggregate)> {
    aggregate_by_category(games, |g| g.date.map(|d| d.weekday()), &DAY_ORDER)
}

pub fn aggregate_home_away(games: &[ProcessedGame]) -> Vec<(HomeAway, CategoryAggregate)> {
    aggregate_by_category(
        games,
        |g| {
            Some(if g.is_home {
                HomeAway::Home
            } else {
                HomeAway::Away
            })
        },
        &HomeAway::ALL,
    )
}
