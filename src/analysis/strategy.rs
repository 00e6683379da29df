use super::normalizer::{ProcessedGame, WeatherCategory};
use serde::Serialize;

/// Offensive tendency summary for one weather bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyAggregate {
    /// Mean of per-game passing share of total yardage, in [0, 1].
    pub pass_ratio: f64,
    pub avg_passing_yards: f64,
    pub avg_rushing_yards: f64,
    pub avg_turnovers: f64,
    pub games_played: usize,
}

/// How the offense leaned (pass vs run) in each kind of weather.
///
/// Only games with a weather bucket and both yardage figures qualify; buckets
/// with no qualifying games are omitted. A game with zero combined yardage
/// contributes a pass ratio of 0 rather than a division by zero.
pub fn aggregate_strategy_by_weather(
    games: &[ProcessedGame],
) -> Vec<(WeatherCategory, StrategyAggregate)> {
    let mut out = Vec::new();

    for &bucket in &WeatherCategory::ALL {
        let group: Vec<&ProcessedGame> = games
            .iter()
            .filter(|g| {
                g.weather_category == Some(bucket)
                    && g.passing_yards.is_some()
                    && g.rushing_yards.is_some()
            })
            .collect();
        if group.is_empty() {
            continue;
        }

        let n = group.len() as f64;
        let mut ratio_sum = 0.0;
        let mut pass_sum = 0.0;
        let mut rush_sum = 0.0;
        let mut turnover_sum = 0.0;

        for g in &group {
            let pass = g.passing_yards.unwrap_or(0.0);
            let rush = g.rushing_yards.unwrap_or(0.0);
            let total = pass + rush;
            if total > 0.0 {
                ratio_sum += pass / total;
            }
            pass_sum += pass;
            rush_sum += rush;
            turnover_sum += g.turnovers.unwrap_or(0.0);
        }

        out.push((
            bucket,
            StrategyAggregate {
                pass_ratio: ratio_sum / n,
                avg_passing_yards: pass_sum / n,
                avg_rushing_yards: rush_sum / n,
                avg_turnovers: turnover_sum / n,
                games_played: group.len(),
            },
        ));
    }

    out
}
