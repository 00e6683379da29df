use super::normalizer::ProcessedGame;
use serde::Serialize;

pub const EXTREME_COLD_MAX_TEMP: f64 = 32.0;
pub const EXTREME_HOT_MIN_TEMP: f64 = 85.0;
pub const HIGH_WIND_MIN_MPH: f64 = 20.0;

/// Outcome summary for one extreme-condition subset. Zero-valued when no
/// game qualifies, never absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtremeStats {
    pub count: usize,
    pub win_rate: f64,
    pub avg_score: f64,
    pub avg_opponent_score: f64,
}

/// Unlike the grouped aggregates, this report always carries all four
/// categories so consumers can render a fixed set of condition cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtremeConditionReport {
    pub extreme_cold: ExtremeStats,
    pub extreme_hot: ExtremeStats,
    pub high_wind: ExtremeStats,
    pub precipitation: ExtremeStats,
}

fn summarize<'a>(subset: &[&'a ProcessedGame]) -> ExtremeStats {
    if subset.is_empty() {
        return ExtremeStats {
            count: 0,
            win_rate: 0.0,
            avg_score: 0.0,
            avg_opponent_score: 0.0,
        };
    }

    let n = subset.len() as f64;
    let wins = subset.iter().filter(|g| g.won == Some(true)).count();
    let score_sum: f64 = subset.iter().map(|g| g.team_score.unwrap_or(0) as f64).sum();
    let opponent_sum: f64 = subset
        .iter()
        .map(|g| g.opponent_score.unwrap_or(0) as f64)
        .sum();

    ExtremeStats {
        count: subset.len(),
        win_rate: wins as f64 / n,
        avg_score: score_sum / n,
        avg_opponent_score: opponent_sum / n,
    }
}

fn select<'a>(
    games: &'a [ProcessedGame],
    predicate: impl Fn(&ProcessedGame) -> bool,
) -> Vec<&'a ProcessedGame> {
    games.iter().filter(|g| predicate(g)).collect()
}

/// Isolate games played in extreme conditions and summarize each subset.
pub fn analyze_extremes(games: &[ProcessedGame]) -> ExtremeConditionReport {
    let cold = select(games, |g| {
        g.temperature.map(|t| t < EXTREME_COLD_MAX_TEMP).unwrap_or(false)
    });
    let hot = select(games, |g| {
        g.temperature.map(|t| t > EXTREME_HOT_MIN_TEMP).unwrap_or(false)
    });
    let wind = select(games, |g| {
        g.wind_speed.map(|w| w > HIGH_WIND_MIN_MPH).unwrap_or(false)
    });
    let rain = select(games, |g| {
        g.precipitation.map(|p| p > 0.0).unwrap_or(false)
    });

    ExtremeConditionReport {
        extreme_cold: summarize(&cold),
        extreme_hot: summarize(&hot),
        high_wind: summarize(&wind),
        precipitation: summarize(&rain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{blank_game, scored_game};

    #[test]
    fn empty_input_reports_all_four_categories_zeroed() {
        let report = analyze_extremes(&[]);
        for stats in [
            report.extreme_cold,
            report.extreme_hot,
            report.high_wind,
            report.precipitation,
        ] {
            assert_eq!(stats.count, 0);
            assert_eq!(stats.win_rate, 0.0);
            assert_eq!(stats.avg_score, 0.0);
            assert_eq!(stats.avg_opponent_score, 0.0);
        }
    }

    #[test]
    fn thresholds_are_strict() {
        let mut at_cold_boundary = scored_game(1, 20, 10);
        at_cold_boundary.temperature = Some(32.0);
        let mut at_hot_boundary = scored_game(2, 20, 10);
        at_hot_boundary.temperature = Some(85.0);
        let mut at_wind_boundary = scored_game(3, 20, 10);
        at_wind_boundary.wind_speed = Some(20.0);
        let mut dry = scored_game(4, 20, 10);
        dry.precipitation = Some(0.0);

        let report =
            analyze_extremes(&[at_cold_boundary, at_hot_boundary, at_wind_boundary, dry]);
        assert_eq!(report.extreme_cold.count, 0);
        assert_eq!(report.extreme_hot.count, 0);
        assert_eq!(report.high_wind.count, 0);
        assert_eq!(report.precipitation.count, 0);
    }

    #[test]
    fn qualifying_games_are_summarized() {
        let mut freezing_win = scored_game(1, 27, 3);
        freezing_win.temperature = Some(25.0);
        let mut freezing_loss = scored_game(2, 7, 10);
        freezing_loss.temperature = Some(10.0);
        let mut windy_rainy = scored_game(3, 21, 14);
        windy_rainy.wind_speed = Some(25.0);
        windy_rainy.precipitation = Some(0.3);

        let report = analyze_extremes(&[freezing_win, freezing_loss, windy_rainy]);

        assert_eq!(report.extreme_cold.count, 2);
        assert!((report.extreme_cold.win_rate - 0.5).abs() < 1e-12);
        assert!((report.extreme_cold.avg_score - 17.0).abs() < 1e-12);
        assert!((report.extreme_cold.avg_opponent_score - 6.5).abs() < 1e-12);

        assert_eq!(report.high_wind.count, 1);
        assert_eq!(report.precipitation.count, 1);
        assert!((report.precipitation.win_rate - 1.0).abs() < 1e-12);
        assert_eq!(report.extreme_hot.count, 0);
    }

    #[test]
    fn undecided_games_count_against_the_rate() {
        // Denominator here is subset size, not decided games
        let mut undecided = blank_game(1);
        undecided.temperature = Some(20.0);
        let mut win = scored_game(2, 30, 0);
        win.temperature = Some(20.0);

        let report = analyze_extremes(&[undecided, win]);
        assert_eq!(report.extreme_cold.count, 2);
        assert!((report.extreme_cold.win_rate - 0.5).abs() < 1e-12);
    }
}
