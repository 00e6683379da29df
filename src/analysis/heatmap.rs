use super::normalizer::{ProcessedGame, TimeCategory, WeatherCategory};
use serde::Serialize;

/// One populated cell of the weather x kickoff-time grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub weather: WeatherCategory,
    pub time: TimeCategory,
    pub win_rate: f64,
    pub games_played: usize,
}

/// Cross-tabulate weather and kickoff-time buckets into win-rate cells.
///
/// Cells are emitted weather-outer, time-inner in canonical bucket order,
/// which fixes row and column order for consumers; empty cells are omitted.
/// Only games carrying both buckets participate.
pub fn build_heatmap(games: &[ProcessedGame]) -> Vec<HeatmapCell> {
    let mut cells = Vec::new();

    for &weather in &WeatherCategory::ALL {
        for &time in &TimeCategory::ALL {
            let group: Vec<&ProcessedGame> = games
                .iter()
                .filter(|g| {
                    g.weather_category == Some(weather) && g.time_category == Some(time)
                })
                .collect();
            if group.is_empty() {
                continue;
            }

            let wins = group.iter().filter(|g| g.won == Some(true)).count();
            cells.push(HeatmapCell {
                weather,
                time,
                win_rate: wins as f64 / group.len() as f64,
                games_played: group.len(),
            });
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::scored_game;

    #[test]
    fn two_games_fill_exactly_two_cells() {
        let mut freezing_night = scored_game(1, 30, 20);
        freezing_night.weather_category = Some(WeatherCategory::Freezing);
        freezing_night.time_category = Some(TimeCategory::Night);

        let mut moderate_early = scored_game(2, 24, 10);
        moderate_early.weather_category = Some(WeatherCategory::Moderate);
        moderate_early.time_category = Some(TimeCategory::EarlyAfternoon);

        let cells = build_heatmap(&[freezing_night, moderate_early]);
        assert_eq!(cells.len(), 2);

        // Weather-outer order: Freezing before Moderate
        assert_eq!(cells[0].weather, WeatherCategory::Freezing);
        assert_eq!(cells[0].time, TimeCategory::Night);
        assert_eq!(cells[0].win_rate, 1.0);
        assert_eq!(cells[0].games_played, 1);

        assert_eq!(cells[1].weather, WeatherCategory::Moderate);
        assert_eq!(cells[1].time, TimeCategory::EarlyAfternoon);
        assert_eq!(cells[1].win_rate, 1.0);
    }

    #[test]
    fn games_missing_either_bucket_are_ignored() {
        let mut no_time = scored_game(1, 30, 20);
        no_time.weather_category = Some(WeatherCategory::Warm);
        let mut no_weather = scored_game(2, 30, 20);
        no_weather.time_category = Some(TimeCategory::Morning);

        assert!(build_heatmap(&[no_time, no_weather]).is_empty());
    }

    #[test]
    fn cell_rate_mixes_wins_and_losses() {
        let mut games = Vec::new();
        for (id, score) in [(1, 30i64), (2, 10), (3, 28), (4, 35)] {
            let mut g = scored_game(id, score, 20);
            g.weather_category = Some(WeatherCategory::Cold);
            g.time_category = Some(TimeCategory::LateAfternoon);
            games.push(g);
        }

        let cells = build_heatmap(&games);
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].games_played, 4);
        assert!((cells[0].win_rate - 0.75).abs() < 1e-12);
    }
}
