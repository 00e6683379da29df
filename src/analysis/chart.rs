use super::extremes::ExtremeConditionReport;
use super::heatmap::HeatmapCell;
use super::performance::CategoryAggregate;
use super::strategy::StrategyAggregate;
use crate::analysis::normalizer::WeatherCategory;
use serde::Serialize;
use std::fmt;

/// One chart-ready row per aggregate entry. Pure shape adapter: fields are
/// renamed for chart consumption, values pass through untouched, and input
/// order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub category: String,
    pub win_rate: f64,
    pub points_for: f64,
    pub points_against: f64,
    pub point_diff: f64,
    pub total_yards: f64,
    pub pass_yards: f64,
    pub rush_yards: f64,
    pub turnovers: f64,
    pub games_played: usize,
}

pub fn format_for_chart<K: fmt::Display>(entries: &[(K, CategoryAggregate)]) -> Vec<ChartRow> {
    entries
        .iter()
        .map(|(key, agg)| ChartRow {
            category: key.to_string(),
            win_rate: agg.win_rate,
            points_for: agg.avg_points_for,
            points_against: agg.avg_points_against,
            point_diff: agg.avg_point_differential,
            total_yards: agg.avg_total_yards,
            pass_yards: agg.avg_pass_yards,
            rush_yards: agg.avg_rush_yards,
            turnovers: agg.avg_turnovers,
            games_played: agg.games_played,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyRow {
    pub category: String,
    pub pass_ratio: f64,
    pub pass_yards: f64,
    pub rush_yards: f64,
    pub turnovers: f64,
    pub games_played: usize,
}

pub fn format_strategy(entries: &[(WeatherCategory, StrategyAggregate)]) -> Vec<StrategyRow> {
    entries
        .iter()
        .map(|(bucket, agg)| StrategyRow {
            category: bucket.to_string(),
            pass_ratio: agg.pass_ratio,
            pass_yards: agg.avg_passing_yards,
            rush_yards: agg.avg_rushing_yards,
            turnovers: agg.avg_turnovers,
            games_played: agg.games_played,
        })
        .collect()
}

/// Everything `--export` writes: the full set of chart-ready shapes for one
/// team-season.
#[derive(Debug, Serialize)]
pub struct ChartExport {
    pub team: String,
    pub season: u32,
    pub by_weather: Vec<ChartRow>,
    pub by_time: Vec<ChartRow>,
    pub by_day: Vec<ChartRow>,
    pub home_away: Vec<ChartRow>,
    pub strategy: Vec<StrategyRow>,
    pub heatmap: Vec<HeatmapCell>,
    pub extremes: ExtremeConditionReport,
    pub insights: Vec<String>,
}
