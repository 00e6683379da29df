mod analysis;
mod api;
mod cache;
mod config;
mod display;
mod error;

use analysis::chart::{format_for_chart, format_strategy, ChartExport};
use analysis::extremes::analyze_extremes;
use analysis::heatmap::build_heatmap;
use analysis::insights::generate_insights;
use analysis::normalizer::{normalize_game, ProcessedGame};
use analysis::performance::{
    aggregate_by_day, aggregate_by_time, aggregate_by_weather, aggregate_home_away, day_label,
    CategoryAggregate,
};
use analysis::strategy::aggregate_strategy_by_weather;
use api::client::CfbdClient;
use api::models::{RawTeamGameStat, RawWeather};
use cache::{SeasonCache, CACHE_TTL_MINUTES};
use clap::Parser;
use config::Config;
use display::output::{
    display_category_table, display_error, display_extremes, display_game_log, display_heatmap,
    display_info, display_insights, display_strategy, display_success,
};
use error::AppError;
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "CFB Trends")]
#[command(about = "Analyze how weather and kickoff conditions shape a college football team's results", long_about = None)]
struct Args {
    /// Team name as the data source spells it (e.g. "Michigan", "Ohio State")
    team: String,

    /// Season year
    #[arg(short, long, default_value = "2024")]
    year: u32,

    /// Season type: regular, postseason, or both
    #[arg(long, default_value = "regular")]
    season_type: String,

    /// Force refresh from the API (ignore cached season data)
    #[arg(long)]
    refresh: bool,

    /// Write chart-ready JSON to this path
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;

    display_info(&format!(
        "Analyzing {} — {} {} season",
        args.team, args.year, args.season_type
    ));

    let mut season_cache = SeasonCache::load(&args.team, args.year)?;
    let cache_usable =
        !args.refresh && !season_cache.games.is_empty() && !season_cache.is_stale(CACHE_TTL_MINUTES);

    if cache_usable {
        display_success(&format!(
            "⚡ Using cached season data ({} min old)",
            season_cache.age_minutes()
        ));
    } else {
        let client = CfbdClient::new(config);

        display_info("Step 1: Fetching schedule...");
        let games = client.get_games(args.year, &args.team, &args.season_type)?;
        if games.is_empty() {
            return Err(AppError::NoGames {
                team: args.team.clone(),
                year: args.year,
            });
        }
        display_success(&format!("Found {} games", games.len()));

        display_info("Step 2: Fetching game weather...");
        let weather = client.get_weather(args.year, &args.team)?;
        display_success(&format!("Weather data for {} games", weather.len()));

        display_info("Step 3: Fetching box scores...");
        let pb = ProgressBar::new(games.len() as u64);
        pb.set_message("Fetching box scores");
        let mut stats = Vec::new();
        for game in &games {
            if let Some(flat) = client
                .get_game_stats(args.year, game.id)?
                .iter()
                .find_map(|dto| dto.for_team(&args.team))
            {
                stats.push(flat);
            }
            pb.inc(1);
        }
        pb.finish_with_message("✓ Box scores fetched");

        season_cache.replace(games, weather, stats);
        let _ = season_cache.save(); // Save to disk silently
    }

    let weather_by_game: HashMap<u64, RawWeather> = season_cache
        .weather
        .iter()
        .map(|w| (w.id, w.clone()))
        .collect();
    let stats_by_game: HashMap<u64, RawTeamGameStat> = season_cache
        .stats
        .iter()
        .map(|s| (s.game_id, s.clone()))
        .collect();

    let processed: Vec<ProcessedGame> = season_cache
        .games
        .iter()
        .filter_map(|g| normalize_game(g, &weather_by_game, &stats_by_game, &args.team))
        .collect();

    if processed.is_empty() {
        return Err(AppError::TeamNotFound(args.team.clone()));
    }

    let weather_agg = aggregate_by_weather(&processed);
    let time_agg = aggregate_by_time(&processed);
    let day_agg: Vec<(&str, CategoryAggregate)> = aggregate_by_day(&processed)
        .iter()
        .map(|(day, agg)| (day_label(*day), *agg))
        .collect();
    let home_away_agg = aggregate_home_away(&processed);
    let strategy_agg = aggregate_strategy_by_weather(&processed);
    let extremes = analyze_extremes(&processed);
    let heatmap = build_heatmap(&processed);
    let insights = generate_insights(&processed, &weather_agg, &time_agg, &home_away_agg);

    let by_weather = format_for_chart(&weather_agg);
    let by_time = format_for_chart(&time_agg);
    let by_day = format_for_chart(&day_agg);
    let home_away = format_for_chart(&home_away_agg);
    let strategy = format_strategy(&strategy_agg);

    display_game_log(&args.team, &processed);
    display_category_table("🌡️  PERFORMANCE BY WEATHER", &by_weather);
    display_category_table("🕐 PERFORMANCE BY KICKOFF TIME", &by_time);
    display_category_table("📅 PERFORMANCE BY DAY OF WEEK", &by_day);
    display_category_table("🏟️  HOME VS AWAY", &home_away);
    display_strategy(&strategy);
    display_extremes(&extremes);
    display_heatmap(&heatmap);
    display_insights(&insights);

    if let Some(path) = &args.export {
        let export = ChartExport {
            team: args.team.clone(),
            season: args.year,
            by_weather,
            by_time,
            by_day,
            home_away,
            strategy,
            heatmap,
            extremes,
            insights,
        };
        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| AppError::ExportError(e.to_string()))?;
        fs::write(path, json).map_err(|e| AppError::ExportError(e.to_string()))?;
        display_success(&format!("Exported chart data to {}", path.display()));
    }

    Ok(())
}
