use crate::analysis::chart::{ChartRow, StrategyRow};
use crate::analysis::extremes::{ExtremeConditionReport, ExtremeStats};
use crate::analysis::heatmap::HeatmapCell;
use crate::analysis::normalizer::{ProcessedGame, TimeCategory, WeatherCategory};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct GameRow {
    #[tabled(rename = "Wk")]
    week: String,
    opponent: String,
    venue: String,
    result: String,
    score: String,
    kickoff: String,
    weather: String,
}

#[derive(Tabled)]
struct CategoryTableRow {
    category: String,
    games: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
    #[tabled(rename = "PF")]
    points_for: String,
    #[tabled(rename = "PA")]
    points_against: String,
    #[tabled(rename = "+/-")]
    point_diff: String,
    #[tabled(rename = "yards")]
    total_yards: String,
}

#[derive(Tabled)]
struct StrategyTableRow {
    conditions: String,
    games: String,
    #[tabled(rename = "pass share")]
    pass_share: String,
    #[tabled(rename = "pass yds")]
    pass_yards: String,
    #[tabled(rename = "rush yds")]
    rush_yards: String,
    #[tabled(rename = "TO")]
    turnovers: String,
}

#[derive(Tabled)]
struct HeatmapRow {
    weather: String,
    #[tabled(rename = "Morning")]
    morning: String,
    #[tabled(rename = "Early Aft")]
    early_afternoon: String,
    #[tabled(rename = "Late Aft")]
    late_afternoon: String,
    #[tabled(rename = "Night")]
    night: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_game_log(team: &str, games: &[ProcessedGame]) {
    let decided = games.iter().filter(|g| g.won.is_some()).count();
    let wins = games.iter().filter(|g| g.won == Some(true)).count();
    let losses = decided - wins;

    println!("\n{}", format!("🏈 {} — GAME LOG ({} games)", team, games.len()).bold().cyan());
    println!("{}\n", "=".repeat(80).cyan());
    if decided > 0 {
        println!(
            "{} {} W / {} L ({:.1}% WR)\n",
            "📈 Record:".bold(),
            wins.to_string().green(),
            losses.to_string().red(),
            (wins as f64 / decided as f64) * 100.0
        );
    }

    let mut rows = vec![];
    for game in games {
        let result = match game.won {
            Some(true) => "WIN".green().to_string(),
            Some(false) => "LOSS".red().to_string(),
            None => "-".to_string(),
        };
        let score = match (game.team_score, game.opponent_score) {
            (Some(ts), Some(os)) => format!("{}-{}", ts, os),
            _ => "-".to_string(),
        };
        let kickoff = game
            .time_category
            .map(|t| t.label().to_string())
            .unwrap_or_else(|| "-".to_string());
        let weather = match (game.temperature, game.weather_condition.as_deref()) {
            (Some(t), Some(cond)) => format!("{:.0}°F {}", t, cond),
            (Some(t), None) => format!("{:.0}°F", t),
            (None, Some(cond)) => cond.to_string(),
            (None, None) => "-".to_string(),
        };
        let venue = if game.neutral_site {
            "N".to_string()
        } else if game.is_home {
            "H".to_string()
        } else {
            "A".to_string()
        };

        rows.push(GameRow {
            week: game.week.map(|w| w.to_string()).unwrap_or_else(|| "-".to_string()),
            opponent: game.opponent.clone(),
            venue,
            result,
            score,
            kickoff,
            weather,
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_category_table(title: &str, rows: &[ChartRow]) {
    if rows.is_empty() {
        return;
    }

    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let table_rows: Vec<CategoryTableRow> = rows
        .iter()
        .map(|row| CategoryTableRow {
            category: row.category.clone(),
            games: row.games_played.to_string(),
            win_rate: format!("{:.1}%", row.win_rate * 100.0),
            points_for: format!("{:.1}", row.points_for),
            points_against: format!("{:.1}", row.points_against),
            point_diff: format!("{:+.1}", row.point_diff),
            total_yards: format!("{:.0}", row.total_yards),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_strategy(rows: &[StrategyRow]) {
    if rows.is_empty() {
        return;
    }

    println!("\n{}", "🎯 OFFENSIVE TENDENCIES BY WEATHER".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let table_rows: Vec<StrategyTableRow> = rows
        .iter()
        .map(|row| StrategyTableRow {
            conditions: row.category.clone(),
            games: row.games_played.to_string(),
            pass_share: format!("{:.1}%", row.pass_ratio * 100.0),
            pass_yards: format!("{:.1}", row.pass_yards),
            rush_yards: format!("{:.1}", row.rush_yards),
            turnovers: format!("{:.1}", row.turnovers),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_heatmap(cells: &[HeatmapCell]) {
    if cells.is_empty() {
        return;
    }

    println!("\n{}", "🗺️  WIN RATE BY WEATHER × KICKOFF TIME".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let cell_text = |weather: WeatherCategory, time: TimeCategory| {
        cells
            .iter()
            .find(|c| c.weather == weather && c.time == time)
            .map(|c| format!("{:.0}% ({})", c.win_rate * 100.0, c.games_played))
            .unwrap_or_else(|| "-".to_string())
    };

    let mut rows = vec![];
    for &weather in &WeatherCategory::ALL {
        if !cells.iter().any(|c| c.weather == weather) {
            continue;
        }
        rows.push(HeatmapRow {
            weather: weather.label().to_string(),
            morning: cell_text(weather, TimeCategory::Morning),
            early_afternoon: cell_text(weather, TimeCategory::EarlyAfternoon),
            late_afternoon: cell_text(weather, TimeCategory::LateAfternoon),
            night: cell_text(weather, TimeCategory::Night),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!("{}", "Cells show win rate (games played); '-' means no games".dimmed());
}

fn extreme_line(name: &str, stats: &ExtremeStats) {
    if stats.count == 0 {
        println!("  {:<18} no games", name);
        return;
    }
    println!(
        "  {:<18} {} games, {:.1}% win rate, avg score {:.1}-{:.1}",
        name,
        stats.count,
        stats.win_rate * 100.0,
        stats.avg_score,
        stats.avg_opponent_score
    );
}

pub fn display_extremes(report: &ExtremeConditionReport) {
    println!("\n{}", "🌪️  EXTREME CONDITIONS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    extreme_line("Extreme cold", &report.extreme_cold);
    extreme_line("Extreme heat", &report.extreme_hot);
    extreme_line("High wind", &report.high_wind);
    extreme_line("Precipitation", &report.precipitation);

    println!(
        "\n{}",
        "Thresholds: below 32°F, above 85°F, wind above 20 mph, any precipitation".dimmed()
    );
}

pub fn display_insights(insights: &[String]) {
    if insights.is_empty() {
        return;
    }

    println!("\n{}", "💡 SEASON INSIGHTS".bold().yellow());
    println!("{}\n", "=".repeat(60).yellow());
    for insight in insights {
        println!("• {}", insight);
    }
    println!();
}
