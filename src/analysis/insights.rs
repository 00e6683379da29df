use super::normalizer::{ProcessedGame, TimeCategory, WeatherCategory};
use super::performance::{CategoryAggregate, HomeAway};

/// Strict `>` scan: the earliest-seen maximum wins ties, so the canonical
/// bucket order doubles as the tie-break order.
fn best_by_win_rate<K: Copy>(entries: &[(K, CategoryAggregate)]) -> Option<(K, CategoryAggregate)> {
    let mut best: Option<(K, CategoryAggregate)> = None;
    for &(key, agg) in entries {
        match best {
            Some((_, current)) if agg.win_rate <= current.win_rate => {}
            _ => best = Some((key, agg)),
        }
    }
    best
}

fn rate_pct(rate: f64) -> f64 {
    rate * 100.0
}

/// Derive the headline summary lines from the season aggregates, in fixed
/// order: overall record, best kickoff window, best weather, home vs away,
/// average scoreline. Lines whose backing aggregate is empty are skipped.
pub fn generate_insights(
    games: &[ProcessedGame],
    weather_agg: &[(WeatherCategory, CategoryAggregate)],
    time_agg: &[(TimeCategory, CategoryAggregate)],
    home_away_agg: &[(HomeAway, CategoryAggregate)],
) -> Vec<String> {
    let mut insights = Vec::new();

    let decided: Vec<&ProcessedGame> = games.iter().filter(|g| g.won.is_some()).collect();
    if !decided.is_empty() {
        let wins = decided.iter().filter(|g| g.won == Some(true)).count();
        let losses = decided.len() - wins;
        insights.push(format!(
            "Overall record: {}-{} ({:.1}% win rate)",
            wins,
            losses,
            rate_pct(wins as f64 / decided.len() as f64)
        ));
    }

    if let Some((slot, agg)) = best_by_win_rate(time_agg) {
        insights.push(format!(
            "Best kickoff window: {} ({:.1}% win rate over {} games)",
            slot,
            rate_pct(agg.win_rate),
            agg.games_played
        ));
    }

    if let Some((bucket, agg)) = best_by_win_rate(weather_agg) {
        let temps: Vec<f64> = games.iter().filter_map(|g| g.temperature).collect();
        let avg_temp = temps.iter().sum::<f64>() / temps.len() as f64;
        insights.push(format!(
            "Best conditions: {} ({:.1}% win rate); average kickoff temperature {:.1}\u{b0}F",
            bucket,
            rate_pct(agg.win_rate),
            avg_temp
        ));
    }

    let home = home_away_agg.iter().find(|(k, _)| *k == HomeAway::Home);
    let away = home_away_agg.iter().find(|(k, _)| *k == HomeAway::Away);
    if let (Some((_, home)), Some((_, away))) = (home, away) {
        let line = if home.win_rate >= away.win_rate {
            format!(
                "Stronger at home: {:.1}% at home vs {:.1}% on the road",
                rate_pct(home.win_rate),
                rate_pct(away.win_rate)
            )
        } else {
            format!(
                "Stronger on the road: {:.1}% away vs {:.1}% at home",
                rate_pct(away.win_rate),
                rate_pct(home.win_rate)
            )
        };
        insights.push(line);
    }

    let scored: Vec<&ProcessedGame> = games
        .iter()
        .filter(|g| g.team_score.is_some() && g.opponent_score.is_some())
        .collect();
    if !scored.is_empty() {
        let n = scored.len() as f64;
        let points_for: f64 = scored.iter().map(|g| g.team_score.unwrap_or(0) as f64).sum();
        let points_against: f64 = scored
            .iter()
            .map(|g| g.opponent_score.unwrap_or(0) as f64)
            .sum();
        insights.push(format!(
            "Average scoreline: {:.1} - {:.1}",
            points_for / n,
            points_against / n
        ));
    }

    insights
}
