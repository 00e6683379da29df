use super::normalizer::ProcessedGame;

/// A game with no scores, weather, or stats attached.
pub(crate) fn blank_game(id: u64) -> ProcessedGame {
    ProcessedGame {
        game_id: id,
        season: Some(2024),
        week: Some(1),
        date: None,
        is_home: true,
        opponent: "Opponent".to_string(),
        team_score: None,
        opponent_score: None,
        won: None,
        point_differential: None,
        neutral_site: false,
        conference_game: false,
        temperature: None,
        humidity: None,
        precipitation: None,
        wind_speed: None,
        weather_condition: None,
        time_category: None,
        weather_category: None,
        total_yards: None,
        passing_yards: None,
        rushing_yards: None,
        turnovers: None,
    }
}

/// A home game with a decided outcome.
pub(crate) fn scored_game(id: u64, team_score: i64, opponent_score: i64) -> ProcessedGame {
    let mut game = blank_game(id);
    game.team_score = Some(team_score);
    game.opponent_score = Some(opponent_score);
    game.won = Some(team_score > opponent_score);
    game.point_differential = Some(team_score - opponent_score);
    game
}
