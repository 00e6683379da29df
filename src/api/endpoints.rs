// CollegeFootballData API endpoint paths, joined onto Config::base_url.

pub const GAMES_ENDPOINT: &str = "/games";
pub const WEATHER_ENDPOINT: &str = "/games/weather";
pub const TEAM_STATS_ENDPOINT: &str = "/games/teams";
