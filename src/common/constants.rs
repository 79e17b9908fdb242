/// Column, file and endpoint constants shared by the pipelines

// Identifier column spellings seen in standings tables
pub const TEAM_ID_COLUMN: &str = "TEAM_ID";
pub const TEAM_ID_ALT_COLUMN: &str = "TeamID";

// Renamed columns the pipeline reads after projection
pub const TEAM_CITY_FIELD: &str = "team_city";
pub const TEAM_NAME_FIELD: &str = "team_name";
pub const POINTS_PER_GAME_FIELD: &str = "points_per_game";

/// Columns kept from the standings table, in output order
pub const STANDINGS_COLUMNS: [&str; 11] = [
    TEAM_ID_COLUMN,
    "TeamCity",
    "TeamName",
    "Conference",
    "Division",
    "WINS",
    "LOSSES",
    "WinPCT",
    "PointsPG",
    "OppPointsPG",
    "DiffPointsPG",
];

/// Source column -> output field. TEAM_ID keeps its name.
pub const STANDINGS_RENAMES: [(&str, &str); 10] = [
    ("TeamCity", TEAM_CITY_FIELD),
    ("TeamName", TEAM_NAME_FIELD),
    ("Conference", "conference"),
    ("Division", "division"),
    ("WINS", "wins"),
    ("LOSSES", "losses"),
    ("WinPCT", "win_pct"),
    ("PointsPG", POINTS_PER_GAME_FIELD),
    ("OppPointsPG", "opp_points_per_game"),
    ("DiffPointsPG", "diff_points_pg"),
];

// Sanity range for points per game, inclusive
pub const MIN_POINTS_PER_GAME: f64 = 80.0;
pub const MAX_POINTS_PER_GAME: f64 = 140.0;

pub const DEFAULT_SEASON: &str = "2025-26";
pub const CURRENT_SEASON_TOKEN: &str = "current";

// Output files (written to the configured output directory)
pub const TEAMS_FILE: &str = "nba_teams.json";
pub const STANDINGS_FILE: &str = "nba_team_stats.json";
pub const DEFAULT_CONFIG_FILE: &str = "sports_stats.toml";

// stats.nba.com
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";
pub const STANDINGS_ENDPOINT: &str = "leaguestandingsv3";
pub const NBA_LEAGUE_ID: &str = "00";
pub const REGULAR_SEASON: &str = "Regular Season";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Headers stats.nba.com expects before it will answer a request
pub const NBA_STATS_HEADERS: [(&str, &str); 6] = [
    ("User-Agent", "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36"),
    ("Referer", "https://www.nba.com/"),
    ("Origin", "https://www.nba.com"),
    ("Accept", "application/json, text/plain, */*"),
    ("x-nba-stats-origin", "stats"),
    ("x-nba-stats-token", "true"),
];
