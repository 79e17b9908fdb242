use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_SEASON, DEFAULT_TIMEOUT_SECONDS, MAX_POINTS_PER_GAME,
    MIN_POINTS_PER_GAME, NBA_LEAGUE_ID, NBA_STATS_BASE_URL, REGULAR_SEASON, STANDINGS_FILE,
    TEAMS_FILE,
};
use crate::common::error::{Result, StatsError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub standings: StandingsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    pub league_id: String,
    pub season_type: String,
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: NBA_STATS_BASE_URL.to_string(),
            league_id: NBA_LEAGUE_ID.to_string(),
            season_type: REGULAR_SEASON.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StandingsConfig {
    /// Season token, or `current` for the season in progress
    pub season: String,
    /// Fail when a desired standings column is missing instead of dropping it
    pub strict_columns: bool,
    pub min_points_per_game: f64,
    pub max_points_per_game: f64,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON.to_string(),
            strict_columns: false,
            min_points_per_game: MIN_POINTS_PER_GAME,
            max_points_per_game: MAX_POINTS_PER_GAME,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub teams_file: String,
    pub standings_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            teams_file: TEAMS_FILE.to_string(),
            standings_file: STANDINGS_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration. An explicit path must exist; the default
    /// `sports_stats.toml` is optional and falls back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            StatsError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let s = &self.standings;
        if s.min_points_per_game > s.max_points_per_game {
            return Err(StatsError::Config(format!(
                "min_points_per_game ({}) is greater than max_points_per_game ({})",
                s.min_points_per_game, s.max_points_per_game
            )));
        }
        if self.source.timeout_seconds == 0 {
            return Err(StatsError::Config("timeout_seconds must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_fixed_pipeline_shape() {
        let config = Config::default();
        assert_eq!(config.standings.season, "2025-26");
        assert!(!config.standings.strict_columns);
        assert_eq!(config.standings.min_points_per_game, 80.0);
        assert_eq!(config.standings.max_points_per_game, 140.0);
        assert_eq!(config.output.teams_file, "nba_teams.json");
        assert_eq!(config.output.standings_file, "nba_team_stats.json");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[standings]\nseason = \"2023-24\"\nstrict_columns = true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.standings.season, "2023-24");
        assert!(config.standings.strict_columns);
        assert_eq!(config.source.base_url, "https://stats.nba.com/stats");
        assert_eq!(config.output.dir, PathBuf::from("."));
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, StatsError::Config(_)));
    }

    #[test]
    fn test_inverted_points_range_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[standings]\nmin_points_per_game = 150.0").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("min_points_per_game"));
    }
}
