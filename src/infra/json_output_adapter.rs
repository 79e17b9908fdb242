use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::ports::RecordOutputPort;
use crate::common::error::Result;
use crate::common::types::{StandingsRow, TeamRecord};
use crate::config::OutputConfig;

/// Writes each record set as a 2-space indented JSON array, replacing the previous file.
pub struct JsonFileOutputAdapter {
    dir: PathBuf,
    teams_file: String,
    standings_file: String,
}

impl JsonFileOutputAdapter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            teams_file: config.teams_file.clone(),
            standings_file: config.standings_file.clone(),
        }
    }

    pub fn teams_path(&self) -> PathBuf {
        self.dir.join(&self.teams_file)
    }

    pub fn standings_path(&self) -> PathBuf {
        self.dir.join(&self.standings_file)
    }
}

/// Serialize fully before touching the file so a failed encode leaves the old output intact.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read(path)?;
    Ok(serde_json::from_slice(&content)?)
}

#[async_trait]
impl RecordOutputPort for JsonFileOutputAdapter {
    async fn write_teams(&self, teams: &[TeamRecord]) -> Result<PathBuf> {
        let path = self.teams_path();
        write_json(&path, teams)?;
        info!("Saved {} teams to {}", teams.len(), path.display());
        Ok(path)
    }

    async fn write_standings(&self, rows: &[StandingsRow]) -> Result<PathBuf> {
        let path = self.standings_path();
        write_json(&path, rows)?;
        info!("Saved {} standings rows to {}", rows.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter_in(dir: &Path) -> JsonFileOutputAdapter {
        JsonFileOutputAdapter::new(&OutputConfig {
            dir: dir.to_path_buf(),
            ..OutputConfig::default()
        })
    }

    #[tokio::test]
    async fn test_write_teams_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = adapter_in(dir.path());
        let teams = vec![TeamRecord {
            id: 1610612748,
            abbreviation: "MIA".to_string(),
            city: "Miami".to_string(),
            name: "Miami Heat".to_string(),
        }];

        let path = adapter.write_teams(&teams).await.unwrap();
        assert_eq!(path, dir.path().join("nba_teams.json"));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[\n  {\n    \"id\": 1610612748,\n    \"abbreviation\": \"MIA\",\n    \"city\": \"Miami\",\n    \"name\": \"Miami Heat\"\n  }\n]"
        );

        let back: Vec<TeamRecord> = read_json(&path).unwrap();
        assert_eq!(back, teams);
    }

    #[tokio::test]
    async fn test_write_creates_missing_dir_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = adapter_in(&dir.path().join("out"));

        adapter.write_standings(&[]).await.unwrap();
        let path = adapter.write_standings(&[]).await.unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
    }
}
