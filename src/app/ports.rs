use async_trait::async_trait;
use std::path::PathBuf;

use crate::common::error::Result;
use crate::common::types::{RawTable, Season, SourceTeam, StandingsRow, TeamRecord};

/// External statistics provider
#[async_trait]
pub trait StatsSourcePort: Send + Sync {
    /// Every franchise, in provider order
    async fn list_teams(&self) -> Result<Vec<SourceTeam>>;

    /// All tables the standings query returns for `season`; callers use the first
    async fn standings_tables(&self, season: &Season) -> Result<Vec<RawTable>>;
}

// Ingest-side ports
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str) -> std::result::Result<HttpGetResult, String>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub status: u16,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Destination for finished record sets
#[async_trait]
pub trait RecordOutputPort: Send + Sync {
    async fn write_teams(&self, teams: &[TeamRecord]) -> Result<PathBuf>;
    async fn write_standings(&self, rows: &[StandingsRow]) -> Result<PathBuf>;
}
