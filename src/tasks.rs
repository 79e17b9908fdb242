use chrono::Local;
use std::time::Duration;
use tracing::info;

use crate::apis::NbaStatsApi;
use crate::app::import_teams_use_case::ImportTeamsUseCase;
use crate::app::standings_use_case::StandingsUseCase;
use crate::common::error::Result;
use crate::common::types::{Season, StandingsRow, TeamRecord};
use crate::config::Config;
use crate::infra::json_output_adapter::read_json;
use crate::infra::{JsonFileOutputAdapter, ReqwestHttp};
use crate::pipeline::link::{link_standings, LinkReport};
use crate::pipeline::StandingsNormalizer;

fn stats_source(config: &Config) -> Result<NbaStatsApi> {
    let http = ReqwestHttp::new(Duration::from_secs(config.source.timeout_seconds))?;
    Ok(NbaStatsApi::new(Box::new(http), &config.source))
}

/// Season to fetch: an explicit token wins over the configured one.
pub fn resolve_season(config: &Config, season: Option<&str>) -> Season {
    let token = season.unwrap_or(&config.standings.season);
    Season::resolve(token, Local::now().date_naive())
}

pub async fn import_teams_once(config: &Config) -> Result<Vec<TeamRecord>> {
    let use_case = ImportTeamsUseCase::new(
        Box::new(stats_source(config)?),
        Box::new(JsonFileOutputAdapter::new(&config.output)),
    );
    use_case.run().await
}

pub async fn standings_once(config: &Config, season: &Season) -> Result<Vec<StandingsRow>> {
    let use_case = StandingsUseCase::new(
        Box::new(stats_source(config)?),
        Box::new(JsonFileOutputAdapter::new(&config.output)),
        StandingsNormalizer::from_config(&config.standings),
    );
    use_case.run(season).await
}

/// Pair previously written team and standings files.
pub fn link_once(config: &Config) -> Result<LinkReport> {
    let output = JsonFileOutputAdapter::new(&config.output);
    let teams: Vec<TeamRecord> = read_json(&output.teams_path())?;
    let rows: Vec<StandingsRow> = read_json(&output.standings_path())?;

    let report = link_standings(&teams, &rows);
    info!(
        matched = report.matched.len(),
        unmatched = report.unmatched.len(),
        "Linked standings to {} teams",
        teams.len()
    );
    Ok(report)
}
