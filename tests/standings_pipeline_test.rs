use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use sports_stats::app::ports::StatsSourcePort;
use sports_stats::app::standings_use_case::StandingsUseCase;
use sports_stats::common::types::{RawTable, Season, SourceTeam};
use sports_stats::config::OutputConfig;
use sports_stats::infra::JsonFileOutputAdapter;
use sports_stats::pipeline::StandingsNormalizer;
use sports_stats::StatsError;
use std::path::Path;
use tempfile::tempdir;

struct CannedStandings {
    table: RawTable,
}

#[async_trait]
impl StatsSourcePort for CannedStandings {
    async fn list_teams(&self) -> sports_stats::Result<Vec<SourceTeam>> {
        Ok(Vec::new())
    }

    async fn standings_tables(&self, _season: &Season) -> sports_stats::Result<Vec<RawTable>> {
        Ok(vec![self.table.clone()])
    }
}

fn league_table() -> RawTable {
    let headers = [
        "LeagueID", "SeasonID", "TeamID", "TeamCity", "TeamName", "Conference", "Division",
        "WINS", "LOSSES", "WinPCT", "PointsPG", "OppPointsPG", "DiffPointsPG",
    ];
    let row = |id: i64, city: &str, name: &str, conf: &str, w: i64, l: i64, ppg: f64| -> Vec<Value> {
        vec![
            json!("00"),
            json!("22025"),
            json!(id),
            json!(city),
            json!(name),
            json!(conf),
            json!("Division"),
            json!(w),
            json!(l),
            json!(w as f64 / (w + l) as f64),
            json!(ppg),
            json!(ppg - 2.5),
            json!(2.5),
        ]
    };

    RawTable::new(
        "Standings",
        headers.iter().map(|h| h.to_string()).collect(),
        vec![
            row(1610612760, "Oklahoma City", "Thunder", "West", 60, 12, 120.1),
            row(1610612747, "Los Angeles", "Lakers", "West", 44, 30, 113.8),
            row(1610612738, "Boston", "Celtics", "East", 55, 20, 75.0),
            row(1610612748, "Miami", "Heat", "East", 36, 38, 80.0),
            row(1610612744, "Golden State", "Warriors", "West", 41, 33, 140.0),
            row(1610612765, "Detroit", "Pistons", "East", 40, 34, 141.0),
        ],
    )
}

fn use_case_writing_to(dir: &Path, table: RawTable) -> StandingsUseCase {
    StandingsUseCase::new(
        Box::new(CannedStandings { table }),
        Box::new(JsonFileOutputAdapter::new(&OutputConfig {
            dir: dir.to_path_buf(),
            ..OutputConfig::default()
        })),
        StandingsNormalizer::default(),
    )
}

#[tokio::test]
async fn test_standings_file_matches_returned_rows() -> Result<()> {
    let dir = tempdir()?;
    let use_case = use_case_writing_to(dir.path(), league_table());

    let rows = use_case.run(&Season::new("2025-26")).await?;
    let ids: Vec<i64> = rows.iter().map(|r| r.team_id).collect();
    assert_eq!(ids, vec![1610612760, 1610612747, 1610612748, 1610612744]);

    let written: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("nba_team_stats.json"))?)?;
    assert_eq!(written.len(), rows.len());

    for obj in &written {
        let ppg = obj["points_per_game"].as_f64().unwrap();
        assert!((80.0..=140.0).contains(&ppg));
        assert_eq!(obj["team_id"], obj["TEAM_ID"]);
        assert!(obj.get("TeamID").is_none());
        let expected = format!(
            "{} {}",
            obj["team_city"].as_str().unwrap(),
            obj["team_name"].as_str().unwrap()
        );
        assert_eq!(obj["full_name"], json!(expected));
    }
    assert_eq!(written[1]["full_name"], "Los Angeles Lakers");
    Ok(())
}

#[tokio::test]
async fn test_repeated_runs_are_byte_identical() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nba_team_stats.json");

    use_case_writing_to(dir.path(), league_table())
        .run(&Season::new("2025-26"))
        .await?;
    let first = std::fs::read(&path)?;

    use_case_writing_to(dir.path(), league_table())
        .run(&Season::new("2025-26"))
        .await?;
    let second = std::fs::read(&path)?;

    assert_eq!(first, second);
    assert!(String::from_utf8(first)?.starts_with("[\n  {\n    \"TEAM_ID\": "));
    Ok(())
}

#[tokio::test]
async fn test_schema_failure_leaves_no_file() -> Result<()> {
    let dir = tempdir()?;
    let mut table = league_table();
    table.headers[2] = "FranchiseKey".to_string();

    let err = use_case_writing_to(dir.path(), table)
        .run(&Season::new("2025-26"))
        .await
        .unwrap_err();

    assert!(matches!(err, StatsError::Schema(_)));
    assert!(!dir.path().join("nba_team_stats.json").exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_points_column_leaves_previous_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("nba_team_stats.json");
    std::fs::write(&path, "previous")?;

    let mut table = league_table();
    table.headers[10] = "PTS".to_string();

    let err = use_case_writing_to(dir.path(), table)
        .run(&Season::new("2025-26"))
        .await
        .unwrap_err();

    assert!(matches!(err, StatsError::MissingColumn(_)));
    assert_eq!(std::fs::read_to_string(&path)?, "previous");
    Ok(())
}
