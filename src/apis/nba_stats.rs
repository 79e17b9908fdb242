use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::apis::nba_teams;
use crate::app::ports::{HttpClientPort, StatsSourcePort};
use crate::common::constants::STANDINGS_ENDPOINT;
use crate::common::error::{Result, StatsError};
use crate::common::types::{RawTable, Season, SourceTeam};
use crate::config::SourceConfig;

/// Client for the stats.nba.com endpoints the pipelines consume.
pub struct NbaStatsApi {
    http: Box<dyn HttpClientPort>,
    base_url: String,
    league_id: String,
    season_type: String,
}

#[derive(Debug, Deserialize)]
struct ResultSet {
    #[serde(default)]
    name: String,
    headers: Vec<String>,
    #[serde(rename = "rowSet")]
    row_set: Vec<Vec<Value>>,
}

// Most endpoints answer with `resultSets`; a few use a single `resultSet`.
#[derive(Debug, Deserialize)]
struct StatsResponse {
    #[serde(rename = "resultSets", default)]
    result_sets: Vec<ResultSet>,
    #[serde(rename = "resultSet")]
    result_set: Option<ResultSet>,
}

/// Decode a stats response body into its tables, in response order.
pub fn parse_result_sets(bytes: &[u8]) -> Result<Vec<RawTable>> {
    let response: StatsResponse = serde_json::from_slice(bytes)
        .map_err(|e| StatsError::source_unavailable(format!("malformed stats response: {}", e)))?;

    let sets = if response.result_sets.is_empty() {
        response.result_set.into_iter().collect()
    } else {
        response.result_sets
    };

    Ok(sets
        .into_iter()
        .map(|set| RawTable::new(set.name, set.headers, set.row_set))
        .collect())
}

impl NbaStatsApi {
    pub fn new(http: Box<dyn HttpClientPort>, config: &SourceConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            league_id: config.league_id.clone(),
            season_type: config.season_type.clone(),
        }
    }

    pub fn standings_url(&self, season: &Season) -> Result<String> {
        let endpoint = format!("{}/{}", self.base_url.trim_end_matches('/'), STANDINGS_ENDPOINT);
        let url = reqwest::Url::parse_with_params(
            &endpoint,
            &[
                ("LeagueID", self.league_id.as_str()),
                ("Season", season.as_str()),
                ("SeasonType", self.season_type.as_str()),
            ],
        )
        .map_err(|e| StatsError::Config(format!("invalid base_url '{}': {}", self.base_url, e)))?;
        Ok(url.to_string())
    }
}

#[async_trait]
impl StatsSourcePort for NbaStatsApi {
    async fn list_teams(&self) -> Result<Vec<SourceTeam>> {
        Ok(nba_teams::all_teams())
    }

    #[instrument(skip(self, season), fields(season = %season))]
    async fn standings_tables(&self, season: &Season) -> Result<Vec<RawTable>> {
        let url = self.standings_url(season)?;
        info!("Fetching standings from {}", url);

        let response = self
            .http
            .get(&url)
            .await
            .map_err(StatsError::source_unavailable)?;

        if !(200..300).contains(&response.status) {
            return Err(StatsError::source_unavailable(format!(
                "{} returned HTTP {}",
                STANDINGS_ENDPOINT, response.status
            )));
        }
        debug!(
            bytes = response.bytes.len(),
            content_type = %response.content_type,
            "Standings response received"
        );

        let tables = parse_result_sets(&response.bytes)?;
        if tables.is_empty() {
            return Err(StatsError::source_unavailable(format!(
                "{} returned no result sets",
                STANDINGS_ENDPOINT
            )));
        }
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::HttpGetResult;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    struct MockHttp {
        status: u16,
        body: Vec<u8>,
        requested: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl HttpClientPort for MockHttp {
        async fn get(&self, url: &str) -> std::result::Result<HttpGetResult, String> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(HttpGetResult {
                status: self.status,
                bytes: self.body.clone(),
                content_type: "application/json".to_string(),
            })
        }
    }

    struct FailingHttp;

    #[async_trait]
    impl HttpClientPort for FailingHttp {
        async fn get(&self, _url: &str) -> std::result::Result<HttpGetResult, String> {
            Err("connection refused".to_string())
        }
    }

    fn api_with(status: u16, body: Value) -> (NbaStatsApi, Arc<Mutex<Vec<String>>>) {
        let requested = Arc::new(Mutex::new(Vec::new()));
        let http = MockHttp {
            status,
            body: serde_json::to_vec(&body).unwrap(),
            requested: requested.clone(),
        };
        (NbaStatsApi::new(Box::new(http), &SourceConfig::default()), requested)
    }

    fn standings_body() -> Value {
        json!({
            "resource": "leaguestandingsv3",
            "resultSets": [
                {
                    "name": "Standings",
                    "headers": ["TeamID", "TeamCity", "TeamName", "PointsPG"],
                    "rowSet": [[1610612738, "Boston", "Celtics", 120.6]]
                },
                {
                    "name": "Other",
                    "headers": ["X"],
                    "rowSet": []
                }
            ]
        })
    }

    #[test]
    fn test_parse_result_sets_keeps_order() {
        let tables = parse_result_sets(&serde_json::to_vec(&standings_body()).unwrap()).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].name, "Standings");
        assert_eq!(tables[0].headers, vec!["TeamID", "TeamCity", "TeamName", "PointsPG"]);
        assert_eq!(tables[0].rows[0][1], json!("Boston"));
    }

    #[test]
    fn test_parse_single_result_set() {
        let body = json!({
            "resultSet": { "name": "Standings", "headers": ["TEAM_ID"], "rowSet": [[1]] }
        });
        let tables = parse_result_sets(&serde_json::to_vec(&body).unwrap()).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows, vec![vec![json!(1)]]);
    }

    #[test]
    fn test_parse_rejects_html() {
        let err = parse_result_sets(b"<html>blocked</html>").unwrap_err();
        assert!(matches!(err, StatsError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_standings_request_carries_season() {
        let (api, requested) = api_with(200, standings_body());
        let tables = api.standings_tables(&Season::new("2024-25")).await.unwrap();
        assert_eq!(tables.len(), 2);

        let urls = requested.lock().unwrap();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].starts_with("https://stats.nba.com/stats/leaguestandingsv3?"));
        assert!(urls[0].contains("LeagueID=00"));
        assert!(urls[0].contains("Season=2024-25"));
        assert!(urls[0].contains("SeasonType=Regular+Season"));
    }

    #[tokio::test]
    async fn test_http_error_status_is_source_unavailable() {
        let (api, _) = api_with(503, json!({}));
        let err = api.standings_tables(&Season::new("2024-25")).await.unwrap_err();
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[tokio::test]
    async fn test_empty_result_sets_is_source_unavailable() {
        let (api, _) = api_with(200, json!({ "resultSets": [] }));
        let err = api.standings_tables(&Season::new("2024-25")).await.unwrap_err();
        assert!(matches!(err, StatsError::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_transport_failure_is_source_unavailable() {
        let api = NbaStatsApi::new(Box::new(FailingHttp), &SourceConfig::default());
        let err = api.standings_tables(&Season::new("2024-25")).await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_list_teams_uses_catalogue() {
        let api = NbaStatsApi::new(Box::new(FailingHttp), &SourceConfig::default());
        let teams = api.list_teams().await.unwrap();
        assert_eq!(teams.len(), 30);
        assert_eq!(teams[0].abbreviation, "ATL");
    }
}
