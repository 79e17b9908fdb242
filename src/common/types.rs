use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::constants::CURRENT_SEASON_TOKEN;

/// A franchise as listed by the team catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTeam {
    pub id: i64,
    pub full_name: String,
    pub abbreviation: String,
    pub nickname: String,
    pub city: String,
    pub state: String,
    pub year_founded: i32,
}

/// Simplified team record written by the team importer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: i64,
    pub abbreviation: String,
    pub city: String,
    pub name: String,
}

/// One result set from the stats API: named columns over loosely typed rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl RawTable {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<serde_json::Value>>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }
}

/// A column that may be absent from the table (outer `None`, key omitted)
/// or present with a null cell (inner `None`, serialized as `null`).
pub type Field<T> = Option<Option<T>>;

/// Normalized standings row. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    #[serde(rename = "TEAM_ID")]
    pub source_team_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_city: Field<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Field<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conference: Field<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Field<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wins: Field<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub losses: Field<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_pct: Field<f64>,
    pub points_per_game: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opp_points_per_game: Field<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_points_pg: Field<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Field<String>,
    pub team_id: i64,
}

impl StandingsRow {
    pub fn city(&self) -> Option<&str> {
        self.team_city.as_ref().and_then(|c| c.as_deref())
    }

    pub fn name(&self) -> Option<&str> {
        self.team_name.as_ref().and_then(|n| n.as_deref())
    }
}

/// Season token passed through to the stats API, e.g. `2025-26`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(String);

impl Season {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Season in progress on `date`; a season starts on October 1st.
    pub fn containing(date: NaiveDate) -> Self {
        let start = if date.month() >= 10 {
            date.year()
        } else {
            date.year() - 1
        };
        Self(format!("{}-{:02}", start, (start + 1).rem_euclid(100)))
    }

    /// Resolve a configured token, expanding `current` against `today`.
    pub fn resolve(token: &str, today: NaiveDate) -> Self {
        if token.trim().eq_ignore_ascii_case(CURRENT_SEASON_TOKEN) {
            Self::containing(today)
        } else {
            Self::new(token.trim())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
