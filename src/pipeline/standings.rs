use serde_json::Value;
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

use crate::common::constants::{
    MAX_POINTS_PER_GAME, MIN_POINTS_PER_GAME, POINTS_PER_GAME_FIELD, STANDINGS_COLUMNS,
    STANDINGS_RENAMES, TEAM_CITY_FIELD, TEAM_ID_ALT_COLUMN, TEAM_ID_COLUMN, TEAM_NAME_FIELD,
};
use crate::common::error::{Result, StatsError};
use crate::common::types::{Field, RawTable, StandingsRow};
use crate::config::StandingsConfig;
use crate::pipeline::table::{float_cell, int_cell, missing_columns, select_available, text_cell};

/// Turns the raw standings table into validated, renamed, filtered rows.
#[derive(Debug, Clone)]
pub struct StandingsNormalizer {
    strict_columns: bool,
    points_range: RangeInclusive<f64>,
}

impl Default for StandingsNormalizer {
    fn default() -> Self {
        Self::new(false, MIN_POINTS_PER_GAME..=MAX_POINTS_PER_GAME)
    }
}

impl StandingsNormalizer {
    pub fn new(strict_columns: bool, points_range: RangeInclusive<f64>) -> Self {
        Self {
            strict_columns,
            points_range,
        }
    }

    pub fn from_config(config: &StandingsConfig) -> Self {
        Self::new(
            config.strict_columns,
            config.min_points_per_game..=config.max_points_per_game,
        )
    }

    pub fn normalize(&self, mut table: RawTable) -> Result<Vec<StandingsRow>> {
        normalize_identifier(&mut table)?;

        let mut table = self.project(&table)?;
        table.rename_columns(&STANDINGS_RENAMES);

        let total = table.rows.len();
        let table = self.retain_points_range(table)?;
        let rows = build_rows(&table)?;

        info!(
            total,
            retained = rows.len(),
            "Normalized standings table '{}'",
            table.name
        );
        Ok(rows)
    }

    /// Keep the desired columns that exist. Strict mode refuses to drop any.
    fn project(&self, table: &RawTable) -> Result<RawTable> {
        let missing = missing_columns(&STANDINGS_COLUMNS, &table.headers);
        if !missing.is_empty() {
            if self.strict_columns {
                return Err(StatsError::MissingColumn(missing.join(", ")));
            }
            warn!("Standings columns unavailable, dropping: {}", missing.join(", "));
        }

        let available = select_available(&STANDINGS_COLUMNS, &table.headers);
        Ok(table.project(&available))
    }

    /// Drop rows whose points per game is null or outside the configured range.
    pub fn retain_points_range(&self, mut table: RawTable) -> Result<RawTable> {
        let idx = table
            .column_index(POINTS_PER_GAME_FIELD)
            .ok_or_else(|| StatsError::MissingColumn(POINTS_PER_GAME_FIELD.to_string()))?;

        let rows = std::mem::take(&mut table.rows);
        let mut kept = Vec::with_capacity(rows.len());
        for (row_idx, row) in rows.into_iter().enumerate() {
            let ppg = row
                .get(idx)
                .map(float_cell)
                .unwrap_or(Ok(None))
                .map_err(|message| invalid_cell(POINTS_PER_GAME_FIELD, row_idx, message))?;

            match ppg {
                Some(value) if self.points_range.contains(&value) => kept.push(row),
                Some(value) => debug!(row = row_idx, value, "Dropping row outside points range"),
                None => debug!(row = row_idx, "Dropping row without points per game"),
            }
        }

        table.rows = kept;
        Ok(table)
    }
}

/// Reconcile the two identifier spellings into `TEAM_ID`.
pub fn normalize_identifier(table: &mut RawTable) -> Result<()> {
    if table.rename_column(TEAM_ID_ALT_COLUMN, TEAM_ID_COLUMN) {
        debug!("Renamed {} to {}", TEAM_ID_ALT_COLUMN, TEAM_ID_COLUMN);
        return Ok(());
    }
    if table.has_column(TEAM_ID_COLUMN) {
        return Ok(());
    }
    Err(StatsError::Schema(format!(
        "neither {} nor {} present in table '{}' (columns: {})",
        TEAM_ID_ALT_COLUMN,
        TEAM_ID_COLUMN,
        table.name,
        table.headers.join(", ")
    )))
}

fn invalid_cell(column: &str, row: usize, message: String) -> StatsError {
    StatsError::InvalidCell {
        column: column.to_string(),
        row,
        message,
    }
}

fn field<T>(
    table: &RawTable,
    row: usize,
    column: &str,
    convert: fn(&Value) -> std::result::Result<Option<T>, String>,
) -> Result<Field<T>> {
    match table.column_index(column) {
        None => Ok(None),
        Some(idx) => convert(table.cell(row, idx))
            .map(Some)
            .map_err(|message| invalid_cell(column, row, message)),
    }
}

fn required<T>(
    table: &RawTable,
    row: usize,
    column: &str,
    convert: fn(&Value) -> std::result::Result<Option<T>, String>,
) -> Result<T> {
    field(table, row, column, convert)?
        .ok_or_else(|| StatsError::MissingColumn(column.to_string()))?
        .ok_or_else(|| invalid_cell(column, row, "value is null".to_string()))
}

fn full_name(city: &Field<String>, name: &Field<String>) -> Field<String> {
    match (city, name) {
        (Some(Some(city)), Some(Some(name))) => Some(Some(format!("{} {}", city, name))),
        (Some(_), Some(_)) => Some(None),
        _ => None,
    }
}

fn build_rows(table: &RawTable) -> Result<Vec<StandingsRow>> {
    (0..table.rows.len())
        .map(|row| -> Result<StandingsRow> {
            let source_team_id = required(table, row, TEAM_ID_COLUMN, int_cell)?;
            let team_city = field(table, row, TEAM_CITY_FIELD, text_cell)?;
            let team_name = field(table, row, TEAM_NAME_FIELD, text_cell)?;
            let full_name = full_name(&team_city, &team_name);

            Ok(StandingsRow {
                source_team_id,
                team_city,
                team_name,
                conference: field(table, row, "conference", text_cell)?,
                division: field(table, row, "division", text_cell)?,
                wins: field(table, row, "wins", int_cell)?,
                losses: field(table, row, "losses", int_cell)?,
                win_pct: field(table, row, "win_pct", float_cell)?,
                points_per_game: required(table, row, POINTS_PER_GAME_FIELD, float_cell)?,
                opp_points_per_game: field(table, row, "opp_points_per_game", float_cell)?,
                diff_points_pg: field(table, row, "diff_points_pg", float_cell)?,
                full_name,
                team_id: source_team_id,
            })
        })
        .collect()
}
