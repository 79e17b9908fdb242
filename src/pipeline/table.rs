use serde_json::Value;

use crate::common::types::RawTable;

static NULL: Value = Value::Null;

/// Desired columns that are available, keeping the desired order.
pub fn select_available<'a>(desired: &[&'a str], available: &[String]) -> Vec<&'a str> {
    desired
        .iter()
        .copied()
        .filter(|column| available.iter().any(|a| a == column))
        .collect()
}

/// Desired columns that are not available, keeping the desired order.
pub fn missing_columns<'a>(desired: &[&'a str], available: &[String]) -> Vec<&'a str> {
    desired
        .iter()
        .copied()
        .filter(|column| !available.iter().any(|a| a == column))
        .collect()
}

impl RawTable {
    /// Rename `from` to `to`. An existing `to` column is discarded first.
    /// Returns false when `from` is not present.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        if !self.has_column(from) {
            return false;
        }
        if from != to {
            if let Some(existing) = self.column_index(to) {
                self.drop_column(existing);
            }
        }
        if let Some(idx) = self.column_index(from) {
            self.headers[idx] = to.to_string();
        }
        true
    }

    pub fn rename_columns(&mut self, renames: &[(&str, &str)]) {
        for (from, to) in renames {
            self.rename_column(from, to);
        }
    }

    pub fn drop_column(&mut self, idx: usize) {
        if idx >= self.headers.len() {
            return;
        }
        self.headers.remove(idx);
        for row in &mut self.rows {
            if idx < row.len() {
                row.remove(idx);
            }
        }
    }

    /// New table holding `columns` in the given order; unknown names are skipped.
    pub fn project(&self, columns: &[&str]) -> RawTable {
        let indices: Vec<usize> = columns
            .iter()
            .filter_map(|column| self.column_index(column))
            .collect();

        let headers = indices.iter().map(|&i| self.headers[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        RawTable::new(self.name.clone(), headers, rows)
    }

    /// Cell value; short rows read as null.
    pub fn cell(&self, row: usize, column: usize) -> &Value {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&NULL)
    }
}

pub fn int_cell(value: &Value) -> Result<Option<i64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(Some(f as i64)),
                _ => Err(format!("expected an integer, got {}", n)),
            }
        }
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| format!("expected an integer, got {:?}", s)),
        other => Err(format!("expected an integer, got {}", other)),
    }
}

pub fn float_cell(value: &Value) -> Result<Option<f64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| format!("expected a number, got {}", n)),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| format!("expected a number, got {:?}", s)),
        other => Err(format!("expected a number, got {}", other)),
    }
}

pub fn text_cell(value: &Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(format!("expected text, got {}", other)),
    }
}
