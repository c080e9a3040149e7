// src/dataset.rs
//
// Typed season dataset: schema + rows in source-document order. Built once
// per fetch by normalizing the raw bundle from specs::per_game; immutable
// afterwards. Row order is the league listing order and is preserved all
// the way through filtering.

use serde::Serialize;

use crate::core::sanitize::strip_marker;
use crate::error::ScrapeError;
use crate::specs::per_game::SeasonBundle;

/// Columns stored as text rather than numbers.
const TEXT_COLS: [&str; 3] = ["Player", "Pos", "Tm"];
/// Whole-count columns. Every other statistical column is a per-game
/// rate and keeps its fractional precision.
const INT_COLS: [&str; 3] = ["Age", "G", "GS"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Int,
    Float,
}

/// Canonical coercion policy for a column name.
pub fn column_kind(name: &str) -> ColumnKind {
    if TEXT_COLS.contains(&name) {
        ColumnKind::Text
    } else if INT_COLS.contains(&name) {
        ColumnKind::Int
    } else {
        ColumnKind::Float
    }
}

/// One cell of a normalized record.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl StatValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Int(v) => Some(*v as f64),
            StatValue::Float(v) => Some(*v),
            StatValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Text(s) => write!(f, "{s}"),
            StatValue::Int(v) => write!(f, "{v}"),
            StatValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One season's normalized records under one schema.
#[derive(Clone, Debug, Serialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<StatValue>>,
}

impl Dataset {
    /// Normalize a raw bundle into typed rows. Any cell that refuses its
    /// column's coercion fails the whole bundle.
    pub fn from_bundle(bundle: SeasonBundle) -> Result<Self, ScrapeError> {
        let SeasonBundle { columns, rows } = bundle;
        let kinds: Vec<ColumnKind> = columns.iter().map(|c| column_kind(c)).collect();

        let mut out = Vec::with_capacity(rows.len());
        for (ri, raw) in rows.into_iter().enumerate() {
            debug_assert_eq!(raw.len(), columns.len());
            let mut row = Vec::with_capacity(raw.len());
            for ((cell, kind), name) in raw.into_iter().zip(&kinds).zip(&columns) {
                row.push(normalize_cell(cell, *kind, name, ri)?);
            }
            out.push(row);
        }
        Ok(Dataset { columns, rows: out })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name. The ordered `columns` list is the one
    /// place callers discover what this season's schema holds.
    pub fn col(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell lookup by row index and column name.
    pub fn value(&self, row: usize, col: &str) -> Option<&StatValue> {
        let ci = self.col(col)?;
        self.rows.get(row)?.get(ci)
    }

    /// Player name of a row; "Player" is the leading column by contract.
    pub fn player(&self, row: usize) -> &str {
        self.rows[row][0].as_str().unwrap_or("")
    }
}

fn normalize_cell(
    cell: String,
    kind: ColumnKind,
    column: &str,
    row: usize,
) -> Result<StatValue, ScrapeError> {
    match kind {
        ColumnKind::Text => {
            let v = if column == "Player" { strip_marker(&cell) } else { cell };
            Ok(StatValue::Text(v))
        }
        // Sparse cells (a percentage with zero attempts) arrive empty and
        // count as zero; anything else non-numeric is a fault.
        ColumnKind::Int => {
            if cell.is_empty() {
                return Ok(StatValue::Int(0));
            }
            cell.parse::<i64>().map(StatValue::Int).map_err(|_| {
                ScrapeError::Normalize { row, column: s!(column), value: cell }
            })
        }
        ColumnKind::Float => {
            if cell.is_empty() {
                return Ok(StatValue::Float(0.0));
            }
            cell.parse::<f64>().map(StatValue::Float).map_err(|_| {
                ScrapeError::Normalize { row, column: s!(column), value: cell }
            })
        }
    }
}
