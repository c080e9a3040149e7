// src/view.rs
//
// Chart-series projection: per-entity (player, value) series for up to
// three selected columns over a filtered view. No sums or means; the
// output is meant for direct bar-style plotting.

use std::collections::BTreeSet;

use log::warn;
use serde::Serialize;

use crate::dataset::{ColumnKind, StatValue, column_kind};
use crate::filter::FilteredView;

/// At most this many columns are charted per query.
pub const MAX_CHART_COLS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Normal,
    Highlighted,
}

/// One bar-style series: parallel labels/values/marks in view order.
#[derive(Clone, Debug, Serialize)]
pub struct Series {
    pub column: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub marks: Vec<Mark>,
}

/// Build series for the selected columns. Unknown and text-valued columns
/// are skipped; a stale selection after a schema change is not an error.
/// Highlight indices outside the view are ignored.
pub fn chart_series(
    view: &FilteredView<'_>,
    columns: &[String],
    highlight: &BTreeSet<usize>,
) -> Vec<Series> {
    let mut out = Vec::new();

    for name in columns.iter().take(MAX_CHART_COLS) {
        let Some(ci) = view.dataset().col(name) else {
            warn!("chart: unknown column {name:?} skipped");
            continue;
        };
        if column_kind(name) == ColumnKind::Text {
            warn!("chart: text column {name:?} skipped");
            continue;
        }

        let mut series = Series {
            column: name.clone(),
            labels: Vec::with_capacity(view.len()),
            values: Vec::with_capacity(view.len()),
            marks: Vec::with_capacity(view.len()),
        };
        for i in 0..view.len() {
            let value = view
                .row(i)
                .and_then(|r| r.get(ci))
                .and_then(StatValue::as_f64)
                .unwrap_or(0.0);
            series.labels.push(view.player(i).to_string());
            series.values.push(value);
            series.marks.push(if highlight.contains(&i) {
                Mark::Highlighted
            } else {
                Mark::Normal
            });
        }
        out.push(series);
    }

    out
}
