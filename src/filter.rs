// src/filter.rs
//
// Composite predicate over a Dataset: inclusive numeric ranges on a fixed
// set of stat columns plus optional membership sets on the text columns.
// Filtering yields an index view in dataset order; nothing is reordered
// or deduplicated, and an empty result is a valid outcome.

use std::collections::BTreeSet;

use crate::dataset::{Dataset, StatValue};

/// Inclusive [min, max] bound on a numeric column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

/// All predicates of one query. A `None` range or an empty membership set
/// means "no constraint on that column".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub age: Option<Range>,
    pub points: Option<Range>,
    pub assists: Option<Range>,
    pub threes: Option<Range>,
    pub rebounds: Option<Range>,
    pub free_throws: Option<Range>,
    pub players: BTreeSet<String>,
    pub positions: BTreeSet<String>,
    pub teams: BTreeSet<String>,
}

impl FilterCriteria {
    fn ranges(&self) -> [(&'static str, Option<Range>); 6] {
        [
            ("Age", self.age),
            ("PTS", self.points),
            ("AST", self.assists),
            ("3P", self.threes),
            ("TRB", self.rebounds),
            ("FT", self.free_throws),
        ]
    }

    fn members(&self) -> [(&'static str, &BTreeSet<String>); 3] {
        [
            ("Player", &self.players),
            ("Pos", &self.positions),
            ("Tm", &self.teams),
        ]
    }

    /// True when the record passes every active predicate. Membership
    /// filters only narrow further; they never substitute for a failed
    /// range check.
    pub fn matches(&self, ds: &Dataset, row: usize) -> bool {
        for (col, range) in self.ranges() {
            let Some(range) = range else { continue };
            match ds.value(row, col).and_then(StatValue::as_f64) {
                Some(v) if range.contains(v) => {}
                _ => return false,
            }
        }
        for (col, set) in self.members() {
            if set.is_empty() {
                continue;
            }
            match ds.value(row, col).and_then(StatValue::as_str) {
                Some(v) if set.contains(v) => {}
                _ => return false,
            }
        }
        true
    }

    /// Ordered subsequence of `ds` passing all active predicates.
    pub fn apply<'a>(&self, ds: &'a Dataset) -> FilteredView<'a> {
        let row_ix = (0..ds.len()).filter(|&i| self.matches(ds, i)).collect();
        FilteredView { row_ix, data: ds }
    }
}

/// Zero-copy filtered view: positions of kept rows in the source dataset.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    /// Positions of kept rows, in dataset order.
    pub row_ix: Vec<usize>,
    data: &'a Dataset,
}

impl<'a> FilteredView<'a> {
    /// The unfiltered view over a whole dataset.
    pub fn all(ds: &'a Dataset) -> Self {
        Self { row_ix: (0..ds.len()).collect(), data: ds }
    }

    pub fn len(&self) -> usize {
        self.row_ix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }

    pub fn dataset(&self) -> &Dataset {
        self.data
    }

    /// Borrow a kept row by view position (no cloning).
    pub fn row(&self, i: usize) -> Option<&[StatValue]> {
        self.row_ix
            .get(i)
            .and_then(|&ix| self.data.rows.get(ix))
            .map(Vec::as_slice)
    }

    /// Cell of a kept row by view position and column name.
    pub fn value(&self, i: usize, col: &str) -> Option<&StatValue> {
        let ix = *self.row_ix.get(i)?;
        self.data.value(ix, col)
    }

    /// Player name of a kept row.
    pub fn player(&self, i: usize) -> &str {
        self.row_ix
            .get(i)
            .map(|&ix| self.data.player(ix))
            .unwrap_or("")
    }

    /// Materialize owned rows (export and re-filter boundaries).
    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            columns: self.data.columns.clone(),
            rows: self
                .row_ix
                .iter()
                .map(|&ix| self.data.rows[ix].clone())
                .collect(),
        }
    }
}
