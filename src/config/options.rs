// src/config/options.rs
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::filter::FilterCriteria;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Write here instead of stdout.
    pub out: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
            out: None,
            include_headers: true,
        }
    }
}

/// Everything one invocation needs: which season, how to narrow it,
/// what to emit.
#[derive(Clone, Debug)]
pub struct QueryOptions {
    pub season: i32,
    pub criteria: FilterCriteria,
    /// Columns to chart (first three used); empty = table output.
    pub chart: Vec<String>,
    /// Row indices into the filtered result to mark highlighted.
    pub highlight: BTreeSet<usize>,
    pub output: OutputOptions,
    /// Print the season's column schema and exit.
    pub list_columns: bool,
}

impl QueryOptions {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            criteria: FilterCriteria::default(),
            chart: Vec::new(),
            highlight: BTreeSet::new(),
            output: OutputOptions::default(),
            list_columns: false,
        }
    }
}
