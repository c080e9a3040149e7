// src/specs/per_game.rs
//! Scraping spec for the league per-game page,
//! `/leagues/NBA_<year>_per_game.html`.
//!
//! Structural assumptions (violations fail as `Parse`, never guessed past):
//! - One header element carries `class="thead"`; its inner text lists the
//!   column names one per line, preceded by a blank line and the rank
//!   label, and followed by one stray trailing token. The first occurrence
//!   is canonical (the class repeats on mid-table header rows).
//! - Each qualifying player row carries `class="full_table"`. Its rank
//!   cell is a `<th>`, so the `<td>` cells line up 1:1 with the schema
//!   starting at "Player".
//! - Rows of any other class (partial stints, repeated headers) are not
//!   part of the dataset.

use log::{debug, info};

use crate::core::html::{
    inner_after_open_tag, next_class_block_ci, next_tag_block_ci, strip_tags,
    strip_tags_keep_lines,
};
use crate::core::net;
use crate::core::sanitize::{normalize_entities, normalize_ws};
use crate::error::ScrapeError;

/// Header row class (repeats mid-table; the first occurrence is canonical).
const HEADER_CLASS: &str = "thead";
/// Class carried by complete player-season rows.
const ROW_CLASS: &str = "full_table";

/// Raw extraction result: column names plus string cells, both in
/// document order. Consumed by `dataset::Dataset::from_bundle`.
#[derive(Debug)]
pub struct SeasonBundle {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn page_path(year: i32) -> String {
    format!("/leagues/NBA_{year}_per_game.html")
}

/// Fetch one season page and extract the raw table.
pub fn fetch(year: i32) -> Result<SeasonBundle, ScrapeError> {
    let doc = net::http_get(&page_path(year))?;
    extract(&doc)
}

/// Extract (schema, raw rows) from a page document. Offline-testable.
pub fn extract(doc: &str) -> Result<SeasonBundle, ScrapeError> {
    let columns = read_schema(doc)?;
    let rows = read_rows(doc, columns.len())?;
    info!("per_game: {} columns, {} rows", columns.len(), rows.len());
    Ok(SeasonBundle { columns, rows })
}

/// Tokenize the header element's text and cut it down to the schema:
/// drop the leading artifact and rank label, drop the stray trailing
/// token, keep the rest with "Player" leading.
fn read_schema(doc: &str) -> Result<Vec<String>, ScrapeError> {
    let (hs, he) = next_class_block_ci(doc, HEADER_CLASS, 0)
        .ok_or_else(|| ScrapeError::Parse(s!("header row not found")))?;

    let text = strip_tags_keep_lines(inner_after_open_tag(&doc[hs..he]));
    let tokens: Vec<String> = text
        .split('\n')
        .map(|t| normalize_ws(&normalize_entities(t)))
        .collect();
    if tokens.len() < 4 {
        return Err(ScrapeError::Parse(format!(
            "header has only {} tokens",
            tokens.len()
        )));
    }

    let columns: Vec<String> = tokens[2..tokens.len() - 1].to_vec();

    if columns.first().map(String::as_str) != Some("Player") {
        return Err(ScrapeError::Parse(format!(
            "schema does not start with Player: {:?}",
            columns.first()
        )));
    }
    for (i, name) in columns.iter().enumerate() {
        if name.is_empty() {
            return Err(ScrapeError::Parse(format!("empty column name at index {i}")));
        }
        if columns[..i].contains(name) {
            return Err(ScrapeError::Parse(format!("duplicate column name {name:?}")));
        }
    }
    Ok(columns)
}

/// Collect the `<td>` cell texts of every full-table row, in document
/// order, checking each against the schema width. A mismatched row is a
/// data-integrity fault, not something to zip loosely.
fn read_rows(doc: &str, want: usize) -> Result<Vec<Vec<String>>, ScrapeError> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut pos = 0usize;

    while let Some((rs, re)) = next_class_block_ci(doc, ROW_CLASS, pos) {
        let block = &doc[rs..re];
        pos = re;

        let mut cells = Vec::with_capacity(want);
        let mut td_pos = 0usize;
        while let Some((ts, te)) = next_tag_block_ci(block, "<td", "</td>", td_pos) {
            let inner = inner_after_open_tag(&block[ts..te]);
            cells.push(strip_tags(&normalize_entities(inner)));
            td_pos = te;
        }

        if cells.len() != want {
            return Err(ScrapeError::Parse(format!(
                "row {} has {} cells, schema has {want}",
                rows.len(),
                cells.len()
            )));
        }
        rows.push(cells);
    }

    if rows.is_empty() {
        return Err(ScrapeError::Parse(s!("no full-table rows found")));
    }
    debug!("per_game: extracted {} raw rows", rows.len());
    Ok(rows)
}
