// src/error.rs
//
// One error type for the whole fetch stage. The three variants mirror the
// three ways a season query can die: transport, markup shape, cell coercion.
// The filter and chart layers never produce errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network or transport failure, non-success status, or timeout.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The page no longer matches the structural assumptions in `specs`.
    #[error("unexpected page shape: {0}")]
    Parse(String),

    /// A cell refused numeric coercion; the whole fetch fails.
    #[error("row {row}, column {column}: {value:?} is not numeric")]
    Normalize {
        row: usize,
        column: String,
        value: String,
    },
}
