// src/runner.rs
//
// The one fetch → extract → normalize pipeline, shared by every query
// path, plus the CLI-facing run() that layers filtering, charting and
// output on top of it.

use std::error::Error;
use std::fs;

use log::info;

use crate::config::options::{OutputFormat, QueryOptions};
use crate::csv::{self, Delim};
use crate::dataset::Dataset;
use crate::error::ScrapeError;
use crate::specs::per_game;
use crate::view;

/// Fetch one season and produce the normalized dataset. Errors surface
/// before anything is emitted; a failed fetch leaves whatever the caller
/// already holds untouched.
pub fn fetch_season(year: i32) -> Result<Dataset, ScrapeError> {
    let bundle = per_game::fetch(year)?;
    let ds = Dataset::from_bundle(bundle)?;
    info!("season {year}: {} players", ds.len());
    Ok(ds)
}

/// Full CLI query: fetch, filter, then print or write the chosen output.
pub fn run(opts: &QueryOptions) -> Result<(), Box<dyn Error>> {
    let ds = fetch_season(opts.season)?;

    if opts.list_columns {
        for name in &ds.columns {
            println!("{name}");
        }
        return Ok(());
    }

    let view = opts.criteria.apply(&ds);
    info!("filter kept {} of {} rows", view.len(), ds.len());

    let mut text = if opts.chart.is_empty() {
        render_dataset(&view.to_dataset(), opts)?
    } else {
        let series = view::chart_series(&view, &opts.chart, &opts.highlight);
        serde_json::to_string_pretty(&series)?
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }

    match &opts.output.out {
        Some(path) => {
            fs::write(path, text)?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn render_dataset(ds: &Dataset, opts: &QueryOptions) -> Result<String, Box<dyn Error>> {
    Ok(match opts.output.format {
        OutputFormat::Csv => csv::dataset_to_string(ds, opts.output.include_headers, Delim::Csv),
        OutputFormat::Tsv => csv::dataset_to_string(ds, opts.output.include_headers, Delim::Tsv),
        OutputFormat::Json => serde_json::to_string_pretty(ds)?,
    })
}
