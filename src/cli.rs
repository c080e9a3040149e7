// src/cli.rs
use std::env;
use std::path::PathBuf;

use crate::config::options::{OutputFormat, QueryOptions};
use crate::filter::Range;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_cli(env::args().skip(1))?;
    crate::runner::run(&opts)
}

pub fn parse_cli<I: Iterator<Item = String>>(
    mut args: I,
) -> Result<QueryOptions, Box<dyn std::error::Error>> {
    let mut season: Option<i32> = None;
    let mut opts = QueryOptions::new(0);

    while let Some(a) = args.next() {
        match a.as_str() {
            "--age" => opts.criteria.age = Some(parse_range(&next(&mut args, "--age")?)?),
            "--pts" => opts.criteria.points = Some(parse_range(&next(&mut args, "--pts")?)?),
            "--ast" => opts.criteria.assists = Some(parse_range(&next(&mut args, "--ast")?)?),
            "--3p" => opts.criteria.threes = Some(parse_range(&next(&mut args, "--3p")?)?),
            "--trb" => opts.criteria.rebounds = Some(parse_range(&next(&mut args, "--trb")?)?),
            "--ft" => opts.criteria.free_throws = Some(parse_range(&next(&mut args, "--ft")?)?),
            "--player" => opts.criteria.players.extend(parse_list(&next(&mut args, "--player")?)),
            "--pos" => opts.criteria.positions.extend(parse_list(&next(&mut args, "--pos")?)),
            "--team" => opts.criteria.teams.extend(parse_list(&next(&mut args, "--team")?)),
            "--chart" => opts.chart = parse_list(&next(&mut args, "--chart")?),
            "--highlight" => {
                for part in parse_list(&next(&mut args, "--highlight")?) {
                    opts.highlight.insert(part.parse::<usize>()?);
                }
            }
            "--format" => {
                let v = next(&mut args, "--format")?;
                opts.output.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => OutputFormat::Csv,
                    "tsv" => OutputFormat::Tsv,
                    "json" => OutputFormat::Json,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-o" | "--out" => opts.output.out = Some(PathBuf::from(next(&mut args, "--out")?)),
            "--no-headers" => opts.output.include_headers = false,
            "--list-columns" => opts.list_columns = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if season.is_none() && !other.starts_with('-') => {
                season = Some(
                    other
                        .parse::<i32>()
                        .map_err(|_| format!("Invalid season year: {}", other))?,
                );
            }
            other => return Err(format!("Unknown arg: {}", other).into()),
        }
    }

    opts.season = season.ok_or("Missing season year (e.g. nba_scrape 2021)")?;
    Ok(opts)
}

fn next<I: Iterator<Item = String>>(
    args: &mut I,
    flag: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    args.next()
        .ok_or_else(|| format!("Missing value for {}", flag).into())
}

/// "PG,SG" → ["PG", "SG"]; empty parts dropped.
fn parse_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// "0-30" or "0.5-27.5" → inclusive Range.
fn parse_range(s: &str) -> Result<Range, Box<dyn std::error::Error>> {
    let (lo, hi) = s
        .split_once('-')
        .ok_or_else(|| format!("Invalid range (want MIN-MAX): {}", s))?;
    let min: f64 = lo.trim().parse()?;
    let max: f64 = hi.trim().parse()?;
    if min > max {
        return Err(format!("Invalid range: {}", s).into());
    }
    Ok(Range::new(min, max))
}
