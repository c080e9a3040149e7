// tests/export.rs
//
// Output formatting: delimiter quoting rules and the JSON shapes.

use nba_scrape::csv::{Delim, dataset_to_string, write_row};
use nba_scrape::dataset::{Dataset, StatValue};

fn sample() -> Dataset {
    Dataset {
        columns: ["Player", "Pos", "PTS"].map(String::from).to_vec(),
        rows: vec![
            vec![
                StatValue::Text("Ray, Jr.".into()),
                StatValue::Text("SG".into()),
                StatValue::Float(10.5),
            ],
            vec![
                StatValue::Text("B".into()),
                StatValue::Text("C".into()),
                StatValue::Float(25.0),
            ],
        ],
    }
}

#[test]
fn csv_quotes_fields_containing_the_separator() {
    let out = dataset_to_string(&sample(), true, Delim::Csv);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Player,Pos,PTS"));
    assert_eq!(lines.next(), Some("\"Ray, Jr.\",SG,10.5"));
    assert_eq!(lines.next(), Some("B,C,25"));
}

#[test]
fn tsv_needs_no_quoting_for_commas() {
    let out = dataset_to_string(&sample(), false, Delim::Tsv);
    assert_eq!(out.lines().next(), Some("Ray, Jr.\tSG\t10.5"));
}

#[test]
fn headers_line_is_optional() {
    let with = dataset_to_string(&sample(), true, Delim::Csv);
    let without = dataset_to_string(&sample(), false, Delim::Csv);
    assert_eq!(with.lines().count(), 3);
    assert_eq!(without.lines().count(), 2);
    assert!(!without.starts_with("Player"));
}

#[test]
fn embedded_quotes_are_doubled() {
    let mut buf: Vec<u8> = Vec::new();
    write_row(&mut buf, &["He said \"hi\"", "x"], Delim::Csv).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "\"He said \"\"hi\"\"\",x\n");
}

#[test]
fn json_dataset_keeps_native_value_types() {
    let v = serde_json::to_value(&sample()).unwrap();
    assert_eq!(v["columns"][2], serde_json::json!("PTS"));
    assert_eq!(v["rows"][0][0], serde_json::json!("Ray, Jr."));
    assert_eq!(v["rows"][0][2], serde_json::json!(10.5));
}
