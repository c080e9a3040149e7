// tests/filter_view.rs
//
// Filter engine and chart view properties, exercised end-to-end from a
// markup fixture through extraction, normalization and filtering.

use std::collections::BTreeSet;

use nba_scrape::dataset::Dataset;
use nba_scrape::filter::{FilterCriteria, Range};
use nba_scrape::specs::per_game;
use nba_scrape::view::{Mark, chart_series};

const COLS: [&str; 10] = ["Player", "Pos", "Age", "Tm", "G", "3P", "TRB", "AST", "FT", "PTS"];

fn header_html() -> String {
    let mut h = String::from("<tr class=\"thead\">\n<th>Rk</th>\n");
    for c in COLS {
        h.push_str("<th>");
        h.push_str(c);
        h.push_str("</th>\n");
    }
    h.push_str("</tr>\n");
    h
}

fn row_html(cells: &[&str]) -> String {
    let mut r = String::from("<tr class=\"full_table\"><th>1</th>");
    for c in cells {
        r.push_str("<td>");
        r.push_str(c);
        r.push_str("</td>");
    }
    r.push_str("</tr>\n");
    r
}

/// Three-player fixture: B is too old for the [20, 25] age window and C
/// carries an eligibility marker.
fn fixture() -> Dataset {
    let mut doc = String::from("<table>\n");
    doc.push_str(&header_html());
    doc.push_str(&row_html(&["A", "SG", "22", "LAL", "60", "1.5", "4.4", "3.0", "2.0", "10.5"]));
    doc.push_str(&row_html(&["B", "C", "30", "BOS", "55", "0.1", "11.0", "1.5", "5.5", "25.0"]));
    doc.push_str(&row_html(&["C*", "SF", "22", "MIA", "58", "2.3", "6.1", "4.2", "3.3", "25.0"]));
    doc.push_str("</table>");
    Dataset::from_bundle(per_game::extract(&doc).unwrap()).unwrap()
}

fn age_pts_criteria() -> FilterCriteria {
    FilterCriteria {
        age: Some(Range::new(20.0, 25.0)),
        points: Some(Range::new(0.0, 30.0)),
        ..FilterCriteria::default()
    }
}

#[test]
fn range_filter_keeps_order_and_strips_marker() {
    let ds = fixture();
    let view = age_pts_criteria().apply(&ds);

    assert_eq!(view.len(), 2);
    assert_eq!(view.player(0), "A");
    assert_eq!(view.player(1), "C");
}

#[test]
fn range_bounds_are_inclusive() {
    let ds = fixture();

    // Exact bound values are retained on both ends
    let crit = FilterCriteria {
        age: Some(Range::new(22.0, 30.0)),
        ..FilterCriteria::default()
    };
    assert_eq!(crit.apply(&ds).len(), 3);

    let crit = FilterCriteria {
        points: Some(Range::new(10.5, 25.0)),
        ..FilterCriteria::default()
    };
    assert_eq!(crit.apply(&ds).len(), 3);
}

#[test]
fn empty_membership_set_is_a_noop() {
    let ds = fixture();
    let with_empty = FilterCriteria {
        players: BTreeSet::new(),
        ..age_pts_criteria()
    };
    assert_eq!(
        with_empty.apply(&ds).row_ix,
        age_pts_criteria().apply(&ds).row_ix
    );
}

#[test]
fn membership_narrows_but_never_overrides_ranges() {
    let ds = fixture();

    // B is in BOS but fails the age window; the team filter can't save it
    let crit = FilterCriteria {
        teams: ["BOS"].map(String::from).into(),
        ..age_pts_criteria()
    };
    assert!(crit.apply(&ds).is_empty());

    let crit = FilterCriteria {
        positions: ["SF"].map(String::from).into(),
        ..age_pts_criteria()
    };
    let view = crit.apply(&ds);
    assert_eq!(view.len(), 1);
    assert_eq!(view.player(0), "C");
}

#[test]
fn position_without_matches_is_empty_not_an_error() {
    let ds = fixture();
    let crit = FilterCriteria {
        positions: ["PG"].map(String::from).into(),
        ..age_pts_criteria()
    };
    let view = crit.apply(&ds);
    assert!(view.is_empty());

    // Charting an empty result is also valid: series exist, with no points
    let series = chart_series(&view, &[String::from("PTS")], &BTreeSet::new());
    assert_eq!(series.len(), 1);
    assert!(series[0].values.is_empty());
}

#[test]
fn filtering_is_idempotent() {
    let ds = fixture();
    let crit = age_pts_criteria();

    let once = crit.apply(&ds).to_dataset();
    let twice = crit.apply(&once);
    assert_eq!(twice.len(), once.len());
    for i in 0..twice.len() {
        assert_eq!(twice.player(i), once.player(i));
    }
}

#[test]
fn aggregation_series_with_highlight_and_stale_column() {
    let ds = fixture();
    let view = age_pts_criteria().apply(&ds);

    let selection: Vec<String> = ["PTS", "Age", "MadeUpColumn"]
        .map(String::from)
        .to_vec();
    let highlight: BTreeSet<usize> = [0usize].into();
    let series = chart_series(&view, &selection, &highlight);

    assert_eq!(series.len(), 2);

    assert_eq!(series[0].column, "PTS");
    assert_eq!(series[0].labels, ["A", "C"]);
    assert_eq!(series[0].values, [10.5, 25.0]);
    assert_eq!(series[0].marks, [Mark::Highlighted, Mark::Normal]);

    assert_eq!(series[1].column, "Age");
    assert_eq!(series[1].values, [22.0, 22.0]);
}

#[test]
fn chart_skips_text_columns_and_caps_at_three() {
    let ds = fixture();
    let view = age_pts_criteria().apply(&ds);

    // First three of the selection are considered; "Player" is text and
    // drops out, "FT" is past the cap
    let selection: Vec<String> = ["Player", "PTS", "Age", "FT"].map(String::from).to_vec();
    let series = chart_series(&view, &selection, &BTreeSet::new());

    let names: Vec<&str> = series.iter().map(|s| s.column.as_str()).collect();
    assert_eq!(names, ["PTS", "Age"]);
}

#[test]
fn out_of_range_highlight_indices_are_ignored() {
    let ds = fixture();
    let view = age_pts_criteria().apply(&ds);

    let highlight: BTreeSet<usize> = [7usize].into();
    let series = chart_series(&view, &[String::from("PTS")], &highlight);
    assert!(series[0].marks.iter().all(|m| *m == Mark::Normal));
}
