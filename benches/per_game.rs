// benches/per_game.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nba_scrape::dataset::Dataset;
use nba_scrape::specs::per_game;

const COLS: [&str; 9] = ["Player", "Pos", "Age", "Tm", "G", "3P", "TRB", "AST", "PTS"];

/// League-sized synthetic page: one header block plus `rows` player rows.
fn sample_doc(rows: usize) -> String {
    let mut doc = String::from(
        "<html><body><table class=\"stats_table\" id=\"per_game_stats\">\n<tr class=\"thead\">\n<th>Rk</th>\n",
    );
    for c in COLS {
        doc.push_str(&format!("<th>{c}</th>\n"));
    }
    doc.push_str("</tr>\n");
    for i in 0..rows {
        doc.push_str(&format!(
            "<tr class=\"full_table\"><th>{n}</th>\
             <td><a href=\"/players/p{i}.html\">Player {i}</a></td>\
             <td>SG</td><td>{age}</td><td>LAL</td><td>70</td>\
             <td>1.5</td><td>5.5</td><td>3.1</td><td>14.2</td></tr>\n",
            n = i + 1,
            age = 19 + (i % 20),
        ));
    }
    doc.push_str("</table></body></html>");
    doc
}

fn bench_per_game(c: &mut Criterion) {
    let doc = sample_doc(600);

    c.bench_function("extract_600_rows", |b| {
        b.iter(|| {
            let bundle = per_game::extract(black_box(&doc)).unwrap();
            black_box(bundle.rows.len())
        })
    });

    c.bench_function("extract_normalize_600_rows", |b| {
        b.iter(|| {
            let bundle = per_game::extract(black_box(&doc)).unwrap();
            let ds = Dataset::from_bundle(bundle).unwrap();
            black_box(ds.len())
        })
    });
}

criterion_group!(benches, bench_per_game);
criterion_main!(benches);
