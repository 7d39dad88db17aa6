// tests/report.rs
mod common;

use bo_scrape::config::consts::{BAR_PLOT_FILE, COMBINED_PLOT_FILE, LINE_PLOT_FILE};
use bo_scrape::config::options::ReportOptions;
use bo_scrape::model::MovieRecord;
use bo_scrape::report;
use chrono::NaiveDate;
use common::tmp_dir;

fn rec(owner: &str, gross: i64, worldwide: i64) -> MovieRecord {
    let day = |d| NaiveDate::from_ymd_opt(2025, 5, d).unwrap();
    MovieRecord {
        title: format!("{owner} pick"),
        release_date: Some(day(8)),
        genre: None,
        mpaa_rating: None,
        runtime_minutes: None,
        daily_total_gross: vec![(day(8), Some(gross)), (day(9), Some(gross / 2))],
        worldwide_gross: worldwide,
        owner: owner.to_string(),
    }
}

fn opts(name: &str) -> ReportOptions {
    ReportOptions {
        out_dir: tmp_dir(name),
        owners: vec!["Seth".into(), "Noah".into(), "Dave".into()],
        ..ReportOptions::default()
    }
}

#[test]
fn writes_three_pages() {
    let o = opts("report_pages");
    let records = vec![rec("Seth", 2_000_000, 9_000_000), rec("Noah", 3_000_000, 4_000_000)];
    let rep = report::render(&records, &o, None).unwrap();

    assert_eq!(rep.files_written.len(), 3);
    for f in [LINE_PLOT_FILE, BAR_PLOT_FILE, COMBINED_PLOT_FILE] {
        assert!(o.out_dir.join(f).is_file(), "{f} missing");
    }

    let line = std::fs::read_to_string(o.out_dir.join(LINE_PLOT_FILE)).unwrap();
    assert!(line.contains("<svg"));
    for owner in ["Seth", "Noah", "Dave"] {
        assert!(line.contains(owner), "{owner} not in legend");
    }
    let combined = std::fs::read_to_string(o.out_dir.join(COMBINED_PLOT_FILE)).unwrap();
    assert_eq!(combined.matches("<svg").count(), 2);

    // Noah leads domestic, Seth leads worldwide
    assert_eq!(rep.standings.owners[0].owner, "Noah");
    assert_eq!(rep.standings.by_worldwide()[0].owner, "Seth");
}

#[test]
fn empty_snapshot_still_renders() {
    let o = opts("report_empty");
    let rep = report::render(&[], &o, None).unwrap();
    assert_eq!(rep.files_written.len(), 3);
    assert!(rep.standings.days.is_empty());
}

#[test]
fn standings_table_lists_every_owner() {
    let o = opts("report_table");
    let rep = report::render(&[rec("Dave", 1_500, 10)], &o, None).unwrap();
    let table = report::standings_table(&rep.standings);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].contains("Dave") && lines[1].contains("$2,250"));
}
