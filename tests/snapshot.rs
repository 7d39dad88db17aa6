// tests/snapshot.rs
mod common;

use bo_scrape::model::MovieRecord;
use bo_scrape::store;
use chrono::NaiveDate;
use common::tmp_dir;

fn sample() -> MovieRecord {
    MovieRecord {
        title: "Sinners (2025)".into(),
        release_date: NaiveDate::from_ymd_opt(2025, 4, 18),
        genre: Some("Horror".into()),
        mpaa_rating: Some("R".into()),
        runtime_minutes: Some(137),
        daily_total_gross: vec![
            (NaiveDate::from_ymd_opt(2025, 4, 18).unwrap(), Some(20_000_000)),
            (NaiveDate::from_ymd_opt(2025, 4, 19).unwrap(), None),
        ],
        worldwide_gross: 120_000_000,
        owner: "Seth".into(),
    }
}

#[test]
fn snapshot_layout() {
    let json = store::to_json(&[sample()]).unwrap();
    assert!(json.starts_with("[\n    {\n        \"title\": \"Sinners (2025)\""));
    assert!(json.contains("\"release_date\": \"2025-04-18\""));
    assert!(json.contains("\"2025-04-18\",\n                20000000"));
    assert!(json.contains("null"));
    // field order is the record's declaration order
    let t = json.find("\"title\"").unwrap();
    let o = json.find("\"owner\"").unwrap();
    assert!(t < o);
}

#[test]
fn save_then_load_in_nested_dir() {
    let dir = tmp_dir("snapshot");
    let path = dir.join("nested").join("movie_data.json");
    store::save_records(&path, &[sample()]).unwrap();
    assert_eq!(store::load_records(&path).unwrap(), vec![sample()]);
}

#[test]
fn legacy_string_worldwide_and_missing_fields() {
    let text = r#"[{
        "title": "Old",
        "release_date": null,
        "genre": null,
        "mpaa_rating": null,
        "runtime_minutes": null,
        "worldwide_gross": "1234",
        "owner": "Dave"
    }]"#;
    let recs = store::from_json(text).unwrap();
    assert_eq!(recs[0].worldwide_gross, 1234);
    assert!(recs[0].daily_total_gross.is_empty());

    assert!(store::from_json(&text.replace("\"1234\"", "\"lots\"")).is_err());
}

#[test]
fn missing_worldwide_counts_as_zero() {
    let text = r#"[{
        "title": "No Overseas",
        "release_date": "2025-05-08",
        "genre": "Drama",
        "mpaa_rating": "PG",
        "runtime_minutes": 101,
        "daily_total_gross": [["2025-05-08", 500]],
        "owner": "Reid"
    }]"#;
    let recs = store::from_json(text).unwrap();
    assert_eq!(recs[0].worldwide_gross, 0);
    assert_eq!(recs[0].domestic_total(), 500);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tmp_dir("snapshot_missing");
    assert!(store::load_records(&dir.join("nope.json")).is_err());
}
