// tests/aggregate.rs
use bo_scrape::model::MovieRecord;
use bo_scrape::report::aggregate;
use chrono::NaiveDate;

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, day).unwrap()
}

fn rec(owner: &str, title: &str, daily: &[(NaiveDate, Option<i64>)], worldwide: i64) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        release_date: daily.first().map(|(d, _)| *d),
        genre: None,
        mpaa_rating: None,
        runtime_minutes: None,
        daily_total_gross: daily.to_vec(),
        worldwide_gross: worldwide,
        owner: owner.to_string(),
    }
}

fn owners(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn cumulative_lines_span_every_day() {
    let records = vec![
        rec("A", "One", &[(d(5, 8), Some(100)), (d(5, 10), Some(50))], 1_000),
        rec("A", "Two", &[(d(5, 9), Some(10)), (d(5, 10), None)], 500),
        rec("B", "Three", &[(d(5, 9), Some(300))], 2_000),
    ];
    let s = aggregate(&records, &owners(&["A", "B"]), None);

    assert_eq!(s.days, vec![d(5, 8), d(5, 9), d(5, 10)]);
    let a = s.get("A").unwrap();
    assert_eq!(a.cumulative, vec![100, 110, 160]);
    assert_eq!(a.worldwide, 1_500);
    assert_eq!(a.movies, 2);
    let b = s.get("B").unwrap();
    assert_eq!(b.cumulative, vec![0, 300, 300]);

    // B leads on the last day
    assert_eq!(s.owners[0].owner, "B");
    assert_eq!(s.owners[1].owner, "A");
    for o in &s.owners {
        assert_eq!(o.cumulative.len(), s.days.len());
        assert!(o.cumulative.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn season_start_clips_earlier_days() {
    let records = vec![rec("A", "One", &[(d(5, 1), Some(999)), (d(5, 8), Some(1)), (d(5, 9), Some(2))], 0)];
    let s = aggregate(&records, &owners(&["A"]), Some(d(5, 8)));
    assert_eq!(s.days.first(), Some(&d(5, 8)));
    assert_eq!(s.get("A").unwrap().cumulative, vec![1, 3]);
}

#[test]
fn ties_keep_owner_order_and_unknown_owners_are_appended() {
    let records = vec![
        rec("Zed", "Solo", &[(d(6, 1), Some(5))], 5),
        rec("B", "Flat", &[(d(6, 1), Some(5))], 5),
    ];
    let s = aggregate(&records, &owners(&["A", "B"]), None);
    let names: Vec<&str> = s.owners.iter().map(|o| o.owner.as_str()).collect();
    assert_eq!(names, vec!["B", "Zed", "A"]);
}

#[test]
fn bar_order_is_by_worldwide() {
    let records = vec![
        rec("A", "Big domestic", &[(d(6, 1), Some(900))], 1_000),
        rec("B", "Big overseas", &[(d(6, 1), Some(100))], 9_000),
    ];
    let s = aggregate(&records, &owners(&["A", "B"]), None);
    assert_eq!(s.owners[0].owner, "A");
    let bars: Vec<&str> = s.by_worldwide().iter().map(|o| o.owner.as_str()).collect();
    assert_eq!(bars, vec!["B", "A"]);
}

#[test]
fn records_without_daily_data_still_count_worldwide() {
    let records = vec![rec("A", "Late", &[], 42)];
    let s = aggregate(&records, &owners(&["A"]), None);
    assert!(s.days.is_empty());
    assert_eq!(s.get("A").unwrap().worldwide, 42);
    assert_eq!(s.get("A").unwrap().latest(), 0);
}

#[test]
fn disjoint_owners_hold_flat_between_their_own_days() {
    let records = vec![
        rec("A", "Early", &[(d(5, 8), Some(10)), (d(5, 9), Some(5))], 0),
        rec("B", "Late", &[(d(5, 11), Some(7)), (d(5, 12), Some(1))], 0),
    ];
    let s = aggregate(&records, &owners(&["A", "B"]), None);

    assert_eq!(s.days.len(), 5);
    assert_eq!(s.get("A").unwrap().cumulative, vec![10, 15, 15, 15, 15]);
    assert_eq!(s.get("B").unwrap().cumulative, vec![0, 0, 0, 7, 8]);
}
