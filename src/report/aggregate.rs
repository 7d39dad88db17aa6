// src/report/aggregate.rs
//
// Per-owner, per-day running domestic gross plus worldwide totals.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::model::MovieRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnerAggregate {
    pub owner: String,
    /// Running domestic gross, one value per day of `Standings::days`.
    pub cumulative: Vec<i64>,
    pub worldwide: i64,
    pub movies: usize,
}

impl OwnerAggregate {
    /// Cumulative domestic gross on the last charted day.
    pub fn latest(&self) -> i64 {
        self.cumulative.last().copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Standings {
    /// Every calendar day of the charted range, inclusive.
    pub days: Vec<NaiveDate>,
    /// Ranked: highest latest cumulative first.
    pub owners: Vec<OwnerAggregate>,
}

impl Standings {
    /// Owners ordered for the worldwide bar chart.
    pub fn by_worldwide(&self) -> Vec<&OwnerAggregate> {
        let mut v: Vec<&OwnerAggregate> = self.owners.iter().collect();
        v.sort_by(|a, b| b.worldwide.cmp(&a.worldwide));
        v
    }

    pub fn get(&self, owner: &str) -> Option<&OwnerAggregate> {
        self.owners.iter().find(|o| o.owner == owner)
    }
}

/// `owners` are always present (zero lines if they have nothing yet); owners
/// only found in `records` are appended in first-seen order. The day range
/// runs from `season_start` (or the earliest observed date) to the latest
/// observed date.
pub fn aggregate(records: &[MovieRecord], owners: &[String], season_start: Option<NaiveDate>) -> Standings {
    let mut order: Vec<String> = Vec::with_capacity(owners.len());
    for o in owners.iter().map(String::as_str).chain(records.iter().map(|r| r.owner.as_str())) {
        if !order.iter().any(|x| x == o) {
            order.push(s!(o));
        }
    }

    // owner → day → summed gross
    let mut daily: HashMap<&str, BTreeMap<NaiveDate, i64>> = HashMap::new();
    let mut totals: HashMap<&str, (i64, usize)> = HashMap::new();
    let mut first_seen: Option<NaiveDate> = None;
    let mut last_seen: Option<NaiveDate> = None;

    for r in records {
        let w = totals.entry(r.owner.as_str()).or_default();
        w.0 += r.worldwide_gross;
        w.1 += 1;

        let per_day = daily.entry(r.owner.as_str()).or_default();
        for (date, gross) in &r.daily_total_gross {
            *per_day.entry(*date).or_default() += gross.unwrap_or(0);
            first_seen = Some(first_seen.map_or(*date, |d| d.min(*date)));
            last_seen = Some(last_seen.map_or(*date, |d| d.max(*date)));
        }
    }

    let days = match (season_start.or(first_seen), last_seen) {
        (Some(start), Some(end)) => day_range(start, end),
        _ => Vec::new(),
    };

    let mut aggregates: Vec<OwnerAggregate> = order
        .iter()
        .map(|owner| {
            let per_day = daily.get(owner.as_str());
            let mut running = 0i64;
            let cumulative = days
                .iter()
                .map(|d| {
                    running += per_day.and_then(|m| m.get(d)).copied().unwrap_or(0);
                    running
                })
                .collect();
            let (worldwide, movies) = totals.get(owner.as_str()).copied().unwrap_or((0, 0));
            OwnerAggregate { owner: owner.clone(), cumulative, worldwide, movies }
        })
        .collect();

    // stable: ties keep owner-set order
    aggregates.sort_by(|a, b| b.latest().cmp(&a.latest()));

    Standings { days, owners: aggregates }
}

fn day_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn range_is_inclusive() {
        assert_eq!(day_range(d(5, 8), d(5, 10)), vec![d(5, 8), d(5, 9), d(5, 10)]);
        assert!(day_range(d(5, 10), d(5, 8)).is_empty());
    }

    #[test]
    fn no_records_keeps_configured_owners() {
        let s = aggregate(&[], &[s!("A"), s!("B")], None);
        assert!(s.days.is_empty());
        assert_eq!(s.owners.len(), 2);
        assert_eq!(s.owners[0].owner, "A");
        assert_eq!(s.owners[0].latest(), 0);
    }
}
