// src/model.rs
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One day of the daily-performance table. `None` = the site showed no number.
pub type DailyGross = (NaiveDate, Option<i64>);

/// One scraped movie, as persisted in the JSON snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub mpaa_rating: Option<String>,
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub daily_total_gross: Vec<DailyGross>,
    #[serde(default, deserialize_with = "int_or_numeric_string")]
    pub worldwide_gross: i64,
    pub owner: String,
}

impl MovieRecord {
    /// Sum of the daily entries that carry a number.
    pub fn domestic_total(&self) -> i64 {
        self.daily_total_gross.iter().filter_map(|(_, g)| *g).sum()
    }
}

// Older snapshots stored worldwide_gross as "123456".
fn int_or_numeric_string<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(d)? {
        IntOrString::Int(v) => Ok(v),
        IntOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
