// src/specs/movie.rs
//! Movie detail page spec.
//!
//! Page landmarks relied on:
//! - `<table id="movie_finances">` with a "Domestic Box Office" row (eligibility);
//! - label/value rows anywhere: `<td><b>Label:</b></td><td>value</td>`;
//! - the table after `<h2>Daily Box Office Performance</h2>`:
//!   `Date | Rank | Gross | …` with the date cell linking to the daily chart;
//! - the table after `<h2>Box Office Summary Per Territory</h2>` whose last row
//!   carries the worldwide total in its second cell.

use chrono::Datelike;

use crate::config::consts::CUTOFF_YEAR;
use crate::core::html::{Document, Table};
use crate::core::net::Fetch;
use crate::core::sanitize::{parse_money, title_from_url};
use crate::error::ScrapeError;
use crate::model::{DailyGross, MovieRecord};

use super::parse::{parse_duration, parse_flexible_date};

const FINANCES_TABLE_ID: &str = "movie_finances";
const DOMESTIC_LABEL: &str = "Domestic Box Office";
const DAILY_HEADING: &str = "Daily Box Office Performance";
const TERRITORY_HEADING: &str = "Box Office Summary Per Territory";

/// Everything a movie page yields; the owner comes from the draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: String,
    pub release_date: Option<chrono::NaiveDate>,
    pub genre: Option<String>,
    pub mpaa_rating: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub daily_total_gross: Vec<DailyGross>,
    pub worldwide_gross: i64,
}

impl MovieDetails {
    pub fn with_owner(self, owner: &str) -> MovieRecord {
        MovieRecord {
            title: self.title,
            release_date: self.release_date,
            genre: self.genre,
            mpaa_rating: self.mpaa_rating,
            runtime_minutes: self.runtime_minutes,
            daily_total_gross: self.daily_total_gross,
            worldwide_gross: self.worldwide_gross,
            owner: s!(owner),
        }
    }
}

pub fn fetch(fetcher: &dyn Fetch, url: &str) -> Result<Option<MovieDetails>, ScrapeError> {
    let page = fetcher.get(url)?;
    let t = std::time::Instant::now();
    let out = parse_doc(url, &page.body);
    logd!("Movie: parse {} in {:?}", url, t.elapsed());
    out
}

/// Split out for tests and benches.
pub fn parse_doc(url: &str, html_doc: &str) -> Result<Option<MovieDetails>, ScrapeError> {
    let doc = Document::parse(html_doc);

    if !has_financial_data(&doc) {
        logf!("Movie: no financial data for {}", url);
        return Ok(None);
    }

    let mut details = MovieDetails {
        title: title_from_url(url),
        release_date: None,
        genre: None,
        mpaa_rating: None,
        runtime_minutes: None,
        daily_total_gross: Vec::new(),
        worldwide_gross: 0,
    };
    read_labeled_rows(&doc, &mut details);

    let Some(daily) = doc.table_after_heading("h2", DAILY_HEADING) else {
        logf!("Movie: daily box office section not found for {}", url);
        return Ok(None);
    };
    let first = daily.rows.get(1).ok_or(ScrapeError::MissingSection("daily box office rows"))?;
    if let Some(link) = first.cells.first().and_then(|c| c.link.as_ref()) {
        details.release_date = Some(parse_flexible_date(&link.text)?);
    }
    details.daily_total_gross = read_daily_gross(&daily)?;

    let Some(territories) = doc.table_after_heading("h2", TERRITORY_HEADING) else {
        logf!("Movie: international box office not found for {}", url);
        return Ok(None);
    };
    let reported = read_worldwide(&territories)?;
    let recent: i64 = details.daily_total_gross.iter().filter_map(|(_, g)| *g).sum();
    details.worldwide_gross = reported + recent;

    Ok(Some(details))
}

/// Eligible when the finances table reports a domestic figure other than "n/a".
pub fn has_financial_data(doc: &Document) -> bool {
    let Some(finances) = doc.table_by_id(FINANCES_TABLE_ID) else {
        return false;
    };
    finances
        .rows
        .iter()
        .filter(|r| r.cells.len() >= 2)
        .find(|r| r.cells[0].text == DOMESTIC_LABEL)
        .is_some_and(|r| !r.cells[1].text.eq_ignore_ascii_case("n/a"))
}

/// `<td><b>Label:</b></td><td>value</td>` rows; later rows win.
fn read_labeled_rows(doc: &Document, details: &mut MovieDetails) {
    for row in doc.rows() {
        let Some(label) = row.cells.first().and_then(|c| c.bold.as_deref()) else { continue };
        let Some(value) = row.cells.get(1).map(|c| c.spaced.as_str()) else { continue };

        if label.contains("MPAA") {
            details.mpaa_rating = Some(s!(value.split(' ').next().unwrap_or("")));
        } else if label == "Running Time:" {
            details.runtime_minutes = Some(parse_duration(value));
        } else if label == "Genre:" {
            details.genre = Some(s!(value));
        }
    }
}

/// Data rows (after the header) with at least five cells, dated after the cutoff year.
pub fn read_daily_gross(table: &Table) -> Result<Vec<DailyGross>, ScrapeError> {
    let mut out = Vec::new();
    for row in table.rows.iter().skip(1) {
        if row.cells.len() < 5 { continue; }
        let date = parse_flexible_date(&row.cells[0].text)?;
        let gross = parse_money(&row.cells[2].text);
        if date.year() > CUTOFF_YEAR {
            out.push((date, gross));
        }
    }
    Ok(out)
}

fn read_worldwide(table: &Table) -> Result<i64, ScrapeError> {
    let cell = table
        .rows
        .last()
        .and_then(|r| r.cells.get(1))
        .ok_or(ScrapeError::MissingSection("worldwide total row"))?;
    parse_money(&cell.text).ok_or_else(|| ScrapeError::Money(cell.text.clone()))
}
