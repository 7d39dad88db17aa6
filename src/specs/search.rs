// src/specs/search.rs
//! Search-results spec.
//!
//! `/custom-search?searchterm=…` either redirects straight to a movie summary
//! page or renders a results page where the movie hits sit in the table that
//! follows `<h1>Movies</h1>`. We score every `/movie/` link in that table
//! against the drafted title and keep the best one above the threshold.

use rapidfuzz::fuzz;
use reqwest::Url;

use crate::config::consts::{BASE_URL, SEARCH_PATH};
use crate::core::html::Document;
use crate::core::net::Fetch;
use crate::error::ScrapeError;

const RESULTS_HEADING: &str = "Movies";

#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    pub url: String,
    pub score: f64,
}

/// Run a site search for `title`. `Ok(None)` = nothing close enough.
pub fn search(fetcher: &dyn Fetch, title: &str, min_score: f64) -> Result<Option<String>, ScrapeError> {
    let url = search_url(title)?;
    logd!("Search: {:?} → {}", title, url);
    let page = fetcher.get(&url)?;

    // Exact hits skip the results page entirely.
    if page.url.contains("summary") {
        logf!("Search: {:?} redirected to {}", title, page.url);
        return Ok(Some(page.url));
    }

    let doc = Document::parse(&page.body);
    Ok(best_match(&doc, title, min_score).map(|m| m.url))
}

pub fn search_url(title: &str) -> Result<String, ScrapeError> {
    let base = join!(BASE_URL, SEARCH_PATH);
    Url::parse_with_params(&base, &[("searchterm", title)])
        .map(|u| u.to_string())
        .map_err(|e| ScrapeError::Url(format!("{base}: {e}")))
}

/// Best-scoring `/movie/` link in the results table, if any reaches `min_score`.
/// Ties keep the first link in document order.
pub fn best_match(doc: &Document, title: &str, min_score: f64) -> Option<Match> {
    if !doc.has_heading("h1", RESULTS_HEADING) {
        logw!("Search: 'Movies' section header not found");
        return None;
    }
    let Some(table) = doc.table_after_heading("h1", RESULTS_HEADING) else {
        logw!("Search: no table after 'Movies' header");
        return None;
    };

    let target = title.to_lowercase();
    let mut best: Option<Match> = None;

    // First cell is the header row's
    for cell in table.cells().skip(1) {
        let Some(link) = &cell.link else { continue };
        if !link.href.contains("/movie/") { continue; }

        let score = token_sort_ratio(&link.text.to_lowercase(), &target);
        let best_score = best.as_ref().map_or(0.0, |m| m.score);
        if score > best_score && score >= min_score {
            best = Some(Match { url: absolute(&link.href), score });
        }
    }

    match &best {
        Some(m) => logf!("Search: best match {} ({:.0}%)", m.url, m.score),
        None => logf!("Search: no sufficiently close match for {:?}", title),
    }
    best
}

fn absolute(href: &str) -> String {
    let href = href.split('#').next().unwrap_or(href);
    if href.starts_with("http://") || href.starts_with("https://") {
        s!(href)
    } else {
        join!(BASE_URL, href)
    }
}

/// Word-order-insensitive similarity in 0..=100: tokens sorted, then the
/// Indel ratio over characters.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let (a, b) = (sorted_tokens(a), sorted_tokens(b));
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    fuzz::ratio(a.chars(), b.chars())
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_ignores_word_order() {
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(token_sort_ratio("final reckoning mission", "mission final reckoning"), 100.0));
        assert_eq!(token_sort_ratio("", ""), 100.0);
        assert!(close(token_sort_ratio("abc", "xyz"), 0.0));
    }

    #[test]
    fn ratio_is_indel_based() {
        // "thunderbolts*" vs "thunderbolts": one deletion over 25 chars
        let r = token_sort_ratio("thunderbolts*", "thunderbolts");
        assert!((r - 96.0).abs() < 1e-9);
    }

    #[test]
    fn search_url_is_form_encoded() {
        let u = search_url("Lilo & Stitch").unwrap();
        assert_eq!(u, "https://www.the-numbers.com/custom-search?searchterm=Lilo+%26+Stitch");
    }

    #[test]
    fn absolute_drops_fragment() {
        assert_eq!(
            absolute("/movie/Sinners-(2025)#tab=summary"),
            "https://www.the-numbers.com/movie/Sinners-(2025)"
        );
        assert_eq!(absolute("https://example.com/movie/x"), "https://example.com/movie/x");
    }
}
