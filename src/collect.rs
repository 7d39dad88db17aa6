// src/collect.rs
//
// Collector: draft → search → movie page → records → JSON snapshot.
// Strictly sequential; the fetcher owns the politeness delay.

use std::error::Error;

use crate::{
    config::options::CollectOptions,
    core::net::{Fetch, HttpFetcher},
    draft::Draft,
    model::MovieRecord,
    progress::Progress,
    specs::{movie, search},
    store,
};

/// What happened to one drafted title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Collected,
    NoMatch,
    NotEligible,
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct CollectSummary {
    pub records: Vec<MovieRecord>,
    /// (owner, title, outcome) for every pick, in draft order.
    pub outcomes: Vec<(String, String, Outcome)>,
}

impl CollectSummary {
    pub fn skipped(&self) -> impl Iterator<Item = &(String, String, Outcome)> {
        self.outcomes.iter().filter(|(_, _, o)| *o != Outcome::Collected)
    }
}

/// Scrape every pick of the draft. Per-title failures are logged and skipped.
pub fn collect(
    draft: &Draft,
    fetcher: &dyn Fetch,
    min_score: f64,
    mut progress: Option<&mut dyn Progress>,
) -> CollectSummary {
    let mut summary = CollectSummary::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(draft.len());
    }

    for (owner, title) in draft.picks() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Searching for {title} (Owner: {owner})"));
        }

        let outcome = match collect_one(fetcher, owner, title, min_score) {
            Ok(Some(record)) => {
                logf!("Collect: {} ({}) → {}", title, owner, record.title);
                summary.records.push(record);
                Outcome::Collected
            }
            Ok(None) => Outcome::NotEligible,
            Err(Skip::NoMatch) => {
                logf!("Collect: no match found for {:?}", title);
                Outcome::NoMatch
            }
            Err(Skip::Failed(e)) => {
                loge!("Collect: failed to scrape {:?}: {}", title, e);
                Outcome::Failed(e)
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            match &outcome {
                Outcome::Collected => {}
                Outcome::NoMatch => p.log(&format!("No match found for: {title}")),
                Outcome::NotEligible => p.log(&format!("No financial data for: {title}")),
                Outcome::Failed(e) => p.log(&format!("Failed to scrape {title}: {e}")),
            }
            p.item_done(title);
        }
        summary.outcomes.push((s!(owner), s!(title), outcome));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}

enum Skip {
    NoMatch,
    Failed(String),
}

fn collect_one(
    fetcher: &dyn Fetch,
    owner: &str,
    title: &str,
    min_score: f64,
) -> Result<Option<MovieRecord>, Skip> {
    let url = search::search(fetcher, title, min_score)
        .map_err(|e| Skip::Failed(e.to_string()))?
        .ok_or(Skip::NoMatch)?;
    logd!("Collect: found URL {}", url);

    let details = movie::fetch(fetcher, &url).map_err(|e| Skip::Failed(e.to_string()))?;
    Ok(details.map(|d| d.with_owner(owner)))
}

/// Load the draft, scrape it over HTTP and write the snapshot.
pub fn run(
    opts: &CollectOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<CollectSummary, Box<dyn Error>> {
    let draft = Draft::load(&opts.draft_path)?;
    logf!(
        "Collect: begin draft={} picks={} min_score={}",
        opts.draft_path.display(),
        draft.len(),
        opts.min_score
    );

    let fetcher = HttpFetcher::new(opts.pause_ms)?;
    let summary = collect(&draft, &fetcher, opts.min_score, progress);

    store::save_records(&opts.out_path, &summary.records)?;
    logf!(
        "Collect: done, {} record(s), {} skipped",
        summary.records.len(),
        summary.skipped().count()
    );
    Ok(summary)
}
