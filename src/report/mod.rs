// src/report/mod.rs
//
// Reporter: snapshot → standings → HTML charts.

pub mod aggregate;
pub mod charts;

use std::{error::Error, path::PathBuf};

use crate::{
    config::consts::{BAR_PLOT_FILE, COMBINED_PLOT_FILE, LINE_PLOT_FILE},
    config::options::ReportOptions,
    core::sanitize::fmt_dollars,
    error::ReportError,
    file::{write_html, Figure},
    model::MovieRecord,
    progress::Progress,
    store,
};

pub use aggregate::{aggregate, OwnerAggregate, Standings};

pub struct Report {
    pub standings: Standings,
    pub files_written: Vec<PathBuf>,
}

/// Aggregate `records` and write the three chart pages into `opts.out_dir`.
pub fn render(
    records: &[MovieRecord],
    opts: &ReportOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Report, ReportError> {
    let standings = aggregate(records, &opts.owners, opts.season_start);
    logf!(
        "Report: {} owner(s), {} day(s), {} movie(s)",
        standings.owners.len(),
        standings.days.len(),
        records.len()
    );

    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
        p.log("Drawing charts…");
    }
    let line = charts::line_chart_svg(&standings, charts::CHART_SIZE)?;
    let bar = charts::bar_chart_svg(&standings, charts::CHART_SIZE)?;

    let line_fig = Figure { heading: charts::LINE_TITLE, svg: &line };
    let bar_fig = Figure { heading: charts::BAR_TITLE, svg: &bar };
    let pages = [
        (LINE_PLOT_FILE, charts::LINE_TITLE, vec![line_fig]),
        (BAR_PLOT_FILE, charts::BAR_TITLE, vec![bar_fig]),
        (COMBINED_PLOT_FILE, "Box Office per Owner", vec![line_fig, bar_fig]),
    ];

    let mut files_written = Vec::with_capacity(pages.len());
    for (file_name, title, figs) in pages {
        let path = opts.out_dir.join(file_name);
        let written = write_html(&path, title, &figs)
            .map_err(|source| ReportError::Write { path: path.display().to_string(), source })?;
        logf!("Report: wrote {}", written.display());
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(file_name);
        }
        files_written.push(written);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(Report { standings, files_written })
}

/// Load the snapshot named in `opts` and render it.
pub fn run(opts: &ReportOptions, progress: Option<&mut dyn Progress>) -> Result<Report, Box<dyn Error>> {
    let records = store::load_records(&opts.data_path)?;
    Ok(render(&records, opts, progress)?)
}

/// Plain-text standings, one owner per line, ranking order.
pub fn standings_table(standings: &Standings) -> String {
    let mut out = format!("{:<4} {:<12} {:>16} {:>16} {:>6}\n", "Rank", "Owner", "Domestic", "Worldwide", "Movies");
    for (i, o) in standings.owners.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<12} {:>16} {:>16} {:>6}\n",
            i + 1,
            o.owner,
            fmt_dollars(o.latest()),
            fmt_dollars(o.worldwide),
            o.movies
        ));
    }
    out
}
