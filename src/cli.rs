// src/cli.rs
use std::{env, error::Error};

use chrono::NaiveDate;

use crate::config::options::AppOptions;
use crate::draft::Draft;
use crate::file::normalize_path;
use crate::model::MovieRecord;
use crate::progress::Progress;
use crate::{collect, report};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Collect,
    Report,
    Run,
    List,
    Help,
}

/// Prints progress lines to stderr; stdout is kept for results.
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl CliProgress {
    pub fn new() -> Self {
        Self { done: 0, total: 0 }
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, title: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, title);
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut opts = AppOptions::default();
    let cmd = parse_args(env::args().skip(1), &mut opts)?;

    match cmd {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
        }
        Command::List => {
            let draft = Draft::load(&opts.collect.draft_path)?;
            for (owner, title) in draft.picks() {
                println!("{},{}", owner, title);
            }
        }
        Command::Collect => {
            run_collect(&opts)?;
        }
        Command::Report => {
            run_report(&opts)?;
        }
        Command::Run => {
            opts.chain_paths();
            run_collect(&opts)?;
            run_report(&opts)?;
        }
    }
    Ok(())
}

fn run_collect(opts: &AppOptions) -> Result<(), Box<dyn Error>> {
    let mut prog = CliProgress::new();
    let summary = collect::run(&opts.collect, Some(&mut prog))?;
    for r in &summary.records {
        print!("{}", movie_summary(r));
    }
    println!(
        "Wrote {} ({} movie(s), {} skipped)",
        opts.collect.out_path.display(),
        summary.records.len(),
        summary.skipped().count()
    );
    Ok(())
}

fn run_report(opts: &AppOptions) -> Result<(), Box<dyn Error>> {
    let mut prog = CliProgress::new();
    let rep = report::run(&opts.report, Some(&mut prog))?;
    print!("{}", report::standings_table(&rep.standings));
    for p in &rep.files_written {
        println!("Wrote {}", p.display());
    }
    Ok(())
}

/// Multi-line console summary of one record.
pub fn movie_summary(r: &MovieRecord) -> String {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| s!("-"));
    let mut out = format!(
        "{} - {} ({})\n  Genre: {}\n  Rating: {}\n  Runtime: {} min\n  International Box Office: {}\n",
        r.owner,
        r.title,
        r.release_date.map(|d| d.to_string()).unwrap_or_else(|| s!("-")),
        opt(&r.genre),
        opt(&r.mpaa_rating),
        r.runtime_minutes.map(|m| m.to_string()).unwrap_or_else(|| s!("-")),
        r.worldwide_gross,
    );
    if r.daily_total_gross.is_empty() {
        out.push_str("  Daily Gross: No data available\n");
    } else {
        let head: Vec<String> = r
            .daily_total_gross
            .iter()
            .take(3)
            .map(|(d, g)| match g {
                Some(v) => format!("({d}, {v})"),
                None => format!("({d}, -)"),
            })
            .collect();
        out.push_str(&format!("  Daily Gross: [{}]\n", head.join(", ")));
    }
    out
}

/// Parse `<command> [options]` into `opts`. No command → help.
pub fn parse_args<I>(args: I, opts: &mut AppOptions) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let cmd = match args.next().as_deref() {
        None | Some("-h") | Some("--help") | Some("help") => return Ok(Command::Help),
        Some("collect") => Command::Collect,
        Some("report") => Command::Report,
        Some("run") => Command::Run,
        Some("list") => Command::List,
        Some(other) => return Err(format!("Unknown command: {}", other).into()),
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                let v = normalize_path(&args.next().ok_or("Missing input path")?);
                match cmd {
                    Command::Report => opts.report.data_path = v,
                    _ => opts.collect.draft_path = v,
                }
            }
            "-o" | "--out" => {
                let v = normalize_path(&args.next().ok_or("Missing output path")?);
                match cmd {
                    Command::Report => opts.report.out_dir = v,
                    _ => opts.collect.out_path = v,
                }
            }
            "--report-dir" => {
                opts.report.out_dir = normalize_path(&args.next().ok_or("Missing report directory")?);
            }
            "--min-score" => {
                let v: f64 = args.next().ok_or("Missing value for --min-score")?.parse()?;
                if !(0.0..=100.0).contains(&v) {
                    return Err("Min score out of range (0..100)".into());
                }
                opts.collect.min_score = v;
            }
            "--pause-ms" => {
                opts.collect.pause_ms = args.next().ok_or("Missing value for --pause-ms")?.parse()?;
            }
            "--start" => {
                let v = args.next().ok_or("Missing value for --start")?;
                let d = NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                    .map_err(|e| format!("Invalid --start {v:?}: {e}"))?;
                opts.report.season_start = Some(d);
            }
            "--owners" => {
                let v = args.next().ok_or("Missing value for --owners")?;
                opts.report.owners = parse_owner_list(&v);
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(cmd)
}

fn parse_owner_list(s: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if !out.iter().any(|o| o == part) { out.push(s!(part)); }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_is_help() {
        let mut o = AppOptions::default();
        assert_eq!(parse_args(args(&[]), &mut o).unwrap(), Command::Help);
    }

    #[test]
    fn collect_flags() {
        let mut o = AppOptions::default();
        let cmd = parse_args(
            args(&["collect", "-i", "draft.json", "-o", "data.json", "--min-score", "55", "--pause-ms", "0"]),
            &mut o,
        )
        .unwrap();
        assert_eq!(cmd, Command::Collect);
        assert_eq!(o.collect.draft_path, PathBuf::from("draft.json"));
        assert_eq!(o.collect.out_path, PathBuf::from("data.json"));
        assert_eq!(o.collect.min_score, 55.0);
        assert_eq!(o.collect.pause_ms, 0);
    }

    #[test]
    fn report_flags() {
        let mut o = AppOptions::default();
        let cmd = parse_args(
            args(&["report", "-i", "snap.json", "-o", "charts", "--start", "2025-05-08", "--owners", "Seth, Noah,,Seth"]),
            &mut o,
        )
        .unwrap();
        assert_eq!(cmd, Command::Report);
        assert_eq!(o.report.data_path, PathBuf::from("snap.json"));
        assert_eq!(o.report.out_dir, PathBuf::from("charts"));
        assert_eq!(o.report.season_start, NaiveDate::from_ymd_opt(2025, 5, 8));
        assert_eq!(o.report.owners, vec![s!("Seth"), s!("Noah")]);
    }

    #[test]
    fn bad_input_is_rejected() {
        let mut o = AppOptions::default();
        assert!(parse_args(args(&["dance"]), &mut o).is_err());
        assert!(parse_args(args(&["collect", "--min-score", "150"]), &mut o).is_err());
        assert!(parse_args(args(&["report", "--start", "05/08/2025"]), &mut o).is_err());
        assert!(parse_args(args(&["collect", "--bogus"]), &mut o).is_err());
    }

    #[test]
    fn help_lists_commands_and_owner_tie_order() {
        let help = include_str!("cli_help.txt");
        for cmd in ["collect", "report", "run", "list"] {
            assert!(help.contains(&format!("  {cmd} ")), "{cmd} missing");
        }
        let owners = help.lines().find(|l| l.contains("--owners")).unwrap();
        assert!(owners.contains("ties"));
        assert!(!owners.contains("legend order"));
    }

    #[test]
    fn summary_mentions_missing_daily_data() {
        let r = MovieRecord {
            title: s!("Quiet Film"),
            release_date: None,
            genre: None,
            mpaa_rating: Some(s!("R")),
            runtime_minutes: Some(95),
            daily_total_gross: Vec::new(),
            worldwide_gross: 10,
            owner: s!("Noah"),
        };
        let s = movie_summary(&r);
        assert!(s.starts_with("Noah - Quiet Film (-)"));
        assert!(s.contains("Rating: R"));
        assert!(s.contains("No data available"));
    }
}
