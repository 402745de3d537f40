// src/cli.rs
use std::{io, path::PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use tracing::{debug, info};

use crate::{
    config::options::{ExportFormat, ExportOptions, LayoutOptions},
    data::Side,
    document::TextDocument,
    file,
    progress::Progress,
    report::{EVENT_HEADERS, Report, STATISTICS_HEADERS},
    scrape,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub input: PathBuf,           // text dump of the report
    pub export: ExportOptions,    // format, headers, output path (stdout if none)
    pub stats: bool,              // per-person statistics instead of the event table
    pub layout: LayoutOptions,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Run(Params),
    Help,
}

/// Parse process arguments (program name already skipped).
pub fn parse_args<I>(args: I) -> Result<Mode>
where
    I: IntoIterator<Item = String>,
{
    let mut input: Option<PathBuf> = None;
    let mut export = ExportOptions::default();
    let mut out: Option<String> = None;
    let mut stats = false;
    let mut layout = LayoutOptions::default();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => bail!("Unknown format: {}", other),
                };
            }
            "--include-headers" => export.include_headers = true,
            "-o" | "--out" => out = Some(args.next().ok_or_else(|| eyre!("Missing output path"))?),
            "--stats" => stats = true,
            "--statistics-page" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --statistics-page"))?;
                layout.statistics_page = v
                    .parse()
                    .wrap_err_with(|| s!("Invalid page index: {}", v))?;
            }
            "-h" | "--help" => return Ok(Mode::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => bail!("Unknown arg: {}", flag),
            _ if input.is_none() => input = Some(PathBuf::from(a)),
            _ => bail!("Unexpected extra argument: {}", a),
        }
    }

    // Resolve after the loop so the extension follows the final --format.
    if let Some(o) = out {
        export.set_path(&o);
    }
    let input = input.ok_or_else(|| eyre!("Missing input dump (see --help)"))?;
    Ok(Mode::Run(Params { input, export, stats, layout }))
}

pub fn usage() -> &'static str {
    include_str!("cli_help.txt")
}

pub fn run(params: &Params) -> Result<()> {
    let doc = TextDocument::load(&params.input)
        .wrap_err_with(|| s!("Cannot load {}", params.input.display()))?;
    debug!(pages = doc.pages().len(), path = %params.input.display(), "dump loaded");

    let mut progress = LogProgress::default();
    let report = scrape::build_report_with_progress(&doc, &params.layout, Some(&mut progress))?;
    eprintln!("{}", summary(&report));

    let (headers, rows) = if params.stats {
        (&STATISTICS_HEADERS[..], report.statistics_rows())
    } else {
        (&EVENT_HEADERS[..], report.event_rows())
    };

    if params.export.out().is_some() {
        let path = file::write_export(&params.export, headers, &rows).map_err(|e| eyre!(e))?;
        eprintln!("Wrote {}", path.display());
    } else {
        file::write_export_to(io::stdout().lock(), &params.export, headers, &rows)
            .map_err(|e| eyre!(e))?;
    }
    Ok(())
}

/// One line: teams, roster sizes, event count.
pub fn summary(report: &Report) -> String {
    s!(
        "{} ({} persons) vs {} ({} persons): {} events",
        report.home_team(),
        report.persons(Side::Home).count(),
        report.away_team(),
        report.persons(Side::Away).count(),
        report.events().len()
    )
}

/* ---------------- helpers ---------------- */

/// Forwards report-building progress to the log.
#[derive(Default)]
struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { info!("{msg}"); }
    fn item_done(&mut self, page: usize) {
        self.done += 1;
        debug!(page, done = self.done, total = self.total, "page scanned");
    }
}
