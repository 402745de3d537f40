// src/scrape.rs
use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use crate::{
    config::options::LayoutOptions,
    data::{Event, Person, Side},
    document::PageSource,
    error::{ReportError, ScanError},
    progress::Progress,
    report::Report,
    specs::{events::EventScanner, roster},
};

/// Build a [`Report`] with the default report layout.
pub fn build_report<D: PageSource>(document: &D) -> Result<Report, ReportError> {
    build_report_with_progress(document, &LayoutOptions::default(), None)
}

/// Top-level: statistics page → rosters, later pages → events, then group
/// events per person. Pages before the statistics page are never read.
pub fn build_report_with_progress<D: PageSource>(
    document: &D,
    layout: &LayoutOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Report, ReportError> {
    let result = scan_document(document, layout, &mut progress);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn scan_document<D: PageSource>(
    document: &D,
    layout: &LayoutOptions,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<Report, ReportError> {
    let page_count = document.page_count();
    let stats_page = layout.statistics_page;
    if page_count <= stats_page {
        return Err(ScanError::NoStatisticsText.into());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(page_count - stats_page);
        p.log("Reading rosters…");
    }

    // Only the first content stream of the statistics page carries the tables.
    let streams = document.content_streams(stats_page).map_err(ReportError::from_source)?;
    let first = streams.first().ok_or(ScanError::NoStatisticsText)?;
    let roster = roster::scan(first.lines(), layout)?;
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(stats_page);
        p.log("Reading events…");
    }

    let mut scanner = EventScanner::new(layout);
    let mut events: Vec<Event> = Vec::new();
    for page in stats_page + 1..page_count {
        let before = events.len();
        let streams = document.content_streams(page).map_err(ReportError::from_source)?;
        for stream in &streams {
            scanner.scan_into(stream.lines(), &mut events)?;
        }
        debug!(page, streams = streams.len(), events = events.len() - before, "events: page done");
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(page);
        }
    }

    let mut home = attach(roster.persons(Side::Home));
    let mut away = attach(roster.persons(Side::Away));
    let mut strays: BTreeSet<&Person> = BTreeSet::new();
    for ev in &events {
        let Some(person) = ev.person() else { continue };
        if let Some(list) = home.get_mut(person).or_else(|| away.get_mut(person)) {
            list.push(ev.clone());
        } else if strays.insert(person) {
            warn!(%person, action = ev.action.as_str(), "event actor is on neither roster");
        }
    }

    info!(
        home = %roster.home_name,
        away = %roster.away_name,
        home_persons = home.len(),
        away_persons = away.len(),
        events = events.len(),
        "report built"
    );

    Ok(Report::from_parts(roster.home_name, roster.away_name, home, away, events))
}

/* ---------------- helpers ---------------- */

fn attach(persons: &BTreeSet<Person>) -> BTreeMap<Person, Vec<Event>> {
    persons.iter().map(|p| (p.clone(), Vec::new())).collect()
}
