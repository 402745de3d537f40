// src/specs/roster.rs
//! Statistics page → team names + rosters.
//!
//! The page prints, per side, a header line (`Heim: <team>` / `Gast: <team>`)
//! followed by a table whose rows are drawn as separate text operations:
//! jersey number first, full name next, then the remaining columns, and a
//! table-end marker line closing the row.
//!
//! Two nested state machines do the work:
//! - [`RosterScanner`]: which side we are reading, names and persons so far.
//! - [`TableState`]: where we are inside one table row. The jersey number read
//!   in one line is carried in the state itself until the name line arrives.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::options::LayoutOptions;
use crate::core::patterns;
use crate::core::sanitize::{capitalize, normalize_ws, text_after};
use crate::data::{Person, Side};
use crate::error::ScanError;

/// Output of the statistics page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    pub home_name: String,
    pub away_name: String,
    pub home: BTreeSet<Person>,
    pub away: BTreeSet<Person>,
}

impl Roster {
    pub fn persons(&self, side: Side) -> &BTreeSet<Person> {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

/// Position inside one roster table row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TableState {
    #[default]
    AwaitNumber,
    NumberParsed { number: String },
    NameParsed,
}

impl TableState {
    /// Feed one line; returns the successor state and a person once a
    /// number/name pair is complete.
    pub fn advance(self, line: &str, layout: &LayoutOptions) -> (TableState, Option<Person>) {
        if layout.is_table_end(line) {
            return (TableState::AwaitNumber, None);
        }
        match self {
            TableState::AwaitNumber => match patterns::jersey_number(line) {
                Some(number) => (TableState::NumberParsed { number: s!(number) }, None),
                None => (TableState::AwaitNumber, None),
            },
            TableState::NumberParsed { number } => match patterns::full_name(line) {
                Some((first, last)) => {
                    let person = Person::new(number, capitalize(first.trim()), capitalize(last.trim()));
                    (TableState::NameParsed, Some(person))
                }
                None => (TableState::NumberParsed { number }, None),
            },
            // Remaining columns of the row; only a table-end marker moves us on.
            TableState::NameParsed => (TableState::NameParsed, None),
        }
    }
}

/// Line-by-line scanner for the statistics page.
#[derive(Debug)]
pub struct RosterScanner<'l> {
    layout: &'l LayoutOptions,
    current: Option<Side>,
    table: TableState,
    home_name: Option<String>,
    away_name: Option<String>,
    home: BTreeSet<Person>,
    away: BTreeSet<Person>,
    saw_text: bool,
}

impl<'l> RosterScanner<'l> {
    pub fn new(layout: &'l LayoutOptions) -> Self {
        Self {
            layout,
            current: None,
            table: TableState::default(),
            home_name: None,
            away_name: None,
            home: BTreeSet::new(),
            away: BTreeSet::new(),
            saw_text: false,
        }
    }

    pub fn current_side(&self) -> Option<Side> { self.current }
    pub fn table_state(&self) -> &TableState { &self.table }

    pub fn consume_line(&mut self, line: &str) {
        if !line.trim().is_empty() {
            self.saw_text = true;
        }

        if let Some((side, name)) = self.team_header(line) {
            debug!(%side, team = %name, "roster: team header");
            self.current = Some(side);
            self.table = TableState::AwaitNumber;
            match side {
                Side::Home => self.home_name = Some(name),
                Side::Away => self.away_name = Some(name),
            }
            return;
        }

        let Some(side) = self.current else { return };
        let (next, person) = std::mem::take(&mut self.table).advance(line, self.layout);
        self.table = next;
        if let Some(person) = person {
            match side {
                Side::Home => self.home.insert(person),
                Side::Away => self.away.insert(person),
            };
        }
    }

    /// Close the scan. Both team names must have been seen.
    pub fn finish(self) -> Result<Roster, ScanError> {
        if !self.saw_text {
            return Err(ScanError::NoStatisticsText);
        }
        let home_name = self.home_name.ok_or(ScanError::MissingTeamName(Side::Home))?;
        let away_name = self.away_name.ok_or(ScanError::MissingTeamName(Side::Away))?;
        debug!(
            home = %home_name, home_persons = self.home.len(),
            away = %away_name, away_persons = self.away.len(),
            "roster: statistics page done"
        );
        Ok(Roster { home_name, away_name, home: self.home, away: self.away })
    }

    /// Home marker wins if a line somehow carries both.
    fn team_header(&self, line: &str) -> Option<(Side, String)> {
        Side::BOTH.into_iter().find_map(|side| {
            text_after(line, self.layout.marker(side), &self.layout.text_terminator)
                .map(|name| (side, normalize_ws(name)))
        })
    }
}

/// Scan the statistics page's lines into a [`Roster`].
pub fn scan<'a, I>(lines: I, layout: &LayoutOptions) -> Result<Roster, ScanError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = RosterScanner::new(layout);
    for line in lines {
        scanner.consume_line(line);
    }
    scanner.finish()
}
