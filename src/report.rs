// src/report.rs
//
// The parsed game: team labels, rosters with their events, and the full
// chronological event list. Built once by `scrape::build_report`; read-only
// afterwards.

use std::collections::BTreeMap;

use crate::data::{Actor, Event, EventKind, GameStatistics, GameTime, Person, Side};
use crate::error::ReportError;

/// Column headers for [`Report::event_rows`].
pub const EVENT_HEADERS: [&str; 8] =
    ["Time", "Game time", "Home", "Away", "Action", "Team", "Number", "Name"];

/// Column headers for [`Report::statistics_rows`].
pub const STATISTICS_HEADERS: [&str; 7] =
    ["Team", "Number", "Name", "Goals", "Yellow", "2min", "Red"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    home_team: String,
    away_team: String,
    home: BTreeMap<Person, Vec<Event>>,
    away: BTreeMap<Person, Vec<Event>>,
    events: Vec<Event>,
}

impl Report {
    pub(crate) fn from_parts(
        home_team: String,
        away_team: String,
        home: BTreeMap<Person, Vec<Event>>,
        away: BTreeMap<Person, Vec<Event>>,
        events: Vec<Event>,
    ) -> Self {
        Self { home_team, away_team, home, away, events }
    }

    pub fn home_team(&self) -> &str { &self.home_team }
    pub fn away_team(&self) -> &str { &self.away_team }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    /// Roster of one side, ordered by (number, first, last).
    pub fn persons(&self, side: Side) -> impl Iterator<Item = &Person> + '_ {
        self.roster(side).keys()
    }

    /// Roster of the team with this label.
    pub fn persons_for_team(&self, team: &str) -> Result<Vec<&Person>, ReportError> {
        let side = self.side_of_team(team).ok_or_else(|| ReportError::UnknownTeam(s!(team)))?;
        Ok(self.persons(side).collect())
    }

    pub fn side_of_team(&self, team: &str) -> Option<Side> {
        if team == self.home_team {
            Some(Side::Home)
        } else if team == self.away_team {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn side_of(&self, person: &Person) -> Option<Side> {
        Side::BOTH.into_iter().find(|&side| self.roster(side).contains_key(person))
    }

    /// All events in report order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events attributed to a roster member, in report order.
    pub fn events_for(&self, person: &Person) -> Result<&[Event], ReportError> {
        self.home
            .get(person)
            .or_else(|| self.away.get(person))
            .map(Vec::as_slice)
            .ok_or_else(|| ReportError::UnknownPerson(person.clone()))
    }

    pub fn events_for_kind(&self, person: &Person, kind: EventKind) -> Result<Vec<&Event>, ReportError> {
        Ok(self.events_for(person)?.iter().filter(|e| e.action == kind).collect())
    }

    pub fn statistics_for(&self, person: &Person) -> Result<GameStatistics, ReportError> {
        Ok(GameStatistics::from_events(person, self.events_for(person)?))
    }

    /// Statistics for a whole side, roster order.
    pub fn statistics(&self, side: Side) -> Vec<GameStatistics> {
        self.roster(side)
            .iter()
            .map(|(person, events)| GameStatistics::from_events(person, events))
            .collect()
    }

    /// Persons credited with events who appear on neither roster.
    pub fn stray_actors(&self) -> Vec<&Person> {
        let mut out: Vec<&Person> = Vec::new();
        for p in self.events.iter().filter_map(Event::person) {
            if self.side_of(p).is_none() && !out.contains(&p) {
                out.push(p);
            }
        }
        out
    }

    /// One export row per event, see [`EVENT_HEADERS`].
    pub fn event_rows(&self) -> Vec<Vec<String>> {
        self.events
            .iter()
            .map(|ev| {
                let (team, number, name) = match &ev.actor {
                    Actor::Person(Some(p)) => (
                        self.side_of(p).map(|s| s!(self.team(s))).unwrap_or_default(),
                        s!(p.number()),
                        p.name(),
                    ),
                    Actor::Person(None) => (s!(), s!(), s!()),
                    Actor::Team(t) => (t.clone(), s!(), s!()),
                };
                vec![
                    ev.action_time.format("%H:%M:%S").to_string(),
                    GameTime::from(ev.game_time).to_string(),
                    ev.score.home.to_string(),
                    ev.score.away.to_string(),
                    s!(ev.action.as_str()),
                    team,
                    number,
                    name,
                ]
            })
            .collect()
    }

    /// One row per roster person, home side first.
    pub fn statistics_rows(&self) -> Vec<Vec<String>> {
        let fmt = |t: Option<GameTime>| t.map(|t| t.to_string()).unwrap_or_default();
        Side::BOTH
            .into_iter()
            .flat_map(|side| self.statistics(side).into_iter().map(move |st| (side, st)))
            .map(|(side, st)| {
                vec![
                    s!(self.team(side)),
                    s!(st.person.number()),
                    st.person.name(),
                    st.goals.to_string(),
                    fmt(st.yellow),
                    st.two_minutes.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "),
                    fmt(st.red),
                ]
            })
            .collect()
    }

    fn roster(&self, side: Side) -> &BTreeMap<Person, Vec<Event>> {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}
