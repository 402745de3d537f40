// src/specs/events.rs
//! Event pages → chronological events.
//!
//! Each event is printed as four consecutive text lines:
//!
//! ```text
//! (20:06:54)                          wall-clock time
//! (05:52)                             game time
//! (1:2)                               score after the event
//! (Tor für Michael Müller\(4, …\))    action
//! ```
//!
//! [`EventScanner`] walks those lines as a four-phase cycle. The cycle state is
//! carried across content streams and pages; the aggregator feeds every event
//! page through one scanner.
//!
//! Tolerance rules:
//! - No wall-clock time yet: keep waiting in [`Phase::AwaitTime`].
//! - Game time or score missing: keep the previous value and move on anyway.
//!   Consecutive misses are counted and reported once they pile up, since they
//!   usually mean the cycle has drifted off the template.
//! - Action line matches nothing: no event, cycle restarts.
//! - Action keyword not in the vocabulary: hard error.

use std::time::Duration;

use chrono::NaiveTime;
use tracing::{debug, warn};

use crate::config::options::LayoutOptions;
use crate::core::patterns;
use crate::core::sanitize::{capitalize_words, split_name};
use crate::data::{Actor, Event, EventKind, Person, Score};
use crate::error::ScanError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    AwaitTime,
    AwaitGameTime,
    AwaitScore,
    AwaitAction,
}

#[derive(Clone, Debug)]
pub struct EventScanner {
    phase: Phase,
    action_time: NaiveTime,
    game_time: Duration,
    score: Score,
    misses: usize,
    drift_warn_after: usize,
}

impl Default for EventScanner {
    fn default() -> Self {
        Self::new(&LayoutOptions::default())
    }
}

impl EventScanner {
    pub fn new(layout: &LayoutOptions) -> Self {
        Self {
            phase: Phase::AwaitTime,
            action_time: NaiveTime::MIN,
            game_time: Duration::ZERO,
            score: Score::default(),
            misses: 0,
            drift_warn_after: layout.drift_warn_after,
        }
    }

    pub fn phase(&self) -> Phase { self.phase }

    /// Game time / score fields missed in a row.
    pub fn consecutive_misses(&self) -> usize { self.misses }

    /// Advance the cycle by one line. Returns the event completed by this
    /// line, if any.
    pub fn consume_line(&mut self, line: &str) -> Result<Option<Event>, ScanError> {
        match self.phase {
            Phase::AwaitTime => {
                if let Some(t) = patterns::wall_clock(line) {
                    self.action_time = t;
                    self.phase = Phase::AwaitGameTime;
                }
                Ok(None)
            }
            Phase::AwaitGameTime => {
                match patterns::game_time(line) {
                    Some(gt) => { self.game_time = gt; self.hit(); }
                    None => self.miss(line),
                }
                self.phase = Phase::AwaitScore;
                Ok(None)
            }
            Phase::AwaitScore => {
                match patterns::score(line) {
                    Some(fields) => { self.score = fields.or(self.score); self.hit(); }
                    None => self.miss(line),
                }
                self.phase = Phase::AwaitAction;
                Ok(None)
            }
            Phase::AwaitAction => {
                self.phase = Phase::AwaitTime;
                self.extract_action(line)
            }
        }
    }

    /// Feed a batch of lines, appending completed events to `out`.
    pub fn scan_into<'a, I>(&mut self, lines: I, out: &mut Vec<Event>) -> Result<(), ScanError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            if let Some(ev) = self.consume_line(line)? {
                out.push(ev);
            }
        }
        Ok(())
    }

    fn hit(&mut self) {
        self.misses = 0;
    }

    fn miss(&mut self, line: &str) {
        self.misses += 1;
        debug!(phase = ?self.phase, line, "event cycle: field missing, keeping previous value");
        if self.misses == self.drift_warn_after {
            warn!(
                misses = self.misses,
                line,
                "event cycle keeps missing game time/score; report layout may not match the template"
            );
        }
    }

    fn extract_action(&self, line: &str) -> Result<Option<Event>, ScanError> {
        if let Some(found) = patterns::person_action(line) {
            let action = EventKind::from_keyword(found.keyword).ok_or_else(|| {
                ScanError::UnknownAction { keyword: s!(found.keyword), line: s!(line) }
            })?;
            let actor = found
                .number
                .map(|number| person_from_action(number, found.name.unwrap_or_default()));
            return Ok(Some(self.event(action, Actor::Person(actor))));
        }
        if let Some(team) = patterns::timeout(line) {
            return Ok(Some(self.event(EventKind::Timeout, Actor::Team(s!(team)))));
        }
        Ok(None)
    }

    fn event(&self, action: EventKind, actor: Actor) -> Event {
        Event {
            action,
            actor,
            action_time: self.action_time,
            game_time: self.game_time,
            score: self.score,
        }
    }
}

fn person_from_action(number: &str, raw_name: &str) -> Person {
    let name = capitalize_words(raw_name);
    let (first, last) = split_name(&name);
    Person::new(number, first, last)
}

/// Scan one batch of lines with a fresh scanner.
pub fn scan<'a, I>(lines: I, layout: &LayoutOptions) -> Result<Vec<Event>, ScanError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = EventScanner::new(layout);
    let mut events = Vec::new();
    scanner.scan_into(lines, &mut events)?;
    Ok(events)
}
