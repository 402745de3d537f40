// src/data.rs
//
// Domain model shared by the scanners and the report.
//
// - Person:  one roster entry, identified by the full (number, first, last) tuple.
// - Event:   one recognized event cycle; a common attribute record plus an Actor tag
//            (a person, possibly unknown, or a team label for timeouts).
// - GameStatistics: per-person summary derived from that person's events.
//
// Everything here is built once during a parse pass and never mutated afterwards.

use std::fmt;
use std::time::Duration;

use chrono::NaiveTime;

/// Which side of the game a team or person belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    pub fn label(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A player or official listed on the statistics page.
///
/// `number` is kept as printed: jersey numbers are digits, officials carry a letter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Person {
    number: String,
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(
        number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn number(&self) -> &str { &self.number }
    pub fn first_name(&self) -> &str { &self.first_name }
    pub fn last_name(&self) -> &str { &self.last_name }

    /// "First Last", or just the last name when no first name was printed.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() {
            self.last_name.clone()
        } else {
            s!("{} {}", self.first_name, self.last_name)
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.number, self.name())
    }
}

/// Kind of a recorded event.
///
/// `Red` exists in the report vocabulary but none of the recognized action
/// lines produce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Yellow,
    Red,
    TwoMin,
    Goal,
    SevenMGoal,
    SevenMNoGoal,
    Timeout,
}

impl EventKind {
    /// Map a person-action keyword as printed in the report.
    /// Timeouts have their own line shape and never come through here.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Tor" => Some(EventKind::Goal),
            "7m-Tor" => Some(EventKind::SevenMGoal),
            "7m, KEIN Tor" => Some(EventKind::SevenMNoGoal),
            "2-min Strafe" => Some(EventKind::TwoMin),
            "Verwarnung" => Some(EventKind::Yellow),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Yellow => "YELLOW",
            EventKind::Red => "RED",
            EventKind::TwoMin => "TWO_MIN",
            EventKind::Goal => "GOAL",
            EventKind::SevenMGoal => "SEVENM_GOAL",
            EventKind::SevenMNoGoal => "SEVENM_NO_GOAL",
            EventKind::Timeout => "TIMEOUT",
        }
    }

    pub fn is_goal(self) -> bool {
        matches!(self, EventKind::Goal | EventKind::SevenMGoal)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running score (home, away) at the time an event was recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }
}

impl From<(u32, u32)> for Score {
    fn from((home, away): (u32, u32)) -> Self {
        Self { home, away }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.home, self.away)
    }
}

/// Who an event is attributed to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Actor {
    /// Person events; `None` for scoring events the report does not attribute.
    Person(Option<Person>),
    /// Team events (timeouts), carrying the team string as printed.
    Team(String),
}

/// One recognized event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub action: EventKind,
    pub actor: Actor,
    /// Wall-clock time the event was recorded.
    pub action_time: NaiveTime,
    /// Elapsed game time since kickoff.
    pub game_time: Duration,
    pub score: Score,
}

impl Event {
    /// The attributed person, if this is a person event with a known actor.
    pub fn person(&self) -> Option<&Person> {
        match &self.actor {
            Actor::Person(p) => p.as_ref(),
            Actor::Team(_) => None,
        }
    }
}

/// Game clock as printed (MM:SS), minutes may exceed 59.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameTime {
    pub minutes: u32,
    pub seconds: u32,
}

impl From<Duration> for GameTime {
    fn from(d: Duration) -> Self {
        let secs = d.as_secs();
        Self {
            minutes: (secs / 60) as u32,
            seconds: (secs % 60) as u32,
        }
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Per-person summary of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStatistics {
    pub person: Person,
    /// Field goals and 7m goals.
    pub goals: usize,
    /// First warning, if any.
    pub yellow: Option<GameTime>,
    /// Every two-minute suspension, in game order.
    pub two_minutes: Vec<GameTime>,
    pub red: Option<GameTime>,
}

impl GameStatistics {
    pub fn from_events<'a>(person: &Person, events: impl IntoIterator<Item = &'a Event>) -> Self {
        let mut stats = Self {
            person: person.clone(),
            goals: 0,
            yellow: None,
            two_minutes: Vec::new(),
            red: None,
        };
        for ev in events {
            let at = GameTime::from(ev.game_time);
            match ev.action {
                kind if kind.is_goal() => stats.goals += 1,
                EventKind::Yellow => { stats.yellow.get_or_insert(at); }
                EventKind::TwoMin => stats.two_minutes.push(at),
                EventKind::Red => { stats.red.get_or_insert(at); }
                _ => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(min: u64, sec: u64, action: EventKind) -> Event {
        Event {
            action,
            actor: Actor::Person(Some(Person::new("4", "Michael", "Müller"))),
            action_time: NaiveTime::MIN,
            game_time: Duration::from_secs(min * 60 + sec),
            score: Score::default(),
        }
    }

    #[test]
    fn keyword_table_is_fixed() {
        assert_eq!(EventKind::from_keyword("Tor"), Some(EventKind::Goal));
        assert_eq!(EventKind::from_keyword("7m-Tor"), Some(EventKind::SevenMGoal));
        assert_eq!(EventKind::from_keyword("7m, KEIN Tor"), Some(EventKind::SevenMNoGoal));
        assert_eq!(EventKind::from_keyword("2-min Strafe"), Some(EventKind::TwoMin));
        assert_eq!(EventKind::from_keyword("Verwarnung"), Some(EventKind::Yellow));
        assert_eq!(EventKind::from_keyword("Disqualifikation"), None);
        assert_eq!(EventKind::from_keyword("tor"), None);
    }

    #[test]
    fn person_identity_is_full_tuple() {
        let a = Person::new("4", "Michael", "Müller");
        assert_eq!(a, Person::new("4", "Michael", "Müller"));
        assert_ne!(a, Person::new("5", "Michael", "Müller"));
        assert_ne!(a, Person::new("4", "Michaela", "Müller"));
        assert_eq!(a.name(), "Michael Müller");
        assert_eq!(a.to_string(), "#4 Michael Müller");
        assert_eq!(Person::new("A", "", "Trainer").name(), "Trainer");
    }

    #[test]
    fn game_time_from_duration() {
        let gt = GameTime::from(Duration::from_secs(60 * 61 + 7));
        assert_eq!(gt, GameTime { minutes: 61, seconds: 7 });
        assert_eq!(gt.to_string(), "61:07");
    }

    #[test]
    fn statistics_count_goals_and_keep_first_warning() {
        let events = vec![
            at(3, 5, EventKind::Yellow),
            at(5, 52, EventKind::Goal),
            at(12, 0, EventKind::SevenMGoal),
            at(14, 0, EventKind::SevenMNoGoal),
            at(20, 1, EventKind::TwoMin),
            at(40, 0, EventKind::Yellow),
            at(48, 34, EventKind::TwoMin),
        ];
        let stats = GameStatistics::from_events(&Person::new("4", "Michael", "Müller"), &events);
        assert_eq!(stats.goals, 2);
        assert_eq!(stats.yellow, Some(GameTime { minutes: 3, seconds: 5 }));
        assert_eq!(
            stats.two_minutes,
            vec![GameTime { minutes: 20, seconds: 1 }, GameTime { minutes: 48, seconds: 34 }]
        );
        assert_eq!(stats.red, None);
    }
}
