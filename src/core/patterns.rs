// src/core/patterns.rs
//! Line recognizers for report text.
//!
//! Every function here is a pure `line -> Option<fields>` probe. The scanners in
//! `specs` decide *when* to ask which question; this module only knows *what*
//! each shape looks like.
//!
//! Shapes are matched inside the parenthesized operands of text-drawing lines,
//! e.g. `BT /F1 8.00 Tf 52 640 Td (20:06:54) Tj ET`. Parentheses nested inside
//! an operand may appear backslash-escaped (`\(4, SG X\)`) or bare.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::NaiveTime;
use regex::Regex;

use crate::data::Score;

static WALL_CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d\d):(\d\d):(\d\d)\)").expect("wall clock regex"));

static GAME_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d\d):(\d\d)\)").expect("game time regex"));

static SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d?\d)?:(\d?\d)?\)").expect("score regex"));

// (<keyword> für|durch <name>(<number>, <team>)); the team may carry escaped parens.
static PERSON_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([^()]*?) (?:für|durch) (?:([^\\()]*)\\?\(([^,()\\]*),(?:\\[()]|[^()])*?\\?\)\))?")
        .expect("person action regex")
});

static TIMEOUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(Auszeit ([^()]*)\)").expect("timeout regex"));

// Jersey number, or a single letter for team officials.
static JERSEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*(\d{1,3}|[A-Z])\s*\)").expect("jersey regex"));

static FULL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*([^()]+?)\s+([^()\s]+)\s*\)").expect("name regex"));

/// Score fields as printed; either side may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreFields {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

impl ScoreFields {
    /// Fill missing sides from the previous score.
    pub fn or(self, prev: Score) -> Score {
        Score::new(self.home.unwrap_or(prev.home), self.away.unwrap_or(prev.away))
    }
}

/// Fields of a person action line. `name`/`number` are absent for
/// unattributed events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonAction<'a> {
    pub keyword: &'a str,
    pub name: Option<&'a str>,
    pub number: Option<&'a str>,
}

/// `(HH:MM:SS)` → wall-clock time. Out-of-range clocks are not a match.
pub fn wall_clock(line: &str) -> Option<NaiveTime> {
    let caps = WALL_CLOCK.captures(line)?;
    let h = caps[1].parse().ok()?;
    let m = caps[2].parse().ok()?;
    let s = caps[3].parse().ok()?;
    NaiveTime::from_hms_opt(h, m, s)
}

/// `(MM:SS)` → elapsed game time.
pub fn game_time(line: &str) -> Option<Duration> {
    let caps = GAME_TIME.captures(line)?;
    let minutes: u64 = caps[1].parse().ok()?;
    let seconds: u64 = caps[2].parse().ok()?;
    Some(Duration::from_secs(minutes * 60 + seconds))
}

/// `(H:A)` with one- or two-digit sides.
pub fn score(line: &str) -> Option<ScoreFields> {
    let caps = SCORE.captures(line)?;
    let side = |i: usize| -> Option<u32> { caps.get(i).and_then(|m| m.as_str().parse().ok()) };
    Some(ScoreFields { home: side(1), away: side(2) })
}

/// `(<keyword> für <name>(<number>, <team>))`, keyword unchecked.
pub fn person_action(line: &str) -> Option<PersonAction<'_>> {
    let caps = PERSON_ACTION.captures(line)?;
    let non_empty = |i: usize| {
        caps.get(i)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
    };
    Some(PersonAction {
        keyword: caps.get(1).map_or("", |m| m.as_str()),
        name: non_empty(2),
        number: non_empty(3),
    })
}

/// `(Auszeit <team>)` → team string as printed.
pub fn timeout(line: &str) -> Option<&str> {
    TIMEOUT.captures(line)?.get(1).map(|m| m.as_str().trim())
}

/// `(4)` / `(A)` → roster number.
pub fn jersey_number(line: &str) -> Option<&str> {
    JERSEY.captures(line)?.get(1).map(|m| m.as_str())
}

/// `(first … last)` → (everything before the final space, final token).
pub fn full_name(line: &str) -> Option<(&str, &str)> {
    let caps = FULL_NAME.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_needs_three_fields() {
        assert_eq!(wall_clock("BT 52 640 Td (20:06:54) Tj ET"), NaiveTime::from_hms_opt(20, 6, 54));
        assert_eq!(wall_clock("(05:52)"), None);
        assert_eq!(wall_clock("(25:00:00)"), None);
        assert_eq!(wall_clock("no time here"), None);
    }

    #[test]
    fn game_time_is_minutes_and_seconds() {
        assert_eq!(game_time("(05:52) Tj"), Some(Duration::from_secs(5 * 60 + 52)));
        assert_eq!(game_time("(60:00)"), Some(Duration::from_secs(3600)));
        assert_eq!(game_time("(20:06:54)"), None);
        assert_eq!(game_time("(5:52)"), None);
    }

    #[test]
    fn score_sides_are_independent() {
        assert_eq!(score("(1:2)"), Some(ScoreFields { home: Some(1), away: Some(2) }));
        assert_eq!(score("(14:15) Tj"), Some(ScoreFields { home: Some(14), away: Some(15) }));
        assert_eq!(score("(:3)"), Some(ScoreFields { home: None, away: Some(3) }));
        assert_eq!(score("(123:1)"), None);
        assert_eq!(score("1:2"), None);

        let prev = Score::new(7, 8);
        assert_eq!(ScoreFields { home: None, away: Some(9) }.or(prev), Score::new(7, 9));
    }

    #[test]
    fn person_action_bare_parentheses() {
        let act = person_action("...(Tor für Michael Müller(4, SG Musterstadt))...").unwrap();
        assert_eq!(act.keyword, "Tor");
        assert_eq!(act.name, Some("Michael Müller"));
        assert_eq!(act.number, Some("4"));
    }

    #[test]
    fn person_action_escaped_parentheses() {
        let line = r"BT 120 640 Td (7m, KEIN Tor durch fabian weller \(13, CVJM Möglingen\)) Tj ET";
        let act = person_action(line).unwrap();
        assert_eq!(act.keyword, "7m, KEIN Tor");
        assert_eq!(act.name, Some("fabian weller"));
        assert_eq!(act.number, Some("13"));
    }

    #[test]
    fn person_action_without_actor() {
        let act = person_action("(Tor für SG Musterstadt) Tj").unwrap();
        assert_eq!(act.keyword, "Tor");
        assert_eq!(act.name, None);
        assert_eq!(act.number, None);

        assert!(person_action("(Auszeit Heim)").is_none());
        assert!(person_action("(20:06:54)").is_none());
    }

    #[test]
    fn person_action_team_with_escaped_parentheses() {
        let act = person_action(r"BT (Tor für Max Muster\(7, HSG Foo \(2\)\)) Tj ET").unwrap();
        assert_eq!(act.keyword, "Tor");
        assert_eq!(act.name, Some("Max Muster"));
        assert_eq!(act.number, Some("7"));
    }

    #[test]
    fn timeout_takes_team_string() {
        assert_eq!(timeout("BT (Auszeit Heim) Tj ET"), Some("Heim"));
        assert_eq!(timeout("(Auszeit  HSG Sulzbach-Murrhardt )"), Some("HSG Sulzbach-Murrhardt"));
        assert_eq!(timeout("(Tor für X(4, Y))"), None);
    }

    #[test]
    fn roster_cells() {
        assert_eq!(jersey_number("BT 40 600 Td (4) Tj ET"), Some("4"));
        assert_eq!(jersey_number("( 12 )"), Some("12"));
        assert_eq!(jersey_number("(A) Tj"), Some("A"));
        assert_eq!(jersey_number("(Michael Müller)"), None);

        assert_eq!(full_name("BT 60 600 Td (michael Müller) Tj ET"), Some(("michael", "Müller")));
        assert_eq!(full_name("(Anna Lena Schmidt )"), Some(("Anna Lena", "Schmidt")));
        assert_eq!(full_name("(4)"), None);
    }
}
