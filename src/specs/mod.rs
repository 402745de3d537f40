// src/specs/mod.rs
//! # Report page “specs”
//!
//! Page-specific scanners for the game report. Each spec knows *where the
//! ground truth lives in the page text* and *how to read it line by line*.
//!
//! ## What lives here
//! - [`roster`]: the statistics page → team names + one roster per side.
//! - [`events`]: the event pages → chronological events with time and score.
//!
//! ## What does **not** live here
//! - **Shape recognition** (regexes): `core::patterns`.
//! - **Page selection and grouping** of events per person: `scrape`.
//! - **Export formatting**: `report` rows + `csv`.
//!
//! ## Typical call chain
//! ```text
//! CLI → scrape::build_report → specs::roster::scan   (statistics page)
//!                            ↘ specs::events::EventScanner (every later page)
//! ```
//!
//! ## Conventions
//! - Scanners are explicit state objects fed with `consume_line`; all state is
//!   owned by one parse call.
//! - Benign absences never fail; they log at `debug`/`warn`.
pub mod events;
pub mod roster;
