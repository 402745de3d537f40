// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod document;
pub mod error;
pub mod file;
pub mod progress;
pub mod report;
pub mod scrape;

pub use data::{Actor, Event, EventKind, GameStatistics, GameTime, Person, Score, Side};
pub use document::{PageSource, TextDocument};
pub use error::{ReportError, ScanError};
pub use report::Report;
pub use scrape::{build_report, build_report_with_progress};
