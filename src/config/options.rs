// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::data::Side;

/// Where things live in a report document and how its text is shaped.
/// Defaults describe the handball4all game report template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Zero-based index of the statistics (roster) page.
    pub statistics_page: usize,
    pub home_marker: String,
    pub away_marker: String,
    /// Token closing a text-drawing operand; team names end right before it.
    pub text_terminator: String,
    /// Lines that close a roster table row.
    pub table_end_markers: Vec<String>,
    /// Warn once this many event-cycle fields were missed in a row (0 = never).
    pub drift_warn_after: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            statistics_page: STATISTICS_PAGE,
            home_marker: s!(HOME_MARKER),
            away_marker: s!(AWAY_MARKER),
            text_terminator: s!(TEXT_TERMINATOR),
            table_end_markers: TABLE_END_MARKERS.iter().map(|m| s!(*m)).collect(),
            drift_warn_after: DRIFT_WARN_AFTER,
        }
    }
}

impl LayoutOptions {
    pub fn marker(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_marker,
            Side::Away => &self.away_marker,
        }
    }

    pub fn is_table_end(&self, line: &str) -> bool {
        self.table_end_markers.iter().any(|m| m == line)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// Target file. `None` means "write to stdout".
    out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: false,
            out: None,
        }
    }
}

impl ExportOptions {
    pub fn out(&self) -> Option<&Path> {
        self.out.as_deref()
    }

    /// Set the target from user text. A trailing separator (or an existing
    /// directory) means "directory": the default file name is appended and
    /// the extension follows the format.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out = None;
            return;
        }
        let p = PathBuf::from(s);
        if s.ends_with('/') || s.ends_with('\\') || p.is_dir() {
            self.out = Some(p.join(join!(DEFAULT_FILE, ".", self.format.ext())));
        } else {
            self.out = Some(p);
        }
    }

    /// `out/events.<ext>` for callers that need a file but got no path.
    pub fn default_path(&self) -> PathBuf {
        PathBuf::from(DEFAULT_OUT_DIR).join(join!(DEFAULT_FILE, ".", self.format.ext()))
    }
}
