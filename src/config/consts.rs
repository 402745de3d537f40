// src/config/consts.rs

// Statistics page layout
pub const STATISTICS_PAGE: usize = 1; // zero-based; pages before it carry no events
pub const HOME_MARKER: &str = "Heim: ";
pub const AWAY_MARKER: &str = "Gast: ";
pub const TEXT_TERMINATOR: &str = ") Tj";
pub const TABLE_END_MARKERS: &[&str] = &["BT /F1 9.00 Tf ET", "BT /F1 8.00 Tf ET"];

// Event cycle
pub const DRIFT_WARN_AFTER: usize = 3; // consecutive missed fields; 0 disables

// Text dumps
pub const PAGE_SEPARATOR: char = '\x0c';
pub const STREAM_SEPARATOR: &str = "%%EOS";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "events";
