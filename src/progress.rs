// src/progress.rs
/// Lightweight progress reporting for report building.
/// Frontends (CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to scan.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page (zero-based index) has been scanned.
    fn item_done(&mut self, _page: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
