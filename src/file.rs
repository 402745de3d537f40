// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::config::options::ExportOptions;
use crate::csv::write_rows;

/// Write one export file based on ExportOptions (path, headers policy, delimiter).
/// Without a configured path the default `out/events.<ext>` is used.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
    let path = export.out().map(Path::to_path_buf).unwrap_or_else(|| export.default_path());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_export_to(&mut out, export, headers, rows)?;
    out.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "export written");
    Ok(path)
}

/// Same as [`write_export`] but into any writer (stdout for the CLI).
pub fn write_export_to<W: Write>(
    w: W,
    export: &ExportOptions,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let headers = export.include_headers.then_some(headers);
    write_rows(w, headers, rows, export.format.delim())?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
