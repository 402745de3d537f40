// src/csv.rs
use std::io::{self, Write};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{}", sep)?; }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write optional headers plus rows.
pub fn write_rows<W: Write>(
    mut w: W,
    headers: Option<&[&str]>,
    rows: &[Vec<String>],
    sep: char,
) -> io::Result<()> {
    if let Some(h) = headers {
        write_row(&mut w, h, sep)?;
    }
    for r in rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}
