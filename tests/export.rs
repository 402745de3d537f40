// tests/export.rs
use std::fs;
use std::path::PathBuf;

use h4a_report::config::options::{ExportFormat, ExportOptions};
use h4a_report::file::{write_export, write_export_to};
use h4a_report::report::{EVENT_HEADERS, STATISTICS_HEADERS};
use h4a_report::{TextDocument, build_report};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("h4a_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const DUMP: &str = "cover\n\x0c\n\
(Heim: CVJM Möglingen) Tj\n\
(4)\n(Michael Müller)\nBT /F1 9.00 Tf ET\n\
(Gast: HSG Sulzbach-Murrhardt) Tj\n\
(7)\n(Jonas Klein)\nBT /F1 9.00 Tf ET\n\
\x0c\n\
(20:06:54)\n(05:52)\n(1:0)\n(Tor für Michael Müller\\(4, CVJM Möglingen\\))\n\
(20:09:00)\n(08:00)\n(1:0)\n(7m, KEIN Tor durch Jonas Klein\\(7, HSG Sulzbach-Murrhardt\\))\n";

fn rows() -> Vec<Vec<String>> {
    build_report(&TextDocument::parse_dump(DUMP)).unwrap().event_rows()
}

#[test]
fn csv_export_to_directory_hint_uses_default_name() {
    let dir = tmp_dir("csv_dir");
    let mut opts = ExportOptions::default();
    opts.include_headers = true;
    opts.set_path(&format!("{}/", dir.display()));

    let written = write_export(&opts, &EVENT_HEADERS, &rows()).unwrap();
    assert!(written.to_string_lossy().ends_with("events.csv"));

    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], EVENT_HEADERS.join(","));
    assert_eq!(lines[1], "20:06:54,05:52,1,0,GOAL,CVJM Möglingen,4,Michael Müller");
    assert_eq!(lines[2], "20:09:00,08:00,1,0,SEVENM_NO_GOAL,HSG Sulzbach-Murrhardt,7,Jonas Klein");
}

#[test]
fn tsv_export_without_headers_creates_missing_parents() {
    let dir = tmp_dir("tsv_nested");
    let target = dir.join("deeper").join("game.tsv");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.set_path(target.to_str().unwrap());

    let written = write_export(&opts, &EVENT_HEADERS, &rows()).unwrap();
    assert_eq!(written, target);

    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("20:06:54\t05:52\t1\t0\tGOAL\t"));
}

#[test]
fn writer_export_honors_header_toggle() {
    let report = build_report(&TextDocument::parse_dump(DUMP)).unwrap();
    let rows = report.statistics_rows();

    let mut opts = ExportOptions::default();
    let mut buf = Vec::new();
    write_export_to(&mut buf, &opts, &STATISTICS_HEADERS, &rows).unwrap();
    let plain = String::from_utf8(buf).unwrap();
    assert!(plain.starts_with("CVJM Möglingen,4,Michael Müller,1,"));

    opts.include_headers = true;
    let mut buf = Vec::new();
    write_export_to(&mut buf, &opts, &STATISTICS_HEADERS, &rows).unwrap();
    let with_headers = String::from_utf8(buf).unwrap();
    assert!(with_headers.starts_with("Team,Number,Name,Goals,Yellow,2min,Red\n"));
    assert_eq!(with_headers.lines().count(), plain.lines().count() + 1);
}
