// src/document.rs
//
// Page-text access.
//
// The parser never touches binary document structure. Whatever decodes the
// report file hands us, per page, the decoded text of each content stream
// (one text-drawing instruction per line). `PageSource` is that boundary;
// `TextDocument` is an in-memory implementation plus a plain-text dump format:
//
//   - pages are separated by a form feed (\x0c)
//   - content streams inside a page are separated by a line reading `%%EOS`

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::config::consts::{PAGE_SEPARATOR, STREAM_SEPARATOR};

/// Per-page access to decoded content streams.
pub trait PageSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn page_count(&self) -> usize;

    /// Decoded text of every content stream on `page` (zero-based), in drawing order.
    fn content_streams(&self, page: usize) -> Result<Vec<String>, Self::Error>;
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("page {page} out of range (document has {count} pages)")]
    PageOutOfRange { page: usize, count: usize },

    #[error("cannot read text dump: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextDocument {
    pages: Vec<Vec<String>>,
}

impl TextDocument {
    /// Pages of content streams.
    pub fn new(pages: Vec<Vec<String>>) -> Self {
        Self { pages }
    }

    /// One stream per page.
    pub fn from_page_texts<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { pages: pages.into_iter().map(|p| vec![p.into()]).collect() }
    }

    pub fn pages(&self) -> &[Vec<String>] {
        &self.pages
    }

    /// Read a text dump from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse_dump(&text))
    }

    /// Parse the dump format. Blank streams are dropped; a page with none
    /// left has no text. A trailing separator does not open an extra page.
    pub fn parse_dump(text: &str) -> Self {
        let mut chunks: Vec<&str> = text.split(PAGE_SEPARATOR).collect();
        if chunks.len() > 1 && chunks.last().is_some_and(|c| c.trim().is_empty()) {
            chunks.pop();
        }

        let pages = chunks
            .into_iter()
            .map(|chunk| {
                let mut streams = Vec::new();
                let mut current: Vec<&str> = Vec::new();
                for line in chunk.lines() {
                    if line.trim_end() == STREAM_SEPARATOR {
                        push_stream(&mut streams, &current);
                        current.clear();
                    } else {
                        current.push(line);
                    }
                }
                push_stream(&mut streams, &current);
                streams
            })
            .collect();

        Self { pages }
    }

    /// Inverse of [`TextDocument::parse_dump`] for non-blank streams.
    pub fn to_dump(&self) -> String {
        let sep = s!("\n{}\n", STREAM_SEPARATOR);
        self.pages
            .iter()
            .map(|streams| streams.join(&sep))
            .collect::<Vec<_>>()
            .join(&s!("\n{}\n", PAGE_SEPARATOR))
    }
}

fn push_stream(streams: &mut Vec<String>, lines: &[&str]) {
    let text = lines.join("\n");
    let text = text.trim_matches(|c: char| c == '\n' || c == '\r');
    if !text.trim().is_empty() {
        streams.push(s!(text));
    }
}

impl PageSource for TextDocument {
    type Error = DocumentError;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn content_streams(&self, page: usize) -> Result<Vec<String>, DocumentError> {
        self.pages
            .get(page)
            .cloned()
            .ok_or(DocumentError::PageOutOfRange { page, count: self.pages.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_splits_pages_and_streams() {
        let dump = "cover\n\x0c\n(Heim: A) Tj\n%%EOS\n(Gast: B) Tj\n\x0c\n(20:00:00)\n(00:10)\n\x0c\n";
        let doc = TextDocument::parse_dump(dump);
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.content_streams(0).unwrap(), vec![s!("cover")]);
        assert_eq!(
            doc.content_streams(1).unwrap(),
            vec![s!("(Heim: A) Tj"), s!("(Gast: B) Tj")]
        );
        assert_eq!(doc.content_streams(2).unwrap(), vec![s!("(20:00:00)\n(00:10)")]);
    }

    #[test]
    fn blank_page_has_no_streams() {
        let doc = TextDocument::parse_dump("cover\x0c   \n\x0cevents");
        assert_eq!(doc.page_count(), 3);
        assert!(doc.content_streams(1).unwrap().is_empty());
    }

    #[test]
    fn dump_round_trips() {
        let doc = TextDocument::new(vec![
            vec![s!("a")],
            vec![s!("b\nc"), s!("d")],
            vec![s!("e")],
        ]);
        assert_eq!(TextDocument::parse_dump(&doc.to_dump()), doc);
    }

    #[test]
    fn out_of_range_page_is_an_error() {
        let doc = TextDocument::from_page_texts(["only"]);
        let err = doc.content_streams(4).unwrap_err();
        assert!(matches!(err, DocumentError::PageOutOfRange { page: 4, count: 1 }));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut path = std::env::temp_dir();
        path.push("h4a_report_document_load.txt");
        fs::write(&path, "x\x0cy").unwrap();
        let doc = TextDocument::load(&path).unwrap();
        assert_eq!(doc.page_count(), 2);

        path.push("missing");
        assert!(matches!(TextDocument::load(&path), Err(DocumentError::Io(_))));
    }
}
