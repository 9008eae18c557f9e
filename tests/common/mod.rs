//! Shared test constants and helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

/// A small library covering a reported case, an Act and a book.
///
/// The Act carries its own pinpoint so tests can check that a marker's
/// pinpoint replaces it.
pub const SAMPLE_LIBRARY: &str = r#"[
  {"id": "mabo", "type": "case_reported", "case_name": "Mabo v Queensland [No 2]",
   "year": 1992, "volume": "175", "law_report_series": "CLR", "starting_page": "1",
   "short_title": "Mabo"},
  {"id": "crimes", "type": "act", "title": "Crimes Act", "year": 1914,
   "jurisdiction": "Cth", "pinpoint": "s 5"},
  {"id": "method", "type": "book", "authors": ["Jane Smith"], "title": "Legal Method",
   "publisher": "Lawbook", "year": 2020}
]"#;

/// The same records as JSONL, one object per line.
pub const SAMPLE_LIBRARY_JSONL: &str = r#"{"id": "mabo", "type": "case_reported", "case_name": "Mabo v Queensland [No 2]", "year": 1992, "volume": "175", "law_report_series": "CLR", "starting_page": "1", "short_title": "Mabo"}
{"id": "crimes", "type": "act", "title": "Crimes Act", "year": 1914, "jurisdiction": "Cth", "pinpoint": "s 5"}
{"id": "method", "type": "book", "authors": ["Jane Smith"], "title": "Legal Method", "publisher": "Lawbook", "year": 2020}
"#;

/// Expected final-mode citations for [`SAMPLE_LIBRARY`], in order.
pub const SAMPLE_CITATIONS: [&str; 3] = [
    "<i>Mabo v Queensland [No 2]</i> 1992 175 CLR 1 ('<i>Mabo</i>')",
    "<i>Crimes Act</i> <i>1914</i> (Cth) s 5",
    "Jane Smith, <i>'Legal Method'</i> (Lawbook, 2020)",
];

/// Helper to create a temporary file with content and extension.
pub fn create_temp_file(content: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
