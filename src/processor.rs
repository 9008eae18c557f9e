//! Footnote processing.
//!
//! Looks up the entries a document cites and formats each cluster of
//! markers as the text of one AGLC footnote.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info};

use crate::assemble::RenderMode;
use crate::field::Field;
use crate::input::CitationEntry;
use crate::markdown::{CitationCluster, CitationItem};

/// Errors that can occur during processing.
#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Reference not found: {0}")]
    ReferenceNotFound(String),

    #[error("Duplicate citation id in library: {0}")]
    DuplicateId(String),
}

/// A cluster that has been formatted as footnote text.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedCitation {
    /// The span in the original text where this cluster was found
    pub original_span: (usize, usize),
    /// The footnote text, without its closing full stop
    pub formatted: String,
}

/// Citation entries indexed by id.
#[derive(Debug, Default)]
pub struct Library {
    entries: HashMap<String, CitationEntry>,
}

impl Library {
    /// Indexes entries by id.
    ///
    /// Entries without an id cannot be cited and are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessorError::DuplicateId`] if two entries share an id.
    pub fn new(entries: Vec<CitationEntry>) -> Result<Self, ProcessorError> {
        let mut by_id = HashMap::with_capacity(entries.len());
        for entry in entries {
            let Some(id) = entry.id.clone() else {
                debug!(citation_type = %entry.citation_type, "skipping library entry without id");
                continue;
            };
            if by_id.contains_key(&id) {
                return Err(ProcessorError::DuplicateId(id));
            }
            by_id.insert(id, entry);
        }
        Ok(Library { entries: by_id })
    }

    pub fn get(&self, id: &str) -> Option<&CitationEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Formats one cited item, letting the marker's pinpoint replace the entry's.
pub fn format_item(entry: &CitationEntry, pinpoint: Option<&str>) -> String {
    match pinpoint {
        Some(pinpoint) => {
            let mut entry = entry.clone();
            entry.record.set(Field::Pinpoint, pinpoint);
            entry.format(RenderMode::Final)
        }
        None => entry.format(RenderMode::Final),
    }
}

/// Formats citation clusters as footnote texts, one per cluster.
///
/// Items within a cluster are joined with "; ".
///
/// # Errors
///
/// Returns [`ProcessorError::ReferenceNotFound`] for the first cited id that
/// is not in the library.
pub fn format_citation_clusters(
    clusters: &[CitationCluster],
    library: &Library,
) -> Result<Vec<ProcessedCitation>, ProcessorError> {
    let mut result = Vec::with_capacity(clusters.len());

    for cluster in clusters {
        let texts = cluster
            .items
            .iter()
            .map(|item| format_cited(item, library))
            .collect::<Result<Vec<_>, _>>()?;
        result.push(ProcessedCitation {
            original_span: cluster.span,
            formatted: texts.join("; "),
        });
    }

    info!(footnotes = result.len(), "formatted citation clusters");
    Ok(result)
}

fn format_cited(item: &CitationItem, library: &Library) -> Result<String, ProcessorError> {
    let entry = library
        .get(&item.id)
        .ok_or_else(|| ProcessorError::ReferenceNotFound(item.id.clone()))?;
    Ok(format_item(entry, item.pinpoint.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_records;
    use crate::markdown::extract_citation_clusters;

    const LIBRARY: &str = r#"[
        {"id": "mabo", "type": "case_reported", "case_name": "Mabo v Queensland [No 2]",
         "year": 1992, "volume": "175", "law_report_series": "CLR", "starting_page": "1"},
        {"id": "crimes", "type": "act", "title": "Crimes Act", "year": 1914, "jurisdiction": "Cth",
         "pinpoint": "s 5"},
        {"type": "book", "title": "No id here"}
    ]"#;

    fn library() -> Library {
        Library::new(parse_records(LIBRARY).unwrap()).unwrap()
    }

    #[test]
    fn test_library_skips_entries_without_id() {
        let library = library();
        assert_eq!(library.len(), 2);
        assert!(library.get("mabo").is_some());
    }

    #[test]
    fn test_library_rejects_duplicate_ids() {
        // Given: two entries sharing an id
        let entries =
            parse_records(r#"[{"id": "a", "type": "book"}, {"id": "a", "type": "act"}]"#).unwrap();

        // When: we build the library
        let result = Library::new(entries);

        // Then: the duplicate is reported
        assert!(matches!(result, Err(ProcessorError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_format_single_cluster() {
        // Given: one marker with a pinpoint
        let clusters = extract_citation_clusters("Native title [@mabo, 42] exists.");

        // When: we format it
        let processed = format_citation_clusters(&clusters, &library()).unwrap();

        // Then: the marker's pinpoint is used
        assert_eq!(processed.len(), 1);
        assert_eq!(
            processed[0].formatted,
            "<i>Mabo v Queensland [No 2]</i> 1992 175 CLR 1, 42"
        );
        assert_eq!(processed[0].original_span, clusters[0].span);
    }

    #[test]
    fn test_marker_pinpoint_replaces_entry_pinpoint() {
        let clusters = extract_citation_clusters("[@crimes, s 6]");
        let processed = format_citation_clusters(&clusters, &library()).unwrap();
        assert_eq!(
            processed[0].formatted,
            "<i>Crimes Act</i> <i>1914</i> (Cth) s 6"
        );
    }

    #[test]
    fn test_entry_pinpoint_used_without_marker_pinpoint() {
        let clusters = extract_citation_clusters("[@crimes]");
        let processed = format_citation_clusters(&clusters, &library()).unwrap();
        assert_eq!(
            processed[0].formatted,
            "<i>Crimes Act</i> <i>1914</i> (Cth) s 5"
        );
    }

    #[test]
    fn test_cluster_items_joined_with_semicolons() {
        let clusters = extract_citation_clusters("See [@mabo; @crimes].");
        let processed = format_citation_clusters(&clusters, &library()).unwrap();
        assert_eq!(
            processed[0].formatted,
            "<i>Mabo v Queensland [No 2]</i> 1992 175 CLR 1; <i>Crimes Act</i> <i>1914</i> (Cth) s 5"
        );
    }

    #[test]
    fn test_missing_reference() {
        // Given: a marker citing an unknown id
        let clusters = extract_citation_clusters("See [@mabo] and [@nowhere].");

        // When: we format the clusters
        let result = format_citation_clusters(&clusters, &library());

        // Then: the unknown id is reported
        assert!(matches!(result, Err(ProcessorError::ReferenceNotFound(id)) if id == "nowhere"));
    }

    #[test]
    fn test_no_clusters() {
        let processed = format_citation_clusters(&[], &library()).unwrap();
        assert!(processed.is_empty());
    }
}
