//! aglc-cite: formatting engine for Australian legal citations (AGLC4).
//!
//! This library provides functionality to:
//! - Assemble AGLC-style citation strings for 50 citation types, either as a
//!   live preview with placeholder labels or as a final citation
//! - Load citation records from JSON arrays or JSONL
//! - Turn `[@id]` markers in Markdown documents into numbered footnotes
//! - Render italic markup as plain text, HTML or Markdown

pub mod assemble;
pub mod citation_type;
pub mod dates;
pub mod field;
pub mod input;
pub mod logging;
pub mod markdown;
pub mod markup;
pub mod names;
pub mod output;
pub mod processor;
pub mod record;
pub mod resolve;

pub use assemble::{assemble, format_citation, RenderMode, NO_PREVIEW};
pub use citation_type::{CitationType, Family};
pub use field::{placeholder_for, Field};
pub use input::{load_records, parse_records, CitationEntry, InputError};
pub use markdown::{
    extract_citation_clusters, extract_citations, Citation, CitationCluster, CitationItem,
};
pub use markup::OutputFormat;
pub use names::{format_editors, format_names};
pub use output::{close_footnote, footnote_section, generate_output, replace_citations};
pub use processor::{format_citation_clusters, Library, ProcessedCitation, ProcessorError};
pub use record::{CitationRecord, FieldValue, TagRef};
pub use resolve::{resolve, Segment};
