//! Output generation for footnoted documents.
//!
//! Replaces citation clusters in the original Markdown with footnote markers
//! and appends the footnote definitions.

use crate::markup::{strip_markup, OutputFormat};
use crate::processor::ProcessedCitation;

/// Ends footnote text with a full stop unless it already ends in terminal
/// punctuation.
pub fn close_footnote(text: &str) -> String {
    let visible = strip_markup(text);
    let trimmed = text.trim_end();
    if visible.trim_end().ends_with(|c: char| matches!(c, '.' | '?' | '!')) {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}

fn in_document_order(processed: &[ProcessedCitation]) -> Vec<&ProcessedCitation> {
    let mut ordered: Vec<_> = processed.iter().collect();
    ordered.sort_by_key(|citation| citation.original_span.0);
    ordered
}

/// Replaces each cluster with a footnote marker `[^n]`, numbered in document
/// order.
///
/// Replacements are performed from the end of the text towards the beginning
/// so that earlier spans stay valid.
pub fn replace_citations(markdown: &str, processed: &[ProcessedCitation]) -> String {
    let ordered = in_document_order(processed);
    let mut result = markdown.to_string();

    for (index, citation) in ordered.iter().enumerate().rev() {
        let (start, end) = citation.original_span;
        result.replace_range(start..end, &format!("[^{}]", index + 1));
    }

    result
}

/// Builds the footnote definitions, one `[^n]: text.` line per cluster.
pub fn footnote_section(processed: &[ProcessedCitation]) -> String {
    in_document_order(processed)
        .iter()
        .enumerate()
        .map(|(index, citation)| {
            let text = OutputFormat::Markdown.render(&close_footnote(&citation.formatted));
            format!("[^{}]: {}", index + 1, text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generates the final document: content followed by the footnote section.
pub fn generate_output(content: &str, footnotes: &str) -> String {
    let mut output = content.trim_end().to_string();

    if !footnotes.is_empty() {
        output.push_str("\n\n");
        output.push_str(footnotes);
    }

    output.push('\n');
    output
}
