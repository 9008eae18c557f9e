//! Markdown citation marker parser.
//!
//! Extracts citation markers in the format `[@id]` and `[@id, pinpoint]`
//! from Markdown text.
//!
//! Also supports clustering of adjacent markers and Pandoc grouping
//! `[@a; @b, 12]`. Each cluster becomes one footnote. Markers inside inline
//! code or fenced code blocks are left alone.

use once_cell::sync::Lazy;
use regex::Regex;

/// `[@id]` or `[@id, pinpoint]`.
static CITATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[@([^\]\[,;]+)(?:,\s*([^\]]+))?\]").unwrap());

/// Pandoc grouped markers: `[@a; @b]` or `[@a, 12; @b]`.
static PANDOC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(@[^\]]+;[^\]]*)\]").unwrap());

static BACKTICK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`+").unwrap());

/// A single cited entry within a cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct CitationItem {
    /// The library entry id (e.g., "mabo" or "hca:1992-23")
    pub id: String,
    /// Pinpoint given in the marker, overriding the entry's own
    pub pinpoint: Option<String>,
}

/// One or more items cited together, rendered as one footnote.
///
/// Adjacent markers (separated only by spaces or tabs) are grouped into a
/// single cluster, as are the items of a Pandoc group.
#[derive(Debug, Clone, PartialEq)]
pub struct CitationCluster {
    /// The citation items in this cluster
    pub items: Vec<CitationItem>,
    /// Start and end byte positions covering the entire cluster in the source text
    pub span: (usize, usize),
}

/// A single marker found in the Markdown text.
#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    /// The library entry id
    pub id: String,
    /// Optional pinpoint (e.g., "42" or "s 18")
    pub pinpoint: Option<String>,
    /// Start and end byte positions in the original text
    pub span: (usize, usize),
}

fn parse_pinpoint(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

fn is_inside(ranges: &[(usize, usize)], pos: usize) -> bool {
    ranges.iter().any(|(start, end)| pos >= *start && pos < *end)
}

/// Byte ranges of fenced code blocks opened by three or more backticks or
/// tildes. An unclosed fence runs to the end of the text.
fn fenced_block_ranges(markdown: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    // (block start, fence character, fence length)
    let mut open: Option<(usize, char, usize)> = None;
    let mut offset = 0;

    for line in markdown.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 {
            continue;
        }
        let body = line[indent..].trim_end();
        let Some(fence_char) = body.chars().next().filter(|c| matches!(*c, '`' | '~')) else {
            continue;
        };
        let fence_len = body.chars().take_while(|c| *c == fence_char).count();
        if fence_len < 3 {
            continue;
        }

        match open {
            None => open = Some((line_start, fence_char, fence_len)),
            Some((block_start, open_char, open_len))
                if open_char == fence_char && fence_len >= open_len && body.len() == fence_len =>
            {
                ranges.push((block_start, offset));
                open = None;
            }
            Some(_) => {}
        }
    }

    if let Some((block_start, _, _)) = open {
        ranges.push((block_start, markdown.len()));
    }
    ranges
}

/// Byte ranges of inline code spans and fenced code blocks.
///
/// An inline span opens with a run of backticks and closes at the next run of
/// the same length; a run with no partner is literal text.
fn code_ranges(markdown: &str) -> Vec<(usize, usize)> {
    let mut ranges = fenced_block_ranges(markdown);

    let runs: Vec<(usize, usize)> = BACKTICK_RUN
        .find_iter(markdown)
        .map(|run| (run.start(), run.end()))
        .filter(|(start, _)| !is_inside(&ranges, *start))
        .collect();

    let mut index = 0;
    while index < runs.len() {
        let (start, end) = runs[index];
        let closing = runs[index + 1..]
            .iter()
            .position(|(s, e)| e - s == end - start);
        match closing {
            Some(skip) => {
                ranges.push((start, runs[index + 1 + skip].1));
                index += skip + 2;
            }
            None => index += 1,
        }
    }

    ranges
}

fn extract_pandoc_grouped_citations(
    markdown: &str,
    code: &[(usize, usize)],
) -> Vec<CitationCluster> {
    let mut clusters: Vec<CitationCluster> = Vec::new();

    for cap in PANDOC_RE.captures_iter(markdown) {
        let (Some(full_match), Some(inner)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        if is_inside(code, full_match.start()) {
            continue;
        }

        let items: Vec<CitationItem> = inner
            .as_str()
            .split(';')
            .map(str::trim)
            .filter_map(|part| part.strip_prefix('@'))
            .map(|part| match part.split_once(',') {
                Some((id, pinpoint)) => CitationItem {
                    id: id.trim().to_string(),
                    pinpoint: parse_pinpoint(pinpoint),
                },
                None => CitationItem {
                    id: part.trim().to_string(),
                    pinpoint: None,
                },
            })
            .filter(|item| !item.id.is_empty())
            .collect();

        if !items.is_empty() {
            clusters.push(CitationCluster {
                items,
                span: (full_match.start(), full_match.end()),
            });
        }
    }

    clusters
}

/// Extracts citation clusters from the given Markdown text.
///
/// # Examples
///
/// ```
/// use aglc_cite::extract_citation_clusters;
///
/// // Adjacent markers are grouped
/// let clusters = extract_citation_clusters("As held [@mabo] [@wik], native title...");
/// assert_eq!(clusters.len(), 1);
/// assert_eq!(clusters[0].items.len(), 2);
///
/// // Markers separated by text are not grouped
/// let clusters = extract_citation_clusters("See [@mabo] and also [@wik].");
/// assert_eq!(clusters.len(), 2);
/// ```
pub fn extract_citation_clusters(markdown: &str) -> Vec<CitationCluster> {
    let code = code_ranges(markdown);
    let pandoc_clusters = extract_pandoc_grouped_citations(markdown, &code);

    let pandoc_spans: Vec<(usize, usize)> = pandoc_clusters.iter().map(|c| c.span).collect();

    let simple_citations: Vec<Citation> = markers_outside(markdown, &code)
        .into_iter()
        .filter(|c| !is_inside(&pandoc_spans, c.span.0))
        .collect();

    let mut simple_clusters: Vec<CitationCluster> = Vec::new();
    let mut current_items: Vec<CitationItem> = Vec::new();
    let mut cluster_start: usize = 0;
    let mut last_end: usize = 0;

    for citation in simple_citations {
        let item = CitationItem {
            id: citation.id,
            pinpoint: citation.pinpoint,
        };

        if current_items.is_empty() {
            cluster_start = citation.span.0;
            last_end = citation.span.1;
            current_items.push(item);
            continue;
        }

        // Only spaces and tabs may sit between adjacent markers
        let between = &markdown[last_end..citation.span.0];
        if between.chars().all(|c| c == ' ' || c == '\t') {
            last_end = citation.span.1;
            current_items.push(item);
        } else {
            simple_clusters.push(CitationCluster {
                items: std::mem::replace(&mut current_items, vec![item]),
                span: (cluster_start, last_end),
            });
            cluster_start = citation.span.0;
            last_end = citation.span.1;
        }
    }

    if !current_items.is_empty() {
        simple_clusters.push(CitationCluster {
            items: current_items,
            span: (cluster_start, last_end),
        });
    }

    let mut all_clusters: Vec<CitationCluster> = pandoc_clusters;
    all_clusters.extend(simple_clusters);
    all_clusters.sort_by_key(|c| c.span.0);

    all_clusters
}

/// Extracts all single citation markers from the given Markdown text.
///
/// # Examples
///
/// ```
/// use aglc_cite::extract_citations;
///
/// let citations = extract_citations("See [@mabo, 42] for details.");
/// assert_eq!(citations.len(), 1);
/// assert_eq!(citations[0].id, "mabo");
/// assert_eq!(citations[0].pinpoint.as_deref(), Some("42"));
/// ```
pub fn extract_citations(markdown: &str) -> Vec<Citation> {
    markers_outside(markdown, &code_ranges(markdown))
}

fn markers_outside(markdown: &str, code: &[(usize, usize)]) -> Vec<Citation> {
    CITATION_RE
        .captures_iter(markdown)
        .filter_map(|cap| {
            let full_match = cap.get(0)?;
            if is_inside(code, full_match.start()) {
                return None;
            }
            let id = cap.get(1)?.as_str().trim().to_string();
            if id.is_empty() {
                return None;
            }
            Some(Citation {
                id,
                pinpoint: cap.get(2).and_then(|m| parse_pinpoint(m.as_str())),
                span: (full_match.start(), full_match.end()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert!(extract_citations("").is_empty());
    }

    #[test]
    fn test_no_citations() {
        assert!(extract_citations("This is plain text without citations.").is_empty());
    }

    #[test]
    fn test_simple_citation() {
        // Given: Markdown with a simple marker
        let markdown = "Native title was recognised [@mabo] in 1992.";

        // When: We extract citations
        let citations = extract_citations(markdown);

        // Then: We find one citation with the correct id and no pinpoint
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].id, "mabo");
        assert_eq!(citations[0].pinpoint, None);
    }

    #[test]
    fn test_prefixed_id() {
        let citations = extract_citations("The court [@hca:1992-23] held otherwise.");
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].id, "hca:1992-23");
    }

    #[test]
    fn test_citation_span() {
        // Given: Markdown with a marker
        let markdown = "Text [@mabo] more text.";

        // When: We extract citations
        let citations = extract_citations(markdown);

        // Then: The span covers exactly the marker
        let (start, end) = citations[0].span;
        assert_eq!(&markdown[start..end], "[@mabo]");
    }

    #[test]
    fn test_multiple_citations() {
        let citations = extract_citations("First [@mabo] and second [@wik] cases.");
        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].id, "mabo");
        assert_eq!(citations[1].id, "wik");
    }

    #[test]
    fn test_citation_with_pinpoint() {
        // Given: a marker with a pinpoint
        let markdown = "As Brennan J said [@mabo, 42].";

        // When: We extract citations
        let citations = extract_citations(markdown);

        // Then: The pinpoint is captured verbatim
        assert_eq!(citations[0].pinpoint.as_deref(), Some("42"));
        let (start, end) = citations[0].span;
        assert_eq!(&markdown[start..end], "[@mabo, 42]");
    }

    #[test]
    fn test_blank_pinpoint_is_none() {
        let citations = extract_citations("See [@mabo,  ] here.");
        assert_eq!(citations[0].pinpoint, None);
    }

    #[test]
    fn test_markers_in_inline_code_are_ignored() {
        // Given: one marker inside a code span and one outside
        let markdown = "Write `[@mabo]` to cite, as in [@wik].";

        // When: We extract citations
        let citations = extract_citations(markdown);

        // Then: only the marker outside the code span is found
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].id, "wik");
    }

    #[test]
    fn test_double_backtick_span_hides_marker() {
        let markdown = "Use ``a ` [@mabo]`` here.";
        assert!(extract_citations(markdown).is_empty());
    }

    #[test]
    fn test_unmatched_backtick_is_literal() {
        let citations = extract_citations("A stray ` then [@mabo].");
        assert_eq!(citations.len(), 1);
    }

    #[test]
    fn test_markers_in_fenced_blocks_are_ignored() {
        // Given: markers inside backtick and tilde fences
        let markdown = "Intro [@a].\n\n```md\nSee [@b] and [@c; @d].\n```\n\n~~~~\n[@e]\n~~~~\nEnd [@f].\n";

        // When: We extract clusters
        let clusters = extract_citation_clusters(markdown);

        // Then: only the prose markers remain
        let ids: Vec<&str> = clusters.iter().map(|c| c.items[0].id.as_str()).collect();
        assert_eq!(ids, ["a", "f"]);
    }

    #[test]
    fn test_unclosed_fence_runs_to_end() {
        let markdown = "Before [@a].\n```\n[@b]\n";
        let ids: Vec<String> = extract_citations(markdown).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn test_footnote_markers_are_not_citations() {
        assert!(extract_citations("Text[^1] and [^note].").is_empty());
    }

    // Clusters

    #[test]
    fn test_adjacent_markers_form_one_cluster() {
        // Given: markers separated by a space and a tab
        let markdown = "Held [@a] [@b]\t[@c, 7] today.";

        // When: We extract clusters
        let clusters = extract_citation_clusters(markdown);

        // Then: all three items share one cluster spanning them
        assert_eq!(clusters.len(), 1);
        let ids: Vec<&str> = clusters[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(clusters[0].items[2].pinpoint.as_deref(), Some("7"));
        let (start, end) = clusters[0].span;
        assert_eq!(&markdown[start..end], "[@a] [@b]\t[@c, 7]");
    }

    #[test]
    fn test_newline_breaks_cluster() {
        let clusters = extract_citation_clusters("End [@a]\n[@b] start.");
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn test_pandoc_group() {
        // Given: a Pandoc grouped marker with a pinpoint on the second item
        let markdown = "See [@mabo; @wik, 12] generally.";

        // When: We extract clusters
        let clusters = extract_citation_clusters(markdown);

        // Then: one cluster with both items
        assert_eq!(clusters.len(), 1);
        assert_eq!(
            clusters[0].items,
            vec![
                CitationItem {
                    id: "mabo".to_string(),
                    pinpoint: None
                },
                CitationItem {
                    id: "wik".to_string(),
                    pinpoint: Some("12".to_string())
                },
            ]
        );
        let (start, end) = clusters[0].span;
        assert_eq!(&markdown[start..end], "[@mabo; @wik, 12]");
    }

    #[test]
    fn test_pandoc_and_simple_clusters_are_ordered() {
        let clusters = extract_citation_clusters("A [@x]. B [@y; @z]. C [@w].");
        let firsts: Vec<&str> = clusters.iter().map(|c| c.items[0].id.as_str()).collect();
        assert_eq!(firsts, ["x", "y", "w"]);
    }
}
