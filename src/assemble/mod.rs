//! Citation assembly.
//!
//! One assembler per citation type composes the resolved fields into an
//! AGLC4 citation. Assembly is total: every record, however incomplete,
//! produces a string.
//!
//! Assemblers read each field either as a *slot* or as *optional*. In
//! [`RenderMode::Preview`] an unset slot shows its placeholder label; in
//! [`RenderMode::Final`] it is left out. Optional fields only ever render
//! when filled.

mod international;
mod judicial;
mod legislative;
mod misc;
mod secondary;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::citation_type::CitationType;
use crate::dates::normalize_date;
use crate::field::Field;
use crate::markup::{italic, parens};
use crate::names::format_editors;
use crate::record::CitationRecord;
use crate::resolve::{resolve, Segment};

/// Returned for unknown citation types and for `custom` citations.
pub const NO_PREVIEW: &str = "No preview available";

/// How unset fields are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Editing guidance: unset slots show their placeholder label.
    Preview,
    /// The stored citation: unset fields are omitted.
    Final,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Preview => f.write_str("preview"),
            RenderMode::Final => f.write_str("final"),
        }
    }
}

/// Formats a record as the given citation type.
pub fn assemble(kind: CitationType, record: &CitationRecord, mode: RenderMode) -> String {
    trace!(kind = %kind, mode = %mode, "assembling citation");
    let mut parts = Parts::new(record, mode);

    use CitationType::*;
    match kind {
        CaseReported => judicial::case_reported(&mut parts),
        CaseUnreportedMediumNeutral => judicial::case_medium_neutral(&mut parts),
        CaseUnreportedNoMediumNeutral => judicial::case_no_medium_neutral(&mut parts),
        Proceeding => judicial::proceeding(&mut parts),
        CourtOrder => judicial::court_order(&mut parts),
        Arbitration => judicial::arbitration(&mut parts),
        TranscriptOfProceedings => judicial::transcript_of_proceedings(&mut parts),
        HighCourtTranscript => judicial::high_court_transcript(&mut parts),
        Submission => judicial::submission(&mut parts),

        Act | DelegatedLegislation => legislative::act(&mut parts),
        Bill => legislative::bill(&mut parts),
        ExplanatoryMemorandum => legislative::explanatory_memorandum(&mut parts),
        Hansard => legislative::hansard(&mut parts),
        DelegatedNonGovernmentLegislation => legislative::non_government_legislation(&mut parts),
        Gazette => legislative::gazette(&mut parts),
        OrderOrRuling => legislative::order_or_ruling(&mut parts),
        CourtPracticeDirection => legislative::court_practice_direction(&mut parts),
        ConstitutionalConventionDebates => legislative::convention_debates(&mut parts),
        EvidenceToParliamentaryCommittee => legislative::committee_evidence(&mut parts),

        Treaty => international::treaty(&mut parts),

        JournalArticle => secondary::journal_article(&mut parts),
        Symposium => secondary::symposium(&mut parts),
        Book => secondary::book(&mut parts),
        BookChapter => secondary::book_chapter(&mut parts),
        BookWithEditor => secondary::book_with_editor(&mut parts),
        TranslatedBook => secondary::translated_book(&mut parts),
        Audiobook => secondary::audiobook(&mut parts),
        Report => secondary::report(&mut parts),
        ResearchPaper => secondary::research_paper(&mut parts),
        Speech => secondary::speech(&mut parts),
        PressAndMediaRelease => secondary::press_release(&mut parts),

        OnlineDictionary => misc::online_dictionary(&mut parts),
        HardCopyDictionary => misc::hard_copy_dictionary(&mut parts),
        OnlineLegalEncyclopedia => misc::online_encyclopedia(&mut parts),
        HardCopyLegalEncyclopedia => misc::hard_copy_encyclopedia(&mut parts),
        OnlineLooseleaf => misc::online_looseleaf(&mut parts),
        HardCopyLooseleaf => misc::hard_copy_looseleaf(&mut parts),
        OnlineNewspaper => misc::online_newspaper(&mut parts),
        PrintedNewspaper => misc::printed_newspaper(&mut parts),
        Periodical => misc::periodical(&mut parts),
        Interview => misc::interview(&mut parts),
        FilmTelevisionMedia => misc::film_television_media(&mut parts),
        SocialMediaPost => misc::social_media_post(&mut parts),
        InternetMaterial => misc::internet_material(&mut parts),
        WrittenSubmission => misc::written_submission(&mut parts),
        IntellectualProperty => misc::intellectual_property(&mut parts),
        ConstitutiveDocument => misc::constitutive_document(&mut parts),
        WrittenCorrespondence => misc::written_correspondence(&mut parts),

        Custom => {
            debug!("custom citations have no assembler");
            return NO_PREVIEW.to_string();
        }
    }

    parts.finish()
}

/// Formats a record given its wire tag.
///
/// Unknown tags produce [`NO_PREVIEW`].
///
/// # Examples
///
/// ```
/// use aglc_cite::{format_citation, CitationRecord, Field, RenderMode, NO_PREVIEW};
///
/// let record = CitationRecord::new()
///     .with(Field::CaseName, "Mabo v Queensland")
///     .with(Field::Year, "1992")
///     .with(Field::Volume, "175")
///     .with(Field::LawReportSeries, "CLR")
///     .with(Field::StartingPage, "1");
///
/// assert_eq!(
///     format_citation("case_reported", &record, RenderMode::Final),
///     "<i>Mabo v Queensland</i> 1992 175 CLR 1"
/// );
/// assert_eq!(format_citation("nonexistent_tag", &record, RenderMode::Final), NO_PREVIEW);
/// ```
pub fn format_citation(tag: &str, record: &CitationRecord, mode: RenderMode) -> String {
    match CitationType::from_tag(tag) {
        Some(kind) => assemble(kind, record, mode),
        None => {
            debug!(tag = %tag, "unknown citation type");
            NO_PREVIEW.to_string()
        }
    }
}

/// Ordered citation pieces under construction.
///
/// A separating comma requested with [`Parts::comma`] is attached to the
/// last piece only once a later piece is pushed with [`Parts::push`].
/// Parenthetical attachments ([`Parts::attach`]) cancel it, and it is dropped
/// if nothing follows.
pub(crate) struct Parts<'a> {
    record: &'a CitationRecord,
    mode: RenderMode,
    pieces: Vec<String>,
    pending_comma: bool,
}

impl<'a> Parts<'a> {
    fn new(record: &'a CitationRecord, mode: RenderMode) -> Self {
        Self {
            record,
            mode,
            pieces: Vec::new(),
            pending_comma: false,
        }
    }

    pub(crate) fn mode(&self) -> RenderMode {
        self.mode
    }

    /// A field that is always part of the citation.
    pub(crate) fn slot(&self, field: Field) -> Option<String> {
        match resolve(self.record, field) {
            Segment::Value(text) => Some(text),
            Segment::Placeholder(label) => match self.mode {
                RenderMode::Preview => Some(label.to_string()),
                RenderMode::Final => None,
            },
        }
    }

    /// A date slot, normalised to AGLC form when filled.
    pub(crate) fn date(&self, field: Field) -> Option<String> {
        match resolve(self.record, field) {
            Segment::Value(text) => Some(normalize_date(&text)),
            Segment::Placeholder(_) => self.slot(field),
        }
    }

    /// A field that only appears when filled.
    pub(crate) fn optional(&self, field: Field) -> Option<String> {
        resolve(self.record, field).value().map(str::to_string)
    }

    /// Editors joined with their "(ed)"/"(eds)" suffix, or without it.
    pub(crate) fn editors(&self, with_suffix: bool) -> Option<String> {
        let names = self.record.names(Field::Editors);
        if names.is_empty() {
            return self.slot(Field::Editors);
        }
        Some(if with_suffix {
            format_editors(names)
        } else {
            crate::names::format_editors_without_suffix(names)
        })
    }

    /// Appends a piece, settling any pending comma first.
    pub(crate) fn push(&mut self, piece: Option<String>) {
        let Some(piece) = piece else { return };
        if self.pending_comma {
            if let Some(last) = self.pieces.last_mut() {
                last.push(',');
            }
        }
        self.pending_comma = false;
        self.pieces.push(piece);
    }

    /// Appends a fixed piece of text.
    pub(crate) fn text(&mut self, text: &str) {
        self.push(Some(text.to_string()));
    }

    /// Appends a parenthetical or other attachment that never follows a comma.
    pub(crate) fn attach(&mut self, piece: Option<String>) {
        if piece.is_some() {
            self.pending_comma = false;
        }
        self.push(piece);
    }

    /// Requests a comma after the last piece if anything else follows.
    pub(crate) fn comma(&mut self) {
        if !self.pieces.is_empty() {
            self.pending_comma = true;
        }
    }

    /// Appends a parenthetical group of the displayed items, if any.
    pub(crate) fn group<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Option<String>>,
    {
        self.attach(join_present(items, ", ").map(|inner| format!("({})", inner)));
    }

    /// Appends a short title such as `('<i>Mabo</i>')`.
    pub(crate) fn short_title(&mut self, italicised: bool) {
        let title = self.optional(Field::ShortTitle).map(|title| {
            let title = if italicised { italic(&title) } else { title };
            format!("('{}')", title)
        });
        self.attach(title);
    }

    /// Appends the pinpoint if filled.
    pub(crate) fn pinpoint(&mut self) {
        let pinpoint = self.optional(Field::Pinpoint);
        self.push(pinpoint);
    }

    /// Appends a parenthesised optional field such as a speaker.
    pub(crate) fn optional_parens(&mut self, field: Field) {
        let value = self.optional(field).map(|v| parens(&v));
        self.attach(value);
    }

    fn finish(self) -> String {
        self.pieces.join(" ")
    }
}

/// Joins the present items with `separator`, or `None` if none are present.
pub(crate) fn join_present<I>(items: I, separator: &str) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let present: Vec<String> = items.into_iter().flatten().collect();
    (!present.is_empty()).then(|| present.join(separator))
}

/// Prefixes displayed text with fixed wording, e.g. "in Canberra".
pub(crate) fn prefixed(prefix: &str, value: Option<String>) -> Option<String> {
    value.map(|value| format!("{} {}", prefix, value))
}
