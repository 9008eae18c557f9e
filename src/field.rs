//! Field identifiers and the placeholder table.
//!
//! Every field any citation variant can read is listed once here, together
//! with its wire name (the key used in JSON records) and the label shown in
//! place of the value while the field is unset.

use std::fmt;

macro_rules! fields {
    ($($variant:ident => $name:literal, $label:literal;)+) => {
        /// A field identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $($variant,)+
        }

        impl Field {
            /// Every field, in declaration order.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// The snake_case wire name of this field.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Field::$variant => $name,)+
                }
            }

            /// The human-readable label displayed while this field is unset.
            pub fn placeholder(self) -> &'static str {
                match self {
                    $(Field::$variant => $label,)+
                }
            }

            fn from_canonical(name: &str) -> Option<Field> {
                match name {
                    $($name => Some(Field::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

fields! {
    // Judicial materials
    CaseName => "case_name", "Case Name";
    Year => "year", "Year";
    Volume => "volume", "Volume";
    LawReportSeries => "law_report_series", "Law Report Series";
    StartingPage => "starting_page", "Starting Page";
    Pinpoint => "pinpoint", "Pinpoint";
    UniqueCourtIdentifier => "unique_court_identifier", "Court Identifier";
    JudgmentNumber => "judgment_number", "Judgment Number";
    Court => "court", "Court";
    Judge => "judge", "Judge(s)";
    FullDate => "full_date", "Full Date";
    Number => "number", "Number";
    JudicialOfficers => "judicial_officers", "Judicial Officer(s)";
    ProceedingNumber => "proceeding_number", "Proceeding Number";
    AwardDescription => "award_description", "Award Description";
    Forum => "forum", "Forum";
    CaseAwardNumber => "case_award_number", "Case/Award Number";
    PartyName => "party_name", "Party Name";

    // Common
    Title => "title", "Title";
    ShortTitle => "short_title", "Short Title";
    Jurisdiction => "jurisdiction", "Jurisdiction";
    Authors => "authors", "Authors";
    Author => "author", "Author";
    Editors => "editors", "Editors";
    Publisher => "publisher", "Publisher";
    Edition => "edition", "Edition";
    Url => "url", "URL";

    // Journals and books
    Journal => "journal", "Journal";
    Issue => "issue", "Issue";
    ChapterTitle => "chapter_title", "Chapter Title";
    BookTitle => "book_title", "Book Title";
    TranslationTitle => "translation_title", "Translation Title";
    Translator => "translator", "Translator";

    // Dictionaries, encyclopedias and looseleaf services
    EntryTitle => "entry_title", "Entry Title";
    DefinitionNumber => "definition_number", "Definition Number";
    RetrievalDate => "retrieval_date", "Retrieval Date";
    TitleNumber => "title_number", "Title Number";
    TitleName => "title_name", "Title Name";
    ChapterNumber => "chapter_number", "Chapter Number";
    ChapterName => "chapter_name", "Chapter Name";
    Paragraph => "paragraph", "Paragraph";
    ServiceNumber => "service_number", "Service Number";

    // Newspapers and periodicals
    Newspaper => "newspaper", "Newspaper";
    Place => "place", "Place";
    PeriodicalName => "periodical_name", "Periodical Name";
    DateMonthSeason => "date_month_season", "Date/Month/Season";

    // Reports and papers
    DocumentType => "document_type", "Document Type";
    SeriesNo => "series_no", "Series Number";
    DocumentNumber => "document_number", "Document Number";
    Institution => "institution", "Institution";

    // Legislative and government materials
    Chamber => "chamber", "Chamber";
    NameOfSpeaker => "name_of_speaker", "Name of Speaker";
    ExplanatoryType => "explanatory_type", "Explanatory Type";
    BillCitation => "bill_citation", "Bill Citation";
    GazetteTitle => "gazette_title", "Gazette Title";
    GazetteNumber => "gazette_number", "Gazette Number";
    TitleOfNotice => "title_of_notice", "Title of Notice";
    IssuingBody => "issuing_body", "Issuing Body";
    InstrumentalityOfficer => "instrumentality_officer", "Instrumentality Officer";
    InstrumentTitle => "instrument_title", "Instrument Title";
    PracticeDirection => "practice_direction", "Practice Direction";
    NumberIdentifier => "number_identifier", "Number/Identifier";
    CitationReportSeries => "citation_report_series", "Citation Report Series";
    Committee => "committee", "Committee";
    Legislature => "legislature", "Legislature";
    Location => "location", "Location";
    Speaker => "speaker", "Speaker";

    // Treaties
    Parties => "parties", "Parties";
    DateOpened => "date_opened", "Date Opened";
    TreatySeries => "treaty_series", "Treaty Series";
    DateInForce => "date_in_force", "Date in Force";

    // Media
    EpisodeTitle => "episode_title", "Episode Title";
    FilmSeriesTitle => "film_series_title", "Film/Series Title";
    VersionDetails => "version_details", "Version Details";
    StudioProducer => "studio_producer", "Studio/Producer";
    Username => "username", "Username";
    Platform => "platform", "Platform";
    Time => "time", "Time";
    Format => "format", "Format";
    Interviewee => "interviewee", "Interviewee";
    Interviewer => "interviewer", "Interviewer";
    InterviewForum => "interview_forum", "Interview Forum";

    // Other sources
    ReleaseType => "release_type", "Release Type";
    Body => "body", "Body";
    SpeechOrLecture => "speech_or_lecture", "Speech/Lecture";
    InstitutionForum => "institution_forum", "Institution/Forum";
    NameOfInquiry => "name_of_inquiry", "Name of Inquiry";
    CompanyName => "company_name", "Company Name";
    DocumentTitle => "document_title", "Document Title";
    WebPageTitle => "web_page_title", "Web Page Title";
    CorrespondenceType => "correspondence_type", "Correspondence Type";
    Recipient => "recipient", "Recipient";

    // Intellectual property
    JurisdictionCode => "jurisdiction_code", "Jurisdiction Code";
    IpType => "ip_type", "IP Type";
    AdditionalInfo => "additional_info", "Additional Info";
    IdentificationNumber => "identification_number", "Identification Number";
    FilingDate => "filing_date", "Filing Date";
    RegistrationStatus => "registration_status", "Registration Status";
    RegistrationDate => "registration_date", "Registration Date";
}

/// Legacy wire names still produced by older records and the extraction service.
const ALIASES: &[(&str, Field)] = &[
    ("parties_names", Field::Parties),
    ("signature_date", Field::DateOpened),
    ("entry_force_date", Field::DateInForce),
    ("date_of_retrieval", Field::RetrievalDate),
    ("place_of_publication", Field::Place),
    ("name_of_title", Field::TitleName),
    ("name_of_chapter", Field::ChapterName),
    ("treaty_title", Field::Title),
];

impl Field {
    /// Parses a wire name, accepting legacy aliases.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::from_canonical(name).or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == name)
                .map(|(_, field)| *field)
        })
    }

    /// Returns true if `name` is a legacy alias rather than a canonical name.
    pub fn is_alias(name: &str) -> bool {
        ALIASES.iter().any(|(alias, _)| *alias == name)
    }

    /// Fields holding ordered person-name lists.
    pub fn is_name_list(self) -> bool {
        matches!(self, Field::Authors | Field::Editors)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the placeholder label for a field identifier.
///
/// Unknown identifiers fall back to the identifier itself.
pub fn placeholder_for(name: &str) -> &str {
    match Field::from_name(name) {
        Some(field) => field.placeholder(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_placeholder_for_known_field() {
        assert_eq!(placeholder_for("case_name"), "Case Name");
        assert_eq!(placeholder_for("judge"), "Judge(s)");
        assert_eq!(placeholder_for("url"), "URL");
        assert_eq!(placeholder_for("case_award_number"), "Case/Award Number");
    }

    #[test]
    fn test_placeholder_for_unknown_field_returns_identifier() {
        // Given: an identifier that names no field
        let name = "not_a_real_field";

        // When: we look up its placeholder
        let label = placeholder_for(name);

        // Then: the identifier itself comes back
        assert_eq!(label, "not_a_real_field");
    }

    #[test]
    fn test_placeholder_for_alias_uses_canonical_label() {
        assert_eq!(placeholder_for("date_of_retrieval"), "Retrieval Date");
        assert_eq!(placeholder_for("parties_names"), "Parties");
    }

    #[test]
    fn test_wire_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(
                Field::from_name(field.as_str()),
                Some(*field),
                "wire name '{}' does not parse back",
                field
            );
        }
    }

    #[test]
    fn test_wire_names_are_unique() {
        let names: HashSet<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names.len(), Field::ALL.len());
    }

    #[test]
    fn test_aliases_do_not_shadow_canonical_names() {
        for (alias, _) in ALIASES {
            assert!(
                Field::from_canonical(alias).is_none(),
                "alias '{}' collides with a canonical name",
                alias
            );
            assert!(Field::is_alias(alias));
        }
    }

    #[test]
    fn test_only_authors_and_editors_are_name_lists() {
        let lists: Vec<Field> = Field::ALL
            .iter()
            .copied()
            .filter(|f| f.is_name_list())
            .collect();
        assert_eq!(lists, vec![Field::Authors, Field::Editors]);
    }
}
