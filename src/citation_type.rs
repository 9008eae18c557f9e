//! The closed set of citation types.
//!
//! Each type has a wire tag (as stored on records), a display name and a
//! family. The catalogue below is the single source of truth for all three.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The five families citation types are grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Judicial,
    Legislative,
    International,
    Secondary,
    Miscellaneous,
}

impl Family {
    pub fn label(self) -> &'static str {
        match self {
            Family::Judicial => "Judicial materials",
            Family::Legislative => "Legislative materials",
            Family::International => "International materials",
            Family::Secondary => "Secondary sources",
            Family::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

macro_rules! citation_types {
    ($($variant:ident => $tag:literal, $label:literal, $family:ident;)+) => {
        /// A citation source kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CitationType {
            $($variant,)+
        }

        impl CitationType {
            /// Every citation type, grouped by family.
            pub const ALL: &'static [CitationType] = &[$(CitationType::$variant,)+];

            /// The wire tag of this type.
            pub fn as_tag(self) -> &'static str {
                match self {
                    $(CitationType::$variant => $tag,)+
                }
            }

            /// The human-readable name of this type.
            pub fn label(self) -> &'static str {
                match self {
                    $(CitationType::$variant => $label,)+
                }
            }

            pub fn family(self) -> Family {
                match self {
                    $(CitationType::$variant => Family::$family,)+
                }
            }

            fn from_canonical(tag: &str) -> Option<CitationType> {
                match tag {
                    $($tag => Some(CitationType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

citation_types! {
    CaseReported => "case_reported", "Reported Case", Judicial;
    CaseUnreportedMediumNeutral => "case_unreported_medium_neutral", "Unreported Case (Medium Neutral)", Judicial;
    CaseUnreportedNoMediumNeutral => "case_unreported_no_medium_neutral", "Unreported Case (No Medium Neutral)", Judicial;
    Proceeding => "proceeding", "Proceeding", Judicial;
    CourtOrder => "court_order", "Court Order", Judicial;
    Arbitration => "arbitration", "Arbitration", Judicial;
    TranscriptOfProceedings => "transcript_of_proceedings", "Transcript of Proceedings", Judicial;
    HighCourtTranscript => "high_court_transcript", "High Court Transcript", Judicial;
    Submission => "submission", "Submission", Judicial;

    Act => "act", "Legislation", Legislative;
    DelegatedLegislation => "delegated_legislation", "Delegated Legislation", Legislative;
    DelegatedNonGovernmentLegislation => "delegated_non_government_legislation", "Delegated Non-Government Entity Legislation", Legislative;
    Bill => "bill", "Bill", Legislative;
    ExplanatoryMemorandum => "explanatory_memorandum", "Explanatory Memorandum", Legislative;
    Hansard => "hansard", "Hansard", Legislative;
    Gazette => "gazette", "Gazette", Legislative;
    OrderOrRuling => "order_or_ruling", "Order or Ruling", Legislative;
    CourtPracticeDirection => "court_practice_direction", "Court Practice Direction or Note", Legislative;
    ConstitutionalConventionDebates => "constitutional_convention_debates", "Australian Constitutional Convention Debates", Legislative;
    EvidenceToParliamentaryCommittee => "evidence_to_parliamentary_committee", "Evidence to Parliamentary Committee", Legislative;

    Treaty => "treaty", "Treaty", International;

    JournalArticle => "journal_article", "Journal Article", Secondary;
    Symposium => "symposium", "Symposium", Secondary;
    Book => "book", "Book", Secondary;
    BookChapter => "book_chapter", "Book Chapter", Secondary;
    BookWithEditor => "book_with_editor", "Book with Editor", Secondary;
    TranslatedBook => "translated_book", "Translated Book", Secondary;
    Audiobook => "audiobook", "Audiobook", Secondary;
    Report => "report", "Report", Secondary;
    ResearchPaper => "research_paper", "Research Paper", Secondary;
    Speech => "speech", "Speech", Secondary;
    PressAndMediaRelease => "press_and_media_release", "Press and Media Release", Secondary;

    OnlineDictionary => "online_dictionary", "Online Dictionary", Miscellaneous;
    HardCopyDictionary => "hard_copy_dictionary", "Hard Copy Dictionary", Miscellaneous;
    OnlineLegalEncyclopedia => "online_legal_encyclopedia", "Online Legal Encyclopedia", Miscellaneous;
    HardCopyLegalEncyclopedia => "hard_copy_legal_encyclopedia", "Hard Copy Legal Encyclopedia", Miscellaneous;
    OnlineLooseleaf => "online_looseleaf", "Online Looseleaf Service", Miscellaneous;
    HardCopyLooseleaf => "hard_copy_looseleaf", "Hard Copy Looseleaf Service", Miscellaneous;
    OnlineNewspaper => "online_newspaper", "Online Newspaper", Miscellaneous;
    PrintedNewspaper => "printed_newspaper", "Printed Newspaper", Miscellaneous;
    Periodical => "periodical", "Periodical, Newsletter or Magazine", Miscellaneous;
    Interview => "interview", "Interview", Miscellaneous;
    FilmTelevisionMedia => "film_television_media", "Film, Television or Other Media", Miscellaneous;
    SocialMediaPost => "social_media_post", "Social Media Post", Miscellaneous;
    InternetMaterial => "internet_material", "Internet Material", Miscellaneous;
    WrittenSubmission => "written_submission", "Written Submission", Miscellaneous;
    IntellectualProperty => "intellectual_property", "Intellectual Property Material", Miscellaneous;
    ConstitutiveDocument => "constitutive_document", "Constitutive Documents of a Corporation", Miscellaneous;
    WrittenCorrespondence => "written_correspondence", "Written Correspondence", Miscellaneous;
    Custom => "custom", "Custom", Miscellaneous;
}

/// Tags produced by older records and the type selector.
const TAG_ALIASES: &[(&str, CitationType)] = &[
    ("legislation", CitationType::Act),
    ("hardcopy_dictionary", CitationType::HardCopyDictionary),
    ("hardcopy_legal_encyclopedia", CitationType::HardCopyLegalEncyclopedia),
    ("hardcopy_looseleaf", CitationType::HardCopyLooseleaf),
    ("press_release", CitationType::PressAndMediaRelease),
    ("intellectual_property_material", CitationType::IntellectualProperty),
    ("internet_materials_author", CitationType::InternetMaterial),
];

impl CitationType {
    /// Parses a wire tag, accepting legacy aliases. Surrounding whitespace is
    /// ignored; matching is otherwise exact.
    pub fn from_tag(tag: &str) -> Option<CitationType> {
        let tag = tag.trim();
        CitationType::from_canonical(tag).or_else(|| {
            TAG_ALIASES
                .iter()
                .find(|(alias, _)| *alias == tag)
                .map(|(_, kind)| *kind)
        })
    }

    /// Types belonging to one family, in catalogue order.
    pub fn in_family(family: Family) -> impl Iterator<Item = CitationType> {
        CitationType::ALL
            .iter()
            .copied()
            .filter(move |kind| kind.family() == family)
    }
}

impl fmt::Display for CitationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for CitationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for CitationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        CitationType::from_tag(&tag)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown citation type '{}'", tag)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_has_fifty_types() {
        assert_eq!(CitationType::ALL.len(), 50);
    }

    #[test]
    fn test_family_sizes() {
        let count = |family| CitationType::in_family(family).count();
        assert_eq!(count(Family::Judicial), 9);
        assert_eq!(count(Family::Legislative), 11);
        assert_eq!(count(Family::International), 1);
        assert_eq!(count(Family::Secondary), 11);
        assert_eq!(count(Family::Miscellaneous), 18);
    }

    #[test]
    fn test_tags_round_trip_and_are_unique() {
        let tags: HashSet<&str> = CitationType::ALL.iter().map(|k| k.as_tag()).collect();
        assert_eq!(tags.len(), CitationType::ALL.len());
        for kind in CitationType::ALL {
            assert_eq!(CitationType::from_tag(kind.as_tag()), Some(*kind));
        }
    }

    #[test]
    fn test_aliases_resolve() {
        // Given: tags written by the type selector and older records
        let cases = [
            ("legislation", CitationType::Act),
            ("hardcopy_dictionary", CitationType::HardCopyDictionary),
            ("press_release", CitationType::PressAndMediaRelease),
            ("internet_materials_author", CitationType::InternetMaterial),
        ];

        // Then: each maps onto its canonical type
        for (tag, expected) in cases {
            assert_eq!(CitationType::from_tag(tag), Some(expected), "tag '{}'", tag);
        }
    }

    #[test]
    fn test_unknown_tag_is_none() {
        assert_eq!(CitationType::from_tag("nonexistent_tag"), None);
        assert_eq!(CitationType::from_tag(""), None);
        assert_eq!(CitationType::from_tag("Case_Reported"), None);
    }

    #[test]
    fn test_tag_whitespace_is_ignored() {
        assert_eq!(CitationType::from_tag(" book\n"), Some(CitationType::Book));
    }

    #[test]
    fn test_serde_uses_wire_tag() {
        let json = serde_json::to_string(&CitationType::BookChapter).unwrap();
        assert_eq!(json, "\"book_chapter\"");
        let parsed: CitationType = serde_json::from_str("\"legislation\"").unwrap();
        assert_eq!(parsed, CitationType::Act);
        assert!(serde_json::from_str::<CitationType>("\"nope\"").is_err());
    }
}
