//! Cases, proceedings and other judicial materials.

use super::{prefixed, Parts};
use crate::field::Field;
use crate::markup::{brackets, italic, quoted};

fn case_name(p: &Parts) -> Option<String> {
    p.slot(Field::CaseName).map(|name| italic(&name))
}

pub(super) fn case_reported(p: &mut Parts) {
    p.push(case_name(p));
    p.push(p.slot(Field::Year));
    p.push(p.slot(Field::Volume));
    p.push(p.slot(Field::LawReportSeries));
    p.push(p.slot(Field::StartingPage));
    p.comma();
    p.pinpoint();
    p.short_title(true);
}

pub(super) fn case_medium_neutral(p: &mut Parts) {
    p.push(case_name(p));
    p.push(p.slot(Field::Year).map(|year| brackets(&year)));
    p.push(p.slot(Field::UniqueCourtIdentifier));
    p.push(p.slot(Field::JudgmentNumber));
    p.comma();
    p.push(p.optional(Field::Pinpoint).map(|pin| brackets(&pin)));
    p.short_title(true);
}

pub(super) fn case_no_medium_neutral(p: &mut Parts) {
    p.push(case_name(p));
    p.group([
        p.slot(Field::Court),
        p.slot(Field::Judge),
        p.date(Field::FullDate),
    ]);
    p.pinpoint();
    p.short_title(true);
}

pub(super) fn proceeding(p: &mut Parts) {
    p.push(case_name(p));
    p.group([
        p.slot(Field::Court),
        p.slot(Field::ProceedingNumber),
        prefixed("commenced", p.date(Field::FullDate)),
    ]);
}

pub(super) fn court_order(p: &mut Parts) {
    p.push(prefixed("Order of", p.slot(Field::JudicialOfficers)));
    p.push(prefixed("in", case_name(p)));
    p.group([
        p.slot(Field::Court),
        p.slot(Field::ProceedingNumber),
        p.date(Field::FullDate),
    ]);
}

pub(super) fn arbitration(p: &mut Parts) {
    p.push(case_name(p));
    p.group([
        p.slot(Field::AwardDescription),
        p.slot(Field::Forum),
        p.slot(Field::CaseAwardNumber),
        p.date(Field::FullDate),
    ]);
    p.pinpoint();
}

pub(super) fn transcript_of_proceedings(p: &mut Parts) {
    p.text("Transcript of Proceedings");
    p.comma();
    p.push(case_name(p));
    p.group([
        p.slot(Field::Court),
        p.slot(Field::ProceedingNumber),
        p.slot(Field::JudicialOfficers),
        p.date(Field::FullDate),
    ]);
    p.pinpoint();
}

pub(super) fn high_court_transcript(p: &mut Parts) {
    p.text("Transcript of Proceedings");
    p.comma();
    p.push(case_name(p));
    p.push(p.slot(Field::Year).map(|year| brackets(&year)));
    p.text("HCATrans");
    p.push(p.slot(Field::Number));
    p.comma();
    p.pinpoint();
}

pub(super) fn submission(p: &mut Parts) {
    p.push(p.slot(Field::PartyName));
    p.comma();
    p.push(p.slot(Field::Title).map(|title| quoted(&title)));
    p.comma();
    p.push(prefixed("Submission in", case_name(p)));
    p.comma();
    p.push(p.slot(Field::ProceedingNumber));
    p.comma();
    p.push(p.date(Field::FullDate));
    p.comma();
    p.pinpoint();
}

#[cfg(test)]
mod tests {
    use crate::assemble::{assemble, RenderMode};
    use crate::citation_type::CitationType;
    use crate::field::Field;
    use crate::record::CitationRecord;

    fn render(kind: CitationType, record: &CitationRecord) -> String {
        assemble(kind, record, RenderMode::Final)
    }

    #[test]
    fn test_reported_case_preview_shows_placeholders() {
        // Given: only the case name is filled
        let record = CitationRecord::new().with(Field::CaseName, "Mabo v Queensland");

        // When: we render a preview
        let preview = assemble(CitationType::CaseReported, &record, RenderMode::Preview);

        // Then: the remaining slots show their labels and no pinpoint comma appears
        assert_eq!(
            preview,
            "<i>Mabo v Queensland</i> Year Volume Law Report Series Starting Page"
        );
    }

    #[test]
    fn test_reported_case_comma_moves_to_last_present_segment() {
        // Given: a pinpoint but no starting page
        let record = CitationRecord::new()
            .with(Field::CaseName, "Mabo v Queensland")
            .with(Field::Year, "1992")
            .with(Field::Volume, "175")
            .with(Field::LawReportSeries, "CLR")
            .with(Field::Pinpoint, "42");

        // Then: the comma follows the series instead
        assert_eq!(
            render(CitationType::CaseReported, &record),
            "<i>Mabo v Queensland</i> 1992 175 CLR, 42"
        );
    }

    #[test]
    fn test_reported_case_short_title() {
        let record = CitationRecord::new()
            .with(Field::CaseName, "Mabo v Queensland [No 2]")
            .with(Field::Year, "1992")
            .with(Field::Volume, "175")
            .with(Field::LawReportSeries, "CLR")
            .with(Field::StartingPage, "1")
            .with(Field::ShortTitle, "Mabo");
        assert_eq!(
            render(CitationType::CaseReported, &record),
            "<i>Mabo v Queensland [No 2]</i> 1992 175 CLR 1 ('<i>Mabo</i>')"
        );
    }

    #[test]
    fn test_medium_neutral_citation() {
        let record = CitationRecord::new()
            .with(Field::CaseName, "Quarmby v Keating")
            .with(Field::Year, "2009")
            .with(Field::UniqueCourtIdentifier, "TASSC")
            .with(Field::JudgmentNumber, "80")
            .with(Field::Pinpoint, "11");
        assert_eq!(
            render(CitationType::CaseUnreportedMediumNeutral, &record),
            "<i>Quarmby v Keating</i> [2009] TASSC 80, [11]"
        );
    }

    #[test]
    fn test_medium_neutral_does_not_double_bracket() {
        let record = CitationRecord::new()
            .with(Field::CaseName, "Quarmby v Keating")
            .with(Field::Year, "[2009]")
            .with(Field::UniqueCourtIdentifier, "TASSC")
            .with(Field::JudgmentNumber, "80");
        assert_eq!(
            render(CitationType::CaseUnreportedMediumNeutral, &record),
            "<i>Quarmby v Keating</i> [2009] TASSC 80"
        );
    }

    #[test]
    fn test_unreported_without_medium_neutral() {
        let record = CitationRecord::new()
            .with(Field::CaseName, "R v Smith")
            .with(Field::Court, "Supreme Court of Victoria")
            .with(Field::Judge, "Kaye J")
            .with(Field::FullDate, "2006-03-28");
        assert_eq!(
            render(CitationType::CaseUnreportedNoMediumNeutral, &record),
            "<i>R v Smith</i> (Supreme Court of Victoria, Kaye J, 28 March 2006)"
        );
    }

    #[test]
    fn test_proceeding() {
        let record = CitationRecord::new()
            .with(Field::CaseName, "Cavanagh v Neville")
            .with(Field::Court, "High Court of Australia")
            .with(Field::ProceedingNumber, "B12/2014")
            .with(Field::FullDate, "2014-02-14");
        assert_eq!(
            render(CitationType::Proceeding, &record),
            "<i>Cavanagh v Neville</i> (High Court of Australia, B12/2014, commenced 14 February 2014)"
        );
    }

    #[test]
    fn test_court_order() {
        let record = CitationRecord::new()
            .with(Field::JudicialOfficers, "Gummow J")
            .with(Field::CaseName, "Re Wakim")
            .with(Field::Court, "High Court of Australia")
            .with(Field::ProceedingNumber, "M 5/1998")
            .with(Field::FullDate, "1998-06-17");
        assert_eq!(
            render(CitationType::CourtOrder, &record),
            "Order of Gummow J in <i>Re Wakim</i> (High Court of Australia, M 5/1998, 17 June 1998)"
        );
    }

    #[test]
    fn test_arbitration_group_skips_missing() {
        let record = CitationRecord::new()
            .with(Field::CaseName, "Methanex v United States")
            .with(Field::AwardDescription, "Final Award")
            .with(Field::FullDate, "2005-08-03")
            .with(Field::Pinpoint, "pt IV ch C [6]");
        assert_eq!(
            render(CitationType::Arbitration, &record),
            "<i>Methanex v United States</i> (Final Award, 3 August 2005) pt IV ch C [6]"
        );
    }

    #[test]
    fn test_transcript_of_proceedings() {
        let record = CitationRecord::new()
            .with(Field::CaseName, "R v Bayley")
            .with(Field::Court, "Supreme Court of Victoria")
            .with(Field::ProceedingNumber, "1554/2012")
            .with(Field::JudicialOfficers, "Nettle JA")
            .with(Field::FullDate, "2013-06-19");
        assert_eq!(
            render(CitationType::TranscriptOfProceedings, &record),
            "Transcript of Proceedings, <i>R v Bayley</i> (Supreme Court of Victoria, 1554/2012, Nettle JA, 19 June 2013)"
        );
    }

    #[test]
    fn test_high_court_transcript() {
        let record = CitationRecord::new()
            .with(Field::CaseName, "Roach v Electoral Commissioner")
            .with_number(Field::Year, 2007)
            .with(Field::Number, "107")
            .with(Field::Pinpoint, "1");
        assert_eq!(
            render(CitationType::HighCourtTranscript, &record),
            "Transcript of Proceedings, <i>Roach v Electoral Commissioner</i> [2007] HCATrans 107, 1"
        );
    }

    #[test]
    fn test_submission_commas_follow_present_fields() {
        // Given: a submission missing its proceeding number
        let record = CitationRecord::new()
            .with(Field::PartyName, "Commonwealth")
            .with(Field::Title, "Outline of Submissions")
            .with(Field::CaseName, "Roach v Electoral Commissioner")
            .with(Field::FullDate, "2007-05-21");

        // Then: commas separate only what is present
        assert_eq!(
            render(CitationType::Submission, &record),
            "Commonwealth, 'Outline of Submissions', Submission in <i>Roach v Electoral Commissioner</i>, 21 May 2007"
        );
    }
}
