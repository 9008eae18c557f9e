//! Legislation, parliamentary and government materials.

use super::{join_present, prefixed, Parts, RenderMode};
use crate::field::Field;
use crate::markup::{italic, parens, quoted};

/// Acts and delegated legislation: `<i>Title</i> <i>Year</i> (Jurisdiction)`.
pub(super) fn act(p: &mut Parts) {
    p.push(p.slot(Field::Title).map(|title| italic(&title)));
    p.push(p.slot(Field::Year).map(|year| italic(&year)));
    p.attach(p.slot(Field::Jurisdiction).map(|j| parens(&j)));
    p.pinpoint();
    p.short_title(true);
}

pub(super) fn bill(p: &mut Parts) {
    p.push(p.slot(Field::Title));
    p.push(p.slot(Field::Year));
    p.attach(p.slot(Field::Jurisdiction).map(|j| parens(&j)));
    p.pinpoint();
    p.short_title(false);
}

pub(super) fn explanatory_memorandum(p: &mut Parts) {
    let kind = match p.mode() {
        RenderMode::Preview => p.slot(Field::ExplanatoryType),
        RenderMode::Final => p
            .optional(Field::ExplanatoryType)
            .or_else(|| Some("Explanatory Memorandum".to_string())),
    };
    p.push(kind);
    p.comma();
    p.push(p.slot(Field::BillCitation));
    p.pinpoint();
}

pub(super) fn hansard(p: &mut Parts) {
    p.push(p.slot(Field::Jurisdiction));
    p.comma();
    p.text(&italic("Parliamentary Debates"));
    p.comma();
    p.push(p.slot(Field::Chamber));
    p.comma();
    p.push(p.date(Field::FullDate));
    p.comma();
    p.pinpoint();
    p.optional_parens(Field::NameOfSpeaker);
}

pub(super) fn non_government_legislation(p: &mut Parts) {
    p.push(p.slot(Field::IssuingBody));
    p.comma();
    p.push(p.slot(Field::Title).map(|title| italic(&title)));
    p.attach(prefixed("at", p.date(Field::FullDate)).map(|at| parens(&at)));
    p.pinpoint();
}

pub(super) fn gazette(p: &mut Parts) {
    p.push(p.slot(Field::Authors));
    p.comma();
    p.push(p.optional(Field::TitleOfNotice).map(|title| quoted(&title)));
    p.push(prefixed("in", p.slot(Field::Jurisdiction)));
    p.comma();
    p.push(p.slot(Field::GazetteTitle).map(|title| italic(&title)));
    p.comma();
    p.push(prefixed("No", p.slot(Field::GazetteNumber)));
    p.comma();
    p.push(p.date(Field::FullDate));
    p.comma();
    p.push(p.slot(Field::StartingPage));
    p.comma();
    p.pinpoint();
}

pub(super) fn order_or_ruling(p: &mut Parts) {
    p.push(p.slot(Field::InstrumentalityOfficer));
    p.comma();
    p.push(p.slot(Field::InstrumentTitle).map(|title| italic(&title)));
    p.group([p.slot(Field::DocumentNumber), p.date(Field::FullDate)]);
    p.pinpoint();
}

pub(super) fn court_practice_direction(p: &mut Parts) {
    p.push(p.slot(Field::Court));
    p.comma();
    let heading = join_present(
        [
            p.slot(Field::PracticeDirection),
            p.optional(Field::NumberIdentifier).map(|n| format!("{}:", n)),
            p.slot(Field::Title),
        ],
        " ",
    );
    p.push(heading.map(|heading| italic(&heading)));
    match p.optional(Field::CitationReportSeries) {
        Some(series) => p.push(Some(series)),
        None => {
            p.comma();
            p.push(p.date(Field::FullDate));
        }
    }
    p.comma();
    p.pinpoint();
}

pub(super) fn convention_debates(p: &mut Parts) {
    p.push(p.slot(Field::Title).map(|title| italic(&title)));
    p.comma();
    p.push(p.slot(Field::Location));
    p.comma();
    p.push(p.date(Field::FullDate));
    p.comma();
    p.pinpoint();
    p.optional_parens(Field::Speaker);
}

pub(super) fn committee_evidence(p: &mut Parts) {
    p.push(prefixed("Evidence to", p.slot(Field::Committee)));
    p.comma();
    p.push(p.slot(Field::Legislature));
    p.comma();
    p.push(p.slot(Field::Location));
    p.comma();
    p.push(p.date(Field::FullDate));
    p.comma();
    p.pinpoint();
    p.optional_parens(Field::Speaker);
}
