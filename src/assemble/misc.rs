//! Dictionaries, encyclopedias, newspapers, media and other sources.

use super::{join_present, prefixed, Parts};
use crate::field::Field;
use crate::markup::{brackets, italic, parens, quoted};

fn italic_slot(p: &Parts, field: Field) -> Option<String> {
    p.slot(field).map(|value| italic(&value))
}

fn quoted_slot(p: &Parts, field: Field) -> Option<String> {
    p.slot(field).map(|value| quoted(&value))
}

/// `(online at 1 May 2024)`
fn online_at(p: &Parts) -> Option<String> {
    prefixed("online at", p.date(Field::RetrievalDate)).map(|text| parens(&text))
}

/// `(at 1 May 2024)`
fn at_date(p: &Parts) -> Option<String> {
    prefixed("at", p.date(Field::FullDate)).map(|text| parens(&text))
}

fn definition(p: &mut Parts) {
    let def = prefixed("def", p.optional(Field::DefinitionNumber)).map(|d| parens(&d));
    p.attach(def);
}

fn url(p: &mut Parts) {
    let url = p.optional(Field::Url).map(|url| format!("<{}>", url));
    p.attach(url);
}

fn bracketed_pinpoint(p: &mut Parts) {
    p.push(p.optional(Field::Pinpoint).map(|pin| brackets(&pin)));
}

pub(super) fn online_dictionary(p: &mut Parts) {
    p.push(italic_slot(p, Field::Title));
    p.attach(online_at(p));
    p.push(quoted_slot(p, Field::EntryTitle));
    definition(p);
}

pub(super) fn hard_copy_dictionary(p: &mut Parts) {
    p.push(italic_slot(p, Field::Title));
    p.group([
        p.slot(Field::Edition).map(|edition| format!("{} ed", edition)),
        p.slot(Field::Year),
    ]);
    p.push(quoted_slot(p, Field::EntryTitle));
    definition(p);
}

/// Title and chapter headings followed by the paragraph, shared by both
/// encyclopedia forms.
fn encyclopedia_entry(p: &mut Parts) {
    p.push(join_present(
        [p.slot(Field::TitleNumber), p.slot(Field::TitleName)],
        " ",
    ));
    p.comma();
    let chapter = join_present(
        [p.slot(Field::ChapterNumber), p.slot(Field::ChapterName)],
        " ",
    );
    p.push(chapter.map(|chapter| quoted(&chapter)));
    p.push(p.slot(Field::Paragraph).map(|para| brackets(&para)));
}

pub(super) fn online_encyclopedia(p: &mut Parts) {
    p.push(p.slot(Field::Publisher));
    p.comma();
    p.push(italic_slot(p, Field::Title));
    p.attach(online_at(p));
    encyclopedia_entry(p);
}

pub(super) fn hard_copy_encyclopedia(p: &mut Parts) {
    p.push(p.slot(Field::Publisher));
    p.comma();
    p.push(italic_slot(p, Field::Title));
    p.comma();
    p.push(prefixed("vol", p.optional(Field::Volume)));
    p.attach(at_date(p));
    encyclopedia_entry(p);
}

pub(super) fn online_looseleaf(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(p.slot(Field::Publisher));
    p.comma();
    p.push(italic_slot(p, Field::Title));
    p.attach(online_at(p));
    bracketed_pinpoint(p);
}

pub(super) fn hard_copy_looseleaf(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(p.slot(Field::Publisher));
    p.comma();
    p.push(italic_slot(p, Field::Title));
    p.push(prefixed("vol", p.optional(Field::Volume)));
    let currency = match p.optional(Field::ServiceNumber) {
        Some(service) => Some(parens(&format!("at {}", service))),
        None => at_date(p),
    };
    p.attach(currency);
    bracketed_pinpoint(p);
}

pub(super) fn online_newspaper(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(quoted_slot(p, Field::Title));
    p.comma();
    p.push(italic_slot(p, Field::Newspaper));
    p.attach(prefixed("online,", p.date(Field::FullDate)).map(|text| parens(&text)));
    bracketed_pinpoint(p);
    url(p);
}

pub(super) fn printed_newspaper(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(quoted_slot(p, Field::Title));
    p.comma();
    p.push(italic_slot(p, Field::Newspaper));
    p.group([p.slot(Field::Place), p.date(Field::FullDate)]);
    p.push(p.slot(Field::StartingPage));
    p.comma();
    p.pinpoint();
}

pub(super) fn periodical(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(quoted_slot(p, Field::Title));
    p.attach(p.slot(Field::DateMonthSeason).map(|date| parens(&date)));
    p.push(italic_slot(p, Field::PeriodicalName));
    p.pinpoint();
}

pub(super) fn interview(p: &mut Parts) {
    p.push(p.slot(Field::Format));
    p.push(prefixed("with", p.slot(Field::Interviewee)));
    p.group([
        p.slot(Field::Interviewer),
        p.slot(Field::InterviewForum),
        p.date(Field::FullDate),
    ]);
}

pub(super) fn film_television_media(p: &mut Parts) {
    p.push(quoted_slot(p, Field::EpisodeTitle));
    p.comma();
    p.push(italic_slot(p, Field::FilmSeriesTitle));
    p.group([
        p.optional(Field::VersionDetails),
        p.slot(Field::StudioProducer),
        p.slot(Field::Year),
    ]);
    p.pinpoint();
}

pub(super) fn social_media_post(p: &mut Parts) {
    p.push(p.slot(Field::Username));
    p.comma();
    p.push(quoted_slot(p, Field::Title));
    p.group([
        p.slot(Field::Platform),
        p.date(Field::FullDate),
        p.optional(Field::Time),
    ]);
    url(p);
}

pub(super) fn internet_material(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(quoted_slot(p, Field::DocumentTitle));
    p.comma();
    p.push(italic_slot(p, Field::WebPageTitle));
    p.group([p.slot(Field::DocumentType), p.date(Field::FullDate)]);
    p.pinpoint();
    url(p);
}

pub(super) fn written_submission(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(prefixed("Submission No", p.slot(Field::Number)));
    p.push(prefixed("to", p.slot(Field::Body)));
    p.comma();
    p.push(italic_slot(p, Field::NameOfInquiry));
    p.attach(p.date(Field::FullDate).map(|date| parens(&date)));
    p.pinpoint();
}

pub(super) fn intellectual_property(p: &mut Parts) {
    let designation = join_present(
        [
            p.slot(Field::JurisdictionCode),
            p.slot(Field::IpType),
            p.optional(Field::AdditionalInfo),
            prefixed("No", p.slot(Field::IdentificationNumber)),
        ],
        " ",
    );
    p.push(designation.map(|text| italic(&text)));
    p.comma();
    p.push(prefixed("filed on", p.date(Field::FilingDate)));
    let registration = match (
        p.optional(Field::RegistrationStatus),
        p.optional(Field::RegistrationDate),
    ) {
        (Some(status), Some(_)) => p
            .date(Field::RegistrationDate)
            .map(|date| format!("({} on {})", status, date)),
        _ => None,
    };
    p.attach(registration);
}

pub(super) fn constitutive_document(p: &mut Parts) {
    p.push(italic_slot(p, Field::DocumentType));
    p.comma();
    p.push(p.slot(Field::CompanyName));
    p.attach(at_date(p));
    p.pinpoint();
}

pub(super) fn written_correspondence(p: &mut Parts) {
    p.push(p.slot(Field::CorrespondenceType));
    p.push(prefixed("from", p.slot(Field::Author)));
    p.push(prefixed("to", p.slot(Field::Recipient)));
    p.comma();
    p.push(p.date(Field::FullDate));
    p.comma();
    p.pinpoint();
}
