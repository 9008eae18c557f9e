//! Journal articles, books, reports and other secondary sources.

use super::{prefixed, Parts};
use crate::field::Field;
use crate::markup::{italic, quoted};

fn quoted_title(p: &Parts, field: Field) -> Option<String> {
    p.slot(field).map(|title| quoted(&title))
}

fn italic_title(p: &Parts, field: Field) -> Option<String> {
    p.slot(field).map(|title| italic(&title))
}

/// `39(2)`, `39`, or `(2)` depending on which of volume and issue are shown.
fn volume_issue(p: &Parts) -> Option<String> {
    match (p.slot(Field::Volume), p.slot(Field::Issue)) {
        (Some(volume), Some(issue)) => Some(format!("{}({})", volume, issue)),
        (Some(volume), None) => Some(volume),
        (None, Some(issue)) => Some(format!("({})", issue)),
        (None, None) => None,
    }
}

/// Publisher, optional edition and year, as one parenthetical group.
fn publication_details(p: &mut Parts) {
    p.group([
        p.slot(Field::Publisher),
        p.optional(Field::Edition).map(|edition| format!("{} ed", edition)),
        p.slot(Field::Year),
    ]);
}

/// Starting page then pinpoint; the comma between them needs a starting page.
fn pages(p: &mut Parts) {
    let starting_page = p.slot(Field::StartingPage);
    if starting_page.is_some() {
        p.push(starting_page);
        p.comma();
    }
    p.pinpoint();
}

fn optional_volume(p: &mut Parts) {
    p.push(prefixed("vol", p.optional(Field::Volume)));
}

fn article_body(p: &mut Parts) {
    p.push(quoted_title(p, Field::Title));
    p.push(p.slot(Field::Year));
    p.push(volume_issue(p));
    p.push(italic_title(p, Field::Journal));
    pages(p);
}

pub(super) fn journal_article(p: &mut Parts) {
    p.push(p.slot(Field::Authors));
    p.comma();
    article_body(p);
}

pub(super) fn symposium(p: &mut Parts) {
    p.text("Symposium");
    p.comma();
    article_body(p);
}

pub(super) fn book(p: &mut Parts) {
    p.push(p.slot(Field::Authors));
    p.comma();
    p.push(p.slot(Field::Title).map(|title| italic(&quoted(&title))));
    publication_details(p);
    optional_volume(p);
    p.pinpoint();
}

pub(super) fn book_chapter(p: &mut Parts) {
    p.push(p.slot(Field::Authors));
    p.comma();
    p.push(quoted_title(p, Field::ChapterTitle));
    p.push(prefixed("in", p.editors(true)));
    p.comma();
    p.push(italic_title(p, Field::BookTitle));
    publication_details(p);
    optional_volume(p);
    pages(p);
}

pub(super) fn book_with_editor(p: &mut Parts) {
    p.push(p.slot(Field::Authors));
    p.comma();
    p.push(italic_title(p, Field::Title));
    p.comma();
    p.push(prefixed("ed", p.editors(false)));
    publication_details(p);
    p.pinpoint();
}

pub(super) fn translated_book(p: &mut Parts) {
    p.push(p.slot(Field::Authors));
    p.comma();
    p.push(italic_title(p, Field::TranslationTitle));
    p.comma();
    p.push(prefixed("tr", p.slot(Field::Translator)));
    publication_details(p);
    p.pinpoint();
}

pub(super) fn audiobook(p: &mut Parts) {
    p.push(p.slot(Field::Authors));
    p.comma();
    p.push(italic_title(p, Field::Title));
    p.group([
        Some("Audiobook".to_string()),
        p.slot(Field::Publisher),
        p.slot(Field::Year),
    ]);
    p.pinpoint();
}

pub(super) fn report(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(italic_title(p, Field::Title));
    p.group([
        p.slot(Field::DocumentType),
        p.optional(Field::SeriesNo),
        p.optional(Field::DocumentNumber),
        p.date(Field::FullDate),
    ]);
    p.pinpoint();
}

pub(super) fn research_paper(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(quoted_title(p, Field::Title));
    let paper = match (p.slot(Field::DocumentType), p.slot(Field::DocumentNumber)) {
        (Some(kind), Some(number)) => Some(format!("{} No {}", kind, number)),
        (Some(kind), None) => Some(kind),
        (None, number) => prefixed("No", number),
    };
    p.group([paper, p.slot(Field::Institution), p.date(Field::FullDate)]);
    p.pinpoint();
}

pub(super) fn speech(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(quoted_title(p, Field::Title));
    p.group([
        p.slot(Field::SpeechOrLecture),
        p.slot(Field::InstitutionForum),
        p.date(Field::FullDate),
    ]);
    p.pinpoint();
}

pub(super) fn press_release(p: &mut Parts) {
    p.push(p.slot(Field::Author));
    p.comma();
    p.push(quoted_title(p, Field::Title));
    p.group([
        p.slot(Field::ReleaseType),
        p.optional(Field::DocumentNumber),
        p.optional(Field::Body),
        p.date(Field::FullDate),
    ]);
    p.pinpoint();
}
