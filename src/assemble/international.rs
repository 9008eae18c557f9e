//! Treaties.

use super::{prefixed, Parts};
use crate::field::Field;
use crate::markup::{italic, parens};

pub(super) fn treaty(p: &mut Parts) {
    p.push(p.slot(Field::Title).map(|title| italic(&title)));
    p.comma();
    p.push(p.optional(Field::Parties));
    p.comma();
    p.push(prefixed("opened for signature", p.date(Field::DateOpened)));
    p.comma();
    p.push(p.slot(Field::TreatySeries));
    p.attach(prefixed("entered into force", p.date(Field::DateInForce)).map(|d| parens(&d)));
    p.pinpoint();
    p.short_title(true);
}
