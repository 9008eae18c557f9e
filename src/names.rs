//! Author and editor list formatting.
//!
//! AGLC4 joins up to three names in full ("A", "A and B", "A, B and C") and
//! collapses four or more to the first name followed by "et al".

/// Joins a list of names into AGLC4 prose.
///
/// # Examples
///
/// ```
/// use aglc_cite::format_names;
///
/// assert_eq!(format_names(&["A", "B", "C"]), "A, B and C");
/// assert_eq!(format_names(&["A", "B", "C", "D"]), "A et al");
/// ```
pub fn format_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [first, second, third] => format!(
            "{}, {} and {}",
            first.as_ref(),
            second.as_ref(),
            third.as_ref()
        ),
        [first, ..] => format!("{} et al", first.as_ref()),
    }
}

/// Joins a list of editors and appends "(ed)" or "(eds)".
///
/// An empty list yields an empty string with no suffix.
pub fn format_editors<S: AsRef<str>>(names: &[S]) -> String {
    let joined = format_editors_without_suffix(names);
    match names.len() {
        0 => joined,
        1 => format!("{} (ed)", joined),
        _ => format!("{} (eds)", joined),
    }
}

/// Joins a list of editors without the editorial suffix, for contexts such as
/// "ed A and B" that supply their own wording.
pub fn format_editors_without_suffix<S: AsRef<str>>(names: &[S]) -> String {
    format_names(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: [&str; 0] = [];

    #[test]
    fn test_format_names_boundaries() {
        assert_eq!(format_names(&EMPTY), "");
        assert_eq!(format_names(&["A"]), "A");
        assert_eq!(format_names(&["A", "B"]), "A and B");
        assert_eq!(format_names(&["A", "B", "C"]), "A, B and C");
        assert_eq!(format_names(&["A", "B", "C", "D"]), "A et al");
    }

    #[test]
    fn test_format_names_keeps_only_first_beyond_three() {
        // Given: six authors
        let names = vec![
            "Gabrielle Appleby".to_string(),
            "Alexander Reilly".to_string(),
            "Laura Grenfell".to_string(),
            "Anne Twomey".to_string(),
            "Adrienne Stone".to_string(),
            "Cheryl Saunders".to_string(),
        ];

        // When: we join them
        let joined = format_names(&names);

        // Then: only the first author survives
        assert_eq!(joined, "Gabrielle Appleby et al");
    }

    #[test]
    fn test_format_editors_suffix() {
        assert_eq!(format_editors(&["A"]), "A (ed)");
        assert_eq!(format_editors(&["A", "B"]), "A and B (eds)");
        assert_eq!(format_editors(&["A", "B", "C"]), "A, B and C (eds)");
        assert_eq!(format_editors(&["A", "B", "C", "D"]), "A et al (eds)");
    }

    #[test]
    fn test_format_editors_empty_has_no_suffix() {
        assert_eq!(format_editors(&EMPTY), "");
    }

    #[test]
    fn test_format_editors_without_suffix_matches_names() {
        let editors = ["Pauline Ridge", "James Stellios"];
        assert_eq!(
            format_editors_without_suffix(&editors),
            "Pauline Ridge and James Stellios"
        );
        assert_eq!(
            format_editors_without_suffix(&editors),
            format_names(&editors)
        );
    }
}
