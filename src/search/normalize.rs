//! Canonical comparison form for labels, member names and query text.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics and case-fold `text`.
///
/// Decomposes to NFKD, drops every combining mark, then lower-cases. A few
/// characters only expose a combining mark after lower-casing (`İ` becomes
/// `i` + U+0307), so the decomposition runs a second time to keep the result
/// stable under repeated application.
///
/// Total: every input, including the empty string, has a defined output.
pub fn normalize(text: &str) -> String {
    if text.is_ascii() {
        return text.to_ascii_lowercase();
    }

    let folded = fold(text);
    if folded.is_ascii() {
        folded
    } else {
        fold(&folded)
    }
}

fn fold(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_ascii() {
        assert_eq!(normalize("General-Announcements"), "general-announcements");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Zoë Ångström"), "zoe angstrom");
        assert_eq!(normalize("José Müller"), "jose muller");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn dotted_capital_i_is_stable() {
        let once = normalize("İstanbul");
        assert_eq!(once, "istanbul");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn compatibility_forms_decompose() {
        assert_eq!(normalize("ﬁle"), "file");
    }

    #[test]
    fn non_latin_text_survives() {
        assert_eq!(normalize("Борис"), "борис");
    }

    #[test]
    fn prefixes_are_untouched() {
        assert_eq!(normalize("#Général"), "#general");
        assert_eq!(normalize("@Zoë"), "@zoe");
    }
}
