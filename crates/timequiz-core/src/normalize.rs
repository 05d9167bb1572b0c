//! Answer normalization.

/// Trim surrounding whitespace and fold to lower case.
///
/// Internal whitespace and punctuation are left untouched, so `"New  York"`
/// and `"new york"` do not match.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Whether a raw answer matches an already-normalized expected answer.
pub fn answers_match(given: &str, expected: &str) -> bool {
    normalize(given) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize("  Paris \n"), "paris");
        assert_eq!(normalize("\tFOUR"), "four");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn keeps_internal_whitespace_and_punctuation() {
        assert_eq!(normalize(" New  York, NY "), "new  york, ny");
        assert_ne!(normalize("new  york"), normalize("new york"));
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "",
            " ",
            "4",
            " 6 ",
            "FOUR",
            "Ünïcödé ",
            "\u{130}stanbul",
            "ß",
            "Mixed Case\twith tab ",
            "\r\nwindows line\r\n",
            "ΣΊΣΥΦΟΣ",
        ];
        for s in inputs {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn literal_comparison_only() {
        assert!(answers_match(" 6 ", "6"));
        assert!(answers_match("Paris", "paris"));
        assert!(!answers_match("FOUR", "4"));
        assert!(!answers_match("4.0", "4"));
        assert!(!answers_match("", "4"));
    }
}
