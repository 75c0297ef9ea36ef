//! Origin-extraction patterns.
//!
//! The cascade patterns overlap (`renamed from X` also matches the bare
//! `from X` form), so their order is part of the contract: first match
//! wins, never the longest or the latest.

use regex::Regex;

/// Strict pattern for the derived-variable sweep.
///
/// The capture allows letters and underscores only: a mnemonic with
/// digits truncates at the first digit, and a token starting with a
/// digit fails to match at all, even though the caller's "created from"
/// containment check passed.
pub const CREATED_FROM_STRICT: &str = r#"(?i)created from\s+["*]*([A-Z_]+)["*]*"#;

/// Watchlist cascade, tried in order. Captures allow digits.
pub const WATCHLIST_CASCADE: [&str; 3] = [
    r#"(?i)created from\s+["*]*([A-Z_0-9]+)["*]*"#,
    r#"(?i)renamed from\s+["*]*([A-Z_0-9]+)["*]*"#,
    r#"(?i)from\s+["*]*([A-Z_0-9]+)["*]*"#,
];

/// Run one pattern against the comments, returning the captured token.
pub fn extract(pattern: &str, comments: &str) -> Option<String> {
    Regex::new(pattern)
        .ok()
        .and_then(|re| re.captures(comments))
        .and_then(|caps| caps.get(1))
        .map(|capture| capture.as_str().to_string())
}

/// Try each pattern in order; the first that matches anywhere wins.
pub fn extract_first(patterns: &[&str], comments: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|pattern| extract(pattern, comments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_quotes_and_stars_around_the_token() {
        assert_eq!(
            extract(CREATED_FROM_STRICT, r#"created from "PEMLR""#).as_deref(),
            Some("PEMLR")
        );
        assert_eq!(
            extract(CREATED_FROM_STRICT, "created from *PEMLR*").as_deref(),
            Some("PEMLR")
        );
    }

    #[test]
    fn strict_capture_truncates_at_digits() {
        assert_eq!(
            extract(CREATED_FROM_STRICT, "created from PEIO1OCD").as_deref(),
            Some("PEIO")
        );
        assert_eq!(extract(CREATED_FROM_STRICT, "created from 2019 recode"), None);
    }

    #[test]
    fn cascade_captures_allow_digits() {
        assert_eq!(
            extract_first(&WATCHLIST_CASCADE, "created from PEIO1OCD").as_deref(),
            Some("PEIO1OCD")
        );
    }

    #[test]
    fn cascade_priority_is_first_match_wins() {
        let comments = "created from PUWK, renamed from PEMLR";
        assert_eq!(
            extract_first(&WATCHLIST_CASCADE, comments).as_deref(),
            Some("PUWK")
        );
        assert_eq!(
            extract_first(&WATCHLIST_CASCADE, "renamed from PEMLR").as_deref(),
            Some("PEMLR")
        );
        assert_eq!(
            extract_first(&WATCHLIST_CASCADE, "derived from PRERNWA").as_deref(),
            Some("PRERNWA")
        );
        assert_eq!(extract_first(&WATCHLIST_CASCADE, "no provenance note"), None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            extract(CREATED_FROM_STRICT, "Created From pemlr").as_deref(),
            Some("pemlr")
        );
    }
}
