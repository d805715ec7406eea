//! Keyword matching for the task search endpoint.

/// Normalize a raw `?keyword=` value. Returns `None` when the keyword is
/// absent or blank, which callers treat as "match everything".
pub fn normalize_keyword(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_lowercase)
}

/// True when any of `fields` contains `keyword` (already lower-cased),
/// ignoring case.
pub fn matches_keyword(fields: &[&str], keyword: &str) -> bool {
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_keyword_normalizes_to_none() {
        assert_eq!(normalize_keyword(None), None);
        assert_eq!(normalize_keyword(Some("")), None);
        assert_eq!(normalize_keyword(Some("   ")), None);
    }

    #[test]
    fn keyword_is_trimmed_and_lowercased() {
        assert_eq!(normalize_keyword(Some("  Task ONE ")), Some("task one".into()));
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let fields = ["Test Task One", "Test Description One"];
        assert!(matches_keyword(&fields, "task one"));
        assert!(matches_keyword(&fields, "description"));
        assert!(!matches_keyword(&fields, "two"));
    }

    #[test]
    fn does_not_match_across_field_boundary() {
        let fields = ["alpha", "beta"];
        assert!(!matches_keyword(&fields, "alphabeta"));
    }
}
