//! Free-text list filters.
//!
//! Every list endpoint takes one optional text parameter and applies a
//! case-insensitive substring match on the relevant column(s).

/// Normalize a raw filter value into an ILIKE pattern.
///
/// The value is trimmed of surrounding whitespace; an absent or empty value
/// means no filtering. `%` and `_` are escaped so they match literally.
pub fn like_pattern(raw: Option<&str>) -> Option<String> {
    let query = raw?.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!(
        "%{}%",
        query.replace('%', "\\%").replace('_', "\\_")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_parameter_means_no_filter() {
        assert_eq!(like_pattern(None), None);
    }

    #[test]
    fn test_empty_and_whitespace_mean_no_filter() {
        assert_eq!(like_pattern(Some("")), None);
        assert_eq!(like_pattern(Some("   ")), None);
        assert_eq!(like_pattern(Some("\t\n")), None);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(like_pattern(Some("  ann ")), Some("%ann%".to_string()));
    }

    #[test]
    fn test_substring_pattern() {
        assert_eq!(like_pattern(Some("cak")), Some("%cak%".to_string()));
    }

    #[test]
    fn test_metacharacters_match_literally() {
        assert_eq!(
            like_pattern(Some("100%_pure")),
            Some("%100\\%\\_pure%".to_string())
        );
    }
}
