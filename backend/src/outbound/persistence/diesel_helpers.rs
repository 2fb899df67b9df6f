//! Shared query helpers for Diesel repository implementations.

/// Build a case-insensitive containment pattern for `ILIKE`.
///
/// LIKE metacharacters in the term are escaped so callers always get a
/// literal substring match.
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("rao", "%rao%")]
    #[case("100%", "%100\\%%")]
    #[case("a_b", "%a\\_b%")]
    #[case("back\\slash", "%back\\\\slash%")]
    fn escapes_like_metacharacters(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(like_pattern(term), expected);
    }

    #[rstest]
    fn empty_term_matches_everything() {
        assert_eq!(like_pattern(""), "%%");
    }
}
