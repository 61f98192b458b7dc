//! Literal substring erase and replace

/// Remove every occurrence of `needle` from `haystack`.
///
/// After each removal the search resumes at the removal point, so an
/// occurrence formed by the join of the two sides is removed as well when
/// it starts there. Empty input or an empty needle yields an empty string.
pub fn erase(haystack: &str, needle: &str) -> String {
    if haystack.is_empty() || needle.is_empty() {
        return String::new();
    }

    let mut result = haystack.to_string();
    let mut pos = 0;
    while let Some(found) = result[pos..].find(needle) {
        let at = pos + found;
        result.replace_range(at..at + needle.len(), "");
        pos = at;
    }
    result
}

/// Replace every non-overlapping occurrence of `needle`, left to right.
///
/// Scanning resumes after the inserted replacement, so replaced text is
/// never matched again. Empty input or an empty needle yields an empty
/// string; an empty replacement deletes each occurrence once.
pub fn replace(haystack: &str, needle: &str, replacement: &str) -> String {
    if haystack.is_empty() || needle.is_empty() {
        return String::new();
    }
    haystack.replace(needle, replacement)
}

/// Cut `text` to at most `max_len` bytes without splitting a character.
pub fn truncate_to(text: &mut String, max_len: usize) {
    if text.len() <= max_len {
        return;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erase_removes_each_occurrence() {
        assert_eq!(erase("AMD(R) Ryzen(TM) 9", "(R)"), "AMD Ryzen(TM) 9");
        assert_eq!(erase("(R)a(R)b(R)", "(R)"), "ab");
    }

    #[test]
    fn erase_missing_needle_is_identity() {
        let name = "Intel Core i7-8700K";
        assert_eq!(erase(name, "(TM)"), name);
    }

    #[test]
    fn erase_resumes_at_removal_point() {
        assert_eq!(erase("xabcbcy", "bc"), "xay");
        // a join that starts before the removal point survives
        assert_eq!(erase("aabb", "ab"), "ab");
    }

    #[test]
    fn degenerate_input_yields_empty() {
        assert_eq!(erase("", "x"), "");
        assert_eq!(erase("abc", ""), "");
        assert_eq!(replace("", "x", "y"), "");
        assert_eq!(replace("abc", "", "y"), "");
    }

    #[test]
    fn replace_shrinks() {
        assert_eq!(replace("a--b--c", "--", "-"), "a-b-c");
    }

    #[test]
    fn replace_does_not_rescan_inserted_text() {
        assert_eq!(replace("aa", "a", "aa"), "aaaa");
        assert_eq!(replace("a  b", "  ", " "), "a b");
        assert_eq!(replace("a    b", "  ", " "), "a  b");
    }

    #[test]
    fn replace_grows_over_many_occurrences() {
        let input = "x,".repeat(64);
        let output = replace(&input, ",", " and ");
        assert_eq!(output, "x and ".repeat(64));
        assert_eq!(output.matches(" and ").count(), 64);
    }

    #[test]
    fn replace_with_empty_deletes() {
        assert_eq!(replace("a-b-c", "-", ""), "abc");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let mut text = "Radeon™ Graphics".to_string();
        truncate_to(&mut text, 7);
        assert_eq!(text, "Radeon");

        let mut short = "GPU".to_string();
        truncate_to(&mut short, 16);
        assert_eq!(short, "GPU");
    }
}
