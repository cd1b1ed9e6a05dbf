//! Duplicate-line removal for filter-block content.

use std::collections::HashSet;

use crate::{is_blank_line, is_separator_line};

/// Remove repeated lines, keeping the first occurrence of each.
///
/// Single pass, order-preserving. The duplicate test is exact
/// (case-sensitive, untrimmed). Blank lines and separator lines are always
/// kept and never enter the seen set, so repeating either is fine.
pub fn dedupe_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept = Vec::with_capacity(lines.len());

    for &line in lines {
        if is_separator_line(line) || is_blank_line(line) {
            kept.push(line);
        } else if seen.insert(line) {
            kept.push(line);
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_later_duplicates() {
        let input = vec!["foo", "foo", "bar"];
        assert_eq!(dedupe_lines(&input), vec!["foo", "bar"]);
    }

    #[test]
    fn keeps_first_occurrence_in_place() {
        let input = vec!["a", "b", "a", "c", "b", "a"];
        assert_eq!(dedupe_lines(&input), vec!["a", "b", "c"]);
    }

    #[test]
    fn duplicate_test_is_case_sensitive() {
        let input = vec!["Item", "item"];
        assert_eq!(dedupe_lines(&input), vec!["Item", "item"]);
    }

    #[test]
    fn duplicate_test_is_untrimmed() {
        let input = vec!["item", "  item"];
        assert_eq!(dedupe_lines(&input), vec!["item", "  item"]);
    }

    #[test]
    fn blank_lines_always_kept() {
        let input = vec!["a", "", "", "b", ""];
        assert_eq!(dedupe_lines(&input), vec!["a", "", "", "b", ""]);
    }

    #[test]
    fn separator_lines_always_kept() {
        let sep = "/".repeat(60);
        let input = vec![sep.as_str(), "a", sep.as_str(), "a", sep.as_str()];
        assert_eq!(
            dedupe_lines(&input),
            vec![sep.as_str(), "a", sep.as_str(), sep.as_str()]
        );
    }

    #[test]
    fn short_slash_runs_are_deduped() {
        // 59 slashes is not a separator, so it participates in dedup.
        let short = "/".repeat(59);
        let input = vec![short.as_str(), short.as_str()];
        assert_eq!(dedupe_lines(&input), vec![short.as_str()]);
    }

    #[test]
    fn idempotent() {
        let input = vec!["a", "", "a", "b", "", "", "b", "a"];
        let once = dedupe_lines(&input);
        let twice = dedupe_lines(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input() {
        assert!(dedupe_lines(&[]).is_empty());
    }
}
