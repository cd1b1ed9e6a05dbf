//! Marker location within the base file.

use filterforge_shared::{FilterForgeError, Result};

/// Lines to skip past a marker: the marker line itself plus its
/// 2-line decorative header. The base file reserves these lines
/// after every marker.
pub const MARKER_HEADER_SKIP: usize = 3;

/// Marker phrase anchoring the filter-blocks insertion point.
pub const FILTER_BLOCKS_MARKER: &str = "// start filter blocks";

/// Marker phrase anchoring the runes-block insertion point.
pub const RUNES_BLOCK_MARKER: &str = "// start runes block";

/// Resolve a marker phrase to an insertion offset.
///
/// Scans top-down for the first line containing `phrase` as a
/// case-insensitive substring and returns its index plus
/// [`MARKER_HEADER_SKIP`]. The offset is not checked against the document
/// length; the assembler clamps it when slicing.
pub fn locate_marker(lines: &[&str], phrase: &str) -> Result<usize> {
    let needle = phrase.to_lowercase();
    lines
        .iter()
        .position(|line| line.to_lowercase().contains(&needle))
        .map(|index| index + MARKER_HEADER_SKIP)
        .ok_or_else(|| FilterForgeError::marker_not_found(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_first_match_plus_skip() {
        let lines = vec!["a", "// start runes block", "header", "header", "body"];
        assert_eq!(locate_marker(&lines, RUNES_BLOCK_MARKER).unwrap(), 4);
    }

    #[test]
    fn match_is_case_insensitive_both_ways() {
        let lines = vec!["// START RUNES BLOCK"];
        assert_eq!(locate_marker(&lines, "// start runes block").unwrap(), 3);

        let lines = vec!["// start runes block"];
        assert_eq!(locate_marker(&lines, "// START RUNES BLOCK").unwrap(), 3);
    }

    #[test]
    fn match_is_substring_not_exact() {
        let lines = vec!["  prefix // start filter blocks suffix  "];
        assert_eq!(locate_marker(&lines, FILTER_BLOCKS_MARKER).unwrap(), 3);
    }

    #[test]
    fn first_occurrence_wins() {
        let lines = vec!["x", "// start filter blocks", "y", "// start filter blocks"];
        assert_eq!(locate_marker(&lines, FILTER_BLOCKS_MARKER).unwrap(), 4);
    }

    #[test]
    fn missing_marker_reports_phrase() {
        let lines = vec!["nothing", "here"];
        let err = locate_marker(&lines, FILTER_BLOCKS_MARKER).unwrap_err();
        assert_eq!(
            err.to_string(),
            "marker \"// start filter blocks\" not found in base file"
        );
    }

    #[test]
    fn offset_may_exceed_document_length() {
        // The locator never validates against document length.
        let lines = vec!["// start runes block"];
        assert_eq!(locate_marker(&lines, RUNES_BLOCK_MARKER).unwrap(), 3);
    }
}
