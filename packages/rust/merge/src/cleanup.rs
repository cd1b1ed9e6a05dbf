//! Blank-line run collapsing for filter-block content.

use crate::is_blank_line;

/// Collapse runs of consecutive blank lines, keeping at most one.
///
/// A single boolean state tracks whether the next blank line may be kept:
/// initially yes, cleared after keeping a blank, re-armed by any non-blank
/// line. Non-blank lines are always kept verbatim and in order.
pub fn collapse_blank_runs<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut kept = Vec::with_capacity(lines.len());
    let mut blank_allowed = true;

    for &line in lines {
        if is_blank_line(line) {
            if blank_allowed {
                kept.push(line);
                blank_allowed = false;
            }
        } else {
            kept.push(line);
            blank_allowed = true;
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_blank_run_to_one() {
        let input = vec!["a", "", "", "", "b"];
        assert_eq!(collapse_blank_runs(&input), vec!["a", "", "b"]);
    }

    #[test]
    fn single_blanks_untouched() {
        let input = vec!["a", "", "b", "", "c"];
        assert_eq!(collapse_blank_runs(&input), input);
    }

    #[test]
    fn leading_blank_run_keeps_one() {
        let input = vec!["", "", "a"];
        assert_eq!(collapse_blank_runs(&input), vec!["", "a"]);
    }

    #[test]
    fn trailing_blank_run_keeps_one() {
        let input = vec!["a", "", ""];
        assert_eq!(collapse_blank_runs(&input), vec!["a", ""]);
    }

    #[test]
    fn whitespace_only_lines_count_as_blank() {
        let input = vec!["a", "   ", "\t", "b"];
        assert_eq!(collapse_blank_runs(&input), vec!["a", "   ", "b"]);
    }

    #[test]
    fn no_two_adjacent_blanks_in_output() {
        let input = vec!["", "", "a", "", "", "", "b", "", "", "c", ""];
        let out = collapse_blank_runs(&input);
        for pair in out.windows(2) {
            assert!(!(is_blank_line(pair[0]) && is_blank_line(pair[1])));
        }
    }

    #[test]
    fn non_blank_lines_preserved_in_order() {
        let input = vec!["", "x", "", "", "y", "", "z", ""];
        let out = collapse_blank_runs(&input);
        let content: Vec<&str> = out.iter().copied().filter(|l| !is_blank_line(l)).collect();
        assert_eq!(content, vec!["x", "y", "z"]);
    }

    #[test]
    fn separator_lines_get_no_special_treatment() {
        // Any non-blank line re-arms one allowed blank; separators included.
        let sep = "/".repeat(60);
        let input = vec![sep.as_str(), "", "", sep.as_str(), "", ""];
        assert_eq!(
            collapse_blank_runs(&input),
            vec![sep.as_str(), "", sep.as_str(), ""]
        );
    }

    #[test]
    fn empty_input() {
        assert!(collapse_blank_runs(&[]).is_empty());
    }
}
