//! Orchestrates marker location, dedup, and cleanup into the final document.

use tracing::{debug, instrument};

use filterforge_shared::{FilterForgeError, Result};

use crate::cleanup::collapse_blank_runs;
use crate::dedupe::dedupe_lines;
use crate::marker::{FILTER_BLOCKS_MARKER, RUNES_BLOCK_MARKER, locate_marker};

/// Splice fragment content into the base file at its two marker offsets.
///
/// Filter fragments are concatenated in caller order (one blank separator
/// line after each), deduplicated, then blank-collapsed — in that order,
/// so blanks exposed by removed duplicates still get collapsed. The rune
/// design fragment is inserted verbatim.
///
/// Both markers are located against the same unmodified base. The filter
/// offset must not land after the runes offset; insertion offsets past the
/// end of the base are clamped.
#[instrument(skip_all, fields(filter_fragments = filter_texts.len()))]
pub fn assemble(base: &str, design_text: &str, filter_texts: &[String]) -> Result<String> {
    let base_lines: Vec<&str> = base.lines().collect();

    let filter_at = locate_marker(&base_lines, FILTER_BLOCKS_MARKER)?;
    let runes_at = locate_marker(&base_lines, RUNES_BLOCK_MARKER)?;

    if filter_at > runes_at {
        return Err(FilterForgeError::merge(format!(
            "filter blocks marker (offset {filter_at}) resolves after runes marker (offset {runes_at})"
        )));
    }

    let filter_at = filter_at.min(base_lines.len());
    let runes_at = runes_at.min(base_lines.len());

    debug!(filter_at, runes_at, "resolved insertion offsets");

    let mut combined: Vec<&str> = Vec::new();
    for text in filter_texts {
        combined.extend(text.lines());
        combined.push("");
    }

    let deduped = dedupe_lines(&combined);
    let cleaned = collapse_blank_runs(&deduped);

    debug!(
        combined = combined.len(),
        kept = cleaned.len(),
        "filter fragment lines normalized"
    );

    let design_lines: Vec<&str> = design_text.lines().collect();

    let mut merged: Vec<&str> =
        Vec::with_capacity(base_lines.len() + cleaned.len() + design_lines.len());
    merged.extend_from_slice(&base_lines[..filter_at]);
    merged.extend_from_slice(&cleaned);
    merged.extend_from_slice(&base_lines[filter_at..runes_at]);
    merged.extend_from_slice(&design_lines);
    merged.extend_from_slice(&base_lines[runes_at..]);

    Ok(merged.join("\n"))
}
