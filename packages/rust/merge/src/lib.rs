//! The merge engine: marker-based fragment insertion and line normalization.
//!
//! This crate is a pure transform over already-fetched text. It provides:
//! - [`locate_marker`] — resolve a marker phrase to an insertion offset
//! - [`dedupe_lines`] — drop repeated lines, first occurrence wins
//! - [`collapse_blank_runs`] — limit consecutive blank lines to one
//! - [`assemble`] — splice fragments into the base file at both markers
//!
//! Everything here is synchronous, deterministic, and free of I/O; retrieval
//! and request validation live in the `filterforge-fetch` and CLI crates.

mod assemble;
mod cleanup;
mod dedupe;
mod marker;

use std::sync::LazyLock;

use regex::Regex;

pub use assemble::assemble;
pub use cleanup::collapse_blank_runs;
pub use dedupe::dedupe_lines;
pub use marker::{
    FILTER_BLOCKS_MARKER, MARKER_HEADER_SKIP, RUNES_BLOCK_MARKER, locate_marker,
};

/// Matches a visual section separator: 60+ consecutive slashes and nothing else.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/{60,}$").expect("valid regex"));

/// A line whose trimmed content is empty.
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// A line whose trimmed content is a run of 60 or more `/` characters.
///
/// Separator lines are visual section breaks in `.bh` files; they repeat
/// freely and are exempt from deduplication.
pub fn is_separator_line(line: &str) -> bool {
    SEPARATOR_RE.is_match(line.trim())
}
