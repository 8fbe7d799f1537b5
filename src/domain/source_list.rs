//! Upstream source list normalization.
//!
//! Action inputs carry the sources list as free-form text: one entry per line,
//! with arbitrary blank lines and padding. The tool expects a single
//! comma-separated value.

/// Split raw source text into its non-empty entries, in original order.
///
/// Any whitespace (newlines included) separates entries. There is no escaping,
/// so an entry cannot itself contain whitespace.
pub fn source_entries(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

/// Collapse newline/whitespace separated sources into `a,b,c`.
///
/// Empty and whitespace-only input yields an empty string.
pub fn normalize_source_list(raw: &str) -> String {
    source_entries(raw).join(",")
}
