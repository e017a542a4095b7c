//! Batch text boundary: multi-line blobs into headlines.

/// Split a multi-line blob into headlines.
///
/// Lines are trimmed; blank and whitespace-only lines are discarded;
/// order is preserved.
pub fn split_headlines(blob: &str) -> Vec<&str> {
    blob.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
