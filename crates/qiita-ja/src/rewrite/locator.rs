// Locate キタ / キイタ in an aligned reading.

use super::Skip;
use super::aligner::Alignment;

/// Reading patterns rewritten to "Qiita", in search order.
pub const PATTERNS: [&[char]; 2] = [&['キ', 'タ'], &['キ', 'イ', 'タ']];

/// A pattern occurrence inside a reading, as reading-character indices.
///
/// Only meaningful together with the [`Alignment`] of the same
/// (surface, reading) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    /// Inclusive.
    pub end: usize,
}

/// Find the first `キタ` in `reading`, else the first `キイタ`, and check
/// that cutting there does not split a surface character's reading.
///
/// When the first pattern found sits on an unsafe boundary the second
/// pattern is not tried.
pub fn find_qiita_match(reading: &[char], alignment: &Alignment) -> Result<Match, Skip> {
    let m = PATTERNS
        .iter()
        .find_map(|p| {
            find_subslice(reading, p).map(|start| Match {
                start,
                end: start + p.len() - 1,
            })
        })
        .ok_or(Skip::NoPatternFound)?;

    if is_safe_boundary(alignment, m) {
        Ok(m)
    } else {
        Err(Skip::UnsafeBoundary)
    }
}

/// A match is safe when the reading characters just outside it belong to
/// different surface characters than its first and last characters.
fn is_safe_boundary(alignment: &Alignment, m: Match) -> bool {
    let starts_clean = m.start == 0 || alignment[m.start - 1] != alignment[m.start];
    let ends_clean =
        alignment.last_index() == Some(m.end) || alignment[m.end + 1] != alignment[m.end];
    starts_clean && ends_clean
}

fn find_subslice(haystack: &[char], needle: &[char]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
