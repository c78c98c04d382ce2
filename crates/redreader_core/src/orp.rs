//! Optimal Recognition Point (ORP) splitting.
//!
//! The reader paints `left` right-aligned, `pivot` in a fixed center column
//! and `right` left-aligned, so the fixation character stays put while words
//! of different lengths flash by. Lengths are counted in extended grapheme
//! clusters so accented and combined characters are never split.

use unicode_segmentation::UnicodeSegmentation;

/// A token cut around its fixation character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrpSplit<'a> {
    pub left: &'a str,
    pub pivot: &'a str,
    pub right: &'a str,
}

impl OrpSplit<'_> {
    /// Returns `true` when the split came from an empty token.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.pivot.is_empty() && self.right.is_empty()
    }
}

/// Pivot position for a token `len` characters long.
///
/// Short tokens (up to three characters) pivot on their middle character;
/// longer ones at 35% of their length, rounded down.
pub fn pivot_index(len: usize) -> usize {
    if len == 0 {
        0
    } else if len <= 3 {
        (len - 1) / 2
    } else {
        (len as f64 * 0.35).floor() as usize
    }
}

/// Split `token` into `left`, `pivot` and `right` around its ORP.
///
/// # Returns
/// Three empty slices for an empty token; otherwise `left + pivot + right`
/// reassembles `token` and `pivot` holds exactly one character.
pub fn split(token: &str) -> OrpSplit<'_> {
    let bounds: Vec<usize> = token.grapheme_indices(true).map(|(idx, _)| idx).collect();
    let len = bounds.len();
    if len == 0 {
        return OrpSplit::default();
    }

    let p = pivot_index(len);
    let pivot_start = bounds[p];
    let pivot_end = bounds.get(p + 1).copied().unwrap_or(token.len());
    OrpSplit {
        left: &token[..pivot_start],
        pivot: &token[pivot_start..pivot_end],
        right: &token[pivot_end..],
    }
}
