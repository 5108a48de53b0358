//! Cell width and clipping helpers.
//!
//! Character displays address whole cells, so text is measured per grapheme cluster. Control
//! characters occupy no cell and are dropped when clipping.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

pub fn grapheme_width(grapheme: &str) -> usize {
    grapheme
        .chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum()
}

/// Number of cells `text` occupies.
pub fn cell_width(text: &str) -> usize {
    text.graphemes(true).map(grapheme_width).sum()
}

/// Cell width saturated to the `u8` range used by component sizes.
pub fn cell_width_u8(text: &str) -> u8 {
    u8::try_from(cell_width(text)).unwrap_or(u8::MAX)
}

/// Drops the first `skip` cells of `text` and keeps at most `max_cells` after that.
///
/// A wide grapheme straddling either edge is dropped rather than split.
pub fn clip_cells(text: &str, skip: usize, max_cells: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    let end = skip.saturating_add(max_cells);
    for grapheme in text.graphemes(true) {
        let width = grapheme_width(grapheme);
        if width == 0 {
            continue;
        }
        let next = column + width;
        if next > end {
            break;
        }
        if column >= skip {
            out.push_str(grapheme);
        }
        column = next;
    }
    out
}

/// Splits `text` into one string per grapheme cluster.
pub fn graphemes(text: &str) -> Vec<String> {
    text.graphemes(true).map(str::to_string).collect()
}
