// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Number of extended grapheme clusters in the string.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offset where the grapheme at `g_idx` starts, or the string length if out of range.
pub fn byte_offset_of_grapheme(s: &str, g_idx: usize) -> usize {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Byte range covered by the grapheme at `g_idx`.
pub fn byte_range_of_grapheme(s: &str, g_idx: usize) -> Option<Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(start, g)| start..start + g.len())
}

/// Display width of the first `n` graphemes.
pub fn width_of_graphemes(s: &str, n: usize) -> usize {
    s.graphemes(true).take(n).map(UnicodeWidthStr::width).sum()
}
