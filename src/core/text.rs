//! Cell-width aware helpers for laying text out in fixed-width boxes.
//!
//! Widths are terminal cells (via `unicode-width`), never bytes. Byte offsets
//! returned from here always land on UTF-8 character boundaries.

use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A tab is always rendered as this many spaces.
pub const TAB_WIDTH: usize = 4;

pub fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}

pub fn width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

pub fn chars_width(chars: &[char]) -> usize {
    chars.iter().map(|&ch| char_width(ch)).sum()
}

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = char_width(ch);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    end
}

/// Hard-wraps `line` for a box `box_width` cells wide.
///
/// Lines no wider than the box are returned as-is. Longer lines lose
/// `box_width - 1` cells off the front per produced line until the remainder
/// is narrower than the box.
pub fn wrap_line(line: &str, box_width: usize) -> Vec<String> {
    if box_width <= 1 || width(line) <= box_width {
        return vec![line.to_string()];
    }

    let mut out = Vec::new();
    let mut rest = line;
    while width(rest) >= box_width {
        let mut cut = truncate_to_width(rest, box_width - 1);
        if cut == 0 {
            // A single glyph wider than the cut: take it anyway so we make progress.
            cut = rest.chars().next().map(char::len_utf8).unwrap_or(rest.len());
        }
        out.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }
    if !rest.is_empty() {
        out.push(rest.to_string());
    }
    out
}

/// Window `[start, end)` of char indices into `chars` that fits into
/// `available` cells and keeps `cursor` visible. With the cursor at the end
/// the window is the trailing part of the buffer.
pub fn cursor_window(chars: &[char], cursor: usize, available: usize) -> Range<usize> {
    let cursor = cursor.min(chars.len());
    if available == 0 || chars.is_empty() {
        return cursor..cursor;
    }

    let prefix_end = (cursor + 1).min(chars.len());
    let mut start = 0usize;
    if chars_width(&chars[..prefix_end]) > available {
        // Walk back from the cursor until the window is full.
        start = prefix_end;
        let mut used = 0usize;
        for idx in (0..prefix_end).rev() {
            let w = char_width(chars[idx]);
            if used + w > available {
                break;
            }
            used += w;
            start = idx;
        }
    }

    let mut end = start;
    let mut used = 0usize;
    while end < chars.len() {
        let w = char_width(chars[end]);
        if used + w > available {
            break;
        }
        used += w;
        end += 1;
    }

    start..end
}

#[cfg(test)]
#[path = "../../tests/unit/core/text.rs"]
mod tests;
