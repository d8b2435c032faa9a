//! Drawing primitives over a [`Surface`]. All sizes are in cells and every
//! shape occupies exactly the cells it is given.

use super::geom::Rect;
use super::style::Style;
use crate::core::text;
use crate::ui::backend::Surface;
use unicode_width::UnicodeWidthChar;

pub const HLINE: char = '─';
pub const VLINE: char = '│';
pub const TOP_LEFT: char = '┌';
pub const TOP_RIGHT: char = '┐';
pub const BOTTOM_LEFT: char = '└';
pub const BOTTOM_RIGHT: char = '┘';

pub fn fill_area(surface: &mut dyn Surface, area: Rect, style: Style) {
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            surface.set_cell(x, y, ' ', style);
        }
    }
}

pub fn hline(surface: &mut dyn Surface, x: i32, y: i32, len: u16, style: Style) {
    for dx in 0..len as i32 {
        surface.set_cell(x + dx, y, HLINE, style);
    }
}

pub fn vline(surface: &mut dyn Surface, x: i32, y: i32, len: u16, style: Style) {
    for dy in 0..len as i32 {
        surface.set_cell(x, y + dy, VLINE, style);
    }
}

/// Fills `area` and draws a border with corner glyphs along its edge.
pub fn rectangle(surface: &mut dyn Surface, area: Rect, style: Style) {
    fill_area(surface, area, style);
    if area.w < 2 || area.h < 2 {
        return;
    }

    let right = area.right() - 1;
    let bottom = area.bottom() - 1;

    hline(surface, area.x + 1, area.y, area.w - 2, style);
    hline(surface, area.x + 1, bottom, area.w - 2, style);
    vline(surface, area.x, area.y + 1, area.h - 2, style);
    vline(surface, right, area.y + 1, area.h - 2, style);

    surface.set_cell(area.x, area.y, TOP_LEFT, style);
    surface.set_cell(right, area.y, TOP_RIGHT, style);
    surface.set_cell(area.x, bottom, BOTTOM_LEFT, style);
    surface.set_cell(right, bottom, BOTTOM_RIGHT, style);
}

/// Writes one line of text starting at `(x, y)` and returns the column just
/// past it.
pub fn text(surface: &mut dyn Surface, x: i32, y: i32, line: &str, style: Style) -> i32 {
    put_text(surface, x, y, line, style, None)
}

/// Like [`text`], but cells outside `clip` are left untouched.
pub fn text_clipped(
    surface: &mut dyn Surface,
    x: i32,
    y: i32,
    line: &str,
    style: Style,
    clip: Rect,
) -> i32 {
    put_text(surface, x, y, line, style, Some(clip))
}

fn put_text(
    surface: &mut dyn Surface,
    x: i32,
    y: i32,
    line: &str,
    style: Style,
    clip: Option<Rect>,
) -> i32 {
    let mut cx = x;
    for ch in line.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as i32;
        if w == 0 {
            continue;
        }
        let visible = match clip {
            // Do not partially render wide glyphs.
            Some(clip) => clip.contains(cx, y) && clip.contains(cx + w - 1, y),
            None => true,
        };
        if visible {
            surface.set_cell(cx, y, ch, style);
            // Wide glyphs occupy the next cell as well.
            for dx in 1..w {
                surface.set_cell(cx + dx, y, ' ', style);
            }
        }
        cx += w;
    }
    cx
}

/// Column at which `line` starts when centred in `width` cells beginning at
/// `offset`. Lines wider than the area start left of `offset`.
pub fn center_x(line: &str, width: u16, offset: i32) -> i32 {
    (width as i32 - text::width(line) as i32) / 2 + offset
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/draw.rs"]
mod tests;
