use super::text_box::{Justify, TextBox};
use crate::core::event::Key;
use crate::runtime::EventSink;
use crate::ui::backend::Surface;
use crate::ui::core::style::Style;
use crate::ui::core::widget::Widget;
use std::ops::Range;

/// A fixed grid of text cells, stored column-major (`cells[column][row]`).
///
/// The highlighted region is a mask: `active_column`/`active_row` pick one
/// column/row, `None` matches every column/row on that axis. With both unset
/// nothing is highlighted.
pub struct Table {
    width: u16,
    height: u16,
    columns: usize,
    rows: usize,
    style: Style,
    show_grid: bool,
    show_numbers: bool,
    active_column: Option<usize>,
    active_row: Option<usize>,
    viewport: Option<Range<usize>>,

    cells: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty grid. A table cannot have more columns than it is
    /// wide or more rows than it is tall, so both are clamped.
    pub fn new(width: u16, height: u16, columns: usize, rows: usize) -> Self {
        let columns = columns.min(width as usize);
        let rows = rows.min(height as usize);
        Self {
            width,
            height,
            columns,
            rows,
            style: Style::default(),
            show_grid: false,
            show_numbers: false,
            active_column: None,
            active_row: None,
            viewport: None,
            cells: vec![vec![String::new(); rows]; columns],
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    /// Prefix every cell with its 1-based column-major ordinal.
    pub fn numbers(mut self, show: bool) -> Self {
        self.show_numbers = show;
        self
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn set_active(&mut self, column: Option<usize>, row: Option<usize>) {
        self.active_column = column;
        self.active_row = row;
    }

    pub fn active(&self) -> (Option<usize>, Option<usize>) {
        (self.active_column, self.active_row)
    }

    /// Restricts drawing to rows `[top, top + len)`, stacked from the draw
    /// origin at the usual row height. Ordinals keep counting over the whole
    /// grid.
    pub fn set_viewport(&mut self, top: usize, len: usize) {
        self.viewport = Some(top..top.saturating_add(len));
    }

    /// Returns `false` (and changes nothing) when the coordinates are outside
    /// the grid.
    pub fn set_cell(&mut self, column: usize, row: usize, text: impl Into<String>) -> bool {
        if column >= self.columns || row >= self.rows {
            tracing::debug!(column, row, "table cell out of range");
            return false;
        }
        self.cells[column][row] = text.into();
        true
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&str> {
        self.cells.get(column)?.get(row).map(String::as_str)
    }

    pub fn is_active(&self, column: usize, row: usize) -> bool {
        if self.active_column.is_none() && self.active_row.is_none() {
            return false;
        }
        let column_matches = self.active_column.map_or(true, |c| c == column);
        let row_matches = self.active_row.map_or(true, |r| r == row);
        column_matches && row_matches
    }

    fn drawn_rows(&self) -> Range<usize> {
        match &self.viewport {
            Some(v) => v.start.min(self.rows)..v.end.min(self.rows),
            None => 0..self.rows,
        }
    }
}

impl Widget for Table {
    fn draw(&mut self, surface: &mut dyn Surface, x: i32, y: i32) {
        let drawn = self.drawn_rows();
        if self.columns == 0 || drawn.is_empty() {
            return;
        }

        let stride = self.width / self.columns as u16;
        // Neighbouring cells overlap by one column so a grid shares its lines.
        let cell_w = if self.show_grid { stride + 1 } else { stride };
        let cell_h = self.height / self.rows as u16;

        let mut number = 0usize;
        for (c, column) in self.cells.iter().enumerate() {
            let cx = x + c as i32 * stride as i32;
            for (r, value) in column.iter().enumerate() {
                if self.show_numbers {
                    number += 1;
                }
                if !drawn.contains(&r) || value.is_empty() {
                    continue;
                }

                let cy = y + (r - drawn.start) as i32 * cell_h as i32;
                let (text, justify) = if self.show_numbers {
                    (format!(" {}. {}", number, value), Justify::Left)
                } else {
                    (value.clone(), Justify::Center)
                };
                let style = if self.is_active(c, r) {
                    self.style.highlighted()
                } else {
                    self.style
                };

                let mut cell = TextBox::new(cell_w, cell_h)
                    .border(self.show_grid)
                    .justify(justify, Justify::Center)
                    .style(style);
                cell.add_text(&text);
                cell.draw(surface, cx, cy);
            }
        }
    }

    fn handle_key(&mut self, _key: Key, _events: &EventSink) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/table.rs"]
mod tests;
