//! Character-grid surface for terminals and tests

use std::fmt;
use std::ops::Range;

use super::{Color, Surface};

const EMPTY: char = ' ';
const RECT: char = '#';
const CIRCLE: char = 'o';

/// Monochrome surface that maps game coordinates onto a `cols x rows` grid
#[derive(Debug, Clone)]
pub struct AsciiSurface {
    width: f32,
    height: f32,
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

/// Grid cells touched by the span `[start, start + len)`
fn cell_span(start: f32, len: f32, cell: f32, count: usize) -> Range<usize> {
    let lo = (start / cell).floor().max(0.0);
    let hi = ((start + len) / cell).ceil().min(count as f32);
    if hi <= lo {
        return 0..0;
    }
    lo as usize..hi as usize
}

impl AsciiSurface {
    /// Surface of `width x height` game units drawn into `cols x rows` cells
    pub fn new(width: f32, height: f32, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            width,
            height,
            cols,
            rows,
            cells: vec![EMPTY; cols * rows],
        }
    }

    fn cell_w(&self) -> f32 {
        self.width / self.cols as f32
    }

    fn cell_h(&self) -> f32 {
        self.height / self.rows as f32
    }

    /// Character at (col, row), if on the grid
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    fn set(&mut self, col: usize, row: usize, ch: char) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }

    /// Grid cell containing a game-space point
    fn locate(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(((x / self.cell_w()) as usize, (y / self.cell_h()) as usize))
    }

    /// One row of the grid as a string, if on the grid
    pub fn row_text(&self, row: usize) -> Option<String> {
        (row < self.rows).then(|| {
            self.cells[row * self.cols..(row + 1) * self.cols]
                .iter()
                .collect()
        })
    }
}

impl Surface for AsciiSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, _color: Color) {
        let cols = cell_span(x, w, self.cell_w(), self.cols);
        let rows = cell_span(y, h, self.cell_h(), self.rows);
        for row in rows {
            for col in cols.clone() {
                self.set(col, row, RECT);
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, _color: Color) {
        let (cw, ch) = (self.cell_w(), self.cell_h());
        let cols = cell_span(x - radius, radius * 2.0, cw, self.cols);
        let rows = cell_span(y - radius, radius * 2.0, ch, self.rows);
        for row in rows {
            for col in cols.clone() {
                let cx = (col as f32 + 0.5) * cw;
                let cy = (row as f32 + 0.5) * ch;
                if (cx - x).powi(2) + (cy - y).powi(2) <= radius * radius {
                    self.set(col, row, CIRCLE);
                }
            }
        }
        // Small balls still show up
        if let Some((col, row)) = self.locate(x, y) {
            self.set(col, row, CIRCLE);
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, _color: Color, font_px: u32) {
        // Baseline at y; put the glyphs on the row through their middle
        let mid = y - font_px as f32 / 2.0;
        let Some((col, row)) = self.locate(x.max(0.0), mid.max(0.0)) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            self.set(col + i, row, ch);
        }
    }
}

impl fmt::Display for AsciiSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}+", "-".repeat(self.cols));
        writeln!(f, "{border}")?;
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "|{}|", row.iter().collect::<String>())?;
        }
        write!(f, "{border}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render;
    use crate::settings::Settings;
    use crate::sim::GameState;

    #[test]
    fn test_rect_cells() {
        let mut surface = AsciiSurface::new(100.0, 100.0, 10, 10);
        surface.fill_rect(0.0, 20.0, 10.0, 30.0, Color::WHITE);

        assert_eq!(surface.cell(0, 1), Some(' '));
        assert_eq!(surface.cell(0, 2), Some('#'));
        assert_eq!(surface.cell(0, 4), Some('#'));
        assert_eq!(surface.cell(0, 5), Some(' '));
        assert_eq!(surface.cell(1, 3), Some(' '));
    }

    #[test]
    fn test_rect_clipped() {
        let mut surface = AsciiSurface::new(100.0, 100.0, 10, 10);
        surface.fill_rect(-50.0, 95.0, 70.0, 40.0, Color::WHITE);
        assert_eq!(surface.row_text(9).as_deref(), Some("##        "));
        assert_eq!(surface.row_text(8).as_deref(), Some("          "));
    }

    #[test]
    fn test_tiny_circle_visible() {
        let mut surface = AsciiSurface::new(800.0, 400.0, 8, 4);
        surface.fill_circle(450.0, 250.0, 1.0, Color::WHITE);
        assert_eq!(surface.cell(4, 2), Some('o'));
    }

    #[test]
    fn test_off_grid_lookups() {
        let surface = AsciiSurface::new(100.0, 100.0, 4, 3);
        assert_eq!(surface.row_text(2).as_deref(), Some("    "));
        assert_eq!(surface.row_text(3), None);
        assert_eq!(surface.cell(4, 0), None);
        assert_eq!(surface.cell(0, 3), None);
    }

    #[test]
    fn test_clear() {
        let mut surface = AsciiSurface::new(100.0, 100.0, 4, 4);
        surface.fill_rect(0.0, 0.0, 100.0, 100.0, Color::WHITE);
        surface.clear();
        assert!((0..4).all(|r| surface.row_text(r).as_deref() == Some("    ")));
    }

    #[test]
    fn test_renders_game_frame() {
        let settings = Settings::default();
        let mut state = GameState::new(&settings, 1);
        state.left.score = 3;
        state.right.score = 9;

        let mut surface = AsciiSurface::new(800.0, 400.0, 80, 20);
        render(&state, &settings, &mut surface);

        // Paddles in the outer columns, ball in the middle
        assert_eq!(surface.cell(0, 10), Some('#'));
        assert_eq!(surface.cell(79, 10), Some('#'));
        assert_eq!(surface.cell(40, 10), Some('o'));
        // Scores a quarter of the way in from each side
        assert_eq!(surface.cell(20, 3), Some('3'));
        assert_eq!(surface.cell(60, 3), Some('9'));

        let frame = surface.to_string();
        assert_eq!(frame.lines().count(), 22);
        assert!(frame.starts_with("+----"));
    }
}
