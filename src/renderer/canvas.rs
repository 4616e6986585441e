//! Character-grid rasterizer
//!
//! Scales field-space shapes onto a grid of terminal cells. A cell is filled
//! when its center lies inside the shape; shapes that would cover no cell at
//! the current scale still get the cell under their center.

use glam::Vec2;

use super::shapes::Shape;

pub const EMPTY: char = ' ';
pub const FILL: char = '█';
pub const BALL: char = '●';

/// A cols × rows grid of characters
#[derive(Debug, Clone)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![EMPTY; cols as usize * rows as usize],
        }
    }

    #[inline]
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        *self = Self::new(cols, rows);
    }

    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    pub fn get(&self, col: u16, row: u16) -> Option<char> {
        (col < self.cols && row < self.rows)
            .then(|| self.cells[row as usize * self.cols as usize + col as usize])
    }

    fn set(&mut self, col: i32, row: i32, ch: char) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        self.cells[row as usize * self.cols as usize + col as usize] = ch;
    }

    /// Draw shapes in order, scaling a field of `field` pixels to the grid
    pub fn rasterize(&mut self, shapes: &[Shape], field: Vec2) {
        let scale = Vec2::new(self.cols as f32, self.rows as f32) / field;
        for shape in shapes {
            match shape {
                Shape::Rect { min, size } => self.fill_rect(*min * scale, (*min + *size) * scale),
                Shape::Circle { center, radius } => {
                    self.fill_ellipse(*center * scale, Vec2::splat(*radius) * scale)
                }
                Shape::Text { anchor, text } => self.print_centered(*anchor * scale, text),
            }
        }
    }

    fn fill_rect(&mut self, min: Vec2, max: Vec2) {
        let (c0, c1) = cell_span(min.x, max.x);
        let (r0, r1) = cell_span(min.y, max.y);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.set(col, row, FILL);
            }
        }
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2) {
        let (c0, c1) = cell_span(center.x - radii.x, center.x + radii.x);
        let (r0, r1) = cell_span(center.y - radii.y, center.y + radii.y);
        for row in r0..=r1 {
            for col in c0..=c1 {
                let d = (Vec2::new(col as f32, row as f32) + 0.5 - center) / radii;
                if d.length_squared() <= 1.0 {
                    self.set(col, row, BALL);
                }
            }
        }
        self.set(center.x.floor() as i32, center.y.floor() as i32, BALL);
    }

    fn print_centered(&mut self, anchor: Vec2, text: &str) {
        let len = text.chars().count() as i32;
        let start = anchor.x.round() as i32 - len / 2;
        let row = anchor.y.floor() as i32;
        for (i, ch) in text.chars().enumerate() {
            self.set(start + i as i32, row, ch);
        }
    }

    /// Grid contents, one string per row
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|row| row.iter().collect())
    }
}

/// Inclusive range of cells whose centers fall in `[lo, hi]`, never empty
fn cell_span(lo: f32, hi: f32) -> (i32, i32) {
    let first = (lo - 0.5).ceil() as i32;
    let last = (hi - 0.5).floor() as i32;
    if last < first {
        let mid = ((lo + hi) / 2.0).floor() as i32;
        (mid, mid)
    } else {
        (first, last)
    }
}
