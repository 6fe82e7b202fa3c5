use macroquad::prelude::*;

use crate::config::{MAX_SIDE, is_pickable};

/// Pixel side of one picker cell
pub const CELL: f32 = 20.0;

const CHOSEN: Color = Color::new(0.92, 0.25, 0.20, 0.6);
const HOVERED: Color = Color::new(1.0, 1.0, 1.0, 0.35);
const LOCKED: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// Grid of `MAX_SIDE` x `MAX_SIDE` cells. Pointing at cell (col, row)
/// previews a board of `row + 1` rows and `col + 1` columns; a click picks it.
#[derive(Clone, Debug)]
pub struct SizePicker {
    x: f32,
    y: f32,
    chosen: (usize, usize),
}

impl SizePicker {
    pub fn new(x: f32, y: f32, rows: usize, cols: usize) -> Self {
        Self {
            x,
            y,
            chosen: (rows, cols),
        }
    }

    /// Current size as (rows, cols)
    pub fn chosen(&self) -> (usize, usize) {
        self.chosen
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn side(&self) -> f32 {
        CELL * MAX_SIDE as f32
    }

    /// Clicks over the picker belong to it, not the board
    pub fn captures(&self, pos: (f32, f32)) -> bool {
        self.size_at(pos).is_some()
    }

    /// Size previewed at the point as (rows, cols), pickable or not
    pub fn size_at(&self, pos: (f32, f32)) -> Option<(usize, usize)> {
        let (dx, dy) = (pos.0 - self.x, pos.1 - self.y);
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        let (col, row) = ((dx / CELL) as usize, (dy / CELL) as usize);
        (col < MAX_SIDE && row < MAX_SIDE).then_some((row + 1, col + 1))
    }

    /// Handle a click at `pos`; returns the new size when it changed
    pub fn click(&mut self, pos: (f32, f32)) -> Option<(usize, usize)> {
        let size = self.size_at(pos).filter(|&(rows, cols)| is_pickable(rows, cols))?;
        if size == self.chosen {
            return None;
        }
        self.chosen = size;
        Some(size)
    }

    /// Feed this frame's mouse state
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
        if is_mouse_button_pressed(MouseButton::Left) {
            self.click(mouse_pos)
        } else {
            None
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let (rows, cols) = self.chosen;
        draw_text(&format!("Grid size: {rows}×{cols}"), self.x, self.y - 8.0, 16.0, GRAY);

        let hovered = self.size_at(mouse_pos);
        for row in 0..MAX_SIDE {
            for col in 0..MAX_SIDE {
                let (cx, cy) = (self.x + col as f32 * CELL, self.y + row as f32 * CELL);
                if !is_pickable(row + 1, col + 1) {
                    draw_rectangle(cx, cy, CELL, CELL, LOCKED);
                }
                if row < rows && col < cols {
                    draw_rectangle(cx, cy, CELL, CELL, CHOSEN);
                }
                if hovered.is_some_and(|(hr, hc)| row < hr && col < hc) {
                    draw_rectangle(cx, cy, CELL, CELL, HOVERED);
                }
                draw_rectangle_lines(cx, cy, CELL, CELL, 1.0, WHITE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centre(col: usize, row: usize) -> (f32, f32) {
        (
            10.0 + (col as f32 + 0.5) * CELL,
            100.0 + (row as f32 + 0.5) * CELL,
        )
    }

    #[test]
    fn test_cell_maps_to_rows_by_cols() {
        let picker = SizePicker::new(10.0, 100.0, 4, 4);
        assert_eq!(picker.size_at(centre(5, 1)), Some((2, 6)));
        assert_eq!(picker.size_at(centre(0, 7)), Some((8, 1)));
        assert_eq!(picker.size_at((9.0, 110.0)), None);
        assert_eq!(picker.size_at((10.0 + picker.side() + 1.0, 110.0)), None);
    }

    #[test]
    fn test_click_picks_rectangular_sizes() {
        let mut picker = SizePicker::new(10.0, 100.0, 4, 4);
        assert_eq!(picker.click(centre(2, 1)), Some((2, 3)));
        assert_eq!(picker.click(centre(5, 3)), Some((4, 6)));
        assert_eq!(picker.chosen(), (4, 6));
    }

    #[test]
    fn test_click_ignores_unpickable_and_unchanged() {
        let mut picker = SizePicker::new(10.0, 100.0, 3, 5);
        assert_eq!(picker.click(centre(1, 1)), None);
        assert_eq!(picker.click(centre(0, 4)), None);
        assert_eq!(picker.click(centre(4, 2)), None);
        assert_eq!(picker.click((500.0, 500.0)), None);
        assert_eq!(picker.chosen(), (3, 5));
    }
}
