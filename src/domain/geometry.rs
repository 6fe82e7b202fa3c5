use super::PuzzleError;

/// Logical cell on the board, addressed as (column, row).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct GridPos {
    pub col: usize,
    pub row: usize,
}

impl GridPos {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Shift by a signed offset. `None` when the result would leave the
    /// non-negative quadrant; the upper bounds are checked by [`GridDims`].
    pub fn offset(self, dc: isize, dr: isize) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add_signed(dc)?,
            row: self.row.checked_add_signed(dr)?,
        })
    }

    pub const fn manhattan(self, other: Self) -> usize {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

/// Continuous position in canvas pixels
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear blend towards `to`. The result is clamped to the segment's
    /// bounding box so float rounding never overshoots either end.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let blend = |a: f32, b: f32| (a + (b - a) * t).clamp(a.min(b), a.max(b));
        Self {
            x: blend(self.x, to.x),
            y: blend(self.y, to.y),
        }
    }
}

/// Width/height pair used for images, the viewport and cells alike.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixel origin of a grid cell when every cell has this size.
    pub fn origin_of(self, pos: GridPos) -> PixelPos {
        PixelPos::new(pos.col as f32 * self.width, pos.row as f32 * self.height)
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Inclusive on every edge, so a point on a shared border hits the
    /// first rectangle that is asked.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

/// Board dimensions. Both sides are at least one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GridDims {
    rows: usize,
    cols: usize,
}

impl GridDims {
    pub fn new(rows: usize, cols: usize) -> Result<Self, PuzzleError> {
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn contains(&self, pos: GridPos) -> bool {
        pos.col < self.cols && pos.row < self.rows
    }

    /// Row-major index of a cell
    pub const fn index_of(&self, pos: GridPos) -> usize {
        self.cols * pos.row + pos.col
    }

    /// Inverse of [`GridDims::index_of`]
    pub const fn pos_of(&self, index: usize) -> GridPos {
        GridPos::new(index % self.cols, index / self.cols)
    }

    /// Iterate every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| GridPos::new(col, row)))
    }
}
