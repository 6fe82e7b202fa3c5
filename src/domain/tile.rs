use super::{GridPos, PixelPos, Rect, Size};

/// Index of a tile in build order. Stable for the lifetime of a board and
/// independent of where the tile currently sits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TileId(pub(crate) usize);

impl TileId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Tile is one piece of the picture.
/// It keeps three coordinates apart: where it was cut from in the source image,
/// which grid cell it logically occupies, and where it is currently drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    source: Rect,
    pub(crate) board_pos: GridPos,
    pub(crate) render_pos: PixelPos,
    pub(crate) is_empty_slot: bool,
    pub(crate) is_highlighted: bool,
}

impl Tile {
    /// Create a tile resting on `board_pos`
    pub fn new(source: Rect, board_pos: GridPos, cell: Size) -> Self {
        Self {
            source,
            board_pos,
            render_pos: cell.origin_of(board_pos),
            is_empty_slot: false,
            is_highlighted: false,
        }
    }

    /// Region of the source image this tile shows
    pub const fn source(&self) -> Rect {
        self.source
    }

    pub const fn board_pos(&self) -> GridPos {
        self.board_pos
    }

    pub const fn render_pos(&self) -> PixelPos {
        self.render_pos
    }

    /// The hole is not drawn
    pub const fn is_empty_slot(&self) -> bool {
        self.is_empty_slot
    }

    pub const fn is_highlighted(&self) -> bool {
        self.is_highlighted
    }

    /// Where the tile is drawn this frame
    pub fn render_rect(&self, cell: Size) -> Rect {
        Rect::new(self.render_pos.x, self.render_pos.y, cell.width, cell.height)
    }
}

/// Two tiles are neighbours when they share a row and sit in adjacent columns,
/// or share a column and sit in adjacent rows. Diagonals never count, and an
/// absent tile has no neighbours.
pub fn are_neighbours(a: Option<&Tile>, b: Option<&Tile>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.board_pos.manhattan(b.board_pos) == 1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile_at(col: usize, row: usize) -> Tile {
        Tile::new(Rect::default(), GridPos::new(col, row), Size::new(10.0, 10.0))
    }

    #[test]
    fn test_new_tile_rests_on_its_cell() {
        let t = Tile::new(
            Rect::new(0.0, 0.0, 5.0, 5.0),
            GridPos::new(2, 1),
            Size::new(10.0, 20.0),
        );
        assert_eq!(t.render_pos(), PixelPos::new(20.0, 20.0));
        assert!(!t.is_empty_slot());
        assert!(!t.is_highlighted());
    }

    #[test]
    fn test_neighbours_share_an_edge() {
        let centre = tile_at(1, 1);
        for (c, r) in [(0, 1), (2, 1), (1, 0), (1, 2)] {
            assert!(are_neighbours(Some(&centre), Some(&tile_at(c, r))));
        }
    }

    #[test]
    fn test_diagonal_and_distant_are_not_neighbours() {
        let centre = tile_at(1, 1);
        for (c, r) in [(0, 0), (2, 2), (0, 2), (1, 1), (1, 3), (3, 1)] {
            assert!(!are_neighbours(Some(&centre), Some(&tile_at(c, r))));
        }
    }

    #[test]
    fn test_absent_tile_has_no_neighbours() {
        let t = tile_at(0, 0);
        assert!(!are_neighbours(None, Some(&t)));
        assert!(!are_neighbours(Some(&t), None));
        assert!(!are_neighbours(None, None));
    }

    #[test]
    fn test_neighbours_match_manhattan_distance_one() {
        let cells: Vec<(usize, usize)> = (0..4).flat_map(|r| (0..4).map(move |c| (c, r))).collect();
        for &(ac, ar) in &cells {
            for &(bc, br) in &cells {
                let expected = ac.abs_diff(bc) + ar.abs_diff(br) == 1;
                assert_eq!(
                    are_neighbours(Some(&tile_at(ac, ar)), Some(&tile_at(bc, br))),
                    expected
                );
            }
        }
    }
}
