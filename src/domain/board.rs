use tracing::debug;

use super::{
    AnimationQueue, Direction, GridDims, GridPos, Rect, Size, Tile, TileId, are_neighbours,
};

/// Result of the completion check that follows every swap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SwapOutcome {
    Finished,
    Unfinished,
}

/// Board owns the tiles of one puzzle build.
///
/// `tiles` is created once in row-major order and that order is the solved
/// arrangement: tile `k` belongs on cell `dims.pos_of(k)`. Swaps only rewrite
/// grid positions in place, never the order of the vector.
pub struct Board {
    dims: GridDims,
    tiles: Vec<Tile>,
    empty: TileId,
    cell_size: Size,
    animations: AnimationQueue,
}

impl Board {
    /// Cut an image of `image` pixels into `dims` tiles laid out on a canvas
    /// of `viewport` pixels. The first tile becomes the hole.
    pub fn build(dims: GridDims, image: Size, viewport: Size) -> Self {
        let fragment = Size::new(
            image.width / dims.cols() as f32,
            image.height / dims.rows() as f32,
        );
        let cell_size = Size::new(
            viewport.width / dims.cols() as f32,
            viewport.height / dims.rows() as f32,
        );

        let mut tiles: Vec<Tile> = dims
            .cells()
            .map(|pos| {
                let origin = fragment.origin_of(pos);
                let source = Rect::new(origin.x, origin.y, fragment.width, fragment.height);
                Tile::new(source, pos, cell_size)
            })
            .collect();

        let empty = TileId(0);
        tiles[empty.index()].is_empty_slot = true;

        Self {
            dims,
            tiles,
            empty,
            cell_size,
            animations: AnimationQueue::new(),
        }
    }

    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    pub const fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Tiles in build order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// `None` for an id from another build
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Identity of the tile playing the hole
    pub const fn empty(&self) -> TileId {
        self.empty
    }

    pub fn empty_tile(&self) -> &Tile {
        &self.tiles[self.empty.index()]
    }

    pub const fn animations(&self) -> &AnimationQueue {
        &self.animations
    }

    /// Tile currently occupying a grid cell
    pub fn tile_at_cell(&self, pos: GridPos) -> Option<TileId> {
        if !self.dims.contains(pos) {
            return None;
        }
        self.tiles
            .iter()
            .position(|tile| tile.board_pos == pos)
            .map(TileId)
    }

    /// First tile, in build order, whose drawn rectangle contains the point
    pub fn tile_at(&self, x: f32, y: f32) -> Option<TileId> {
        self.tiles
            .iter()
            .position(|tile| tile.render_rect(self.cell_size).contains(x, y))
            .map(TileId)
    }

    /// Tile that would slide into the hole for a move in `direction`
    pub fn neighbour_in(&self, direction: Direction) -> Option<TileId> {
        let (dc, dr) = direction.vacated_offset();
        let pos = self.empty_tile().board_pos.offset(dc, dr)?;
        self.tile_at_cell(pos)
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        self.neighbour_in(direction).is_some()
    }

    /// Slide the tile on the far side of the hole. `None` at the board edge.
    pub fn move_direction(&mut self, direction: Direction) -> Option<SwapOutcome> {
        let neighbour = self.neighbour_in(direction)?;
        Some(self.swap(self.empty, neighbour))
    }

    /// Slide the tile under a canvas point if it borders the hole.
    pub fn move_at(&mut self, x: f32, y: f32) -> Option<SwapOutcome> {
        let clicked = self.tile_at(x, y)?;
        if !are_neighbours(Some(self.empty_tile()), self.tile(clicked)) {
            return None;
        }
        Some(self.swap(self.empty, clicked))
    }

    /// Highlight the tile under the point when it could move. Returns the
    /// highlighted tile, if any.
    pub fn highlight_at(&mut self, x: f32, y: f32) -> Option<TileId> {
        self.clear_highlight();
        let hovered = self
            .tile_at(x, y)
            .filter(|&id| are_neighbours(Some(self.empty_tile()), self.tile(id)))?;
        self.tiles[hovered.index()].is_highlighted = true;
        Some(hovered)
    }

    pub fn clear_highlight(&mut self) {
        self.tiles.iter_mut().for_each(|tile| tile.is_highlighted = false);
    }

    /// True when every tile sits on the cell matching its build index
    pub fn is_finished(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, tile)| tile.board_pos == self.dims.pos_of(index))
    }

    /// Re-evaluate completion. A finished board reveals the hole tile so the
    /// picture is whole; otherwise the hole stays hidden.
    pub fn check_completion(&mut self) -> SwapOutcome {
        let finished = self.is_finished();
        self.tiles[self.empty.index()].is_empty_slot = !finished;
        if finished {
            SwapOutcome::Finished
        } else {
            SwapOutcome::Unfinished
        }
    }

    /// Advance every pending slide by one frame
    pub fn advance_animations(&mut self) {
        self.animations.advance(&mut self.tiles);
    }

    /// Exchange the grid cells of two tiles and queue their slides. Logical
    /// state is final when this returns; only the drawing lags behind.
    fn swap(&mut self, a: TileId, b: TileId) -> SwapOutcome {
        let pos_a = self.tiles[a.index()].board_pos;
        let pos_b = self.tiles[b.index()].board_pos;
        self.tiles[a.index()].board_pos = pos_b;
        self.tiles[b.index()].board_pos = pos_a;

        for (id, target) in [(a, pos_b), (b, pos_a)] {
            let from = self.tiles[id.index()].render_pos;
            self.animations
                .push(id, from, self.cell_size.origin_of(target));
        }

        let outcome = self.check_completion();
        debug!(?pos_a, ?pos_b, ?outcome, "swapped tiles");
        outcome
    }
}
