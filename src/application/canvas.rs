use crate::domain::Rect;

/// Drawing surface the engine's draw pass writes to.
///
/// Implementations own the source image; the engine only says which part of
/// it goes where.
pub trait TileCanvas {
    /// Draw region `source` of the image stretched into `target`
    fn draw_region(&mut self, source: Rect, target: Rect);

    /// Mark `target` as a tile the player can move
    fn highlight(&mut self, target: Rect);
}
