//! Visual catch-up for swapped tiles.
//!
//! Swaps commit the logical grid state immediately. Each moved tile then gets
//! a [`Slide`] that walks its render position towards its new cell, one fixed
//! step per frame. The host decides when frames happen.

use super::{PixelPos, Tile, TileId};

/// Frames a slide takes from start to finish (a step of 0.05 per frame).
pub const SLIDE_FRAMES: u32 = 20;

/// One in-flight interpolation of a tile's render position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slide {
    tile: TileId,
    from: PixelPos,
    to: PixelPos,
    frame: u32,
}

impl Slide {
    pub const fn new(tile: TileId, from: PixelPos, to: PixelPos) -> Self {
        Self {
            tile,
            from,
            to,
            frame: 0,
        }
    }

    pub const fn tile(&self) -> TileId {
        self.tile
    }

    pub const fn target(&self) -> PixelPos {
        self.to
    }

    pub fn progress(&self) -> f32 {
        self.frame as f32 / SLIDE_FRAMES as f32
    }

    /// Step once. Returns the position to draw and whether the slide is done;
    /// the last step lands exactly on the target.
    pub fn advance(&mut self) -> (PixelPos, bool) {
        self.frame = (self.frame + 1).min(SLIDE_FRAMES);
        if self.frame >= SLIDE_FRAMES {
            (self.to, true)
        } else {
            (self.from.lerp(self.to, self.progress()), false)
        }
    }
}

/// Ordered set of pending slides, at most one per tile.
#[derive(Clone, Debug, Default)]
pub struct AnimationQueue {
    slides: Vec<Slide>,
}

impl AnimationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a slide. A tile that is still sliding is retargeted from `from`,
    /// which callers take from the tile's current render position.
    pub fn push(&mut self, tile: TileId, from: PixelPos, to: PixelPos) {
        self.slides.retain(|slide| slide.tile != tile);
        self.slides.push(Slide::new(tile, from, to));
    }

    /// Advance every pending slide by one frame and drop the finished ones.
    pub fn advance(&mut self, tiles: &mut [Tile]) {
        self.slides.retain_mut(|slide| {
            let (pos, done) = slide.advance();
            if let Some(tile) = tiles.get_mut(slide.tile.index()) {
                tile.render_pos = pos;
            }
            !done
        });
    }

    pub fn pending_for(&self, tile: TileId) -> Option<&Slide> {
        self.slides.iter().find(|slide| slide.tile == tile)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_idle(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn clear(&mut self) {
        self.slides.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GridPos, Rect, Size};

    fn in_segment(p: PixelPos, a: PixelPos, b: PixelPos) -> bool {
        p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
    }

    #[test]
    fn test_slide_converges_in_fixed_frames() {
        let from = PixelPos::new(0.0, 100.0);
        let to = PixelPos::new(100.0, 100.0);
        let mut slide = Slide::new(TileId(0), from, to);
        for frame in 1..SLIDE_FRAMES {
            let (pos, done) = slide.advance();
            assert!(!done, "finished early at frame {frame}");
            assert!(in_segment(pos, from, to));
        }
        let (pos, done) = slide.advance();
        assert!(done);
        assert_eq!(pos, to);
    }

    #[test]
    fn test_slide_is_monotonic() {
        let mut slide = Slide::new(TileId(0), PixelPos::new(75.0, 0.0), PixelPos::new(0.0, 0.0));
        let mut last = 75.0;
        loop {
            let (pos, done) = slide.advance();
            assert!(pos.x <= last);
            last = pos.x;
            if done {
                break;
            }
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn test_queue_writes_render_pos_and_drains() {
        let cell = Size::new(10.0, 10.0);
        let mut tiles = vec![Tile::new(Rect::default(), GridPos::new(0, 0), cell)];
        let mut queue = AnimationQueue::new();
        queue.push(TileId(0), PixelPos::new(0.0, 0.0), PixelPos::new(10.0, 0.0));

        queue.advance(&mut tiles);
        assert!(tiles[0].render_pos().x > 0.0);
        assert_eq!(queue.len(), 1);

        for _ in 1..SLIDE_FRAMES {
            queue.advance(&mut tiles);
        }
        assert!(queue.is_idle());
        assert_eq!(tiles[0].render_pos(), PixelPos::new(10.0, 0.0));
    }

    #[test]
    fn test_push_replaces_pending_slide_for_same_tile() {
        let mut queue = AnimationQueue::new();
        queue.push(TileId(3), PixelPos::new(0.0, 0.0), PixelPos::new(10.0, 0.0));
        queue.push(TileId(1), PixelPos::new(0.0, 0.0), PixelPos::new(0.0, 10.0));
        queue.push(TileId(3), PixelPos::new(5.0, 0.0), PixelPos::new(0.0, 0.0));
        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.pending_for(TileId(3)).map(Slide::target),
            Some(PixelPos::new(0.0, 0.0))
        );
    }
}
