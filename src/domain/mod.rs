mod animation;
mod board;
mod direction;
mod error;
mod geometry;
mod shuffle;
mod tile;

pub use animation::{AnimationQueue, SLIDE_FRAMES, Slide};
pub use board::{Board, SwapOutcome};
pub use direction::Direction;
pub use error::{LoadError, PuzzleError};
pub use geometry::{GridDims, GridPos, PixelPos, Rect, Size};
pub use shuffle::{Shuffle, ShuffleStep};
pub use tile::{Tile, TileId, are_neighbours};
