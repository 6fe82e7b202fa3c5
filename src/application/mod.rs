mod canvas;
mod notify;
mod puzzle;

pub use canvas::TileCanvas;
pub use notify::Notifier;
pub use puzzle::{DEFAULT_SHUFFLE_DELAY, Puzzle};
