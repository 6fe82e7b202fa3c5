// Domain layer - tiles, board rules, animation, shuffle
pub mod domain;

// Application layer - the puzzle engine the host drives
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, Direction, GridDims, LoadError, PuzzleError, Size, Tile};
pub use application::{Puzzle, TileCanvas};
pub use config::Config;
