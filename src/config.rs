//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use derive_more::{Display, Error, From};
use tracing_subscriber::EnvFilter;

use crate::domain::{GridDims, PuzzleError};

/// Largest side offered by the size picker
pub const MAX_SIDE: usize = 8;

/// Sizes the picker offers: both sides in `2..=MAX_SIDE`, except 2x2
pub const fn is_pickable(rows: usize, cols: usize) -> bool {
    rows >= 2 && rows <= MAX_SIDE && cols >= 2 && cols <= MAX_SIDE && !(rows == 2 && cols == 2)
}

/// Sliding-tile picture puzzle
#[derive(Parser, Debug, Clone)]
#[command(name = "slide_puzzle", version, long_about = None)]
pub struct Config {
    /// Number of tile rows
    #[arg(long, default_value_t = 4)]
    pub rows: usize,

    /// Number of tile columns
    #[arg(long, default_value_t = 4)]
    pub cols: usize,

    /// Pictures to play with; `N` cycles through them
    #[arg(short, long = "image", default_value = "img/hedgehog1.jpg")]
    pub images: Vec<PathBuf>,

    /// Accepted moves performed by one shuffle
    #[arg(long, default_value_t = 50)]
    pub shuffle_moves: u32,

    /// Delay between shuffle moves in milliseconds
    #[arg(long, default_value_t = 100)]
    pub shuffle_delay_ms: u64,

    /// Side of the square board area in pixels
    #[arg(long, default_value_t = 600.0)]
    pub board_size: f32,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log: String,
}

/// Configuration the game refuses to start with.
#[derive(Debug, Clone, PartialEq, Display, Error, From)]
pub enum ConfigError {
    #[display("{_0}")]
    #[from]
    Grid(#[error(source)] PuzzleError),

    /// A side outside the picker's range.
    #[display("grid sides must be between 2 and 8, got {rows}x{cols}")]
    OutOfRange { rows: usize, cols: usize },

    /// 2x2 is excluded by the size picker.
    #[display("a 2x2 grid is too small to play")]
    TooSmall,

    #[display("board size must be positive, got {_0}")]
    BoardSize(#[error(not(source))] f32),
}

impl Config {
    /// Grid dimensions, checked against the size picker rules
    pub fn dims(&self) -> Result<GridDims, ConfigError> {
        let (rows, cols) = (self.rows, self.cols);
        let dims = GridDims::new(rows, cols)?;
        if !(2..=MAX_SIDE).contains(&rows) || !(2..=MAX_SIDE).contains(&cols) {
            return Err(ConfigError::OutOfRange { rows, cols });
        }
        if rows == 2 && cols == 2 {
            return Err(ConfigError::TooSmall);
        }
        Ok(dims)
    }

    pub fn validate(&self) -> Result<GridDims, ConfigError> {
        if !(self.board_size > 0.0) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        self.dims()
    }

    pub fn shuffle_delay(&self) -> f32 {
        self.shuffle_delay_ms as f32 / 1000.0
    }

    /// Install the global tracing subscriber. RUST_LOG wins over `--log`.
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log)),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("slide_puzzle").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]);
        assert_eq!(config.dims(), Ok(GridDims::new(4, 4).unwrap()));
        assert_eq!(config.images, vec![PathBuf::from("img/hedgehog1.jpg")]);
        assert_eq!(config.shuffle_moves, 50);
        assert!((config.shuffle_delay() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_multiple_images() {
        let config = parse(&["-i", "a.png", "--image", "b.png"]);
        assert_eq!(config.images.len(), 2);
    }

    #[test]
    fn test_rejects_picker_violations() {
        assert_eq!(
            parse(&["--rows", "2", "--cols", "2"]).dims(),
            Err(ConfigError::TooSmall)
        );
        assert_eq!(
            parse(&["--rows", "9", "--cols", "3"]).dims(),
            Err(ConfigError::OutOfRange { rows: 9, cols: 3 })
        );
        assert!(matches!(
            parse(&["--rows", "0"]).dims(),
            Err(ConfigError::Grid(PuzzleError::InvalidDimensions { .. }))
        ));
        assert!(parse(&["--rows", "2", "--cols", "3"]).dims().is_ok());
    }

    #[test]
    fn test_dims_follow_picker_rule() {
        for rows in 0..=MAX_SIDE + 1 {
            for cols in 0..=MAX_SIDE + 1 {
                let config = parse(&["--rows", &rows.to_string(), "--cols", &cols.to_string()]);
                assert_eq!(config.dims().is_ok(), is_pickable(rows, cols), "{rows}x{cols}");
            }
        }
        assert!(!is_pickable(2, 2));
        assert!(is_pickable(2, 3));
    }

    #[test]
    fn test_rejects_non_positive_board() {
        assert!(matches!(
            parse(&["--board-size", "0"]).validate(),
            Err(ConfigError::BoardSize(_))
        ));
    }
}
