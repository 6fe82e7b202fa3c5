use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use super::{Notifier, TileCanvas};
use crate::domain::{
    Board, Direction, GridDims, LoadError, PuzzleError, Shuffle, ShuffleStep, Size, SwapOutcome,
};

/// Delay between shuffle moves, in seconds
pub const DEFAULT_SHUFFLE_DELAY: f32 = 0.1;

/// A running shuffle and the time since its last move.
#[derive(Clone, Copy, Debug)]
struct ShuffleTask {
    shuffle: Shuffle,
    elapsed: f32,
}

/// Puzzle is the engine the host talks to.
///
/// It owns the current board (absent until an image has loaded), rebuilds it
/// on resize or image load, turns swap outcomes into notifications and runs
/// the shuffle on its own timer. The host drives two independent cadences:
/// [`Puzzle::tick`] for the shuffle timer and [`Puzzle::advance_animations`]
/// plus [`Puzzle::draw`] once per frame.
pub struct Puzzle {
    dims: GridDims,
    viewport: Size,
    image: Option<Size>,
    board: Option<Board>,
    shuffle: Option<ShuffleTask>,
    shuffle_delay: f32,
    notifier: Notifier,
    rng: StdRng,
}

impl Puzzle {
    /// Create an engine with no image yet; the board is inert until
    /// [`Puzzle::load_image`] succeeds.
    pub fn new(dims: GridDims, viewport: Size) -> Self {
        Self {
            dims,
            viewport,
            image: None,
            board: None,
            shuffle: None,
            shuffle_delay: DEFAULT_SHUFFLE_DELAY,
            notifier: Notifier::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed seed for shuffling (builder pattern)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Seconds between shuffle moves (builder pattern)
    pub fn with_shuffle_delay(mut self, seconds: f32) -> Self {
        self.shuffle_delay = seconds.max(f32::EPSILON);
        self
    }

    pub fn on_finished(&mut self, callback: impl FnMut() + 'static) {
        self.notifier.set_on_finished(callback);
    }

    pub fn on_unfinished(&mut self, callback: impl FnMut() + 'static) {
        self.notifier.set_on_unfinished(callback);
    }

    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// False while there is no board
    pub fn is_finished(&self) -> bool {
        self.board.as_ref().is_some_and(Board::is_finished)
    }

    pub fn is_shuffling(&self) -> bool {
        self.shuffle.is_some()
    }

    /// Record a new canvas size. Takes effect on the next rebuild.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Change the grid size and rebuild. Invalid sizes leave everything as is.
    #[instrument(skip(self))]
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), PuzzleError> {
        self.dims = GridDims::new(rows, cols)?;
        self.rebuild();
        Ok(())
    }

    /// Deliver the outcome of an image load. Success rebuilds the board for
    /// the new image; failure leaves an inert board until the next success.
    #[instrument(skip_all)]
    pub fn load_image(&mut self, image: Result<Size, LoadError>) {
        self.notifier.notify(SwapOutcome::Unfinished);
        match image {
            Ok(size) => {
                self.image = Some(size);
                self.rebuild();
            }
            Err(err) => {
                warn!(%err, "image unavailable, board is inert");
                self.image = None;
                self.cancel_shuffle();
                self.board = None;
            }
        }
    }

    /// Slide a tile in `direction`. False at the board edge or without a board.
    #[instrument(skip(self))]
    pub fn move_direction(&mut self, direction: Direction) -> bool {
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        match board.move_direction(direction) {
            Some(outcome) => {
                self.notifier.notify(outcome);
                true
            }
            None => false,
        }
    }

    /// Slide the tile under a canvas point if it borders the hole
    pub fn move_tile(&mut self, x: f32, y: f32) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        if let Some(outcome) = board.move_at(x, y) {
            self.notifier.notify(outcome);
        }
    }

    /// Highlight the tile under a canvas point if it could move
    pub fn highlight_tile(&mut self, x: f32, y: f32) {
        if let Some(board) = self.board.as_mut() {
            board.highlight_at(x, y);
        }
    }

    /// Start shuffling with `moves` accepted moves, one per shuffle delay.
    /// Replaces a shuffle that is still running.
    #[instrument(skip(self))]
    pub fn shuffle(&mut self, moves: u32) {
        if self.board.is_none() {
            debug!("no board to shuffle");
            return;
        }
        self.shuffle = (moves > 0).then_some(ShuffleTask {
            shuffle: Shuffle::new(moves),
            elapsed: 0.0,
        });
    }

    /// Advance the shuffle timer by `delta_time` seconds, performing one
    /// move for every elapsed shuffle delay.
    pub fn tick(&mut self, delta_time: f32) {
        let Some(mut task) = self.shuffle.take() else {
            return;
        };
        let Some(board) = self.board.as_mut() else {
            return;
        };

        task.elapsed += delta_time;
        let mut stalled = false;
        while task.elapsed >= self.shuffle_delay {
            task.elapsed -= self.shuffle_delay;
            match task.shuffle.step(board, &mut self.rng) {
                ShuffleStep::Moved { outcome, .. } => self.notifier.notify(outcome),
                ShuffleStep::Done => break,
                ShuffleStep::Stalled => {
                    stalled = true;
                    break;
                }
            }
        }

        if task.shuffle.is_done() {
            info!(moves = task.shuffle.accepted(), "shuffle finished");
        } else if !stalled {
            self.shuffle = Some(task);
        }
    }

    /// Step every pending tile animation once. Call once per frame.
    pub fn advance_animations(&mut self) {
        if let Some(board) = self.board.as_mut() {
            board.advance_animations();
        }
    }

    /// Draw every visible tile at its current render position
    pub fn draw<C: TileCanvas + ?Sized>(&self, canvas: &mut C) {
        let Some(board) = self.board.as_ref() else {
            return;
        };
        let cell = board.cell_size();
        for tile in board.tiles().iter().filter(|tile| !tile.is_empty_slot()) {
            let target = tile.render_rect(cell);
            canvas.draw_region(tile.source(), target);
            if tile.is_highlighted() {
                canvas.highlight(target);
            }
        }
    }

    /// Replace every tile. Pending animations go with the old board and a
    /// running shuffle is cancelled.
    fn rebuild(&mut self) {
        self.cancel_shuffle();
        let Some(image) = self.image else {
            return;
        };
        self.board = Some(Board::build(self.dims, image, self.viewport));
        info!(
            rows = self.dims.rows(),
            cols = self.dims.cols(),
            "board rebuilt"
        );
    }

    fn cancel_shuffle(&mut self) {
        if self.shuffle.take().is_some() {
            debug!("shuffle cancelled");
        }
    }
}
