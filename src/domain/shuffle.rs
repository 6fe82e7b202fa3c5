//! Random scrambling by legal moves.
//!
//! Every step performs one accepted move in a random direction, never the
//! reversal of the previous accepted move. Because only legal moves are made
//! the scrambled board is always solvable. The rule does not stop longer
//! cycles (left, up, right, down) from undoing work; the scramble is
//! intentionally that weak.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

use super::{Board, Direction, SwapOutcome};

/// What a single shuffle step did
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShuffleStep {
    /// One move was accepted
    Moved {
        direction: Direction,
        outcome: SwapOutcome,
    },
    /// The target count was already reached
    Done,
    /// No legal move other than the reversal exists (only on boards one
    /// cell wide), so the shuffle cannot continue
    Stalled,
}

/// Progress of a shuffle towards its number of accepted moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shuffle {
    target: u32,
    accepted: u32,
    last: Option<Direction>,
}

impl Shuffle {
    pub const fn new(target: u32) -> Self {
        Self {
            target,
            accepted: 0,
            last: None,
        }
    }

    pub const fn target(&self) -> u32 {
        self.target
    }

    pub const fn accepted(&self) -> u32 {
        self.accepted
    }

    /// Direction of the last accepted move
    pub const fn last(&self) -> Option<Direction> {
        self.last
    }

    pub const fn is_done(&self) -> bool {
        self.accepted >= self.target
    }

    /// Directions the next step may take: anything but the reversal of the
    /// last accepted move, restricted to moves the board allows.
    pub fn candidates(&self, board: &Board) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.last != Some(d.opposite()))
            .filter(|&d| board.can_move(d))
            .collect()
    }

    /// Perform one accepted move.
    ///
    /// Picking uniformly among the legal candidates gives the same
    /// distribution as drawing random directions until one succeeds, without
    /// the unbounded retry loop.
    pub fn step<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> ShuffleStep {
        if self.is_done() {
            return ShuffleStep::Done;
        }
        let candidates = self.candidates(board);
        let Some(&direction) = candidates.choose(rng) else {
            warn!(accepted = self.accepted, target = self.target, "shuffle stalled");
            return ShuffleStep::Stalled;
        };
        let Some(outcome) = board.move_direction(direction) else {
            return ShuffleStep::Stalled;
        };
        self.accepted += 1;
        self.last = Some(direction);
        debug!(%direction, accepted = self.accepted, "shuffle move");
        ShuffleStep::Moved { direction, outcome }
    }

    /// Step until done or stalled. Returns the accepted moves, in order.
    pub fn run<R: Rng + ?Sized>(&mut self, board: &mut Board, rng: &mut R) -> Vec<Direction> {
        let mut moves = Vec::with_capacity(self.target.saturating_sub(self.accepted) as usize);
        while let ShuffleStep::Moved { direction, .. } = self.step(board, rng) {
            moves.push(direction);
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GridDims, Size};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(rows: usize, cols: usize) -> Board {
        Board::build(
            GridDims::new(rows, cols).unwrap(),
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
        )
    }

    #[test]
    fn test_shuffle_accepts_exactly_target_moves() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut b = board(4, 4);
        let mut shuffle = Shuffle::new(50);
        let moves = shuffle.run(&mut b, &mut rng);
        assert_eq!(moves.len(), 50);
        assert_eq!(shuffle.accepted(), 50);
        assert!(shuffle.is_done());
        assert_eq!(shuffle.step(&mut b, &mut rng), ShuffleStep::Done);
    }

    #[test]
    fn test_shuffle_never_reverses_last_move() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut b = board(3, 5);
            let moves = Shuffle::new(200).run(&mut b, &mut rng);
            assert_eq!(moves.len(), 200);
            for pair in moves.windows(2) {
                assert_ne!(pair[1], pair[0].opposite(), "seed {seed}");
            }
        }
    }

    #[test]
    fn test_two_by_two_shuffle_cycles_around() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut b = board(2, 2);
        let moves = Shuffle::new(50).run(&mut b, &mut rng);
        assert_eq!(moves.len(), 50);
        for pair in moves.windows(2) {
            assert_ne!(pair[1], -pair[0]);
        }
    }

    #[test]
    fn test_candidates_exclude_reversal() {
        let mut b = board(3, 3);
        let mut shuffle = Shuffle::new(1);
        // hole at the corner can only take tiles from the right or below
        let mut first = shuffle.candidates(&b);
        first.sort_by_key(|d| d.to_string());
        assert_eq!(first, vec![Direction::Left, Direction::Up]);

        let mut rng = StdRng::seed_from_u64(3);
        let ShuffleStep::Moved { direction, .. } = shuffle.step(&mut b, &mut rng) else {
            panic!("expected a move");
        };
        assert!(!shuffle.candidates(&b).contains(&direction.opposite()));
    }

    #[test]
    fn test_single_row_stalls_at_edge() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut b = board(1, 3);
        let mut shuffle = Shuffle::new(10);
        let moves = shuffle.run(&mut b, &mut rng);
        // the hole walks to the far end and has nowhere left to go
        assert_eq!(moves, vec![Direction::Left, Direction::Left]);
        assert_eq!(shuffle.step(&mut b, &mut rng), ShuffleStep::Stalled);
    }

    #[test]
    fn test_zero_target_is_done_immediately() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut b = board(3, 3);
        assert_eq!(Shuffle::new(0).step(&mut b, &mut rng), ShuffleStep::Done);
        assert!(b.is_finished());
    }
}
