//! Headless check of how well the shuffle scrambles boards of each size.
//!
//! Runs many independent shuffles in parallel and reports, per grid size,
//! how far tiles end up from home and whether any run broke the
//! no-reversal rule.

use std::time::Instant;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use slide_puzzle::{Board, GridDims, Size};
use slide_puzzle::domain::Shuffle;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shuffle_stats", about = "Measure shuffle quality across grid sizes")]
struct Args {
    /// Boards shuffled per grid size
    #[arg(long, default_value_t = 2000)]
    runs: u64,

    /// Accepted moves per shuffle
    #[arg(long, default_value_t = 50)]
    moves: u32,

    /// Largest square side to measure
    #[arg(long, default_value_t = 8)]
    max_side: usize,
}

struct RunStats {
    displacement: usize,
    misplaced: usize,
    reversals: usize,
}

fn shuffle_once(dims: GridDims, moves: u32, seed: u64) -> RunStats {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::build(dims, Size::new(1.0, 1.0), Size::new(1.0, 1.0));
    let history = Shuffle::new(moves).run(&mut board, &mut rng);

    let reversals = history
        .windows(2)
        .filter(|pair| pair[1] == pair[0].opposite())
        .count();
    let (displacement, misplaced) = board
        .tiles()
        .iter()
        .enumerate()
        .map(|(index, tile)| tile.board_pos().manhattan(dims.pos_of(index)))
        .fold((0, 0), |(sum, count), d| (sum + d, count + usize::from(d > 0)));

    RunStats { displacement, misplaced, reversals }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    println!("Shuffle quality: {} runs x {} moves", args.runs, args.moves);
    println!("{:>6} {:>14} {:>14} {:>10}", "grid", "mean distance", "mean misplaced", "reversals");

    for side in 3..=args.max_side.max(3) {
        let Ok(dims) = GridDims::new(side, side) else {
            continue;
        };
        let start = Instant::now();
        let runs: Vec<RunStats> = (0..args.runs)
            .into_par_iter()
            .map(|seed| shuffle_once(dims, args.moves, seed))
            .collect();

        let n = runs.len().max(1) as f64;
        let distance = runs.iter().map(|r| r.displacement).sum::<usize>() as f64 / n;
        let misplaced = runs.iter().map(|r| r.misplaced).sum::<usize>() as f64 / n;
        let reversals: usize = runs.iter().map(|r| r.reversals).sum();

        println!("{:>6} {:>14.2} {:>14.2} {:>10}", format!("{side}x{side}"), distance, misplaced, reversals);
        info!(side, elapsed_ms = start.elapsed().as_millis() as u64, "measured");
    }
}
