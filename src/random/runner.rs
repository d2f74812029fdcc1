//! Random search execution loop.

use super::config::RandomConfig;
use crate::board::Board;
use crate::error::Result;
use rand::Rng;
use tracing::{debug, info};

/// Result of a random search run.
#[derive(Debug, Clone)]
pub struct RandomResult {
    /// The last board evaluated.
    pub board: Board,

    /// Conflicts on `board`.
    pub conflicts: usize,

    /// Number of unsolved boards evaluated before stopping.
    pub iterations: usize,
}

impl RandomResult {
    pub fn is_solved(&self) -> bool {
        self.conflicts == 0
    }
}

/// Executes random resampling search.
pub struct RandomRunner;

impl RandomRunner {
    /// Resamples `start` until it is solved or `max_iterations` is reached.
    ///
    /// The starting board counts as the first candidate; a board that is
    /// already solved is returned with zero iterations.
    pub fn run<R: Rng>(start: &Board, config: &RandomConfig, rng: &mut R) -> Result<RandomResult> {
        config.validate()?;

        let mut board = start.clone();
        let mut iterations = 0usize;

        info!(
            event = "search_start",
            strategy = "random",
            board_size = board.len(),
            score = board.score(),
        );

        while !board.is_solved() {
            iterations += 1;
            debug!(event = "iteration", iteration = iterations, score = board.score());
            if iterations >= config.max_iterations {
                break;
            }
            board.randomize(rng);
        }

        let conflicts = board.conflicts();
        info!(
            event = "search_end",
            strategy = "random",
            iterations,
            conflicts,
            solved = conflicts == 0,
        );

        Ok(RandomResult {
            board,
            conflicts,
            iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_queen_is_already_solved() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Board::new(vec![0]).unwrap();
        let result = RandomRunner::run(&start, &RandomConfig::default(), &mut rng).unwrap();
        assert!(result.is_solved());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_four_queens_usually_solved() {
        // 2 of the 256 boards are solutions; 1000 draws find one with
        // probability > 0.999.
        let mut rng = StdRng::seed_from_u64(42);
        let start = Board::random(4, &mut rng).unwrap();
        let result = RandomRunner::run(&start, &RandomConfig::default(), &mut rng).unwrap();
        assert!(result.is_solved());
        assert!(result.iterations < 1000);
    }

    #[test]
    fn test_eight_queens_respects_cap() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5 {
            let start = Board::random(8, &mut rng).unwrap();
            let result = RandomRunner::run(&start, &RandomConfig::default(), &mut rng).unwrap();
            assert!(result.iterations <= 1000);
            assert_eq!(result.is_solved(), result.conflicts == 0);
            if !result.is_solved() {
                assert_eq!(result.iterations, 1000);
            }
        }
    }

    #[test]
    fn test_unsolvable_board_exhausts_cap() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Board::random(3, &mut rng).unwrap();
        let config = RandomConfig::default().with_max_iterations(25);
        let result = RandomRunner::run(&start, &config, &mut rng).unwrap();
        assert!(!result.is_solved());
        assert_eq!(result.iterations, 25);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = Board::random(4, &mut rng).unwrap();
        let config = RandomConfig::default().with_max_iterations(0);
        assert!(RandomRunner::run(&start, &config, &mut rng).is_err());
    }
}
