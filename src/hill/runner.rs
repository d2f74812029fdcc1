//! Hill climbing execution loop.

use super::config::HillConfig;
use crate::board::Board;
use crate::neighborhood::pick_best_neighbor;
use rand::Rng;
use tracing::{debug, info, trace};

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HillResult {
    /// The board the climb stopped on.
    pub board: Board,

    /// Conflicts remaining on `board`.
    pub conflicts: usize,

    /// Number of accepted moves.
    pub steps: usize,

    /// Whether the climb stopped because no neighbor improved
    /// (as opposed to hitting `max_steps`).
    pub local_optimum: bool,

    /// Evaluation after each accepted move, starting with the initial board.
    pub score_history: Vec<usize>,
}

impl HillResult {
    pub fn is_solved(&self) -> bool {
        self.conflicts == 0
    }
}

/// Executes steepest-ascent hill climbing.
pub struct HillRunner;

impl HillRunner {
    /// Climbs from `start` until no neighbor strictly improves.
    pub fn run<R: Rng>(start: &Board, config: &HillConfig, rng: &mut R) -> HillResult {
        let mut current = start.clone();
        let mut score_history = vec![current.score()];
        let mut steps = 0usize;
        let mut local_optimum = false;

        info!(
            event = "search_start",
            strategy = "hill_climbing",
            board_size = current.len(),
            score = current.score(),
        );

        loop {
            if config.max_steps > 0 && steps >= config.max_steps {
                debug!(event = "step_limit", steps);
                break;
            }

            match Self::step(&current, rng) {
                Some(next) => {
                    steps += 1;
                    trace!(event = "step", step = steps, score = next.score());
                    score_history.push(next.score());
                    current = next;
                }
                None => {
                    local_optimum = true;
                    break;
                }
            }
        }

        let conflicts = current.conflicts();
        info!(
            event = "search_end",
            strategy = "hill_climbing",
            steps,
            conflicts,
            solved = conflicts == 0,
        );

        HillResult {
            board: current,
            conflicts,
            steps,
            local_optimum,
            score_history,
        }
    }

    /// One climbing step: the chosen best neighbor if it strictly improves
    /// on `current`, otherwise `None` (a local optimum).
    pub fn step<R: Rng>(current: &Board, rng: &mut R) -> Option<Board> {
        let candidate = pick_best_neighbor(current, rng)?;
        if current.score() >= candidate.score() {
            return None;
        }
        Some(candidate)
    }
}
