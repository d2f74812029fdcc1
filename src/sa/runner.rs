//! SA execution loop.

use super::config::SaConfig;
use crate::board::Board;
use crate::error::Result;
use crate::neighborhood::random_neighbor;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

const HISTORY_INTERVAL: usize = 100;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The board the walk was on when the schedule froze.
    pub board: Board,

    /// Conflicts remaining on `board`.
    pub conflicts: usize,

    /// Best board visited during the walk.
    pub best: Board,

    /// Conflicts on `best`.
    pub best_conflicts: usize,

    /// Total number of neighbor draws.
    pub iterations: usize,

    /// Temperature at the step the run stopped on.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best score sampled every 100 iterations, plus the final value.
    pub score_history: Vec<usize>,
}

impl SaResult {
    pub fn is_solved(&self) -> bool {
        self.conflicts == 0
    }
}

/// Executes Simulated Annealing over single-queen moves.
pub struct SaRunner;

impl SaRunner {
    /// Anneals from `start` until the cooling schedule freezes.
    ///
    /// # Errors
    /// Fails if `config` does not validate.
    pub fn run<R: Rng>(start: &Board, config: &SaConfig, rng: &mut R) -> Result<SaResult> {
        Self::run_with_cancel(start, config, rng, None)
    }

    /// Runs SA with an optional cancellation token, checked once per step.
    pub fn run_with_cancel<R: Rng>(
        start: &Board,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        config.validate()?;

        let optimum = start.max_score();
        let mut current = start.clone();
        let mut current_score = current.score();
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut t = 1usize;
        let mut temperature = config.cooling.temperature(t);
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;
        let mut score_history = vec![best_score];

        info!(
            event = "search_start",
            strategy = "simulated_annealing",
            board_size = start.len(),
            score = current_score,
        );

        while !config.cooling.is_frozen(temperature) {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_steps > 0 && iterations >= config.max_steps {
                break;
            }
            if config.stop_on_solution && current_score == optimum {
                break;
            }

            let Some(neighbor) = random_neighbor(&current, rng) else {
                break;
            };
            let neighbor_score = neighbor.score();
            let delta = neighbor_score as f64 - current_score as f64;

            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else {
                let probability = (delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                trace!(event = "step", step = t, temperature, delta, score = neighbor_score);
                current = neighbor;
                current_score = neighbor_score;
                accepted_moves += 1;

                if current_score > best_score {
                    best = current.clone();
                    best_score = current_score;
                }
            }

            iterations += 1;
            if iterations.is_multiple_of(HISTORY_INTERVAL) {
                debug!(event = "progress", iterations, temperature, score = current_score, best_score);
                score_history.push(best_score);
            }

            t += 1;
            temperature = config.cooling.temperature(t);
        }

        if score_history.last() != Some(&best_score) {
            score_history.push(best_score);
        }

        let conflicts = current.conflicts();
        info!(
            event = "search_end",
            strategy = "simulated_annealing",
            iterations,
            accepted_moves,
            conflicts,
            solved = conflicts == 0,
        );

        Ok(SaResult {
            best_conflicts: best.conflicts(),
            board: current,
            conflicts,
            best,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            score_history,
        })
    }
}
