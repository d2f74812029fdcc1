//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → selection → crossover → mutation → check → replace.

use super::config::GaConfig;
use super::operators::{mutate, reproduce};
use crate::board::{max_score, Board};
use crate::error::Result;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The first zero-conflict child, if one was bred.
    pub solution: Option<Board>,

    /// Best board seen: the solution if found, otherwise the best member
    /// of any generation.
    pub best: Board,

    /// Conflicts on `best`.
    pub best_conflicts: usize,

    /// Number of generations bred (the solving generation included).
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run hit `time_limit_ms`.
    pub timed_out: bool,

    /// Best score at the start and after each completed generation.
    pub fitness_history: Vec<usize>,
}

impl GaResult {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use rand::SeedableRng;
/// use u_queens::ga::{GaConfig, GaRunner};
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let result = GaRunner::run(4, &GaConfig::default(), &mut rng).unwrap();
/// assert!(result.is_solved());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Evolves a random population of `board_size`-column boards.
    ///
    /// # Errors
    /// Fails if `board_size == 0` or `config` does not validate.
    pub fn run<R: Rng>(board_size: usize, config: &GaConfig, rng: &mut R) -> Result<GaResult> {
        Self::run_with_cancel(board_size, config, rng, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is set, the GA stops before the next generation and
    /// returns the best board found so far.
    pub fn run_with_cancel<R: Rng>(
        board_size: usize,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;

        let population = (0..config.population_size)
            .map(|_| Board::random(board_size, rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(evolve(population, config, rng, cancel))
    }
}

fn evolve<R: Rng>(
    mut population: Vec<Board>,
    config: &GaConfig,
    rng: &mut R,
    cancel: Option<Arc<AtomicBool>>,
) -> GaResult {
    let board_size = population[0].len();
    let optimum = max_score(board_size);
    let time_limit = config.time_limit_ms.map(Duration::from_millis);
    let started = Instant::now();

    let mut scores: Vec<usize> = population.iter().map(Board::score).collect();
    let fittest = fittest_index(&scores);
    let mut best = population[fittest].clone();
    let mut best_score = scores[fittest];
    let mut fitness_history = vec![best_score];

    let mut generations = 0usize;
    let mut solution = None;
    let mut cancelled = false;
    let mut timed_out = false;

    info!(
        event = "search_start",
        strategy = "genetic",
        board_size,
        population_size = config.population_size,
        score = best_score,
    );

    'evolve: loop {
        if config.max_generations > 0 && generations >= config.max_generations {
            break;
        }
        if let Some(ref flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }
        }
        if time_limit.is_some_and(|limit| started.elapsed() >= limit) {
            timed_out = true;
            break;
        }

        let mut next_gen = Vec::with_capacity(config.population_size);
        for _ in 0..config.population_size {
            let x = config.selection.select(&scores, rng);
            let y = config.selection.select(&scores, rng);
            let mut child = reproduce(&population[x], &population[y], rng);
            if rng.random_bool(config.mutation_rate) {
                mutate(&mut child, rng);
            }

            let child_score = child.score();
            if child_score == optimum {
                best = child.clone();
                best_score = child_score;
                generations += 1;
                solution = Some(child);
                break 'evolve;
            }
            if child_score > best_score {
                best = child.clone();
                best_score = child_score;
            }
            next_gen.push(child);
        }

        population = next_gen;
        scores = population.iter().map(Board::score).collect();
        generations += 1;
        fitness_history.push(best_score);

        debug!(
            event = "generation",
            generation = generations,
            best_score,
            generation_best = scores[fittest_index(&scores)],
        );
    }

    let best_conflicts = optimum - best_score;
    info!(
        event = "search_end",
        strategy = "genetic",
        generations,
        best_conflicts,
        solved = solution.is_some(),
        cancelled,
        timed_out,
    );

    GaResult {
        solution,
        best,
        best_conflicts,
        generations,
        cancelled,
        timed_out,
        fitness_history,
    }
}

/// Index of the highest score; the first one on ties.
fn fittest_index(scores: &[usize]) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if s > scores[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Selection;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_queen_solved_in_first_generation() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = GaRunner::run(1, &GaConfig::default(), &mut rng).unwrap();
        assert!(result.is_solved());
        assert_eq!(result.generations, 1);
        assert_eq!(result.best_conflicts, 0);
    }

    #[test]
    fn test_four_queens_solved() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5 {
            let result = GaRunner::run(4, &GaConfig::default(), &mut rng).unwrap();
            let solution = result.solution.expect("4-queens should be solved");
            assert_eq!(solution.conflicts(), 0);
            assert_eq!(solution.len(), 4);
            assert_eq!(result.best, solution);
        }
    }

    #[test]
    fn test_six_queens_solved() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = GaConfig::for_board_size(6).with_max_generations(1_000_000);
        let result = GaRunner::run(6, &config, &mut rng).unwrap();
        assert!(result.is_solved());
    }

    #[test]
    fn test_unsolvable_board_hits_generation_cap() {
        // No placement of 3 queens on a 3x3 board is conflict-free.
        let mut rng = StdRng::seed_from_u64(42);
        let config = GaConfig::default().with_max_generations(50);
        let result = GaRunner::run(3, &config, &mut rng).unwrap();

        assert!(!result.is_solved());
        assert_eq!(result.generations, 50);
        assert_eq!(result.fitness_history.len(), 51);
        assert_eq!(result.best_conflicts, 1);
    }

    #[test]
    fn test_all_zero_scores_do_not_stall() {
        // Every 2x2 board has exactly one conflict, so every score is 0.
        let mut rng = StdRng::seed_from_u64(42);
        let config = GaConfig::default().with_max_generations(10);
        let result = GaRunner::run(2, &config, &mut rng).unwrap();
        assert!(!result.is_solved());
        assert_eq!(result.generations, 10);
    }

    #[test]
    fn test_fitness_history_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GaConfig::for_board_size(10).with_max_generations(30);
        let result = GaRunner::run(10, &config, &mut rng).unwrap();
        for w in result.fitness_history.windows(2) {
            assert!(w[1] >= w[0], "best-so-far must not decrease: {w:?}");
        }
    }

    #[test]
    fn test_tournament_selection_solves() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GaConfig::for_board_size(5)
            .with_selection(Selection::Tournament(3))
            .with_max_generations(0);
        let result = GaRunner::run(5, &config, &mut rng).unwrap();
        assert!(result.is_solved());
    }

    #[test]
    fn test_time_limit() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = GaConfig::default()
            .with_max_generations(0)
            .with_time_limit_ms(20);
        let result = GaRunner::run(3, &config, &mut rng).unwrap();
        assert!(result.timed_out);
        assert!(!result.is_solved());
    }

    #[test]
    fn test_cancellation() {
        let mut rng = StdRng::seed_from_u64(42);
        let cancel = Arc::new(AtomicBool::new(true));
        let config = GaConfig::default().with_max_generations(0);
        let result = GaRunner::run_with_cancel(3, &config, &mut rng, Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
    }

    #[test]
    fn test_invalid_input() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(GaRunner::run(0, &GaConfig::default(), &mut rng).is_err());
        let config = GaConfig::default().with_population_size(1);
        assert!(GaRunner::run(4, &config, &mut rng).is_err());
    }

    #[test]
    fn test_reproducible_with_seed() {
        let config = GaConfig::default();
        let a = GaRunner::run(5, &config, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = GaRunner::run(5, &config, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.generations, b.generations);
    }

    #[test]
    fn test_best_is_solution_when_initial_population_is_solved() {
        // Both 4-queens solutions; the fittest initial member is the first.
        let population = vec![
            Board::new(vec![2, 0, 3, 1]).unwrap(),
            Board::new(vec![1, 3, 0, 2]).unwrap(),
        ];
        let config = GaConfig::default()
            .with_mutation_rate(0.0)
            .with_max_generations(1_000);

        let mut saw_second = false;
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = evolve(population.clone(), &config, &mut rng, None);
            let solution = result.solution.expect("a parent is always reachable");
            assert_eq!(result.best, solution);
            assert_eq!(result.best_conflicts, 0);
            saw_second |= solution == population[1];
        }
        assert!(saw_second);
    }

    #[test]
    fn test_fittest_index_prefers_first_tie() {
        assert_eq!(fittest_index(&[1, 4, 4, 2]), 1);
        assert_eq!(fittest_index(&[0]), 0);
    }
}
