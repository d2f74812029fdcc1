//! Genetic Algorithm over whole boards.
//!
//! Each generation breeds a full replacement population: two parents are
//! chosen by selection (roulette wheel by default), combined by one-point
//! crossover, and the child is mutated with some probability. The run
//! stops at the first child with no conflicts.
//!
//! Unlike the local searches, nothing bounds the number of generations
//! this takes, and boards with no solution (N = 2, 3) never produce one.
//! [`GaConfig`] therefore carries a generation cap and an optional time
//! limit.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, selection, mutation rate, budgets
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Solution (if any), best board, statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
