//! Random resampling search.
//!
//! Baseline strategy: throw every queen onto a fresh random row until the
//! board is solved or the iteration cap is reached. Useful as a yardstick
//! for the other strategies rather than as a solver.

mod config;
mod runner;

pub use config::RandomConfig;
pub use runner::{RandomResult, RandomRunner};
