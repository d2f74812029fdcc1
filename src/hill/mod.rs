//! Steepest-ascent hill climbing.
//!
//! Each step scans the full single-queen neighborhood, picks a uniformly
//! random minimum-conflict neighbor and moves there only if it strictly
//! improves the evaluation. The search stops at the first local optimum,
//! which may still have conflicts.

mod config;
mod runner;

pub use config::HillConfig;
pub use runner::{HillResult, HillRunner};
