//! Simulated Annealing (SA).
//!
//! Draws one random single-queen move per step. Improving moves are always
//! taken; the rest are taken with probability `exp(Δ/T)`, where `Δ ≤ 0` is
//! the change in evaluation and `T` follows a step-indexed cooling
//! schedule. The run ends when the schedule reaches zero, so SA always
//! terminates but may stop on a board that still has conflicts.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Russell & Norvig, *Artificial Intelligence: A Modern Approach*, §4.1.2

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
