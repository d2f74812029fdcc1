//! Local-search engine for the N-Queens problem.
//!
//! Places N queens one per column on an N×N board and searches for a
//! placement where no two queens share a row or diagonal. Four
//! interchangeable strategies trade completeness for speed:
//!
//! - **Random search**: Resample the whole board until solved or out of tries.
//! - **Hill climbing**: Steepest ascent over single-queen moves; stops at
//!   the first local optimum.
//! - **Simulated Annealing (SA)**: Random single-queen moves, accepting
//!   worse ones with a probability that shrinks as the schedule cools.
//! - **Genetic Algorithm (GA)**: Roulette-wheel selection, one-point
//!   crossover and mutation over a population of boards.
//!
//! Every strategy maximizes the same evaluation, `N(N-1)/2 - conflicts`
//! (see [`board::evaluate`]), and takes its random source as a parameter
//! so a fixed seed reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use u_queens::{Engine, EngineConfig, Strategy};
//!
//! let engine = Engine::new(EngineConfig::new(8, Strategy::HillClimbing).with_seed(7)).unwrap();
//! let report = engine.run().unwrap();
//! println!("{report}");
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod ga;
pub mod hill;
pub mod neighborhood;
pub mod random;
pub mod render;
pub mod sa;

pub use board::Board;
pub use engine::{create_rng, run, Engine, EngineConfig, SearchReport, Strategy};
pub use error::{QueensError, Result};
