//! Strategy selection and the single entry point used by drivers.
//!
//! [`Engine`] validates the board size and strategy configuration before
//! any search begins, seeds one random source for the whole run, draws the
//! initial board and hands it to the selected strategy.

use crate::board::Board;
use crate::error::{check_board_size, QueensError, Result};
use crate::ga::{GaConfig, GaRunner};
use crate::hill::{HillConfig, HillRunner};
use crate::random::{RandomConfig, RandomRunner};
use crate::sa::{SaConfig, SaRunner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Creates the random source for a run.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// The four interchangeable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Random,
    HillClimbing,
    Annealing,
    Genetic,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Random,
        Strategy::HillClimbing,
        Strategy::Annealing,
        Strategy::Genetic,
    ];

    /// Maps the driver menu numbers `1..=4` to strategies.
    pub fn from_menu(index: usize) -> Result<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| QueensError::UnknownStrategy(index.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::HillClimbing => "hill-climbing",
            Strategy::Annealing => "simulated-annealing",
            Strategy::Genetic => "genetic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = QueensError;

    /// Accepts a menu number or a name (`random`, `hill-climbing`,
    /// `simulated-annealing`, `genetic` and their short forms).
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Ok(index) = key.parse::<usize>() {
            return Self::from_menu(index);
        }
        match key.as_str() {
            "random" => Ok(Strategy::Random),
            "hill-climbing" | "hill" => Ok(Strategy::HillClimbing),
            "simulated-annealing" | "annealing" | "sa" => Ok(Strategy::Annealing),
            "genetic" | "genetic-algorithm" | "ga" => Ok(Strategy::Genetic),
            _ => Err(QueensError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Everything a run needs: board size, strategy, seed and per-strategy
/// parameters.
///
/// # Examples
///
/// ```
/// use u_queens::{EngineConfig, Strategy};
/// use u_queens::ga::GaConfig;
///
/// let config = EngineConfig::new(8, Strategy::Genetic)
///     .with_seed(42)
///     .with_ga(GaConfig::for_board_size(8).with_max_generations(500));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of queens, in `1..=100`.
    pub board_size: usize,

    pub strategy: Strategy,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    pub random: RandomConfig,
    pub hill: HillConfig,
    pub sa: SaConfig,

    /// GA parameters. `None` derives them from the board size.
    pub ga: Option<GaConfig>,
}

impl EngineConfig {
    pub fn new(board_size: usize, strategy: Strategy) -> Self {
        Self {
            board_size,
            strategy,
            seed: None,
            random: RandomConfig::default(),
            hill: HillConfig::default(),
            sa: SaConfig::default(),
            ga: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_random(mut self, config: RandomConfig) -> Self {
        self.random = config;
        self
    }

    pub fn with_hill(mut self, config: HillConfig) -> Self {
        self.hill = config;
        self
    }

    pub fn with_sa(mut self, config: SaConfig) -> Self {
        self.sa = config;
        self
    }

    pub fn with_ga(mut self, config: GaConfig) -> Self {
        self.ga = Some(config);
        self
    }

    /// GA parameters in effect for this run.
    pub fn ga_config(&self) -> GaConfig {
        self.ga
            .clone()
            .unwrap_or_else(|| GaConfig::for_board_size(self.board_size))
    }

    /// Validates the board size and the selected strategy's parameters.
    pub fn validate(&self) -> Result<()> {
        check_board_size(self.board_size)?;
        match self.strategy {
            Strategy::Random => self.random.validate(),
            Strategy::HillClimbing => Ok(()),
            Strategy::Annealing => self.sa.validate(),
            Strategy::Genetic => self.ga_config().validate(),
        }
    }
}

/// Outcome of one engine run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub strategy: Strategy,

    /// Board the search started from. The GA seeds its own population and
    /// only uses this board's size.
    pub initial: Board,

    /// Final board: the local optimum, the frozen annealing state, the GA
    /// solution (or best child), or the last random sample.
    pub board: Board,

    /// Conflicts on `board`.
    pub conflicts: usize,

    /// Strategy-specific effort: resamples, accepted moves, neighbor
    /// draws or generations.
    pub iterations: usize,
}

impl SearchReport {
    pub fn is_solved(&self) -> bool {
        self.conflicts == 0
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_solved() { "solved" } else { "not solved" };
        writeln!(
            f,
            "{}: {} after {} iterations ({} conflicts)",
            self.strategy, status, self.iterations, self.conflicts
        )?;
        write!(f, "{}", self.board)
    }
}

/// Runs one strategy on one random board.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// # Errors
    /// Fails if `config` does not validate.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs with a random source seeded from the configuration.
    pub fn run(&self) -> Result<SearchReport> {
        let mut rng = create_rng(self.config.seed.unwrap_or_else(rand::random));
        self.run_with_rng(&mut rng)
    }

    /// Runs with a caller-supplied random source.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> Result<SearchReport> {
        let config = &self.config;
        let initial = Board::random(config.board_size, rng)?;

        info!(
            event = "run_start",
            strategy = config.strategy.name(),
            board_size = config.board_size,
            conflicts = initial.conflicts(),
        );

        let (board, iterations) = match config.strategy {
            Strategy::Random => {
                let result = RandomRunner::run(&initial, &config.random, rng)?;
                (result.board, result.iterations)
            }
            Strategy::HillClimbing => {
                let result = HillRunner::run(&initial, &config.hill, rng);
                (result.board, result.steps)
            }
            Strategy::Annealing => {
                let result = SaRunner::run(&initial, &config.sa, rng)?;
                (result.board, result.iterations)
            }
            Strategy::Genetic => {
                let result = GaRunner::run(config.board_size, &config.ga_config(), rng)?;
                (result.solution.unwrap_or(result.best), result.generations)
            }
        };

        let conflicts = board.conflicts();
        info!(
            event = "run_end",
            strategy = config.strategy.name(),
            iterations,
            conflicts,
            solved = conflicts == 0,
        );

        Ok(SearchReport {
            strategy: config.strategy,
            initial,
            board,
            conflicts,
            iterations,
        })
    }
}

/// Runs `strategy` on a random `board_size`-queen board.
///
/// # Errors
/// Fails if `board_size` is outside `1..=100`.
///
/// # Examples
///
/// ```
/// use u_queens::{run, Strategy};
///
/// let report = run(1, Strategy::HillClimbing).unwrap();
/// assert!(report.is_solved());
/// assert!(run(0, Strategy::Random).is_err());
/// ```
pub fn run(board_size: usize, strategy: Strategy) -> Result<SearchReport> {
    Engine::new(EngineConfig::new(board_size, strategy))?.run()
}
