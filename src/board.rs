//! Board model and conflict evaluation.
//!
//! A [`Board`] holds exactly one queen per column; `rows[c]` is the row of
//! the queen in column `c`. Rows may repeat, since row and diagonal
//! conflicts are what the search strategies minimize.
//!
//! Evaluation is rescaled so every strategy maximizes:
//! `score = N(N-1)/2 - conflicts`, and a board is solved when the score
//! reaches [`max_score`].

use crate::error::{QueensError, Result, MAX_BOARD_SIZE};
use rand::Rng;

/// One queen per column, `rows[column] = row`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Builds a board from explicit rows.
    ///
    /// # Errors
    /// Fails if `rows` is empty or any row is `>= rows.len()`.
    pub fn new(rows: Vec<usize>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(QueensError::InvalidBoardSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        if let Some((column, &row)) = rows.iter().enumerate().find(|(_, &r)| r >= size) {
            return Err(QueensError::RowOutOfRange { column, row, size });
        }
        Ok(Self { rows })
    }

    /// Creates an `n`-column board with an independently uniform row per column.
    ///
    /// # Errors
    /// Fails if `n == 0`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(QueensError::InvalidBoardSize {
                size: n,
                max: MAX_BOARD_SIZE,
            });
        }
        let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
        Ok(Self { rows })
    }

    /// Number of columns (and rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the board has no columns. Never true for a board built by
    /// [`Board::new`] or [`Board::random`].
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn row(&self, column: usize) -> usize {
        self.rows[column]
    }

    /// Returns a copy with the queen in `column` moved to `row`.
    pub fn with_queen(&self, column: usize, row: usize) -> Self {
        debug_assert!(row < self.len());
        let mut rows = self.rows.clone();
        rows[column] = row;
        Self { rows }
    }

    /// Moves the queen in `column` to `row` in place.
    pub fn place(&mut self, column: usize, row: usize) {
        debug_assert!(row < self.len());
        self.rows[column] = row;
    }

    /// Resamples every column's row uniformly at random.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let n = self.len();
        for row in &mut self.rows {
            *row = rng.random_range(0..n);
        }
    }

    /// Mirror image across the vertical axis.
    pub fn reversed(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.reverse();
        Self { rows }
    }

    pub fn conflicts(&self) -> usize {
        count_conflicts(self)
    }

    pub fn score(&self) -> usize {
        evaluate(self)
    }

    pub fn max_score(&self) -> usize {
        max_score(self.len())
    }

    pub fn is_solved(&self) -> bool {
        self.conflicts() == 0
    }

    pub(crate) fn from_rows_unchecked(rows: Vec<usize>) -> Self {
        Self { rows }
    }
}

impl TryFrom<Vec<usize>> for Board {
    type Error = QueensError;

    fn try_from(rows: Vec<usize>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Board> for Vec<usize> {
    fn from(board: Board) -> Self {
        board.rows
    }
}

impl AsRef<[usize]> for Board {
    fn as_ref(&self) -> &[usize] {
        &self.rows
    }
}

/// Whether two queens attack each other: same column, row, or diagonal.
pub fn conflict_between(col_a: usize, row_a: usize, col_b: usize, row_b: usize) -> bool {
    col_a == col_b || row_a == row_b || col_a.abs_diff(col_b) == row_a.abs_diff(row_b)
}

/// Number of attacking pairs of queens. O(N²).
pub fn count_conflicts(board: &Board) -> usize {
    let rows = board.rows();
    let mut count = 0;
    for (i, &row_i) in rows.iter().enumerate() {
        for (j, &row_j) in rows.iter().enumerate().skip(i + 1) {
            if conflict_between(i, row_i, j, row_j) {
                count += 1;
            }
        }
    }
    count
}

/// Number of queen pairs on an `n`-column board, `n(n-1)/2`.
pub fn max_score(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Ascending objective: `max_score(N) - count_conflicts(board)`.
pub fn evaluate(board: &Board) -> usize {
    max_score(board.len()) - count_conflicts(board)
}

/// Whether the queen in `column` is attacked by any other queen.
pub fn queen_is_conflicted(board: &Board, column: usize) -> bool {
    let row = board.row(column);
    board
        .rows()
        .iter()
        .enumerate()
        .any(|(other, &other_row)| other != column && conflict_between(column, row, other, other_row))
}
