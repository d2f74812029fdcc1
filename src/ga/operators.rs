//! Crossover and mutation on boards.
//!
//! - [`reproduce`]: one-point crossover, cut drawn from `0..=N`
//! - [`mutate`]: one random column gets a random row
//!
//! Both keep every row inside `0..N`, so children are always valid boards.

use crate::board::Board;
use rand::Rng;

/// One-point crossover: `x[..c] ++ y[c..]` with `c` uniform in `0..=N`.
///
/// `c = 0` copies `y` and `c = N` copies `x`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn reproduce<R: Rng>(x: &Board, y: &Board, rng: &mut R) -> Board {
    let n = x.len();
    assert_eq!(n, y.len(), "parents must have equal length");

    let cut = rng.random_range(0..=n);
    crossover_at(x, y, cut)
}

/// Crossover at a fixed cut point.
pub fn crossover_at(x: &Board, y: &Board, cut: usize) -> Board {
    let rows = x.rows()[..cut]
        .iter()
        .chain(&y.rows()[cut..])
        .copied()
        .collect();
    Board::from_rows_unchecked(rows)
}

/// Moves the queen in one uniformly chosen column to a uniformly chosen row.
///
/// The new row may equal the old one.
pub fn mutate<R: Rng>(board: &mut Board, rng: &mut R) {
    let n = board.len();
    let column = rng.random_range(0..n);
    board.place(column, rng.random_range(0..n));
}
