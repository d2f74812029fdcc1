//! Single-queen-move neighborhood.
//!
//! A neighbor of a board differs from it in exactly one column. An
//! `N`-column board has `N·(N-1)` neighbors; a one-column board has none.

use crate::board::Board;
use rand::Rng;

/// Every board reachable by moving one queen within its column.
///
/// Ordered column-major, ascending row.
pub fn all_neighbors(board: &Board) -> Vec<Board> {
    let n = board.len();
    let mut neighbors = Vec::with_capacity(n * (n - 1));
    for column in 0..n {
        let current = board.row(column);
        for row in (0..n).filter(|&r| r != current) {
            neighbors.push(board.with_queen(column, row));
        }
    }
    neighbors
}

/// The neighbors with the fewest conflicts. Ties are all kept, in input order.
pub fn best_neighbors(neighbors: Vec<Board>) -> Vec<Board> {
    let mut best = Vec::new();
    let mut min_conflicts = usize::MAX;
    for neighbor in neighbors {
        let conflicts = neighbor.conflicts();
        if conflicts < min_conflicts {
            min_conflicts = conflicts;
            best.clear();
        }
        if conflicts == min_conflicts {
            best.push(neighbor);
        }
    }
    best
}

/// A minimum-conflict neighbor, or `None` for a one-column board.
///
/// Ties are broken uniformly at random, never by column order.
pub fn pick_best_neighbor<R: Rng>(board: &Board, rng: &mut R) -> Option<Board> {
    let mut best = best_neighbors(all_neighbors(board));
    if best.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..best.len());
    Some(best.swap_remove(idx))
}

/// A uniformly chosen element of [`all_neighbors`], or `None` for a one-column board.
///
/// Samples the column, then one of the `N-1` other rows, without building
/// the full neighborhood.
pub fn random_neighbor<R: Rng>(board: &Board, rng: &mut R) -> Option<Board> {
    let n = board.len();
    if n < 2 {
        return None;
    }
    let column = rng.random_range(0..n);
    let mut row = rng.random_range(0..n - 1);
    if row >= board.row(column) {
        row += 1;
    }
    Some(board.with_queen(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board(rows: &[usize]) -> Board {
        Board::new(rows.to_vec()).unwrap()
    }

    fn differing_columns(a: &Board, b: &Board) -> usize {
        a.rows().iter().zip(b.rows()).filter(|(x, y)| x != y).count()
    }

    #[test]
    fn test_all_neighbors_order() {
        let neighbors = all_neighbors(&board(&[0, 1]));
        let rows: Vec<&[usize]> = neighbors.iter().map(|b| b.rows()).collect();
        assert_eq!(rows, vec![&[1, 1][..], &[0, 0][..]]);
    }

    #[test]
    fn test_single_column_has_no_neighbors() {
        let b = board(&[0]);
        assert!(all_neighbors(&b).is_empty());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_best_neighbor(&b, &mut rng).is_none());
        assert!(random_neighbor(&b, &mut rng).is_none());
    }

    #[test]
    fn test_best_neighbors_keeps_ties() {
        // From [0,0,0,0] several single moves reach the same minimum.
        let best = best_neighbors(all_neighbors(&board(&[0, 0, 0, 0])));
        assert!(best.len() > 1);
        let min = best[0].conflicts();
        assert!(best.iter().all(|b| b.conflicts() == min));

        let all = all_neighbors(&board(&[0, 0, 0, 0]));
        assert!(all.iter().all(|b| b.conflicts() >= min));
        let expected = all.iter().filter(|b| b.conflicts() == min).count();
        assert_eq!(best.len(), expected);
    }

    #[test]
    fn test_best_neighbors_empty() {
        assert!(best_neighbors(Vec::new()).is_empty());
    }

    #[test]
    fn test_pick_best_neighbor_is_a_best_neighbor() {
        let b = board(&[2, 0, 3, 3, 1, 0]);
        let best = best_neighbors(all_neighbors(&b));
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let picked = pick_best_neighbor(&b, &mut rng).unwrap();
            assert!(best.contains(&picked));
        }
    }

    #[test]
    fn test_random_neighbor_covers_neighborhood() {
        let b = board(&[0, 1, 2]);
        let all = all_neighbors(&b);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = vec![false; all.len()];
        for _ in 0..2000 {
            let nb = random_neighbor(&b, &mut rng).unwrap();
            let idx = all.iter().position(|x| *x == nb).expect("not a neighbor");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "every neighbor should be drawn");
    }

    proptest! {
        #[test]
        fn prop_neighborhood_size_and_distance(rows in (1usize..=9).prop_flat_map(|n| prop::collection::vec(0..n, n))) {
            let b = Board::new(rows).unwrap();
            let n = b.len();
            let neighbors = all_neighbors(&b);
            prop_assert_eq!(neighbors.len(), n * (n - 1));
            for nb in &neighbors {
                prop_assert_eq!(differing_columns(&b, nb), 1);
            }
        }

        #[test]
        fn prop_random_neighbor_moves_one_queen(rows in (2usize..=9).prop_flat_map(|n| prop::collection::vec(0..n, n)), seed in any::<u64>()) {
            let b = Board::new(rows).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let nb = random_neighbor(&b, &mut rng).unwrap();
            prop_assert_eq!(differing_columns(&b, &nb), 1);
            prop_assert!(nb.rows().iter().all(|&r| r < b.len()));
        }
    }
}
