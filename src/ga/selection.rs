//! Parent selection.
//!
//! Selection works on evaluation scores (`N(N-1)/2 - conflicts`), so
//! higher is better throughout.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_queens::ga::Selection;
///
/// let scores = [6, 4, 0, 5];
/// let mut rng = rand::rng();
/// let idx = Selection::Roulette.select(&scores, &mut rng);
/// assert_ne!(idx, 2); // zero weight is never drawn
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Draws a pivot in `[0, total)` and returns the first member whose
    /// cumulative score exceeds it. Members scoring 0 are never drawn
    /// unless every member scores 0, in which case selection is uniform.
    ///
    /// # Complexity
    /// O(n) per selection
    #[default]
    Roulette,

    /// Tournament selection: draw `k` members uniformly, keep the best.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Selection {
    /// Selects a parent index given each member's score.
    ///
    /// # Panics
    /// Panics if `scores` is empty.
    pub fn select<R: Rng>(&self, scores: &[usize], rng: &mut R) -> usize {
        assert!(!scores.is_empty(), "cannot select from empty population");

        match self {
            Selection::Roulette => roulette(scores, rng),
            Selection::Tournament(k) => tournament(scores, *k, rng),
        }
    }
}

fn roulette<R: Rng>(scores: &[usize], rng: &mut R) -> usize {
    let total: usize = scores.iter().sum();
    if total == 0 {
        return rng.random_range(0..scores.len());
    }

    let pivot = rng.random_range(0..total);
    let mut cumulative = 0;
    for (i, &score) in scores.iter().enumerate() {
        cumulative += score;
        if cumulative > pivot {
            return i;
        }
    }

    scores.len() - 1 // unreachable: cumulative reaches total > pivot
}

fn tournament<R: Rng>(scores: &[usize], k: usize, rng: &mut R) -> usize {
    let n = scores.len();
    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if scores[idx] > scores[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roulette_is_proportional() {
        let scores = [1, 3, 0, 6];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[Selection::Roulette.select(&scores, &mut rng)] += 1;
        }

        assert_eq!(counts[2], 0, "zero-score member must never be drawn");
        // Expected shares: 10%, 30%, 0%, 60%.
        assert!((800..1200).contains(&counts[0]), "{counts:?}");
        assert!((2700..3300).contains(&counts[1]), "{counts:?}");
        assert!((5600..6400).contains(&counts[3]), "{counts:?}");
    }

    #[test]
    fn test_roulette_all_zero_is_uniform() {
        let scores = [0, 0, 0, 0];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[Selection::Roulette.select(&scores, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let scores = [1, 2, 10, 3];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[Selection::Tournament(4).select(&scores, &mut rng)] += 1;
        }
        assert!(counts[2] > 6000, "expected best to dominate, got {counts:?}");
    }

    #[test]
    fn test_single_member() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(Selection::Roulette.select(&[5], &mut rng), 0);
        assert_eq!(Selection::Roulette.select(&[0], &mut rng), 0);
        assert_eq!(Selection::Tournament(3).select(&[5], &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        Selection::Roulette.select(&[], &mut rng);
    }
}
