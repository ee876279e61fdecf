use crate::{error::Result, fitness::less_than_f, rng::RandomNumberGenerator};

use super::check_param_s;

/// Tournament selection.
///
/// One tournament is run per offspring slot. The `param_s` contestants are drawn
/// without replacement with a partial Fisher-Yates shuffle of an index array that
/// persists across tournaments; the winner is the contestant with the lowest
/// fitness, the first one encountered on ties.
///
/// Smaller tournaments lead to more exploration, larger ones to more exploitation.
/// A tournament of size 1 is random selection.
///
/// # Examples
///
/// ```
/// use sga::rng::RandomNumberGenerator;
/// use sga::selection::tournament_selection;
///
/// let fitness = vec![vec![0.5], vec![0.8], vec![0.3], vec![0.9], vec![0.1]];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// // A tournament over the whole population always picks the best
/// let selected = tournament_selection(&fitness, 5, &mut rng).unwrap();
/// assert_eq!(selected, vec![4; 5]);
/// ```
///
/// # Errors
///
/// Returns an error if `param_s` is 0 or larger than the population, or if a
/// fitness vector is empty.
pub fn tournament_selection(
    f: &[Vec<f64>],
    param_s: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<usize>> {
    check_param_s(f, param_s)?;

    let np = f.len();
    let mut contestants: Vec<usize> = (0..np).collect();
    let mut selected = Vec::with_capacity(np);

    for _ in 0..np {
        for i in 0..param_s {
            let j = rng.index(i, np - 1);
            contestants.swap(i, j);
        }
        selected.push(run_tournament(f, &contestants[..param_s]));
    }

    Ok(selected)
}

/// Returns the contestant with the lowest fitness, the first one on ties.
fn run_tournament(f: &[Vec<f64>], contestants: &[usize]) -> usize {
    let mut winner = contestants[0];
    for &idx in &contestants[1..] {
        if less_than_f(f[idx][0], f[winner][0]) {
            winner = idx;
        }
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_selection() {
        let fitness = vec![vec![0.5], vec![0.8], vec![0.3], vec![0.9], vec![0.1]];
        let mut rng = RandomNumberGenerator::from_seed(42);

        let selected = tournament_selection(&fitness, 2, &mut rng).unwrap();

        assert_eq!(selected.len(), 5);
        assert!(selected.iter().all(|&i| i < 5));
        // The worst individual can never win a tournament of two distinct contestants
        assert!(!selected.contains(&3));
    }

    #[test]
    fn test_tournament_size_one_is_random_selection() {
        let fitness: Vec<Vec<f64>> = (0..4).map(|i| vec![i as f64]).collect();
        let mut rng = RandomNumberGenerator::from_seed(7);

        let mut seen = [false; 4];
        for _ in 0..50 {
            for i in tournament_selection(&fitness, 1, &mut rng).unwrap() {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_tournament_selection_is_reproducible() {
        let fitness = vec![vec![0.5], vec![0.8], vec![0.3], vec![0.9], vec![0.1]];

        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = RandomNumberGenerator::from_seed(42);

        assert_eq!(
            tournament_selection(&fitness, 3, &mut rng1).unwrap(),
            tournament_selection(&fitness, 3, &mut rng2).unwrap()
        );
    }

    #[test]
    fn test_contestant_array_persists_across_tournaments() {
        let fitness = vec![vec![0.5], vec![0.8], vec![0.3], vec![0.9], vec![0.1], vec![0.7]];
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut replay = rng.clone();

        let selected = tournament_selection(&fitness, 2, &mut rng).unwrap();
        assert_eq!(selected, vec![2, 0, 4, 5, 2, 5]);

        let mut contestants: Vec<usize> = (0..6).collect();
        for &winner in &selected {
            for i in 0..2 {
                let j = replay.index(i, 5);
                contestants.swap(i, j);
            }
            assert_eq!(run_tournament(&fitness, &contestants[..2]), winner);
        }
        assert_eq!(rng.next_u32(), replay.next_u32());
    }

    #[test]
    fn test_run_tournament_ties_and_nan() {
        let fitness = vec![vec![f64::NAN], vec![1.0], vec![1.0], vec![2.0]];

        assert_eq!(run_tournament(&fitness, &[0, 2, 1, 3]), 2);
        assert_eq!(run_tournament(&fitness, &[0, 3]), 3);
        assert_eq!(run_tournament(&fitness, &[0]), 0);
    }

    #[test]
    fn test_tournament_selection_invalid_size() {
        let fitness = vec![vec![0.5], vec![0.8]];
        let mut rng = RandomNumberGenerator::from_seed(1);

        assert!(tournament_selection(&fitness, 0, &mut rng).is_err());
        assert!(tournament_selection(&fitness, 3, &mut rng).is_err());
    }
}
