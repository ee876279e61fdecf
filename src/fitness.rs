//! # Fitness ordering
//!
//! Fitness values are minimized. NaN is treated as worse than any real number,
//! so a population containing failed evaluations still sorts deterministically.

use std::cmp::Ordering;

/// Returns `true` when `a` is strictly better (smaller) than `b`.
///
/// NaN compares as greater than any real, and two NaNs are not less than each other.
///
/// ```rust
/// use sga::fitness::less_than_f;
///
/// assert!(less_than_f(1.0, 2.0));
/// assert!(less_than_f(1e300, f64::NAN));
/// assert!(!less_than_f(f64::NAN, 0.0));
/// assert!(!less_than_f(f64::NAN, f64::NAN));
/// ```
pub fn less_than_f(a: f64, b: f64) -> bool {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a < b,
        (false, true) => true,
        (true, _) => false,
    }
}

/// Total-order adapter over [`less_than_f`] for use with `sort_by`.
pub fn compare_fitness(a: f64, b: f64) -> Ordering {
    if less_than_f(a, b) {
        Ordering::Less
    } else if less_than_f(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns the indices of `f` ranked best-first on the first objective.
///
/// The sort is stable: equal fitness values keep their population order.
///
/// # Panics
///
/// Panics if one of the fitness vectors is empty. `Population` never stores one.
pub fn sort_by_fitness(f: &[Vec<f64>]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..f.len()).collect();
    idx.sort_by(|&a, &b| compare_fitness(f[a][0], f[b][0]));
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_fitness_with_nan() {
        assert_eq!(compare_fitness(0.5, 0.3), Ordering::Greater);
        assert_eq!(compare_fitness(0.3, 0.3), Ordering::Equal);
        assert_eq!(compare_fitness(f64::NAN, 0.3), Ordering::Greater);
        assert_eq!(compare_fitness(0.3, f64::NAN), Ordering::Less);
        assert_eq!(compare_fitness(f64::NAN, f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_fitness() {
        let f = vec![vec![0.5], vec![f64::NAN], vec![0.3], vec![0.9], vec![0.3]];
        // NaN values should be sorted last, ties keep their order
        assert_eq!(sort_by_fitness(&f), vec![2, 4, 0, 3, 1]);
    }

    #[test]
    fn test_infinities() {
        assert!(less_than_f(f64::NEG_INFINITY, -1e308));
        assert!(less_than_f(f64::INFINITY, f64::NAN));
        assert!(!less_than_f(f64::INFINITY, f64::INFINITY));
    }
}
