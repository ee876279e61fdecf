use crate::{error::Result, fitness::sort_by_fitness};

use super::check_param_s;

/// Truncated selection.
///
/// Ranks the population best-first and assigns to offspring slot `i` the
/// individual of rank `i mod param_s`, so parents are drawn cyclically from the
/// best `param_s` individuals. NaN fitness ranks last.
///
/// # Examples
///
/// ```
/// use sga::selection::truncated_selection;
///
/// let fitness = vec![vec![0.5], vec![0.8], vec![0.3], vec![0.9], vec![0.1]];
/// let selected = truncated_selection(&fitness, 2).unwrap();
///
/// assert_eq!(selected, vec![4, 2, 4, 2, 4]);
/// ```
///
/// # Errors
///
/// Returns an error if `param_s` is 0 or larger than the population, or if a
/// fitness vector is empty.
pub fn truncated_selection(f: &[Vec<f64>], param_s: usize) -> Result<Vec<usize>> {
    check_param_s(f, param_s)?;

    let ranked = sort_by_fitness(f);
    Ok((0..f.len()).map(|i| ranked[i % param_s]).collect())
}
