//! # Reinsertion
//!
//! Elitist reinsertion builds the next generation out of the current one and
//! its offspring. The `elitism` best parents are kept verbatim, the remaining
//! slots go to the best offspring and the worst offspring are discarded.

use crate::{
    error::{GeneticError, Result},
    fitness::sort_by_fitness,
};

/// Where an individual of the next generation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Parent(usize),
    Offspring(usize),
}

/// Plans the next generation.
///
/// Both groups are ranked by their first objective. Slot `i < elitism` gets the
/// parent of rank `i`, slot `i >= elitism` gets the offspring of rank
/// `i - elitism`. Ties keep the original order.
///
/// # Examples
///
/// ```
/// use sga::reinsertion::{elitist_reinsertion, Origin};
///
/// let parents = vec![vec![3.0], vec![1.0], vec![2.0]];
/// let offspring = vec![vec![0.5], vec![9.0], vec![0.1]];
///
/// let plan = elitist_reinsertion(&parents, &offspring, 1).unwrap();
/// assert_eq!(plan, vec![Origin::Parent(1), Origin::Offspring(2), Origin::Offspring(0)]);
/// ```
///
/// # Errors
///
/// Returns an error if the two groups differ in size or if `elitism` exceeds it.
pub fn elitist_reinsertion(
    parents: &[Vec<f64>],
    offspring: &[Vec<f64>],
    elitism: usize,
) -> Result<Vec<Origin>> {
    if parents.len() != offspring.len() {
        return Err(GeneticError::Logic(format!(
            "{} offspring were produced for {} parents",
            offspring.len(),
            parents.len()
        )));
    }
    if elitism > parents.len() {
        return Err(GeneticError::InvalidArgument(format!(
            "The elitism must be smaller than the population size, while a value of: {} was detected in a population of size: {}",
            elitism,
            parents.len()
        )));
    }

    let best_parents = sort_by_fitness(parents);
    let best_offspring = sort_by_fitness(offspring);

    let plan = best_parents[..elitism]
        .iter()
        .map(|&i| Origin::Parent(i))
        .chain(
            best_offspring[..parents.len() - elitism]
                .iter()
                .map(|&i| Origin::Offspring(i)),
        )
        .collect();
    Ok(plan)
}
