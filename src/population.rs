//! # Population
//!
//! A `Population` owns a problem together with an ordered list of decision
//! vectors and their fitness vectors. Every fitness it stores was computed by
//! the owned problem, and it counts how many evaluations were made.
//!
//! ## Example
//!
//! ```rust
//! use sga::population::Population;
//! use sga::problem::Problem;
//!
//! #[derive(Debug)]
//! struct Sphere;
//!
//! impl Problem for Sphere {
//!     fn bounds(&self) -> (Vec<f64>, Vec<f64>) {
//!         (vec![-1.0, -1.0], vec![1.0, 1.0])
//!     }
//!
//!     fn fitness(&self, x: &[f64]) -> Vec<f64> {
//!         vec![x.iter().map(|v| v * v).sum()]
//!     }
//! }
//!
//! let pop = Population::random(Sphere, 10, 42).unwrap();
//! assert_eq!(pop.len(), 10);
//! assert_eq!(pop.fevals(), 10);
//! ```

use crate::{
    error::{GeneticError, Result},
    fitness::less_than_f,
    problem::{integer_range, Problem},
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone)]
pub struct Population<P: Problem> {
    problem: P,
    x: Vec<Vec<f64>>,
    f: Vec<Vec<f64>>,
    fevals: u64,
}

impl<P: Problem> Population<P> {
    /// Creates an empty population for `problem`.
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            x: Vec::new(),
            f: Vec::new(),
            fevals: 0,
        }
    }

    /// Creates a population of `size` individuals drawn uniformly within the
    /// problem bounds. The trailing `problem.nix()` coordinates are drawn as integers.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are malformed or if an integer coordinate
    /// has no integer inside its bounds.
    pub fn random(problem: P, size: usize, seed: u64) -> Result<Self> {
        let (lb, ub) = problem.bounds();
        check_bounds(&lb, &ub)?;
        let nix = problem.nix();
        if nix > lb.len() {
            return Err(GeneticError::InvalidArgument(format!(
                "The integer dimension ({}) exceeds the problem dimension ({})",
                nix,
                lb.len()
            )));
        }
        let ncx = lb.len() - nix;

        let mut rng = RandomNumberGenerator::from_seed(seed);
        let mut pop = Self::new(problem);
        for _ in 0..size {
            let mut x = Vec::with_capacity(lb.len());
            for j in 0..lb.len() {
                if j < ncx {
                    x.push(rng.uniform(lb[j], ub[j]));
                } else {
                    let (low, high) = integer_range(lb[j], ub[j]).ok_or_else(|| {
                        GeneticError::InvalidArgument(format!(
                            "No integer lies within the bounds [{}, {}] of coordinate {}",
                            lb[j], ub[j], j
                        ))
                    })?;
                    x.push(rng.integer(low, high) as f64);
                }
            }
            pop.push(x)?;
        }
        Ok(pop)
    }

    /// Evaluates `x` and appends it to the population.
    pub fn push(&mut self, x: Vec<f64>) -> Result<()> {
        let f = self.evaluate(&x)?;
        self.x.push(x);
        self.f.push(f);
        Ok(())
    }

    /// Appends an individual with a known fitness, without evaluating it.
    pub fn push_xf(&mut self, x: Vec<f64>, f: Vec<f64>) -> Result<()> {
        self.check_xf(&x, &f)?;
        self.x.push(x);
        self.f.push(f);
        Ok(())
    }

    /// Replaces the individual at `idx`. The fitness is stored as given, no
    /// evaluation takes place.
    pub fn set_xf(&mut self, idx: usize, x: Vec<f64>, f: Vec<f64>) -> Result<()> {
        if idx >= self.x.len() {
            return Err(GeneticError::InvalidArgument(format!(
                "Index {} is out of range for a population of size {}",
                idx,
                self.x.len()
            )));
        }
        self.check_xf(&x, &f)?;
        self.x[idx] = x;
        self.f[idx] = f;
        Ok(())
    }

    /// Evaluates `x` with the owned problem and counts the evaluation.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` does not have the problem dimension, or if the
    /// problem returns a fitness vector that is empty or of the wrong length.
    pub fn evaluate(&mut self, x: &[f64]) -> Result<Vec<f64>> {
        let nx = self.problem.nx();
        if x.len() != nx {
            return Err(GeneticError::InvalidArgument(format!(
                "Decision vector of length {} passed to {}, which has dimension {}",
                x.len(),
                self.problem.name(),
                nx
            )));
        }
        let f = self.problem.fitness(x);
        self.fevals += 1;
        let expected = self.problem.nf() + self.problem.nc();
        if f.is_empty() || f.len() != expected {
            return Err(GeneticError::InvalidArgument(format!(
                "{} returned a fitness vector of length {}, expected {}",
                self.problem.name(),
                f.len(),
                expected
            )));
        }
        Ok(f)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[Vec<f64>] {
        &self.x
    }

    pub fn f(&self) -> &[Vec<f64>] {
        &self.f
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn problem_mut(&mut self) -> &mut P {
        &mut self.problem
    }

    /// Number of fitness evaluations made through this population.
    pub fn fevals(&self) -> u64 {
        self.fevals
    }

    /// Index of the individual with the best first objective, `None` when empty.
    ///
    /// Ties resolve to the lowest index.
    pub fn best_idx(&self) -> Option<usize> {
        (0..self.f.len()).reduce(|best, i| {
            if less_than_f(self.f[i][0], self.f[best][0]) {
                i
            } else {
                best
            }
        })
    }

    fn check_xf(&self, x: &[f64], f: &[f64]) -> Result<()> {
        let nx = self.problem.nx();
        let nf = self.problem.nf() + self.problem.nc();
        if f.is_empty() {
            return Err(GeneticError::InvalidArgument(
                "An individual needs at least one objective, the fitness vector is empty"
                    .to_string(),
            ));
        }
        if x.len() != nx || f.len() != nf {
            return Err(GeneticError::InvalidArgument(format!(
                "Individual of shape ({}, {}) does not match the problem shape ({}, {})",
                x.len(),
                f.len(),
                nx,
                nf
            )));
        }
        Ok(())
    }
}

/// Checks that the bounds have matching lengths and satisfy `lb <= ub`.
pub(crate) fn check_bounds(lb: &[f64], ub: &[f64]) -> Result<()> {
    if lb.len() != ub.len() {
        return Err(GeneticError::InvalidArgument(format!(
            "Lower bounds have length {} but upper bounds have length {}",
            lb.len(),
            ub.len()
        )));
    }
    if let Some(i) = (0..lb.len()).find(|&i| lb[i].is_nan() || ub[i].is_nan() || lb[i] > ub[i]) {
        return Err(GeneticError::InvalidArgument(format!(
            "Lower bound {} is not below upper bound {} at coordinate {}",
            lb[i], ub[i], i
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Linear {
        nix: usize,
    }

    impl Problem for Linear {
        fn bounds(&self) -> (Vec<f64>, Vec<f64>) {
            (vec![-2.0, -2.0, -3.5], vec![2.0, 2.0, 3.5])
        }

        fn fitness(&self, x: &[f64]) -> Vec<f64> {
            vec![x.iter().sum()]
        }

        fn nix(&self) -> usize {
            self.nix
        }
    }

    #[derive(Debug)]
    struct TwoObjectives;

    impl Problem for TwoObjectives {
        fn bounds(&self) -> (Vec<f64>, Vec<f64>) {
            (vec![0.0], vec![1.0])
        }

        fn fitness(&self, x: &[f64]) -> Vec<f64> {
            vec![x[0]]
        }

        fn nf(&self) -> usize {
            2
        }
    }

    #[test]
    fn test_random_population_within_bounds() {
        let pop = Population::random(Linear { nix: 1 }, 20, 1).unwrap();
        assert_eq!(pop.len(), 20);
        assert_eq!(pop.fevals(), 20);
        for (x, f) in pop.x().iter().zip(pop.f()) {
            assert!(x[0] >= -2.0 && x[0] < 2.0);
            assert!(x[1] >= -2.0 && x[1] < 2.0);
            assert!(x[2] >= -3.0 && x[2] <= 3.0);
            assert_eq!(x[2].fract(), 0.0);
            assert_eq!(f[0], x.iter().sum::<f64>());
        }
    }

    #[test]
    fn test_random_population_is_reproducible() {
        let a = Population::random(Linear { nix: 0 }, 5, 9).unwrap();
        let b = Population::random(Linear { nix: 0 }, 5, 9).unwrap();
        assert_eq!(a.x(), b.x());
    }

    #[test]
    fn test_set_xf_does_not_evaluate() {
        let mut pop = Population::random(Linear { nix: 0 }, 3, 2).unwrap();
        pop.set_xf(1, vec![0.0, 0.0, 0.0], vec![42.0]).unwrap();
        assert_eq!(pop.f()[1], vec![42.0]);
        assert_eq!(pop.fevals(), 3);

        assert!(pop.set_xf(3, vec![0.0, 0.0, 0.0], vec![0.0]).is_err());
        assert!(pop.set_xf(0, vec![0.0], vec![0.0]).is_err());
    }

    #[test]
    fn test_evaluate_checks_shapes() {
        let mut pop = Population::new(TwoObjectives);
        assert!(pop.push(vec![0.5]).is_err());

        let mut pop = Population::new(Linear { nix: 0 });
        assert!(pop.evaluate(&[1.0]).is_err());
        assert_eq!(pop.fevals(), 0);
    }

    #[derive(Debug)]
    struct NoObjective;

    impl Problem for NoObjective {
        fn bounds(&self) -> (Vec<f64>, Vec<f64>) {
            (vec![0.0], vec![1.0])
        }

        fn fitness(&self, _x: &[f64]) -> Vec<f64> {
            Vec::new()
        }

        fn nf(&self) -> usize {
            0
        }
    }

    #[test]
    fn test_empty_fitness_is_rejected() {
        let mut pop = Population::new(NoObjective);
        assert!(pop.push_xf(vec![0.5], vec![]).is_err());
        assert!(pop.push(vec![0.5]).is_err());
        assert!(Population::random(NoObjective, 2, 1).is_err());
        assert!(pop.is_empty());
        assert_eq!(pop.best_idx(), None);
    }

    #[test]
    fn test_best_idx() {
        let mut pop = Population::new(Linear { nix: 0 });
        assert_eq!(pop.best_idx(), None);
        pop.push_xf(vec![0.0; 3], vec![f64::NAN]).unwrap();
        pop.push_xf(vec![0.0; 3], vec![1.0]).unwrap();
        pop.push_xf(vec![0.0; 3], vec![-1.0]).unwrap();
        pop.push_xf(vec![0.0; 3], vec![-1.0]).unwrap();
        assert_eq!(pop.best_idx(), Some(2));
    }

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(&[0.0], &[1.0]).is_ok());
        assert!(check_bounds(&[0.0], &[0.0]).is_ok());
        assert!(check_bounds(&[1.0], &[0.0]).is_err());
        assert!(check_bounds(&[0.0, 1.0], &[1.0]).is_err());
        assert!(check_bounds(&[f64::NAN], &[1.0]).is_err());
    }
}
