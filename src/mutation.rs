//! # Mutation
//!
//! Mutation perturbs offspring in place. Every gene is mutated independently
//! with probability `m`.
//!
//! On the continuous part of the chromosome:
//!
//! - `"uniform"`: the gene is redrawn uniformly within its bounds.
//! - `"gaussian"`: the gene moves by `param_m * (ub - lb) * N(0, 1)`. A gene that
//!   lands outside its bounds is redrawn uniformly within them.
//! - `"polynomial"`: Deb's bounded polynomial mutation, `param_m` being the
//!   distribution index.
//!
//! Integer genes, the trailing `int_dim` ones, are redrawn uniformly among the
//! integers within their bounds whatever the kind. Genes with equal lower and
//! upper bounds never change.

use std::{fmt, str::FromStr};

use crate::{
    error::{GeneticError, Result},
    evolution::options::SgaOptions,
    problem::integer_range,
    rng::RandomNumberGenerator,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Gaussian,
    Uniform,
    Polynomial,
}

impl MutationKind {
    const NAMES: [(&'static str, MutationKind); 3] = [
        ("gaussian", MutationKind::Gaussian),
        ("uniform", MutationKind::Uniform),
        ("polynomial", MutationKind::Polynomial),
    ];

    pub fn name(self) -> &'static str {
        match self {
            MutationKind::Gaussian => "gaussian",
            MutationKind::Uniform => "uniform",
            MutationKind::Polynomial => "polynomial",
        }
    }
}

impl FromStr for MutationKind {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        Self::NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, kind)| kind)
            .ok_or_else(|| {
                GeneticError::InvalidArgument(format!(
                    r#"The mutation type must either be "gaussian" or "uniform" or "polynomial": unknown type requested: {}"#,
                    s
                ))
            })
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured mutation operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub kind: MutationKind,
    /// Per-gene mutation probability.
    pub m: f64,
    /// Relative width for gaussian mutation, distribution index for polynomial mutation.
    pub param_m: f64,
    /// Number of trailing integer genes.
    pub int_dim: usize,
}

impl Mutation {
    pub fn from_options(options: &SgaOptions) -> Self {
        Self {
            kind: options.get_mutation(),
            m: options.get_m(),
            param_m: options.get_param_m(),
            int_dim: options.get_int_dim(),
        }
    }

    /// Mutates every chromosome of `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if a chromosome does not match the bounds' dimension or if
    /// `int_dim` exceeds that dimension.
    pub fn apply(
        &self,
        x: &mut [Vec<f64>],
        lb: &[f64],
        ub: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let dim = lb.len();
        if self.int_dim > dim {
            return Err(GeneticError::InvalidArgument(format!(
                "The integer dimension ({}) exceeds the chromosome length ({})",
                self.int_dim, dim
            )));
        }
        if let Some(bad) = x.iter().find(|item| item.len() != dim) {
            return Err(GeneticError::InvalidArgument(format!(
                "Chromosome of length {} found, the bounds have dimension {}",
                bad.len(),
                dim
            )));
        }

        let dc = dim - self.int_dim;
        for chromosome in x.iter_mut() {
            for j in 0..dim {
                if rng.uniform01() >= self.m || lb[j] == ub[j] {
                    continue;
                }
                if j < dc {
                    chromosome[j] = self.mutate_gene(chromosome[j], lb[j], ub[j], rng);
                } else if let Some((low, high)) = integer_range(lb[j], ub[j]) {
                    chromosome[j] = rng.integer(low, high) as f64;
                }
            }
        }
        Ok(())
    }

    fn mutate_gene(&self, y: f64, lb: f64, ub: f64, rng: &mut RandomNumberGenerator) -> f64 {
        match self.kind {
            MutationKind::Uniform => rng.uniform(lb, ub),
            MutationKind::Gaussian => {
                let moved = y + self.param_m * (ub - lb) * rng.standard_normal();
                if moved < lb || moved > ub {
                    rng.uniform(lb, ub)
                } else {
                    moved
                }
            }
            MutationKind::Polynomial => polynomial(y, lb, ub, self.param_m, rng),
        }
    }
}

/// Deb's polynomial mutation of `y` within `[lb, ub]`, `lb < ub`, with
/// distribution index `eta_m`.
fn polynomial(y: f64, lb: f64, ub: f64, eta_m: f64, rng: &mut RandomNumberGenerator) -> f64 {
    let range = ub - lb;
    let delta1 = (y - lb) / range;
    let delta2 = (ub - y) / range;
    let mut_pow = 1.0 / (eta_m + 1.0);

    let u = rng.uniform01();
    let deltaq = if u < 0.5 {
        let xy = 1.0 - delta1;
        let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(eta_m + 1.0);
        val.powf(mut_pow) - 1.0
    } else {
        let xy = 1.0 - delta2;
        let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(eta_m + 1.0);
        1.0 - val.powf(mut_pow)
    };

    (y + deltaq * range).clamp(lb, ub)
}
