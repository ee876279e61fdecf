//! # Crossover
//!
//! Crossover turns the selected parents into offspring, in place. Four schemes
//! are available:
//!
//! - `"exponential"`: from differential evolution. Starting at a random gene, the
//!   partner's genes are copied in while a uniform draw stays below `cr`.
//! - `"binomial"`: each gene is taken from the partner with probability `cr`,
//!   and at least one gene always is.
//! - `"single"`: the partner's genes are copied in after a random cut point.
//!   `cr` is not used.
//! - `"sbx"`: simulated binary crossover on disjoint parent pairs, with a
//!   two-point crossover on the integer part of the chromosome. See [`sbx`].
//!
//! The first three schemes pair every offspring with a random partner taken from
//! the population as it was before crossover started.

pub mod sbx;

use std::{fmt, str::FromStr};

use crate::{
    error::{GeneticError, Result},
    evolution::options::SgaOptions,
    rng::RandomNumberGenerator,
};

pub use sbx::SbxCrossover;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossoverKind {
    Exponential,
    Binomial,
    Single,
    Sbx,
}

impl CrossoverKind {
    const NAMES: [(&'static str, CrossoverKind); 4] = [
        ("exponential", CrossoverKind::Exponential),
        ("binomial", CrossoverKind::Binomial),
        ("sbx", CrossoverKind::Sbx),
        ("single", CrossoverKind::Single),
    ];

    pub fn name(self) -> &'static str {
        match self {
            CrossoverKind::Exponential => "exponential",
            CrossoverKind::Binomial => "binomial",
            CrossoverKind::Single => "single",
            CrossoverKind::Sbx => "sbx",
        }
    }
}

impl FromStr for CrossoverKind {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        Self::NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, kind)| kind)
            .ok_or_else(|| {
                GeneticError::InvalidArgument(format!(
                    r#"The crossover type must either be "exponential" or "binomial" or "sbx" or "single": unknown type requested: {}"#,
                    s
                ))
            })
    }
}

impl fmt::Display for CrossoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured crossover operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Crossover {
    pub kind: CrossoverKind,
    /// Crossover probability.
    pub cr: f64,
    /// SBX distribution index.
    pub eta_c: f64,
    /// Number of trailing integer genes.
    pub int_dim: usize,
}

impl Crossover {
    pub fn from_options(options: &SgaOptions) -> Self {
        Self {
            kind: options.get_crossover(),
            cr: options.get_cr(),
            eta_c: options.get_eta_c(),
            int_dim: options.get_int_dim(),
        }
    }

    /// Applies the crossover to the whole offspring array `x`.
    ///
    /// For SBX the array is shuffled and split into consecutive pairs, each pair
    /// being replaced by its two children. Otherwise every offspring is crossed
    /// with a partner drawn from a copy of `x` taken before any change.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` holds fewer than two vectors, if a vector does not
    /// match the bounds' dimension, if `int_dim` exceeds that dimension, or if SBX
    /// is asked to pair an odd number of vectors.
    pub fn apply(
        &self,
        x: &mut [Vec<f64>],
        lb: &[f64],
        ub: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let dim = lb.len();
        check_offspring(x, dim)?;
        if self.int_dim > dim {
            return Err(GeneticError::InvalidArgument(format!(
                "The integer dimension ({}) exceeds the chromosome length ({})",
                self.int_dim, dim
            )));
        }

        if self.kind == CrossoverKind::Sbx {
            if x.len() % 2 != 0 {
                return Err(GeneticError::InvalidArgument(format!(
                    "SBX crossover needs an even number of chromosomes, {} detected",
                    x.len()
                )));
            }
            let sbx = SbxCrossover {
                cr: self.cr,
                eta_c: self.eta_c,
                int_dim: self.int_dim,
            };
            rng.shuffle(x);
            for pair in x.chunks_exact_mut(2) {
                let (child1, child2) = sbx.crossover(&pair[0], &pair[1], lb, ub, rng);
                pair[0] = child1;
                pair[1] = child2;
            }
            return Ok(());
        }

        let np = x.len();
        let parents = x.to_vec();
        let mut all_idx: Vec<usize> = (0..np).collect();

        for i in 0..np {
            // The swap excludes slot i from the draw of this round only
            all_idx.swap(0, i);
            let partner = &parents[all_idx[rng.index(1, np - 1)]];
            let child = &mut x[i];

            match self.kind {
                CrossoverKind::Exponential => exponential(child, partner, self.cr, rng),
                CrossoverKind::Binomial => binomial(child, partner, self.cr, rng),
                CrossoverKind::Single => single_point(child, partner, rng),
                CrossoverKind::Sbx => {
                    return Err(GeneticError::Logic(
                        "SBX crossover reached the per-offspring crossover loop".to_string(),
                    ))
                }
            }
        }

        Ok(())
    }
}

/// Exponential crossover: copies a cyclic run of genes from `partner`, starting at
/// a random gene. The run goes on while a uniform draw is below `cr`, and never
/// exceeds the chromosome length.
///
/// # Panics
///
/// Panics if `child` is empty or `partner` is shorter than `child`.
pub fn exponential(child: &mut [f64], partner: &[f64], cr: f64, rng: &mut RandomNumberGenerator) {
    let dim = child.len();
    let mut n = rng.index(0, dim - 1);
    let mut copied = 0;
    loop {
        child[n] = partner[n];
        n = (n + 1) % dim;
        copied += 1;
        if rng.uniform01() >= cr || copied >= dim {
            break;
        }
    }
}

/// Binomial crossover: starting at a random gene, each gene comes from `partner`
/// with probability `cr`. The last gene visited is always copied, so at least one
/// gene changes.
///
/// # Panics
///
/// Panics if `child` is empty or `partner` is shorter than `child`.
pub fn binomial(child: &mut [f64], partner: &[f64], cr: f64, rng: &mut RandomNumberGenerator) {
    let dim = child.len();
    let mut n = rng.index(0, dim - 1);
    for trial in 0..dim {
        if rng.uniform01() < cr || trial + 1 == dim {
            child[n] = partner[n];
        }
        n = (n + 1) % dim;
    }
}

/// Single point crossover: genes from a random cut point in `[0, dim]` onward come
/// from `partner`.
///
/// # Panics
///
/// Panics if `partner` is shorter than `child`.
pub fn single_point(child: &mut [f64], partner: &[f64], rng: &mut RandomNumberGenerator) {
    let dim = child.len();
    let n = rng.index(0, dim);
    child[n..].copy_from_slice(&partner[n..dim]);
}

pub(crate) fn check_offspring(x: &[Vec<f64>], dim: usize) -> Result<()> {
    if x.len() < 2 {
        return Err(GeneticError::InvalidArgument(format!(
            "At least 2 chromosomes are needed, {} detected",
            x.len()
        )));
    }
    if dim == 0 {
        return Err(GeneticError::InvalidArgument(
            "Chromosomes must have at least one gene".to_string(),
        ));
    }
    if let Some(bad) = x.iter().find(|item| item.len() != dim) {
        return Err(GeneticError::InvalidArgument(format!(
            "Chromosome of length {} found, the bounds have dimension {}",
            bad.len(),
            dim
        )));
    }
    Ok(())
}
