//! # SgaOptions
//!
//! The `SgaOptions` struct holds the validated configuration of the genetic
//! algorithm: generation count, operator probabilities and parameters, elitism,
//! the operator kinds, the size of the integer part of the chromosome, the seed
//! and the verbosity.
//!
//! Options are created through [`SgaOptions::builder`]. Operator kinds are given
//! by name and resolved once, at [`SgaOptionsBuilder::build`]; any out-of-range
//! value or unknown name makes `build` fail before an engine can exist.
//!
//! ## Example
//!
//! ```rust
//! use sga::evolution::options::SgaOptions;
//! use sga::crossover::CrossoverKind;
//!
//! let options = SgaOptions::builder()
//!     .num_generations(200)
//!     .cr(0.9)
//!     .crossover("sbx")
//!     .mutation("polynomial")
//!     .param_m(20.0)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! assert_eq!(options.get_crossover(), CrossoverKind::Sbx);
//!
//! // Unknown operator names are rejected, not defaulted
//! assert!(SgaOptions::builder().selection("roulette").build().is_err());
//! ```
//!
//! ## Defaults
//!
//! | parameter | default |
//! |---|---|
//! | `num_generations` | 1 |
//! | `cr` | 0.95 |
//! | `eta_c` | 10 |
//! | `m` | 0.02 |
//! | `param_m` | 0.5 |
//! | `elitism` | 5 |
//! | `param_s` | 5 |
//! | `mutation` | `"gaussian"` |
//! | `selection` | `"tournament"` |
//! | `crossover` | `"exponential"` |
//! | `int_dim` | 0 |
//! | `seed` | drawn from entropy |
//! | `verbosity` | 0 |

use crate::{
    crossover::CrossoverKind,
    error::{GeneticError, Result},
    mutation::MutationKind,
    selection::SelectionKind,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SgaOptionsBuilder"))]
#[derive(Debug, Clone, PartialEq)]
pub struct SgaOptions {
    num_generations: usize,
    cr: f64,
    eta_c: f64,
    m: f64,
    param_m: f64,
    elitism: usize,
    param_s: usize,
    mutation: MutationKind,
    selection: SelectionKind,
    crossover: CrossoverKind,
    int_dim: usize,
    seed: u64,
    verbosity: u32,
}

impl SgaOptions {
    /// Returns a builder for creating an `SgaOptions` instance.
    pub fn builder() -> SgaOptionsBuilder {
        SgaOptionsBuilder::default()
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    /// Crossover probability.
    pub fn get_cr(&self) -> f64 {
        self.cr
    }

    /// Distribution index of the SBX crossover.
    pub fn get_eta_c(&self) -> f64 {
        self.eta_c
    }

    /// Per-coordinate mutation probability.
    pub fn get_m(&self) -> f64 {
        self.m
    }

    /// Mutation width relative to the bounds, or the distribution index for
    /// polynomial mutation.
    pub fn get_param_m(&self) -> f64 {
        self.param_m
    }

    pub fn get_elitism(&self) -> usize {
        self.elitism
    }

    /// Tournament size, or truncation size for truncated selection.
    pub fn get_param_s(&self) -> usize {
        self.param_s
    }

    pub fn get_mutation(&self) -> MutationKind {
        self.mutation
    }

    pub fn get_selection(&self) -> SelectionKind {
        self.selection
    }

    pub fn get_crossover(&self) -> CrossoverKind {
        self.crossover
    }

    /// Number of trailing chromosome coordinates treated as integers.
    pub fn get_int_dim(&self) -> usize {
        self.int_dim
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    pub fn get_verbosity(&self) -> u32 {
        self.verbosity
    }
}

impl Default for SgaOptions {
    fn default() -> Self {
        Self {
            num_generations: 1,
            cr: 0.95,
            eta_c: 10.0,
            m: 0.02,
            param_m: 0.5,
            elitism: 5,
            param_s: 5,
            mutation: MutationKind::Gaussian,
            selection: SelectionKind::Tournament,
            crossover: CrossoverKind::Exponential,
            int_dim: 0,
            seed: rand::random(),
            verbosity: 0,
        }
    }
}

/// Builder for `SgaOptions`.
///
/// Provides a fluent interface for constructing `SgaOptions` instances.
/// Unset parameters take their default value.
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Default)]
pub struct SgaOptionsBuilder {
    num_generations: Option<usize>,
    cr: Option<f64>,
    eta_c: Option<f64>,
    m: Option<f64>,
    param_m: Option<f64>,
    elitism: Option<usize>,
    param_s: Option<usize>,
    mutation: Option<String>,
    selection: Option<String>,
    crossover: Option<String>,
    int_dim: Option<usize>,
    seed: Option<u64>,
    verbosity: Option<u32>,
}

impl SgaOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the crossover probability, in `[0, 1]`.
    pub fn cr(mut self, value: f64) -> Self {
        self.cr = Some(value);
        self
    }

    /// Sets the SBX distribution index, in `[1, 100)`.
    pub fn eta_c(mut self, value: f64) -> Self {
        self.eta_c = Some(value);
        self
    }

    /// Sets the mutation probability, in `[0, 1]`.
    pub fn m(mut self, value: f64) -> Self {
        self.m = Some(value);
        self
    }

    /// Sets the mutation parameter: in `[1, 100]` for polynomial mutation,
    /// in `[0, 1]` otherwise.
    pub fn param_m(mut self, value: f64) -> Self {
        self.param_m = Some(value);
        self
    }

    /// Sets the number of parents carried over to the next generation.
    pub fn elitism(mut self, value: usize) -> Self {
        self.elitism = Some(value);
        self
    }

    /// Sets the selection parameter, at least 1.
    pub fn param_s(mut self, value: usize) -> Self {
        self.param_s = Some(value);
        self
    }

    /// Sets the mutation kind: `"gaussian"`, `"uniform"` or `"polynomial"`.
    pub fn mutation(mut self, name: &str) -> Self {
        self.mutation = Some(name.to_string());
        self
    }

    /// Sets the selection kind: `"tournament"` or `"truncated"`.
    pub fn selection(mut self, name: &str) -> Self {
        self.selection = Some(name.to_string());
        self
    }

    /// Sets the crossover kind: `"exponential"`, `"binomial"`, `"single"` or `"sbx"`.
    pub fn crossover(mut self, name: &str) -> Self {
        self.crossover = Some(name.to_string());
        self
    }

    /// Sets the number of trailing integer coordinates.
    pub fn int_dim(mut self, value: usize) -> Self {
        self.int_dim = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn verbosity(mut self, value: u32) -> Self {
        self.verbosity = Some(value);
        self
    }

    /// Validates the parameters and builds the `SgaOptions` instance.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidArgument` if `cr` is not in `[0, 1]`, `eta_c` not in
    /// `[1, 100)`, `m` not in `[0, 1]`, `param_s` is 0, an operator name is unknown, or
    /// `param_m` is outside the range its mutation kind requires.
    pub fn build(self) -> Result<SgaOptions> {
        let defaults = SgaOptions::default();

        let cr = self.cr.unwrap_or(defaults.cr);
        if !(0.0..=1.0).contains(&cr) {
            return Err(GeneticError::InvalidArgument(format!(
                "The crossover probability must be in the [0,1] range, while a value of {} was detected",
                cr
            )));
        }

        let eta_c = self.eta_c.unwrap_or(defaults.eta_c);
        if !(1.0..100.0).contains(&eta_c) {
            return Err(GeneticError::InvalidArgument(format!(
                "The distribution index for SBX crossover must be in [1, 100[, while a value of {} was detected",
                eta_c
            )));
        }

        let m = self.m.unwrap_or(defaults.m);
        if !(0.0..=1.0).contains(&m) {
            return Err(GeneticError::InvalidArgument(format!(
                "The mutation probability must be in the [0,1] range, while a value of {} was detected",
                m
            )));
        }

        let param_s = self.param_s.unwrap_or(defaults.param_s);
        if param_s == 0 {
            return Err(GeneticError::InvalidArgument(
                "The selection parameter must be at least 1, while a value of 0 was detected"
                    .to_string(),
            ));
        }

        let mutation = match self.mutation {
            Some(name) => name.parse::<MutationKind>()?,
            None => defaults.mutation,
        };
        let selection = match self.selection {
            Some(name) => name.parse::<SelectionKind>()?,
            None => defaults.selection,
        };
        let crossover = match self.crossover {
            Some(name) => name.parse::<CrossoverKind>()?,
            None => defaults.crossover,
        };

        let param_m = self.param_m.unwrap_or(defaults.param_m);
        match mutation {
            MutationKind::Polynomial if !(1.0..=100.0).contains(&param_m) => {
                return Err(GeneticError::InvalidArgument(format!(
                    "Polynomial mutation was selected, the mutation parameter must be in [1, 100], while a value of {} was detected",
                    param_m
                )));
            }
            MutationKind::Gaussian | MutationKind::Uniform if !(0.0..=1.0).contains(&param_m) => {
                return Err(GeneticError::InvalidArgument(format!(
                    "The mutation parameter must be in [0,1], while a value of {} was detected",
                    param_m
                )));
            }
            _ => {}
        }

        Ok(SgaOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            cr,
            eta_c,
            m,
            param_m,
            elitism: self.elitism.unwrap_or(defaults.elitism),
            param_s,
            mutation,
            selection,
            crossover,
            int_dim: self.int_dim.unwrap_or(defaults.int_dim),
            seed: self.seed.unwrap_or(defaults.seed),
            verbosity: self.verbosity.unwrap_or(defaults.verbosity),
        })
    }
}

impl TryFrom<SgaOptionsBuilder> for SgaOptions {
    type Error = GeneticError;

    fn try_from(builder: SgaOptionsBuilder) -> Result<Self> {
        builder.build()
    }
}
