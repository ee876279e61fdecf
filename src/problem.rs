//! # Problem Trait
//!
//! The `Problem` trait is the interface between the genetic algorithm and the
//! objective being minimized. A problem exposes its box bounds and evaluates
//! decision vectors into fitness vectors.
//!
//! ## Example
//!
//! ```rust
//! use sga::problem::Problem;
//!
//! #[derive(Debug, Clone)]
//! struct Sphere {
//!     dim: usize,
//! }
//!
//! impl Problem for Sphere {
//!     fn bounds(&self) -> (Vec<f64>, Vec<f64>) {
//!         (vec![-5.0; self.dim], vec![5.0; self.dim])
//!     }
//!
//!     fn fitness(&self, x: &[f64]) -> Vec<f64> {
//!         vec![x.iter().map(|v| v * v).sum()]
//!     }
//! }
//!
//! let sphere = Sphere { dim: 3 };
//! assert_eq!(sphere.nx(), 3);
//! assert_eq!(sphere.nf(), 1);
//! assert_eq!(sphere.fitness(&[1.0, 2.0, 0.0]), vec![5.0]);
//! ```

use std::fmt::Debug;

/// An optimization problem: a box-bounded objective to be minimized.
///
/// Only `bounds` and `fitness` are required. The remaining methods describe
/// problem features the genetic algorithm checks for (objectives, constraints,
/// stochasticity) and have defaults matching a deterministic, unconstrained,
/// single-objective, purely continuous problem.
pub trait Problem: Debug {
    /// Lower and upper bounds, one pair per coordinate, with `lb[i] <= ub[i]`.
    fn bounds(&self) -> (Vec<f64>, Vec<f64>);

    /// Evaluates a decision vector. The first `nf()` entries are the objectives,
    /// followed by `nc()` constraint values.
    fn fitness(&self, x: &[f64]) -> Vec<f64>;

    /// Dimension of the decision vector.
    fn nx(&self) -> usize {
        self.bounds().0.len()
    }

    /// Number of trailing coordinates that are integers. `Sga` only evolves a
    /// population whose `int_dim` option equals this value.
    fn nix(&self) -> usize {
        0
    }

    /// Number of objectives.
    fn nf(&self) -> usize {
        1
    }

    /// Number of constraints.
    fn nc(&self) -> usize {
        0
    }

    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    /// Whether `fitness` depends on a seed set through [`set_seed`](Self::set_seed).
    fn is_stochastic(&self) -> bool {
        false
    }

    fn set_seed(&mut self, _seed: u32) {}
}

/// Integers contained in `[lb, ub]`, or `None` if the interval holds none.
pub(crate) fn integer_range(lb: f64, ub: f64) -> Option<(i64, i64)> {
    let low = lb.ceil();
    let high = ub.floor();
    if low.is_finite() && high.is_finite() && low <= high {
        Some((low as i64, high as i64))
    } else {
        None
    }
}
