//! # Error Types
//!
//! This module defines the error type returned by the genetic algorithm.
//! Two kinds of failure exist:
//!
//! - `InvalidArgument`: a bad construction parameter, or a problem/population
//!   that the algorithm cannot handle (multi-objective, constrained, too small...).
//! - `Logic`: an internal invariant was broken. Seeing one is a bug.
//!
//! ## Examples
//!
//! ```rust
//! use sga::error::{GeneticError, Result};
//!
//! fn check_probability(p: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&p) {
//!         return Err(GeneticError::InvalidArgument(format!(
//!             "probability must be in [0, 1], got {}",
//!             p
//!         )));
//!     }
//!     Ok(p)
//! }
//!
//! assert!(check_probability(0.5).is_ok());
//! assert!(check_probability(1.5).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A parameter or an input population is not acceptable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal invariant was violated.
    #[error("Logic error: {0}")]
    Logic(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_message() {
        let err = GeneticError::InvalidArgument("cr out of range".to_string());
        assert_eq!(err.to_string(), "Invalid argument: cr out of range");

        let err = GeneticError::Logic("unreachable".to_string());
        assert_eq!(err.to_string(), "Logic error: unreachable");
    }
}
