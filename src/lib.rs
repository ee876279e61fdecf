pub mod crossover;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod mutation;
pub mod population;
pub mod problem;
pub mod reinsertion;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, Result};
pub use evolution::{LogLine, Sga, SgaOptions, SgaOptionsBuilder};
pub use population::Population;
pub use problem::Problem;
