//! # Selection
//!
//! Selection maps the fitness of a population to one parent index per
//! offspring slot. Two schemes are available:
//!
//! - [`SelectionKind::Tournament`]: each parent is the best of `param_s`
//!   individuals drawn without replacement.
//! - [`SelectionKind::Truncated`]: parents cycle through the best `param_s`
//!   individuals.
//!
//! Roulette wheel selection is deliberately absent: it is too sensitive to
//! fitness scaling to be a sensible default for arbitrary objectives.

pub mod tournament;
pub mod truncated;

use std::{fmt, str::FromStr};

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

pub use tournament::tournament_selection;
pub use truncated::truncated_selection;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    Tournament,
    Truncated,
}

impl SelectionKind {
    const NAMES: [(&'static str, SelectionKind); 2] = [
        ("tournament", SelectionKind::Tournament),
        ("truncated", SelectionKind::Truncated),
    ];

    pub fn name(self) -> &'static str {
        match self {
            SelectionKind::Tournament => "tournament",
            SelectionKind::Truncated => "truncated",
        }
    }

    /// Selects `f.len()` parent indices.
    ///
    /// # Errors
    ///
    /// Returns an error if `param_s` is 0 or larger than the population, or if a
    /// fitness vector is empty.
    pub fn select(
        self,
        f: &[Vec<f64>],
        param_s: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        match self {
            SelectionKind::Tournament => tournament_selection(f, param_s, rng),
            SelectionKind::Truncated => truncated_selection(f, param_s),
        }
    }
}

impl FromStr for SelectionKind {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        Self::NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|&(_, kind)| kind)
            .ok_or_else(|| {
                GeneticError::InvalidArgument(format!(
                    r#"The selection type must either be "tournament" or "truncated": unknown type requested: {}"#,
                    s
                ))
            })
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checks that a selection of size `param_s` can be made from the fitness vectors `f`,
/// each of which must hold at least the objective.
pub(crate) fn check_param_s(f: &[Vec<f64>], param_s: usize) -> Result<()> {
    if let Some(i) = f.iter().position(|fi| fi.is_empty()) {
        return Err(GeneticError::InvalidArgument(format!(
            "The fitness vector of individual {} is empty",
            i
        )));
    }
    let np = f.len();
    if param_s == 0 || param_s > np {
        return Err(GeneticError::InvalidArgument(format!(
            "The selection parameter must be in [1, {}], while a value of {} was detected",
            np, param_s
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("tournament".parse::<SelectionKind>().unwrap(), SelectionKind::Tournament);
        assert_eq!("truncated".parse::<SelectionKind>().unwrap(), SelectionKind::Truncated);
        assert!("roulette".parse::<SelectionKind>().is_err());
        assert!("Tournament".parse::<SelectionKind>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for kind in [SelectionKind::Tournament, SelectionKind::Truncated] {
            assert_eq!(kind.to_string().parse::<SelectionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_select_dispatch() {
        let f = vec![vec![3.0], vec![1.0], vec![2.0]];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selected = SelectionKind::Truncated.select(&f, 1, &mut rng).unwrap();
        assert_eq!(selected, vec![1, 1, 1]);

        let selected = SelectionKind::Tournament.select(&f, 3, &mut rng).unwrap();
        assert_eq!(selected, vec![1, 1, 1]);

        assert!(SelectionKind::Tournament.select(&f, 4, &mut rng).is_err());
        assert!(SelectionKind::Truncated.select(&f, 0, &mut rng).is_err());
    }

    #[test]
    fn test_select_rejects_empty_fitness() {
        let f = vec![vec![3.0], vec![], vec![2.0]];
        let mut rng = RandomNumberGenerator::from_seed(1);

        for kind in [SelectionKind::Tournament, SelectionKind::Truncated] {
            let err = kind.select(&f, 2, &mut rng).unwrap_err();
            assert!(matches!(err, GeneticError::InvalidArgument(msg) if msg.contains("empty")));
        }
    }
}
