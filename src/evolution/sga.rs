use std::fmt;

use tracing::{debug, info, trace};

use super::{log::LogLine, options::SgaOptions};
use crate::{
    crossover::{Crossover, CrossoverKind},
    error::{GeneticError, Result},
    fitness::less_than_f,
    mutation::{Mutation, MutationKind},
    population::{check_bounds, Population},
    problem::Problem,
    reinsertion::{elitist_reinsertion, Origin},
    rng::RandomNumberGenerator,
    selection::SelectionKind,
};

/// A simple genetic algorithm for box-bounded, single-objective, unconstrained
/// problems, possibly with a trailing integer part.
///
/// Each generation selects parents, recombines and mutates them into offspring,
/// evaluates the offspring and keeps the `elitism` best parents together with the
/// best offspring. The engine owns its random number generator, so successive
/// calls to [`evolve`](Sga::evolve) continue the same random stream.
#[derive(Debug, Clone)]
pub struct Sga {
    options: SgaOptions,
    rng: RandomNumberGenerator,
    verbosity: u32,
    log: Vec<LogLine>,
}

impl Sga {
    pub fn new(options: SgaOptions) -> Self {
        Self {
            rng: RandomNumberGenerator::from_seed(options.get_seed()),
            verbosity: options.get_verbosity(),
            log: Vec::new(),
            options,
        }
    }

    /// Evolves `pop` for the configured number of generations.
    ///
    /// The population keeps its size. When the problem is stochastic, it is
    /// reseeded and the whole population re-evaluated at the start of every
    /// generation.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidArgument` if the problem has constraints or
    /// several objectives, if the population has fewer than 2 individuals or fewer
    /// than `elitism` or `param_s`, if SBX crossover is used on an odd-sized
    /// population, if `int_dim` exceeds the problem dimension or differs from
    /// `Problem::nix`, or if the bounds are malformed. A fitness vector of the wrong length makes the call fail as well.
    /// On failure the population is dropped, never returned half-evolved.
    pub fn evolve<P: Problem>(&mut self, mut pop: Population<P>) -> Result<Population<P>> {
        let (lb, ub) = self.validate(&pop)?;
        let np = pop.len();
        let num_generations = self.options.get_num_generations();
        if num_generations == 0 {
            return Ok(pop);
        }

        self.log.clear();
        debug!(
            problem = %pop.problem().name(),
            np,
            num_generations,
            seed = self.rng.seed(),
            "Starting evolution"
        );

        let fevals0 = pop.fevals();
        let mut best = pop.best_idx().map_or(f64::NAN, |i| pop.f()[i][0]);

        for gen in 1..=num_generations {
            self.generation(&mut pop, &lb, &ub)?;

            let current_best = pop.best_idx().map_or(f64::NAN, |i| pop.f()[i][0]);
            if less_than_f(current_best, best) {
                best = current_best;
            }
            trace!(gen, current_best, "Generation completed");

            if self.verbosity > 0 && (gen - 1) % self.verbosity as usize == 0 {
                let line = LogLine {
                    gen,
                    fevals: pop.fevals() - fevals0,
                    best,
                    current_best,
                };
                info!(
                    gen = line.gen,
                    fevals = line.fevals,
                    best = line.best,
                    current_best = line.current_best,
                    "{}",
                    self.name()
                );
                self.log.push(line);
            }
        }

        Ok(pop)
    }

    /// Runs one generation. Offspring are fully evaluated before any slot of
    /// `pop` is overwritten.
    fn generation<P: Problem>(
        &mut self,
        pop: &mut Population<P>,
        lb: &[f64],
        ub: &[f64],
    ) -> Result<()> {
        if pop.problem().is_stochastic() {
            let seed = self.rng.next_u32();
            pop.problem_mut().set_seed(seed);
            let x = pop.x().to_vec();
            let f = x
                .iter()
                .map(|xi| pop.evaluate(xi))
                .collect::<Result<Vec<_>>>()?;
            for (i, (xi, fi)) in x.into_iter().zip(f).enumerate() {
                pop.set_xf(i, xi, fi)?;
            }
        }

        let selected = self.options.get_selection().select(
            pop.f(),
            self.options.get_param_s(),
            &mut self.rng,
        )?;
        if selected.len() != pop.len() {
            return Err(GeneticError::Logic(format!(
                "{} parents were selected for a population of size {}",
                selected.len(),
                pop.len()
            )));
        }
        let mut xnew: Vec<Vec<f64>> = selected.iter().map(|&i| pop.x()[i].clone()).collect();

        Crossover::from_options(&self.options).apply(&mut xnew, lb, ub, &mut self.rng)?;
        Mutation::from_options(&self.options).apply(&mut xnew, lb, ub, &mut self.rng)?;

        let fnew = xnew
            .iter()
            .map(|xi| pop.evaluate(xi))
            .collect::<Result<Vec<_>>>()?;

        let plan = elitist_reinsertion(pop.f(), &fnew, self.options.get_elitism())?;
        let next: Vec<(Vec<f64>, Vec<f64>)> = plan
            .into_iter()
            .map(|origin| match origin {
                Origin::Parent(i) => (pop.x()[i].clone(), pop.f()[i].clone()),
                Origin::Offspring(i) => (xnew[i].clone(), fnew[i].clone()),
            })
            .collect();
        for (i, (xi, fi)) in next.into_iter().enumerate() {
            pop.set_xf(i, xi, fi)?;
        }
        Ok(())
    }

    /// Checks that `pop` can be evolved and returns the problem bounds.
    fn validate<P: Problem>(&self, pop: &Population<P>) -> Result<(Vec<f64>, Vec<f64>)> {
        let prob = pop.problem();
        let np = pop.len();

        if prob.nc() != 0 {
            return Err(GeneticError::InvalidArgument(format!(
                "Constraints detected in {} instance. {} cannot deal with them",
                prob.name(),
                self.name()
            )));
        }
        if prob.nf() != 1 {
            return Err(GeneticError::InvalidArgument(format!(
                "Multiple objectives detected in {} instance. {} cannot deal with them",
                prob.name(),
                self.name()
            )));
        }
        if np < 2 {
            return Err(GeneticError::InvalidArgument(format!(
                "{} needs at least 2 individuals in the population, {} detected",
                prob.name(),
                np
            )));
        }
        if self.options.get_elitism() > np {
            return Err(GeneticError::InvalidArgument(format!(
                "The elitism must be smaller than the population size, while a value of: {} was detected in a population of size: {}",
                self.options.get_elitism(),
                np
            )));
        }
        if self.options.get_param_s() > np {
            return Err(GeneticError::InvalidArgument(format!(
                "The parameter for selection must be smaller than the population size, while a value of: {} was detected in a population of size: {}",
                self.options.get_param_s(),
                np
            )));
        }
        if self.options.get_crossover() == CrossoverKind::Sbx && np % 2 != 0 {
            return Err(GeneticError::InvalidArgument(format!(
                "Population size must be even if sbx crossover is selected. Detected pop size is: {}",
                np
            )));
        }

        let (lb, ub) = prob.bounds();
        check_bounds(&lb, &ub)?;
        if self.options.get_int_dim() > lb.len() {
            return Err(GeneticError::InvalidArgument(format!(
                "The size of the integer part ({}) exceeds the dimension of {} ({})",
                self.options.get_int_dim(),
                prob.name(),
                lb.len()
            )));
        }
        if self.options.get_int_dim() != prob.nix() {
            return Err(GeneticError::InvalidArgument(format!(
                "The size of the integer part ({}) differs from the number of integer coordinates declared by {} ({})",
                self.options.get_int_dim(),
                prob.name(),
                prob.nix()
            )));
        }
        Ok((lb, ub))
    }

    /// Reseeds the random number generator.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Sets the verbosity: 0 is silent, `n > 0` logs one line every `n` generations.
    pub fn set_verbosity(&mut self, level: u32) {
        self.verbosity = level;
    }

    pub fn verbosity(&self) -> u32 {
        self.verbosity
    }

    /// The log of the last successful call to [`evolve`](Sga::evolve).
    pub fn log(&self) -> &[LogLine] {
        &self.log
    }

    pub fn options(&self) -> &SgaOptions {
        &self.options
    }

    pub fn name(&self) -> &'static str {
        "Genetic Algorithm"
    }
}

impl fmt::Display for Sga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.options;
        writeln!(f, "\tNumber of generations: {}", o.get_num_generations())?;
        writeln!(f, "\tElitism: {}", o.get_elitism())?;
        writeln!(f, "\tCrossover:")?;
        writeln!(f, "\t\tType: {}", o.get_crossover())?;
        writeln!(f, "\t\tProbability: {}", o.get_cr())?;
        if o.get_crossover() == CrossoverKind::Sbx {
            writeln!(f, "\t\tDistribution index: {}", o.get_eta_c())?;
        }
        writeln!(f, "\tMutation:")?;
        writeln!(f, "\t\tType: {}", o.get_mutation())?;
        writeln!(f, "\t\tProbability: {}", o.get_m())?;
        if o.get_mutation() == MutationKind::Polynomial {
            writeln!(f, "\t\tDistribution index: {}", o.get_param_m())?;
        } else {
            writeln!(f, "\t\tWidth: {}", o.get_param_m())?;
        }
        writeln!(f, "\tSelection:")?;
        writeln!(f, "\t\tType: {}", o.get_selection())?;
        match o.get_selection() {
            SelectionKind::Truncated => writeln!(f, "\t\tTruncation size: {}", o.get_param_s())?,
            SelectionKind::Tournament => writeln!(f, "\t\tTournament size: {}", o.get_param_s())?,
        }
        writeln!(f, "\tSize of the integer part: {}", o.get_int_dim())?;
        writeln!(f, "\tSeed: {}", self.rng.seed())?;
        write!(f, "\tVerbosity: {}", self.verbosity)
    }
}
