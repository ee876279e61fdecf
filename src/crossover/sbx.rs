//! # Simulated Binary Crossover
//!
//! SBX (Deb & Agrawal, 1995) produces two children spread around their parents
//! with a distribution controlled by the index `eta_c`: the larger `eta_c`, the
//! closer the children stay to the parents. It is applied to the continuous part
//! of the chromosome. The trailing `int_dim` integer genes go through a two-point
//! crossover instead, so they stay integers.

use crate::rng::RandomNumberGenerator;

const PARENT_EPSILON: f64 = 1e-14;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SbxCrossover {
    /// Probability of crossing a pair at all.
    pub cr: f64,
    /// Distribution index.
    pub eta_c: f64,
    /// Number of trailing integer genes.
    pub int_dim: usize,
}

impl SbxCrossover {
    /// Crosses two parents and returns the two children.
    ///
    /// With probability `cr`, every continuous gene is crossed with probability
    /// 0.5, provided the parents differ on it by more than `1e-14` and its bounds
    /// are not degenerate. Children are clamped to the bounds and randomly
    /// assigned. Independently, with probability `cr`, the integer genes between
    /// two random cut sites are swapped between the children.
    ///
    /// # Panics
    ///
    /// Panics if the parents or bounds have different lengths, or if `int_dim`
    /// exceeds that length.
    pub fn crossover(
        &self,
        parent1: &[f64],
        parent2: &[f64],
        lb: &[f64],
        ub: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> (Vec<f64>, Vec<f64>) {
        let dim = parent1.len();
        let dc = dim - self.int_dim;

        let mut child1 = parent1.to_vec();
        let mut child2 = parent2.to_vec();

        if rng.uniform01() <= self.cr {
            for i in 0..dc {
                if rng.uniform01() <= 0.5
                    && (parent1[i] - parent2[i]).abs() > PARENT_EPSILON
                    && lb[i] != ub[i]
                {
                    let (c1, c2) = self.cross_gene(parent1[i], parent2[i], lb[i], ub[i], rng);
                    if rng.uniform01() <= 0.5 {
                        child1[i] = c1;
                        child2[i] = c2;
                    } else {
                        child1[i] = c2;
                        child2[i] = c1;
                    }
                }
            }
        }

        if self.int_dim > 0 && rng.uniform01() <= self.cr {
            let mut site1 = rng.index(0, self.int_dim - 1);
            let mut site2 = rng.index(0, self.int_dim - 1);
            if site1 > site2 {
                std::mem::swap(&mut site1, &mut site2);
            }
            let segment = dc + site1..dc + site2;
            child1[segment.clone()].copy_from_slice(&parent2[segment.clone()]);
            child2[segment.clone()].copy_from_slice(&parent1[segment]);
        }

        (child1, child2)
    }

    /// Returns the lower and the upper child for one gene, both within `[yl, yu]`.
    fn cross_gene(
        &self,
        a: f64,
        b: f64,
        yl: f64,
        yu: f64,
        rng: &mut RandomNumberGenerator,
    ) -> (f64, f64) {
        let (y1, y2) = if a < b { (a, b) } else { (b, a) };
        let rand01 = rng.uniform01();

        let beta = 1.0 + 2.0 * (y1 - yl) / (y2 - y1);
        let betaq = self.spread_factor(beta, rand01);
        let c1 = 0.5 * ((y1 + y2) - betaq * (y2 - y1));

        let beta = 1.0 + 2.0 * (yu - y2) / (y2 - y1);
        let betaq = self.spread_factor(beta, rand01);
        let c2 = 0.5 * ((y1 + y2) + betaq * (y2 - y1));

        (c1.clamp(yl, yu), c2.clamp(yl, yu))
    }

    fn spread_factor(&self, beta: f64, rand01: f64) -> f64 {
        let exponent = self.eta_c + 1.0;
        let alpha = 2.0 - beta.powf(-exponent);
        if rand01 <= 1.0 / alpha {
            (rand01 * alpha).powf(1.0 / exponent)
        } else {
            (1.0 / (2.0 - rand01 * alpha)).powf(1.0 / exponent)
        }
    }
}
