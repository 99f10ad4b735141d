//! Force / acceleration contributors for the three-body engine
//!
//! Defines the planar acceleration trait and the direct Newtonian
//! gravity term with softening

use crate::simulation::params::Parameters;
use crate::simulation::states::{System, NVec2};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - `out` must have the same length as `sys.bodies`
    pub fn accumulate_accels(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, params, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
///
/// `Parameters` is handed in on every evaluation rather than captured at
/// construction: the driver may retune `G` or the softening length between
/// steps and the force set must pick the change up immediately
pub trait Acceleration {
    fn acceleration(&self, sys: &System, params: &Parameters, out: &mut [NVec2]);
}

/// Direct Newtonian gravity with softening
///
/// For each body i, sums over all other bodies j != i:
///
/// ```text
/// a_i += G * m_j * (x_j - x_i) / (|x_j - x_i|^2 + softening^2)^1.5
/// ```
///
/// The softening term bounds the force as two bodies approach coincidence.
/// With `softening = 0` and exactly coincident bodies the inverse-cube
/// factor is undefined and the result goes non-finite; that is left to
/// propagate rather than guarded, so a degenerate run keeps going instead
/// of faulting.
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, params: &Parameters, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        let soft2 = params.softening * params.softening;

        // Per-body accumulation, inner loop in ascending j order.
        // Floating-point addition is not associative, so the summation
        // order is part of the contract: reordering changes results at
        // the bit level.
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x; // position of body i

            let mut acc = NVec2::zeros();
            for j in 0..n {
                if j == i {
                    continue;
                }
                let bj = &sys.bodies[j];

                // Displacement from i toward j; attraction acts along +r
                let r = bj.x - xi;

                // Softened squared separation: d2 = |r|^2 + softening^2
                let d2 = r.dot(&r) + soft2;

                // 1 / |r_soft|^3
                let inv_r3 = d2.powf(1.5).recip();

                // a_i += G * m_j * r / |r_soft|^3
                acc += params.G * bj.m * inv_r3 * r;
            }
            out[i] += acc;
        }
    }
}
