//! Fixed-step RK4 time integration for the three-body system
//!
//! Provides the classic fourth-order Runge–Kutta step over the coupled
//! position/velocity ODE, driven by `AccelSet` and `Parameters`. The force
//! law is velocity-independent, so acceleration is a function of positions
//! only and each step costs four force evaluations.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{Body, System, NVec2};

/// Advance the system by one step of size `params.dt` using classic RK4,
/// then apply velocity damping.
///
/// The step is pure: `sys` is left untouched and a new [`System`] of the
/// same length and index order is returned, with each body's mass carried
/// through unchanged and `t` advanced by `dt`. Chaining calls (each output
/// fed as the next input) is the intended driving pattern; no state is
/// carried between calls beyond the returned system.
///
/// Invalid parameters (negative dt, negative softening) are not rejected
/// here; validation is the caller's concern and degenerate values simply
/// propagate through the arithmetic.
pub fn rk4_step(sys: &System, forces: &AccelSet, params: &Parameters) -> System {
    let n = sys.bodies.len();
    let dt = params.dt;
    let half_dt = 0.5 * dt;

    // Stage 1: derivatives at the current state
    // k1_v is the acceleration field, k1_p the velocity field
    let mut k1_v = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys, params, &mut k1_v);
    let k1_p: Vec<NVec2> = sys.bodies.iter().map(|b| b.v).collect();

    // Stage 2: midpoint state, advanced from the current state by k1 * dt/2
    let y1 = advance(sys, &k1_p, &k1_v, half_dt);
    let mut k2_v = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&y1, params, &mut k2_v);
    let k2_p: Vec<NVec2> = y1.bodies.iter().map(|b| b.v).collect();

    // Stage 3: second midpoint state, advanced by k2 * dt/2 from the
    // ORIGINAL state, not from the stage-2 state
    let y2 = advance(sys, &k2_p, &k2_v, half_dt);
    let mut k3_v = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&y2, params, &mut k3_v);
    let k3_p: Vec<NVec2> = y2.bodies.iter().map(|b| b.v).collect();

    // Stage 4: endpoint state, advanced by k3 * dt from the original state
    let y3 = advance(sys, &k3_p, &k3_v, dt);
    let mut k4_v = vec![NVec2::zeros(); n];
    forces.accumulate_accels(&y3, params, &mut k4_v);
    let k4_p: Vec<NVec2> = y3.bodies.iter().map(|b| b.v).collect();

    // Combine the four stages with 1-2-2-1 weights:
    // dx = (k1_p + 2 k2_p + 2 k3_p + k4_p) * dt/6, same for dv over the
    // acceleration stages
    //
    // Damping is a single post-step multiplicative scale on the combined
    // velocity, applied once per full step and never per stage. It is a
    // numerical stabilizer, not exponential physical drag; moving it
    // changes every trajectory.
    let vel_scale = (1.0 - params.damping).max(0.0);
    let bodies = sys
        .bodies
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let dp = (k1_p[i] + (k2_p[i] + k3_p[i]) * 2.0 + k4_p[i]) * (dt / 6.0);
            let dv = (k1_v[i] + (k2_v[i] + k3_v[i]) * 2.0 + k4_v[i]) * (dt / 6.0);

            let mut v = b.v + dv;
            if params.damping != 0.0 {
                v *= vel_scale;
            }

            Body {
                x: b.x + dp,
                v,
                m: b.m,
            }
        })
        .collect();

    System {
        bodies,
        t: sys.t + dt,
    }
}

/// Intermediate RK4 stage state: `base` advanced by the given position and
/// velocity derivatives over `h`. Masses carry through from `base`, so the
/// force evaluations at every stage see the original masses.
fn advance(base: &System, dp: &[NVec2], dv: &[NVec2], h: f64) -> System {
    let bodies = base
        .bodies
        .iter()
        .enumerate()
        .map(|(i, b)| Body {
            x: b.x + h * dp[i],
            v: b.v + h * dv[i],
            m: b.m,
        })
        .collect();

    System {
        bodies,
        t: base.t + h,
    }
}
