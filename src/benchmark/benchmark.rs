use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::rk4_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a deterministic System of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new((i_f * 0.37).sin() * 200.0, (i_f * 0.13).cos() * 200.0);

        bodies.push(Body {
            x,
            v: NVec2::zeros(),
            m: 1.0,
        });
    }

    System { bodies, t: 0.0 }
}

/// Shared parameter template for benchmarks
fn make_params() -> Parameters {
    Parameters {
        dt: 0.01,
        G: 1.0,
        softening: 2.0,
        damping: 0.0,
    }
}

/// Time one direct force-law evaluation across a range of N
pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = make_system(n);
        let params = make_params();

        let mut out = vec![NVec2::zeros(); n];
        let gravity = NewtonianGravity;

        // Warm up
        gravity.acceleration(&sys, &params, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(&sys, &params, &mut out);
        let dt_gravity = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity eval = {dt_gravity:8.6} s");
    }
}

/// Time one RK4 step (four force evaluations) across a range of N
pub fn bench_rk4() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let steps = 2; // integrator steps per size (tune as needed)

    for n in ns {
        let params = make_params();
        let forces = AccelSet::new().with(NewtonianGravity);

        let mut sys = make_system(n);

        // Warm-up
        sys = rk4_step(&sys, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            sys = rk4_step(&sys, &forces, &params);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:5}, rk4 step = {:8.6} s (t = {:.3})", n, per_step, sys.t);
    }
}

/// Benchmark force law and RK4 step over a sweep of N
/// Paste output directly into a spreadsheet to graph
pub fn bench_rk4_curve() {
    println!("N,gravity_ms,rk4_ms");

    // Steps of 200 to give a smoother graph
    for n in (200..=3200).step_by(200) {
        // Small n: average over a few steps to smooth noise
        // Large n: only 1 step to avoid minutes of runtime
        let steps = if n <= 800 { 5 } else { 1 };

        let params = make_params();
        let gravity = NewtonianGravity;
        let forces = AccelSet::new().with(NewtonianGravity);

        let sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];

        let t0 = Instant::now();
        for _ in 0..steps {
            gravity.acceleration(&sys, &params, &mut out);
        }
        let ms_gravity = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut sys_rk4 = sys.clone();
        let t1 = Instant::now();
        for _ in 0..steps {
            sys_rk4 = rk4_step(&sys_rk4, &forces, &params);
        }
        let ms_rk4 = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_gravity, ms_rk4);
    }
}
