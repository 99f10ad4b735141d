use tbsim::configuration::config::ScenarioConfig;
use tbsim::simulation::engine::Engine;
use tbsim::simulation::forces::{AccelSet, NewtonianGravity};
use tbsim::simulation::integrator::rk4_step;
use tbsim::simulation::params::Parameters;
use tbsim::simulation::scenario::{create_default_scenario, Scenario};
use tbsim::simulation::states::{Body, NVec2, System};
use tbsim::visualization::trails::{Trail, TrailSet};

/// Build a simple 2-body System separated along the x-axis
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let b1 = Body {
        x: NVec2::new(-dist / 2.0, 0.0),
        v: NVec2::zeros(),
        m: m1,
    };
    let b2 = Body {
        x: NVec2::new(dist / 2.0, 0.0),
        v: NVec2::zeros(),
        m: m2,
    };
    System {
        bodies: vec![b1, b2],
        t: 0.0,
    }
}

/// Default physics parameters for tests
pub fn test_params() -> Parameters {
    Parameters {
        dt: 0.001,
        G: 0.1,
        softening: 0.0,
        damping: 0.0,
    }
}

/// Parameters matching the shipped three-body preset (no damping)
pub fn preset_params() -> Parameters {
    Parameters {
        dt: 0.01,
        G: 1.0,
        softening: 2.0,
        damping: 0.0,
    }
}

/// Build a gravity term + AccelSet
pub fn gravity_set() -> AccelSet {
    AccelSet::new().with(NewtonianGravity)
}

/// Evaluate gravity on `sys` into a fresh buffer
fn accels(sys: &System, params: &Parameters) -> Vec<NVec2> {
    let mut out = vec![NVec2::zeros(); sys.bodies.len()];
    gravity_set().accumulate_accels(sys, params, &mut out);
    out
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let p = test_params();

    let acc = accels(&sys, &p);

    let net = acc[0] * sys.bodies[0].m + acc[1] * sys.bodies[1].m;

    assert!(net.norm() < 1e-12, "Net momentum rate not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();

    let acc = accels(&sys, &p);

    let dx = sys.bodies[1].x - sys.bodies[0].x;

    // Accelerations point along the pair axis, in opposite directions
    assert!(dx.norm() > 0.0);
    assert!(acc[0].dot(&dx) > 0.0, "Acceleration is not toward second body");
    assert!(acc[1].dot(&dx) < 0.0, "Acceleration is not toward first body");
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let p = test_params();

    let acc_r = accels(&sys_r, &p);
    let acc_2r = accels(&sys_2r, &p);

    let ratio = acc_r[0].norm() / acc_2r[0].norm();

    assert!((ratio - 4.0).abs() < 1e-3, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_softening_prevents_blowup() {
    let mut p = test_params();
    p.softening = 0.5;

    let sys = two_body_system(1e-9, 1.0, 1.0);
    let acc = accels(&sys, &p);

    assert!(acc[0].norm() < 1e9, "Softening failed; acceleration too large");
}

#[test]
fn gravity_softening_monotonically_weakens_force() {
    let sys = two_body_system(10.0, 1.0, 1.0);
    let mut p = test_params();
    p.G = 1.0;

    let mut prev = f64::INFINITY;
    for softening in [0.0, 1.0, 2.0, 4.0, 8.0] {
        p.softening = softening;
        let mag = accels(&sys, &p)[0].norm();
        assert!(
            mag < prev,
            "softening {} did not weaken the force: {} >= {}",
            softening,
            mag,
            prev
        );
        prev = mag;
    }
}

#[test]
fn gravity_single_body_is_zero() {
    let sys = System {
        bodies: vec![Body {
            x: NVec2::new(3.0, -4.0),
            v: NVec2::new(1.0, 0.0),
            m: 5.0,
        }],
        t: 0.0,
    };
    let p = test_params();

    let acc = accels(&sys, &p);

    assert_eq!(acc.len(), 1);
    assert_eq!(acc[0], NVec2::zeros());
}

#[test]
fn gravity_coincident_bodies_go_nonfinite_without_softening() {
    // Zero softening with coincident bodies is the documented degenerate
    // case: the inverse-cube term is undefined and the result propagates
    // as non-finite values instead of raising an error
    let mut sys = two_body_system(1.0, 1.0, 1.0);
    sys.bodies[1].x = sys.bodies[0].x;
    let p = test_params();

    let acc = accels(&sys, &p);

    assert!(acc[0].x.is_nan() && acc[0].y.is_nan());
    assert!(acc[1].x.is_nan() && acc[1].y.is_nan());
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn rk4_preserves_length_and_masses() {
    let init = create_default_scenario();
    let p = preset_params();
    let forces = gravity_set();

    let next = rk4_step(&init, &forces, &p);

    assert_eq!(next.bodies.len(), init.bodies.len());
    for (a, b) in init.bodies.iter().zip(next.bodies.iter()) {
        assert_eq!(a.m, b.m, "mass changed across a step");
    }
}

#[test]
fn rk4_step_updates_positions() {
    let init = create_default_scenario();
    let p = preset_params();
    let forces = gravity_set();

    let next = rk4_step(&init, &forces, &p);

    // Bodies A and B start with purely vertical velocity but feel a
    // horizontal pull, so they move in both axes. Body C starts on the
    // symmetry line; its first-step y displacement is below meaningful
    // size, so only x is asserted.
    for i in [0, 1] {
        let dx = (next.bodies[i].x.x - init.bodies[i].x.x).abs();
        let dy = (next.bodies[i].x.y - init.bodies[i].x.y).abs();
        assert!(dx > 0.0, "body {} did not move in x", i);
        assert!(dy > 0.0, "body {} did not move in y", i);
    }
    let dx_c = (next.bodies[2].x.x - init.bodies[2].x.x).abs();
    assert!(dx_c > 0.0, "body C did not move in x");
}

#[test]
fn rk4_does_not_mutate_input() {
    let init = create_default_scenario();
    let snapshot = init.clone();
    let p = preset_params();
    let forces = gravity_set();

    let _next = rk4_step(&init, &forces, &p);

    assert_eq!(init, snapshot, "input system was mutated by the step");
}

#[test]
fn rk4_advances_time_by_dt() {
    let init = create_default_scenario();
    let p = preset_params();
    let forces = gravity_set();

    let next = rk4_step(&init, &forces, &p);

    assert_eq!(next.t, init.t + p.dt);
}

#[test]
fn rk4_damping_reduces_speed() {
    let init = create_default_scenario();
    let forces = gravity_set();

    let undamped = rk4_step(&init, &forces, &preset_params());

    let mut damped_params = preset_params();
    damped_params.damping = 0.5;
    let damped = rk4_step(&init, &forces, &damped_params);

    for (u, d) in undamped.bodies.iter().zip(damped.bodies.iter()) {
        assert!(
            d.v.norm() < u.v.norm(),
            "damped speed {} not below undamped {}",
            d.v.norm(),
            u.v.norm()
        );
    }
}

#[test]
fn rk4_substeps_converge_to_full_step() {
    // Fourth-order convergence check: four chained steps of dt/4 must land
    // very close to one step of dt
    let init = create_default_scenario();
    let forces = gravity_set();

    let mut coarse_params = preset_params();
    coarse_params.dt = 0.04;
    let coarse = rk4_step(&init, &forces, &coarse_params);

    let mut fine_params = preset_params();
    fine_params.dt = 0.01;
    let mut fine = init.clone();
    for _ in 0..4 {
        fine = rk4_step(&fine, &forces, &fine_params);
    }

    for (c, f) in coarse.bodies.iter().zip(fine.bodies.iter()) {
        let err = (c.x - f.x).norm();
        assert!(err < 1e-9, "sub-step disagreement too large: {}", err);
    }
}

#[test]
fn rk4_chained_steps_stay_finite() {
    // Driving pattern: each output fed back as the next input
    let p = preset_params();
    let forces = gravity_set();

    let mut sys = create_default_scenario();
    for _ in 0..500 {
        sys = rk4_step(&sys, &forces, &p);
    }

    for (i, b) in sys.bodies.iter().enumerate() {
        assert!(b.x.x.is_finite() && b.x.y.is_finite(), "body {} position diverged", i);
        assert!(b.v.x.is_finite() && b.v.y.is_finite(), "body {} velocity diverged", i);
    }
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn default_scenario_is_deterministic() {
    let a = create_default_scenario();
    let b = create_default_scenario();

    assert_eq!(a, b, "factory output differs between calls");
}

#[test]
fn default_scenario_matches_preset_values() {
    let sys = create_default_scenario();

    assert_eq!(sys.t, 0.0);
    assert_eq!(sys.bodies.len(), 3);

    assert_eq!(sys.bodies[0].m, 12.0);
    assert_eq!(sys.bodies[0].x, NVec2::new(-120.0, 0.0));
    assert_eq!(sys.bodies[0].v, NVec2::new(0.0, 0.6));

    assert_eq!(sys.bodies[1].m, 14.0);
    assert_eq!(sys.bodies[1].x, NVec2::new(120.0, 0.0));
    assert_eq!(sys.bodies[1].v, NVec2::new(0.0, -0.6));

    assert_eq!(sys.bodies[2].m, 6.0);
    assert_eq!(sys.bodies[2].x, NVec2::new(0.0, 0.0));
    assert_eq!(sys.bodies[2].v, NVec2::new(1.1, 0.0));
}

#[test]
fn build_scenario_maps_config_and_clamps_mass() {
    let yaml = r#"
engine:
  speed: 2.0
  trail_length: 100

parameters:
  dt: 0.02
  G: 1.5
  softening: 3.0
  damping: 0.01

bodies:
  - x: [ -1.0, 2.0 ]
    v: [ 0.5, -0.5 ]
    m: 0.01
  - x: [ 1.0, -2.0 ]
    v: [ -0.5, 0.5 ]
    m: 4.0
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.parameters.dt, 0.02);
    assert_eq!(scenario.parameters.G, 1.5);
    assert_eq!(scenario.parameters.softening, 3.0);
    assert_eq!(scenario.parameters.damping, 0.01);

    assert_eq!(scenario.engine.speed, 2.0);
    assert_eq!(scenario.engine.trail_length, 100);
    assert!(scenario.engine.playing, "playing should default to true");

    assert_eq!(scenario.system.bodies.len(), 2);
    assert_eq!(scenario.system.bodies[0].x, NVec2::new(-1.0, 2.0));
    assert_eq!(scenario.system.bodies[0].v, NVec2::new(0.5, -0.5));
    // Sub-floor mass from config is clamped at the input boundary
    assert_eq!(scenario.system.bodies[0].m, 0.1);
    assert_eq!(scenario.system.bodies[1].m, 4.0);

    // The pristine initial ensemble matches the starting system
    assert_eq!(scenario.initial, scenario.system);
}

#[test]
fn scenario_reset_restores_initial_ensemble() {
    let mut scenario = Scenario::default_scenario();
    let forces = gravity_set();

    scenario.system = rk4_step(&scenario.system, &forces, &scenario.parameters);
    assert_ne!(scenario.system, scenario.initial);

    scenario.reset();

    assert_eq!(scenario.system, scenario.initial);
    assert!(!scenario.engine.playing, "reset should pause the run");
}

// ==================================================================================
// Driver cadence tests
// ==================================================================================

#[test]
fn engine_sub_step_rule() {
    let mut engine = Engine {
        speed: 1.0,
        trail_length: 300,
        playing: true,
    };

    // sub_steps = max(1, floor(1 + speed))
    assert_eq!(engine.sub_steps(), 2);

    engine.speed = 0.25;
    assert_eq!(engine.sub_steps(), 1);

    engine.speed = 2.5;
    assert_eq!(engine.sub_steps(), 3);

    engine.speed = 3.0;
    assert_eq!(engine.sub_steps(), 4);
}

// ==================================================================================
// Trail buffer tests
// ==================================================================================

#[test]
fn trail_evicts_oldest_first() {
    let mut trail = Trail::new(3);

    for i in 0..5 {
        trail.push(NVec2::new(i as f64, 0.0));
    }

    assert_eq!(trail.len(), 3);
    let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0]);
}

#[test]
fn trail_capacity_shrink_drops_oldest() {
    let mut trail = Trail::new(5);
    for i in 0..5 {
        trail.push(NVec2::new(i as f64, 0.0));
    }

    trail.set_capacity(2);

    let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 4.0]);
}

#[test]
fn trail_set_records_per_body_positions() {
    let sys = create_default_scenario();
    let mut trails = TrailSet::new(sys.bodies.len(), 10);

    trails.record(&sys);

    assert_eq!(trails.len(), 3);
    for (trail, body) in trails.iter().zip(sys.bodies.iter()) {
        assert_eq!(trail.len(), 1);
        assert_eq!(*trail.iter().next().unwrap(), body.x);
    }

    trails.clear();
    assert!(trails.iter().all(|t| t.is_empty()));
}
