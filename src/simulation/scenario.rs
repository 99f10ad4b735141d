//! Build fully-initialized simulation scenarios
//!
//! Produces the runtime bundle (`Scenario`) consumed by the viewer's
//! integration and rendering systems:
//! - driver settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - the pristine initial ensemble, kept so a reset can re-derive the run
//!
//! A scenario comes either from a YAML `ScenarioConfig` or from the
//! built-in three-body preset. The bundle is inserted into Bevy as a
//! `Resource` and consumed by the integration and visualization systems.

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System, MASS_FLOOR};

/// Fixed three-body preset: masses 12 / 14 / 6, positions and velocities
/// chosen empirically for visually interesting, roughly bounded chaotic
/// motion (no conservation guarantee). Deterministic: same output every
/// call, no randomness.
pub fn create_default_scenario() -> System {
    System {
        bodies: vec![
            Body {
                x: NVec2::new(-120.0, 0.0),
                v: NVec2::new(0.0, 0.6),
                m: 12.0,
            },
            Body {
                x: NVec2::new(120.0, 0.0),
                v: NVec2::new(0.0, -0.6),
                m: 14.0,
            },
            Body {
                x: NVec2::new(0.0, 0.0),
                v: NVec2::new(1.1, 0.0),
                m: 6.0,
            },
        ],
        t: 0.0,
    }
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main runtime bundle: driver settings, numerical parameters,
/// the current system state, the set of active force laws, and the initial
/// ensemble the run started from.
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub initial: System,
}

impl Scenario {
    /// Map a YAML-facing [`ScenarioConfig`] into the runtime bundle.
    /// Masses are clamped to [`MASS_FLOOR`] here, at the input boundary;
    /// the numerical core itself never validates.
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| Body {
                x: NVec2::new(bc.x[0], bc.x[1]),
                v: NVec2::new(bc.v[0], bc.v[1]),
                m: bc.m.max(MASS_FLOOR),
            })
            .collect();

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            G: p_cfg.G,
            softening: p_cfg.softening,
            damping: p_cfg.damping,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            speed: e_cfg.speed,
            trail_length: e_cfg.trail_length,
            playing: e_cfg.playing.unwrap_or(true),
        };

        Self::assemble(engine, parameters, system)
    }

    /// The built-in preset used when no scenario file is given, with the
    /// same driver defaults the original viewer starts with.
    pub fn default_scenario() -> Self {
        let engine = Engine {
            speed: 1.0,
            trail_length: 300,
            playing: true,
        };
        let parameters = Parameters {
            dt: 0.01,
            G: 1.0,
            softening: 2.0,
            damping: 0.001,
        };
        Self::assemble(engine, parameters, create_default_scenario())
    }

    fn assemble(engine: Engine, parameters: Parameters, system: System) -> Self {
        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity);
        let initial = system.clone();

        Self {
            engine,
            parameters,
            system,
            forces,
            initial,
        }
    }

    /// Reset the run: restore the initial ensemble at t = 0 and pause.
    /// Trail buffers are owned by the viewer and cleared there.
    pub fn reset(&mut self) {
        self.system = self.initial.clone();
        self.engine.playing = false;
    }
}
