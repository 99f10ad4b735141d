//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – driver settings (speed, trail length, playing)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   speed: 1.0          # speed multiplier, drives sub-stepping
//!   trail_length: 300   # per-body trail capacity in points
//!   playing: true       # optional; start running or paused
//!
//! parameters:
//!   dt: 0.01            # base integrator step size
//!   G: 1.0              # gravitational constant
//!   softening: 2.0      # softening length
//!   damping: 0.001      # per-step velocity damping in [0, 1)
//!
//! bodies:
//!   - x: [ -120.0, 0.0 ]
//!     v: [  0.0, 0.6 ]
//!     m: 12.0
//!   - x: [  120.0, 0.0 ]
//!     v: [  0.0, -0.6 ]
//!     m: 14.0
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;

/// Driver configuration
/// Controls how the scenario is run, not what is simulated
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub speed: f64, // simulation speed multiplier
    pub trail_length: usize, // per-body trail capacity in points
    pub playing: Option<bool>, // start running (default) or paused
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,        // base step size
    pub G: f64,         // gravitational constant
    pub softening: f64, // softening - prevents singular forces at very small separations
    pub damping: f64,   // per-step velocity damping fraction
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Vec<f64>, // Initial velocity vector `v` in simulation units per time unit
    pub m: f64,      // Mass of the body (clamped to the 0.1 floor at load)
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // Driver-level configuration (speed, trails, playing)
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}
