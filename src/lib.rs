pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, MASS_FLOOR};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::rk4_step;
pub use simulation::scenario::{create_default_scenario, Scenario};

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use visualization::tbsim_vis2d::run_2d;
pub use visualization::trails::{Trail, TrailSet};

pub use benchmark::benchmark::{bench_gravity, bench_rk4, bench_rk4_curve};
