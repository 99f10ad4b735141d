//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the per-step integration settings:
//! - base step size `dt`,
//! - gravitational constant `G`,
//! - softening length (its square is added to squared separations),
//! - per-step velocity damping fraction in [0, 1)
//!
//! The record is owned by the driver/UI and passed into every core call;
//! the core never caches it, so any field may be retuned between steps.

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub G: f64, // gravitational constant
    pub softening: f64, // softening length
    pub damping: f64, // velocity damping fraction
}
