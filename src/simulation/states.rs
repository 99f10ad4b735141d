//! Core state types for the three-body simulation.
//!
//! Defines the planar body/system structs:
//! - `Body` using `NVec2` (position, velocity, mass)
//! - `System` holding the ordered list of bodies and the current time `t`
//!
//! Body order is significant: index identity (A, B, C, ...) is preserved by
//! every step so trails and coloring stay associated with the same body.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Smallest mass accepted from configuration or UI input.
/// The core itself never validates mass; the clamp happens where values
/// enter the system.
pub const MASS_FLOOR: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64, // time
}
