//! High-level driver settings
//!
//! Selects the cadence options used when running a `Scenario`: the speed
//! multiplier, the per-body trail capacity, and whether the driver is
//! currently advancing the system.

#[derive(Debug, Clone)]
pub struct Engine {
    pub speed: f64, // simulation speed multiplier
    pub trail_length: usize, // per-body trail capacity in points
    pub playing: bool, // whether the driver steps the system each frame
}

impl Engine {
    /// Integrator calls per frame: `max(1, floor(1 + speed))`.
    ///
    /// One frame's time advance of `dt * speed` is split into this many
    /// sub-steps so the per-step size stays bounded at high speed
    /// multipliers.
    pub fn sub_steps(&self) -> usize {
        (1.0 + self.speed).floor().max(1.0) as usize
    }
}
