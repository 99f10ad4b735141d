//! Bounded per-body trail buffers for rendering
//!
//! A trail is a FIFO of recent positions capped at a configurable length,
//! with the oldest point evicted first once the cap is exceeded. The driver
//! appends one point per body per integration step; the renderer draws each
//! trail as a polyline. Trails are rendering support, not simulation state:
//! the numerical core never sees them.

use std::collections::VecDeque;

use bevy::prelude::Resource;

use crate::simulation::states::{NVec2, System};

/// A single body's trail.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest once over capacity
    pub fn push(&mut self, p: NVec2) {
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Change capacity; shrinking drops the oldest points first
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.points.len() > capacity {
            self.points.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// One trail per body, index-aligned with the system's body order.
/// Maintained by the viewer, outside the numerical core.
#[derive(Debug, Clone, Resource)]
pub struct TrailSet {
    trails: Vec<Trail>,
}

impl TrailSet {
    pub fn new(n_bodies: usize, capacity: usize) -> Self {
        Self {
            trails: (0..n_bodies).map(|_| Trail::new(capacity)).collect(),
        }
    }

    /// Append each body's current position to its trail
    pub fn record(&mut self, sys: &System) {
        for (trail, b) in self.trails.iter_mut().zip(sys.bodies.iter()) {
            trail.push(b.x);
        }
    }

    /// Re-cap every trail; shrinking drops the oldest points first
    pub fn set_capacity(&mut self, capacity: usize) {
        for trail in &mut self.trails {
            trail.set_capacity(capacity);
        }
    }

    pub fn clear(&mut self) {
        for trail in &mut self.trails {
            trail.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trail> {
        self.trails.iter()
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }
}
