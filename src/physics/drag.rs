//! Quadratic fluid drag
//!
//! "Area" is the squared length of the bounding-box half extents, not a cross
//! section, and the medium is sampled at a single point rather than integrated
//! over the submerged volume.

use glam::Vec3;

use crate::constants::physics_constants::MIN_DRAG_FORCE;

/// Everything the drag model reads for one body and one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragInput {
    pub velocity: Vec3,
    pub mass: f32,
    pub gravity: Vec3,
    /// Density of the medium the body is in
    pub density: f32,
    /// Density of air in this space; anything else counts as a dense medium
    pub air_density: f32,
    pub drag_coefficient: f32,
    pub half_extents: Vec3,
    pub min_force: f32,
}

impl DragInput {
    pub fn new(velocity: Vec3, mass: f32, gravity: Vec3, density: f32, air_density: f32) -> Self {
        Self {
            velocity,
            mass,
            gravity,
            density,
            air_density,
            drag_coefficient: 0.0,
            half_extents: Vec3::ZERO,
            min_force: MIN_DRAG_FORCE,
        }
    }

    pub fn with_drag_coefficient(mut self, drag_coefficient: f32) -> Self {
        self.drag_coefficient = drag_coefficient;
        self
    }

    pub fn with_half_extents(mut self, half_extents: Vec3) -> Self {
        self.half_extents = half_extents;
        self
    }

    pub fn with_min_force(mut self, min_force: f32) -> Self {
        self.min_force = min_force;
        self
    }
}

/// What the body should receive this step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragResponse {
    /// Nothing: negligible or non-finite force
    None,
    /// Continuous central force
    Force(Vec3),
    /// Central impulse that cancels linear momentum
    Impulse(Vec3),
}

/// Cross-section proxy: squared half-extent length
#[inline]
pub fn drag_area(half_extents: Vec3) -> f32 {
    half_extents.length_squared()
}

/// `k = density * c * area² / 2`
#[inline]
pub fn drag_factor(density: f32, drag_coefficient: f32, area: f32) -> f32 {
    (density * drag_coefficient * area * area) / 2.0
}

/// `-v * |v|² * k`
#[inline]
pub fn drag_force(velocity: Vec3, k: f32) -> Vec3 {
    -velocity * velocity.length_squared() * k
}

/// Decide the drag response for one body
pub fn compute_drag(input: &DragInput) -> DragResponse {
    let area = drag_area(input.half_extents);
    let k = drag_factor(input.density, input.drag_coefficient, area);
    let force = drag_force(input.velocity, k);
    let gravitational_force = input.mass * input.gravity.length();

    // Entering water or lava stops the body outright
    if input.density != input.air_density && force.y.abs() > gravitational_force {
        return DragResponse::Impulse(-input.velocity * input.mass);
    }

    let magnitude = force.length();
    if magnitude.is_finite() && magnitude > input.min_force {
        DragResponse::Force(force)
    } else {
        DragResponse::None
    }
}
