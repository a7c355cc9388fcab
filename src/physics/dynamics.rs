//! Rigid-body dynamics capability
//!
//! The element body does not integrate anything itself. It drives whatever
//! solver body it wraps through `DynamicsBody`, which is the full surface the
//! drag step, the setters and the serializer need. `SimpleBody` is the
//! in-crate solver used by `PhysicsSpace` and the tests.

use glam::{Quat, Vec3};

use super::aabb::AABB;
use super::shape::CollisionShape;
use super::transform::Isometry;

/// Capability a dynamics solver body exposes to the element layer
pub trait DynamicsBody {
    /// Accumulate a force through the center of mass for the next step
    fn apply_central_force(&mut self, force: Vec3);

    /// Change momentum immediately
    fn apply_central_impulse(&mut self, impulse: Vec3);

    fn transform(&self) -> Isometry;
    fn set_transform(&mut self, transform: Isometry);

    fn linear_velocity(&self) -> Vec3;
    fn set_linear_velocity(&mut self, velocity: Vec3);

    fn angular_velocity(&self) -> Vec3;
    fn set_angular_velocity(&mut self, velocity: Vec3);

    fn mass(&self) -> f32;
    fn set_mass(&mut self, mass: f32);

    fn friction(&self) -> f32;
    fn set_friction(&mut self, friction: f32);

    fn restitution(&self) -> f32;
    fn set_restitution(&mut self, restitution: f32);

    fn collision_shape(&self) -> &CollisionShape;
    fn set_collision_shape(&mut self, shape: CollisionShape);

    /// Advance the body by `dt` seconds under `gravity`
    fn integrate(&mut self, gravity: Vec3, dt: f32);

    fn rotation(&self) -> Quat {
        self.transform().rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        let mut transform = self.transform();
        transform.rotation = rotation;
        self.set_transform(transform);
    }

    fn position(&self) -> Vec3 {
        self.transform().translation
    }

    /// World-space bounds of the collision shape at the current transform
    fn bounding_box(&self) -> AABB {
        self.collision_shape().bounding_box(&self.transform())
    }
}

/// Minimal semi-implicit Euler body
///
/// Mass 0 makes the body static: forces and impulses are ignored and it is
/// never integrated.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleBody {
    shape: CollisionShape,
    transform: Isometry,
    linear_velocity: Vec3,
    angular_velocity: Vec3,
    mass: f32,
    inverse_mass: f32,
    friction: f32,
    restitution: f32,
    force: Vec3,
}

impl SimpleBody {
    pub fn new(shape: CollisionShape, mass: f32) -> Self {
        let mut body = Self {
            shape,
            transform: Isometry::IDENTITY,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 0.0,
            inverse_mass: 0.0,
            friction: 0.5,
            restitution: 0.0,
            force: Vec3::ZERO,
        };
        body.set_mass(mass);
        body
    }

    pub fn with_transform(mut self, transform: Isometry) -> Self {
        self.transform = transform;
        self
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Force accumulated since the last integration
    pub fn accumulated_force(&self) -> Vec3 {
        self.force
    }
}

impl DynamicsBody for SimpleBody {
    fn apply_central_force(&mut self, force: Vec3) {
        if !self.is_static() {
            self.force += force;
        }
    }

    fn apply_central_impulse(&mut self, impulse: Vec3) {
        // Impulse = change in momentum = m * Δv
        self.linear_velocity += impulse * self.inverse_mass;
    }

    fn transform(&self) -> Isometry {
        self.transform
    }

    fn set_transform(&mut self, transform: Isometry) {
        self.transform = transform;
    }

    fn linear_velocity(&self) -> Vec3 {
        self.linear_velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.linear_velocity = velocity;
    }

    fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    fn set_angular_velocity(&mut self, velocity: Vec3) {
        self.angular_velocity = velocity;
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
        self.inverse_mass = if mass > 0.0 { 1.0 / mass } else { 0.0 };
    }

    fn friction(&self) -> f32 {
        self.friction
    }

    fn set_friction(&mut self, friction: f32) {
        self.friction = friction;
    }

    fn restitution(&self) -> f32 {
        self.restitution
    }

    fn set_restitution(&mut self, restitution: f32) {
        self.restitution = restitution;
    }

    fn collision_shape(&self) -> &CollisionShape {
        &self.shape
    }

    fn set_collision_shape(&mut self, shape: CollisionShape) {
        self.shape = shape;
    }

    fn integrate(&mut self, gravity: Vec3, dt: f32) {
        if self.is_static() {
            self.force = Vec3::ZERO;
            return;
        }

        // F = ma, so a = F/m = F * inv_mass
        let acceleration = gravity + self.force * self.inverse_mass;
        self.linear_velocity += acceleration * dt;
        self.transform.translation += self.linear_velocity * dt;

        let spin = self.angular_velocity * dt;
        if spin.length_squared() > 0.0 {
            let delta = Quat::from_scaled_axis(spin);
            self.transform.rotation = (delta * self.transform.rotation).normalize();
        }

        self.force = Vec3::ZERO;
    }
}
