//! Environment-aware rigid body
//!
//! `ElementRigidBody` wraps a solver body and adds what the solver knows
//! nothing about: fluid drag sampled from the world, a drag coefficient, the
//! environment-load distance, an optional priority observer, an
//! interpolation frame, and a dirty flag that every property setter raises
//! for the replication pass.

use glam::{Quat, Vec3};

use super::aabb::{aabb_center, aabb_half_extents, AABB};
use super::debug::{DebugLayer, DebuggableBody, ELEMENT_OUTLINE_COLOR};
use super::dirty::DirtyFlag;
use super::drag::{compute_drag, DragInput, DragResponse};
use super::dynamics::{DynamicsBody, SimpleBody};
use super::shape::{environment_load_distance, medium_sample_point, CollisionShape};
use super::transform::Isometry;
use crate::config::SpaceConfig;
use crate::constants::body_defaults;
use crate::network::{Frame, ObserverId};
use crate::world::EnvironmentSampler;

/// Material properties an element body is created with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProperties {
    pub mass: f32,
    pub drag_coefficient: f32,
    pub friction: f32,
    pub restitution: f32,
    pub do_fluid_resistance: bool,
}

impl Default for BodyProperties {
    fn default() -> Self {
        Self {
            mass: body_defaults::MASS,
            drag_coefficient: body_defaults::DRAG_COEFFICIENT,
            friction: body_defaults::FRICTION,
            restitution: body_defaults::RESTITUTION,
            do_fluid_resistance: body_defaults::DO_FLUID_RESISTANCE,
        }
    }
}

/// A higher-level object that owns an element body
pub trait PhysicsElement {
    type Body: DynamicsBody;

    fn rigid_body(&self) -> &ElementRigidBody<Self::Body>;
    fn rigid_body_mut(&mut self) -> &mut ElementRigidBody<Self::Body>;

    /// No-clip elements skip solid-collision-sensitive behaviour
    fn is_in_no_clip(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct ElementRigidBody<B: DynamicsBody = SimpleBody> {
    dynamics: B,
    drag_coefficient: f32,
    do_fluid_resistance: bool,
    env_load_distance: i32,
    priority_observer: Option<ObserverId>,
    frame: Option<Frame>,
    properties_dirty: DirtyFlag,
}

impl ElementRigidBody<SimpleBody> {
    /// Body at the origin with default properties
    pub fn from_shape(shape: CollisionShape) -> Self {
        Self::new(SimpleBody::new(shape, body_defaults::MASS))
    }

    /// Body derived from an element's world-space bounding box: a cuboid of
    /// the same size, placed at the box center, with default properties
    pub fn from_bounding_box(bounds: &AABB) -> Self {
        let dynamics = SimpleBody::new(CollisionShape::from_aabb(bounds), body_defaults::MASS)
            .with_transform(Isometry::from_translation(aabb_center(bounds)));
        Self::new(dynamics)
    }
}

impl<B: DynamicsBody> ElementRigidBody<B> {
    /// Wrap a solver body using the default element properties
    pub fn new(dynamics: B) -> Self {
        Self::with_properties(dynamics, BodyProperties::default())
    }

    /// Wrap a solver body with explicit properties. The body starts clean.
    pub fn with_properties(mut dynamics: B, properties: BodyProperties) -> Self {
        dynamics.set_mass(properties.mass);
        dynamics.set_friction(properties.friction);
        dynamics.set_restitution(properties.restitution);
        let env_load_distance = environment_load_distance(&dynamics.bounding_box());

        Self {
            dynamics,
            drag_coefficient: properties.drag_coefficient,
            do_fluid_resistance: properties.do_fluid_resistance,
            env_load_distance,
            priority_observer: None,
            frame: None,
            properties_dirty: DirtyFlag::new(),
        }
    }

    /// The wrapped solver body
    pub fn dynamics(&self) -> &B {
        &self.dynamics
    }

    /// Mutable access for the solver. Changes made here bypass the dirty flag.
    pub fn dynamics_mut(&mut self) -> &mut B {
        &mut self.dynamics
    }

    fn calculate_load_distance(&self) -> i32 {
        environment_load_distance(&self.dynamics.bounding_box())
    }

    /// Apply one step of fluid drag
    pub fn apply_drag<S>(&mut self, sampler: &S, config: &SpaceConfig)
    where
        S: EnvironmentSampler + ?Sized,
    {
        if !self.should_do_fluid_resistance() {
            return;
        }

        let bounds = self.dynamics.bounding_box();
        let medium = sampler.medium_at(medium_sample_point(&bounds));
        let velocity = self.dynamics.linear_velocity();

        let input = DragInput::new(
            velocity,
            self.dynamics.mass(),
            config.gravity,
            config.density_of(medium),
            config.air_density,
        )
        .with_drag_coefficient(self.drag_coefficient)
        .with_half_extents(aabb_half_extents(&bounds))
        .with_min_force(config.min_drag_force);

        match compute_drag(&input) {
            DragResponse::Impulse(impulse) => {
                log::debug!(
                    "Body stopped entering {:?} at {:?} (velocity {:?})",
                    medium,
                    bounds.max,
                    velocity
                );
                self.dynamics.apply_central_impulse(impulse);
            }
            DragResponse::Force(force) => self.dynamics.apply_central_force(force),
            DragResponse::None => {
                log::trace!("Drag below threshold or non-finite for velocity {:?}", velocity);
            }
        }
    }

    /* Shape */

    pub fn collision_shape(&self) -> &CollisionShape {
        self.dynamics.collision_shape()
    }

    /// Replace the collision shape and recompute the load distance
    pub fn set_collision_shape(&mut self, shape: CollisionShape) {
        self.dynamics.set_collision_shape(shape);
        let distance = self.calculate_load_distance();
        self.set_environment_load_distance(distance);
    }

    /* Property setters - each one marks the body dirty */

    pub fn set_mass(&mut self, mass: f32) {
        self.dynamics.set_mass(mass);
        self.properties_dirty.mark();
    }

    pub fn set_drag_coefficient(&mut self, drag_coefficient: f32) {
        self.drag_coefficient = drag_coefficient;
        self.properties_dirty.mark();
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.dynamics.set_friction(friction);
        self.properties_dirty.mark();
    }

    pub fn set_restitution(&mut self, restitution: f32) {
        self.dynamics.set_restitution(restitution);
        self.properties_dirty.mark();
    }

    pub fn set_environment_load_distance(&mut self, env_load_distance: i32) {
        self.env_load_distance = env_load_distance;
        self.properties_dirty.mark();
    }

    pub fn set_do_fluid_resistance(&mut self, do_fluid_resistance: bool) {
        self.do_fluid_resistance = do_fluid_resistance;
        self.properties_dirty.mark();
    }

    /// Set or clear the observer this body's updates matter most to
    pub fn prioritize(&mut self, observer: Option<ObserverId>) {
        self.priority_observer = observer;
        self.properties_dirty.mark();
    }

    /* Property getters */

    pub fn mass(&self) -> f32 {
        self.dynamics.mass()
    }

    pub fn drag_coefficient(&self) -> f32 {
        self.drag_coefficient
    }

    pub fn friction(&self) -> f32 {
        self.dynamics.friction()
    }

    pub fn restitution(&self) -> f32 {
        self.dynamics.restitution()
    }

    pub fn environment_load_distance(&self) -> i32 {
        self.env_load_distance
    }

    pub fn should_do_fluid_resistance(&self) -> bool {
        self.do_fluid_resistance
    }

    pub fn priority_observer(&self) -> Option<ObserverId> {
        self.priority_observer
    }

    /* Dirty tracking */

    pub fn are_properties_dirty(&self) -> bool {
        self.properties_dirty.is_dirty()
    }

    /// Read and clear the dirty flag; called by the replication pass
    pub fn consume_properties_dirty(&self) -> bool {
        self.properties_dirty.consume_and_clear()
    }

    /* Kinematic state - delegated to the solver */

    pub fn transform(&self) -> Isometry {
        self.dynamics.transform()
    }

    pub fn set_transform(&mut self, transform: Isometry) {
        self.dynamics.set_transform(transform);
    }

    pub fn physics_location(&self) -> Vec3 {
        self.dynamics.position()
    }

    pub fn physics_rotation(&self) -> Quat {
        self.dynamics.rotation()
    }

    pub fn set_physics_rotation(&mut self, rotation: Quat) {
        self.dynamics.set_rotation(rotation);
    }

    pub fn linear_velocity(&self) -> Vec3 {
        self.dynamics.linear_velocity()
    }

    pub fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.dynamics.set_linear_velocity(velocity);
    }

    pub fn angular_velocity(&self) -> Vec3 {
        self.dynamics.angular_velocity()
    }

    pub fn set_angular_velocity(&mut self, velocity: Vec3) {
        self.dynamics.set_angular_velocity(velocity);
    }

    /* Interpolation frame - stored for renderers, never read here */

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn frame_mut(&mut self) -> Option<&mut Frame> {
        self.frame.as_mut()
    }

    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = Some(frame);
    }
}

impl<B: DynamicsBody> DebuggableBody for ElementRigidBody<B> {
    fn outline_color(&self) -> Vec3 {
        ELEMENT_OUTLINE_COLOR
    }

    fn debug_layer(&self) -> DebugLayer {
        DebugLayer::Entity
    }
}
