//! Flat key-value snapshot of an element body
//!
//! Keys: `orientation` (x, y, z, w), `linear_velocity`, `angular_velocity`,
//! `drag_coefficient`, `mass`, `friction`, `restitution`. A mass of exactly
//! zero means "no physics state" and applying such a record does nothing.
//! Missing keys read as zero, so a record without `mass` is also absent.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::{corrupted_data, PersistenceError, PersistenceErrorContext, PersistenceResult};
use crate::physics::{DynamicsBody, ElementRigidBody};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyRecord {
    /* Movement info */
    pub orientation: [f32; 4],
    pub linear_velocity: [f32; 3],
    pub angular_velocity: [f32; 3],

    /* Properties */
    pub drag_coefficient: f32,
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
}

impl BodyRecord {
    /// Whether this record carries physics state at all
    pub fn is_present(&self) -> bool {
        self.mass != 0.0
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_array(self.orientation)
    }

    pub fn linear_velocity(&self) -> Vec3 {
        Vec3::from_array(self.linear_velocity)
    }

    pub fn angular_velocity(&self) -> Vec3 {
        Vec3::from_array(self.angular_velocity)
    }

    pub fn to_json(&self) -> PersistenceResult<String> {
        serde_json::to_string(self).map_err(|e| PersistenceError::SerializationError(e.to_string()))
    }

    pub fn from_json(source: &str) -> PersistenceResult<Self> {
        serde_json::from_str(source).persistence_context("body record json")
    }

    pub fn to_bytes(&self) -> PersistenceResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> PersistenceResult<Self> {
        if bytes.is_empty() {
            return Err(corrupted_data("empty body record"));
        }
        bincode::deserialize(bytes).persistence_context("body record bytes")
    }
}

impl<B: DynamicsBody> ElementRigidBody<B> {
    /// Snapshot kinematic and material state
    pub fn to_record(&self) -> BodyRecord {
        let mut record = BodyRecord::default();
        self.write_record(&mut record);
        record
    }

    pub fn write_record(&self, record: &mut BodyRecord) {
        record.orientation = self.physics_rotation().to_array();
        record.linear_velocity = self.linear_velocity().to_array();
        record.angular_velocity = self.angular_velocity().to_array();

        record.drag_coefficient = self.drag_coefficient();
        record.mass = self.mass();
        record.friction = self.friction();
        record.restitution = self.restitution();
    }

    /// Restore state through the normal setters. Records with zero mass are
    /// skipped entirely. Returns whether anything was applied.
    pub fn apply_record(&mut self, record: &BodyRecord) -> bool {
        if !record.is_present() {
            return false;
        }

        self.set_physics_rotation(record.orientation());
        self.set_linear_velocity(record.linear_velocity());
        self.set_angular_velocity(record.angular_velocity());

        self.set_drag_coefficient(record.drag_coefficient);
        self.set_mass(record.mass);
        self.set_friction(record.friction);
        self.set_restitution(record.restitution);
        true
    }
}
