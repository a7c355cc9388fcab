use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

use super::aabb::{aabb_from_center_half_extents, aabb_half_extents, AABB};
use super::transform::Isometry;

/// Collision geometry owned by a rigid body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollisionShape {
    Cuboid { half_extents: Vec3 },
    Sphere { radius: f32 },
}

impl CollisionShape {
    pub fn cuboid(half_extents: Vec3) -> Self {
        CollisionShape::Cuboid { half_extents }
    }

    pub fn sphere(radius: f32) -> Self {
        CollisionShape::Sphere { radius }
    }

    /// Box shape matching an element's bounding box. Only the size is kept;
    /// placement comes from the body transform.
    pub fn from_aabb(aabb: &AABB) -> Self {
        CollisionShape::Cuboid {
            half_extents: aabb_half_extents(aabb),
        }
    }

    /// World-space bounding box of the shape under `transform`
    pub fn bounding_box(&self, transform: &Isometry) -> AABB {
        match *self {
            CollisionShape::Cuboid { half_extents } => {
                // Rotated box: project each local axis onto the world axes
                let m = Mat3::from_quat(transform.rotation);
                let world_half = Vec3::new(
                    m.row(0).abs().dot(half_extents),
                    m.row(1).abs().dot(half_extents),
                    m.row(2).abs().dot(half_extents),
                );
                aabb_from_center_half_extents(transform.translation, world_half)
            }
            CollisionShape::Sphere { radius } => {
                aabb_from_center_half_extents(transform.translation, Vec3::splat(radius))
            }
        }
    }
}

/// Distance (in blocks) around a body that must stay loaded:
/// `ceil(|half extent|) + 1`, saturating at `i32::MAX`
pub fn environment_load_distance(bounds: &AABB) -> i32 {
    // Float-to-int `as` saturates, so huge or infinite extents cannot overflow
    (aabb_half_extents(bounds).length().ceil() + 1.0) as i32
}

/// Point at which the surrounding medium is sampled
pub fn medium_sample_point(bounds: &AABB) -> Vec3 {
    bounds.max
}
