//! Axis-Aligned Bounding Box
//!
//! Pure data plus free functions over it.

use glam::Vec3;

/// Axis-Aligned Bounding Box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

/// Create AABB from center point and half extents
pub fn aabb_from_center_half_extents(center: Vec3, half_extents: Vec3) -> AABB {
    AABB {
        min: center - half_extents,
        max: center + half_extents,
    }
}

/// Get center point of AABB
pub fn aabb_center(aabb: &AABB) -> Vec3 {
    (aabb.min + aabb.max) * 0.5
}

/// Get half extents of AABB
///
/// This is the "extent" the drag model and the load distance are built on.
pub fn aabb_half_extents(aabb: &AABB) -> Vec3 {
    (aabb.max - aabb.min) * 0.5
}
