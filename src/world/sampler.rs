//! Environment sampling
//!
//! Answers "what medium occupies this point" for the drag model. Sampling is
//! done at a single point and never fails: missing data is air.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::world::{BlockId, VoxelPos, World};

/// Medium classification used to pick a density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediumKind {
    #[default]
    Air,
    Water,
    Lava,
}

impl MediumKind {
    /// Water and lava map to themselves; solids and everything else are air
    pub fn from_block(block: BlockId) -> Self {
        match block {
            BlockId::WATER => MediumKind::Water,
            BlockId::LAVA => MediumKind::Lava,
            _ => MediumKind::Air,
        }
    }
}

/// Source of medium information around a body
pub trait EnvironmentSampler {
    fn medium_at(&self, position: Vec3) -> MediumKind;
}

impl EnvironmentSampler for World {
    fn medium_at(&self, position: Vec3) -> MediumKind {
        self.get_block(VoxelPos::from_world_pos(position))
            .map(MediumKind::from_block)
            .unwrap_or_default()
    }
}

/// The same medium everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniformMedium(pub MediumKind);

impl EnvironmentSampler for UniformMedium {
    fn medium_at(&self, _position: Vec3) -> MediumKind {
        self.0
    }
}

impl<S: EnvironmentSampler + ?Sized> EnvironmentSampler for &S {
    fn medium_at(&self, position: Vec3) -> MediumKind {
        (**self).medium_at(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_classification() {
        assert_eq!(MediumKind::from_block(BlockId::WATER), MediumKind::Water);
        assert_eq!(MediumKind::from_block(BlockId::LAVA), MediumKind::Lava);
        assert_eq!(MediumKind::from_block(BlockId::AIR), MediumKind::Air);
        assert_eq!(MediumKind::from_block(BlockId::STONE), MediumKind::Air);
        assert_eq!(MediumKind::from_block(BlockId(999)), MediumKind::Air);
    }

    #[test]
    fn test_world_sampling() {
        let mut world = World::new(16);
        world.set_block(VoxelPos::new(0, 0, 0), BlockId::WATER);
        world.set_block(VoxelPos::new(0, 1, 0), BlockId::LAVA);

        assert_eq!(world.medium_at(Vec3::new(0.5, 0.5, 0.5)), MediumKind::Water);
        assert_eq!(world.medium_at(Vec3::new(0.1, 1.9, 0.9)), MediumKind::Lava);
        assert_eq!(world.medium_at(Vec3::new(1.5, 0.5, 0.5)), MediumKind::Air);
    }

    #[test]
    fn test_unloaded_region_is_air() {
        let world = World::new(16);
        assert_eq!(world.medium_at(Vec3::new(100.0, -50.0, 3.0)), MediumKind::Air);
    }
}
