use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Chunk coordinates: world voxel coordinates divided by the chunk size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Integer voxel coordinates in world space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Voxel containing a world-space point. Points on a face belong to the
    /// voxel on the positive side.
    pub fn from_world_pos(pos: Vec3) -> Self {
        let cell = pos.floor();
        Self::new(cell.x as i32, cell.y as i32, cell.z as i32)
    }

    /// Owning chunk; negative coordinates round towards negative infinity
    pub fn to_chunk_pos(&self, chunk_size: u32) -> ChunkPos {
        let size = chunk_size as i32;
        ChunkPos::new(
            self.x.div_euclid(size),
            self.y.div_euclid(size),
            self.z.div_euclid(size),
        )
    }

    /// Coordinates inside the owning chunk, each in `0..chunk_size`
    pub fn to_local_pos(&self, chunk_size: u32) -> (u32, u32, u32) {
        let size = chunk_size as i32;
        (
            self.x.rem_euclid(size) as u32,
            self.y.rem_euclid(size) as u32,
            self.z.rem_euclid(size) as u32,
        )
    }
}
