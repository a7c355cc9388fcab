use crate::world::BlockId;

/// Dense block storage for one cubic chunk
#[derive(Debug, Clone)]
pub struct Chunk {
    size: u32,
    blocks: Vec<BlockId>,
}

impl Chunk {
    /// Create a chunk filled with air
    pub fn new(size: u32) -> Self {
        Self::filled(size, BlockId::AIR)
    }

    pub fn filled(size: u32, block: BlockId) -> Self {
        let edge = size as usize;
        let volume = edge * edge * edge;
        Self {
            size,
            blocks: vec![block; volume],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32, z: u32) -> Option<usize> {
        local_index(self.size, x, y, z)
    }

    /// Block at local coordinates; out-of-range reads return air
    pub fn get_block(&self, x: u32, y: u32, z: u32) -> BlockId {
        self.index(x, y, z)
            .and_then(|idx| self.blocks.get(idx).copied())
            .unwrap_or(BlockId::AIR)
    }

    pub fn set_block(&mut self, x: u32, y: u32, z: u32, block: BlockId) {
        if let Some(idx) = self.index(x, y, z) {
            self.blocks[idx] = block;
        }
    }
}

/// Linear index of a local voxel, computed in `usize` so large chunk sizes
/// cannot wrap. `None` when out of range.
#[inline]
fn local_index(size: u32, x: u32, y: u32, z: u32) -> Option<usize> {
    if x >= size || y >= size || z >= size {
        return None;
    }
    let size = size as usize;
    Some(x as usize + y as usize * size + z as usize * size * size)
}
