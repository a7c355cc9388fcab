use rustc_hash::FxHashMap;

use crate::constants::core::CHUNK_SIZE;
use crate::world::{BlockId, Chunk, ChunkPos, VoxelPos};

/// Chunked block storage
///
/// Chunks are inserted and evicted by whatever loading system drives the
/// world; reads against an evicted chunk report `None` rather than guessing.
pub struct World {
    chunks: FxHashMap<ChunkPos, Chunk>,
    chunk_size: u32,
}

impl Default for World {
    fn default() -> Self {
        Self::new(CHUNK_SIZE)
    }
}

impl World {
    pub fn new(chunk_size: u32) -> Self {
        Self {
            chunks: FxHashMap::default(),
            chunk_size: chunk_size.max(1),
        }
    }

    /// Insert an empty (air) chunk if none is loaded at `pos`
    pub fn load_chunk(&mut self, pos: ChunkPos) -> &mut Chunk {
        let size = self.chunk_size;
        self.chunks
            .entry(pos)
            .or_insert_with(|| Chunk::new(size))
    }

    pub fn unload_chunk(&mut self, pos: ChunkPos) -> Option<Chunk> {
        self.chunks.remove(&pos)
    }

    pub fn is_chunk_loaded(&self, pos: ChunkPos) -> bool {
        self.chunks.contains_key(&pos)
    }

    pub fn loaded_chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Block at a world position, `None` when its chunk is not loaded
    pub fn get_block(&self, pos: VoxelPos) -> Option<BlockId> {
        let chunk_pos = pos.to_chunk_pos(self.chunk_size);
        let (x, y, z) = pos.to_local_pos(self.chunk_size);
        self.chunks
            .get(&chunk_pos)
            .map(|chunk| chunk.get_block(x, y, z))
    }

    /// Set a block, loading its chunk first if needed
    pub fn set_block(&mut self, pos: VoxelPos, block: BlockId) {
        let chunk_pos = pos.to_chunk_pos(self.chunk_size);
        let (x, y, z) = pos.to_local_pos(self.chunk_size);
        self.load_chunk(chunk_pos).set_block(x, y, z, block);
    }

    /// Fill an inclusive box of voxels
    pub fn fill(&mut self, min: VoxelPos, max: VoxelPos, block: BlockId) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set_block(VoxelPos::new(x, y, z), block);
                }
            }
        }
    }
}
