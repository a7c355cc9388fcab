//! Voxel world storage and environment sampling

pub mod block;
pub mod chunk;
pub mod position;
pub mod sampler;
pub mod world;

pub use block::BlockId;
pub use chunk::Chunk;
pub use position::{ChunkPos, VoxelPos};
pub use sampler::{EnvironmentSampler, MediumKind, UniformMedium};
pub use world::World;
