use serde::{Deserialize, Serialize};

use crate::constants::blocks;

/// Block type stored in a chunk
///
/// Only the ids the medium sampler and the demo world care about are named
/// here; any other id reads as a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const AIR: BlockId = BlockId(blocks::AIR);
    pub const STONE: BlockId = BlockId(blocks::STONE);
    pub const WATER: BlockId = BlockId(blocks::WATER);
    pub const LAVA: BlockId = BlockId(blocks::LAVA);
}
