// Element Physics Constants - SINGLE SOURCE OF TRUTH
//
// Every default used by the body, the drag model and the space lives here.
// Configuration files override the space-level values at load time.

/// World storage constants
pub mod core {
    /// Chunk edge length in voxels
    pub const CHUNK_SIZE: u32 = 16;
}

/// Block ID constants - raw u16 values
pub mod blocks {
    pub const AIR: u16 = 0;
    pub const STONE: u16 = 3;
    pub const WATER: u16 = 6;
    pub const LAVA: u16 = 21;
}

/// Space-level physics defaults
pub mod physics_constants {
    /// Density of air (kg/m³)
    pub const AIR_DENSITY: f32 = 1.2;

    /// Density of water (kg/m³)
    pub const WATER_DENSITY: f32 = 997.0;

    /// Density of lava (kg/m³)
    pub const LAVA_DENSITY: f32 = 3100.0;

    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: [f32; 3] = [0.0, -9.807, 0.0];

    /// Fixed physics timestep (seconds)
    /// 60 FPS physics simulation
    pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

    /// Upper bound on fixed steps run per update call
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Drag forces at or below this magnitude are dropped
    pub const MIN_DRAG_FORCE: f32 = 0.1;
}

/// Element body defaults
pub mod body_defaults {
    pub const MASS: f32 = 1.0;
    pub const DRAG_COEFFICIENT: f32 = 0.05;
    pub const FRICTION: f32 = 1.0;
    pub const RESTITUTION: f32 = 0.5;
    pub const DO_FLUID_RESISTANCE: bool = true;

    /// Outline color used by debug renderers (RGB)
    pub const OUTLINE_COLOR: [f32; 3] = [1.0, 0.6, 0.0];
}

/// Replication constants
pub mod network_constants {
    /// Ticks between property flushes
    pub const SYNC_INTERVAL_TICKS: u32 = 1;

    /// Packets emitted per flush before remaining bodies wait for the next one
    pub const MAX_PACKETS_PER_FLUSH: usize = 256;
}
