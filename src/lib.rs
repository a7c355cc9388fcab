pub mod config;
pub mod constants;
pub mod network;
pub mod persistence;
pub mod physics;
pub mod world;

pub use config::{ConfigError, SpaceConfig};
pub use network::{Frame, ObserverId, PropertyReplicator};
pub use persistence::BodyRecord;
pub use physics::{
    CollisionShape, DynamicsBody, ElementRigidBody, EntityId, Isometry, PhysicsElement,
    PhysicsSpace, SimpleBody, AABB,
};
pub use world::{BlockId, EnvironmentSampler, MediumKind, VoxelPos, World};
