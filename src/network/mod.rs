//! Replication of body properties to observers

pub mod interpolation;
pub mod observer;
pub mod packet;
pub mod replication;

pub use interpolation::Frame;
pub use observer::ObserverId;
pub use packet::BodyPropertiesPacket;
pub use replication::{apply_packet, PropertyReplicator, ReplicationConfig, ReplicationStats};
