use serde::{Deserialize, Serialize};

use crate::network::ObserverId;
use crate::persistence::{corrupted_data, BodyRecord, PersistenceErrorContext, PersistenceResult};
use crate::physics::EntityId;

/// Material/kinematic snapshot of one body, sent when its properties changed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPropertiesPacket {
    pub entity: EntityId,
    /// Space tick the snapshot was taken on
    pub tick: u64,
    pub record: BodyRecord,
    /// Element-level properties that live outside the seven-key record
    pub do_fluid_resistance: bool,
    pub environment_load_distance: i32,
    pub priority_observer: Option<ObserverId>,
}

impl BodyPropertiesPacket {
    pub fn encode(&self) -> PersistenceResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> PersistenceResult<Self> {
        if bytes.is_empty() {
            return Err(corrupted_data("empty body properties packet"));
        }
        bincode::deserialize(bytes).persistence_context("body properties packet")
    }

    /// Whether this packet should be delivered to `observer` ahead of others
    pub fn is_prioritized_for(&self, observer: ObserverId) -> bool {
        self.priority_observer == Some(observer)
    }
}
