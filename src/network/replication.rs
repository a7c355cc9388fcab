use crate::constants::network_constants::{MAX_PACKETS_PER_FLUSH, SYNC_INTERVAL_TICKS};
use crate::network::BodyPropertiesPacket;
use crate::physics::{PhysicsElement, PhysicsError, PhysicsResult, PhysicsSpace};

/// Configuration for property replication
#[derive(Debug, Clone)]
pub struct ReplicationConfig {
    /// Ticks between flushes
    pub sync_interval_ticks: u32,
    /// Bodies past this count stay dirty until the next flush
    pub max_packets_per_flush: usize,
}

impl Default for ReplicationConfig {
    fn default() -> Self {
        Self {
            sync_interval_ticks: SYNC_INTERVAL_TICKS,
            max_packets_per_flush: MAX_PACKETS_PER_FLUSH,
        }
    }
}

/// Counters for the replication pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplicationStats {
    pub flushes: u64,
    pub packets_sent: u64,
    /// Dirty bodies left for a later flush because of the packet cap
    pub deferred: u64,
}

/// Pushes body property snapshots to observers when bodies change
///
/// Reads and clears each body's dirty flag; clean bodies produce nothing.
pub struct PropertyReplicator {
    config: ReplicationConfig,
    ticks_since_flush: u32,
    stats: ReplicationStats,
}

impl Default for PropertyReplicator {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyReplicator {
    pub fn new() -> Self {
        Self::with_config(ReplicationConfig::default())
    }

    pub fn with_config(config: ReplicationConfig) -> Self {
        Self {
            config,
            ticks_since_flush: 0,
            stats: ReplicationStats::default(),
        }
    }

    pub fn config(&self) -> &ReplicationConfig {
        &self.config
    }

    pub fn stats(&self) -> ReplicationStats {
        self.stats
    }

    /// Call once per simulation tick; flushes when the sync interval elapses
    pub fn tick<E: PhysicsElement>(&mut self, space: &PhysicsSpace<E>) -> Vec<BodyPropertiesPacket> {
        self.ticks_since_flush += 1;
        if self.ticks_since_flush < self.config.sync_interval_ticks.max(1) {
            return Vec::new();
        }
        self.ticks_since_flush = 0;
        self.flush(space)
    }

    /// Collect a packet for every dirty body, prioritised bodies first
    pub fn flush<E: PhysicsElement>(&mut self, space: &PhysicsSpace<E>) -> Vec<BodyPropertiesPacket> {
        let mut dirty: Vec<_> = space
            .iter()
            .filter(|(_, element)| element.rigid_body().are_properties_dirty())
            .collect();

        // Stable: bodies with a priority observer go first, order otherwise kept
        dirty.sort_by_key(|(_, element)| element.rigid_body().priority_observer().is_none());

        let cap = self.config.max_packets_per_flush;
        let mut packets = Vec::with_capacity(dirty.len().min(cap));
        for (entity, element) in dirty.iter().take(cap) {
            let body = element.rigid_body();
            if !body.consume_properties_dirty() {
                continue;
            }
            packets.push(BodyPropertiesPacket {
                entity: *entity,
                tick: space.tick(),
                record: body.to_record(),
                do_fluid_resistance: body.should_do_fluid_resistance(),
                environment_load_distance: body.environment_load_distance(),
                priority_observer: body.priority_observer(),
            });
        }

        let deferred = dirty.len().saturating_sub(cap) as u64;
        self.stats.flushes += 1;
        self.stats.packets_sent += packets.len() as u64;
        self.stats.deferred += deferred;

        if !packets.is_empty() {
            log::debug!(
                "Replicated {} body snapshots at tick {} ({} deferred)",
                packets.len(),
                space.tick(),
                deferred
            );
        }
        packets
    }
}

/// Apply a received snapshot to the matching local body. Returns whether the
/// record carried state. A zero-mass record leaves the seven record fields
/// alone; the element-level properties and the observer are applied either way.
pub fn apply_packet<E: PhysicsElement>(
    space: &mut PhysicsSpace<E>,
    packet: &BodyPropertiesPacket,
) -> PhysicsResult<bool> {
    let element = space
        .element_mut(packet.entity)
        .ok_or(PhysicsError::UnknownEntity(packet.entity))?;

    let body = element.rigid_body_mut();
    let applied = body.apply_record(&packet.record);
    body.set_do_fluid_resistance(packet.do_fluid_resistance);
    body.set_environment_load_distance(packet.environment_load_distance);
    body.prioritize(packet.priority_observer);
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpaceConfig;
    use crate::network::ObserverId;
    use crate::physics::{CollisionShape, ElementRigidBody, EntityId, SimpleBody};
    use glam::Vec3;

    struct Ball(ElementRigidBody);

    impl PhysicsElement for Ball {
        type Body = SimpleBody;

        fn rigid_body(&self) -> &ElementRigidBody {
            &self.0
        }

        fn rigid_body_mut(&mut self) -> &mut ElementRigidBody {
            &mut self.0
        }
    }

    fn ball() -> Ball {
        Ball(ElementRigidBody::from_shape(CollisionShape::sphere(0.5)))
    }

    fn space_with(count: usize) -> (PhysicsSpace<Ball>, Vec<EntityId>) {
        let mut space = PhysicsSpace::new(SpaceConfig::default());
        let ids = (0..count).map(|_| space.add_element(ball())).collect();
        (space, ids)
    }

    #[test]
    fn test_clean_space_sends_nothing() {
        let (space, _) = space_with(3);
        let mut replicator = PropertyReplicator::new();
        assert!(replicator.flush(&space).is_empty());
        assert_eq!(replicator.stats().flushes, 1);
    }

    #[test]
    fn test_dirty_body_sent_once() {
        let (mut space, ids) = space_with(3);
        space
            .element_mut(ids[1])
            .expect("element should exist")
            .0
            .set_friction(0.1);

        let mut replicator = PropertyReplicator::new();
        let packets = replicator.flush(&space);
        assert_eq!(packets.len(), 1);
        assert_eq!(packets[0].entity, ids[1]);
        assert_eq!(packets[0].record.friction, 0.1);

        assert!(replicator.flush(&space).is_empty());
    }

    #[test]
    fn test_kinematic_changes_are_not_replicated_here() {
        let (mut space, ids) = space_with(1);
        space
            .element_mut(ids[0])
            .expect("element should exist")
            .0
            .set_linear_velocity(Vec3::X);

        assert!(PropertyReplicator::new().flush(&space).is_empty());
    }

    #[test]
    fn test_prioritized_bodies_first_and_cap_defers() {
        let (mut space, ids) = space_with(4);
        for id in &ids {
            space.element_mut(*id).expect("element should exist").0.set_mass(2.0);
        }
        space
            .element_mut(ids[3])
            .expect("element should exist")
            .0
            .prioritize(Some(ObserverId(5)));

        let mut replicator = PropertyReplicator::with_config(ReplicationConfig {
            sync_interval_ticks: 1,
            max_packets_per_flush: 2,
        });

        let first = replicator.flush(&space);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].entity, ids[3]);
        assert_eq!(first[0].priority_observer, Some(ObserverId(5)));
        assert_eq!(first[1].entity, ids[0]);
        assert_eq!(replicator.stats().deferred, 2);

        let second = replicator.flush(&space);
        let sent: Vec<_> = second.iter().map(|p| p.entity).collect();
        assert_eq!(sent, vec![ids[1], ids[2]]);
        assert!(replicator.flush(&space).is_empty());
    }

    #[test]
    fn test_sync_interval() {
        let (mut space, ids) = space_with(1);
        let mut replicator = PropertyReplicator::with_config(ReplicationConfig {
            sync_interval_ticks: 3,
            max_packets_per_flush: 16,
        });

        space.element_mut(ids[0]).expect("element should exist").0.set_restitution(0.9);
        assert!(replicator.tick(&space).is_empty());
        assert!(replicator.tick(&space).is_empty());
        assert_eq!(replicator.tick(&space).len(), 1);
    }

    #[test]
    fn test_apply_packet_on_receiver() {
        let (mut server, ids) = space_with(1);
        {
            let body = &mut server.element_mut(ids[0]).expect("element should exist").0;
            body.set_mass(5.0);
            body.set_linear_velocity(Vec3::new(0.0, 3.0, 0.0));
            body.prioritize(Some(ObserverId(2)));
        }
        let packets = PropertyReplicator::new().flush(&server);
        assert_eq!(packets.len(), 1);

        let (mut client, client_ids) = space_with(1);
        assert_eq!(client_ids[0], ids[0]);
        assert_eq!(apply_packet(&mut client, &packets[0]), Ok(true));

        let body = &client.element(ids[0]).expect("element should exist").0;
        assert_eq!(body.mass(), 5.0);
        assert_eq!(body.linear_velocity(), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(body.priority_observer(), Some(ObserverId(2)));

        assert_eq!(
            apply_packet(&mut client, &BodyPropertiesPacket { entity: 99, ..packets[0] }),
            Err(PhysicsError::UnknownEntity(99))
        );
    }

    #[test]
    fn test_static_body_keeps_observer_and_element_properties() {
        let (mut server, ids) = space_with(1);
        {
            let body = &mut server.element_mut(ids[0]).expect("element should exist").0;
            body.set_mass(0.0);
            body.set_do_fluid_resistance(false);
            body.prioritize(Some(ObserverId(4)));
        }
        let packets = PropertyReplicator::new().flush(&server);
        assert_eq!(packets.len(), 1);
        assert!(!packets[0].record.is_present());

        let (mut client, _) = space_with(1);
        assert_eq!(apply_packet(&mut client, &packets[0]), Ok(false));

        let body = &client.element(ids[0]).expect("element should exist").0;
        // Record fields untouched by the zero-mass sentinel
        assert_eq!(body.mass(), 1.0);
        assert!(!body.should_do_fluid_resistance());
        assert_eq!(body.priority_observer(), Some(ObserverId(4)));
    }
}
