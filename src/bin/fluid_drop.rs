//! Fluid drop demo
//! Drops a crate from above a water pool and logs what the drag model does:
//! quadratic air drag on the way down, then an abrupt stop on entering water.
//!
//! Usage: fluid_drop [space.toml]

use anyhow::{Context, Result};
use glam::Vec3;

use element_physics::network::{Frame, ObserverId, PropertyReplicator};
use element_physics::physics::{CollisionShape, ElementRigidBody, Isometry, PhysicsElement, PhysicsSpace, SimpleBody};
use element_physics::world::{BlockId, VoxelPos, World};
use element_physics::SpaceConfig;

struct Crate {
    body: ElementRigidBody,
}

impl PhysicsElement for Crate {
    type Body = SimpleBody;

    fn rigid_body(&self) -> &ElementRigidBody {
        &self.body
    }

    fn rigid_body_mut(&mut self) -> &mut ElementRigidBody {
        &mut self.body
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SpaceConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => SpaceConfig::default(),
    };

    // Stone floor under a 4-deep water pool
    let mut world = World::default();
    world.fill(VoxelPos::new(-8, -1, -8), VoxelPos::new(8, -1, 8), BlockId::STONE);
    world.fill(VoxelPos::new(-8, 0, -8), VoxelPos::new(8, 3, 8), BlockId::WATER);

    let shape = CollisionShape::cuboid(Vec3::splat(0.5));
    let dynamics = SimpleBody::new(shape, 1.0)
        .with_transform(Isometry::from_translation(Vec3::new(0.0, 30.0, 0.0)));
    let mut body = ElementRigidBody::new(dynamics);
    body.set_mass(2.0);
    body.prioritize(Some(ObserverId(1)));
    body.set_frame(Frame::new(body.transform()));

    let mut space = PhysicsSpace::new(config);
    let id = space.add_element(Crate { body });
    let mut replicator = PropertyReplicator::new();

    let frame_time = 1.0 / 30.0;
    for frame in 0..120 {
        space.update(&world, frame_time);

        let element = space
            .element_mut(id)
            .context("crate vanished from the space")?;
        let body = element.rigid_body_mut();
        let transform = body.transform();
        if let Some(frame) = body.frame_mut() {
            frame.push(transform);
        }

        for packet in replicator.tick(&space) {
            log::info!(
                "Replicated entity {} (mass {}, observer {:?})",
                packet.entity,
                packet.record.mass,
                packet.priority_observer
            );
        }

        if frame % 10 == 0 {
            if let Some(element) = space.element(id) {
                let body = element.rigid_body();
                log::info!(
                    "t={:.2}s y={:.3} vy={:.3}",
                    frame as f32 * frame_time,
                    body.physics_location().y,
                    body.linear_velocity().y
                );
            }
        }
    }

    Ok(())
}
