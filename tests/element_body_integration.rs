// Element Physics Body Integration Tests
//
// Drives element bodies through a real voxel world: drag in air and water,
// threshold behaviour, load distance, dirty tracking and record round-trips.

use glam::{Quat, Vec3};
use element_physics::{
    physics::{CollisionShape, ElementRigidBody, Isometry, PhysicsElement, PhysicsSpace, SimpleBody},
    world::{BlockId, VoxelPos, World},
    BodyRecord, SpaceConfig,
};

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

/// Unit box of the given mass centred at `position`
fn unit_box_at(position: Vec3, mass: f32) -> ElementRigidBody {
    let dynamics = SimpleBody::new(CollisionShape::cuboid(Vec3::splat(0.5)), mass)
        .with_transform(Isometry::from_translation(position));
    let mut body = ElementRigidBody::new(dynamics);
    body.set_mass(mass);
    body.consume_properties_dirty();
    body
}

/// Water pool filling x/z in [-4, 4], y in [0, 3]
fn pool_world() -> World {
    let mut world = World::default();
    world.fill(VoxelPos::new(-4, 0, -4), VoxelPos::new(4, 3, 4), BlockId::WATER);
    world
}

fn assert_vec_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).length() < 1e-4,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_falling_box_in_air_gets_upward_drag() {
    let world = World::default();
    let config = SpaceConfig::default();
    let mut body = unit_box_at(Vec3::new(0.0, 20.0, 0.0), 2.0);
    body.set_linear_velocity(Vec3::new(0.0, -5.0, 0.0));

    body.apply_drag(&world, &config);

    // area = 0.75, k = 1.2 * 0.05 * 0.75^2 / 2, F = 125 * k upward
    assert_vec_near(body.dynamics().accumulated_force(), Vec3::new(0.0, 2.109375, 0.0));
    assert_eq!(body.linear_velocity(), Vec3::new(0.0, -5.0, 0.0));
}

#[test]
fn test_box_entering_water_is_stopped() {
    let world = pool_world();
    let config = SpaceConfig::default();
    let mut body = unit_box_at(Vec3::new(0.0, 2.0, 0.0), 1.0);
    body.set_linear_velocity(Vec3::new(0.0, -5.0, 0.0));

    body.apply_drag(&world, &config);

    assert_vec_near(body.linear_velocity(), Vec3::ZERO);
    assert_eq!(body.dynamics().accumulated_force(), Vec3::ZERO);
}

#[test]
fn test_slow_body_receives_nothing() {
    let world = World::default();
    let config = SpaceConfig::default();
    let mut body = unit_box_at(Vec3::new(0.0, 20.0, 0.0), 1.0);
    body.set_linear_velocity(Vec3::new(0.0, -0.5, 0.0));

    body.apply_drag(&world, &config);

    assert_eq!(body.dynamics().accumulated_force(), Vec3::ZERO);
    assert_eq!(body.linear_velocity(), Vec3::new(0.0, -0.5, 0.0));
}

#[test]
fn test_disabled_fluid_resistance_ignores_water() {
    let world = pool_world();
    let config = SpaceConfig::default();
    let mut body = unit_box_at(Vec3::new(0.0, 2.0, 0.0), 1.0);
    body.set_do_fluid_resistance(false);
    body.set_linear_velocity(Vec3::new(0.0, -5.0, 0.0));

    body.apply_drag(&world, &config);

    assert_eq!(body.linear_velocity(), Vec3::new(0.0, -5.0, 0.0));
    assert_eq!(body.dynamics().accumulated_force(), Vec3::ZERO);
}

#[test]
fn test_unloaded_world_reads_as_air() {
    let mut world = pool_world();
    let config = SpaceConfig::default();
    let far_away = Vec3::new(500.0, 2.0, 500.0);
    let mut body = unit_box_at(far_away, 2.0);
    body.set_linear_velocity(Vec3::new(0.0, -5.0, 0.0));

    body.apply_drag(&world, &config);
    assert_vec_near(body.dynamics().accumulated_force(), Vec3::new(0.0, 2.109375, 0.0));

    // Evicting the pool chunk turns water back into air for the drag model
    let mut pooled = unit_box_at(Vec3::new(0.0, 2.0, 0.0), 2.0);
    pooled.set_linear_velocity(Vec3::new(0.0, -5.0, 0.0));
    assert!(world.unload_chunk(VoxelPos::new(0, 2, 0).to_chunk_pos(16)).is_some());

    pooled.apply_drag(&world, &config);
    assert_vec_near(pooled.dynamics().accumulated_force(), Vec3::new(0.0, 2.109375, 0.0));
    assert_eq!(pooled.linear_velocity(), Vec3::new(0.0, -5.0, 0.0));
}

#[test]
fn test_load_distance_tracks_shape() {
    let mut body = ElementRigidBody::from_shape(CollisionShape::cuboid(Vec3::new(0.3, 0.9, 0.3)));
    // |h| = sqrt(0.99) < 1
    assert_eq!(body.environment_load_distance(), 2);

    body.consume_properties_dirty();
    body.set_collision_shape(CollisionShape::cuboid(Vec3::splat(1.0)));
    // |h| = sqrt(3)
    assert_eq!(body.environment_load_distance(), 3);
    assert!(body.are_properties_dirty());

    body.set_collision_shape(CollisionShape::sphere(4.0));
    // |h| = sqrt(48)
    assert_eq!(body.environment_load_distance(), 8);
}

#[test]
fn test_huge_shape_load_distance_saturates() {
    let mut body = ElementRigidBody::from_shape(CollisionShape::sphere(3.0e9));
    assert_eq!(body.environment_load_distance(), i32::MAX);

    body.set_collision_shape(CollisionShape::cuboid(Vec3::splat(0.5)));
    assert_eq!(body.environment_load_distance(), 2);

    body.set_collision_shape(CollisionShape::sphere(3.0e9));
    assert_eq!(body.environment_load_distance(), i32::MAX);
}

#[test]
fn test_dirty_flag_is_monotone_until_consumed() {
    let mut body = ElementRigidBody::from_shape(CollisionShape::cuboid(Vec3::splat(0.5)));
    assert!(!body.are_properties_dirty());

    body.set_friction(0.2);
    body.set_restitution(0.9);
    assert!(body.are_properties_dirty());

    // Kinematic writes leave the flag alone
    body.set_linear_velocity(Vec3::X);
    body.set_physics_rotation(Quat::from_rotation_y(0.5));
    assert!(body.are_properties_dirty());

    assert!(body.consume_properties_dirty());
    assert!(!body.consume_properties_dirty());

    body.set_linear_velocity(Vec3::Y);
    assert!(!body.are_properties_dirty());
}

#[test]
fn test_record_round_trip_through_bytes_is_exact() {
    let mut source = ElementRigidBody::from_shape(CollisionShape::cuboid(Vec3::new(0.4, 0.4, 0.8)));
    source.set_physics_rotation(Quat::from_rotation_z(1.1) * Quat::from_rotation_x(-0.3));
    source.set_linear_velocity(Vec3::new(3.3, -7.1, 0.01));
    source.set_angular_velocity(Vec3::new(-0.7, 0.0, 2.2));
    source.set_drag_coefficient(0.113);
    source.set_mass(42.0);
    source.set_friction(0.61);
    source.set_restitution(0.33);

    let bytes = source.to_record().to_bytes().expect("Failed to encode record");
    let decoded = BodyRecord::from_bytes(&bytes).expect("Failed to decode record");

    let mut target = ElementRigidBody::from_shape(CollisionShape::cuboid(Vec3::splat(0.5)));
    assert!(target.apply_record(&decoded));

    assert_eq!(target.to_record(), source.to_record());
    assert_eq!(target.physics_rotation(), source.physics_rotation());
    assert_eq!(target.linear_velocity(), source.linear_velocity());
    assert_eq!(target.mass(), 42.0);
    assert!(target.are_properties_dirty());
}

#[test]
fn test_record_json_survives_a_file() {
    let mut source = ElementRigidBody::from_shape(CollisionShape::cuboid(Vec3::splat(0.5)));
    source.set_linear_velocity(Vec3::new(1.5, -2.25, 0.125));
    source.set_mass(8.0);
    source.set_friction(0.25);

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("crate.json");
    let json = source.to_record().to_json().expect("Failed to serialize record");
    std::fs::write(&path, json).expect("Failed to write record");

    let read_back = std::fs::read_to_string(&path).expect("Failed to read record");
    let record = BodyRecord::from_json(&read_back).expect("Failed to parse record");
    assert_eq!(record, source.to_record());
}

#[test]
fn test_zero_mass_record_leaves_body_untouched() {
    let mut body = unit_box_at(Vec3::ZERO, 3.0);
    body.set_linear_velocity(Vec3::new(0.0, 1.0, 0.0));
    let before = body.to_record();

    let absent = BodyRecord {
        linear_velocity: [9.0, 9.0, 9.0],
        friction: 0.0,
        mass: 0.0,
        ..BodyRecord::default()
    };

    assert!(!body.apply_record(&absent));
    assert_eq!(body.to_record(), before);
    assert!(!body.are_properties_dirty());
}

#[test]
fn test_space_settles_box_into_pool() {
    let _ = env_logger::builder().is_test(true).try_init();

    let world = pool_world();
    let mut space = PhysicsSpace::new(SpaceConfig::default());
    let id = space.add_element(Crate {
        body: unit_box_at(Vec3::new(0.0, 8.0, 0.0), 1.0),
    });

    let mut stopped = false;
    for _ in 0..240 {
        space.step(&world, 1.0 / 60.0);
        let body = &space.element(id).expect("crate should exist").body;
        // Top face inside the pool
        if body.physics_location().y + 0.5 < 4.0 && body.linear_velocity().y.abs() < 1.0 {
            stopped = true;
            break;
        }
    }

    assert!(stopped, "box never slowed down in the pool");
    assert!(space.tick() > 0);
}
