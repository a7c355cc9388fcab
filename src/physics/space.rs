use glam::Vec3;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::dynamics::DynamicsBody;
use super::element_body::PhysicsElement;
use super::error::{PhysicsError, PhysicsResult};
use crate::config::SpaceConfig;
use crate::world::EnvironmentSampler;

/// Entity ID type
pub type EntityId = u32;

/// Frame time above this is clamped to avoid a spiral of death
const MAX_FRAME_TIME: f32 = 0.25;

/// Simulation space holding element bodies
///
/// Elements live in a dense vector (swap-remove on delete) with an id to
/// index map, so a step walks contiguous memory.
pub struct PhysicsSpace<E: PhysicsElement> {
    config: SpaceConfig,
    elements: Vec<(EntityId, E)>,
    id_to_index: FxHashMap<EntityId, usize>,
    next_entity_id: EntityId,
    accumulator: f32,
    tick: u64,
}

impl<E: PhysicsElement> PhysicsSpace<E> {
    pub fn new(config: SpaceConfig) -> Self {
        Self {
            config,
            elements: Vec::new(),
            id_to_index: FxHashMap::default(),
            next_entity_id: 1,
            accumulator: 0.0,
            tick: 0,
        }
    }

    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    pub fn air_density(&self) -> f32 {
        self.config.air_density
    }

    pub fn water_density(&self) -> f32 {
        self.config.water_density
    }

    pub fn lava_density(&self) -> f32 {
        self.config.lava_density
    }

    pub fn gravity(&self) -> Vec3 {
        self.config.gravity
    }

    /// Number of fixed steps run so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Attach an element; its body joins the simulation from the next step
    pub fn add_element(&mut self, element: E) -> EntityId {
        let id = self.next_entity_id;
        self.next_entity_id += 1;

        self.id_to_index.insert(id, self.elements.len());
        self.elements.push((id, element));
        log::debug!("Added element {} ({} in space)", id, self.elements.len());
        id
    }

    /// Detach an element, handing it back to the caller
    pub fn remove_element(&mut self, id: EntityId) -> PhysicsResult<E> {
        let idx = self
            .id_to_index
            .remove(&id)
            .ok_or(PhysicsError::UnknownEntity(id))?;

        let (_, element) = self.elements.swap_remove(idx);
        // Update mapping for the element that took its slot
        if let Some((moved_id, _)) = self.elements.get(idx) {
            self.id_to_index.insert(*moved_id, idx);
        }

        log::debug!("Removed element {} ({} in space)", id, self.elements.len());
        Ok(element)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.id_to_index.contains_key(&id)
    }

    pub fn element(&self, id: EntityId) -> Option<&E> {
        self.id_to_index
            .get(&id)
            .map(|&idx| &self.elements[idx].1)
    }

    pub fn element_mut(&mut self, id: EntityId) -> Option<&mut E> {
        match self.id_to_index.get(&id) {
            Some(&idx) => Some(&mut self.elements[idx].1),
            None => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &E)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }

    /// Whether the owning element is in no-clip; unknown ids are not
    pub fn is_in_no_clip(&self, id: EntityId) -> bool {
        self.element(id).map_or(false, |element| element.is_in_no_clip())
    }

    /// Advance by `frame_time` seconds using fixed steps. Returns the number
    /// of steps taken. A non-finite frame time counts as zero.
    pub fn update<S>(&mut self, sampler: &S, frame_time: f32) -> u32
    where
        S: EnvironmentSampler + ?Sized,
    {
        if !frame_time.is_finite() {
            log::warn!("Ignoring non-finite frame time {}", frame_time);
            return 0;
        }
        self.accumulator += frame_time.clamp(0.0, MAX_FRAME_TIME);

        let dt = self.config.fixed_timestep;
        let mut steps = 0;
        while self.accumulator >= dt && steps < self.config.max_substeps {
            self.step(sampler, dt);
            self.accumulator -= dt;
            steps += 1;
        }

        // Drop time we could not catch up on
        if steps == self.config.max_substeps {
            self.accumulator = self.accumulator.min(dt);
        }
        steps
    }

    /// One simulation step: drag for every body, then integration
    pub fn step<S>(&mut self, sampler: &S, dt: f32)
    where
        S: EnvironmentSampler + ?Sized,
    {
        let config = &self.config;
        for (_, element) in self.elements.iter_mut() {
            step_element(element, sampler, config, dt);
        }
        self.tick += 1;
    }
}

impl<E> PhysicsSpace<E>
where
    E: PhysicsElement + Send,
{
    /// Same as `step`, with elements spread over the rayon pool. Each body is
    /// still touched by exactly one worker.
    pub fn step_parallel<S>(&mut self, sampler: &S, dt: f32)
    where
        S: EnvironmentSampler + Sync + ?Sized,
    {
        let config = &self.config;
        self.elements
            .par_iter_mut()
            .for_each(|(_, element)| step_element(element, sampler, config, dt));
        self.tick += 1;
    }
}

fn step_element<E, S>(element: &mut E, sampler: &S, config: &SpaceConfig, dt: f32)
where
    E: PhysicsElement,
    S: EnvironmentSampler + ?Sized,
{
    let body = element.rigid_body_mut();
    body.apply_drag(sampler, config);
    body.dynamics_mut().integrate(config.gravity, dt);
}
