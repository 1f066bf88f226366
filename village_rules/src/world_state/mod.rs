//! World state management - the central structure holding all entities.

mod scheduler;

pub use scheduler::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::entities::{EntityId, EntityKind, LivingEntity, Vec3};
use crate::error::{WorldError, WorldResult};
use crate::events::{EventEnvelope, LifecycleEvent};

/// The complete state of the world at any point in time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldState {
    /// Ticks elapsed since the world was created.
    pub tick: u64,

    /// All living entities, including removed ones until the next tick.
    pub entities: HashMap<EntityId, LivingEntity>,

    /// Events emitted since the last drain. Not persisted.
    #[serde(skip)]
    pending_events: Vec<EventEnvelope>,
}

impl WorldState {
    /// Create a new empty world state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity to the world and emit its spawn event.
    pub fn spawn(&mut self, entity: LivingEntity) -> EntityId {
        let id = entity.id;
        let kind = entity.kind;
        self.entities.insert(id, entity);
        self.emit(LifecycleEvent::Spawn { entity: id, kind });
        id
    }

    /// Get entity by ID.
    pub fn get_entity(&self, id: EntityId) -> Option<&LivingEntity> {
        self.entities.get(&id)
    }

    /// Get mutable entity by ID.
    pub fn get_entity_mut(&mut self, id: EntityId) -> Option<&mut LivingEntity> {
        self.entities.get_mut(&id)
    }

    /// Cure a zombie villager, replacing it with a villager.
    ///
    /// The villager inherits profession, level, position, persistent data and
    /// custom name. The zombie stays in the map, invalid, until the next tick.
    pub fn cure(&mut self, zombie: EntityId) -> WorldResult<EntityId> {
        self.transform(zombie, EntityKind::ZombieVillager, EntityKind::Villager)
    }

    /// Turn a villager into a zombie villager, keeping its data.
    pub fn infect(&mut self, villager: EntityId) -> WorldResult<EntityId> {
        self.transform(villager, EntityKind::Villager, EntityKind::ZombieVillager)
    }

    fn transform(
        &mut self,
        source_id: EntityId,
        from: EntityKind,
        to: EntityKind,
    ) -> WorldResult<EntityId> {
        let source = self
            .entities
            .get_mut(&source_id)
            .ok_or(WorldError::UnknownEntity(source_id))?;
        if source.kind != from || !source.is_active() {
            return Err(WorldError::InvalidTransform {
                id: source_id,
                kind: source.kind,
            });
        }

        let mut result = LivingEntity::new(to)
            .with_profession(source.profession.clone())
            .with_level(source.level)
            .with_position(source.position)
            .with_biome(source.biome.clone());
        result.persistent_data.copy_from(&source.persistent_data);
        result.custom_name = source.custom_name.clone();
        result.custom_name_visible = source.custom_name_visible;
        source.valid = false;

        let result_id = result.id;
        debug!(source = %source_id, result = %result_id, ?from, ?to, "entity transformed");
        self.entities.insert(result_id, result);
        self.emit(LifecycleEvent::Transform {
            source: source_id,
            source_kind: from,
            result: result_id,
            result_kind: to,
        });
        Ok(result_id)
    }

    /// Mark an entity as dead. It is removed on the next tick.
    pub fn kill(&mut self, id: EntityId) -> WorldResult<()> {
        let entity = self
            .entities
            .get_mut(&id)
            .ok_or(WorldError::UnknownEntity(id))?;
        entity.dead = true;
        Ok(())
    }

    /// Remove an entity from the simulation without killing it.
    pub fn unload(&mut self, id: EntityId) -> WorldResult<()> {
        let entity = self
            .entities
            .get_mut(&id)
            .ok_or(WorldError::UnknownEntity(id))?;
        entity.valid = false;
        Ok(())
    }

    /// Advance the world clock by one tick, dropping dead and removed entities.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
        let before = self.entities.len();
        self.entities.retain(|_, e| e.is_active());
        let purged = before - self.entities.len();
        if purged > 0 {
            debug!(tick = self.tick, purged, "purged inactive entities");
        }
    }

    /// Take every event emitted since the last call, in emission order.
    pub fn drain_events(&mut self) -> Vec<EventEnvelope> {
        std::mem::take(&mut self.pending_events)
    }

    fn emit(&mut self, event: LifecycleEvent) {
        self.pending_events.push(EventEnvelope::new(event));
    }

    /// Find the nearest active entity accepted by `filter` whose collision box
    /// is hit by a ray from `origin` along `direction` within `max_distance`.
    pub fn ray_trace(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f64,
        filter: impl Fn(&LivingEntity) -> bool,
    ) -> Option<EntityId> {
        let direction = direction.normalized()?;

        self.entities
            .values()
            .filter(|e| e.is_active() && filter(e))
            .filter_map(|e| {
                e.bounding_box()
                    .ray_intersection(origin, direction, max_distance)
                    .map(|t| (e.id, t))
            })
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(id, _)| id)
    }

    /// Serialize the world to JSON.
    pub fn to_json(&self) -> WorldResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a world saved with `to_json`.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
