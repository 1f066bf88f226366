//! Entity definitions for the village world.

mod components;
mod living;

pub use components::*;
pub use living::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for all entities in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an entity ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty entity ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kinds of living entities the world simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Villager,
    /// A villager afflicted by the zombie disease; curable back into a villager.
    ZombieVillager,
    WanderingTrader,
    IronGolem,
}

impl EntityKind {
    /// Collision box size as (width, height) in blocks.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            EntityKind::Villager | EntityKind::ZombieVillager | EntityKind::WanderingTrader => {
                (0.6, 1.95)
            }
            EntityKind::IronGolem => (1.4, 2.7),
        }
    }
}
