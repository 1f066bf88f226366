//! Lifecycle events emitted by the world for its consumers.

use serde::{Deserialize, Serialize};

use crate::entities::{EntityId, EntityKind};

/// Something that happened to an entity's existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// A new entity entered the world.
    Spawn { entity: EntityId, kind: EntityKind },

    /// `source` turned into `result` (both ids stay valid for the duration of
    /// event dispatch).
    Transform {
        source: EntityId,
        source_kind: EntityKind,
        result: EntityId,
        result_kind: EntityKind,
    },
}

impl LifecycleEvent {
    /// Check if this is a zombie villager turning back into a villager.
    pub fn is_cure(&self) -> bool {
        matches!(
            self,
            LifecycleEvent::Transform {
                source_kind: EntityKind::ZombieVillager,
                result_kind: EntityKind::Villager,
                ..
            }
        )
    }
}

/// An event as seen by one consumer. Earlier consumers may have cancelled it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event: LifecycleEvent,
    pub cancelled: bool,
}

impl EventEnvelope {
    pub fn new(event: LifecycleEvent) -> Self {
        Self {
            event,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

impl From<LifecycleEvent> for EventEnvelope {
    fn from(event: LifecycleEvent) -> Self {
        Self::new(event)
    }
}
