//! Errors raised by the host world.

use thiserror::Error;

use crate::entities::{EntityId, EntityKind};

/// Result alias for world operations.
pub type WorldResult<T> = std::result::Result<T, WorldError>;

/// Failures of world operations that a caller can act on.
#[derive(Debug, Error)]
pub enum WorldError {
    /// No entity with this id exists in the world.
    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),

    /// The requested transformation does not apply to this kind of entity.
    #[error("entity {id} of kind {kind:?} cannot undergo this transformation")]
    InvalidTransform { id: EntityId, kind: EntityKind },

    /// Saving or loading the world snapshot failed.
    #[error("world snapshot encoding failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}
