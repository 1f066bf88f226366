//! # Village Rules
//!
//! The host world the naming system plugs into: villagers and the other living
//! entities that share a world with them, professions, the per-entity
//! persistent data store, lifecycle events and the tick scheduler.
//! This crate holds the host's state and contracts and contains no naming logic.

pub mod entities;
pub mod error;
pub mod events;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use events::*;
pub use mechanics::*;
pub use world_state::*;
