//! # Named Villagers
//!
//! Gives villagers generated names that match their profession, home biome
//! and experience, and keeps those names through world reloads and cures.
//! The crate reacts to lifecycle events from a host world (`village_rules`)
//! and never drives the game loop itself.
//!
//! ## Core Components
//!
//! - **settings**: Typed, default-backed access to the TOML configuration and message templates
//! - **generator**: Pool selection, legendary prefixes and name assembly
//! - **policy**: Decides per event whether to name, preserve or rename
//! - **commands**: Player and console commands with permission checks
//! - **runtime**: Owns the state above and connects it to a world
//!
//! ## Example
//!
//! ```
//! use named_villagers::NamedVillagers;
//! use village_rules::{LivingEntity, Profession, WorldState};
//!
//! let mut naming = NamedVillagers::with_defaults();
//! let mut world = WorldState::new();
//! let id = world.spawn(LivingEntity::villager(Profession::Librarian));
//!
//! naming.pump_events(&mut world);
//! assert!(world.get_entity(id).unwrap().custom_name.is_some());
//! ```

pub mod commands;
pub mod generator;
pub mod policy;
pub mod runtime;
pub mod settings;

pub use commands::*;
pub use generator::*;
pub use policy::*;
pub use runtime::*;
pub use settings::*;
