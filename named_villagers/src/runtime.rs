//! Runtime entry point that owns the naming state and wires it to a host
//! world.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use village_rules::{EventEnvelope, Scheduler, WorldState};

use crate::generator::{NameGenerator, NameSource};
use crate::policy::{DeferredRename, NamingCoordinator, NamingOutcome};
use crate::settings::{ConfigStore, Messages, NamingSettings, SettingsResult};

/// The naming system as one unit: settings, messages, the coordinator and
/// the queue of deferred renames.
pub struct NamedVillagers<S = NameGenerator> {
    config_path: Option<PathBuf>,
    messages: Messages,
    coordinator: NamingCoordinator<S>,
    scheduler: Scheduler<DeferredRename>,
}

impl NamedVillagers<NameGenerator> {
    /// Load (creating if needed) the settings file at `config_path`.
    pub fn new(config_path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = config_path.as_ref().to_path_buf();
        let store = ConfigStore::load_or_create(&path)?;
        let mut runtime = Self::from_store(&store, NameGenerator::new());
        runtime.config_path = Some(path);
        Ok(runtime)
    }

    /// Run on the bundled default configuration without a settings file.
    pub fn with_defaults() -> Self {
        Self::from_store(&ConfigStore::defaults(), NameGenerator::new())
    }
}

impl<S: NameSource> NamedVillagers<S> {
    pub fn from_store(store: &ConfigStore, source: S) -> Self {
        let settings = NamingSettings::from_store(store);
        info!(
            auto_name = settings.auto_name,
            legendary_chance = settings.legendary_chance,
            "named villagers enabled"
        );
        Self {
            config_path: None,
            messages: Messages::from_store(store),
            coordinator: NamingCoordinator::new(settings, source),
            scheduler: Scheduler::new(),
        }
    }

    pub fn settings(&self) -> &NamingSettings {
        self.coordinator.settings()
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn coordinator(&self) -> &NamingCoordinator<S> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut NamingCoordinator<S> {
        &mut self.coordinator
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Renames waiting for a later tick.
    pub fn pending_renames(&self) -> usize {
        self.scheduler.pending()
    }

    /// Handle one lifecycle event, queueing any deferred rename.
    pub fn dispatch(&mut self, world: &mut WorldState, envelope: &EventEnvelope) -> NamingOutcome {
        let outcome = self.coordinator.handle(envelope, world);
        if let NamingOutcome::Deferred(task) = outcome {
            self.scheduler.schedule(task.delay_ticks, task);
        }
        outcome
    }

    /// Dispatch every event the world has emitted since the last call, in
    /// emission order.
    pub fn pump_events(&mut self, world: &mut WorldState) -> Vec<NamingOutcome> {
        world
            .drain_events()
            .iter()
            .map(|envelope| self.dispatch(world, envelope))
            .collect()
    }

    /// Advance one tick: run the renames that are due, then the world clock.
    pub fn tick(&mut self, world: &mut WorldState) -> Vec<NamingOutcome> {
        let outcomes = self
            .scheduler
            .advance()
            .into_iter()
            .map(|task| self.coordinator.run_deferred(task, world))
            .collect();
        world.advance_tick();
        outcomes
    }

    /// Re-read the settings file. On failure the current settings stay in
    /// place.
    pub fn reload(&mut self) -> SettingsResult<()> {
        let store = match &self.config_path {
            Some(path) => ConfigStore::load(path).map_err(|err| {
                warn!(error = %err, "settings reload failed, keeping previous settings");
                err
            })?,
            None => ConfigStore::defaults(),
        };
        self.coordinator.replace_settings(NamingSettings::from_store(&store));
        self.messages = Messages::from_store(&store);
        info!("settings reloaded");
        Ok(())
    }
}
