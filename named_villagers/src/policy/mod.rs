//! Naming Policy - decides, per lifecycle event, whether a villager is named,
//! left alone, or renamed.
//!
//! The coordinator is the only writer of the persisted name and of the
//! visible custom name. Every path degrades to a `Skipped` outcome instead of
//! failing.

use std::fmt;

use tracing::info;
use village_rules::{EntityId, EntityKind, EventEnvelope, LifecycleEvent, LivingEntity, WorldState};

use crate::generator::{NameGenerator, NameSource, NamingSubject};
use crate::settings::NamingSettings;

/// Persistent data key holding a villager's deliberate name.
pub const CUSTOM_NAME_KEY: &str = "custom_name";

/// Ticks to wait after a cure before naming the cured villager.
pub const CURE_RENAME_DELAY_TICKS: u64 = 1;

/// A rename to run once the host has finished materializing `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredRename {
    pub target: EntityId,
    pub delay_ticks: u64,
    /// Overwrite a name the target already carries when the task runs.
    /// When false, a name applied in the meantime is kept.
    pub replace_existing: bool,
}

/// What the coordinator did with an event or task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingOutcome {
    /// A name was generated and applied.
    Named(String),
    /// An existing name was kept.
    Preserved(String),
    /// Naming must happen later; hand the task to the scheduler.
    Deferred(DeferredRename),
    Skipped(SkipReason),
}

/// Why nothing was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Cancelled,
    /// The event does not concern a villager (or is not a cure).
    NotEligible,
    AutoNamingDisabled,
    /// The villager already carries a persisted name.
    AlreadyNamed,
    /// The villager already shows a display name set by someone else.
    HasDisplayName,
    MissingEntity,
    /// The deferred target died or was unloaded before the task ran.
    TargetInactive,
}

/// Persisted name of an entity, if any.
pub fn stored_name(entity: &LivingEntity) -> Option<&str> {
    entity.persistent_data.get(CUSTOM_NAME_KEY)
}

/// Persist `name` on the entity and show it above its head.
pub fn apply_name(entity: &mut LivingEntity, name: &str) {
    entity.persistent_data.set(CUSTOM_NAME_KEY, name);
    entity.custom_name = Some(name.to_string());
    entity.custom_name_visible = true;
}

/// Reacts to lifecycle events and manual naming requests.
pub struct NamingCoordinator<S = NameGenerator> {
    settings: NamingSettings,
    source: S,
}

impl<S: NameSource> NamingCoordinator<S> {
    pub fn new(settings: NamingSettings, source: S) -> Self {
        Self { settings, source }
    }

    pub fn settings(&self) -> &NamingSettings {
        &self.settings
    }

    /// Swap in a freshly loaded settings snapshot.
    pub fn replace_settings(&mut self, settings: NamingSettings) {
        self.settings = settings;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn trace(&self, message: fmt::Arguments<'_>) {
        if self.settings.debug {
            info!("{message}");
        }
    }

    /// Handle one lifecycle event.
    pub fn handle(&mut self, envelope: &EventEnvelope, world: &mut WorldState) -> NamingOutcome {
        if envelope.cancelled {
            return NamingOutcome::Skipped(SkipReason::Cancelled);
        }
        match envelope.event {
            LifecycleEvent::Spawn { entity, kind } => self.on_spawn(entity, kind, world),
            LifecycleEvent::Transform { source, result, .. } if envelope.event.is_cure() => {
                self.on_cure(source, result, world)
            }
            LifecycleEvent::Transform { .. } => NamingOutcome::Skipped(SkipReason::NotEligible),
        }
    }

    fn on_spawn(&mut self, id: EntityId, kind: EntityKind, world: &mut WorldState) -> NamingOutcome {
        if kind != EntityKind::Villager {
            return NamingOutcome::Skipped(SkipReason::NotEligible);
        }
        if !self.settings.auto_name {
            return NamingOutcome::Skipped(SkipReason::AutoNamingDisabled);
        }
        let Some(entity) = world.get_entity_mut(id) else {
            return NamingOutcome::Skipped(SkipReason::MissingEntity);
        };

        if entity.persistent_data.has(CUSTOM_NAME_KEY) {
            self.trace(format_args!("villager {id} already has a custom name, skipping generation"));
            return NamingOutcome::Skipped(SkipReason::AlreadyNamed);
        }
        if entity.custom_name.is_some() {
            self.trace(format_args!("villager {id} has a display name, skipping auto-generation"));
            return NamingOutcome::Skipped(SkipReason::HasDisplayName);
        }

        let name = self.source.generate(&NamingSubject::of(entity), &self.settings);
        apply_name(entity, &name);
        self.trace(format_args!("generated name for villager {id}: {name}"));
        NamingOutcome::Named(name)
    }

    fn on_cure(&mut self, source: EntityId, result: EntityId, world: &mut WorldState) -> NamingOutcome {
        let stored = world
            .get_entity(source)
            .and_then(stored_name)
            .or_else(|| world.get_entity(result).and_then(stored_name))
            .map(str::to_owned);

        match stored {
            Some(name) if !self.settings.rename_on_cure => {
                if let Some(villager) = world.get_entity_mut(result) {
                    if !villager.persistent_data.has(CUSTOM_NAME_KEY) {
                        apply_name(villager, &name);
                        self.trace(format_args!("restored name {name} on cured villager {result}"));
                    }
                }
                self.trace(format_args!("preserving villager name after cure: {name}"));
                NamingOutcome::Preserved(name)
            }
            Some(_) => {
                self.trace(format_args!("renaming cured villager {result}"));
                self.defer(result, true)
            }
            None if self.settings.auto_name => {
                self.trace(format_args!("naming cured villager {result}"));
                self.defer(result, false)
            }
            None => NamingOutcome::Skipped(SkipReason::AutoNamingDisabled),
        }
    }

    fn defer(&self, target: EntityId, replace_existing: bool) -> NamingOutcome {
        NamingOutcome::Deferred(DeferredRename {
            target,
            delay_ticks: CURE_RENAME_DELAY_TICKS,
            replace_existing,
        })
    }

    /// Run a deferred rename. Does nothing if the target is gone, or if it
    /// was named in the meantime and the task does not replace names.
    pub fn run_deferred(&mut self, task: DeferredRename, world: &mut WorldState) -> NamingOutcome {
        let named_meanwhile = world
            .get_entity(task.target)
            .is_some_and(|e| e.is_active() && e.persistent_data.has(CUSTOM_NAME_KEY));
        if named_meanwhile && !task.replace_existing {
            self.trace(format_args!("villager {} was named before its deferred rename", task.target));
            return NamingOutcome::Skipped(SkipReason::AlreadyNamed);
        }
        match self.name_randomly(world, task.target) {
            Some(name) => NamingOutcome::Named(name),
            None => {
                self.trace(format_args!("deferred rename target {} is gone", task.target));
                NamingOutcome::Skipped(SkipReason::TargetInactive)
            }
        }
    }

    /// Generate and apply a fresh name to an active entity, regardless of any
    /// name it already has.
    pub fn name_randomly(&mut self, world: &mut WorldState, id: EntityId) -> Option<String> {
        let entity = world.get_entity_mut(id).filter(|e| e.is_active())?;
        let name = self.source.generate(&NamingSubject::of(entity), &self.settings);
        apply_name(entity, &name);
        self.trace(format_args!("generated name for villager {id}: {name}"));
        Some(name)
    }

    /// Apply a literal name to an active entity.
    pub fn rename(&mut self, world: &mut WorldState, id: EntityId, name: &str) -> bool {
        let Some(entity) = world.get_entity_mut(id).filter(|e| e.is_active()) else {
            return false;
        };
        apply_name(entity, name);
        self.trace(format_args!("villager {id} renamed to {name}"));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{NameFormat, NamePool, FALLBACK_POOL};
    use village_rules::Profession;

    /// Hands out "Name1", "Name2", ... and counts calls.
    #[derive(Default)]
    struct CountingSource {
        calls: usize,
    }

    impl NameSource for CountingSource {
        fn generate(&mut self, _subject: &NamingSubject, _settings: &NamingSettings) -> String {
            self.calls += 1;
            format!("Name{}", self.calls)
        }
    }

    fn coordinator(settings: NamingSettings) -> NamingCoordinator<CountingSource> {
        NamingCoordinator::new(settings, CountingSource::default())
    }

    fn spawn_envelope(entity: EntityId, kind: EntityKind) -> EventEnvelope {
        EventEnvelope::new(LifecycleEvent::Spawn { entity, kind })
    }

    fn named_zombie(world: &mut WorldState, name: &str) -> EntityId {
        let mut zombie = LivingEntity::new(EntityKind::ZombieVillager)
            .with_profession(Profession::Farmer)
            .with_level(2);
        apply_name(&mut zombie, name);
        let id = world.spawn(zombie);
        world.drain_events();
        id
    }

    fn cure(world: &mut WorldState, zombie: EntityId) -> (EntityId, EventEnvelope) {
        let villager = world.cure(zombie).unwrap();
        let envelope = world.drain_events().pop().unwrap();
        (villager, envelope)
    }

    #[test]
    fn test_spawn_names_villager() {
        let mut world = WorldState::new();
        let id = world.spawn(LivingEntity::villager(Profession::Farmer));
        let mut coordinator = coordinator(NamingSettings::default());

        let outcome = coordinator.handle(&spawn_envelope(id, EntityKind::Villager), &mut world);

        assert_eq!(outcome, NamingOutcome::Named("Name1".to_string()));
        let villager = world.get_entity(id).unwrap();
        assert_eq!(stored_name(villager), Some("Name1"));
        assert_eq!(villager.custom_name.as_deref(), Some("Name1"));
        assert!(villager.custom_name_visible);
    }

    #[test]
    fn test_spawn_is_idempotent() {
        let mut world = WorldState::new();
        let id = world.spawn(LivingEntity::villager(Profession::Farmer));
        let mut coordinator = coordinator(NamingSettings::default());
        let envelope = spawn_envelope(id, EntityKind::Villager);

        coordinator.handle(&envelope, &mut world);
        let second = coordinator.handle(&envelope, &mut world);

        assert_eq!(second, NamingOutcome::Skipped(SkipReason::AlreadyNamed));
        assert_eq!(coordinator.source().calls, 1);
        assert_eq!(stored_name(world.get_entity(id).unwrap()), Some("Name1"));
    }

    #[test]
    fn test_spawn_respects_existing_display_name() {
        let mut world = WorldState::new();
        let id = world.spawn(LivingEntity::villager(Profession::Cleric).with_custom_name("Bob"));
        let mut coordinator = coordinator(NamingSettings::default());

        let outcome = coordinator.handle(&spawn_envelope(id, EntityKind::Villager), &mut world);

        assert_eq!(outcome, NamingOutcome::Skipped(SkipReason::HasDisplayName));
        let villager = world.get_entity(id).unwrap();
        assert_eq!(villager.custom_name.as_deref(), Some("Bob"));
        assert!(stored_name(villager).is_none());
        assert_eq!(coordinator.source().calls, 0);
    }

    #[test]
    fn test_spawn_skips_other_kinds_and_disabled_auto_name() {
        let mut world = WorldState::new();
        let golem = world.spawn(LivingEntity::new(EntityKind::IronGolem));
        let villager = world.spawn(LivingEntity::villager(Profession::Mason));

        let mut coordinator = coordinator(NamingSettings::default());
        assert_eq!(
            coordinator.handle(&spawn_envelope(golem, EntityKind::IronGolem), &mut world),
            NamingOutcome::Skipped(SkipReason::NotEligible)
        );

        let mut settings = NamingSettings::default();
        settings.auto_name = false;
        coordinator.replace_settings(settings);
        assert_eq!(
            coordinator.handle(&spawn_envelope(villager, EntityKind::Villager), &mut world),
            NamingOutcome::Skipped(SkipReason::AutoNamingDisabled)
        );
        assert_eq!(coordinator.source().calls, 0);
    }

    #[test]
    fn test_cancelled_and_missing_entities_are_skipped() {
        let mut world = WorldState::new();
        let id = world.spawn(LivingEntity::villager(Profession::Farmer));
        let mut coordinator = coordinator(NamingSettings::default());

        let mut envelope = spawn_envelope(id, EntityKind::Villager);
        envelope.cancel();
        assert_eq!(
            coordinator.handle(&envelope, &mut world),
            NamingOutcome::Skipped(SkipReason::Cancelled)
        );

        let ghost = spawn_envelope(EntityId::new(), EntityKind::Villager);
        assert_eq!(
            coordinator.handle(&ghost, &mut world),
            NamingOutcome::Skipped(SkipReason::MissingEntity)
        );
        assert!(stored_name(world.get_entity(id).unwrap()).is_none());
    }

    #[test]
    fn test_cure_preserves_stored_name() {
        let mut world = WorldState::new();
        let zombie = named_zombie(&mut world, "Aria");
        let (villager, envelope) = cure(&mut world, zombie);
        let mut coordinator = coordinator(NamingSettings::default());

        let outcome = coordinator.handle(&envelope, &mut world);

        assert_eq!(outcome, NamingOutcome::Preserved("Aria".to_string()));
        assert_eq!(coordinator.source().calls, 0);
        let cured = world.get_entity(villager).unwrap();
        assert_eq!(stored_name(cured), Some("Aria"));
        assert_eq!(cured.custom_name.as_deref(), Some("Aria"));
    }

    #[test]
    fn test_cure_restores_name_the_host_dropped() {
        let mut world = WorldState::new();
        let zombie = named_zombie(&mut world, "Aria");
        let (villager, envelope) = cure(&mut world, zombie);
        {
            let cured = world.get_entity_mut(villager).unwrap();
            cured.persistent_data.remove(CUSTOM_NAME_KEY);
            cured.custom_name = None;
            cured.custom_name_visible = false;
        }
        let mut coordinator = coordinator(NamingSettings::default());

        let outcome = coordinator.handle(&envelope, &mut world);

        assert_eq!(outcome, NamingOutcome::Preserved("Aria".to_string()));
        let cured = world.get_entity(villager).unwrap();
        assert_eq!(stored_name(cured), Some("Aria"));
        assert_eq!(cured.custom_name.as_deref(), Some("Aria"));
        assert!(cured.custom_name_visible);
    }

    #[test]
    fn test_cure_with_rename_defers_then_overwrites() {
        let mut world = WorldState::new();
        let zombie = named_zombie(&mut world, "Aria");
        let (villager, envelope) = cure(&mut world, zombie);
        let mut settings = NamingSettings::default();
        settings.rename_on_cure = true;
        let mut coordinator = coordinator(settings);

        let outcome = coordinator.handle(&envelope, &mut world);
        let NamingOutcome::Deferred(task) = outcome else {
            panic!("expected a deferred rename, got {outcome:?}");
        };
        assert_eq!(task.target, villager);
        assert_eq!(task.delay_ticks, CURE_RENAME_DELAY_TICKS);
        assert!(task.replace_existing);
        assert_eq!(coordinator.source().calls, 0);

        let outcome = coordinator.run_deferred(task, &mut world);

        assert_eq!(outcome, NamingOutcome::Named("Name1".to_string()));
        assert_eq!(coordinator.source().calls, 1);
        assert_eq!(stored_name(world.get_entity(villager).unwrap()), Some("Name1"));
    }

    #[test]
    fn test_rename_on_cure_applies_even_with_auto_name_disabled() {
        let mut world = WorldState::new();
        let zombie = named_zombie(&mut world, "Aria");
        let (_, envelope) = cure(&mut world, zombie);
        let mut settings = NamingSettings::default();
        settings.rename_on_cure = true;
        settings.auto_name = false;
        let mut coordinator = coordinator(settings);

        assert!(matches!(
            coordinator.handle(&envelope, &mut world),
            NamingOutcome::Deferred(_)
        ));
    }

    #[test]
    fn test_cure_of_unnamed_zombie() {
        let mut world = WorldState::new();
        let zombie = world.spawn(LivingEntity::new(EntityKind::ZombieVillager));
        world.drain_events();
        let (villager, envelope) = cure(&mut world, zombie);

        let mut coordinator = coordinator(NamingSettings::default());
        assert_eq!(
            coordinator.handle(&envelope, &mut world),
            NamingOutcome::Deferred(DeferredRename {
                target: villager,
                delay_ticks: CURE_RENAME_DELAY_TICKS,
                replace_existing: false,
            })
        );

        let mut settings = NamingSettings::default();
        settings.auto_name = false;
        coordinator.replace_settings(settings);
        assert_eq!(
            coordinator.handle(&envelope, &mut world),
            NamingOutcome::Skipped(SkipReason::AutoNamingDisabled)
        );
    }

    #[test]
    fn test_infection_is_not_a_cure() {
        let mut world = WorldState::new();
        let villager = world.spawn(LivingEntity::villager(Profession::Farmer));
        world.drain_events();
        world.infect(villager).unwrap();
        let envelope = world.drain_events().pop().unwrap();

        let mut coordinator = coordinator(NamingSettings::default());
        assert_eq!(
            coordinator.handle(&envelope, &mut world),
            NamingOutcome::Skipped(SkipReason::NotEligible)
        );
    }

    #[test]
    fn test_deferred_rename_skips_inactive_target() {
        let mut world = WorldState::new();
        let zombie = world.spawn(LivingEntity::new(EntityKind::ZombieVillager));
        let (villager, envelope) = cure(&mut world, zombie);
        let mut coordinator = coordinator(NamingSettings::default());

        let NamingOutcome::Deferred(task) = coordinator.handle(&envelope, &mut world) else {
            panic!("expected a deferred rename");
        };
        world.kill(villager).unwrap();

        assert_eq!(
            coordinator.run_deferred(task, &mut world),
            NamingOutcome::Skipped(SkipReason::TargetInactive)
        );
        assert_eq!(coordinator.source().calls, 0);

        world.advance_tick();
        assert_eq!(
            coordinator.run_deferred(task, &mut world),
            NamingOutcome::Skipped(SkipReason::TargetInactive)
        );
    }

    #[test]
    fn test_manual_rename_overrides_policy() {
        let mut world = WorldState::new();
        let id = world.spawn(LivingEntity::villager(Profession::Farmer));
        let mut coordinator = coordinator(NamingSettings::default());
        coordinator.handle(&spawn_envelope(id, EntityKind::Villager), &mut world);

        assert!(coordinator.rename(&mut world, id, "Sir Reginald"));
        assert_eq!(stored_name(world.get_entity(id).unwrap()), Some("Sir Reginald"));

        // Later spawn handling never touches the manual name.
        coordinator.handle(&spawn_envelope(id, EntityKind::Villager), &mut world);
        assert_eq!(stored_name(world.get_entity(id).unwrap()), Some("Sir Reginald"));

        assert!(!coordinator.rename(&mut world, EntityId::new(), "Nobody"));
    }

    #[test]
    fn test_spawn_with_real_generator() {
        let settings = NamingSettings::default()
            .with_legendary_prefixes(0, Vec::<String>::new())
            .with_format(NameFormat::Titled)
            .with_profession_pool(FALLBACK_POOL, NamePool::new(["Ada"], ["Reed"]))
            .with_profession_pool("farmer", NamePool::new(["Aria"], ["Stone"]));
        let mut coordinator = NamingCoordinator::new(settings, NameGenerator::seeded(8));

        let mut world = WorldState::new();
        let id = world.spawn(LivingEntity::villager(Profession::Farmer).with_level(5));

        let outcome = coordinator.handle(&spawn_envelope(id, EntityKind::Villager), &mut world);
        assert_eq!(outcome, NamingOutcome::Named("Aria the Master Farmer".to_string()));
    }

    #[test]
    fn test_cure_keeps_display_name_set_by_others() {
        let mut world = WorldState::new();
        let zombie = named_zombie(&mut world, "Aria");
        let (villager, envelope) = cure(&mut world, zombie);
        world.get_entity_mut(villager).unwrap().custom_name = Some("Bob".to_string());
        let mut coordinator = coordinator(NamingSettings::default());

        let outcome = coordinator.handle(&envelope, &mut world);

        assert_eq!(outcome, NamingOutcome::Preserved("Aria".to_string()));
        let cured = world.get_entity(villager).unwrap();
        assert_eq!(cured.custom_name.as_deref(), Some("Bob"));
        assert_eq!(stored_name(cured), Some("Aria"));
    }

    #[test]
    fn test_spawn_skips_any_value_under_name_key() {
        let mut world = WorldState::new();
        let mut villager = LivingEntity::villager(Profession::Farmer);
        villager.persistent_data =
            serde_json::from_str(r#"{"values": {"custom_name": 7}}"#).unwrap();
        let id = world.spawn(villager);
        let mut coordinator = coordinator(NamingSettings::default());

        let outcome = coordinator.handle(&spawn_envelope(id, EntityKind::Villager), &mut world);

        assert_eq!(outcome, NamingOutcome::Skipped(SkipReason::AlreadyNamed));
        assert_eq!(coordinator.source().calls, 0);
        assert!(world.get_entity(id).unwrap().custom_name.is_none());
    }

    #[test]
    fn test_name_applied_before_deferred_naming_is_kept() {
        let mut world = WorldState::new();
        let zombie = world.spawn(LivingEntity::new(EntityKind::ZombieVillager));
        let (villager, envelope) = cure(&mut world, zombie);
        let mut coordinator = coordinator(NamingSettings::default());

        let NamingOutcome::Deferred(task) = coordinator.handle(&envelope, &mut world) else {
            panic!("expected a deferred rename");
        };
        assert!(!task.replace_existing);
        assert!(coordinator.rename(&mut world, villager, "Sir Reginald"));

        assert_eq!(
            coordinator.run_deferred(task, &mut world),
            NamingOutcome::Skipped(SkipReason::AlreadyNamed)
        );
        assert_eq!(coordinator.source().calls, 0);
        assert_eq!(stored_name(world.get_entity(villager).unwrap()), Some("Sir Reginald"));
    }

    mod decision_traces {
        use super::*;
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        /// Spawn, preserve-on-cure and deferred naming with the given debug
        /// flag, returning the outcomes and everything logged.
        fn run_all_branches(debug: bool) -> (Vec<NamingOutcome>, String) {
            let captured = Captured::default();
            let writer = captured.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::INFO)
                .with_ansi(false)
                .with_writer(move || writer.clone())
                .finish();

            let outcomes = tracing::subscriber::with_default(subscriber, || {
                let mut settings = NamingSettings::default();
                settings.debug = debug;
                let mut coordinator = coordinator(settings);
                let mut world = WorldState::new();
                let mut outcomes = Vec::new();

                let id = world.spawn(LivingEntity::villager(Profession::Farmer));
                let spawn = spawn_envelope(id, EntityKind::Villager);
                outcomes.push(coordinator.handle(&spawn, &mut world));
                outcomes.push(coordinator.handle(&spawn, &mut world));

                let zombie = named_zombie(&mut world, "Aria");
                let (_, envelope) = cure(&mut world, zombie);
                outcomes.push(coordinator.handle(&envelope, &mut world));

                let unnamed = world.spawn(LivingEntity::new(EntityKind::ZombieVillager));
                let (_, envelope) = cure(&mut world, unnamed);
                if let NamingOutcome::Deferred(task) = coordinator.handle(&envelope, &mut world) {
                    outcomes.push(coordinator.run_deferred(task, &mut world));
                }
                outcomes
            });

            let bytes = captured.0.lock().unwrap().clone();
            (outcomes, String::from_utf8(bytes).unwrap())
        }

        #[test]
        fn test_traces_only_when_debug_enabled() {
            let (quiet_outcomes, quiet_log) = run_all_branches(false);
            assert!(quiet_log.is_empty(), "unexpected output: {quiet_log}");

            let (debug_outcomes, debug_log) = run_all_branches(true);
            assert!(debug_log.contains("generated name for villager"));
            assert!(debug_log.contains("already has a custom name"));
            assert!(debug_log.contains("preserving villager name after cure: Aria"));
            assert!(debug_log.contains("naming cured villager"));

            assert_eq!(quiet_outcomes.len(), 4);
            assert_eq!(quiet_outcomes, debug_outcomes);
        }
    }
}
