//! Name Generator - composes villager names from configured pools.
//!
//! Generation works as follows:
//! 1. **Classify**: map the raw biome id to a `BiomeCategory`
//! 2. **Pools**: resolve first and last names independently through the
//!    biome → profession → `none` fallback chain
//! 3. **Legendary**: roll against `legendary-chance` for a prefix
//! 4. **Titles**: look up the profession and level titles
//! 5. **Assembly**: lay the parts out per the configured `NameFormat`
//!
//! The generator never mutates the world; applying a name is the policy's job.

mod biome;
mod titles;

pub use biome::*;
pub use titles::*;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use village_rules::{LivingEntity, Profession};

use crate::settings::{NameFormat, NamingSettings};

/// First name used when no pool yields a candidate.
pub const UNKNOWN_FIRST_NAME: &str = "Unknown";

/// The attributes of a character that its name depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingSubject {
    pub profession: Profession,
    /// Raw biome identifier at the character's position.
    pub biome: String,
    pub level: u32,
}

impl NamingSubject {
    pub fn new(profession: Profession, biome: impl Into<String>, level: u32) -> Self {
        Self {
            profession,
            biome: biome.into(),
            level,
        }
    }

    /// Capture the naming attributes of an entity.
    pub fn of(entity: &LivingEntity) -> Self {
        Self::new(entity.profession.clone(), entity.biome.clone(), entity.level)
    }
}

/// Anything that can produce a name for a subject.
pub trait NameSource {
    fn generate(&mut self, subject: &NamingSubject, settings: &NamingSettings) -> String;
}

/// The pieces a name is assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub legendary_prefix: Option<String>,
    pub first_name: String,
    /// Empty when no pool provided one.
    pub last_name: String,
    pub level_title: Option<&'static str>,
    pub profession_title: &'static str,
}

impl NameParts {
    /// Lay the parts out according to `format`.
    pub fn assemble(&self, format: NameFormat) -> String {
        let mut name = String::new();

        if let Some(prefix) = self.legendary_prefix.as_deref().filter(|p| !p.is_empty()) {
            name.push_str(prefix);
            name.push(' ');
        }
        name.push_str(&self.first_name);

        match format {
            NameFormat::Simple => {}
            NameFormat::FullName => {
                if !self.last_name.is_empty() {
                    name.push(' ');
                    name.push_str(&self.last_name);
                }
            }
            NameFormat::Titled => {
                name.push_str(" the");
                if let Some(level) = self.level_title.filter(|l| !l.is_empty()) {
                    name.push(' ');
                    name.push_str(level);
                }
                name.push(' ');
                name.push_str(self.profession_title);
            }
        }

        name
    }
}

/// Weighted-random name generator backed by a single random source.
#[derive(Debug, Clone)]
pub struct NameGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl NameGenerator<ChaCha8Rng> {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Create a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for NameGenerator<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> NameGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw every part of a name for `subject`.
    ///
    /// Draw order: first name, last name, legendary roll, legendary prefix.
    pub fn parts(&mut self, subject: &NamingSubject, settings: &NamingSettings) -> NameParts {
        let biome = BiomeCategory::classify(&subject.biome);
        let profession = subject.profession.key();
        let chain = settings.pool_chain(biome.key(), &profession);

        let first_name = self
            .pick(chain.iter().map(|pool| pool.first.as_slice()))
            .unwrap_or_else(|| UNKNOWN_FIRST_NAME.to_string());
        let last_name = self
            .pick(chain.iter().map(|pool| pool.last.as_slice()))
            .unwrap_or_default();
        let legendary_prefix = self.roll_legendary(settings);

        let level_title = if settings.show_level {
            level_title(subject.level)
        } else {
            None
        };

        NameParts {
            legendary_prefix,
            first_name,
            last_name,
            level_title,
            profession_title: profession_title(&subject.profession),
        }
    }

    /// Pick uniformly from the first non-empty pool. Pools are never merged.
    fn pick<'a>(&mut self, tiers: impl IntoIterator<Item = &'a [String]>) -> Option<String> {
        tiers
            .into_iter()
            .find(|pool| !pool.is_empty())
            .and_then(|pool| pool.choose(&mut self.rng))
            .cloned()
    }

    fn roll_legendary(&mut self, settings: &NamingSettings) -> Option<String> {
        if settings.legendary_chance <= 0 {
            return None;
        }
        let roll: i64 = self.rng.gen_range(0..100);
        if roll < settings.legendary_chance {
            settings.legendary_prefixes.choose(&mut self.rng).cloned()
        } else {
            None
        }
    }
}

impl<R: Rng> NameSource for NameGenerator<R> {
    fn generate(&mut self, subject: &NamingSubject, settings: &NamingSettings) -> String {
        self.parts(subject, settings).assemble(settings.format)
    }
}
