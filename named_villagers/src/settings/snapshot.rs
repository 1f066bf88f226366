//! Immutable view of the naming settings.

use std::collections::HashMap;

use super::ConfigStore;

/// Pool key used for villagers without a profession and as the last fallback.
pub const FALLBACK_POOL: &str = "none";

/// How generated names are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameFormat {
    /// "Aria"
    Simple,
    /// "Aria Stone"
    FullName,
    /// "Aria the Master Farmer"
    #[default]
    Titled,
}

impl NameFormat {
    /// Parse a format name case-insensitively. Unrecognized names are `Titled`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "simple" => NameFormat::Simple,
            "fullname" => NameFormat::FullName,
            _ => NameFormat::Titled,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NameFormat::Simple => "simple",
            NameFormat::FullName => "fullname",
            NameFormat::Titled => "titled",
        }
    }
}

/// First and last names configured for one profession or biome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePool {
    pub first: Vec<String>,
    pub last: Vec<String>,
}

impl NamePool {
    pub fn new<F, L>(first: F, last: L) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            first: first.into_iter().map(Into::into).collect(),
            last: last.into_iter().map(Into::into).collect(),
        }
    }
}

/// Every setting the naming system reads, captured at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct NamingSettings {
    pub auto_name: bool,
    /// Percentage of names receiving a legendary prefix.
    pub legendary_chance: i64,
    pub format: NameFormat,
    pub show_level: bool,
    pub rename_on_cure: bool,
    pub biome_specific: bool,
    pub debug: bool,
    pub legendary_prefixes: Vec<String>,
    /// Keyed by lower-case profession key.
    pub profession_pools: HashMap<String, NamePool>,
    /// Keyed by biome category key.
    pub biome_pools: HashMap<String, NamePool>,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            auto_name: true,
            legendary_chance: 5,
            format: NameFormat::Titled,
            show_level: true,
            rename_on_cure: false,
            biome_specific: true,
            debug: false,
            legendary_prefixes: Vec::new(),
            profession_pools: HashMap::new(),
            biome_pools: HashMap::new(),
        }
    }
}

impl NamingSettings {
    /// Read the settings from a configuration store.
    pub fn from_store(store: &ConfigStore) -> Self {
        let defaults = Self::default();
        Self {
            auto_name: store.get_bool("settings.auto-name", defaults.auto_name),
            legendary_chance: store.get_int("settings.legendary-chance", defaults.legendary_chance),
            format: NameFormat::parse(&store.get_string("settings.format", defaults.format.as_str())),
            show_level: store.get_bool("settings.show-level", defaults.show_level),
            rename_on_cure: store.get_bool("settings.rename-on-cure", defaults.rename_on_cure),
            biome_specific: store.get_bool("settings.biome-specific", defaults.biome_specific),
            debug: store.get_bool("settings.debug", defaults.debug),
            legendary_prefixes: store.get_string_list("legendary-prefixes"),
            profession_pools: read_pools(store, "names.professions"),
            biome_pools: read_pools(store, "biomes"),
        }
    }

    pub fn profession_pool(&self, profession: &str) -> Option<&NamePool> {
        self.profession_pools.get(profession)
    }

    pub fn biome_pool(&self, biome: &str) -> Option<&NamePool> {
        self.biome_pools.get(biome)
    }

    /// Pools to draw names from, most specific first: the biome (when
    /// biome-specific naming is on), the profession, then the fallback pool.
    /// Absent pools are left out.
    pub fn pool_chain(&self, biome: &str, profession: &str) -> Vec<&NamePool> {
        let biome_pool = if self.biome_specific {
            self.biome_pool(biome)
        } else {
            None
        };
        [
            biome_pool,
            self.profession_pool(profession),
            self.profession_pool(FALLBACK_POOL),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn with_profession_pool(mut self, profession: impl Into<String>, pool: NamePool) -> Self {
        self.profession_pools.insert(profession.into(), pool);
        self
    }

    pub fn with_biome_pool(mut self, biome: impl Into<String>, pool: NamePool) -> Self {
        self.biome_pools.insert(biome.into(), pool);
        self
    }

    pub fn with_legendary_prefixes<I>(mut self, chance: i64, prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.legendary_chance = chance;
        self.legendary_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_format(mut self, format: NameFormat) -> Self {
        self.format = format;
        self
    }
}

fn read_pools(store: &ConfigStore, root: &str) -> HashMap<String, NamePool> {
    store
        .table_keys(root)
        .into_iter()
        .map(|key| {
            let pool = NamePool {
                first: store.get_string_list(&format!("{root}.{key}.first")),
                last: store.get_string_list(&format!("{root}.{key}.last")),
            };
            (key, pool)
        })
        .collect()
}
