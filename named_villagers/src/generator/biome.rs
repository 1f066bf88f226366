//! Biome categories used to select name pools.

/// The biome groups that can carry their own name pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiomeCategory {
    Desert,
    Plains,
    Taiga,
    Jungle,
    Swamp,
    Savanna,
    Snowy,
    Mountains,
    MushroomFields,
}

/// Substring rules, checked in order. Biome ids often match several rules
/// ("snowy_taiga", "snowy_plains"); the first rule wins.
const RULES: [(&[&str], BiomeCategory); 9] = [
    (&["desert"], BiomeCategory::Desert),
    (&["plains"], BiomeCategory::Plains),
    (&["taiga", "forest"], BiomeCategory::Taiga),
    (&["jungle"], BiomeCategory::Jungle),
    (&["swamp"], BiomeCategory::Swamp),
    (&["savanna"], BiomeCategory::Savanna),
    (&["snow", "frozen", "ice"], BiomeCategory::Snowy),
    (&["mountain", "peak", "hill"], BiomeCategory::Mountains),
    (&["mushroom"], BiomeCategory::MushroomFields),
];

impl BiomeCategory {
    /// Classify a raw biome identifier, case-insensitively. Identifiers
    /// matching no rule are `Plains`.
    pub fn classify(biome_id: &str) -> Self {
        let id = biome_id.to_lowercase();
        RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| id.contains(needle)))
            .map(|(_, category)| *category)
            .unwrap_or(BiomeCategory::Plains)
    }

    /// Key of this category's pool under `biomes`.
    pub fn key(&self) -> &'static str {
        match self {
            BiomeCategory::Desert => "desert",
            BiomeCategory::Plains => "plains",
            BiomeCategory::Taiga => "taiga",
            BiomeCategory::Jungle => "jungle",
            BiomeCategory::Swamp => "swamp",
            BiomeCategory::Savanna => "savanna",
            BiomeCategory::Snowy => "snowy",
            BiomeCategory::Mountains => "mountains",
            BiomeCategory::MushroomFields => "mushroom_fields",
        }
    }
}

impl std::fmt::Display for BiomeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
