//! Villager mechanics: professions and experience levels.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Highest experience level a villager can reach.
pub const MAX_VILLAGER_LEVEL: u32 = 5;

/// Villager professions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profession {
    Armorer,
    Butcher,
    Cartographer,
    Cleric,
    Farmer,
    Fisherman,
    Fletcher,
    Leatherworker,
    Librarian,
    Mason,
    Shepherd,
    Toolsmith,
    Weaponsmith,
    Nitwit,
    /// No profession (unemployed villager).
    #[default]
    None,
    /// A profession registered by the host outside the vanilla set.
    Other(String),
}

impl Profession {
    /// Every built-in profession, `None` last.
    pub const BUILTIN: [Profession; 15] = [
        Profession::Armorer,
        Profession::Butcher,
        Profession::Cartographer,
        Profession::Cleric,
        Profession::Farmer,
        Profession::Fisherman,
        Profession::Fletcher,
        Profession::Leatherworker,
        Profession::Librarian,
        Profession::Mason,
        Profession::Shepherd,
        Profession::Toolsmith,
        Profession::Weaponsmith,
        Profession::Nitwit,
        Profession::None,
    ];

    /// Lower-case identifier (e.g. "weaponsmith", "none").
    pub fn key(&self) -> Cow<'_, str> {
        let key = match self {
            Profession::Armorer => "armorer",
            Profession::Butcher => "butcher",
            Profession::Cartographer => "cartographer",
            Profession::Cleric => "cleric",
            Profession::Farmer => "farmer",
            Profession::Fisherman => "fisherman",
            Profession::Fletcher => "fletcher",
            Profession::Leatherworker => "leatherworker",
            Profession::Librarian => "librarian",
            Profession::Mason => "mason",
            Profession::Shepherd => "shepherd",
            Profession::Toolsmith => "toolsmith",
            Profession::Weaponsmith => "weaponsmith",
            Profession::Nitwit => "nitwit",
            Profession::None => "none",
            Profession::Other(name) => return Cow::Owned(name.to_lowercase()),
        };
        Cow::Borrowed(key)
    }

    /// Parse a profession identifier, case-insensitively. Unknown identifiers
    /// become `Profession::Other`.
    pub fn from_key(key: &str) -> Self {
        let lowered = key.trim().to_lowercase();
        Self::BUILTIN
            .iter()
            .find(|p| p.key() == lowered.as_str())
            .cloned()
            .unwrap_or(Profession::Other(lowered))
    }
}

impl std::fmt::Display for Profession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
