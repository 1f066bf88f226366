//! Display titles for professions and experience levels.

use village_rules::{Profession, MAX_VILLAGER_LEVEL};

/// Title shown for a profession in titled names.
pub fn profession_title(profession: &Profession) -> &'static str {
    match profession {
        Profession::Armorer => "Armorer",
        Profession::Butcher => "Butcher",
        Profession::Cartographer => "Cartographer",
        Profession::Cleric => "Cleric",
        Profession::Farmer => "Farmer",
        Profession::Fisherman => "Fisherman",
        Profession::Fletcher => "Fletcher",
        Profession::Leatherworker => "Leatherworker",
        Profession::Librarian => "Librarian",
        Profession::Mason => "Mason",
        Profession::Shepherd => "Shepherd",
        Profession::Toolsmith => "Toolsmith",
        Profession::Weaponsmith => "Weaponsmith",
        Profession::Nitwit => "Nitwit",
        Profession::None | Profession::Other(_) => "Villager",
    }
}

/// Rank name for an experience level. Level 0 and anything above the
/// maximum have none.
pub fn level_title(level: u32) -> Option<&'static str> {
    const RANKS: [&str; MAX_VILLAGER_LEVEL as usize] =
        ["Novice", "Apprentice", "Journeyman", "Expert", "Master"];
    let index = usize::try_from(level.checked_sub(1)?).ok()?;
    RANKS.get(index).copied()
}
