//! Living entity definitions.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, EntityId, EntityKind, PersistentData, Vec3};
use crate::mechanics::Profession;

/// A living entity with everything the world tracks about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivingEntity {
    pub id: EntityId,
    pub kind: EntityKind,

    // Villager attributes (zombie villagers keep theirs through infection and cure)
    pub profession: Profession,
    /// Experience level, 0 for unleveled.
    pub level: u32,

    /// Feet position.
    pub position: Vec3,
    /// Identifier of the biome at the entity's position (e.g. "snowy_taiga").
    pub biome: String,

    /// Name shown above the entity, if any.
    pub custom_name: Option<String>,
    pub custom_name_visible: bool,

    #[serde(default)]
    pub persistent_data: PersistentData,

    pub dead: bool,
    /// Cleared once the entity is removed or unloaded from the world.
    pub valid: bool,
}

impl LivingEntity {
    /// Create a new entity of the given kind at the origin of a plains biome.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            id: EntityId::new(),
            kind,
            profession: Profession::None,
            level: 0,
            position: Vec3::default(),
            biome: "plains".to_string(),
            custom_name: None,
            custom_name_visible: false,
            persistent_data: PersistentData::new(),
            dead: false,
            valid: true,
        }
    }

    /// Create a villager with the given profession.
    pub fn villager(profession: Profession) -> Self {
        Self::new(EntityKind::Villager).with_profession(profession)
    }

    pub fn with_profession(mut self, profession: Profession) -> Self {
        self.profession = profession;
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_biome(mut self, biome: impl Into<String>) -> Self {
        self.biome = biome.into();
        self
    }

    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    /// Check the entity is still in the world and alive.
    pub fn is_active(&self) -> bool {
        self.valid && !self.dead
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let (width, height) = self.kind.dimensions();
        BoundingBox::around(self.position, width, height)
    }
}
