//! The persisted character sheet and its play-time operations.
//!
//! A `Character` is created only by the wizard's finalizer and then mutated
//! through the operations here. Every operation returns a new value; the
//! caller (the persistence layer) decides when to commit.

use crate::attributes::{Attribute, AttributeSet};
use crate::rules::{ClassKind, RaceKind};
use crate::skills::Skill;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A finished Ghanor character.
///
/// Serializes with the sheet's historical field names (`trainedSkills`,
/// `currentHP`, ...) so existing collections round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub concept: String,
    pub level: u8,
    pub race: RaceKind,
    pub class: ClassKind,
    pub origin: String,
    pub attributes: AttributeSet,
    pub trained_skills: BTreeSet<Skill>,
    #[serde(rename = "currentHP")]
    pub current_hp: i32,
    #[serde(rename = "maxHP")]
    pub max_hp: i32,
    #[serde(rename = "currentMP")]
    pub current_mp: i32,
    #[serde(rename = "maxMP")]
    pub max_mp: i32,
    pub equipment: Vec<String>,
    pub notes: String,
}

impl Character {
    /// Whether the character is trained in the given skill.
    pub fn is_trained(&self, skill: Skill) -> bool {
        self.trained_skills.contains(&skill)
    }

    /// Flat bonus granted by training, stepped by level.
    pub fn training_bonus(&self) -> i32 {
        match self.level {
            0..=6 => 2,
            7..=14 => 4,
            _ => 6,
        }
    }

    /// Total bonus for a skill test: half level, rounded down, plus the
    /// governing attribute, plus the training bonus if trained.
    pub fn skill_bonus(&self, skill: Skill) -> i32 {
        let half_level = i32::from(self.level) / 2;
        let attribute = self.attributes.get(skill.attribute());
        let training = if self.is_trained(skill) {
            self.training_bonus()
        } else {
            0
        };
        half_level + attribute + training
    }

    /// Defense value shown on the sheet.
    pub fn defense(&self) -> i32 {
        10 + self.attributes.get(Attribute::Destreza)
    }

    /// Adjust current HP by a delta, clamped into [0, max].
    pub fn adjust_hp(&self, delta: i32) -> Character {
        self.set_hp(self.current_hp + delta)
    }

    /// Adjust current MP by a delta, clamped into [0, max].
    pub fn adjust_mp(&self, delta: i32) -> Character {
        self.set_mp(self.current_mp + delta)
    }

    /// Set current HP directly, clamped into [0, max].
    pub fn set_hp(&self, value: i32) -> Character {
        let mut updated = self.clone();
        updated.current_hp = value.min(self.max_hp).max(0);
        updated
    }

    /// Set current MP directly, clamped into [0, max].
    pub fn set_mp(&self, value: i32) -> Character {
        let mut updated = self.clone();
        updated.current_mp = value.min(self.max_mp).max(0);
        updated
    }

    /// Restore HP and MP to their maximums.
    pub fn long_rest(&self) -> Character {
        let mut updated = self.clone();
        updated.current_hp = updated.max_hp;
        updated.current_mp = updated.max_mp;
        updated
    }

    /// Replace the attributes, carrying the CON delta into max and current
    /// HP. Current HP is clamped to zero from below; MP is untouched, since
    /// no attribute scales mana after creation.
    pub fn with_attributes(&self, attributes: AttributeSet) -> Character {
        let con_delta = attributes.constituicao - self.attributes.constituicao;

        let mut updated = self.clone();
        updated.attributes = attributes;
        updated.max_hp += con_delta;
        updated.current_hp = (updated.current_hp + con_delta).max(0);
        updated
    }

    /// Replace the notes verbatim.
    pub fn with_notes(&self, notes: impl Into<String>) -> Character {
        let mut updated = self.clone();
        updated.notes = notes.into();
        updated
    }
}

/// Parse free-text point input for HP/MP fields, degrading to 0 when it is
/// not a number. Range enforcement is left to the clamped setters.
pub fn parse_points_input(input: &str) -> i32 {
    input.trim().parse().unwrap_or(0)
}
