//! Ghanor character creation and sheet engine.
//!
//! This crate provides:
//! - The Ghanor rules catalog (attributes, 27 skills, races, classes, origins)
//! - A seven-step creation wizard with per-step validation and a finalizer
//! - Pure sheet operations for play-time tracking (HP/MP, attributes, notes)
//! - JSON persistence of the character collection
//!
//! # Quick Start
//!
//! ```ignore
//! use ghanor_core::{CharacterVault, ClassKind, RaceKind, WizardState, WizardStep};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut wizard = WizardState::new();
//!     wizard.name = "Ruff Ghanor".to_string();
//!     wizard.concept = "Um pastor de cabras tocado pelo destino".to_string();
//!     wizard.select_race(RaceKind::Humano);
//!     wizard.select_class(ClassKind::Clerigo);
//!     wizard.select_origin("Acólito");
//!
//!     while wizard.step() != WizardStep::Review {
//!         wizard.advance()?;
//!     }
//!     let character = wizard.finalize()?;
//!
//!     let mut vault = CharacterVault::open("characters.json").await?;
//!     vault.save_character(character).await?;
//!     Ok(())
//! }
//! ```

pub mod attributes;
pub mod rules;
pub mod sheet;
pub mod skills;
pub mod vault;
pub mod wizard;

// Primary public API
pub use attributes::{attribute_cost, total_attribute_cost, Attribute, AttributeSet};
pub use rules::{
    find_origin, ClassData, ClassKind, Origin, RaceKind, Size, MEIO_ELFO_BONUS_CHOICES, ORIGINS,
};
pub use sheet::{parse_points_input, Character, CharacterId};
pub use skills::Skill;
pub use vault::{default_vault_path, CharacterVault, VaultError};
pub use wizard::{resolve_attributes, WizardError, WizardState, WizardStep};
