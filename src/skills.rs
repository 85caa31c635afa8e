//! Ghanor skills.
//!
//! All 27 skills with their governing attributes. The binding is immutable
//! reference data, not per-character state.

use crate::attributes::Attribute;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The 27 Ghanor skills.
///
/// Variant order follows the rulebook's alphabetical listing; serialization
/// uses the accented display names so persisted sheets keep the canonical
/// skill strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Acrobacia,
    Adestramento,
    Atletismo,
    #[serde(rename = "Atuação")]
    Atuacao,
    Cavalgar,
    Conhecimento,
    Cura,
    Diplomacia,
    #[serde(rename = "Enganação")]
    Enganacao,
    Fortitude,
    Furtividade,
    Guerra,
    Iniciativa,
    #[serde(rename = "Intimidação")]
    Intimidacao,
    #[serde(rename = "Intuição")]
    Intuicao,
    #[serde(rename = "Investigação")]
    Investigacao,
    Ladinagem,
    Luta,
    Misticismo,
    Nobreza,
    #[serde(rename = "Ofício")]
    Oficio,
    #[serde(rename = "Percepção")]
    Percepcao,
    Pontaria,
    Reflexos,
    #[serde(rename = "Religião")]
    Religiao,
    #[serde(rename = "Sobrevivência")]
    Sobrevivencia,
    Vontade,
}

impl Skill {
    /// Get the attribute governing this skill.
    pub fn attribute(&self) -> Attribute {
        match self {
            Skill::Atletismo | Skill::Luta => Attribute::Forca,
            Skill::Acrobacia
            | Skill::Cavalgar
            | Skill::Furtividade
            | Skill::Iniciativa
            | Skill::Ladinagem
            | Skill::Pontaria
            | Skill::Reflexos => Attribute::Destreza,
            Skill::Fortitude => Attribute::Constituicao,
            Skill::Conhecimento
            | Skill::Guerra
            | Skill::Investigacao
            | Skill::Misticismo
            | Skill::Nobreza
            | Skill::Oficio => Attribute::Inteligencia,
            Skill::Cura
            | Skill::Intuicao
            | Skill::Percepcao
            | Skill::Religiao
            | Skill::Sobrevivencia
            | Skill::Vontade => Attribute::Sabedoria,
            Skill::Adestramento
            | Skill::Atuacao
            | Skill::Diplomacia
            | Skill::Enganacao
            | Skill::Intimidacao => Attribute::Carisma,
        }
    }

    /// Get the skill name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Skill::Acrobacia => "Acrobacia",
            Skill::Adestramento => "Adestramento",
            Skill::Atletismo => "Atletismo",
            Skill::Atuacao => "Atuação",
            Skill::Cavalgar => "Cavalgar",
            Skill::Conhecimento => "Conhecimento",
            Skill::Cura => "Cura",
            Skill::Diplomacia => "Diplomacia",
            Skill::Enganacao => "Enganação",
            Skill::Fortitude => "Fortitude",
            Skill::Furtividade => "Furtividade",
            Skill::Guerra => "Guerra",
            Skill::Iniciativa => "Iniciativa",
            Skill::Intimidacao => "Intimidação",
            Skill::Intuicao => "Intuição",
            Skill::Investigacao => "Investigação",
            Skill::Ladinagem => "Ladinagem",
            Skill::Luta => "Luta",
            Skill::Misticismo => "Misticismo",
            Skill::Nobreza => "Nobreza",
            Skill::Oficio => "Ofício",
            Skill::Percepcao => "Percepção",
            Skill::Pontaria => "Pontaria",
            Skill::Reflexos => "Reflexos",
            Skill::Religiao => "Religião",
            Skill::Sobrevivencia => "Sobrevivência",
            Skill::Vontade => "Vontade",
        }
    }

    /// Get all skills governed by the given attribute.
    pub fn for_attribute(attribute: Attribute) -> Vec<Skill> {
        Self::all()
            .iter()
            .copied()
            .filter(|skill| skill.attribute() == attribute)
            .collect()
    }

    /// Get all skills in rulebook order.
    pub fn all() -> &'static [Skill] {
        &[
            Skill::Acrobacia,
            Skill::Adestramento,
            Skill::Atletismo,
            Skill::Atuacao,
            Skill::Cavalgar,
            Skill::Conhecimento,
            Skill::Cura,
            Skill::Diplomacia,
            Skill::Enganacao,
            Skill::Fortitude,
            Skill::Furtividade,
            Skill::Guerra,
            Skill::Iniciativa,
            Skill::Intimidacao,
            Skill::Intuicao,
            Skill::Investigacao,
            Skill::Ladinagem,
            Skill::Luta,
            Skill::Misticismo,
            Skill::Nobreza,
            Skill::Oficio,
            Skill::Percepcao,
            Skill::Pontaria,
            Skill::Reflexos,
            Skill::Religiao,
            Skill::Sobrevivencia,
            Skill::Vontade,
        ]
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
