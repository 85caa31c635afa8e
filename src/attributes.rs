//! Ghanor attributes and the point-buy cost table.
//!
//! In Ghanor the attribute value IS the modifier: 0 is the human average,
//! positive values are above it, negative values below. There is no separate
//! derived-modifier step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "FOR")]
    Forca,
    #[serde(rename = "DES")]
    Destreza,
    #[serde(rename = "CON")]
    Constituicao,
    #[serde(rename = "INT")]
    Inteligencia,
    #[serde(rename = "SAB")]
    Sabedoria,
    #[serde(rename = "CAR")]
    Carisma,
}

impl Attribute {
    /// Canonical three-letter abbreviation used on sheets.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Attribute::Forca => "FOR",
            Attribute::Destreza => "DES",
            Attribute::Constituicao => "CON",
            Attribute::Inteligencia => "INT",
            Attribute::Sabedoria => "SAB",
            Attribute::Carisma => "CAR",
        }
    }

    /// Full display name.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Forca => "Força",
            Attribute::Destreza => "Destreza",
            Attribute::Constituicao => "Constituição",
            Attribute::Inteligencia => "Inteligência",
            Attribute::Sabedoria => "Sabedoria",
            Attribute::Carisma => "Carisma",
        }
    }

    pub fn all() -> [Attribute; 6] {
        [
            Attribute::Forca,
            Attribute::Destreza,
            Attribute::Constituicao,
            Attribute::Inteligencia,
            Attribute::Sabedoria,
            Attribute::Carisma,
        ]
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

/// Attribute values container. Always carries all six attributes.
///
/// Serializes with the sheet abbreviations as keys (`FOR`, `DES`, ...) so a
/// collection written by older tooling round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeSet {
    #[serde(rename = "FOR")]
    pub forca: i32,
    #[serde(rename = "DES")]
    pub destreza: i32,
    #[serde(rename = "CON")]
    pub constituicao: i32,
    #[serde(rename = "INT")]
    pub inteligencia: i32,
    #[serde(rename = "SAB")]
    pub sabedoria: i32,
    #[serde(rename = "CAR")]
    pub carisma: i32,
}

impl AttributeSet {
    pub fn new(forca: i32, destreza: i32, constituicao: i32, inteligencia: i32, sabedoria: i32, carisma: i32) -> Self {
        Self {
            forca,
            destreza,
            constituicao,
            inteligencia,
            sabedoria,
            carisma,
        }
    }

    /// Get the value for an attribute.
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Forca => self.forca,
            Attribute::Destreza => self.destreza,
            Attribute::Constituicao => self.constituicao,
            Attribute::Inteligencia => self.inteligencia,
            Attribute::Sabedoria => self.sabedoria,
            Attribute::Carisma => self.carisma,
        }
    }

    /// Set the value for an attribute.
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        match attribute {
            Attribute::Forca => self.forca = value,
            Attribute::Destreza => self.destreza = value,
            Attribute::Constituicao => self.constituicao = value,
            Attribute::Inteligencia => self.inteligencia = value,
            Attribute::Sabedoria => self.sabedoria = value,
            Attribute::Carisma => self.carisma = value,
        }
    }

    /// Add a delta to an attribute.
    pub fn add(&mut self, attribute: Attribute, delta: i32) {
        self.set(attribute, self.get(attribute) + delta);
    }
}

/// Point-buy cost of a single attribute value.
///
/// Escalating above 2, refunding below 0. Values under -1 refund one point
/// per step.
pub fn attribute_cost(value: i32) -> i32 {
    match value {
        v if v < -1 => v,
        -1 => -1,
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 4,
        4 => 7,
        v => 7 + (v - 4) * 4,
    }
}

/// Total points spent across all six attributes.
///
/// Informational only: the wizard displays it during allocation but never
/// enforces a budget.
pub fn total_attribute_cost(attributes: &AttributeSet) -> i32 {
    Attribute::all()
        .iter()
        .map(|&attribute| attribute_cost(attributes.get(attribute)))
        .sum()
}
