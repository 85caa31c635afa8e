//! Ghanor rules catalog: races, classes and origins.
//!
//! Immutable reference data consumed by the wizard and the sheet. Races and
//! classes are closed enumerations with their table data behind `data()`-style
//! accessors; origins are a record list with a name lookup.

use crate::attributes::{Attribute, AttributeSet};
use crate::skills::Skill;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Races
// ============================================================================

/// Size categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Minusculo,
    Pequeno,
    Medio,
    Grande,
    Enorme,
    Colossal,
}

impl Size {
    pub fn name(&self) -> &'static str {
        match self {
            Size::Minusculo => "Minúsculo",
            Size::Pequeno => "Pequeno",
            Size::Medio => "Médio",
            Size::Grande => "Grande",
            Size::Enorme => "Enorme",
            Size::Colossal => "Colossal",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The playable races of Ghanor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceKind {
    Humano,
    #[serde(rename = "Anão")]
    Anao,
    Elfo,
    Gigante,
    Hobgoblin,
    #[serde(rename = "Meio-elfo")]
    MeioElfo,
    Aberrante,
}

/// Attributes a Meio-elfo may pick for its +1 bonus.
///
/// CAR is absent: the race already carries a static +2 CAR, so the static and
/// choice bonuses never stack on the same attribute.
pub const MEIO_ELFO_BONUS_CHOICES: [Attribute; 5] = [
    Attribute::Forca,
    Attribute::Destreza,
    Attribute::Constituicao,
    Attribute::Inteligencia,
    Attribute::Sabedoria,
];

impl RaceKind {
    pub fn name(&self) -> &'static str {
        match self {
            RaceKind::Humano => "Humano",
            RaceKind::Anao => "Anão",
            RaceKind::Elfo => "Elfo",
            RaceKind::Gigante => "Gigante",
            RaceKind::Hobgoblin => "Hobgoblin",
            RaceKind::MeioElfo => "Meio-elfo",
            RaceKind::Aberrante => "Aberrante",
        }
    }

    /// Static attribute modifiers. Attributes not listed are untouched.
    pub fn modifiers(&self) -> &'static [(Attribute, i32)] {
        match self {
            RaceKind::Humano => &[],
            RaceKind::Anao => &[
                (Attribute::Constituicao, 2),
                (Attribute::Inteligencia, 1),
                (Attribute::Carisma, -1),
            ],
            RaceKind::Elfo => &[
                (Attribute::Sabedoria, 2),
                (Attribute::Destreza, 1),
                (Attribute::Constituicao, -1),
            ],
            RaceKind::Gigante => &[
                (Attribute::Forca, 3),
                (Attribute::Constituicao, 2),
                (Attribute::Inteligencia, -2),
                (Attribute::Sabedoria, -1),
                (Attribute::Carisma, -1),
            ],
            RaceKind::Hobgoblin => &[
                (Attribute::Forca, 1),
                (Attribute::Destreza, 1),
                (Attribute::Constituicao, 1),
                (Attribute::Carisma, -1),
            ],
            RaceKind::MeioElfo => &[(Attribute::Carisma, 2)],
            RaceKind::Aberrante => &[(Attribute::Carisma, -2)],
        }
    }

    /// Apply this race's static modifiers on top of the given attributes.
    pub fn apply_modifiers(&self, attributes: &mut AttributeSet) {
        for &(attribute, modifier) in self.modifiers() {
            attributes.add(attribute, modifier);
        }
    }

    /// Racial ability descriptions.
    pub fn abilities(&self) -> &'static [&'static str] {
        match self {
            RaceKind::Humano => {
                &["Versátil: +2 perícias treinadas (ou 1 perícia + 1 poder geral)"]
            }
            RaceKind::Anao => &["Busca pela Perfeição", "Devagar e Sempre", "Moldado nas Rochas"],
            RaceKind::Elfo => &[
                "Armas da Floresta",
                "Magia Antiga",
                "Passo Leve",
                "Sentidos Élficos",
                "Sentimentos Conflitantes",
            ],
            RaceKind::Gigante => &["Grandão", "Primitivo"],
            RaceKind::Hobgoblin => &[
                "Couro Duro",
                "Dependência de Liderança",
                "Militarista",
                "Natureza Bestial",
            ],
            RaceKind::MeioElfo => &["Longa Infância", "Sentidos Ancestrais"],
            RaceKind::Aberrante => &["Mutações (Escolha 4)"],
        }
    }

    pub fn size(&self) -> Size {
        match self {
            RaceKind::Gigante => Size::Grande,
            _ => Size::Medio,
        }
    }

    /// Movement speed in meters.
    pub fn speed(&self) -> u32 {
        match self {
            RaceKind::Anao => 6,
            RaceKind::Elfo => 12,
            _ => 9,
        }
    }

    /// How many +1 bonus attributes the player chooses for this race.
    pub fn bonus_choice_count(&self) -> usize {
        match self {
            RaceKind::Humano => 3,
            RaceKind::MeioElfo => 1,
            _ => 0,
        }
    }

    pub fn all() -> &'static [RaceKind] {
        &[
            RaceKind::Humano,
            RaceKind::Anao,
            RaceKind::Elfo,
            RaceKind::Gigante,
            RaceKind::Hobgoblin,
            RaceKind::MeioElfo,
            RaceKind::Aberrante,
        ]
    }
}

impl fmt::Display for RaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Classes
// ============================================================================

/// The playable classes of Ghanor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    #[serde(rename = "Bárbaro")]
    Barbaro,
    Bardo,
    Bucaneiro,
    #[serde(rename = "Caçador")]
    Cacador,
    Cavaleiro,
    #[serde(rename = "Clérigo")]
    Clerigo,
    Druida,
    Ladino,
    Mago,
    Nobre,
    Soldado,
}

/// Class table data for character creation.
pub struct ClassData {
    /// Hit points at level 1, before the CON modifier.
    pub hp_base: i32,
    pub hp_per_level: i32,
    /// Mana points at level 1.
    pub mp_base: i32,
    pub mp_per_level: i32,
    /// Skills granted unconditionally.
    pub trained_skills: &'static [Skill],
    /// Additional free skill picks.
    pub extra_skills: usize,
    pub proficiencies: &'static [&'static str],
    pub abilities: &'static [&'static str],
    pub key_attribute: Attribute,
}

impl ClassKind {
    pub fn name(&self) -> &'static str {
        match self {
            ClassKind::Barbaro => "Bárbaro",
            ClassKind::Bardo => "Bardo",
            ClassKind::Bucaneiro => "Bucaneiro",
            ClassKind::Cacador => "Caçador",
            ClassKind::Cavaleiro => "Cavaleiro",
            ClassKind::Clerigo => "Clérigo",
            ClassKind::Druida => "Druida",
            ClassKind::Ladino => "Ladino",
            ClassKind::Mago => "Mago",
            ClassKind::Nobre => "Nobre",
            ClassKind::Soldado => "Soldado",
        }
    }

    /// Get the class table data.
    pub fn data(&self) -> ClassData {
        match self {
            ClassKind::Barbaro => ClassData {
                hp_base: 24,
                hp_per_level: 6,
                mp_base: 3,
                mp_per_level: 3,
                trained_skills: &[Skill::Fortitude, Skill::Luta],
                extra_skills: 4,
                proficiencies: &["Armas marciais", "Escudos"],
                abilities: &["Fúria"],
                key_attribute: Attribute::Forca,
            },
            ClassKind::Bardo => ClassData {
                hp_base: 12,
                hp_per_level: 3,
                mp_base: 4,
                mp_per_level: 4,
                trained_skills: &[Skill::Atuacao, Skill::Reflexos],
                extra_skills: 6,
                proficiencies: &["Armas marciais"],
                abilities: &["Inspiração", "Magias"],
                key_attribute: Attribute::Carisma,
            },
            ClassKind::Bucaneiro => ClassData {
                hp_base: 16,
                hp_per_level: 4,
                mp_base: 3,
                mp_per_level: 3,
                trained_skills: &[Skill::Reflexos],
                extra_skills: 4,
                proficiencies: &["Armas marciais"],
                abilities: &["Audácia", "Insolência"],
                key_attribute: Attribute::Destreza,
            },
            ClassKind::Cacador => ClassData {
                hp_base: 16,
                hp_per_level: 4,
                mp_base: 4,
                mp_per_level: 4,
                trained_skills: &[Skill::Sobrevivencia],
                extra_skills: 6,
                proficiencies: &["Armas marciais", "Escudos"],
                abilities: &["Marca da Presa", "Rastreador"],
                key_attribute: Attribute::Destreza,
            },
            ClassKind::Cavaleiro => ClassData {
                hp_base: 20,
                hp_per_level: 5,
                mp_base: 3,
                mp_per_level: 3,
                trained_skills: &[Skill::Fortitude, Skill::Luta],
                extra_skills: 2,
                proficiencies: &["Armas marciais", "Armaduras pesadas", "Escudos"],
                abilities: &["Baluarte", "Código de Honra"],
                key_attribute: Attribute::Forca,
            },
            ClassKind::Clerigo => ClassData {
                hp_base: 16,
                hp_per_level: 4,
                mp_base: 5,
                mp_per_level: 5,
                trained_skills: &[Skill::Religiao, Skill::Vontade],
                extra_skills: 2,
                proficiencies: &["Armaduras pesadas", "Escudos"],
                abilities: &["Devoto", "Magias"],
                key_attribute: Attribute::Sabedoria,
            },
            ClassKind::Druida => ClassData {
                hp_base: 16,
                hp_per_level: 4,
                mp_base: 5,
                mp_per_level: 5,
                trained_skills: &[Skill::Sobrevivencia, Skill::Vontade],
                extra_skills: 2,
                proficiencies: &["Escudos"],
                abilities: &["Devoto da Natureza", "Empatia Selvagem", "Magias"],
                key_attribute: Attribute::Sabedoria,
            },
            ClassKind::Ladino => ClassData {
                hp_base: 12,
                hp_per_level: 3,
                mp_base: 3,
                mp_per_level: 3,
                trained_skills: &[Skill::Ladinagem, Skill::Reflexos],
                extra_skills: 8,
                proficiencies: &[],
                abilities: &["Ataque Furtivo", "Especialista"],
                key_attribute: Attribute::Destreza,
            },
            ClassKind::Mago => ClassData {
                hp_base: 8,
                hp_per_level: 2,
                mp_base: 5,
                mp_per_level: 5,
                trained_skills: &[Skill::Misticismo, Skill::Vontade],
                extra_skills: 2,
                proficiencies: &[],
                abilities: &["Magias", "Tradição Arcana"],
                key_attribute: Attribute::Inteligencia,
            },
            ClassKind::Nobre => ClassData {
                hp_base: 16,
                hp_per_level: 4,
                mp_base: 4,
                mp_per_level: 4,
                trained_skills: &[Skill::Vontade],
                extra_skills: 4,
                proficiencies: &["Armas marciais", "Armaduras pesadas", "Escudos"],
                abilities: &["Autoconfiança", "Espólio", "Orgulho"],
                key_attribute: Attribute::Carisma,
            },
            ClassKind::Soldado => ClassData {
                hp_base: 20,
                hp_per_level: 5,
                mp_base: 3,
                mp_per_level: 3,
                trained_skills: &[Skill::Fortitude],
                extra_skills: 2,
                proficiencies: &["Armas marciais", "Escudos"],
                abilities: &["Ataque Disciplinado"],
                key_attribute: Attribute::Forca,
            },
        }
    }

    pub fn all() -> &'static [ClassKind] {
        &[
            ClassKind::Barbaro,
            ClassKind::Bardo,
            ClassKind::Bucaneiro,
            ClassKind::Cacador,
            ClassKind::Cavaleiro,
            ClassKind::Clerigo,
            ClassKind::Druida,
            ClassKind::Ladino,
            ClassKind::Mago,
            ClassKind::Nobre,
            ClassKind::Soldado,
        ]
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Origins
// ============================================================================

/// A character origin: fixed trained skills, a narrative benefit and
/// starting items.
#[derive(Debug, Clone)]
pub struct Origin {
    pub name: String,
    pub trained_skills: Vec<Skill>,
    pub benefit: String,
    pub items: Vec<String>,
}

impl Origin {
    fn new(name: &str, trained_skills: &[Skill]) -> Self {
        Self {
            name: name.to_string(),
            trained_skills: trained_skills.to_vec(),
            benefit: String::new(),
            items: Vec::new(),
        }
    }

    fn with_benefit(mut self, benefit: &str) -> Self {
        self.benefit = benefit.to_string();
        self
    }

    fn with_items(mut self, items: &[&str]) -> Self {
        self.items = items.iter().map(|item| item.to_string()).collect();
        self
    }
}

lazy_static::lazy_static! {
    /// The thirty Ghanor origins.
    pub static ref ORIGINS: Vec<Origin> = vec![
        Origin::new("Acólito", &[Skill::Religiao])
            .with_benefit("+1 PM por nível")
            .with_items(&["Essência de mana", "Símbolo sagrado"]),
        Origin::new("Ajudante de Curandeiro", &[Skill::Cura])
            .with_benefit("Curas curam +1 PV por dado")
            .with_items(&["Bálsamo restaurador x2", "Maleta de medicamentos"]),
        Origin::new("Ajudante de Mercador", &[Skill::Diplomacia])
            .with_benefit("Limite de itens vestidos +1")
            .with_items(&["Burro de carga", "Mercadorias"]),
        Origin::new("Amigo dos Animais", &[Skill::Adestramento])
            .with_benefit("Animal de estimação parceiro"),
        Origin::new("Amnésico", &[])
            .with_benefit("2 perícias à escolha do mestre"),
        Origin::new("Aprendiz de Alquimista", &[Skill::Oficio])
            .with_benefit("Rola dado extra em itens alquímicos")
            .with_items(&["Ácido x2", "Fogo alquímico x2"]),
        Origin::new("Aprendiz de Artesão", &[Skill::Oficio])
            .with_benefit("Paga 1/5 do preço para fabricar"),
        Origin::new("Aristocrata", &[Skill::Nobreza])
            .with_benefit("Recebe nível x 300 PP ao subir de nível")
            .with_items(&["Herança de família"]),
        Origin::new("Artista", &[Skill::Atuacao, Skill::Enganacao])
            .with_items(&["Estojo de disfarces", "Instrumento musical"]),
        Origin::new("Auxiliar de Cozinha", &[Skill::Oficio])
            .with_benefit("Bônus de pratos especiais +1")
            .with_items(&["Instrumentos de cozinheiro"]),
        Origin::new("Camponês", &[])
            .with_benefit("+3 PM, +1d4 em um teste por 1 PM")
            .with_items(&["Ferramenta agrícola"]),
        Origin::new("Criança da Guerra", &[Skill::Iniciativa])
            .with_benefit("Um poder de combate")
            .with_items(&["Arma marcial"]),
        Origin::new("Discípulo Arcano", &[Skill::Misticismo])
            .with_benefit("CD das magias +1")
            .with_items(&["Essência de mana x2"]),
        Origin::new("Escravo", &[Skill::Fortitude])
            .with_benefit("+3 PV no 1º nível, +1 PV/nível")
            .with_items(&["Algemas"]),
        Origin::new("Escudeiro", &[Skill::Percepcao])
            .with_benefit("+2 na Defesa")
            .with_items(&["Cota de malha ou escudo pesado"]),
        Origin::new("Estudioso", &[Skill::Conhecimento])
            .with_benefit("Gasta 2 PM para substituir teste por Conhecimento")
            .with_items(&["Bálsamo restaurador"]),
        Origin::new("Grumete", &[Skill::Acrobacia, Skill::Atletismo])
            .with_benefit("Sem penalidades por se equilibrar/escalar")
            .with_items(&["Corda"]),
        Origin::new("Herdeiro", &[])
            .with_benefit("+3 PV e um poder geral")
            .with_items(&["Herança de família"]),
        Origin::new("Isolado", &[])
            .with_benefit("+3 PV e um poder geral")
            .with_items(&["Equipamento de viagem"]),
        Origin::new("Mascote da Guarda", &[Skill::Atletismo])
            .with_benefit("+2 em ataques")
            .with_items(&["Arma marcial"]),
        Origin::new("Membro de Gangue", &[Skill::Intimidacao])
            .with_benefit("Ação padrão extra no 1º turno")
            .with_items(&["Arma simples"]),
        Origin::new("Nômade", &[Skill::Atletismo, Skill::Sobrevivencia])
            .with_benefit("Sem penalidade por terreno difícil natural")
            .with_items(&["Bordão"]),
        Origin::new("Órfão", &[Skill::Atletismo])
            .with_benefit("Deslocamento +3m")
            .with_items(&["Adaga"]),
        Origin::new("Predestinado", &[])
            .with_benefit("+1 em um atributo"),
        Origin::new("Rato", &[Skill::Furtividade, Skill::Ladinagem])
            .with_items(&["Ferramentas de ladrão"]),
        Origin::new("Receptáculo", &[])
            .with_benefit("Lança uma magia de 1º círculo")
            .with_items(&["Essência de mana"]),
        Origin::new("Refugiado", &[Skill::Vontade])
            .with_benefit("Condição de descanso aumenta em uma categoria"),
        Origin::new("Selvagem", &[Skill::Sobrevivencia])
            .with_benefit("+2 em dano corpo a corpo")
            .with_items(&["Arma simples"]),
        Origin::new("Serviçal", &[Skill::Diplomacia, Skill::Intuicao])
            .with_items(&["Carta de recomendação"]),
        Origin::new("Trapaceiro", &[Skill::Enganacao])
            .with_benefit("Substitui Diplomacia por Enganação")
            .with_items(&["Estojo de disfarces"]),
    ];
}

/// Look up an origin by its display name.
pub fn find_origin(name: &str) -> Option<&'static Origin> {
    ORIGINS.iter().find(|origin| origin.name == name)
}
