//! The seven-step character-creation wizard.
//!
//! `WizardState` is the staged, transient form of a character under
//! construction. It is only converted into an immutable [`Character`] by
//! [`WizardState::finalize`]; cancelling the wizard simply drops the state.
//!
//! Steps are strictly ordered. Moving forward is gated on the current step's
//! validity predicate; moving backward is always allowed.

use crate::attributes::{total_attribute_cost, Attribute, AttributeSet};
use crate::rules::{find_origin, ClassKind, RaceKind, MEIO_ELFO_BONUS_CHOICES};
use crate::sheet::{Character, CharacterId};
use crate::skills::Skill;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// The wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum WizardStep {
    #[default]
    Concept,
    Attributes,
    Race,
    Class,
    Origin,
    Skills,
    Review,
}

impl WizardStep {
    /// Step title as shown in the wizard header.
    pub fn name(&self) -> &'static str {
        match self {
            WizardStep::Concept => "Conceito",
            WizardStep::Attributes => "Atributos",
            WizardStep::Race => "Raça",
            WizardStep::Class => "Classe",
            WizardStep::Origin => "Origem",
            WizardStep::Skills => "Perícias",
            WizardStep::Review => "Finalizar",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Concept => Some(WizardStep::Attributes),
            WizardStep::Attributes => Some(WizardStep::Race),
            WizardStep::Race => Some(WizardStep::Class),
            WizardStep::Class => Some(WizardStep::Origin),
            WizardStep::Origin => Some(WizardStep::Skills),
            WizardStep::Skills => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Concept => None,
            WizardStep::Attributes => Some(WizardStep::Concept),
            WizardStep::Race => Some(WizardStep::Attributes),
            WizardStep::Class => Some(WizardStep::Race),
            WizardStep::Origin => Some(WizardStep::Class),
            WizardStep::Skills => Some(WizardStep::Origin),
            WizardStep::Review => Some(WizardStep::Skills),
        }
    }

    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Concept,
            WizardStep::Attributes,
            WizardStep::Race,
            WizardStep::Class,
            WizardStep::Origin,
            WizardStep::Skills,
            WizardStep::Review,
        ]
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rejected wizard transitions. The state is left unchanged; the caller may
/// correct the selection and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("the {0} step is incomplete")]
    StepIncomplete(WizardStep),

    #[error("already at the last step")]
    AtLastStep,

    #[error("finalize is only available from the review step")]
    NotAtReview,
}

/// Resolve final attributes from the base allocation plus racial modifiers
/// and the race-specific bonus choices.
///
/// Whatever choices are present are applied; completeness of the selection is
/// the step validator's concern. No clamping.
pub fn resolve_attributes(
    base: &AttributeSet,
    race: RaceKind,
    human_bonus: &BTreeSet<Attribute>,
    half_elf_bonus: Option<Attribute>,
) -> AttributeSet {
    let mut resolved = *base;
    race.apply_modifiers(&mut resolved);

    if race == RaceKind::Humano {
        for &attribute in human_bonus {
            resolved.add(attribute, 1);
        }
    }
    if race == RaceKind::MeioElfo {
        if let Some(attribute) = half_elf_bonus {
            resolved.add(attribute, 1);
        }
    }

    resolved
}

/// Transient state of a character under construction.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    step: WizardStep,
    pub name: String,
    pub concept: String,
    pub base_attributes: AttributeSet,
    pub race: Option<RaceKind>,
    pub human_bonus: BTreeSet<Attribute>,
    pub half_elf_bonus: Option<Attribute>,
    pub class: Option<ClassKind>,
    pub origin: Option<String>,
    pub extra_skills: BTreeSet<Skill>,
    pub notes: String,
}

impl WizardState {
    /// Start a fresh wizard at the concept step.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Points spent on the base allocation. Informational only.
    pub fn points_spent(&self) -> i32 {
        total_attribute_cost(&self.base_attributes)
    }

    /// Raise or lower a base attribute. No bounds are enforced; the cost
    /// display is the only feedback.
    pub fn adjust_attribute(&mut self, attribute: Attribute, delta: i32) {
        self.base_attributes.add(attribute, delta);
    }

    /// Select a race. Earlier bonus picks are kept and simply stop applying
    /// if the new race does not use them.
    pub fn select_race(&mut self, race: RaceKind) {
        self.race = Some(race);
    }

    /// Toggle one of the Humano +1 picks. A fourth distinct pick is ignored.
    pub fn toggle_human_bonus(&mut self, attribute: Attribute) -> bool {
        if self.human_bonus.remove(&attribute) {
            return true;
        }
        if self.human_bonus.len() < 3 {
            self.human_bonus.insert(attribute);
            return true;
        }
        false
    }

    /// Set the Meio-elfo +1 pick. CAR is not an eligible choice.
    pub fn set_half_elf_bonus(&mut self, attribute: Attribute) -> bool {
        if !MEIO_ELFO_BONUS_CHOICES.contains(&attribute) {
            return false;
        }
        self.half_elf_bonus = Some(attribute);
        true
    }

    /// Select a class, discarding any extra skills picked for the previous
    /// class.
    pub fn select_class(&mut self, class: ClassKind) {
        self.class = Some(class);
        self.extra_skills.clear();
    }

    /// Select an origin by name. Unknown names are rejected.
    pub fn select_origin(&mut self, name: &str) -> bool {
        if find_origin(name).is_none() {
            return false;
        }
        self.origin = Some(name.to_string());
        true
    }

    /// Skills granted by the selected class and origin. These are always
    /// trained and cannot be toggled.
    pub fn fixed_skills(&self) -> BTreeSet<Skill> {
        let mut fixed = BTreeSet::new();
        if let Some(class) = self.class {
            fixed.extend(class.data().trained_skills.iter().copied());
        }
        if let Some(origin) = self.origin.as_deref().and_then(find_origin) {
            fixed.extend(origin.trained_skills.iter().copied());
        }
        fixed
    }

    /// Toggle an extra trained skill. Fixed skills are refused; selecting
    /// past the cap is allowed and only blocks `advance`.
    pub fn toggle_skill(&mut self, skill: Skill) -> bool {
        if self.fixed_skills().contains(&skill) {
            return false;
        }
        if !self.extra_skills.remove(&skill) {
            self.extra_skills.insert(skill);
        }
        true
    }

    /// Cap on player-chosen extra skills: class picks, plus INT if positive,
    /// plus 2 for Humano.
    pub fn max_extra_skills(&self) -> usize {
        let class_picks = self.class.map(|class| class.data().extra_skills).unwrap_or(0);
        let int_bonus = self
            .final_attributes()
            .get(Attribute::Inteligencia)
            .max(0) as usize;
        let human_bonus = if self.race == Some(RaceKind::Humano) { 2 } else { 0 };
        class_picks + int_bonus + human_bonus
    }

    /// Final attributes with racial modifiers and bonus picks applied.
    pub fn final_attributes(&self) -> AttributeSet {
        match self.race {
            Some(race) => resolve_attributes(
                &self.base_attributes,
                race,
                &self.human_bonus,
                self.half_elf_bonus,
            ),
            None => self.base_attributes,
        }
    }

    /// Validity predicate for a single step.
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Concept => !self.name.is_empty() && !self.concept.is_empty(),
            WizardStep::Attributes => true,
            WizardStep::Race => match self.race {
                None => false,
                Some(RaceKind::Humano) => self.human_bonus.len() == 3,
                Some(RaceKind::MeioElfo) => self.half_elf_bonus.is_some(),
                Some(_) => true,
            },
            WizardStep::Class => self.class.is_some(),
            WizardStep::Origin => self.origin.is_some(),
            WizardStep::Skills => self.extra_skills.len() <= self.max_extra_skills(),
            WizardStep::Review => true,
        }
    }

    /// Move to the next step if the current one is valid.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        if !self.is_step_valid(self.step) {
            return Err(WizardError::StepIncomplete(self.step));
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(next)
            }
            None => Err(WizardError::AtLastStep),
        }
    }

    /// Move to the previous step. A no-op at the first step.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Assemble the finished character. Only available from the review step,
    /// and every step is re-validated first.
    pub fn finalize(&self) -> Result<Character, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotAtReview);
        }
        for &step in WizardStep::all() {
            if !self.is_step_valid(step) {
                return Err(WizardError::StepIncomplete(step));
            }
        }

        let race = self
            .race
            .ok_or(WizardError::StepIncomplete(WizardStep::Race))?;
        let class = self
            .class
            .ok_or(WizardError::StepIncomplete(WizardStep::Class))?;
        let origin = self
            .origin
            .as_deref()
            .and_then(find_origin)
            .ok_or(WizardError::StepIncomplete(WizardStep::Origin))?;

        let attributes = self.final_attributes();
        let data = class.data();

        let mut trained_skills: BTreeSet<Skill> =
            data.trained_skills.iter().copied().collect();
        trained_skills.extend(origin.trained_skills.iter().copied());
        trained_skills.extend(self.extra_skills.iter().copied());

        let max_hp = data.hp_base + attributes.constituicao;
        let max_mp = data.mp_base;

        Ok(Character {
            id: CharacterId::new(),
            name: self.name.clone(),
            concept: self.concept.clone(),
            level: 1,
            race,
            class,
            origin: origin.name.clone(),
            attributes,
            trained_skills,
            current_hp: max_hp,
            max_hp,
            current_mp: max_mp,
            max_mp,
            equipment: origin.items.clone(),
            notes: self.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wizard filled through the origin step with an Anão Clérigo Acólito.
    fn staged_wizard() -> WizardState {
        let mut wizard = WizardState::new();
        wizard.name = "Thalia".to_string();
        wizard.concept = "Uma clériga anã de voto silencioso".to_string();
        wizard.base_attributes = AttributeSet::new(0, 0, 1, 1, 2, 0);
        wizard.select_race(RaceKind::Anao);
        wizard.select_class(ClassKind::Clerigo);
        assert!(wizard.select_origin("Acólito"));
        wizard
    }

    fn advance_to(wizard: &mut WizardState, step: WizardStep) {
        while wizard.step() != step {
            wizard.advance().expect("staged wizard should advance");
        }
    }

    #[test]
    fn test_concept_step_requires_name_and_concept() {
        let mut wizard = WizardState::new();
        assert_eq!(
            wizard.advance(),
            Err(WizardError::StepIncomplete(WizardStep::Concept))
        );

        wizard.name = "Ruff".to_string();
        assert!(!wizard.is_step_valid(WizardStep::Concept));

        wizard.concept = "Pastor de cabras".to_string();
        assert_eq!(wizard.advance(), Ok(WizardStep::Attributes));
    }

    #[test]
    fn test_attributes_step_is_informational() {
        let mut wizard = WizardState::new();
        wizard.adjust_attribute(Attribute::Forca, 5);
        wizard.adjust_attribute(Attribute::Carisma, -3);

        // Any allocation is legal; only the cost display changes.
        assert!(wizard.is_step_valid(WizardStep::Attributes));
        assert_eq!(wizard.points_spent(), 11 - 3);
    }

    #[test]
    fn test_humano_requires_three_distinct_picks() {
        let mut wizard = WizardState::new();
        wizard.select_race(RaceKind::Humano);
        assert!(!wizard.is_step_valid(WizardStep::Race));

        assert!(wizard.toggle_human_bonus(Attribute::Forca));
        assert!(wizard.toggle_human_bonus(Attribute::Inteligencia));
        assert!(!wizard.is_step_valid(WizardStep::Race));

        assert!(wizard.toggle_human_bonus(Attribute::Carisma));
        assert!(wizard.is_step_valid(WizardStep::Race));

        // A fourth distinct pick is ignored.
        assert!(!wizard.toggle_human_bonus(Attribute::Sabedoria));
        assert_eq!(wizard.human_bonus.len(), 3);

        let resolved = wizard.final_attributes();
        assert_eq!(resolved, AttributeSet::new(1, 0, 0, 1, 0, 1));
    }

    #[test]
    fn test_meio_elfo_requires_one_pick_and_refuses_carisma() {
        let mut wizard = WizardState::new();
        wizard.select_race(RaceKind::MeioElfo);
        assert!(!wizard.is_step_valid(WizardStep::Race));

        assert!(!wizard.set_half_elf_bonus(Attribute::Carisma));
        assert!(!wizard.is_step_valid(WizardStep::Race));

        assert!(wizard.set_half_elf_bonus(Attribute::Destreza));
        assert!(wizard.is_step_valid(WizardStep::Race));

        let resolved = wizard.final_attributes();
        assert_eq!(resolved.carisma, 2);
        assert_eq!(resolved.destreza, 1);
    }

    #[test]
    fn test_resolve_attributes_for_anao() {
        let resolved = resolve_attributes(
            &AttributeSet::default(),
            RaceKind::Anao,
            &BTreeSet::new(),
            None,
        );
        assert_eq!(resolved, AttributeSet::new(0, 0, 2, 1, 0, -1));
    }

    #[test]
    fn test_fixed_skills_cannot_be_toggled() {
        let mut wizard = staged_wizard();

        assert!(!wizard.toggle_skill(Skill::Religiao));
        assert!(wizard.extra_skills.is_empty());

        assert!(wizard.toggle_skill(Skill::Cura));
        assert!(wizard.extra_skills.contains(&Skill::Cura));
    }

    #[test]
    fn test_skill_cap_blocks_advance_but_not_selection() {
        let mut wizard = staged_wizard();
        advance_to(&mut wizard, WizardStep::Skills);

        // Clérigo grants 2 picks; final INT is 1 + 1 (Anão); not Humano.
        assert_eq!(wizard.max_extra_skills(), 4);

        for skill in [Skill::Cura, Skill::Conhecimento, Skill::Intuicao, Skill::Diplomacia] {
            assert!(wizard.toggle_skill(skill));
        }
        assert!(wizard.is_step_valid(WizardStep::Skills));

        // The fifth pick is kept, but forward navigation is rejected.
        assert!(wizard.toggle_skill(Skill::Percepcao));
        assert_eq!(wizard.extra_skills.len(), 5);
        assert_eq!(
            wizard.advance(),
            Err(WizardError::StepIncomplete(WizardStep::Skills))
        );

        assert!(wizard.toggle_skill(Skill::Percepcao));
        assert_eq!(wizard.advance(), Ok(WizardStep::Review));
    }

    #[test]
    fn test_skill_cap_for_two_pick_class_with_int_one() {
        let mut wizard = WizardState::new();
        wizard.name = "Vik".to_string();
        wizard.concept = "Um mago hobgoblin de guarnição".to_string();
        wizard.base_attributes.set(Attribute::Inteligencia, 1);
        wizard.select_race(RaceKind::Hobgoblin);
        wizard.select_class(ClassKind::Mago);
        assert!(wizard.select_origin("Estudioso"));

        // Mago grants 2 picks, final INT 1, no Humano bonus.
        assert_eq!(wizard.max_extra_skills(), 3);

        for skill in [Skill::Guerra, Skill::Nobreza, Skill::Percepcao, Skill::Iniciativa] {
            assert!(wizard.toggle_skill(skill));
        }
        assert!(!wizard.is_step_valid(WizardStep::Skills));
        assert_eq!(wizard.extra_skills.len(), 4);
    }

    #[test]
    fn test_selecting_a_class_clears_extra_skills() {
        let mut wizard = staged_wizard();
        assert!(wizard.toggle_skill(Skill::Cura));

        wizard.select_class(ClassKind::Mago);
        assert!(wizard.extra_skills.is_empty());
    }

    #[test]
    fn test_retreat_is_always_allowed() {
        let mut wizard = staged_wizard();
        advance_to(&mut wizard, WizardStep::Origin);

        assert_eq!(wizard.retreat(), WizardStep::Class);
        assert_eq!(wizard.retreat(), WizardStep::Race);
        assert_eq!(wizard.retreat(), WizardStep::Attributes);
        assert_eq!(wizard.retreat(), WizardStep::Concept);
        // No-op at the first step.
        assert_eq!(wizard.retreat(), WizardStep::Concept);
    }

    #[test]
    fn test_finalize_requires_review_step() {
        let wizard = staged_wizard();
        assert_eq!(wizard.finalize(), Err(WizardError::NotAtReview));
    }

    #[test]
    fn test_finalize_builds_the_character() {
        let mut wizard = staged_wizard();
        wizard.notes = "Criada nas montanhas de Doherimm.".to_string();
        advance_to(&mut wizard, WizardStep::Skills);
        assert!(wizard.toggle_skill(Skill::Cura));
        advance_to(&mut wizard, WizardStep::Review);

        let character = wizard.finalize().expect("wizard should finalize");

        assert_eq!(character.level, 1);
        assert_eq!(character.race, RaceKind::Anao);
        assert_eq!(character.class, ClassKind::Clerigo);
        assert_eq!(character.origin, "Acólito");

        // Base CON 1 + Anão CON 2 = 3; Clérigo 16 HP base, 5 MP.
        assert_eq!(character.attributes.constituicao, 3);
        assert_eq!(character.max_hp, 19);
        assert_eq!(character.current_hp, 19);
        assert_eq!(character.max_mp, 5);
        assert_eq!(character.current_mp, 5);

        // Class fixed + origin fixed + chosen extras, deduplicated.
        let expected: BTreeSet<Skill> =
            [Skill::Religiao, Skill::Vontade, Skill::Cura].into_iter().collect();
        assert_eq!(character.trained_skills, expected);

        assert_eq!(
            character.equipment,
            vec!["Essência de mana".to_string(), "Símbolo sagrado".to_string()]
        );
        assert_eq!(character.notes, "Criada nas montanhas de Doherimm.");
    }

    #[test]
    fn test_advance_past_review_is_rejected() {
        let mut wizard = staged_wizard();
        advance_to(&mut wizard, WizardStep::Review);
        assert_eq!(wizard.advance(), Err(WizardError::AtLastStep));
    }
}
