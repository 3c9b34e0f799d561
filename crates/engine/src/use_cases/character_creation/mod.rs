//! Character creation use cases.
//!
//! Drives the draft through the creation steps (race, career, rolls,
//! skills, talents) and hands finished characters to the store. Catalog
//! ids are checked here; the reducer underneath accepts anything.

mod error;

pub use error::CharacterCreationError;

use std::sync::Arc;

use charforge_domain::{
    CareerEntry, Catalog, CharacterDraft, CharacterId, CharacteristicSheet, Characteristic,
    Characteristics, DraftAction, DraftState, Experience, NamedAbility, RaceEntry, RaceId,
    StatEditPolicy, TableRoll,
};
use rand::rngs::StdRng;

use crate::infrastructure::ports::{CharacterStore, ClockPort};
use crate::stores::DraftStore;

pub struct CharacterCreation {
    drafts: DraftStore,
    catalog: Arc<Catalog>,
    characters: Arc<dyn CharacterStore>,
    rng: StdRng,
}

impl CharacterCreation {
    pub fn new(
        catalog: Arc<Catalog>,
        characters: Arc<dyn CharacterStore>,
        clock: Arc<dyn ClockPort>,
        policy: StatEditPolicy,
        rng: StdRng,
    ) -> Self {
        Self {
            drafts: DraftStore::new(catalog.clone(), policy, clock),
            catalog,
            characters,
            rng,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &DraftState {
        self.drafts.state()
    }

    pub fn draft(&self) -> &CharacterDraft {
        self.drafts.draft()
    }

    pub fn has_rolled(&self) -> bool {
        self.drafts.has_rolled()
    }

    /// The selected race, if it resolves in the catalog.
    pub fn race(&self) -> Option<&RaceEntry> {
        self.draft()
            .race_id
            .as_ref()
            .and_then(|id| self.catalog.race(id.as_str()))
    }

    pub fn career(&self) -> Option<&CareerEntry> {
        self.draft()
            .career_id
            .as_ref()
            .and_then(|id| self.catalog.career(id.as_str()))
    }

    /// Characteristic dump of the current draft.
    pub fn sheet(&self) -> CharacteristicSheet<'_> {
        CharacteristicSheet::new(self.draft())
            .with_race(self.race())
            .with_career(self.career())
    }

    /// Current draft as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, CharacterCreationError> {
        serde_json::to_string_pretty(self.draft())
            .map_err(|e| CharacterCreationError::Serialization(e.to_string()))
    }

    // =========================================================================
    // Creation steps
    // =========================================================================

    pub fn select_race(&mut self, race_id: &str) -> Result<&CharacterDraft, CharacterCreationError> {
        let race = self
            .catalog
            .race(race_id)
            .ok_or_else(|| CharacterCreationError::UnknownRace(race_id.to_string()))?;
        let race_id = race.id.clone();
        tracing::info!(
            character_id = %self.draft().id,
            race_id = %race_id,
            "Race selected"
        );
        Ok(self
            .drafts
            .dispatch(DraftAction::SetRace { race_id })
            .draft())
    }

    pub fn select_career(
        &mut self,
        career_id: &str,
    ) -> Result<&CharacterDraft, CharacterCreationError> {
        let career = self
            .catalog
            .career(career_id)
            .ok_or_else(|| CharacterCreationError::UnknownCareer(career_id.to_string()))?;
        let action = DraftAction::set_career(career);
        tracing::info!(
            character_id = %self.draft().id,
            career_id = %career.id,
            magic_floor = career.magic_floor.unwrap_or(0),
            "Career selected"
        );
        Ok(self.drafts.dispatch(action).draft())
    }

    /// Bulk roll of all eight characteristics: race baseline + 2d10 each.
    ///
    /// Wounds and fate stay as they are until
    /// [`roll_wounds_and_fate`](Self::roll_wounds_and_fate).
    pub fn roll_characteristics(&mut self) -> Result<Characteristics, CharacterCreationError> {
        let catalog = Arc::clone(&self.catalog);
        let race = selected_race(&catalog, self.draft())?;
        let stats = race.roll_characteristics(&mut self.rng);
        self.drafts.dispatch(DraftAction::SetStats { stats });
        tracing::info!(
            character_id = %self.draft().id,
            weapon_skill = stats.weapon_skill,
            toughness = stats.toughness,
            "Characteristics rolled"
        );
        Ok(stats)
    }

    /// d10 against the race's wounds and fate tables.
    pub fn roll_wounds_and_fate(&mut self) -> Result<(TableRoll, TableRoll), CharacterCreationError> {
        let catalog = Arc::clone(&self.catalog);
        let race = selected_race(&catalog, self.draft())?;
        let wounds = race.roll_wounds(&mut self.rng);
        let fate = race.roll_fate(&mut self.rng);
        self.drafts
            .dispatch(DraftAction::ApplyRolledDerived { wounds, fate });
        tracing::info!(
            character_id = %self.draft().id,
            wounds_roll = wounds.roll,
            wounds = wounds.value,
            fate_roll = fate.roll,
            fate = fate.value,
            "Wounds and fate rolled"
        );
        Ok((wounds, fate))
    }

    /// Manual edit of one characteristic.
    pub fn set_stat(&mut self, characteristic: Characteristic, value: u32) -> &CharacterDraft {
        self.drafts.dispatch(DraftAction::SetStat {
            characteristic,
            value,
        });
        self.draft()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &CharacterDraft {
        self.drafts.dispatch(DraftAction::SetName { name: name.into() });
        self.draft()
    }

    /// Required racial skills plus `picks` from the race's choice groups.
    pub fn choose_skills(
        &mut self,
        picks: &[NamedAbility],
    ) -> Result<&CharacterDraft, CharacterCreationError> {
        let skills = selected_race(&self.catalog, self.draft())?.resolve_skills(picks)?;
        Ok(self
            .drafts
            .dispatch(DraftAction::SetSkills { skills })
            .draft())
    }

    /// Required racial talents plus the race's random draws.
    pub fn roll_talents(&mut self) -> Result<Vec<NamedAbility>, CharacterCreationError> {
        let catalog = Arc::clone(&self.catalog);
        let race = selected_race(&catalog, self.draft())?;
        let talents = race.roll_talents(&mut self.rng);
        self.drafts.dispatch(DraftAction::SetTalents {
            talents: talents.clone(),
        });
        Ok(talents)
    }

    pub fn set_experience(
        &mut self,
        total: u32,
        spent: u32,
    ) -> Result<&CharacterDraft, CharacterCreationError> {
        let experience = Experience::new(total, spent)?;
        Ok(self
            .drafts
            .dispatch(DraftAction::SetExperience { experience })
            .draft())
    }

    pub fn finalize(&mut self) -> &CharacterDraft {
        self.drafts.dispatch(DraftAction::Finalize).draft()
    }

    /// Finalize and save. Needs a race and a completed roll (characteristics
    /// plus wounds and fate).
    pub fn complete(&mut self) -> Result<CharacterDraft, CharacterCreationError> {
        let draft = self.draft();
        selected_race(&self.catalog, draft)?;
        if !self.has_rolled() || draft.rolled_wounds.is_none() || draft.rolled_fate.is_none() {
            return Err(CharacterCreationError::NotRolled);
        }

        let character = self.finalize().clone();
        self.characters.save(&character)?;
        tracing::info!(
            character_id = %character.id,
            name = %character.display_name(),
            race_id = ?character.race_id.as_ref().map(RaceId::as_str),
            "Character saved"
        );
        Ok(character)
    }

    /// Discard the draft and start a new one.
    pub fn reset(&mut self) -> &CharacterDraft {
        let discarded = self.draft().id;
        self.drafts.dispatch(DraftAction::Reset);
        tracing::info!(
            discarded = %discarded,
            character_id = %self.draft().id,
            "Draft reset"
        );
        self.draft()
    }

    // =========================================================================
    // Saved characters
    // =========================================================================

    /// Load a saved character into the draft for further editing.
    pub fn load(&mut self, id: CharacterId) -> Result<&CharacterDraft, CharacterCreationError> {
        let character = self
            .characters
            .get(id)?
            .ok_or(CharacterCreationError::NotFound(id))?;
        Ok(self.drafts.resume(character).draft())
    }

    pub fn list_saved(&self) -> Result<Vec<CharacterDraft>, CharacterCreationError> {
        Ok(self.characters.list()?)
    }

    pub fn delete_saved(&self, id: CharacterId) -> Result<(), CharacterCreationError> {
        self.characters.delete(id).map_err(|e| {
            if e.is_not_found() {
                CharacterCreationError::NotFound(id)
            } else {
                e.into()
            }
        })?;
        tracing::info!(character_id = %id, "Character deleted");
        Ok(())
    }
}

/// Catalog entry for the draft's race.
fn selected_race<'c>(
    catalog: &'c Catalog,
    draft: &CharacterDraft,
) -> Result<&'c RaceEntry, CharacterCreationError> {
    match &draft.race_id {
        None => Err(CharacterCreationError::RaceNotSelected),
        Some(id) => catalog
            .race(id.as_str())
            .ok_or_else(|| CharacterCreationError::UnknownRace(id.to_string())),
    }
}
