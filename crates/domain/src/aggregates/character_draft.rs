//! CharacterDraft - the record a character is built up in.
//!
//! A plain serializable record. All transitions go through
//! [`crate::aggregates::reduce`]; the fields are public so that stores and
//! presentation code can read them without accessor noise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CareerId, CharacterId, RaceId};
use crate::value_objects::{
    Characteristics, DerivedAttributes, Experience, NamedAbility, TableRoll,
};

/// Name given to a draft until the player picks one.
pub const PLACEHOLDER_NAME: &str = "Unnamed Character";

/// An in-progress character.
///
/// # Invariants
///
/// - All eight characteristics are always present (enforced by [`Characteristics`])
/// - `derived` is only ever produced by [`crate::derivation`]
/// - When `rolled_wounds` is set, `derived.wounds == rolled_wounds.value`
///   (same for fate)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDraft {
    pub id: CharacterId,
    pub name: String,
    pub race_id: Option<RaceId>,
    pub career_id: Option<CareerId>,
    pub stats: Characteristics,
    pub derived: DerivedAttributes,
    /// Raw d10 and table outcome behind `derived.wounds`.
    #[serde(default)]
    pub rolled_wounds: Option<TableRoll>,
    /// Raw d10 and table outcome behind `derived.fate`.
    #[serde(default)]
    pub rolled_fate: Option<TableRoll>,
    #[serde(default)]
    pub skills: Vec<NamedAbility>,
    #[serde(default)]
    pub talents: Vec<NamedAbility>,
    #[serde(flatten)]
    pub experience: Experience,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CharacterDraft {
    /// Fresh draft: baseline stats, nothing chosen, nothing rolled.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: CharacterId::new(),
            name: PLACEHOLDER_NAME.to_string(),
            race_id: None,
            career_id: None,
            stats: Characteristics::baseline(),
            derived: DerivedAttributes::unrolled(),
            rolled_wounds: None,
            rolled_fate: None,
            skills: Vec::new(),
            talents: Vec::new(),
            experience: Experience::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            PLACEHOLDER_NAME
        } else {
            &self.name
        }
    }
}
