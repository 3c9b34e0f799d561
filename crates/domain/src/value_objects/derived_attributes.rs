//! Secondary characteristics carried on a draft.

use serde::{Deserialize, Serialize};

/// Wounds/fate value meaning "not rolled against the race table yet".
pub const UNROLLED: u32 = 0;

/// Secondary characteristics. Never edited directly by the user; see
/// [`crate::derivation`] for how each field is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedAttributes {
    pub wounds: u32,
    #[serde(rename = "move")]
    pub movement: u32,
    pub fate: u32,
    pub strength_bonus: u32,
    pub toughness_bonus: u32,
    pub attacks: u32,
    pub magic: u32,
    pub insanity_points: u32,
}

impl DerivedAttributes {
    /// Values on a brand new draft: nothing rolled, a single attack.
    pub const fn unrolled() -> Self {
        Self {
            wounds: UNROLLED,
            movement: 0,
            fate: UNROLLED,
            strength_bonus: 0,
            toughness_bonus: 0,
            attacks: 1,
            magic: 0,
            insanity_points: 0,
        }
    }

    pub fn wounds_rolled(&self) -> bool {
        self.wounds != UNROLLED
    }

    pub fn fate_rolled(&self) -> bool {
        self.fate != UNROLLED
    }
}

impl Default for DerivedAttributes {
    fn default() -> Self {
        Self::unrolled()
    }
}
