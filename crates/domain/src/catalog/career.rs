//! Career entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ids::CareerId;
use crate::value_objects::{Characteristic, NamedAbility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerType {
    Basic,
    Advanced,
}

impl fmt::Display for CareerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareerType::Basic => f.write_str("basic"),
            CareerType::Advanced => f.write_str("advanced"),
        }
    }
}

/// A career a new character can start in (basic) or progress into (advanced).
///
/// # Invariants
///
/// - `is_magical_career` is true exactly when `magic_floor` is set. Not
///   enforced on load; see [`crate::catalog::validate_career_balance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerEntry {
    pub id: CareerId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub career_type: CareerType,
    pub tier: u8,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub characteristic_advances: BTreeMap<Characteristic, u32>,
    /// Minimum Magic this career guarantees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic_floor: Option<u32>,
    #[serde(default)]
    pub skill_advances: Vec<NamedAbility>,
    #[serde(default)]
    pub talent_advances: Vec<NamedAbility>,
    #[serde(default)]
    pub trappings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_path: Option<String>,
    #[serde(default)]
    pub career_exits: Vec<CareerId>,
    pub is_magical_career: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_rules: Vec<String>,
}

impl CareerEntry {
    pub fn is_basic(&self) -> bool {
        self.career_type == CareerType::Basic
    }

    /// Advance for one characteristic, 0 when the career offers none.
    pub fn advance_for(&self, characteristic: Characteristic) -> u32 {
        self.characteristic_advances
            .get(&characteristic)
            .copied()
            .unwrap_or(0)
    }
}
