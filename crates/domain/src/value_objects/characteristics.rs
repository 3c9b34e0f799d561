//! The eight primary characteristics and the block that holds them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Starting value of every characteristic on a fresh draft.
pub const BASELINE_CHARACTERISTIC: u32 = 20;

/// One of the eight rolled characteristics, in character-sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Characteristic {
    WeaponSkill,
    BallisticSkill,
    Strength,
    Toughness,
    Agility,
    Intelligence,
    WillPower,
    Fellowship,
}

impl Characteristic {
    /// All characteristics in sheet order.
    pub const ALL: [Characteristic; 8] = [
        Characteristic::WeaponSkill,
        Characteristic::BallisticSkill,
        Characteristic::Strength,
        Characteristic::Toughness,
        Characteristic::Agility,
        Characteristic::Intelligence,
        Characteristic::WillPower,
        Characteristic::Fellowship,
    ];

    /// Key used in serialized records (`"weaponSkill"`).
    pub fn key(&self) -> &'static str {
        match self {
            Characteristic::WeaponSkill => "weaponSkill",
            Characteristic::BallisticSkill => "ballisticSkill",
            Characteristic::Strength => "strength",
            Characteristic::Toughness => "toughness",
            Characteristic::Agility => "agility",
            Characteristic::Intelligence => "intelligence",
            Characteristic::WillPower => "willPower",
            Characteristic::Fellowship => "fellowship",
        }
    }

    /// Short label used on the character sheet (`"WS"`).
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Characteristic::WeaponSkill => "WS",
            Characteristic::BallisticSkill => "BS",
            Characteristic::Strength => "S",
            Characteristic::Toughness => "T",
            Characteristic::Agility => "Ag",
            Characteristic::Intelligence => "Int",
            Characteristic::WillPower => "WP",
            Characteristic::Fellowship => "Fel",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Characteristic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Characteristic::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.abbreviation().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::parse(format!("Unknown characteristic: {}", s)))
    }
}

/// All eight characteristic scores. Every key is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Characteristics {
    pub weapon_skill: u32,
    pub ballistic_skill: u32,
    pub strength: u32,
    pub toughness: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub will_power: u32,
    pub fellowship: u32,
}

impl Characteristics {
    /// Every characteristic set to the same value.
    pub const fn uniform(value: u32) -> Self {
        Self {
            weapon_skill: value,
            ballistic_skill: value,
            strength: value,
            toughness: value,
            agility: value,
            intelligence: value,
            will_power: value,
            fellowship: value,
        }
    }

    /// The neutral starting block (20 across the board).
    pub const fn baseline() -> Self {
        Self::uniform(BASELINE_CHARACTERISTIC)
    }

    pub fn get(&self, characteristic: Characteristic) -> u32 {
        match characteristic {
            Characteristic::WeaponSkill => self.weapon_skill,
            Characteristic::BallisticSkill => self.ballistic_skill,
            Characteristic::Strength => self.strength,
            Characteristic::Toughness => self.toughness,
            Characteristic::Agility => self.agility,
            Characteristic::Intelligence => self.intelligence,
            Characteristic::WillPower => self.will_power,
            Characteristic::Fellowship => self.fellowship,
        }
    }

    pub fn set(&mut self, characteristic: Characteristic, value: u32) {
        let slot = match characteristic {
            Characteristic::WeaponSkill => &mut self.weapon_skill,
            Characteristic::BallisticSkill => &mut self.ballistic_skill,
            Characteristic::Strength => &mut self.strength,
            Characteristic::Toughness => &mut self.toughness,
            Characteristic::Agility => &mut self.agility,
            Characteristic::Intelligence => &mut self.intelligence,
            Characteristic::WillPower => &mut self.will_power,
            Characteristic::Fellowship => &mut self.fellowship,
        };
        *slot = value;
    }

    /// Copy with one characteristic replaced.
    pub fn with(mut self, characteristic: Characteristic, value: u32) -> Self {
        self.set(characteristic, value);
        self
    }

    /// Build a block by computing each characteristic in sheet order.
    pub fn from_fn(mut f: impl FnMut(Characteristic) -> u32) -> Self {
        let mut block = Self::uniform(0);
        for characteristic in Characteristic::ALL {
            block.set(characteristic, f(characteristic));
        }
        block
    }

    /// `(characteristic, value)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Characteristic, u32)> + '_ {
        Characteristic::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl Default for Characteristics {
    fn default() -> Self {
        Self::baseline()
    }
}
