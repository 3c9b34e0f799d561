//! Derived-attribute calculation.
//!
//! Pure functions from characteristics, race, career magic floor, and the
//! wounds/fate table rolls to the full set of secondary characteristics.
//!
//! Policy for wounds and fate: an explicit roll always wins. The formula
//! fallbacks exist only to give the sheet a sane placeholder before the
//! race table has been rolled.

use crate::catalog::RaceEntry;
use crate::value_objects::{Characteristics, DerivedAttributes};

/// Movement when no race is selected (or the race id is unknown).
pub const DEFAULT_MOVE: u32 = 4;
/// Fate before the race's fate table has been rolled.
pub const DEFAULT_FATE: u32 = 2;
/// Every new character starts with a single attack.
pub const STARTING_ATTACKS: u32 = 1;

/// Bonus for a characteristic: its tens digit.
pub fn calculate_bonus(score: u32) -> u32 {
    score / 10
}

/// Race movement, or [`DEFAULT_MOVE`] while no race resolves.
pub fn movement_for(race: Option<&RaceEntry>) -> u32 {
    race.map_or(DEFAULT_MOVE, |r| r.movement)
}

/// Placeholder wounds: `max(1, SB + TB + 10)`.
pub fn fallback_wounds(stats: &Characteristics) -> u32 {
    (calculate_bonus(stats.strength) + calculate_bonus(stats.toughness) + 10).max(1)
}

/// Full derived record.
///
/// `race` is the already-resolved catalog entry; pass `None` for an
/// unset or unknown race id.
pub fn calculate_derived(
    stats: &Characteristics,
    race: Option<&RaceEntry>,
    magic_floor: u32,
    rolled_fate: Option<u32>,
    rolled_wounds: Option<u32>,
) -> DerivedAttributes {
    DerivedAttributes {
        wounds: rolled_wounds.unwrap_or_else(|| fallback_wounds(stats)),
        movement: movement_for(race),
        fate: rolled_fate.unwrap_or(DEFAULT_FATE),
        strength_bonus: calculate_bonus(stats.strength),
        toughness_bonus: calculate_bonus(stats.toughness),
        attacks: STARTING_ATTACKS,
        magic: magic_floor,
        insanity_points: 0,
    }
}

/// Recompute the stat-driven fields (bonuses, move, attacks) and keep
/// everything else from `current`.
pub fn refresh_stat_driven(
    current: DerivedAttributes,
    stats: &Characteristics,
    race: Option<&RaceEntry>,
) -> DerivedAttributes {
    DerivedAttributes {
        movement: movement_for(race),
        strength_bonus: calculate_bonus(stats.strength),
        toughness_bonus: calculate_bonus(stats.toughness),
        attacks: STARTING_ATTACKS,
        ..current
    }
}
