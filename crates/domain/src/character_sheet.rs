//! Plain-text dump of a draft for logs and the command line.
//!
//! Each characteristic is shown against the race baseline it was rolled
//! from, e.g. `WS  42 (30 + 12)`.

use std::fmt;

use crate::aggregates::CharacterDraft;
use crate::catalog::{CareerEntry, RaceEntry};
use crate::value_objects::{Characteristic, Characteristics, NamedAbility, TableRoll};

/// Borrowed view that renders a draft with its race and career.
#[derive(Debug, Clone, Copy)]
pub struct CharacteristicSheet<'a> {
    draft: &'a CharacterDraft,
    race: Option<&'a RaceEntry>,
    career: Option<&'a CareerEntry>,
}

impl<'a> CharacteristicSheet<'a> {
    pub fn new(draft: &'a CharacterDraft) -> Self {
        Self {
            draft,
            race: None,
            career: None,
        }
    }

    pub fn with_race(mut self, race: Option<&'a RaceEntry>) -> Self {
        self.race = race;
        self
    }

    pub fn with_career(mut self, career: Option<&'a CareerEntry>) -> Self {
        self.career = career;
        self
    }

    fn baseline(&self) -> Characteristics {
        self.race
            .map(|r| r.starting_characteristics)
            .unwrap_or_else(Characteristics::baseline)
    }

    fn heading(&self) -> String {
        let race = self
            .race
            .map(|r| r.name.as_str())
            .or_else(|| self.draft.race_id.as_ref().map(|id| id.as_str()))
            .unwrap_or("no race");
        let career = self
            .career
            .map(|c| c.name.as_str())
            .or_else(|| self.draft.career_id.as_ref().map(|id| id.as_str()))
            .unwrap_or("no career");
        format!("{} ({}, {})", self.draft.display_name(), race, career)
    }
}

/// `value (base + delta)`, or `base - delta` when edited below the baseline.
fn breakdown(value: u32, base: u32) -> String {
    if value >= base {
        format!("{:>3} ({} + {})", value, base, value - base)
    } else {
        format!("{:>3} ({} - {})", value, base, base - value)
    }
}

fn rolled(value: u32, roll: Option<TableRoll>) -> String {
    match roll {
        Some(r) => format!("{} (d10: {})", value, r.roll),
        None => format!("{} (unrolled)", value),
    }
}

fn list(abilities: &[NamedAbility]) -> String {
    if abilities.is_empty() {
        return "none".to_string();
    }
    abilities
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for CharacteristicSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draft = self.draft;
        let base = self.baseline();

        writeln!(f, "{}", self.heading())?;
        for characteristic in Characteristic::ALL {
            writeln!(
                f,
                "  {:<3} {}",
                characteristic.abbreviation(),
                breakdown(draft.stats.get(characteristic), base.get(characteristic))
            )?;
        }

        let d = &draft.derived;
        writeln!(
            f,
            "  Wounds {}  Fate {}",
            rolled(d.wounds, draft.rolled_wounds),
            rolled(d.fate, draft.rolled_fate)
        )?;
        writeln!(
            f,
            "  A {}  SB {}  TB {}  M {}  Mag {}  IP {}",
            d.attacks, d.strength_bonus, d.toughness_bonus, d.movement, d.magic, d.insanity_points
        )?;
        writeln!(f, "  Skills: {}", list(&draft.skills))?;
        write!(f, "  Talents: {}", list(&draft.talents))
    }
}
