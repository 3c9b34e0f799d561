//! Race entries: movement, characteristic baselines, wounds/fate tables,
//! and the skills and talents every member of the race starts with.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::RaceId;
use crate::value_objects::{two_d10, Characteristics, NamedAbility, RollTable, TableRoll};

/// Pick exactly `pick` of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceGroup {
    pub pick: usize,
    pub options: Vec<NamedAbility>,
}

impl ChoiceGroup {
    pub fn contains(&self, ability: &NamedAbility) -> bool {
        self.options.contains(ability)
    }
}

/// Draw `count` of `options` at random, without replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomPool {
    pub count: usize,
    pub options: Vec<NamedAbility>,
}

impl RandomPool {
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<NamedAbility> {
        self.options
            .choose_multiple(rng, self.count)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacialSkills {
    #[serde(default)]
    pub required: Vec<NamedAbility>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ChoiceGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RacialTalents {
    #[serde(default)]
    pub required: Vec<NamedAbility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random: Option<RandomPool>,
}

/// A playable race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceEntry {
    pub id: RaceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "move")]
    pub movement: u32,
    pub starting_characteristics: Characteristics,
    pub wounds_table: RollTable,
    pub fate_table: RollTable,
    #[serde(default)]
    pub skills: RacialSkills,
    #[serde(default)]
    pub talents: RacialTalents,
}

impl RaceEntry {
    /// Racial baseline plus 2d10 for every characteristic.
    pub fn roll_characteristics<R: Rng + ?Sized>(&self, rng: &mut R) -> Characteristics {
        Characteristics::from_fn(|c| self.starting_characteristics.get(c) + two_d10(&mut *rng))
    }

    pub fn roll_wounds<R: Rng + ?Sized>(&self, rng: &mut R) -> TableRoll {
        self.wounds_table.roll(rng)
    }

    pub fn roll_fate<R: Rng + ?Sized>(&self, rng: &mut R) -> TableRoll {
        self.fate_table.roll(rng)
    }

    /// Required skills followed by `picks`, after checking that `picks`
    /// fills every choice group exactly and contains nothing else.
    ///
    /// Each pick is counted once, against the first group that contains it
    /// and still has room.
    pub fn resolve_skills(&self, picks: &[NamedAbility]) -> Result<Vec<NamedAbility>, DomainError> {
        let mut filled = vec![0usize; self.skills.choices.len()];
        for (i, pick) in picks.iter().enumerate() {
            if picks[..i].contains(pick) {
                return Err(DomainError::validation(format!(
                    "{} was picked more than once",
                    pick
                )));
            }
            if self.skills.required.contains(pick) {
                return Err(DomainError::validation(format!(
                    "{} is already a required skill for {}",
                    pick, self.name
                )));
            }
            let slot = self
                .skills
                .choices
                .iter()
                .zip(&filled)
                .position(|(group, &n)| group.contains(pick) && n < group.pick);
            match slot {
                Some(g) => filled[g] += 1,
                None if self.skills.choices.iter().any(|group| group.contains(pick)) => {
                    return Err(DomainError::validation(format!(
                        "{} exceeds the skill choices for {}",
                        pick, self.name
                    )));
                }
                None => {
                    return Err(DomainError::validation(format!(
                        "{} is not a skill choice for {}",
                        pick, self.name
                    )));
                }
            }
        }

        for (group, chosen) in self.skills.choices.iter().zip(filled) {
            if chosen != group.pick {
                return Err(DomainError::validation(format!(
                    "{} requires {} of [{}], got {}",
                    self.name,
                    group.pick,
                    group
                        .options
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", "),
                    chosen
                )));
            }
        }

        let mut skills = self.skills.required.clone();
        skills.extend_from_slice(picks);
        Ok(skills)
    }

    /// The first `pick` options of each choice group.
    pub fn default_skill_picks(&self) -> Vec<NamedAbility> {
        self.skills
            .choices
            .iter()
            .flat_map(|group| group.options.iter().take(group.pick).cloned())
            .collect()
    }

    /// Required talents plus the random draws, if the race has a pool.
    pub fn roll_talents<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<NamedAbility> {
        let mut talents = self.talents.required.clone();
        if let Some(pool) = &self.talents.random {
            talents.extend(pool.draw(rng));
        }
        talents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn race(id: &str) -> RaceEntry {
        Catalog::builtin().unwrap().race(id).unwrap().clone()
    }

    #[test]
    fn rolled_characteristics_stay_within_baseline_plus_two_d10() {
        let dwarf = race("dwarf");
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let rolled = dwarf.roll_characteristics(&mut rng);
            for (c, value) in rolled.iter() {
                let base = dwarf.starting_characteristics.get(c);
                assert!(value >= base + 2 && value <= base + 20, "{c}: {value}");
            }
        }
    }

    #[test]
    fn table_rolls_resolve_against_race_tables() {
        let human = race("human");
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let wounds = human.roll_wounds(&mut rng);
            assert_eq!(wounds.value, human.wounds_table.resolve(wounds.roll));
            let fate = human.roll_fate(&mut rng);
            assert_eq!(fate.value, human.fate_table.resolve(fate.roll));
        }
    }

    #[test]
    fn resolve_skills_appends_valid_picks() {
        let human = race("human");
        let picks = vec![NamedAbility::new("Swim"), NamedAbility::new("Ride")];
        let skills = human.resolve_skills(&picks).unwrap();
        assert_eq!(skills.len(), human.skills.required.len() + 2);
        assert_eq!(&skills[skills.len() - 2..], picks.as_slice());
    }

    #[test]
    fn resolve_skills_rejects_wrong_pick_count() {
        let human = race("human");
        let err = human
            .resolve_skills(&[NamedAbility::new("Swim")])
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn resolve_skills_rejects_foreign_picks() {
        let dwarf = race("dwarf");
        let err = dwarf
            .resolve_skills(&[NamedAbility::new("Swim")])
            .unwrap_err();
        assert!(err.to_string().contains("Swim"));
    }

    #[test]
    fn resolve_skills_rejects_repeated_pick() {
        let human = race("human");
        let swim = NamedAbility::new("Swim");
        let err = human.resolve_skills(&[swim.clone(), swim]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn resolve_skills_rejects_too_many_picks_for_a_group() {
        let voryn = race("voryn");
        let err = voryn
            .resolve_skills(&[NamedAbility::new("Swim"), NamedAbility::new("Silent Move")])
            .unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn pick_shared_by_two_groups_fills_only_one() {
        let mut race = race("voryn");
        race.skills.choices = vec![
            ChoiceGroup {
                pick: 1,
                options: vec![NamedAbility::new("Swim"), NamedAbility::new("Row")],
            },
            ChoiceGroup {
                pick: 1,
                options: vec![NamedAbility::new("Swim"), NamedAbility::new("Ride")],
            },
        ];
        assert!(race.resolve_skills(&[NamedAbility::new("Swim")]).is_err());

        let picks = [NamedAbility::new("Swim"), NamedAbility::new("Ride")];
        let skills = race.resolve_skills(&picks).unwrap();
        assert_eq!(skills.len(), race.skills.required.len() + 2);
    }

    #[test]
    fn resolve_skills_rejects_required_skill_as_pick() {
        let mut human = race("human");
        let required = human.skills.required[0].clone();
        human.skills.choices[0].options.push(required.clone());
        let err = human
            .resolve_skills(&[required, NamedAbility::new("Swim")])
            .unwrap_err();
        assert!(err.to_string().contains("already a required skill"));
    }

    #[test]
    fn races_without_choices_take_only_required() {
        let elf = race("elf");
        assert_eq!(elf.resolve_skills(&[]).unwrap(), elf.skills.required);
        assert!(elf.default_skill_picks().is_empty());
    }

    #[test]
    fn default_picks_satisfy_choice_groups() {
        for race in Catalog::builtin().unwrap().races() {
            let picks = race.default_skill_picks();
            assert!(race.resolve_skills(&picks).is_ok(), "{}", race.id);
        }
    }

    #[test]
    fn random_talents_are_drawn_without_replacement() {
        let human = race("human");
        let pool = human.talents.random.clone().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let drawn = pool.draw(&mut rng);
            assert_eq!(drawn.len(), pool.count);
            let unique: HashSet<_> = drawn.iter().collect();
            assert_eq!(unique.len(), drawn.len());
            assert!(drawn.iter().all(|t| pool.options.contains(t)));
        }
    }

    #[test]
    fn roll_talents_keeps_required_first() {
        let voryn = race("voryn");
        let mut rng = StdRng::seed_from_u64(4);
        let talents = voryn.roll_talents(&mut rng);
        assert_eq!(&talents[..2], voryn.talents.required.as_slice());
        assert_eq!(talents.len(), voryn.talents.required.len() + 1);
    }
}
