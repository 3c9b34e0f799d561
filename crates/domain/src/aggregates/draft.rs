//! Draft transitions.
//!
//! [`reduce`] and its in-place form [`DraftState::apply`] are the only
//! ways a [`DraftState`] changes. Both are infallible:
//! ids that do not resolve in the catalog are stored as chosen and the
//! derived values fall back to neutral defaults.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::character_draft::CharacterDraft;
use crate::catalog::{CareerEntry, Catalog};
use crate::derivation::{calculate_derived, refresh_stat_driven};
use crate::error::DomainError;
use crate::ids::{CareerId, RaceId};
use crate::value_objects::{
    Characteristic, Characteristics, DerivedAttributes, Experience, NamedAbility, TableRoll,
    UNROLLED,
};

// =============================================================================
// Configuration
// =============================================================================

/// What a single characteristic edit does to the has-rolled flag.
///
/// Either way the edit never touches wounds or fate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatEditPolicy {
    /// The draft still counts as rolled after a manual tweak.
    #[default]
    #[serde(rename = "preserve")]
    PreserveRoll,
    /// A manual tweak means the player has to roll again.
    #[serde(rename = "invalidate")]
    InvalidateRoll,
}

impl fmt::Display for StatEditPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatEditPolicy::PreserveRoll => f.write_str("preserve"),
            StatEditPolicy::InvalidateRoll => f.write_str("invalidate"),
        }
    }
}

impl FromStr for StatEditPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(StatEditPolicy::PreserveRoll),
            "invalidate" => Ok(StatEditPolicy::InvalidateRoll),
            other => Err(DomainError::parse(format!(
                "Unknown stat edit policy '{}' (expected preserve or invalidate)",
                other
            ))),
        }
    }
}

/// Everything a transition may read besides the state itself.
#[derive(Debug, Clone, Copy)]
pub struct DraftContext<'a> {
    pub catalog: &'a Catalog,
    pub policy: StatEditPolicy,
    pub now: DateTime<Utc>,
}

// =============================================================================
// Actions
// =============================================================================

/// A single transition on a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DraftAction {
    /// Choose a race. Clears wounds and fate back to unrolled.
    SetRace { race_id: RaceId },
    /// Choose a career. Magic is raised to the floor, never lowered.
    SetCareer {
        career_id: CareerId,
        magic_floor: u32,
    },
    /// Manual edit of one characteristic.
    SetStat {
        characteristic: Characteristic,
        value: u32,
    },
    /// All eight characteristics from a bulk roll.
    SetStats { stats: Characteristics },
    /// Wounds and fate from the race tables.
    ApplyRolledDerived { wounds: TableRoll, fate: TableRoll },
    SetName { name: String },
    SetSkills { skills: Vec<NamedAbility> },
    SetTalents { talents: Vec<NamedAbility> },
    SetExperience { experience: Experience },
    /// Consistency pass over the stat-driven fields. Idempotent.
    Finalize,
    /// Throw the draft away and start over with a new identity.
    Reset,
}

impl DraftAction {
    /// `SetCareer` carrying the career's magic floor (0 when it has none).
    pub fn set_career(career: &CareerEntry) -> Self {
        DraftAction::SetCareer {
            career_id: career.id.clone(),
            magic_floor: career.magic_floor.unwrap_or(0),
        }
    }

    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            DraftAction::SetRace { .. } => "set_race",
            DraftAction::SetCareer { .. } => "set_career",
            DraftAction::SetStat { .. } => "set_stat",
            DraftAction::SetStats { .. } => "set_stats",
            DraftAction::ApplyRolledDerived { .. } => "apply_rolled_derived",
            DraftAction::SetName { .. } => "set_name",
            DraftAction::SetSkills { .. } => "set_skills",
            DraftAction::SetTalents { .. } => "set_talents",
            DraftAction::SetExperience { .. } => "set_experience",
            DraftAction::Finalize => "finalize",
            DraftAction::Reset => "reset",
        }
    }
}

// =============================================================================
// State
// =============================================================================

/// A draft plus the bookkeeping that is not part of the saved record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftState {
    draft: CharacterDraft,
    has_rolled: bool,
    magic_floor: u32,
}

impl DraftState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            draft: CharacterDraft::new(now),
            has_rolled: false,
            magic_floor: 0,
        }
    }

    /// Resume editing a saved draft.
    ///
    /// The draft counts as rolled when both table rolls are on record, and
    /// its current magic becomes the tracked floor.
    pub fn from_draft(draft: CharacterDraft) -> Self {
        let has_rolled = draft.rolled_wounds.is_some() && draft.rolled_fate.is_some();
        let magic_floor = draft.derived.magic;
        Self {
            draft,
            has_rolled,
            magic_floor,
        }
    }

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    pub fn into_draft(self) -> CharacterDraft {
        self.draft
    }

    /// Whether stats and derived values come from an actual roll.
    pub fn has_rolled(&self) -> bool {
        self.has_rolled
    }

    /// Highest magic floor of any career chosen on this draft.
    pub fn magic_floor(&self) -> u32 {
        self.magic_floor
    }

    /// Derived values for display: rolls where they exist, formula
    /// placeholders where they don't. Never written back to the draft.
    pub fn preview_derived(&self, catalog: &Catalog) -> DerivedAttributes {
        let race = self
            .draft
            .race_id
            .as_ref()
            .and_then(|id| catalog.race(id.as_str()));
        calculate_derived(
            &self.draft.stats,
            race,
            self.magic_floor,
            self.draft.rolled_fate.map(|r| r.value),
            self.draft.rolled_wounds.map(|r| r.value),
        )
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Apply one action. Every action stamps `updated_at` with `ctx.now`.
pub fn reduce(mut state: DraftState, action: DraftAction, ctx: &DraftContext<'_>) -> DraftState {
    state.apply(action, ctx);
    state
}

impl DraftState {
    /// In-place form of [`reduce`].
    pub fn apply(&mut self, action: DraftAction, ctx: &DraftContext<'_>) {
        let draft = &mut self.draft;
        match action {
            DraftAction::SetRace { race_id } => {
                let race = ctx.catalog.race(race_id.as_str());
                draft.derived = DerivedAttributes {
                    wounds: UNROLLED,
                    fate: UNROLLED,
                    ..refresh_stat_driven(draft.derived, &draft.stats, race)
                };
                draft.race_id = Some(race_id);
                draft.rolled_wounds = None;
                draft.rolled_fate = None;
                self.has_rolled = false;
            }
            DraftAction::SetCareer {
                career_id,
                magic_floor: floor,
            } => {
                self.magic_floor = self.magic_floor.max(floor);
                draft.derived.magic = draft.derived.magic.max(self.magic_floor);
                draft.career_id = Some(career_id);
            }
            DraftAction::SetStat {
                characteristic,
                value,
            } => {
                draft.stats.set(characteristic, value);
                draft.derived = refresh(draft, ctx.catalog);
                if ctx.policy == StatEditPolicy::InvalidateRoll {
                    self.has_rolled = false;
                }
            }
            DraftAction::SetStats { stats } => {
                draft.stats = stats;
                draft.derived = refresh(draft, ctx.catalog);
                self.has_rolled = true;
            }
            DraftAction::ApplyRolledDerived { wounds, fate } => {
                draft.derived.wounds = wounds.value;
                draft.derived.fate = fate.value;
                draft.rolled_wounds = Some(wounds);
                draft.rolled_fate = Some(fate);
                self.has_rolled = true;
            }
            DraftAction::SetName { name } => draft.name = name,
            DraftAction::SetSkills { skills } => draft.skills = skills,
            DraftAction::SetTalents { talents } => draft.talents = talents,
            DraftAction::SetExperience { experience } => draft.experience = experience,
            DraftAction::Finalize => {
                draft.derived = refresh(draft, ctx.catalog);
            }
            DraftAction::Reset => {
                *self = DraftState::new(ctx.now);
                return;
            }
        }
        draft.touch(ctx.now);
    }
}

fn refresh(draft: &CharacterDraft, catalog: &Catalog) -> DerivedAttributes {
    let race = draft
        .race_id
        .as_ref()
        .and_then(|id| catalog.race(id.as_str()));
    refresh_stat_driven(draft.derived, &draft.stats, race)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derivation::DEFAULT_MOVE;
    use crate::value_objects::BASELINE_CHARACTERISTIC;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Harness {
        catalog: Catalog,
        policy: StatEditPolicy,
        now: DateTime<Utc>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                catalog: Catalog::builtin().unwrap(),
                policy: StatEditPolicy::default(),
                now: Utc::now(),
            }
        }

        fn with_policy(policy: StatEditPolicy) -> Self {
            Self {
                policy,
                ..Self::new()
            }
        }

        fn apply(&mut self, state: DraftState, action: DraftAction) -> DraftState {
            self.now += Duration::seconds(1);
            let ctx = DraftContext {
                catalog: &self.catalog,
                policy: self.policy,
                now: self.now,
            };
            reduce(state, action, &ctx)
        }

        fn apply_all(&mut self, mut state: DraftState, actions: Vec<DraftAction>) -> DraftState {
            for action in actions {
                state = self.apply(state, action);
            }
            state
        }
    }

    fn set_race(id: &str) -> DraftAction {
        DraftAction::SetRace {
            race_id: RaceId::from(id),
        }
    }

    fn rolled(wounds: u32, fate: u32) -> DraftAction {
        DraftAction::ApplyRolledDerived {
            wounds: TableRoll::new(7, wounds),
            fate: TableRoll::new(5, fate),
        }
    }

    #[test]
    fn apply_in_place_matches_reduce() {
        let mut h = Harness::new();
        let state = h.apply(DraftState::new(h.now), set_race("elf"));
        let ctx = DraftContext {
            catalog: &h.catalog,
            policy: h.policy,
            now: h.now,
        };
        let mut in_place = state.clone();
        in_place.apply(rolled(11, 2), &ctx);
        assert_eq!(in_place, reduce(state, rolled(11, 2), &ctx));
    }

    #[test]
    fn dwarf_moves_three_whatever_is_rolled() {
        let mut h = Harness::new();
        let dwarf = h.catalog.race("dwarf").unwrap().clone();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let stats = dwarf.roll_characteristics(&mut rng);
            let state = h.apply_all(
                DraftState::new(h.now),
                vec![set_race("dwarf"), DraftAction::SetStats { stats }],
            );
            assert_eq!(state.draft().derived.movement, 3);
        }
    }

    #[test]
    fn roll_then_apply_derived_sets_wounds_and_fate() {
        let mut h = Harness::new();
        let human = h.catalog.race("human").unwrap().clone();
        let stats = human.roll_characteristics(&mut StdRng::seed_from_u64(5));

        let state = h.apply_all(
            DraftState::new(h.now),
            vec![set_race("human"), DraftAction::SetStats { stats }],
        );
        // stats rolled, table roll still pending
        assert!(state.has_rolled());
        assert_eq!(state.draft().derived.wounds, UNROLLED);
        assert!(state.draft().rolled_wounds.is_none());

        let state = h.apply(state, rolled(12, 3));
        assert_eq!(state.draft().derived.wounds, 12);
        assert_eq!(state.draft().derived.fate, 3);
        assert_eq!(state.draft().rolled_wounds.unwrap().value, 12);
        assert_eq!(state.draft().rolled_fate.unwrap().value, 3);
        assert!(state.has_rolled());
    }

    #[test]
    fn set_race_clears_previous_roll() {
        let mut h = Harness::new();
        let state = h.apply_all(
            DraftState::new(h.now),
            vec![
                set_race("human"),
                DraftAction::SetStats {
                    stats: Characteristics::uniform(31),
                },
                rolled(12, 3),
                set_race("elf"),
            ],
        );
        assert!(!state.has_rolled());
        assert_eq!(state.draft().derived.wounds, UNROLLED);
        assert_eq!(state.draft().derived.fate, UNROLLED);
        assert!(state.draft().rolled_wounds.is_none());
        assert!(state.draft().rolled_fate.is_none());
        assert_eq!(state.draft().derived.movement, 5);
        assert_eq!(state.draft().derived.strength_bonus, 3);
    }

    #[test]
    fn magic_never_decreases_across_careers() {
        let mut h = Harness::new();
        let wizard = h.catalog.career("apprentice-wizard").unwrap().clone();
        let soldier = h.catalog.career("soldier").unwrap().clone();

        let state = h.apply_all(
            DraftState::new(h.now),
            vec![
                DraftAction::set_career(&wizard),
                DraftAction::set_career(&soldier),
            ],
        );
        assert!(state.draft().derived.magic >= 1);
        assert_eq!(state.magic_floor(), 1);
        assert_eq!(state.draft().career_id.as_ref().unwrap().as_str(), "soldier");
    }

    #[test]
    fn higher_floor_raises_magic() {
        let mut h = Harness::new();
        let state = h.apply_all(
            DraftState::new(h.now),
            vec![
                DraftAction::SetCareer {
                    career_id: CareerId::from("witch"),
                    magic_floor: 1,
                },
                DraftAction::SetCareer {
                    career_id: CareerId::from("anointed-priest"),
                    magic_floor: 2,
                },
            ],
        );
        assert_eq!(state.draft().derived.magic, 2);
    }

    #[test]
    fn set_career_leaves_has_rolled_alone() {
        let mut h = Harness::new();
        let state = h.apply_all(
            DraftState::new(h.now),
            vec![
                set_race("human"),
                DraftAction::SetStats {
                    stats: Characteristics::uniform(30),
                },
                DraftAction::SetCareer {
                    career_id: CareerId::from("soldier"),
                    magic_floor: 0,
                },
            ],
        );
        assert!(state.has_rolled());
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut h = Harness::new();
        let state = h.apply_all(
            DraftState::new(h.now),
            vec![
                set_race("halfling"),
                DraftAction::SetStats {
                    stats: Characteristics::uniform(34),
                },
                rolled(9, 3),
            ],
        );
        let once = h.apply(state, DraftAction::Finalize);
        let twice = h.apply(once.clone(), DraftAction::Finalize);

        let (a, b) = (once.draft().derived, twice.draft().derived);
        assert_eq!(a.movement, b.movement);
        assert_eq!(a.strength_bonus, b.strength_bonus);
        assert_eq!(a.toughness_bonus, b.toughness_bonus);
        assert_eq!(a.attacks, b.attacks);
        assert!(twice.draft().updated_at > once.draft().updated_at);

        let restamped = CharacterDraft {
            updated_at: once.draft().updated_at,
            ..twice.draft().clone()
        };
        assert_eq!(&restamped, once.draft());
        assert_eq!(twice.has_rolled(), once.has_rolled());
        assert_eq!(twice.magic_floor(), once.magic_floor());
    }

    #[test]
    fn rerolling_characteristics_keeps_table_rolls() {
        let mut h = Harness::new();
        let state = h.apply_all(
            DraftState::new(h.now),
            vec![
                set_race("human"),
                DraftAction::SetStats {
                    stats: Characteristics::uniform(30),
                },
                rolled(12, 3),
            ],
        );
        let provenance = (state.draft().rolled_wounds, state.draft().rolled_fate);

        let rerolled = h.apply(
            state,
            DraftAction::SetStats {
                stats: Characteristics::uniform(30)
                    .with(Characteristic::Strength, 41)
                    .with(Characteristic::Toughness, 27),
            },
        );
        let draft = rerolled.draft();
        assert_eq!(draft.derived.wounds, 12);
        assert_eq!(draft.derived.fate, 3);
        assert_eq!((draft.rolled_wounds, draft.rolled_fate), provenance);
        assert_eq!(draft.derived.strength_bonus, 4);
        assert_eq!(draft.derived.toughness_bonus, 2);
        assert!(rerolled.has_rolled());
    }

    #[test]
    fn single_stat_edit_keeps_wounds_and_fate() {
        let mut h = Harness::new();
        let state = h.apply_all(
            DraftState::new(h.now),
            vec![
                set_race("human"),
                DraftAction::SetStats {
                    stats: Characteristics::baseline(),
                },
                rolled(11, 2),
                DraftAction::SetStat {
                    characteristic: Characteristic::Strength,
                    value: 35,
                },
            ],
        );
        assert_eq!(state.draft().stats.strength, 35);
        assert_eq!(state.draft().derived.strength_bonus, 3);
        assert_eq!(state.draft().derived.wounds, 11);
        assert_eq!(state.draft().derived.fate, 2);
        assert!(state.has_rolled());
    }

    #[test]
    fn invalidate_policy_clears_has_rolled_on_stat_edit() {
        let mut h = Harness::with_policy(StatEditPolicy::InvalidateRoll);
        let state = h.apply_all(
            DraftState::new(h.now),
            vec![
                set_race("human"),
                DraftAction::SetStats {
                    stats: Characteristics::baseline(),
                },
                rolled(11, 2),
                DraftAction::SetStat {
                    characteristic: Characteristic::Toughness,
                    value: 44,
                },
            ],
        );
        assert!(!state.has_rolled());
        assert_eq!(state.draft().derived.toughness_bonus, 4);
        assert_eq!(state.draft().derived.wounds, 11);
    }

    #[test]
    fn reset_gives_new_identity_at_baseline() {
        let mut h = Harness::new();
        let original = h.apply_all(
            DraftState::new(h.now),
            vec![
                set_race("dwarf"),
                DraftAction::SetStats {
                    stats: Characteristics::uniform(40),
                },
                DraftAction::SetCareer {
                    career_id: CareerId::from("witch"),
                    magic_floor: 1,
                },
            ],
        );
        let reset = h.apply(original.clone(), DraftAction::Reset);

        assert_ne!(reset.draft().id, original.draft().id);
        assert!(reset
            .draft()
            .stats
            .iter()
            .all(|(_, v)| v == BASELINE_CHARACTERISTIC));
        assert!(!reset.has_rolled());
        assert_eq!(reset.magic_floor(), 0);
        assert!(reset.draft().race_id.is_none());
    }

    #[test]
    fn unknown_race_falls_back_to_default_move() {
        let mut h = Harness::new();
        let state = h.apply(DraftState::new(h.now), set_race("gnome"));
        assert_eq!(state.draft().race_id.as_ref().unwrap().as_str(), "gnome");
        assert_eq!(state.draft().derived.movement, DEFAULT_MOVE);
    }

    #[test]
    fn every_action_stamps_updated_at() {
        let mut h = Harness::new();
        let actions = vec![
            set_race("elf"),
            DraftAction::SetName {
                name: "Aelith".to_string(),
            },
            DraftAction::SetSkills {
                skills: vec![NamedAbility::new("Perception")],
            },
            DraftAction::SetTalents {
                talents: vec![NamedAbility::new("Night Vision")],
            },
            DraftAction::SetExperience {
                experience: Experience::new(100, 0).unwrap(),
            },
            DraftAction::Finalize,
        ];
        let mut state = DraftState::new(h.now);
        for action in actions {
            let before = state.draft().updated_at;
            state = h.apply(state, action);
            assert!(state.draft().updated_at > before);
            assert_eq!(state.draft().updated_at, h.now);
        }
        assert_eq!(state.draft().name, "Aelith");
        assert_eq!(state.draft().experience.available(), 100);
    }

    #[test]
    fn name_and_lists_do_not_touch_derived() {
        let mut h = Harness::new();
        let state = h.apply(DraftState::new(h.now), set_race("dwarf"));
        let derived = state.draft().derived;
        let state = h.apply(
            state,
            DraftAction::SetName {
                name: "Snorri".to_string(),
            },
        );
        assert_eq!(state.draft().derived, derived);
    }

    #[test]
    fn preview_fills_placeholders_until_rolled() {
        let mut h = Harness::new();
        let state = h.apply(DraftState::new(h.now), set_race("human"));
        let preview = state.preview_derived(&h.catalog);
        assert_eq!(preview.wounds, 2 + 2 + 10);
        assert_eq!(preview.fate, 2);
        assert_eq!(state.draft().derived.wounds, UNROLLED);

        let state = h.apply(state, rolled(13, 4));
        let preview = state.preview_derived(&h.catalog);
        assert_eq!(preview.wounds, 13);
        assert_eq!(preview.fate, 4);
    }

    #[test]
    fn loaded_draft_resumes_rolled_state() {
        let mut h = Harness::new();
        let state = h.apply_all(
            DraftState::new(h.now),
            vec![
                set_race("human"),
                DraftAction::SetStats {
                    stats: Characteristics::uniform(30),
                },
                rolled(12, 3),
                DraftAction::SetCareer {
                    career_id: CareerId::from("witch"),
                    magic_floor: 1,
                },
            ],
        );
        let resumed = DraftState::from_draft(state.draft().clone());
        assert!(resumed.has_rolled());
        assert_eq!(resumed.magic_floor(), 1);
    }

    #[test]
    fn actions_replay_from_json() {
        let mut h = Harness::new();
        let actions = vec![
            set_race("voryn"),
            DraftAction::SetStats {
                stats: Characteristics::uniform(33),
            },
            rolled(12, 3),
            DraftAction::SetStat {
                characteristic: Characteristic::WillPower,
                value: 41,
            },
            DraftAction::Reset,
        ];
        let json = serde_json::to_string(&actions).unwrap();
        assert!(json.contains(r#""type":"applyRolledDerived""#));
        assert!(json.contains(r#""raceId":"voryn""#));
        let replayed: Vec<DraftAction> = serde_json::from_str(&json).unwrap();
        assert_eq!(replayed, actions);

        let state = h.apply_all(DraftState::new(h.now), replayed);
        assert!(!state.has_rolled());
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!(
            "preserve".parse::<StatEditPolicy>().unwrap(),
            StatEditPolicy::PreserveRoll
        );
        assert_eq!(
            " Invalidate ".parse::<StatEditPolicy>().unwrap(),
            StatEditPolicy::InvalidateRoll
        );
        assert!("sometimes".parse::<StatEditPolicy>().is_err());
        assert_eq!(StatEditPolicy::InvalidateRoll.to_string(), "invalidate");
    }
}
