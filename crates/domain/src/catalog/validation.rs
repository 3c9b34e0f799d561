//! Offline catalog checks.
//!
//! Runtime code tolerates bad data (table fallback, unknown ids). These
//! checks run in tests and in `cargo xtask validate-data` so that bad data
//! is caught before it ships.

use std::collections::HashSet;

use super::{CareerEntry, Catalog, RaceEntry};
use crate::value_objects::{TableError, D10_RANGE};

/// Career paths the catalog is allowed to use.
pub const VALID_CAREER_PATHS: [&str; 7] = [
    "warrior", "rogue", "ranger", "academic", "religious", "commoner", "social",
];

const MAX_BASIC_TALENTS: usize = 6;
const MAX_BASIC_SKILLS: usize = 8;

/// Table defects for one race, labelled with the table they came from.
pub fn validate_race(race: &RaceEntry) -> Vec<(&'static str, TableError)> {
    let (min, max) = D10_RANGE;
    let mut errors = Vec::new();
    if let Err(err) = race.wounds_table.validate(min, max) {
        errors.push(("wounds", err));
    }
    if let Err(err) = race.fate_table.validate(min, max) {
        errors.push(("fate", err));
    }
    errors
}

/// Balance and consistency warnings for one career.
pub fn validate_career_balance(career: &CareerEntry) -> Vec<String> {
    let mut warnings = Vec::new();

    if career.is_basic() && career.talent_advances.len() > MAX_BASIC_TALENTS {
        warnings.push(format!(
            "{}: Has {} talents (Basic careers usually have 4-6)",
            career.name,
            career.talent_advances.len()
        ));
    }

    if career.is_basic() && career.skill_advances.len() > MAX_BASIC_SKILLS {
        warnings.push(format!(
            "{}: Has {} skills (Basic careers usually have 6-8)",
            career.name,
            career.skill_advances.len()
        ));
    }

    let has_floor = career.magic_floor.is_some_and(|floor| floor > 0);
    if career.is_magical_career && !has_floor {
        warnings.push(format!(
            "{}: Marked as magical but has no magicFloor",
            career.name
        ));
    }
    if !career.is_magical_career && has_floor {
        warnings.push(format!(
            "{}: Has magicFloor but not marked as magical",
            career.name
        ));
    }

    warnings
}

/// Warnings for careers whose path is not one of [`VALID_CAREER_PATHS`].
pub fn check_career_path_consistency(careers: &[CareerEntry]) -> Vec<String> {
    careers
        .iter()
        .filter_map(|career| {
            let path = career.career_path.as_deref()?;
            (!VALID_CAREER_PATHS.contains(&path))
                .then(|| format!("{}: Invalid career path '{}'", career.name, path))
        })
        .collect()
}

/// Result of validating a whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    /// Defects that make the data unusable (broken tables, duplicate ids).
    pub errors: Vec<String>,
    /// Authoring smells worth a look.
    pub warnings: Vec<String>,
}

impl CatalogReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub fn validate_catalog(catalog: &Catalog) -> CatalogReport {
    let mut report = CatalogReport::default();

    let mut race_ids = HashSet::new();
    for race in catalog.races() {
        if !race_ids.insert(race.id.as_str()) {
            report.errors.push(format!("Duplicate race id '{}'", race.id));
        }
        for (table, err) in validate_race(race) {
            report
                .errors
                .push(format!("{}: {} table: {}", race.name, table, err));
        }
    }

    let mut career_ids = HashSet::new();
    for career in catalog.careers() {
        if !career_ids.insert(career.id.as_str()) {
            report
                .errors
                .push(format!("Duplicate career id '{}'", career.id));
        }
        report.warnings.extend(validate_career_balance(career));
    }
    report
        .warnings
        .extend(check_career_path_consistency(catalog.careers()));

    report
}
