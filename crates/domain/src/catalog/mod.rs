//! Race and career catalogs.
//!
//! Read-only lookup tables keyed by id. Lookups return `Option`: an
//! unknown id means "not chosen yet" to the rest of the domain, never a
//! failure.

mod career;
mod race;
mod validation;

pub use career::{CareerEntry, CareerType};
pub use race::{ChoiceGroup, RaceEntry, RacialSkills, RacialTalents, RandomPool};
pub use validation::{
    check_career_path_consistency, validate_career_balance, validate_catalog, validate_race,
    CatalogReport, VALID_CAREER_PATHS,
};

use thiserror::Error;

/// Built-in race data, in the format [`Catalog::from_json`] reads.
pub const BUILTIN_RACES: &str = include_str!("data/races.json");
/// Built-in career data, in the format [`Catalog::from_json`] reads.
pub const BUILTIN_CAREERS: &str = include_str!("data/careers.json");

/// Catalog data that could not be loaded
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid race data: {0}")]
    Races(#[source] serde_json::Error),
    #[error("Invalid career data: {0}")]
    Careers(#[source] serde_json::Error),
}

/// Every race and career known to character creation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    races: Vec<RaceEntry>,
    careers: Vec<CareerEntry>,
}

impl Catalog {
    pub fn new(races: Vec<RaceEntry>, careers: Vec<CareerEntry>) -> Self {
        Self { races, careers }
    }

    /// The races and careers shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_RACES, BUILTIN_CAREERS)
    }

    /// Load from JSON arrays in the same format as the built-in data.
    pub fn from_json(races: &str, careers: &str) -> Result<Self, CatalogError> {
        let races = serde_json::from_str(races).map_err(CatalogError::Races)?;
        let careers = serde_json::from_str(careers).map_err(CatalogError::Careers)?;
        Ok(Self { races, careers })
    }

    pub fn race(&self, id: &str) -> Option<&RaceEntry> {
        self.races.iter().find(|r| r.id.as_str() == id)
    }

    pub fn career(&self, id: &str) -> Option<&CareerEntry> {
        self.careers.iter().find(|c| c.id.as_str() == id)
    }

    pub fn races(&self) -> &[RaceEntry] {
        &self.races
    }

    pub fn careers(&self) -> &[CareerEntry] {
        &self.careers
    }

    /// Careers a new character can start in.
    pub fn basic_careers(&self) -> impl Iterator<Item = &CareerEntry> {
        self.careers.iter().filter(|c| c.is_basic())
    }
}
