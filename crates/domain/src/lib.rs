//! Character-creation rules.
//!
//! Pure domain code: dice, race tables, the race/career catalog, derived
//! attributes, and the draft reducer. No I/O and no clock reads; callers
//! inject randomness (`&mut impl rand::Rng`) and time (`DateTime<Utc>`).

pub mod aggregates;
pub mod catalog;
pub mod character_sheet;
pub mod derivation;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{
    reduce, CharacterDraft, DraftAction, DraftContext, DraftState, StatEditPolicy,
    PLACEHOLDER_NAME,
};
pub use catalog::{
    validate_catalog, CareerEntry, CareerType, Catalog, CatalogError, CatalogReport, RaceEntry,
};
pub use character_sheet::CharacteristicSheet;
pub use derivation::{calculate_bonus, calculate_derived};
pub use error::DomainError;
pub use ids::{CareerId, CharacterId, RaceId};
pub use value_objects::{
    d10, d100, two_d10, Characteristic, Characteristics, DerivedAttributes, Experience,
    NamedAbility, RollTable, TableBand, TableRoll, UNROLLED,
};
