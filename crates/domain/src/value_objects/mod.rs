//! Value objects for character creation.
//!
//! Small, immutable-by-default types with no identity: dice, roll tables,
//! characteristic blocks, and the secondary attributes derived from them.

mod characteristics;
mod derived_attributes;
mod dice;
mod experience;
mod named_ability;
mod roll_table;

pub use characteristics::{Characteristic, Characteristics, BASELINE_CHARACTERISTIC};
pub use derived_attributes::{DerivedAttributes, UNROLLED};
pub use dice::{d10, d100, two_d10};
pub use experience::Experience;
pub use named_ability::NamedAbility;
pub use roll_table::{RollTable, TableBand, TableError, TableRoll, D10_RANGE};
