//! Roll tables: d10 results mapped to outcomes through inclusive bands.
//!
//! Race wounds and fate are not formulas, they are looked up on a table
//! such as `1-3 → 10, 4-6 → 11, 7-9 → 12, 10 → 13`. Tables are authored
//! data, so resolution never fails at runtime; [`RollTable::validate`] is
//! the offline check that keeps malformed tables from shipping.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dice::d10;

/// Inclusive die range of a d10.
pub const D10_RANGE: (u32, u32) = (1, 10);

/// Authoring defects found in a roll table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Roll table has no bands")]
    Empty,
    #[error("Band {min}-{max} has min greater than max")]
    InvertedBand { min: u32, max: u32 },
    #[error("Table starts at {found}, expected {expected}")]
    DoesNotStartAtMin { expected: u32, found: u32 },
    #[error("Gap in table: no band covers {from}-{to}")]
    Gap { from: u32, to: u32 },
    #[error("Bands overlap at {at}")]
    Overlap { at: u32 },
    #[error("Table ends at {found}, expected {expected}")]
    DoesNotReachMax { expected: u32, found: u32 },
}

/// One `[min, max] → outcome` band. Serialized as `[min, max, outcome]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32, u32)", into = "(u32, u32, u32)")]
pub struct TableBand {
    pub min: u32,
    pub max: u32,
    pub outcome: u32,
}

impl TableBand {
    pub const fn new(min: u32, max: u32, outcome: u32) -> Self {
        Self { min, max, outcome }
    }

    pub fn contains(&self, roll: u32) -> bool {
        self.min <= roll && roll <= self.max
    }

    /// Number of die faces this band covers.
    pub fn width(&self) -> u32 {
        self.max.saturating_sub(self.min) + 1
    }
}

impl From<(u32, u32, u32)> for TableBand {
    fn from((min, max, outcome): (u32, u32, u32)) -> Self {
        Self { min, max, outcome }
    }
}

impl From<TableBand> for (u32, u32, u32) {
    fn from(band: TableBand) -> Self {
        (band.min, band.max, band.outcome)
    }
}

/// A raw die roll together with the table value it produced.
///
/// Kept on the draft so the sheet can show why wounds or fate are what
/// they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRoll {
    pub roll: u32,
    pub value: u32,
}

impl TableRoll {
    pub const fn new(roll: u32, value: u32) -> Self {
        Self { roll, value }
    }
}

/// Ordered bands expected to partition the die range in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollTable(Vec<TableBand>);

impl RollTable {
    pub fn new(bands: Vec<TableBand>) -> Self {
        Self(bands)
    }

    pub fn bands(&self) -> &[TableBand] {
        &self.0
    }

    /// Outcome of the first band containing `roll`.
    ///
    /// Falls back to the last band's outcome when nothing matches so that
    /// a data defect never blocks character creation. An empty table
    /// resolves to 0.
    pub fn resolve(&self, roll: u32) -> u32 {
        self.0
            .iter()
            .find(|band| band.contains(roll))
            .or_else(|| self.0.last())
            .map(|band| band.outcome)
            .unwrap_or(0)
    }

    /// Roll a d10 against this table.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> TableRoll {
        let roll = d10(rng);
        TableRoll::new(roll, self.resolve(roll))
    }

    /// Check that the bands cover `[die_min, die_max]` exactly once, in order.
    pub fn validate(&self, die_min: u32, die_max: u32) -> Result<(), TableError> {
        let first = self.0.first().ok_or(TableError::Empty)?;
        if first.min != die_min {
            return Err(TableError::DoesNotStartAtMin {
                expected: die_min,
                found: first.min,
            });
        }

        let mut next = die_min;
        for band in &self.0 {
            if band.min > band.max {
                return Err(TableError::InvertedBand {
                    min: band.min,
                    max: band.max,
                });
            }
            if band.min > next {
                return Err(TableError::Gap {
                    from: next,
                    to: band.min - 1,
                });
            }
            if band.min < next {
                return Err(TableError::Overlap { at: band.min });
            }
            next = band.max + 1;
        }

        let last = next - 1;
        if last != die_max {
            return Err(TableError::DoesNotReachMax {
                expected: die_max,
                found: last,
            });
        }
        Ok(())
    }

    /// Sum of band widths, equal to the die range on a well-formed table.
    pub fn coverage(&self) -> u32 {
        self.0.iter().map(TableBand::width).sum()
    }
}

impl From<Vec<(u32, u32, u32)>> for RollTable {
    fn from(bands: Vec<(u32, u32, u32)>) -> Self {
        Self(bands.into_iter().map(TableBand::from).collect())
    }
}
