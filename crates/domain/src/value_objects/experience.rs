//! Experience totals.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// XP earned and spent.
///
/// # Invariants
///
/// - `spent <= total`, enforced by [`Experience::new`] and on deserialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExperience", into = "RawExperience")]
pub struct Experience {
    total: u32,
    spent: u32,
}

impl Experience {
    pub fn new(total: u32, spent: u32) -> Result<Self, DomainError> {
        if spent > total {
            return Err(DomainError::validation(format!(
                "XP spent ({}) cannot exceed XP total ({})",
                spent, total
            )));
        }
        Ok(Self { total, spent })
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn spent(&self) -> u32 {
        self.spent
    }

    pub fn available(&self) -> u32 {
        self.total - self.spent
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExperience {
    xp_total: u32,
    xp_spent: u32,
}

impl TryFrom<RawExperience> for Experience {
    type Error = DomainError;

    fn try_from(raw: RawExperience) -> Result<Self, Self::Error> {
        Self::new(raw.xp_total, raw.xp_spent)
    }
}

impl From<Experience> for RawExperience {
    fn from(xp: Experience) -> Self {
        Self {
            xp_total: xp.total,
            xp_spent: xp.spent,
        }
    }
}
