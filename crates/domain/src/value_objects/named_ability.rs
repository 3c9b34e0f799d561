//! Skill and talent references (`Speak Language (Reikspiel)`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A skill or talent by name, with an optional specialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedAbility {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,
}

impl NamedAbility {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: None,
        }
    }

    pub fn specialized(name: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec: Some(spec.into()),
        }
    }
}

impl fmt::Display for NamedAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.spec {
            Some(spec) => write!(f, "{} ({})", self.name, spec),
            None => f.write_str(&self.name),
        }
    }
}
